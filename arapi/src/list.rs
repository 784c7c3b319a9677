//! The counted-list contract.
//!
//! A nullable list is `Option<Vec<T>>` on the Rust side: `None` travels as a
//! null list pointer, `Some(vec![])` as a pointer to `{0, null}`. The two are
//! never collapsed.

use arapi_sys::ARList;

use crate::arena::Arena;
use crate::error::{Error, Result};

/// Convert items into an arena-owned native list.
pub fn to_native_list<T, R: 'static>(
    arena: &mut Arena,
    items: &[T],
    mut convert: impl FnMut(&mut Arena, &T) -> Result<R>,
) -> Result<ARList<R>> {
    let raw = items
        .iter()
        .map(|item| convert(arena, item))
        .collect::<Result<Vec<R>>>()?;
    Ok(arena.list(raw))
}

/// Nullable variant of [`to_native_list`]: `None` yields a null pointer.
pub fn to_native_opt_list<T, R: 'static>(
    arena: &mut Arena,
    items: Option<&[T]>,
    convert: impl FnMut(&mut Arena, &T) -> Result<R>,
) -> Result<*mut ARList<R>> {
    match items {
        Some(items) => {
            let list = to_native_list(arena, items, convert)?;
            Ok(arena.boxed(list))
        }
        None => Ok(std::ptr::null_mut()),
    }
}

/// Decode every item of a native list.
///
/// # Safety
///
/// `raw` must describe `numItems` initialised elements (or be empty).
pub unsafe fn from_native_list<R, T>(
    raw: &ARList<R>,
    convert: impl FnMut(&R) -> Result<T>,
) -> Result<Vec<T>> {
    // SAFETY: per the caller.
    let items = unsafe { raw.as_slice() }.ok_or(Error::CorruptList(raw.len()))?;
    items.iter().map(convert).collect()
}

/// Nullable variant of [`from_native_list`]: a null pointer yields `None`.
///
/// # Safety
///
/// `raw` must be null or point to a list valid for [`from_native_list`].
pub unsafe fn from_native_opt_list<R, T>(
    raw: *const ARList<R>,
    convert: impl FnMut(&R) -> Result<T>,
) -> Result<Option<Vec<T>>> {
    if raw.is_null() {
        return Ok(None);
    }
    // SAFETY: non-null and valid per the caller.
    unsafe { from_native_list(&*raw, convert) }.map(Some)
}

/// Copy a list of plain values.
///
/// # Safety
///
/// As for [`from_native_list`].
pub unsafe fn copy_list<T: Copy>(raw: &ARList<T>) -> Result<Vec<T>> {
    // SAFETY: forwarded.
    unsafe { from_native_list(raw, |v| Ok(*v)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_empty_stay_distinct() {
        let mut arena = Arena::new();
        let null = to_native_opt_list::<u32, u32>(&mut arena, None, |_, v| Ok(*v)).unwrap();
        let empty = to_native_opt_list::<u32, u32>(&mut arena, Some(&[]), |_, v| Ok(*v)).unwrap();
        assert!(null.is_null());
        assert!(!empty.is_null());

        // SAFETY: both come from the arena above.
        unsafe {
            assert_eq!(from_native_opt_list(null, |v: &u32| Ok(*v)).unwrap(), None);
            assert_eq!(from_native_opt_list(empty, |v: &u32| Ok(*v)).unwrap(), Some(vec![]));
        }
    }

    #[test]
    fn items_are_converted_in_order() {
        let mut arena = Arena::new();
        let list = to_native_list(&mut arena, &[1u32, 2, 3], |_, v| Ok(v * 10)).unwrap();
        assert_eq!(list.numItems, 3);
        // SAFETY: arena-owned.
        assert_eq!(unsafe { copy_list(&list) }.unwrap(), vec![10, 20, 30]);
    }

    #[test]
    fn corrupt_list_is_reported() {
        let raw = ARList::<u32>::from_raw_parts(std::ptr::null_mut(), 2);
        // SAFETY: the null pointer is detected before any read.
        let err = unsafe { copy_list(&raw) }.unwrap_err();
        assert!(matches!(err, Error::CorruptList(2)));
    }

    #[test]
    fn conversion_errors_propagate() {
        let mut arena = Arena::new();
        let res = to_native_list(&mut arena, &[1u32, 2], |_, v| {
            if *v == 2 { Err(Error::UnsupportedValueKind(99)) } else { Ok(*v) }
        });
        assert!(matches!(res, Err(Error::UnsupportedValueKind(99))));
    }
}
