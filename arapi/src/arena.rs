//! Rust-owned storage for native call inputs.

use std::any::Any;
use std::ffi::CString;
use std::os::raw::{c_char, c_uint};

use arapi_sys::ARList;

use crate::codec::Codec;
use crate::error::{Error, Result};

/// Keeps every input built for one call alive until the call returns.
///
/// Pointers handed out stay valid for the arena's lifetime: strings and
/// boxes are heap allocations that do not move when the arena grows.
#[derive(Default)]
pub struct Arena {
    strings: Vec<CString>,
    blocks: Vec<Box<dyn Any>>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode and store a string.
    pub fn str(&mut self, codec: &Codec, s: &str) -> Result<*mut c_char> {
        let bytes = codec.encode(s)?;
        let c = CString::new(bytes).map_err(|_| Error::InteriorNul)?;
        let ptr = c.as_ptr() as *mut c_char;
        self.strings.push(c);
        Ok(ptr)
    }

    /// Like [`str`](Self::str), but `None` becomes a null pointer.
    pub fn opt_str(&mut self, codec: &Codec, s: Option<&str>) -> Result<*mut c_char> {
        match s {
            Some(s) => self.str(codec, s),
            None => Ok(std::ptr::null_mut()),
        }
    }

    /// Store a value and return a stable pointer to it.
    pub fn boxed<T: 'static>(&mut self, value: T) -> *mut T {
        let mut b = Box::new(value);
        let ptr: *mut T = &mut *b;
        self.blocks.push(b);
        ptr
    }

    /// `None` becomes a null pointer.
    pub fn opt_boxed<T: 'static>(&mut self, value: Option<T>) -> *mut T {
        match value {
            Some(v) => self.boxed(v),
            None => std::ptr::null_mut(),
        }
    }

    /// Store items and build the counted list pointing at them.
    pub fn list<T: 'static>(&mut self, items: Vec<T>) -> ARList<T> {
        if items.is_empty() {
            return ARList::empty();
        }
        let mut items = items.into_boxed_slice();
        let len = items.len() as c_uint;
        let ptr = items.as_mut_ptr();
        self.blocks.push(Box::new(items));
        ARList::from_raw_parts(ptr, len)
    }

    /// A stored list, or a null list pointer for `None`.
    pub fn opt_list<T: 'static>(&mut self, items: Option<Vec<T>>) -> *mut ARList<T> {
        match items {
            Some(items) => {
                let list = self.list(items);
                self.boxed(list)
            }
            None => std::ptr::null_mut(),
        }
    }
}

/// Pointer to a supplied input, or native null when absent.
pub fn ref_or_null<T>(value: Option<&T>) -> *const T {
    value.map_or(std::ptr::null(), |v| v as *const T)
}

/// Mutable variant of [`ref_or_null`].
pub fn mut_or_null<T>(value: Option<&mut T>) -> *mut T {
    value.map_or(std::ptr::null_mut(), |v| v as *mut T)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn strings_survive_growth() {
        let codec = Codec::default();
        let mut arena = Arena::new();
        let first = arena.str(&codec, "first").unwrap();
        for i in 0..100 {
            arena.str(&codec, &i.to_string()).unwrap();
        }
        // SAFETY: the arena is alive.
        assert_eq!(unsafe { CStr::from_ptr(first) }.to_str().unwrap(), "first");
    }

    #[test]
    fn absent_inputs_are_null() {
        let codec = Codec::default();
        let mut arena = Arena::new();
        assert!(arena.opt_str(&codec, None).unwrap().is_null());
        assert!(arena.opt_boxed::<u32>(None).is_null());
        assert!(arena.opt_list::<u32>(None).is_null());
        assert!(ref_or_null::<u32>(None).is_null());
        assert!(mut_or_null::<u32>(None).is_null());
    }

    #[test]
    fn empty_list_is_not_null() {
        let mut arena = Arena::new();
        let list = arena.opt_list::<u32>(Some(vec![]));
        assert!(!list.is_null());
        // SAFETY: the arena is alive.
        assert_eq!(unsafe { (*list).numItems }, 0);
    }

    #[test]
    fn list_points_at_items() {
        let mut arena = Arena::new();
        let list = arena.list(vec![3u32, 4, 5]);
        // SAFETY: the arena is alive.
        assert_eq!(unsafe { list.as_slice() }, Some(&[3u32, 4, 5][..]));
    }
}
