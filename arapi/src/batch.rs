//! Zipping the parallel output lists of `GetMultiple*` calls.
//!
//! A batch call returns `existList` plus one list per attribute, each with
//! one element per requested key. Missing items stay in place as
//! [`BatchItem::Missing`] so indices line up with the request.

use serde::Serialize;

use arapi_sys::{ARBoolean, ARList};

use crate::error::{Error, Result};
use crate::ladder::EntryPoint;

/// One result of a batch call.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(tag = "status", content = "item", rename_all = "kebab-case")]
pub enum BatchItem<T, K = String> {
    Found(T),
    Missing { key: K },
}

impl<T, K> BatchItem<T, K> {
    pub fn found(&self) -> Option<&T> {
        match self {
            BatchItem::Found(t) => Some(t),
            BatchItem::Missing { .. } => None,
        }
    }

    pub fn into_found(self) -> Option<T> {
        match self {
            BatchItem::Found(t) => Some(t),
            BatchItem::Missing { .. } => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, BatchItem::Missing { .. })
    }
}

/// Column view over the parallel lists of one batch response.
pub(crate) struct Batch<'a, K> {
    entry: EntryPoint,
    keys: &'a [K],
    exists: &'a [ARBoolean],
}

impl<'a, K: Clone + std::fmt::Display> Batch<'a, K> {
    /// # Safety
    ///
    /// `exist` must be a list filled in by the native library.
    pub(crate) unsafe fn new(entry: EntryPoint, keys: &'a [K], exist: &'a ARList<ARBoolean>) -> Result<Self> {
        // SAFETY: per the caller.
        let exists = unsafe { exist.as_slice() }.ok_or(Error::CorruptList(exist.len()))?;
        if exists.len() != keys.len() {
            return Err(Error::BatchShape {
                entry,
                expected: keys.len(),
                got: exists.len(),
            });
        }
        Ok(Self { entry, keys, exists })
    }

    /// View one parallel attribute list, checking its length.
    ///
    /// A list with no items is accepted when no requested item exists, the
    /// library leaves the columns empty then.
    ///
    /// # Safety
    ///
    /// `column` must be a list filled in by the native library.
    pub(crate) unsafe fn column<'c, T>(&self, column: &'c ARList<T>) -> Result<Column<'c, T>> {
        // SAFETY: per the caller.
        let items = unsafe { column.as_slice() }.ok_or(Error::CorruptList(column.len()))?;
        if items.len() == self.keys.len() || (items.is_empty() && self.exists.iter().all(|&e| e == 0)) {
            return Ok(Column(items));
        }
        Err(Error::BatchShape {
            entry: self.entry,
            expected: self.keys.len(),
            got: items.len(),
        })
    }

    /// A column that the active shape may not carry: `None` passes through.
    ///
    /// # Safety
    ///
    /// As for [`column`](Self::column).
    pub(crate) unsafe fn opt_column<'c, T>(&self, column: Option<&'c ARList<T>>) -> Result<Option<Column<'c, T>>> {
        column
            // SAFETY: forwarded.
            .map(|c| unsafe { self.column(c) })
            .transpose()
    }

    /// Build one item per key; `decode` runs only for existing items.
    pub(crate) fn zip<T>(&self, mut decode: impl FnMut(usize) -> Result<T>) -> Result<Vec<BatchItem<T, K>>> {
        let mut out = Vec::with_capacity(self.keys.len());
        for (i, key) in self.keys.iter().enumerate() {
            if self.exists[i] != 0 {
                out.push(BatchItem::Found(decode(i)?));
            } else {
                log::warn!("{}: '{key}' does not exist", self.entry);
                out.push(BatchItem::Missing { key: key.clone() });
            }
        }
        Ok(out)
    }
}

/// One checked parallel list.
#[derive(Clone, Copy)]
pub(crate) struct Column<'c, T>(&'c [T]);

impl<'c, T> Column<'c, T> {
    pub(crate) fn at(&self, i: usize) -> Result<&'c T> {
        self.0.get(i).ok_or(Error::CorruptList(i))
    }

    pub(crate) fn opt_at(col: &Option<Column<'c, T>>, i: usize) -> Result<Option<&'c T>> {
        col.as_ref().map(|c| c.at(i)).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list<T>(items: &mut [T]) -> ARList<T> {
        ARList::from_raw_parts(items.as_mut_ptr(), items.len() as u32)
    }

    #[test]
    fn missing_item_keeps_its_slot() {
        let keys = vec!["A".to_string(), "Nope".to_string(), "C".to_string()];
        let mut exist = [1u8, 0, 1];
        let mut ids = [10u32, 0, 30];
        let exist = list(&mut exist);
        let ids = list(&mut ids);
        // SAFETY: the arrays outlive the views.
        let batch = unsafe { Batch::new(EntryPoint::GetMultipleSchemas, &keys, &exist) }.unwrap();
        let col = unsafe { batch.column(&ids) }.unwrap();
        let items = batch.zip(|i| col.at(i).copied()).unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0], BatchItem::Found(10));
        assert_eq!(items[1], BatchItem::Missing { key: "Nope".into() });
        assert_eq!(items[2].found(), Some(&30));
    }

    #[test]
    fn short_column_is_a_shape_error() {
        let keys = vec![1u32, 2];
        let mut exist = [1u8, 1];
        let mut col = [5u32];
        let exist = list(&mut exist);
        let col = list(&mut col);
        // SAFETY: as above.
        let batch = unsafe { Batch::new(EntryPoint::GetMultipleFields, &keys, &exist) }.unwrap();
        let err = unsafe { batch.column(&col) }.err();
        assert!(matches!(err, Some(Error::BatchShape { expected: 2, got: 1, .. })));
    }

    #[test]
    fn empty_columns_when_nothing_exists() {
        let keys = vec![1u32, 2];
        let mut exist = [0u8, 0];
        let exist = list(&mut exist);
        let empty = ARList::<u32>::empty();
        // SAFETY: as above.
        let batch = unsafe { Batch::new(EntryPoint::GetMultipleFields, &keys, &exist) }.unwrap();
        assert!(unsafe { batch.column(&empty) }.is_ok());
        let items = batch.zip(|_| Ok(())).unwrap();
        assert!(items.iter().all(BatchItem::is_missing));
    }

    #[test]
    fn exist_list_length_must_match_keys() {
        let keys = vec![1u32, 2, 3];
        let mut exist = [1u8];
        let exist = list(&mut exist);
        // SAFETY: as above.
        let err = unsafe { Batch::new(EntryPoint::GetMultipleFields, &keys, &exist) }.err();
        assert!(matches!(err, Some(Error::BatchShape { expected: 3, got: 1, .. })));
    }
}
