use std::fmt;

use arapi_sys::*;
use serde::Serialize;

use super::{Decoder, EntryListField, Encoder, SortItem};
use crate::error::Result;
use crate::list::from_native_list;
use crate::value::Value;

/// Entry identifier; join entries carry one id per member.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct EntryId(pub Vec<String>);

impl EntryId {
    pub fn new(id: &str) -> Self {
        Self(vec![id.to_string()])
    }

    pub(crate) unsafe fn from_native(raw: &AREntryIdList, dec: &Decoder<'_>) -> Result<Self> {
        // SAFETY: forwarded.
        unsafe { from_native_list(raw, |id| dec.name(id)) }.map(Self)
    }

    pub(crate) fn to_native(&self, enc: &mut Encoder<'_>) -> Result<AREntryIdList> {
        let ids = self
            .0
            .iter()
            .map(|id| enc.name_buf::<{ AR_MAX_ENTRYID_SIZE + 1 }>(id))
            .collect::<Result<Vec<_>>>()?;
        Ok(enc.list(ids))
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("|"))
    }
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct FieldValue {
    pub field_id: u32,
    pub value: Value,
}

impl FieldValue {
    pub fn new(field_id: u32, value: Value) -> Self {
        Self { field_id, value }
    }

    pub(crate) unsafe fn from_native(raw: &ARFieldValueStruct, dec: &Decoder<'_>) -> Result<Self> {
        Ok(Self {
            field_id: raw.fieldId,
            // SAFETY: library output.
            value: unsafe { dec.value(&raw.value) }?,
        })
    }

    pub(crate) fn to_native(&self, enc: &mut Encoder<'_>) -> Result<ARFieldValueStruct> {
        Ok(ARFieldValueStruct {
            fieldId: self.field_id,
            value: enc.value(&self.value)?,
        })
    }

    /// # Safety
    ///
    /// `raw` must be a list filled in by the library.
    pub(crate) unsafe fn list_from_native(raw: &ARFieldValueList, dec: &Decoder<'_>) -> Result<Vec<Self>> {
        // SAFETY: forwarded.
        unsafe { from_native_list(raw, |v| Self::from_native(v, dec)) }
    }

    pub(crate) fn list_to_native(enc: &mut Encoder<'_>, values: &[Self]) -> Result<ARFieldValueList> {
        enc.map_list(values, |enc, v| v.to_native(enc))
    }
}

/// Search over the entries of a schema.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct EntryQuery {
    /// Query text; `None` matches every entry.
    pub qualifier: Option<String>,
    /// Columns of the short description; empty uses the schema's list.
    pub fields: Vec<EntryListField>,
    pub sort: Vec<SortItem>,
    pub first: u32,
    /// Zero asks for the server's default limit.
    pub max: u32,
    /// From 7.0.
    pub use_locale: bool,
}

impl EntryQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn matching(qualifier: &str) -> Self {
        Self {
            qualifier: Some(qualifier.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct EntryListItem {
    pub id: EntryId,
    pub description: String,
}

impl EntryListItem {
    pub(crate) unsafe fn from_native(raw: &AREntryListStruct, dec: &Decoder<'_>) -> Result<Self> {
        // SAFETY: library output.
        unsafe {
            Ok(Self {
                id: EntryId::from_native(&raw.entryId, dec)?,
                description: dec.text(raw.shortDesc)?,
            })
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct EntryList {
    pub items: Vec<EntryListItem>,
    /// Total matches, which may exceed `items.len()`.
    pub matches: u32,
}
