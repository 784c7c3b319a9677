use arapi_sys::*;

use crate::batch::{Batch, BatchItem};
use crate::error::Result;
use crate::ladder::{EntryPoint, Revision};
use crate::list::from_native_list;
use crate::records::{
    Decoder, Encoder, EntryId, EntryList, EntryListField, EntryListItem, EntryQuery, FieldValue, SortItem,
};
use crate::release::Outputs;
use crate::session::Session;

impl Session {
    /// Create an entry and return the id the server assigned.
    pub fn create_entry(&self, schema: &str, values: &[FieldValue]) -> Result<EntryId> {
        let callee = self.callee(EntryPoint::CreateEntry)?;
        let mut enc = Encoder::new(self);
        let schema = enc.name(schema)?;
        let values = FieldValue::list_to_native(&mut enc, values)?;

        let out = Outputs::new(self.frees());
        let id = out.alloc::<AREntryIdType>();
        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape; `id` is a live buffer of the native size.
            unsafe { callee.cast::<ARCreateEntryFn>()(ctrl, schema, &values, id.ptr(), status) }
        })?;

        let dec = Decoder::new(self);
        Ok(EntryId::new(&dec.name(id.get())?))
    }

    /// Read an entry. `fields` limits the returned values; `None` reads all.
    pub fn get_entry(&self, schema: &str, id: &EntryId, fields: Option<&[u32]>) -> Result<Vec<FieldValue>> {
        let callee = self.callee(EntryPoint::GetEntry)?;
        let mut enc = Encoder::new(self);
        let schema = enc.name(schema)?;
        let id = id.to_native(&mut enc)?;
        let fields = enc.opt_list(fields.map(<[u32]>::to_vec));

        let out = Outputs::new(self.frees());
        let values = out.alloc::<ARFieldValueList>();
        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape.
            unsafe { callee.cast::<ARGetEntryFn>()(ctrl, schema, &id, fields, values.ptr(), status) }
        })?;

        // SAFETY: filled in by the call.
        unsafe { FieldValue::list_from_native(values.get(), &Decoder::new(self)) }
    }

    /// Update some fields of an entry.
    ///
    /// A non-zero `get_time` makes the server reject the update when the
    /// entry changed after that time.
    pub fn set_entry(
        &self,
        schema: &str,
        id: &EntryId,
        values: &[FieldValue],
        get_time: i32,
        option: u32,
    ) -> Result<()> {
        let callee = self.callee(EntryPoint::SetEntry)?;
        let mut enc = Encoder::new(self);
        let schema = enc.name(schema)?;
        let id = id.to_native(&mut enc)?;
        let values = FieldValue::list_to_native(&mut enc, values)?;
        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape.
            unsafe { callee.cast::<ARSetEntryFn>()(ctrl, schema, &id, &values, get_time, option, status) }
        })?;
        Ok(())
    }

    pub fn delete_entry(&self, schema: &str, id: &EntryId, option: u32) -> Result<()> {
        let callee = self.callee(EntryPoint::DeleteEntry)?;
        let mut enc = Encoder::new(self);
        let schema = enc.name(schema)?;
        let id = id.to_native(&mut enc)?;
        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape.
            unsafe { callee.cast::<ARDeleteEntryFn>()(ctrl, schema, &id, option, status) }
        })?;
        Ok(())
    }

    /// Search `schema` and return one short description per match.
    pub fn list_entries(&self, schema: &str, query: &EntryQuery) -> Result<EntryList> {
        let callee = self.callee(EntryPoint::GetListEntry)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let qual = enc.qualifier_ptr_or_empty(schema, query.qualifier.as_deref())?;
        let schema = enc.name(schema)?;
        let fields = EntryListField::list_to_native(&mut enc, &query.fields)?;
        let sort = SortItem::list_to_native(&mut enc, &query.sort);
        if query.use_locale && shape < Revision::V7_0 {
            log::debug!("{}: locale-aware search needs 7.0, ignoring", callee.entry());
        }

        let out = Outputs::new(self.frees());
        let entries = out.alloc::<AREntryListList>();
        let matches = out.alloc::<u32>();
        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; every output is a live slot.
            unsafe {
                match shape {
                    Revision::V7_0 => callee.cast::<ARGetListEntryFn70>()(
                        ctrl,
                        schema,
                        qual,
                        &fields,
                        &sort,
                        query.first,
                        query.max,
                        query.use_locale as ARBoolean,
                        entries.ptr(),
                        matches.ptr(),
                        status,
                    ),
                    _ => callee.cast::<ARGetListEntryFn51>()(
                        ctrl,
                        schema,
                        qual,
                        &fields,
                        &sort,
                        query.first,
                        query.max,
                        entries.ptr(),
                        matches.ptr(),
                        status,
                    ),
                }
            }
        })?;

        let dec = Decoder::new(self);
        // SAFETY: the outputs were filled in by a successful call.
        unsafe {
            Ok(EntryList {
                items: from_native_list(entries.get(), |e| EntryListItem::from_native(e, &dec))?,
                matches: *matches.get(),
            })
        }
    }

    /// Read several entries of one schema.
    pub fn get_multiple_entries(
        &self,
        schema: &str,
        ids: &[EntryId],
        fields: Option<&[u32]>,
    ) -> Result<Vec<BatchItem<Vec<FieldValue>, EntryId>>> {
        let callee = self.callee(EntryPoint::GetMultipleEntries)?;
        // The library reads an empty key list as "every object".
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut enc = Encoder::new(self);
        let schema = enc.name(schema)?;
        let wanted = enc.map_list(ids, |enc, id| id.to_native(enc))?;
        let fields = enc.opt_list(fields.map(<[u32]>::to_vec));

        let out = Outputs::new(self.frees());
        let exist = out.alloc::<ARBooleanList>();
        let values = out.alloc::<ARFieldValueListList>();
        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape.
            unsafe {
                callee.cast::<ARGetMultipleEntriesFn>()(ctrl, schema, &wanted, fields, exist.ptr(), values.ptr(), status)
            }
        })?;

        let dec = Decoder::new(self);
        // SAFETY: the outputs were filled in by a successful call.
        unsafe {
            let batch = Batch::new(callee.entry(), ids, exist.get())?;
            let values = batch.column(values.get())?;
            batch.zip(|i| FieldValue::list_from_native(values.at(i)?, &dec))
        }
    }
}
