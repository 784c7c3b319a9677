use arapi_sys::*;

use super::{MetaIn, MetaListsOut, MetaOut, slot};
use crate::batch::{Batch, BatchItem, Column};
use crate::error::Result;
use crate::ladder::{EntryPoint, Revision};
use crate::records::{Decoder, Encoder, Vui, VuiPatch, ids_from_native};
use crate::release::{Out, Outputs};
use crate::session::Session;
use crate::version::ApiVersion;

/// Libraries in this range fill the `GetMultipleVUIs` locale list with
/// garbage; it is left out there.
const LOCALE_DEFECT: std::ops::Range<ApiVersion> = ApiVersion::new(7, 5, 0)..ApiVersion::new(7, 6, 4);

fn opt_locale(dec: &Decoder<'_>, raw: &[std::os::raw::c_char]) -> Result<Option<String>> {
    let locale = dec.name(raw)?;
    Ok((!locale.is_empty()).then_some(locale))
}

impl Session {
    pub fn get_vui(&self, schema: &str, id: u32) -> Result<Vui> {
        let callee = self.callee(EntryPoint::GetVui)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let schema_in = enc.name(schema)?;

        let out = Outputs::new(self.frees());
        let name = out.alloc::<ARNameType>();
        let locale = out.alloc::<ARLocaleType>();
        let kind = out.alloc::<u32>();
        let props = out.alloc::<ARPropList>();
        let meta = MetaOut::new(&out, shape >= Revision::V6_3);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; every output is a live slot.
            unsafe {
                match shape {
                    Revision::V6_3 => callee.cast::<ARGetVUIFn63>()(
                        ctrl,
                        schema_in,
                        id,
                        name.ptr(),
                        locale.ptr(),
                        kind.ptr(),
                        props.ptr(),
                        meta.help(),
                        meta.timestamp(),
                        meta.owner(),
                        meta.last_changed(),
                        meta.diary(),
                        meta.props(),
                        status,
                    ),
                    _ => callee.cast::<ARGetVUIFn51>()(
                        ctrl,
                        schema_in,
                        id,
                        name.ptr(),
                        locale.ptr(),
                        kind.ptr(),
                        props.ptr(),
                        meta.help(),
                        meta.timestamp(),
                        meta.owner(),
                        meta.last_changed(),
                        meta.diary(),
                        status,
                    ),
                }
            }
        })?;

        let dec = Decoder::new(self);
        // SAFETY: the outputs were filled in by a successful call.
        unsafe {
            Ok(Vui {
                schema: schema.to_string(),
                id,
                name: dec.name(name.get())?,
                locale: opt_locale(&dec, locale.get())?,
                kind: *kind.get(),
                properties: dec.props(props.get())?,
                meta: meta.decode(&dec)?,
            })
        }
    }

    /// Create a view and return its id; `vui.id == 0` lets the server pick.
    pub fn create_vui(&self, vui: &Vui) -> Result<u32> {
        let callee = self.callee(EntryPoint::CreateVui)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let schema = enc.name(&vui.schema)?;
        let name = enc.name(&vui.name)?;
        let locale = enc.opt_str(vui.locale.as_deref())?;
        let props = enc.props(&vui.properties)?;
        let meta = MetaIn::from_meta(&mut enc, &vui.meta)?;
        let mut id = vui.id;

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; inputs live in `enc` and
            // on this frame.
            unsafe {
                match shape {
                    Revision::V6_3 => callee.cast::<ARCreateVUIFn63>()(
                        ctrl, schema, &mut id, name, locale, vui.kind, &props, meta.help, meta.owner, meta.diary,
                        meta.props, status,
                    ),
                    _ => callee.cast::<ARCreateVUIFn51>()(
                        ctrl, schema, &mut id, name, locale, vui.kind, &props, meta.help, meta.owner, meta.diary,
                        status,
                    ),
                }
            }
        })?;
        Ok(id)
    }

    pub fn set_vui(&self, schema: &str, id: u32, patch: &VuiPatch) -> Result<()> {
        let callee = self.callee(EntryPoint::SetVui)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let schema = enc.name(schema)?;
        let name = enc.opt_name(patch.name.as_deref())?;
        let locale = enc.opt_str(patch.locale.as_deref())?;
        let props = enc.opt_props(patch.properties.as_deref())?;
        let meta = MetaIn::encode(&mut enc, &patch.meta)?;
        let kind = crate::arena::ref_or_null(patch.kind.as_ref());

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; inputs are null or live.
            unsafe {
                match shape {
                    Revision::V6_3 => callee.cast::<ARSetVUIFn63>()(
                        ctrl, schema, id, name, locale, kind, props, meta.help, meta.owner, meta.diary, meta.props,
                        status,
                    ),
                    _ => callee.cast::<ARSetVUIFn51>()(
                        ctrl, schema, id, name, locale, kind, props, meta.help, meta.owner, meta.diary, status,
                    ),
                }
            }
        })?;
        Ok(())
    }

    pub fn delete_vui(&self, schema: &str, id: u32) -> Result<()> {
        let callee = self.callee(EntryPoint::DeleteVui)?;
        let mut enc = Encoder::new(self);
        let schema = enc.name(schema)?;
        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape.
            unsafe { callee.cast::<ARDeleteVUIFn>()(ctrl, schema, id, status) }
        })?;
        Ok(())
    }

    /// Ids of the views of `schema`.
    pub fn list_vuis(&self, schema: &str, changed_since: i32) -> Result<Vec<u32>> {
        let callee = self.callee(EntryPoint::GetListVui)?;
        let mut enc = Encoder::new(self);
        let schema = enc.name(schema)?;

        let out = Outputs::new(self.frees());
        let ids = out.alloc::<ARInternalIdList>();
        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape.
            unsafe { callee.cast::<ARGetListVUIFn>()(ctrl, schema, changed_since, ids.ptr(), status) }
        })?;
        // SAFETY: filled in by the call.
        unsafe { ids_from_native(ids.get()) }
    }

    /// Fetch several views of one schema.
    ///
    /// On libraries between 7.5 and 7.6.04 the locale list is not requested
    /// and every returned view has `locale: None`.
    pub fn get_multiple_vuis(&self, schema: &str, ids: &[u32]) -> Result<Vec<BatchItem<Vui, u32>>> {
        let callee = self.callee(EntryPoint::GetMultipleVuis)?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let version = self.binding().version();
        let skip_locales = LOCALE_DEFECT.contains(&version);
        if skip_locales {
            log::warn!("library {version} misreports VUI locales; leaving them out");
        }
        let mut enc = Encoder::new(self);
        let schema_in = enc.name(schema)?;
        let wanted = enc.list(ids.to_vec());

        let out = Outputs::new(self.frees());
        let exist = out.alloc::<ARBooleanList>();
        let got = out.alloc::<ARInternalIdList>();
        let names = out.alloc::<ARNameList>();
        let locales = (!skip_locales).then(|| out.alloc::<ARLocaleList>());
        let kinds = out.alloc::<ARUnsignedIntList>();
        let props = out.alloc::<ARPropListList>();
        let meta = MetaListsOut::new(&out, true);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape; every output is a live slot or null.
            unsafe {
                callee.cast::<ARGetMultipleVUIsFn63>()(
                    ctrl,
                    schema_in,
                    &wanted,
                    0,
                    exist.ptr(),
                    got.ptr(),
                    names.ptr(),
                    slot(locales),
                    kinds.ptr(),
                    props.ptr(),
                    meta.help(),
                    meta.timestamp(),
                    meta.owner(),
                    meta.last_changed(),
                    meta.diary(),
                    meta.props(),
                    status,
                )
            }
        })?;

        let dec = Decoder::new(self);
        // SAFETY: the outputs were filled in by a successful call.
        unsafe {
            let batch = Batch::new(callee.entry(), ids, exist.get())?;
            let got = batch.column(got.get())?;
            let names = batch.column(names.get())?;
            let locales = batch.opt_column(locales.map(Out::get))?;
            let kinds = batch.column(kinds.get())?;
            let props = batch.column(props.get())?;
            let meta = meta.columns(&batch)?;
            batch.zip(|i| {
                let locale = match Column::opt_at(&locales, i)? {
                    Some(raw) => opt_locale(&dec, raw)?,
                    None => None,
                };
                Ok(Vui {
                    schema: schema.to_string(),
                    id: *got.at(i)?,
                    name: dec.name(names.at(i)?)?,
                    locale,
                    kind: *kinds.at(i)?,
                    properties: dec.props(props.at(i)?)?,
                    meta: meta.at(i, &dec)?,
                })
            })
        }
    }
}
