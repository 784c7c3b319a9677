use std::os::raw::c_char;

use arapi_sys::*;

use super::{MetaIn, MetaListsOut, MetaOut, owned_names};
use crate::arena::ref_or_null;
use crate::batch::{Batch, BatchItem};
use crate::error::Result;
use crate::ladder::EntryPoint;
use crate::list::copy_list;
use crate::records::{Decoder, Encoder, Image, ImagePatch};
use crate::release::Outputs;
use crate::session::Session;

/// Selects the images [`Session::list_images`] returns.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ImageFilter {
    /// Only images referenced by these schemas.
    pub schemas: Option<Vec<String>>,
    pub changed_since: i32,
    /// Only images of this format.
    pub kind: Option<String>,
}

impl Session {
    pub fn get_image(&self, name: &str) -> Result<Image> {
        let callee = self.callee(EntryPoint::GetImage)?;
        let mut enc = Encoder::new(self);
        let name_in = enc.name(name)?;

        let out = Outputs::new(self.frees());
        let data = out.alloc::<ARImageDataStruct>();
        let kind = out.alloc::<*mut c_char>();
        let checksum = out.alloc::<*mut c_char>();
        let description = out.alloc::<*mut c_char>();
        let meta = MetaOut::new(&out, true);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape; every output is a live slot.
            unsafe {
                callee.cast::<ARGetImageFn75>()(
                    ctrl,
                    name_in,
                    data.ptr(),
                    kind.ptr(),
                    meta.timestamp(),
                    checksum.ptr(),
                    description.ptr(),
                    meta.help(),
                    meta.owner(),
                    meta.diary(),
                    meta.last_changed(),
                    meta.props(),
                    status,
                )
            }
        })?;

        let dec = Decoder::new(self);
        // SAFETY: the outputs were filled in by a successful call.
        unsafe {
            Ok(Image {
                name: name.to_string(),
                kind: dec.text(*kind.get())?,
                description: dec.opt_text(*description.get())?,
                checksum: dec.opt_text(*checksum.get())?,
                data: copy_list(data.get())?,
                meta: meta.decode(&dec)?,
            })
        }
    }

    pub fn create_image(&self, image: &Image) -> Result<()> {
        let callee = self.callee(EntryPoint::CreateImage)?;
        let mut enc = Encoder::new(self);
        let name = enc.name(&image.name)?;
        let data = enc.list(image.data.clone());
        let kind = enc.str(&image.kind)?;
        let description = enc.opt_str(image.description.as_deref())?;
        let meta = MetaIn::from_meta(&mut enc, &image.meta)?;

        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape; inputs live in `enc` and on this frame.
            unsafe {
                callee.cast::<ARCreateImageFn75>()(
                    ctrl,
                    name,
                    &data,
                    kind,
                    description,
                    meta.help,
                    meta.owner,
                    meta.diary,
                    meta.props,
                    status,
                )
            }
        })?;
        Ok(())
    }

    pub fn set_image(&self, name: &str, patch: &ImagePatch) -> Result<()> {
        let callee = self.callee(EntryPoint::SetImage)?;
        let mut enc = Encoder::new(self);
        let name = enc.name(name)?;
        let new_name = enc.opt_name(patch.new_name.as_deref())?;
        let data = patch.data.clone().map(|d| enc.list(d));
        let kind = enc.opt_str(patch.kind.as_deref())?;
        let description = enc.opt_str(patch.description.as_deref())?;
        let meta = MetaIn::encode(&mut enc, &patch.meta)?;
        let data = ref_or_null(data.as_ref());

        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape; inputs are null or live.
            unsafe {
                callee.cast::<ARSetImageFn75>()(
                    ctrl,
                    name,
                    new_name,
                    data,
                    kind,
                    description,
                    meta.help,
                    meta.owner,
                    meta.diary,
                    meta.props,
                    status,
                )
            }
        })?;
        Ok(())
    }

    /// Delete an image; `update_refs` also removes it from the forms that
    /// display it.
    pub fn delete_image(&self, name: &str, update_refs: bool) -> Result<()> {
        let callee = self.callee(EntryPoint::DeleteImage)?;
        let mut enc = Encoder::new(self);
        let name = enc.name(name)?;
        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape.
            unsafe { callee.cast::<ARDeleteImageFn75>()(ctrl, name, update_refs as ARBoolean, status) }
        })?;
        Ok(())
    }

    pub fn list_images(&self, filter: &ImageFilter) -> Result<Vec<String>> {
        let callee = self.callee(EntryPoint::GetListImage)?;
        let mut enc = Encoder::new(self);
        let schemas = enc.opt_names(filter.schemas.as_deref())?;
        let kind = enc.opt_str(filter.kind.as_deref())?;

        let out = Outputs::new(self.frees());
        let names = out.alloc::<ARNameList>();
        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape.
            unsafe {
                callee.cast::<ARGetListImageFn75>()(ctrl, schemas, filter.changed_since, kind, names.ptr(), status)
            }
        })?;
        // SAFETY: filled in by the call.
        unsafe { Decoder::new(self).names(names.get()) }
    }

    pub fn get_multiple_images(&self, names: &[&str]) -> Result<Vec<BatchItem<Image>>> {
        let callee = self.callee(EntryPoint::GetMultipleImages)?;
        if names.is_empty() {
            return Ok(Vec::new());
        }
        let keys = owned_names(names);
        let mut enc = Encoder::new(self);
        let wanted = enc.names(&keys)?;

        let out = Outputs::new(self.frees());
        let exist = out.alloc::<ARBooleanList>();
        let got = out.alloc::<ARNameList>();
        let kinds = out.alloc::<ARTextStringList>();
        let descriptions = out.alloc::<ARTextStringList>();
        let checksums = out.alloc::<ARTextStringList>();
        let data = out.alloc::<ARImageDataList>();
        let meta = MetaListsOut::new(&out, true);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape; every output is a live slot.
            unsafe {
                callee.cast::<ARGetMultipleImagesFn75>()(
                    ctrl,
                    0,
                    &wanted,
                    exist.ptr(),
                    got.ptr(),
                    kinds.ptr(),
                    meta.timestamp(),
                    descriptions.ptr(),
                    meta.help(),
                    meta.owner(),
                    meta.diary(),
                    meta.last_changed(),
                    meta.props(),
                    checksums.ptr(),
                    data.ptr(),
                    status,
                )
            }
        })?;

        let dec = Decoder::new(self);
        // SAFETY: the outputs were filled in by a successful call.
        unsafe {
            let batch = Batch::new(callee.entry(), &keys, exist.get())?;
            let got = batch.column(got.get())?;
            let kinds = batch.column(kinds.get())?;
            let descriptions = batch.column(descriptions.get())?;
            let checksums = batch.column(checksums.get())?;
            let data = batch.column(data.get())?;
            let meta = meta.columns(&batch)?;
            batch.zip(|i| {
                Ok(Image {
                    name: dec.name(got.at(i)?)?,
                    kind: dec.text(*kinds.at(i)?)?,
                    description: dec.opt_text(*descriptions.at(i)?)?,
                    checksum: dec.opt_text(*checksums.at(i)?)?,
                    data: copy_list(data.at(i)?)?,
                    meta: meta.at(i, &dec)?,
                })
            })
        }
    }
}
