use arapi_sys::*;

use super::{MetaIn, MetaListsOut, MetaOut, owned_names};
use crate::arena::ref_or_null;
use crate::batch::{Batch, BatchItem};
use crate::error::Result;
use crate::ladder::{EntryPoint, Revision};
use crate::records::{CharMenu, CharMenuPatch, Decoder, Encoder, MenuDefinition, Property};
use crate::release::Outputs;
use crate::session::Session;

/// Selects the menus [`Session::list_char_menus`] returns.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct MenuFilter {
    pub changed_since: i32,
    /// Only menus used by fields of these schemas.
    pub schemas: Option<Vec<String>>,
    /// Only menus used by these active links.
    pub active_links: Option<Vec<String>>,
    /// Object properties to match, from 6.3.
    pub properties: Option<Vec<Property>>,
}

impl Session {
    pub fn get_char_menu(&self, name: &str) -> Result<CharMenu> {
        let callee = self.callee(EntryPoint::GetCharMenu)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name_in = enc.name(name)?;

        let out = Outputs::new(self.frees());
        let refresh = out.alloc::<u32>();
        let definition = out.alloc::<ARCharMenuStruct>();
        let meta = MetaOut::new(&out, shape >= Revision::V6_3);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; every output is a live slot.
            unsafe {
                match shape {
                    Revision::V6_3 => callee.cast::<ARGetCharMenuFn63>()(
                        ctrl,
                        name_in,
                        refresh.ptr(),
                        definition.ptr(),
                        meta.help(),
                        meta.timestamp(),
                        meta.owner(),
                        meta.last_changed(),
                        meta.diary(),
                        meta.props(),
                        status,
                    ),
                    _ => callee.cast::<ARGetCharMenuFn51>()(
                        ctrl,
                        name_in,
                        refresh.ptr(),
                        definition.ptr(),
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
            Ok(CharMenu {
                name: name.to_string(),
                refresh: *refresh.get(),
                definition: MenuDefinition::from_native(definition.get(), &dec)?,
                meta: meta.decode(&dec)?,
            })
        }
    }

    pub fn create_char_menu(&self, menu: &CharMenu) -> Result<()> {
        let callee = self.callee(EntryPoint::CreateCharMenu)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name = enc.name(&menu.name)?;
        let definition = menu.definition.to_native(&mut enc)?;
        let meta = MetaIn::from_meta(&mut enc, &menu.meta)?;

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; inputs live in `enc` and
            // on this frame.
            unsafe {
                match shape {
                    Revision::V6_3 => callee.cast::<ARCreateCharMenuFn63>()(
                        ctrl,
                        name,
                        menu.refresh,
                        &definition,
                        meta.help,
                        meta.owner,
                        meta.diary,
                        meta.props,
                        status,
                    ),
                    _ => callee.cast::<ARCreateCharMenuFn51>()(
                        ctrl,
                        name,
                        menu.refresh,
                        &definition,
                        meta.help,
                        meta.owner,
                        meta.diary,
                        status,
                    ),
                }
            }
        })?;
        Ok(())
    }

    pub fn set_char_menu(&self, name: &str, patch: &CharMenuPatch) -> Result<()> {
        let callee = self.callee(EntryPoint::SetCharMenu)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name = enc.name(name)?;
        let new_name = enc.opt_name(patch.new_name.as_deref())?;
        let definition = patch.definition.as_ref().map(|d| d.to_native(&mut enc)).transpose()?;
        let meta = MetaIn::encode(&mut enc, &patch.meta)?;
        let refresh = ref_or_null(patch.refresh.as_ref());
        let definition = ref_or_null(definition.as_ref());

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; inputs are null or live.
            unsafe {
                match shape {
                    Revision::V6_3 => callee.cast::<ARSetCharMenuFn63>()(
                        ctrl, name, new_name, refresh, definition, meta.help, meta.owner, meta.diary, meta.props,
                        status,
                    ),
                    _ => callee.cast::<ARSetCharMenuFn51>()(
                        ctrl, name, new_name, refresh, definition, meta.help, meta.owner, meta.diary, status,
                    ),
                }
            }
        })?;
        Ok(())
    }

    pub fn delete_char_menu(&self, name: &str, option: u32) -> Result<()> {
        let callee = self.callee(EntryPoint::DeleteCharMenu)?;
        let mut enc = Encoder::new(self);
        let name = enc.name(name)?;
        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape.
            unsafe { callee.cast::<ARDeleteCharMenuFn>()(ctrl, name, option, status) }
        })?;
        Ok(())
    }

    pub fn list_char_menus(&self, filter: &MenuFilter) -> Result<Vec<String>> {
        let callee = self.callee(EntryPoint::GetListCharMenu)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let schemas = enc.opt_names(filter.schemas.as_deref())?;
        let links = enc.opt_names(filter.active_links.as_deref())?;
        let props = enc.opt_props(filter.properties.as_deref())?;

        let out = Outputs::new(self.frees());
        let names = out.alloc::<ARNameList>();
        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape.
            unsafe {
                match shape {
                    Revision::V6_3 => callee.cast::<ARGetListCharMenuFn63>()(
                        ctrl,
                        filter.changed_since,
                        schemas,
                        links,
                        props,
                        names.ptr(),
                        status,
                    ),
                    _ => callee.cast::<ARGetListCharMenuFn51>()(
                        ctrl,
                        filter.changed_since,
                        schemas,
                        links,
                        names.ptr(),
                        status,
                    ),
                }
            }
        })?;
        // SAFETY: filled in by the call.
        unsafe { Decoder::new(self).names(names.get()) }
    }

    pub fn get_multiple_char_menus(&self, names: &[&str]) -> Result<Vec<BatchItem<CharMenu>>> {
        let callee = self.callee(EntryPoint::GetMultipleCharMenus)?;
        if names.is_empty() {
            return Ok(Vec::new());
        }
        let keys = owned_names(names);
        let mut enc = Encoder::new(self);
        let wanted = enc.names(&keys)?;

        let out = Outputs::new(self.frees());
        let exist = out.alloc::<ARBooleanList>();
        let got = out.alloc::<ARNameList>();
        let refreshes = out.alloc::<ARUnsignedIntList>();
        let definitions = out.alloc::<ARCharMenuStructList>();
        let meta = MetaListsOut::new(&out, true);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape; every output is a live slot.
            unsafe {
                callee.cast::<ARGetMultipleCharMenusFn63>()(
                    ctrl,
                    0,
                    &wanted,
                    exist.ptr(),
                    got.ptr(),
                    refreshes.ptr(),
                    definitions.ptr(),
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
            let batch = Batch::new(callee.entry(), &keys, exist.get())?;
            let got = batch.column(got.get())?;
            let refreshes = batch.column(refreshes.get())?;
            let definitions = batch.column(definitions.get())?;
            let meta = meta.columns(&batch)?;
            batch.zip(|i| {
                Ok(CharMenu {
                    name: dec.name(got.at(i)?)?,
                    refresh: *refreshes.at(i)?,
                    definition: MenuDefinition::from_native(definitions.at(i)?, &dec)?,
                    meta: meta.at(i, &dec)?,
                })
            })
        }
    }
}
