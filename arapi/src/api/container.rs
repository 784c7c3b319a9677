use std::os::raw::c_char;

use arapi_sys::*;

use super::{MetaIn, MetaListsOut, MetaOut, owned_names};
use crate::arena::ref_or_null;
use crate::batch::{Batch, BatchItem};
use crate::error::Result;
use crate::ladder::{EntryPoint, Revision};
use crate::list::from_native_list;
use crate::records::{
    Container, ContainerInfo, ContainerOwner, ContainerPatch, Decoder, Encoder, Permission, Property, Reference,
    ids_from_native,
};
use crate::release::Outputs;
use crate::session::Session;

/// Selects the containers [`Session::list_containers`] returns.
#[derive(Clone, PartialEq, Debug)]
pub struct ContainerFilter {
    pub changed_since: i32,
    /// Native container types; `[ARCON_ALL]` by default.
    pub kinds: Vec<i32>,
    /// Native attribute flags (hidden containers and the like).
    pub attributes: u32,
    /// Only containers owned by this object; every owner when `None`.
    pub owner: Option<ContainerOwner>,
    /// Object properties to match, from 8.0.
    pub properties: Option<Vec<Property>>,
}

impl Default for ContainerFilter {
    fn default() -> Self {
        Self {
            changed_since: 0,
            kinds: vec![ARCON_ALL],
            attributes: 0,
            owner: None,
            properties: None,
        }
    }
}

impl Session {
    /// Fetch a container with every reference it holds.
    pub fn get_container(&self, name: &str) -> Result<Container> {
        let callee = self.callee(EntryPoint::GetContainer)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name_in = enc.name(name)?;
        let ref_types = enc.list(vec![ARREF_ALL]);

        let out = Outputs::new(self.frees());
        let perms = out.alloc::<ARPermissionList>();
        let admins = out.alloc::<ARInternalIdList>();
        let owners = out.alloc::<ARContainerOwnerObjList>();
        let label = out.alloc::<*mut c_char>();
        let description = out.alloc::<*mut c_char>();
        let kind = out.alloc::<u32>();
        let references = out.alloc::<ARReferenceList>();
        let meta = MetaOut::new(&out, shape >= Revision::V8_0);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; every output is a live slot.
            unsafe {
                match shape {
                    Revision::V8_0 => callee.cast::<ARGetContainerFn80>()(
                        ctrl,
                        name_in,
                        &ref_types,
                        perms.ptr(),
                        admins.ptr(),
                        owners.ptr(),
                        label.ptr(),
                        description.ptr(),
                        kind.ptr(),
                        references.ptr(),
                        meta.help(),
                        meta.owner(),
                        meta.timestamp(),
                        meta.last_changed(),
                        meta.diary(),
                        meta.props(),
                        status,
                    ),
                    _ => callee.cast::<ARGetContainerFn51>()(
                        ctrl,
                        name_in,
                        &ref_types,
                        perms.ptr(),
                        admins.ptr(),
                        owners.ptr(),
                        label.ptr(),
                        description.ptr(),
                        kind.ptr(),
                        references.ptr(),
                        meta.help(),
                        meta.owner(),
                        meta.timestamp(),
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
            Ok(Container {
                name: name.to_string(),
                kind: *kind.get(),
                label: dec.opt_text(*label.get())?,
                description: dec.opt_text(*description.get())?,
                permissions: Permission::list_from_native(perms.get())?,
                admin_groups: ids_from_native(admins.get())?,
                owners: ContainerOwner::list_from_native(owners.get(), &dec)?,
                references: Reference::list_from_native(references.get(), &dec)?,
                meta: meta.decode(&dec)?,
            })
        }
    }

    pub fn create_container(&self, container: &Container) -> Result<()> {
        let callee = self.callee(EntryPoint::CreateContainer)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name = enc.name(&container.name)?;
        let perms = Permission::list_to_native(&mut enc, &container.permissions);
        let admins = enc.list(container.admin_groups.clone());
        let owners = ContainerOwner::list_to_native(&mut enc, &container.owners)?;
        let label = enc.opt_str(container.label.as_deref())?;
        let description = enc.opt_str(container.description.as_deref())?;
        let references = Reference::list_to_native(&mut enc, &container.references)?;
        let meta = MetaIn::from_meta(&mut enc, &container.meta)?;

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; inputs live in `enc` and
            // on this frame.
            unsafe {
                match shape {
                    Revision::V8_0 => callee.cast::<ARCreateContainerFn80>()(
                        ctrl,
                        name,
                        &perms,
                        &admins,
                        &owners,
                        label,
                        description,
                        container.kind,
                        &references,
                        FALSE,
                        meta.help,
                        meta.owner,
                        meta.diary,
                        meta.props,
                        status,
                    ),
                    _ => callee.cast::<ARCreateContainerFn51>()(
                        ctrl,
                        name,
                        &perms,
                        &admins,
                        &owners,
                        label,
                        description,
                        container.kind,
                        &references,
                        FALSE,
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

    pub fn set_container(&self, name: &str, patch: &ContainerPatch) -> Result<()> {
        let callee = self.callee(EntryPoint::SetContainer)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name = enc.name(name)?;
        let new_name = enc.opt_name(patch.new_name.as_deref())?;
        let perms = patch
            .permissions
            .as_deref()
            .map(|p| Permission::list_to_native(&mut enc, p));
        let admins = patch.admin_groups.clone().map(|a| enc.list(a));
        let owners = patch
            .owners
            .as_deref()
            .map(|o| ContainerOwner::list_to_native(&mut enc, o))
            .transpose()?;
        let label = enc.opt_str(patch.label.as_deref())?;
        let description = enc.opt_str(patch.description.as_deref())?;
        let references = patch
            .references
            .as_deref()
            .map(|r| Reference::list_to_native(&mut enc, r))
            .transpose()?;
        let meta = MetaIn::encode(&mut enc, &patch.meta)?;
        let remove = patch.remove_invalid_references as ARBoolean;

        let perms = ref_or_null(perms.as_ref());
        let admins = ref_or_null(admins.as_ref());
        let owners = ref_or_null(owners.as_ref());
        let kind = ref_or_null(patch.kind.as_ref());
        let references = ref_or_null(references.as_ref());

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; inputs are null or live.
            unsafe {
                match shape {
                    Revision::V8_0 => callee.cast::<ARSetContainerFn80>()(
                        ctrl,
                        name,
                        new_name,
                        perms,
                        admins,
                        owners,
                        label,
                        description,
                        kind,
                        references,
                        remove,
                        meta.help,
                        meta.owner,
                        meta.diary,
                        meta.props,
                        status,
                    ),
                    _ => callee.cast::<ARSetContainerFn51>()(
                        ctrl,
                        name,
                        new_name,
                        perms,
                        admins,
                        owners,
                        label,
                        description,
                        kind,
                        references,
                        remove,
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

    pub fn delete_container(&self, name: &str, option: u32) -> Result<()> {
        let callee = self.callee(EntryPoint::DeleteContainer)?;
        let mut enc = Encoder::new(self);
        let name = enc.name(name)?;
        self.invoke(callee, |ctrl, status| {
            // SAFETY: every shape shares this signature.
            unsafe { callee.cast::<ARDeleteContainerFn>()(ctrl, name, option, status) }
        })?;
        Ok(())
    }

    pub fn list_containers(&self, filter: &ContainerFilter) -> Result<Vec<ContainerInfo>> {
        let callee = self.callee(EntryPoint::GetListContainer)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let kinds = enc.list(filter.kinds.clone());
        let owner = filter.owner.as_ref().map(|o| o.to_native(&enc)).transpose()?;
        let props = enc.opt_props(filter.properties.as_deref())?;
        let owner = ref_or_null(owner.as_ref());

        let out = Outputs::new(self.frees());
        let infos = out.alloc::<ARContainerInfoList>();
        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape.
            unsafe {
                match shape {
                    Revision::V8_0 => callee.cast::<ARGetListContainerFn80>()(
                        ctrl,
                        filter.changed_since,
                        &kinds,
                        filter.attributes,
                        owner,
                        props,
                        infos.ptr(),
                        status,
                    ),
                    _ => callee.cast::<ARGetListContainerFn51>()(
                        ctrl,
                        filter.changed_since,
                        &kinds,
                        filter.attributes,
                        owner,
                        infos.ptr(),
                        status,
                    ),
                }
            }
        })?;
        let dec = Decoder::new(self);
        // SAFETY: filled in by the call.
        unsafe { from_native_list(infos.get(), |info| ContainerInfo::from_native(info, &dec)) }
    }

    pub fn get_multiple_containers(&self, names: &[&str]) -> Result<Vec<BatchItem<Container>>> {
        let callee = self.callee(EntryPoint::GetMultipleContainers)?;
        if names.is_empty() {
            return Ok(Vec::new());
        }
        let shape = callee.shape();
        let keys = owned_names(names);
        let mut enc = Encoder::new(self);
        let wanted = enc.names(&keys)?;
        let ref_types = enc.list(vec![ARREF_ALL]);

        let out = Outputs::new(self.frees());
        let exist = out.alloc::<ARBooleanList>();
        let got = out.alloc::<ARNameList>();
        let perms = out.alloc::<ARPermissionListList>();
        let admins = out.alloc::<ARInternalIdListList>();
        let owners = out.alloc::<ARContainerOwnerObjListList>();
        let labels = out.alloc::<ARTextStringList>();
        let descriptions = out.alloc::<ARTextStringList>();
        let kinds = out.alloc::<ARUnsignedIntList>();
        let references = out.alloc::<ARReferenceListList>();
        let meta = MetaListsOut::new(&out, shape >= Revision::V8_0);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; every output is a live slot.
            unsafe {
                match shape {
                    Revision::V8_0 => callee.cast::<ARGetMultipleContainersFn80>()(
                        ctrl,
                        0,
                        &wanted,
                        &ref_types,
                        exist.ptr(),
                        got.ptr(),
                        perms.ptr(),
                        admins.ptr(),
                        owners.ptr(),
                        labels.ptr(),
                        descriptions.ptr(),
                        kinds.ptr(),
                        references.ptr(),
                        meta.help(),
                        meta.owner(),
                        meta.timestamp(),
                        meta.last_changed(),
                        meta.diary(),
                        meta.props(),
                        status,
                    ),
                    _ => callee.cast::<ARGetMultipleContainersFn63>()(
                        ctrl,
                        0,
                        &wanted,
                        &ref_types,
                        exist.ptr(),
                        got.ptr(),
                        perms.ptr(),
                        admins.ptr(),
                        owners.ptr(),
                        labels.ptr(),
                        descriptions.ptr(),
                        kinds.ptr(),
                        references.ptr(),
                        meta.help(),
                        meta.owner(),
                        meta.timestamp(),
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
            let batch = Batch::new(callee.entry(), &keys, exist.get())?;
            let got = batch.column(got.get())?;
            let perms = batch.column(perms.get())?;
            let admins = batch.column(admins.get())?;
            let owners = batch.column(owners.get())?;
            let labels = batch.column(labels.get())?;
            let descriptions = batch.column(descriptions.get())?;
            let kinds = batch.column(kinds.get())?;
            let references = batch.column(references.get())?;
            let meta = meta.columns(&batch)?;
            batch.zip(|i| {
                Ok(Container {
                    name: dec.name(got.at(i)?)?,
                    kind: *kinds.at(i)?,
                    label: dec.opt_text(*labels.at(i)?)?,
                    description: dec.opt_text(*descriptions.at(i)?)?,
                    permissions: Permission::list_from_native(perms.at(i)?)?,
                    admin_groups: ids_from_native(admins.at(i)?)?,
                    owners: ContainerOwner::list_from_native(owners.at(i)?, &dec)?,
                    references: Reference::list_from_native(references.at(i)?, &dec)?,
                    meta: meta.at(i, &dec)?,
                })
            })
        }
    }
}
