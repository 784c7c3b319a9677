use arapi_sys::*;

use super::{MetaIn, MetaListsOut, MetaOut, owned_names, slot};
use crate::arena::ref_or_null;
use crate::batch::{Batch, BatchItem, Column};
use crate::error::{Error, Result};
use crate::ladder::{EntryPoint, Revision};
use crate::records::{
    ArchiveInfo, AuditInfo, Decoder, Encoder, EntryListField, Index, Permission, Property, Schema, SchemaKind,
    SchemaPatch, SortItem, ids_from_native,
};
use crate::release::{Out, Outputs};
use crate::session::Session;

/// Selects the schemas [`Session::list_schemas`] returns.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SchemaFilter {
    /// Only schemas changed after this timestamp; 0 for all.
    pub changed_since: i32,
    /// Native schema list type (all, regular, join, uplink, ...).
    pub list_type: u32,
    /// Schema the list type relates to, for the dependent list types.
    pub related: Option<String>,
    /// Only schemas containing all of these fields.
    pub field_ids: Option<Vec<u32>>,
    /// Object properties to match, from 7.0.
    pub properties: Option<Vec<Property>>,
}

impl Session {
    pub fn get_schema(&self, name: &str) -> Result<Schema> {
        let callee = self.callee(EntryPoint::GetSchema)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name_in = enc.name(name)?;

        let out = Outputs::new(self.frees());
        let kind = out.alloc::<ARCompoundSchema>();
        let perms = out.alloc::<ARPermissionList>();
        let admins = out.alloc::<ARInternalIdList>();
        let fields = out.alloc::<AREntryListFieldList>();
        let sort = out.alloc::<ARSortList>();
        let indexes = out.alloc::<ARIndexList>();
        let archive = (shape >= Revision::V6_0).then(|| out.alloc::<ARArchiveInfoStruct>());
        let audit = (shape >= Revision::V7_1).then(|| out.alloc::<ARAuditInfoStruct>());
        let vui = out.alloc::<ARNameType>();
        let meta = MetaOut::new(&out, shape >= Revision::V7_1);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; every output is a live slot.
            unsafe {
                match shape {
                    Revision::V7_1 => callee.cast::<ARGetSchemaFn71>()(
                        ctrl,
                        name_in,
                        kind.ptr(),
                        perms.ptr(),
                        admins.ptr(),
                        fields.ptr(),
                        sort.ptr(),
                        indexes.ptr(),
                        slot(archive),
                        slot(audit),
                        vui.ptr(),
                        meta.help(),
                        meta.timestamp(),
                        meta.owner(),
                        meta.last_changed(),
                        meta.diary(),
                        meta.props(),
                        status,
                    ),
                    Revision::V6_0 => callee.cast::<ARGetSchemaFn60>()(
                        ctrl,
                        name_in,
                        kind.ptr(),
                        perms.ptr(),
                        admins.ptr(),
                        fields.ptr(),
                        sort.ptr(),
                        indexes.ptr(),
                        slot(archive),
                        vui.ptr(),
                        meta.help(),
                        meta.timestamp(),
                        meta.owner(),
                        meta.last_changed(),
                        meta.diary(),
                        status,
                    ),
                    _ => callee.cast::<ARGetSchemaFn51>()(
                        ctrl,
                        name_in,
                        kind.ptr(),
                        perms.ptr(),
                        admins.ptr(),
                        fields.ptr(),
                        sort.ptr(),
                        indexes.ptr(),
                        vui.ptr(),
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
            Ok(Schema {
                name: name.to_string(),
                kind: SchemaKind::from_native(kind.get(), &dec)?,
                permissions: Permission::list_from_native(perms.get())?,
                admin_groups: ids_from_native(admins.get())?,
                list_fields: EntryListField::list_from_native(fields.get(), &dec)?,
                sort: SortItem::list_from_native(sort.get())?,
                indexes: Index::list_from_native(indexes.get())?,
                archive: archive.map(|a| ArchiveInfo::from_native(a.get(), &dec)).transpose()?,
                audit: audit.map(|a| AuditInfo::from_native(a.get(), &dec)).transpose()?,
                default_vui: dec.name(vui.get())?,
                meta: meta.decode(&dec)?,
            })
        }
    }

    pub fn create_schema(&self, schema: &Schema) -> Result<()> {
        let callee = self.callee(EntryPoint::CreateSchema)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name = enc.name(&schema.name)?;
        let kind = schema.kind.to_native(&mut enc)?;
        let perms = Permission::list_to_native(&mut enc, &schema.permissions);
        let admins = enc.list(schema.admin_groups.clone());
        let fields = EntryListField::list_to_native(&mut enc, &schema.list_fields)?;
        let sort = SortItem::list_to_native(&mut enc, &schema.sort);
        let indexes = Index::list_to_native(&mut enc, &schema.indexes);
        let archive = schema
            .archive
            .as_ref()
            .map(|a| a.to_native(&schema.name, &mut enc))
            .transpose()?;
        let audit = schema
            .audit
            .as_ref()
            .map(|a| a.to_native(&schema.name, &mut enc))
            .transpose()?;
        let vui = enc.str(&schema.default_vui)?;
        let meta = MetaIn::from_meta(&mut enc, &schema.meta)?;

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; inputs live in `enc` and
            // on this frame.
            unsafe {
                match shape {
                    Revision::V7_1 => callee.cast::<ARCreateSchemaFn71>()(
                        ctrl,
                        name,
                        &kind,
                        &perms,
                        &admins,
                        &fields,
                        &sort,
                        &indexes,
                        ref_or_null(archive.as_ref()),
                        ref_or_null(audit.as_ref()),
                        vui,
                        meta.help,
                        meta.owner,
                        meta.diary,
                        meta.props,
                        status,
                    ),
                    Revision::V6_0 => callee.cast::<ARCreateSchemaFn60>()(
                        ctrl,
                        name,
                        &kind,
                        &perms,
                        &admins,
                        &fields,
                        &sort,
                        &indexes,
                        ref_or_null(archive.as_ref()),
                        vui,
                        meta.help,
                        meta.owner,
                        meta.diary,
                        status,
                    ),
                    _ => callee.cast::<ARCreateSchemaFn51>()(
                        ctrl, name, &kind, &perms, &admins, &fields, &sort, &indexes, vui, meta.help, meta.owner,
                        meta.diary, status,
                    ),
                }
            }
        })?;
        Ok(())
    }

    /// Apply `patch` to schema `name`; unset attributes stay as they are.
    pub fn set_schema(&self, name: &str, patch: &SchemaPatch) -> Result<()> {
        let callee = self.callee(EntryPoint::SetSchema)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let name_in = enc.name(name)?;
        let new_name = enc.opt_name(patch.new_name.as_deref())?;
        let kind = patch.kind.as_ref().map(|k| k.to_native(&mut enc)).transpose()?;
        let perms = patch
            .permissions
            .as_deref()
            .map(|p| Permission::list_to_native(&mut enc, p));
        let admins = patch.admin_groups.clone().map(|a| enc.list(a));
        let fields = patch
            .list_fields
            .as_deref()
            .map(|f| EntryListField::list_to_native(&mut enc, f))
            .transpose()?;
        let sort = patch.sort.as_deref().map(|s| SortItem::list_to_native(&mut enc, s));
        let indexes = patch.indexes.as_deref().map(|i| Index::list_to_native(&mut enc, i));
        // Renamed schemas compile their queries against the new name.
        let target = patch.new_name.as_deref().unwrap_or(name);
        let archive = patch
            .archive
            .as_ref()
            .map(|a| a.to_native(target, &mut enc))
            .transpose()?;
        let audit = patch
            .audit
            .as_ref()
            .map(|a| a.to_native(target, &mut enc))
            .transpose()?;
        let vui = enc.opt_str(patch.default_vui.as_deref())?;
        let meta = MetaIn::encode(&mut enc, &patch.meta)?;

        let kind = ref_or_null(kind.as_ref());
        let perms = ref_or_null(perms.as_ref());
        let admins = ref_or_null(admins.as_ref());
        let fields = ref_or_null(fields.as_ref());
        let sort = ref_or_null(sort.as_ref());
        let indexes = ref_or_null(indexes.as_ref());
        let archive = ref_or_null(archive.as_ref());
        let audit = ref_or_null(audit.as_ref());

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; inputs are null or live.
            unsafe {
                match shape {
                    Revision::V7_1 => callee.cast::<ARSetSchemaFn71>()(
                        ctrl, name_in, new_name, kind, perms, admins, fields, sort, indexes, archive, audit, vui,
                        meta.help, meta.owner, meta.diary, meta.props, status,
                    ),
                    Revision::V6_0 => callee.cast::<ARSetSchemaFn60>()(
                        ctrl, name_in, new_name, kind, perms, admins, fields, sort, indexes, archive, vui, meta.help,
                        meta.owner, meta.diary, status,
                    ),
                    _ => callee.cast::<ARSetSchemaFn51>()(
                        ctrl, name_in, new_name, kind, perms, admins, fields, sort, indexes, vui, meta.help,
                        meta.owner, meta.diary, status,
                    ),
                }
            }
        })?;
        Ok(())
    }

    /// Delete a schema. `option` is the native delete option (0 refuses to
    /// delete a schema that still has data).
    pub fn delete_schema(&self, name: &str, option: u32) -> Result<()> {
        let callee = self.callee(EntryPoint::DeleteSchema)?;
        let mut enc = Encoder::new(self);
        let name = enc.name(name)?;
        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape.
            unsafe { callee.cast::<ARDeleteSchemaFn>()(ctrl, name, option, status) }
        })?;
        Ok(())
    }

    pub fn list_schemas(&self, filter: &SchemaFilter) -> Result<Vec<String>> {
        let callee = self.callee(EntryPoint::GetListSchema)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let related = enc.opt_name(filter.related.as_deref())?;
        let field_ids = filter.field_ids.clone().map(|ids| enc.list(ids));
        let props = enc.opt_props(filter.properties.as_deref())?;
        let field_ids = ref_or_null(field_ids.as_ref());

        let out = Outputs::new(self.frees());
        let names = out.alloc::<ARNameList>();
        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape.
            unsafe {
                match shape {
                    Revision::V7_0 => callee.cast::<ARGetListSchemaFn70>()(
                        ctrl,
                        filter.changed_since,
                        filter.list_type,
                        related,
                        field_ids,
                        props,
                        names.ptr(),
                        status,
                    ),
                    _ => callee.cast::<ARGetListSchemaFn51>()(
                        ctrl,
                        filter.changed_since,
                        filter.list_type,
                        related,
                        field_ids,
                        names.ptr(),
                        status,
                    ),
                }
            }
        })?;
        // SAFETY: filled in by the call.
        unsafe { Decoder::new(self).names(names.get()) }
    }

    /// Fetch several schemas in one call. Unknown names come back as
    /// [`BatchItem::Missing`] in their request position.
    pub fn get_multiple_schemas(&self, names: &[&str]) -> Result<Vec<BatchItem<Schema>>> {
        let callee = self.callee(EntryPoint::GetMultipleSchemas)?;
        // The library reads an empty key list as "every object".
        if names.is_empty() {
            return Ok(Vec::new());
        }
        let shape = callee.shape();
        let keys = owned_names(names);
        let mut enc = Encoder::new(self);
        let wanted = enc.names(&keys)?;

        let out = Outputs::new(self.frees());
        let exist = out.alloc::<ARBooleanList>();
        let got = out.alloc::<ARNameList>();
        let kinds = out.alloc::<ARCompoundSchemaList>();
        let perms = out.alloc::<ARPermissionListList>();
        let admins = out.alloc::<ARInternalIdListList>();
        let fields = out.alloc::<AREntryListFieldListList>();
        let sorts = out.alloc::<ARSortListList>();
        let indexes = out.alloc::<ARIndexListList>();
        let archives = out.alloc::<ARArchiveInfoList>();
        let audits = (shape >= Revision::V7_1).then(|| out.alloc::<ARAuditInfoList>());
        let vuis = out.alloc::<ARNameList>();
        let meta = MetaListsOut::new(&out, shape >= Revision::V7_1);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; every output is a live slot.
            unsafe {
                match shape {
                    Revision::V7_1 => callee.cast::<ARGetMultipleSchemasFn71>()(
                        ctrl,
                        0,
                        std::ptr::null(),
                        &wanted,
                        std::ptr::null(),
                        exist.ptr(),
                        got.ptr(),
                        kinds.ptr(),
                        perms.ptr(),
                        admins.ptr(),
                        fields.ptr(),
                        sorts.ptr(),
                        indexes.ptr(),
                        archives.ptr(),
                        slot(audits),
                        vuis.ptr(),
                        meta.help(),
                        meta.timestamp(),
                        meta.owner(),
                        meta.last_changed(),
                        meta.diary(),
                        meta.props(),
                        status,
                    ),
                    _ => callee.cast::<ARGetMultipleSchemasFn63>()(
                        ctrl,
                        0,
                        std::ptr::null(),
                        &wanted,
                        std::ptr::null(),
                        exist.ptr(),
                        got.ptr(),
                        kinds.ptr(),
                        perms.ptr(),
                        admins.ptr(),
                        fields.ptr(),
                        sorts.ptr(),
                        indexes.ptr(),
                        archives.ptr(),
                        vuis.ptr(),
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
            let batch = Batch::new(callee.entry(), &keys, exist.get())?;
            let got = batch.column(got.get())?;
            let kinds = batch.column(kinds.get())?;
            let perms = batch.column(perms.get())?;
            let admins = batch.column(admins.get())?;
            let fields = batch.column(fields.get())?;
            let sorts = batch.column(sorts.get())?;
            let indexes = batch.column(indexes.get())?;
            let archives = batch.column(archives.get())?;
            let audits = batch.opt_column(audits.map(Out::get))?;
            let vuis = batch.column(vuis.get())?;
            let meta = meta.columns(&batch)?;
            batch.zip(|i| {
                Ok(Schema {
                    name: dec.name(got.at(i)?)?,
                    kind: SchemaKind::from_native(kinds.at(i)?, &dec)?,
                    permissions: Permission::list_from_native(perms.at(i)?)?,
                    admin_groups: ids_from_native(admins.at(i)?)?,
                    list_fields: EntryListField::list_from_native(fields.at(i)?, &dec)?,
                    sort: SortItem::list_from_native(sorts.at(i)?)?,
                    indexes: Index::list_from_native(indexes.at(i)?)?,
                    archive: Some(ArchiveInfo::from_native(archives.at(i)?, &dec)?),
                    audit: Column::opt_at(&audits, i)?
                        .map(|a| AuditInfo::from_native(a, &dec))
                        .transpose()?,
                    default_vui: dec.name(vuis.at(i)?)?,
                    meta: meta.at(i, &dec)?,
                })
            })
        }
    }

    /// Candidate external schemas. The binding does not carry this entry
    /// point; it fails without touching the library.
    pub fn list_ext_schema_candidates(&self) -> Result<Vec<String>> {
        Err(Error::NotImplemented(EntryPoint::GetListExtSchemaCandidates))
    }
}
