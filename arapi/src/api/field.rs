use arapi_sys::*;

use super::{MetaIn, MetaListsOut, MetaOut, slot};
use crate::arena::ref_or_null;
use crate::batch::{Batch, BatchItem, Column};
use crate::error::{Error, Result};
use crate::ladder::{EntryPoint, Revision};
use crate::records::{
    Decoder, DisplayInstances, Encoder, Field, FieldLimit, FieldMapping, FieldPatch, Permission, Property,
    ids_from_native,
};
use crate::release::{Out, Outputs};
use crate::session::Session;

/// Selects the fields [`Session::list_fields`] returns.
#[derive(Clone, PartialEq, Debug)]
pub struct FieldFilter {
    pub changed_since: i32,
    /// Mask of native field types; every type by default.
    pub field_types: u32,
    /// Object properties to match, from 7.0.
    pub properties: Option<Vec<Property>>,
}

impl Default for FieldFilter {
    fn default() -> Self {
        Self {
            changed_since: 0,
            field_types: AR_FIELD_TYPE_ALL,
            properties: None,
        }
    }
}

/// Limit input in the layout the shape takes.
enum LimitIn {
    Legacy(ARFieldLimitStruct51),
    Current(ARFieldLimitStruct),
}

impl LimitIn {
    fn encode(limit: &FieldLimit, shape: Revision, enc: &mut Encoder<'_>) -> Result<Self> {
        if shape >= Revision::V7_5 {
            limit.to_native(enc).map(LimitIn::Current)
        } else {
            limit.to_native51(enc).map(LimitIn::Legacy)
        }
    }

    fn legacy(this: Option<&Self>) -> *const ARFieldLimitStruct51 {
        match this {
            Some(LimitIn::Legacy(l)) => l,
            _ => std::ptr::null(),
        }
    }

    fn current(this: Option<&Self>) -> *const ARFieldLimitStruct {
        match this {
            Some(LimitIn::Current(l)) => l,
            _ => std::ptr::null(),
        }
    }
}

impl Session {
    pub fn get_field(&self, schema: &str, id: u32) -> Result<Field> {
        let callee = self.callee(EntryPoint::GetField)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let schema_in = enc.name(schema)?;

        let out = Outputs::new(self.frees());
        let name = out.alloc::<ARNameType>();
        let mapping = out.alloc::<ARFieldMappingStruct>();
        let data_type = out.alloc::<u32>();
        let option = out.alloc::<u32>();
        let create_mode = out.alloc::<u32>();
        let field_option = out.alloc::<u32>();
        let default = out.alloc::<ARValueStruct>();
        let perms = out.alloc::<ARPermissionList>();
        let limit = (shape >= Revision::V7_5).then(|| out.alloc::<ARFieldLimitStruct>());
        let limit51 = (shape < Revision::V7_5).then(|| out.alloc::<ARFieldLimitStruct51>());
        let display = out.alloc::<ARDisplayInstanceList>();
        let meta = MetaOut::new(&out, shape >= Revision::V7_0);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; every output is a live slot.
            unsafe {
                match shape {
                    Revision::V7_5 => callee.cast::<ARGetFieldFn75>()(
                        ctrl,
                        schema_in,
                        id,
                        name.ptr(),
                        mapping.ptr(),
                        data_type.ptr(),
                        option.ptr(),
                        create_mode.ptr(),
                        field_option.ptr(),
                        default.ptr(),
                        perms.ptr(),
                        slot(limit),
                        display.ptr(),
                        meta.help(),
                        meta.timestamp(),
                        meta.owner(),
                        meta.last_changed(),
                        meta.diary(),
                        meta.props(),
                        status,
                    ),
                    Revision::V7_0 => callee.cast::<ARGetFieldFn70>()(
                        ctrl,
                        schema_in,
                        id,
                        name.ptr(),
                        mapping.ptr(),
                        data_type.ptr(),
                        option.ptr(),
                        create_mode.ptr(),
                        field_option.ptr(),
                        default.ptr(),
                        perms.ptr(),
                        slot(limit51),
                        display.ptr(),
                        meta.help(),
                        meta.timestamp(),
                        meta.owner(),
                        meta.last_changed(),
                        meta.diary(),
                        meta.props(),
                        status,
                    ),
                    _ => callee.cast::<ARGetFieldFn51>()(
                        ctrl,
                        schema_in,
                        id,
                        name.ptr(),
                        mapping.ptr(),
                        data_type.ptr(),
                        option.ptr(),
                        create_mode.ptr(),
                        default.ptr(),
                        perms.ptr(),
                        slot(limit51),
                        display.ptr(),
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
            let limit = match (limit, limit51) {
                (Some(l), _) => FieldLimit::from_native(l.get(), false, &dec)?,
                (None, Some(l)) => FieldLimit::from_native51(l.get(), &dec)?,
                (None, None) => FieldLimit::None,
            };
            Ok(Field {
                schema: schema.to_string(),
                id,
                name: dec.name(name.get())?,
                mapping: FieldMapping::from_native(mapping.get(), &dec)?,
                data_type: *data_type.get(),
                option: *option.get(),
                create_mode: *create_mode.get(),
                field_option: (shape >= Revision::V7_0).then(|| *field_option.get()),
                default: dec.value(default.get())?,
                permissions: Permission::list_from_native(perms.get())?,
                limit,
                display: DisplayInstances::from_native(display.get(), &dec)?,
                meta: meta.decode(&dec)?,
            })
        }
    }

    /// Create a field and return its id. With `field.id == 0` the server
    /// assigns one; `reserved_ok` allows ids from the reserved range.
    pub fn create_field(&self, field: &Field, reserved_ok: bool) -> Result<u32> {
        let callee = self.callee(EntryPoint::CreateField)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let schema = enc.name(&field.schema)?;
        let name = enc.name(&field.name)?;
        let mapping = field.mapping.to_native(&enc)?;
        let default = enc.value(&field.default)?;
        let perms = Permission::list_to_native(&mut enc, &field.permissions);
        let limit = LimitIn::encode(&field.limit, shape, &mut enc)?;
        let display = field.display.to_native(&mut enc)?;
        let meta = MetaIn::from_meta(&mut enc, &field.meta)?;
        let field_option = field.field_option.unwrap_or(0);
        let reserved = reserved_ok as ARBoolean;
        let mut id = field.id;

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; inputs live in `enc` and
            // on this frame.
            unsafe {
                match shape {
                    Revision::V7_5 => callee.cast::<ARCreateFieldFn75>()(
                        ctrl,
                        schema,
                        &mut id,
                        reserved,
                        name,
                        &mapping,
                        field.data_type,
                        field.option,
                        field.create_mode,
                        field_option,
                        &default,
                        &perms,
                        LimitIn::current(Some(&limit)),
                        &display,
                        meta.help,
                        meta.owner,
                        meta.diary,
                        meta.props,
                        status,
                    ),
                    Revision::V7_0 => callee.cast::<ARCreateFieldFn70>()(
                        ctrl,
                        schema,
                        &mut id,
                        reserved,
                        name,
                        &mapping,
                        field.data_type,
                        field.option,
                        field.create_mode,
                        field_option,
                        &default,
                        &perms,
                        LimitIn::legacy(Some(&limit)),
                        &display,
                        meta.help,
                        meta.owner,
                        meta.diary,
                        meta.props,
                        status,
                    ),
                    _ => callee.cast::<ARCreateFieldFn51>()(
                        ctrl,
                        schema,
                        &mut id,
                        reserved,
                        name,
                        &mapping,
                        field.data_type,
                        field.option,
                        field.create_mode,
                        &default,
                        &perms,
                        LimitIn::legacy(Some(&limit)),
                        &display,
                        meta.help,
                        meta.owner,
                        meta.diary,
                        status,
                    ),
                }
            }
        })?;
        Ok(id)
    }

    /// Apply `patch` to a field. From 7.6.04 `patch.set_options` is passed
    /// along; earlier shapes have no such parameter.
    pub fn set_field(&self, schema: &str, id: u32, patch: &FieldPatch) -> Result<()> {
        let callee = self.callee(EntryPoint::SetField)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let schema = enc.name(schema)?;
        let name = enc.opt_name(patch.name.as_deref())?;
        let mapping = patch.mapping.as_ref().map(|m| m.to_native(&enc)).transpose()?;
        let default = patch.default.as_ref().map(|v| enc.value(v)).transpose()?;
        let perms = patch
            .permissions
            .as_deref()
            .map(|p| Permission::list_to_native(&mut enc, p));
        let limit = patch
            .limit
            .as_ref()
            .map(|l| LimitIn::encode(l, shape, &mut enc))
            .transpose()?;
        let display = patch.display.as_ref().map(|d| d.to_native(&mut enc)).transpose()?;
        let meta = MetaIn::encode(&mut enc, &patch.meta)?;

        let mapping = ref_or_null(mapping.as_ref());
        let option = ref_or_null(patch.option.as_ref());
        let create_mode = ref_or_null(patch.create_mode.as_ref());
        let field_option = ref_or_null(patch.field_option.as_ref());
        let default = ref_or_null(default.as_ref());
        let perms = ref_or_null(perms.as_ref());
        let display = ref_or_null(display.as_ref());

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; inputs are null or live.
            unsafe {
                match shape {
                    Revision::V7_6_04 => callee.cast::<ARSetFieldFn7604>()(
                        ctrl,
                        schema,
                        id,
                        patch.set_options,
                        name,
                        mapping,
                        option,
                        create_mode,
                        default,
                        perms,
                        LimitIn::current(limit.as_ref()),
                        display,
                        meta.help,
                        meta.owner,
                        meta.diary,
                        field_option,
                        meta.props,
                        status,
                    ),
                    Revision::V7_5 => callee.cast::<ARSetFieldFn75>()(
                        ctrl,
                        schema,
                        id,
                        name,
                        mapping,
                        option,
                        create_mode,
                        field_option,
                        default,
                        perms,
                        LimitIn::current(limit.as_ref()),
                        display,
                        meta.help,
                        meta.owner,
                        meta.diary,
                        meta.props,
                        status,
                    ),
                    Revision::V7_0 => callee.cast::<ARSetFieldFn70>()(
                        ctrl,
                        schema,
                        id,
                        name,
                        mapping,
                        option,
                        create_mode,
                        field_option,
                        default,
                        perms,
                        LimitIn::legacy(limit.as_ref()),
                        display,
                        meta.help,
                        meta.owner,
                        meta.diary,
                        meta.props,
                        status,
                    ),
                    _ => callee.cast::<ARSetFieldFn51>()(
                        ctrl,
                        schema,
                        id,
                        name,
                        mapping,
                        option,
                        create_mode,
                        default,
                        perms,
                        LimitIn::legacy(limit.as_ref()),
                        display,
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

    pub fn delete_field(&self, schema: &str, id: u32, option: u32) -> Result<()> {
        let callee = self.callee(EntryPoint::DeleteField)?;
        let mut enc = Encoder::new(self);
        let schema = enc.name(schema)?;
        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape.
            unsafe { callee.cast::<ARDeleteFieldFn>()(ctrl, schema, id, option, status) }
        })?;
        Ok(())
    }

    /// Ids of the fields of `schema` matching `filter`.
    pub fn list_fields(&self, schema: &str, filter: &FieldFilter) -> Result<Vec<u32>> {
        let callee = self.callee(EntryPoint::GetListField)?;
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let schema = enc.name(schema)?;
        let props = enc.opt_props(filter.properties.as_deref())?;

        let out = Outputs::new(self.frees());
        let ids = out.alloc::<ARInternalIdList>();
        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape.
            unsafe {
                match shape {
                    Revision::V7_0 => callee.cast::<ARGetListFieldFn70>()(
                        ctrl,
                        schema,
                        filter.changed_since,
                        filter.field_types,
                        props,
                        ids.ptr(),
                        status,
                    ),
                    _ => callee.cast::<ARGetListFieldFn51>()(
                        ctrl,
                        schema,
                        filter.changed_since,
                        filter.field_types,
                        ids.ptr(),
                        status,
                    ),
                }
            }
        })?;
        // SAFETY: filled in by the call.
        unsafe { ids_from_native(ids.get()) }
    }

    /// Fetch several fields of one schema. Unknown ids come back as
    /// [`BatchItem::Missing`] in their request position.
    pub fn get_multiple_fields(&self, schema: &str, ids: &[u32]) -> Result<Vec<BatchItem<Field, u32>>> {
        let callee = self.callee(EntryPoint::GetMultipleFields)?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let shape = callee.shape();
        let mut enc = Encoder::new(self);
        let schema_in = enc.name(schema)?;
        let wanted = enc.list(ids.to_vec());

        let out = Outputs::new(self.frees());
        let exist = out.alloc::<ARBooleanList>();
        let got = out.alloc::<ARInternalIdList>();
        let names = out.alloc::<ARNameList>();
        let mappings = out.alloc::<ARFieldMappingList>();
        let data_types = out.alloc::<ARUnsignedIntList>();
        let options = out.alloc::<ARUnsignedIntList>();
        let create_modes = out.alloc::<ARUnsignedIntList>();
        let field_options = (shape >= Revision::V7_0).then(|| out.alloc::<ARUnsignedIntList>());
        let defaults = out.alloc::<ARValueList>();
        let perms = out.alloc::<ARPermissionListList>();
        let limits = (shape >= Revision::V7_5).then(|| out.alloc::<ARFieldLimitList>());
        let limits51 = (shape < Revision::V7_5).then(|| out.alloc::<ARFieldLimitList51>());
        let displays = out.alloc::<ARDisplayInstanceListList>();
        let meta = MetaListsOut::new(&out, shape >= Revision::V7_0);

        self.invoke(callee, |ctrl, status| {
            // SAFETY: the alias matches the shape; every output is a live slot.
            unsafe {
                match shape {
                    Revision::V7_5 => callee.cast::<ARGetMultipleFieldsFn75>()(
                        ctrl,
                        schema_in,
                        &wanted,
                        exist.ptr(),
                        got.ptr(),
                        names.ptr(),
                        mappings.ptr(),
                        data_types.ptr(),
                        options.ptr(),
                        create_modes.ptr(),
                        slot(field_options),
                        defaults.ptr(),
                        perms.ptr(),
                        slot(limits),
                        displays.ptr(),
                        meta.help(),
                        meta.timestamp(),
                        meta.owner(),
                        meta.last_changed(),
                        meta.diary(),
                        meta.props(),
                        status,
                    ),
                    Revision::V7_0 => callee.cast::<ARGetMultipleFieldsFn70>()(
                        ctrl,
                        schema_in,
                        &wanted,
                        exist.ptr(),
                        got.ptr(),
                        names.ptr(),
                        mappings.ptr(),
                        data_types.ptr(),
                        options.ptr(),
                        create_modes.ptr(),
                        slot(field_options),
                        defaults.ptr(),
                        perms.ptr(),
                        slot(limits51),
                        displays.ptr(),
                        meta.help(),
                        meta.timestamp(),
                        meta.owner(),
                        meta.last_changed(),
                        meta.diary(),
                        meta.props(),
                        status,
                    ),
                    _ => callee.cast::<ARGetMultipleFieldsFn51>()(
                        ctrl,
                        schema_in,
                        &wanted,
                        exist.ptr(),
                        got.ptr(),
                        names.ptr(),
                        mappings.ptr(),
                        data_types.ptr(),
                        options.ptr(),
                        create_modes.ptr(),
                        defaults.ptr(),
                        perms.ptr(),
                        slot(limits51),
                        displays.ptr(),
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
            let batch = Batch::new(callee.entry(), ids, exist.get())?;
            let got = batch.column(got.get())?;
            let names = batch.column(names.get())?;
            let mappings = batch.column(mappings.get())?;
            let data_types = batch.column(data_types.get())?;
            let options = batch.column(options.get())?;
            let create_modes = batch.column(create_modes.get())?;
            let field_options = batch.opt_column(field_options.map(Out::get))?;
            let defaults = batch.column(defaults.get())?;
            let perms = batch.column(perms.get())?;
            let limits = batch.opt_column(limits.map(Out::get))?;
            let limits51 = batch.opt_column(limits51.map(Out::get))?;
            let displays = batch.column(displays.get())?;
            let meta = meta.columns(&batch)?;
            batch.zip(|i| {
                let limit = match (Column::opt_at(&limits, i)?, Column::opt_at(&limits51, i)?) {
                    (Some(l), _) => FieldLimit::from_native(l, false, &dec)?,
                    (None, Some(l)) => FieldLimit::from_native51(l, &dec)?,
                    (None, None) => return Err(Error::CorruptList(i)),
                };
                Ok(Field {
                    schema: schema.to_string(),
                    id: *got.at(i)?,
                    name: dec.name(names.at(i)?)?,
                    mapping: FieldMapping::from_native(mappings.at(i)?, &dec)?,
                    data_type: *data_types.at(i)?,
                    option: *options.at(i)?,
                    create_mode: *create_modes.at(i)?,
                    field_option: Column::opt_at(&field_options, i)?.copied(),
                    default: dec.value(defaults.at(i)?)?,
                    permissions: Permission::list_from_native(perms.at(i)?)?,
                    limit,
                    display: DisplayInstances::from_native(displays.at(i)?, &dec)?,
                    meta: meta.at(i, &dec)?,
                })
            })
        }
    }

    /// Candidate fields of an external schema. The binding does not carry
    /// this entry point; it fails without touching the library.
    pub fn get_multiple_ext_field_candidates(&self, _schema: &str) -> Result<Vec<Field>> {
        Err(Error::NotImplemented(EntryPoint::GetMultipleExtFieldCandidates))
    }
}
