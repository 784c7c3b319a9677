use arapi_sys::*;
use serde::Serialize;

use super::{DayTime, Decoder, Encoder, ObjectMeta, MetaPatch, Permission};
use crate::error::Result;
use crate::list::{copy_list, from_native_list};

/// What a schema is backed by.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SchemaKind {
    None,
    Regular,
    Join {
        member_a: String,
        member_b: String,
        qualifier: Option<String>,
        option: u32,
    },
    View {
        table: String,
        key_field: String,
    },
    Dialog,
    Vendor {
        vendor: String,
        table: String,
    },
}

impl SchemaKind {
    pub fn native_type(&self) -> u32 {
        match self {
            SchemaKind::None => AR_SCHEMA_NONE,
            SchemaKind::Regular => AR_SCHEMA_REGULAR,
            SchemaKind::Join { .. } => AR_SCHEMA_JOIN,
            SchemaKind::View { .. } => AR_SCHEMA_VIEW,
            SchemaKind::Dialog => AR_SCHEMA_DIALOG,
            SchemaKind::Vendor { .. } => AR_SCHEMA_VENDOR,
        }
    }

    pub(crate) unsafe fn from_native(raw: &ARCompoundSchema, dec: &Decoder<'_>) -> Result<Self> {
        // SAFETY: the tag selects the live member.
        unsafe {
            Ok(match raw.schemaType {
                AR_SCHEMA_REGULAR => SchemaKind::Regular,
                AR_SCHEMA_JOIN => SchemaKind::Join {
                    member_a: dec.name(&raw.u.join.memberA)?,
                    member_b: dec.name(&raw.u.join.memberB)?,
                    qualifier: dec.qualifier(raw.u.join.joinQual)?,
                    option: raw.u.join.option,
                },
                AR_SCHEMA_VIEW => SchemaKind::View {
                    table: dec.name(&raw.u.view.tableName)?,
                    key_field: dec.name(&raw.u.view.keyField)?,
                },
                AR_SCHEMA_DIALOG => SchemaKind::Dialog,
                AR_SCHEMA_VENDOR => SchemaKind::Vendor {
                    vendor: dec.name(&raw.u.vendor.vendorName)?,
                    table: dec.name(&raw.u.vendor.tableName)?,
                },
                _ => SchemaKind::None,
            })
        }
    }

    /// The join qualifier is compiled against the first member.
    pub(crate) fn to_native(&self, enc: &mut Encoder<'_>) -> Result<ARCompoundSchema> {
        let u = match self {
            SchemaKind::Join {
                member_a,
                member_b,
                qualifier,
                option,
            } => ARCompoundSchemaUnion {
                join: ARJoinSchema {
                    memberA: enc.name_buf(member_a)?,
                    memberB: enc.name_buf(member_b)?,
                    joinQual: enc.qualifier_ptr_or_empty(member_a, qualifier.as_deref())?,
                    option: *option,
                },
            },
            SchemaKind::View { table, key_field } => ARCompoundSchemaUnion {
                view: ARViewSchema {
                    tableName: enc.name_buf(table)?,
                    keyField: enc.name_buf(key_field)?,
                },
            },
            SchemaKind::Vendor { vendor, table } => ARCompoundSchemaUnion {
                vendor: ARVendorSchema {
                    vendorName: enc.name_buf(vendor)?,
                    tableName: enc.name_buf(table)?,
                },
            },
            SchemaKind::None | SchemaKind::Regular | SchemaKind::Dialog => ARCompoundSchemaUnion::zeroed(),
        };
        Ok(ARCompoundSchema {
            schemaType: self.native_type(),
            u,
        })
    }
}

/// A column of the schema's result list.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct EntryListField {
    pub field_id: u32,
    pub width: u32,
    pub separator: String,
}

impl EntryListField {
    pub fn new(field_id: u32, width: u32) -> Self {
        Self {
            field_id,
            width,
            separator: String::new(),
        }
    }

    pub(crate) fn from_native(raw: &AREntryListFieldStruct, dec: &Decoder<'_>) -> Result<Self> {
        Ok(Self {
            field_id: raw.fieldId,
            width: raw.columnWidth,
            separator: dec.name(&raw.separator)?,
        })
    }

    pub(crate) fn to_native(&self, enc: &Encoder<'_>) -> Result<AREntryListFieldStruct> {
        Ok(AREntryListFieldStruct {
            fieldId: self.field_id,
            columnWidth: self.width,
            separator: enc.name_buf(&self.separator)?,
        })
    }

    /// # Safety
    ///
    /// `raw` must be a list filled in by the library.
    pub(crate) unsafe fn list_from_native(raw: &AREntryListFieldList, dec: &Decoder<'_>) -> Result<Vec<Self>> {
        // SAFETY: forwarded.
        unsafe { from_native_list(raw, |f| Self::from_native(f, dec)) }
    }

    pub(crate) fn list_to_native(enc: &mut Encoder<'_>, fields: &[Self]) -> Result<AREntryListFieldList> {
        enc.map_list(fields, |enc, f| f.to_native(enc))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct SortItem {
    pub field_id: u32,
    pub order: u32,
}

impl SortItem {
    pub(crate) fn from_native(raw: &ARSortStruct) -> Self {
        Self {
            field_id: raw.fieldId,
            order: raw.sortOrder,
        }
    }

    pub(crate) fn to_native(self) -> ARSortStruct {
        ARSortStruct {
            fieldId: self.field_id,
            sortOrder: self.order,
        }
    }

    /// # Safety
    ///
    /// `raw` must be a list filled in by the library.
    pub(crate) unsafe fn list_from_native(raw: &ARSortList) -> Result<Vec<Self>> {
        // SAFETY: forwarded.
        unsafe { from_native_list(raw, |s| Ok(Self::from_native(s))) }
    }

    pub(crate) fn list_to_native(enc: &mut Encoder<'_>, items: &[Self]) -> ARSortList {
        enc.list(items.iter().map(|s| s.to_native()).collect())
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Index {
    pub fields: Vec<u32>,
    pub unique: bool,
}

impl Index {
    pub(crate) fn from_native(raw: &ARIndexStruct) -> Self {
        let n = (raw.numFields as usize).min(AR_MAX_INDEX_FIELDS);
        Self {
            fields: raw.fieldIds[..n].to_vec(),
            unique: raw.unique != 0,
        }
    }

    pub(crate) fn to_native(&self) -> ARIndexStruct {
        let mut ids = [0; AR_MAX_INDEX_FIELDS];
        let n = self.fields.len().min(AR_MAX_INDEX_FIELDS);
        ids[..n].copy_from_slice(&self.fields[..n]);
        ARIndexStruct {
            numFields: n as u32,
            fieldIds: ids,
            unique: self.unique as ARBoolean,
        }
    }

    /// # Safety
    ///
    /// `raw` must be a list filled in by the library.
    pub(crate) unsafe fn list_from_native(raw: &ARIndexList) -> Result<Vec<Self>> {
        // SAFETY: forwarded.
        unsafe { from_native_list(raw, |i| Ok(Self::from_native(i))) }
    }

    pub(crate) fn list_to_native(enc: &mut Encoder<'_>, items: &[Self]) -> ARIndexList {
        enc.list(items.iter().map(Index::to_native).collect())
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ArchiveInfo {
    pub enable: bool,
    pub archive_type: u32,
    pub destination: String,
    pub time: DayTime,
    pub qualifier: Option<String>,
    pub archive_from: String,
}

impl ArchiveInfo {
    pub(crate) unsafe fn from_native(raw: &ARArchiveInfoStruct, dec: &Decoder<'_>) -> Result<Self> {
        Ok(Self {
            enable: raw.enable != 0,
            archive_type: raw.archiveType,
            destination: dec.name(&raw.archiveDest)?,
            time: DayTime::from_native(&raw.archiveTime),
            // SAFETY: library output.
            qualifier: unsafe { dec.qualifier(raw.query) }?,
            archive_from: dec.name(&raw.archiveFrom)?,
        })
    }

    pub(crate) fn to_native(&self, schema: &str, enc: &mut Encoder<'_>) -> Result<ARArchiveInfoStruct> {
        Ok(ARArchiveInfoStruct {
            enable: self.enable as ARBoolean,
            archiveType: self.archive_type,
            archiveDest: enc.name_buf(&self.destination)?,
            archiveTime: self.time.to_native(),
            query: enc.qualifier_ptr_or_empty(schema, self.qualifier.as_deref())?,
            archiveFrom: enc.name_buf(&self.archive_from)?,
        })
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct AuditInfo {
    pub enable: bool,
    pub style: u32,
    pub form: String,
    pub qualifier: Option<String>,
    pub mask: u32,
}

impl AuditInfo {
    pub(crate) unsafe fn from_native(raw: &ARAuditInfoStruct, dec: &Decoder<'_>) -> Result<Self> {
        Ok(Self {
            enable: raw.enable != 0,
            style: raw.style,
            form: dec.name(&raw.formName)?,
            // SAFETY: library output.
            qualifier: unsafe { dec.qualifier(raw.query) }?,
            mask: raw.auditMask,
        })
    }

    pub(crate) fn to_native(&self, schema: &str, enc: &mut Encoder<'_>) -> Result<ARAuditInfoStruct> {
        Ok(ARAuditInfoStruct {
            enable: self.enable as ARBoolean,
            style: self.style,
            formName: enc.name_buf(&self.form)?,
            query: enc.qualifier_ptr_or_empty(schema, self.qualifier.as_deref())?,
            auditMask: self.mask,
        })
    }
}

/// A form definition.
///
/// `archive` appears from 6.0, `audit` from 7.1.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Schema {
    pub name: String,
    pub kind: SchemaKind,
    pub permissions: Vec<Permission>,
    pub admin_groups: Vec<u32>,
    pub list_fields: Vec<EntryListField>,
    pub sort: Vec<SortItem>,
    pub indexes: Vec<Index>,
    pub archive: Option<ArchiveInfo>,
    pub audit: Option<AuditInfo>,
    pub default_vui: String,
    pub meta: ObjectMeta,
}

impl Schema {
    /// A regular schema with nothing but a name.
    pub fn regular(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: SchemaKind::Regular,
            permissions: Vec::new(),
            admin_groups: Vec::new(),
            list_fields: Vec::new(),
            sort: Vec::new(),
            indexes: Vec::new(),
            archive: None,
            audit: None,
            default_vui: String::new(),
            meta: ObjectMeta::default(),
        }
    }
}

/// Changes to a schema; `None` leaves the attribute as it is.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SchemaPatch {
    pub new_name: Option<String>,
    pub kind: Option<SchemaKind>,
    pub permissions: Option<Vec<Permission>>,
    pub admin_groups: Option<Vec<u32>>,
    pub list_fields: Option<Vec<EntryListField>>,
    pub sort: Option<Vec<SortItem>>,
    pub indexes: Option<Vec<Index>>,
    pub archive: Option<ArchiveInfo>,
    pub audit: Option<AuditInfo>,
    pub default_vui: Option<String>,
    pub meta: MetaPatch,
}

/// # Safety
///
/// `raw` must be a list filled in by the library.
pub(crate) unsafe fn ids_from_native(raw: &ARInternalIdList) -> Result<Vec<u32>> {
    // SAFETY: forwarded.
    unsafe { copy_list(raw) }
}
