//! Definition structures: schemas, fields, permissions, containers, menus,
//! VUIs, entries.

use std::os::raw::{c_char, c_int, c_uint};

use crate::consts::*;
use crate::types::*;
use crate::value::*;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARPermissionStruct {
    pub groupId: ARInternalId,
    pub permissions: c_uint,
}

pub type ARPermissionList = ARList<ARPermissionStruct>;
pub type ARPermissionListList = ARList<ARPermissionList>;

// ---- Schemas ----

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARJoinSchema {
    pub memberA: ARNameType,
    pub memberB: ARNameType,
    pub joinQual: *mut ARQualifierStruct,
    pub option: c_uint,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARViewSchema {
    pub tableName: ARNameType,
    pub keyField: ARNameType,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARVendorSchema {
    pub vendorName: ARNameType,
    pub tableName: ARNameType,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union ARCompoundSchemaUnion {
    pub join: ARJoinSchema,
    pub view: ARViewSchema,
    pub vendor: ARVendorSchema,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARCompoundSchema {
    pub schemaType: c_uint,
    pub u: ARCompoundSchemaUnion,
}

pub type ARCompoundSchemaList = ARList<ARCompoundSchema>;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct AREntryListFieldStruct {
    pub fieldId: ARInternalId,
    pub columnWidth: c_uint,
    pub separator: [c_char; AR_MAX_SEPARATOR_SIZE + 1],
}

pub type AREntryListFieldList = ARList<AREntryListFieldStruct>;
pub type AREntryListFieldListList = ARList<AREntryListFieldList>;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARSortStruct {
    pub fieldId: ARInternalId,
    pub sortOrder: c_uint,
}

pub type ARSortList = ARList<ARSortStruct>;
pub type ARSortListList = ARList<ARSortList>;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARIndexStruct {
    pub numFields: c_uint,
    pub fieldIds: [ARInternalId; AR_MAX_INDEX_FIELDS],
    pub unique: ARBoolean,
}

pub type ARIndexList = ARList<ARIndexStruct>;
pub type ARIndexListList = ARList<ARIndexList>;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARDayStruct {
    pub monthday: ARULong32,
    pub weekday: ARULong32,
    pub hourmask: ARULong32,
    pub minute: c_uint,
}

/// Archive settings (6.0+).
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARArchiveInfoStruct {
    pub enable: ARBoolean,
    pub archiveType: c_uint,
    pub archiveDest: ARNameType,
    pub archiveTime: ARDayStruct,
    pub query: *mut ARQualifierStruct,
    pub archiveFrom: ARNameType,
}

pub type ARArchiveInfoList = ARList<ARArchiveInfoStruct>;

/// Audit settings (7.1+).
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARAuditInfoStruct {
    pub enable: ARBoolean,
    pub style: c_uint,
    pub formName: ARNameType,
    pub query: *mut ARQualifierStruct,
    pub auditMask: c_uint,
}

pub type ARAuditInfoList = ARList<ARAuditInfoStruct>;

// ---- Fields ----

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARJoinMappingStruct {
    pub schemaIndex: c_uint,
    pub realId: ARInternalId,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARViewMappingStruct {
    pub fieldName: ARNameType,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union ARFieldMappingUnion {
    pub join: ARJoinMappingStruct,
    pub view: ARViewMappingStruct,
    pub vendor: ARViewMappingStruct,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARFieldMappingStruct {
    pub fieldType: c_uint,
    pub u: ARFieldMappingUnion,
}

pub type ARFieldMappingList = ARList<ARFieldMappingStruct>;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARIntegerLimitsStruct {
    pub rangeLow: ARLong32,
    pub rangeHigh: ARLong32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARRealLimitsStruct {
    pub rangeLow: f64,
    pub rangeHigh: f64,
    pub precision: c_int,
}

/// Character limits, 5.1 through 7.1.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARCharLimitsStruct51 {
    pub maxLength: c_uint,
    pub menuStyle: c_uint,
    pub qbeMatchOperation: c_uint,
    pub charMenu: ARNameType,
    pub pattern: *mut c_char,
    pub fullTextOptions: c_uint,
}

/// Character limits from 7.5 on.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARCharLimitsStruct {
    pub maxLength: c_uint,
    pub menuStyle: c_uint,
    pub qbeMatchOperation: c_uint,
    pub charMenu: ARNameType,
    pub pattern: *mut c_char,
    pub fullTextOptions: c_uint,
    pub lengthUnits: c_uint,
    pub storageOptionForCLOB: c_uint,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARDiaryLimitsStruct {
    pub fullTextOptions: c_uint,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct AREnumItemStruct {
    pub itemName: ARNameType,
    pub itemNumber: ARULong32,
}

pub type AREnumItemList = ARList<AREnumItemStruct>;

#[repr(C)]
#[derive(Clone, Copy)]
pub union AREnumLimitsUnion {
    pub regularList: ARNameList,
    pub customList: AREnumItemList,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct AREnumLimitsStruct {
    pub listStyle: c_uint,
    pub u: AREnumLimitsUnion,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARDecimalLimitsStruct {
    pub rangeLow: *mut c_char,
    pub rangeHigh: *mut c_char,
    pub precision: c_int,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARDateLimitsStruct {
    pub minDate: c_int,
    pub maxDate: c_int,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARAttachLimitsStruct {
    pub maxSize: ARULong32,
    pub attachType: c_uint,
    pub fullTextOptions: c_uint,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARColumnLimitsStruct {
    pub parent: ARInternalId,
    pub dataField: ARInternalId,
    pub dataSource: c_uint,
    pub colLength: c_uint,
}

/// Table field limits, 5.1 through 7.1.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARTableLimitsStruct51 {
    pub numColumns: c_uint,
    pub qualifier: ARQualifierStruct,
    pub maxRetrieve: c_uint,
    pub schema: ARNameType,
    pub server: ARServerNameType,
}

/// Table field limits from 7.5 on; adds the sample schema used at design time.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARTableLimitsStruct {
    pub numColumns: c_uint,
    pub qualifier: ARQualifierStruct,
    pub maxRetrieve: c_uint,
    pub schema: ARNameType,
    pub server: ARServerNameType,
    pub sampleSchema: ARNameType,
    pub sampleServer: ARServerNameType,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARViewLimitsStruct {
    pub maxLength: c_uint,
}

/// Display-only field limits, 5.1 through 7.1.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARDisplayLimitsStruct51 {
    pub maxLength: c_uint,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARDisplayLimitsStruct {
    pub maxLength: c_uint,
    pub lengthUnits: c_uint,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARCurrencyDetailStruct {
    pub currencyCode: ARCurrencyCodeType,
    pub precision: c_int,
}

pub type ARCurrencyDetailList = ARList<ARCurrencyDetailStruct>;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARCurrencyLimitsStruct {
    pub rangeLow: *mut c_char,
    pub rangeHigh: *mut c_char,
    pub precision: c_int,
    pub functionalCurrencies: ARCurrencyDetailList,
    pub allowableCurrencies: ARCurrencyDetailList,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union ARFieldLimitUnion51 {
    pub intLimits: ARIntegerLimitsStruct,
    pub realLimits: ARRealLimitsStruct,
    pub charLimits: ARCharLimitsStruct51,
    pub diaryLimits: ARDiaryLimitsStruct,
    pub enumLimits: AREnumLimitsStruct,
    pub maskLimits: AREnumLimitsStruct,
    pub decimalLimits: ARDecimalLimitsStruct,
    pub dateLimits: ARDateLimitsStruct,
    pub attachLimits: ARAttachLimitsStruct,
    pub columnLimits: ARColumnLimitsStruct,
    pub tableLimits: ARTableLimitsStruct51,
    pub viewLimits: ARViewLimitsStruct,
    pub displayLimits: ARDisplayLimitsStruct51,
    pub currencyLimits: ARCurrencyLimitsStruct,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union ARFieldLimitUnion {
    pub intLimits: ARIntegerLimitsStruct,
    pub realLimits: ARRealLimitsStruct,
    pub charLimits: ARCharLimitsStruct,
    pub diaryLimits: ARDiaryLimitsStruct,
    pub enumLimits: AREnumLimitsStruct,
    pub maskLimits: AREnumLimitsStruct,
    pub decimalLimits: ARDecimalLimitsStruct,
    pub dateLimits: ARDateLimitsStruct,
    pub attachLimits: ARAttachLimitsStruct,
    pub columnLimits: ARColumnLimitsStruct,
    pub tableLimits: ARTableLimitsStruct,
    pub viewLimits: ARViewLimitsStruct,
    pub displayLimits: ARDisplayLimitsStruct,
    pub currencyLimits: ARCurrencyLimitsStruct,
}

/// Field limits, 5.1 through 7.1.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARFieldLimitStruct51 {
    pub dataType: c_uint,
    pub u: ARFieldLimitUnion51,
}

/// Field limits from 7.5 on.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARFieldLimitStruct {
    pub dataType: c_uint,
    pub u: ARFieldLimitUnion,
}

pub type ARFieldLimitList51 = ARList<ARFieldLimitStruct51>;
pub type ARFieldLimitList = ARList<ARFieldLimitStruct>;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARDisplayInstanceStruct {
    pub vui: ARInternalId,
    pub props: ARPropList,
}

/// Display properties of a field: common properties plus one entry per VUI.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARDisplayInstanceList {
    pub commonProps: ARPropList,
    pub numItems: c_uint,
    pub dInstanceList: *mut ARDisplayInstanceStruct,
}

pub type ARDisplayInstanceListList = ARList<ARDisplayInstanceList>;

// ---- Containers ----

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARContainerOwnerObj {
    pub type_: c_uint,
    pub ownerName: ARNameType,
}

pub type ARContainerOwnerObjList = ARList<ARContainerOwnerObj>;
pub type ARContainerOwnerObjListList = ARList<ARContainerOwnerObjList>;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARExtReferenceStruct {
    pub permittedGroups: ARInternalIdList,
    pub value: ARValueStruct,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union ARReferenceUnion {
    pub name: ARNameType,
    pub extRef: ARExtReferenceStruct,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARReferenceUnionStruct {
    pub dataType: c_uint,
    pub u: ARReferenceUnion,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARReferenceStruct {
    pub label: *mut c_char,
    pub description: *mut c_char,
    pub type_: c_uint,
    pub reference: ARReferenceUnionStruct,
}

pub type ARReferenceList = ARList<ARReferenceStruct>;
pub type ARReferenceListList = ARList<ARReferenceList>;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARContainerInfo {
    pub name: ARNameType,
    pub type_: c_uint,
    pub ownerList: ARContainerOwnerObjList,
}

pub type ARContainerInfoList = ARList<ARContainerInfo>;

// ---- Character menus ----

#[repr(C)]
#[derive(Clone, Copy)]
pub union ARCharMenuItemUnion {
    pub menuValue: *mut c_char,
    pub childMenu: *mut ARCharMenuStruct,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARCharMenuItemStruct {
    pub menuLabel: ARNameType,
    pub menuType: c_uint,
    pub u: ARCharMenuItemUnion,
}

pub type ARCharMenuList = ARList<ARCharMenuItemStruct>;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARCharMenuQueryStruct {
    pub schema: ARNameType,
    pub server: ARServerNameType,
    pub qualifier: *mut ARQualifierStruct,
    pub labelField: [ARInternalId; AR_MAX_LEVELS_DYNAMIC_MENU],
    pub valueField: ARInternalId,
    pub sortOnLabel: ARBoolean,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARCharMenuFileStruct {
    pub fileLocation: c_uint,
    pub filename: *mut c_char,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARCharMenuSQLStruct {
    pub server: ARServerNameType,
    pub sqlCommand: *mut c_char,
    pub labelIndex: [c_int; AR_MAX_LEVELS_DYNAMIC_MENU],
    pub valueIndex: c_int,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union ARCharMenuUnion {
    pub menuList: ARCharMenuList,
    pub menuQuery: ARCharMenuQueryStruct,
    pub menuFile: ARCharMenuFileStruct,
    pub menuSQL: ARCharMenuSQLStruct,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARCharMenuStruct {
    pub menuType: c_uint,
    pub u: ARCharMenuUnion,
}

pub type ARCharMenuStructList = ARList<ARCharMenuStruct>;

// ---- Entries ----

pub type AREntryIdList = ARList<AREntryIdType>;
pub type AREntryIdListList = ARList<AREntryIdList>;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct ARFieldValueStruct {
    pub fieldId: ARInternalId,
    pub value: ARValueStruct,
}

pub type ARFieldValueList = ARList<ARFieldValueStruct>;
pub type ARFieldValueListList = ARList<ARFieldValueList>;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct AREntryListStruct {
    pub entryId: AREntryIdList,
    pub shortDesc: *mut c_char,
}

pub type AREntryListList = ARList<AREntryListStruct>;

zeroable!(
    ARPermissionStruct,
    ARJoinSchema,
    ARViewSchema,
    ARVendorSchema,
    ARCompoundSchemaUnion,
    ARCompoundSchema,
    AREntryListFieldStruct,
    ARSortStruct,
    ARIndexStruct,
    ARDayStruct,
    ARArchiveInfoStruct,
    ARAuditInfoStruct,
    ARJoinMappingStruct,
    ARViewMappingStruct,
    ARFieldMappingUnion,
    ARFieldMappingStruct,
    ARIntegerLimitsStruct,
    ARRealLimitsStruct,
    ARCharLimitsStruct51,
    ARCharLimitsStruct,
    ARDiaryLimitsStruct,
    AREnumItemStruct,
    AREnumLimitsUnion,
    AREnumLimitsStruct,
    ARDecimalLimitsStruct,
    ARDateLimitsStruct,
    ARAttachLimitsStruct,
    ARColumnLimitsStruct,
    ARTableLimitsStruct51,
    ARTableLimitsStruct,
    ARViewLimitsStruct,
    ARDisplayLimitsStruct51,
    ARDisplayLimitsStruct,
    ARCurrencyDetailStruct,
    ARCurrencyLimitsStruct,
    ARFieldLimitUnion51,
    ARFieldLimitUnion,
    ARFieldLimitStruct51,
    ARFieldLimitStruct,
    ARDisplayInstanceStruct,
    ARDisplayInstanceList,
    ARContainerOwnerObj,
    ARExtReferenceStruct,
    ARReferenceUnion,
    ARReferenceUnionStruct,
    ARReferenceStruct,
    ARContainerInfo,
    ARCharMenuItemUnion,
    ARCharMenuItemStruct,
    ARCharMenuQueryStruct,
    ARCharMenuFileStruct,
    ARCharMenuSQLStruct,
    ARCharMenuUnion,
    ARCharMenuStruct,
    ARFieldValueStruct,
    AREntryListStruct,
);
