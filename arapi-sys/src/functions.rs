//! Entry-point signatures, one alias per shape.
//!
//! The suffix names the revision that introduced the shape (`51` = 5.1,
//! `7604` = 7.6.04). A shape stays valid until the next suffix of the same
//! entry point.

use std::os::raw::{c_char, c_int, c_uint, c_void};

use crate::objects::*;
use crate::types::*;
use crate::value::*;
use crate::workflow::*;
use crate::xml::*;

type C = ARControlPtr;
type S = *mut ARStatusList;
type Str = *const c_char;
type OutStr = *mut *mut c_char;
type OutName = *mut ARNameType;
type OutAccess = *mut ARAccessNameType;
type OutTs = *mut ARTimestamp;

/// Every `FreeAR*` routine: pointer to the structure and whether the
/// structure itself (not only its contents) should be released.
pub type ARFreeStructFn = unsafe extern "C" fn(value: *mut c_void, freeStruct: ARBoolean);
/// Release of a bare block (strings) allocated by the native library.
pub type ARFreeFn = unsafe extern "C" fn(ptr: *mut c_void);

// ---- Session ----

pub type ARInitializationFn = unsafe extern "C" fn(C, S) -> c_int;
pub type ARTerminationFn = unsafe extern "C" fn(C, S) -> c_int;
pub type ARVerifyUserFn = unsafe extern "C" fn(
    C,
    adminFlag: *mut ARBoolean,
    subAdminFlag: *mut ARBoolean,
    customFlag: *mut ARBoolean,
    S,
) -> c_int;
pub type ARGetListServerFn = unsafe extern "C" fn(C, serverList: *mut ARServerNameList, S) -> c_int;
pub type ARSetServerPortFn =
    unsafe extern "C" fn(C, server: Str, port: c_int, rpcProgNum: c_int, S) -> c_int;

// ---- Qualifiers ----

pub type ARLoadARQualifierStructFn = unsafe extern "C" fn(
    C,
    schema: Str,
    displayTag: Str,
    qualString: Str,
    qualifier: *mut ARQualifierStruct,
    S,
) -> c_int;
pub type ARDecodeARQualifierStructFn =
    unsafe extern "C" fn(C, qualifier: *const ARQualifierStruct, qualString: OutStr, S) -> c_int;

// ---- Schemas ----

pub type ARGetSchemaFn51 = unsafe extern "C" fn(
    C,
    name: Str,
    schema: *mut ARCompoundSchema,
    groupList: *mut ARPermissionList,
    admingrpList: *mut ARInternalIdList,
    getListFields: *mut AREntryListFieldList,
    sortList: *mut ARSortList,
    indexList: *mut ARIndexList,
    defaultVui: OutName,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    S,
) -> c_int;
pub type ARGetSchemaFn60 = unsafe extern "C" fn(
    C,
    name: Str,
    schema: *mut ARCompoundSchema,
    groupList: *mut ARPermissionList,
    admingrpList: *mut ARInternalIdList,
    getListFields: *mut AREntryListFieldList,
    sortList: *mut ARSortList,
    indexList: *mut ARIndexList,
    archiveInfo: *mut ARArchiveInfoStruct,
    defaultVui: OutName,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    S,
) -> c_int;
pub type ARGetSchemaFn71 = unsafe extern "C" fn(
    C,
    name: Str,
    schema: *mut ARCompoundSchema,
    groupList: *mut ARPermissionList,
    admingrpList: *mut ARInternalIdList,
    getListFields: *mut AREntryListFieldList,
    sortList: *mut ARSortList,
    indexList: *mut ARIndexList,
    archiveInfo: *mut ARArchiveInfoStruct,
    auditInfo: *mut ARAuditInfoStruct,
    defaultVui: OutName,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    S,
) -> c_int;

pub type ARCreateSchemaFn51 = unsafe extern "C" fn(
    C,
    name: Str,
    schema: *const ARCompoundSchema,
    groupList: *const ARPermissionList,
    admingrpList: *const ARInternalIdList,
    getListFields: *const AREntryListFieldList,
    sortList: *const ARSortList,
    indexList: *const ARIndexList,
    defaultVui: Str,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    S,
) -> c_int;
pub type ARCreateSchemaFn60 = unsafe extern "C" fn(
    C,
    name: Str,
    schema: *const ARCompoundSchema,
    groupList: *const ARPermissionList,
    admingrpList: *const ARInternalIdList,
    getListFields: *const AREntryListFieldList,
    sortList: *const ARSortList,
    indexList: *const ARIndexList,
    archiveInfo: *const ARArchiveInfoStruct,
    defaultVui: Str,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    S,
) -> c_int;
pub type ARCreateSchemaFn71 = unsafe extern "C" fn(
    C,
    name: Str,
    schema: *const ARCompoundSchema,
    groupList: *const ARPermissionList,
    admingrpList: *const ARInternalIdList,
    getListFields: *const AREntryListFieldList,
    sortList: *const ARSortList,
    indexList: *const ARIndexList,
    archiveInfo: *const ARArchiveInfoStruct,
    auditInfo: *const ARAuditInfoStruct,
    defaultVui: Str,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;

pub type ARSetSchemaFn51 = unsafe extern "C" fn(
    C,
    name: Str,
    newName: Str,
    schema: *const ARCompoundSchema,
    groupList: *const ARPermissionList,
    admingrpList: *const ARInternalIdList,
    getListFields: *const AREntryListFieldList,
    sortList: *const ARSortList,
    indexList: *const ARIndexList,
    defaultVui: Str,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    S,
) -> c_int;
pub type ARSetSchemaFn60 = unsafe extern "C" fn(
    C,
    name: Str,
    newName: Str,
    schema: *const ARCompoundSchema,
    groupList: *const ARPermissionList,
    admingrpList: *const ARInternalIdList,
    getListFields: *const AREntryListFieldList,
    sortList: *const ARSortList,
    indexList: *const ARIndexList,
    archiveInfo: *const ARArchiveInfoStruct,
    defaultVui: Str,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    S,
) -> c_int;
pub type ARSetSchemaFn71 = unsafe extern "C" fn(
    C,
    name: Str,
    newName: Str,
    schema: *const ARCompoundSchema,
    groupList: *const ARPermissionList,
    admingrpList: *const ARInternalIdList,
    getListFields: *const AREntryListFieldList,
    sortList: *const ARSortList,
    indexList: *const ARIndexList,
    archiveInfo: *const ARArchiveInfoStruct,
    auditInfo: *const ARAuditInfoStruct,
    defaultVui: Str,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;

pub type ARDeleteSchemaFn = unsafe extern "C" fn(C, name: Str, deleteOption: c_uint, S) -> c_int;

pub type ARGetListSchemaFn51 = unsafe extern "C" fn(
    C,
    changedSince: ARTimestamp,
    schemaType: c_uint,
    name: Str,
    fieldIdList: *const ARInternalIdList,
    nameList: *mut ARNameList,
    S,
) -> c_int;
pub type ARGetListSchemaFn70 = unsafe extern "C" fn(
    C,
    changedSince: ARTimestamp,
    schemaType: c_uint,
    name: Str,
    fieldIdList: *const ARInternalIdList,
    objPropList: *const ARPropList,
    nameList: *mut ARNameList,
    S,
) -> c_int;

pub type ARGetMultipleSchemasFn63 = unsafe extern "C" fn(
    C,
    changedSince: ARTimestamp,
    schemaTypeList: *const ARUnsignedIntList,
    nameList: *const ARNameList,
    fieldIdList: *const ARInternalIdList,
    existList: *mut ARBooleanList,
    schemaNameList: *mut ARNameList,
    schemaList: *mut ARCompoundSchemaList,
    groupListList: *mut ARPermissionListList,
    admingrpListList: *mut ARInternalIdListList,
    getListFieldsList: *mut AREntryListFieldListList,
    sortListList: *mut ARSortListList,
    indexListList: *mut ARIndexListList,
    archiveInfoList: *mut ARArchiveInfoList,
    defaultVuiList: *mut ARNameList,
    helpTextList: *mut ARTextStringList,
    timestampList: *mut ARTimestampList,
    ownerList: *mut ARAccessNameList,
    lastChangedList: *mut ARAccessNameList,
    changeDiaryList: *mut ARTextStringList,
    S,
) -> c_int;
pub type ARGetMultipleSchemasFn71 = unsafe extern "C" fn(
    C,
    changedSince: ARTimestamp,
    schemaTypeList: *const ARUnsignedIntList,
    nameList: *const ARNameList,
    fieldIdList: *const ARInternalIdList,
    existList: *mut ARBooleanList,
    schemaNameList: *mut ARNameList,
    schemaList: *mut ARCompoundSchemaList,
    groupListList: *mut ARPermissionListList,
    admingrpListList: *mut ARInternalIdListList,
    getListFieldsList: *mut AREntryListFieldListList,
    sortListList: *mut ARSortListList,
    indexListList: *mut ARIndexListList,
    archiveInfoList: *mut ARArchiveInfoList,
    auditInfoList: *mut ARAuditInfoList,
    defaultVuiList: *mut ARNameList,
    helpTextList: *mut ARTextStringList,
    timestampList: *mut ARTimestampList,
    ownerList: *mut ARAccessNameList,
    lastChangedList: *mut ARAccessNameList,
    changeDiaryList: *mut ARTextStringList,
    objPropListList: *mut ARPropListList,
    S,
) -> c_int;

// ---- Fields ----

pub type ARGetFieldFn51 = unsafe extern "C" fn(
    C,
    schema: Str,
    fieldId: ARInternalId,
    fieldName: OutName,
    fieldMap: *mut ARFieldMappingStruct,
    dataType: *mut c_uint,
    option: *mut c_uint,
    createMode: *mut c_uint,
    defaultVal: *mut ARValueStruct,
    permissions: *mut ARPermissionList,
    limit: *mut ARFieldLimitStruct51,
    dInstanceList: *mut ARDisplayInstanceList,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    S,
) -> c_int;
pub type ARGetFieldFn70 = unsafe extern "C" fn(
    C,
    schema: Str,
    fieldId: ARInternalId,
    fieldName: OutName,
    fieldMap: *mut ARFieldMappingStruct,
    dataType: *mut c_uint,
    option: *mut c_uint,
    createMode: *mut c_uint,
    fieldOption: *mut c_uint,
    defaultVal: *mut ARValueStruct,
    permissions: *mut ARPermissionList,
    limit: *mut ARFieldLimitStruct51,
    dInstanceList: *mut ARDisplayInstanceList,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    S,
) -> c_int;
pub type ARGetFieldFn75 = unsafe extern "C" fn(
    C,
    schema: Str,
    fieldId: ARInternalId,
    fieldName: OutName,
    fieldMap: *mut ARFieldMappingStruct,
    dataType: *mut c_uint,
    option: *mut c_uint,
    createMode: *mut c_uint,
    fieldOption: *mut c_uint,
    defaultVal: *mut ARValueStruct,
    permissions: *mut ARPermissionList,
    limit: *mut ARFieldLimitStruct,
    dInstanceList: *mut ARDisplayInstanceList,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    S,
) -> c_int;

pub type ARCreateFieldFn51 = unsafe extern "C" fn(
    C,
    schema: Str,
    fieldId: *mut ARInternalId,
    reservedIdOK: ARBoolean,
    fieldName: Str,
    fieldMap: *const ARFieldMappingStruct,
    dataType: c_uint,
    option: c_uint,
    createMode: c_uint,
    defaultVal: *const ARValueStruct,
    permissions: *const ARPermissionList,
    limit: *const ARFieldLimitStruct51,
    dInstanceList: *const ARDisplayInstanceList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    S,
) -> c_int;
pub type ARCreateFieldFn70 = unsafe extern "C" fn(
    C,
    schema: Str,
    fieldId: *mut ARInternalId,
    reservedIdOK: ARBoolean,
    fieldName: Str,
    fieldMap: *const ARFieldMappingStruct,
    dataType: c_uint,
    option: c_uint,
    createMode: c_uint,
    fieldOption: c_uint,
    defaultVal: *const ARValueStruct,
    permissions: *const ARPermissionList,
    limit: *const ARFieldLimitStruct51,
    dInstanceList: *const ARDisplayInstanceList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;
pub type ARCreateFieldFn75 = unsafe extern "C" fn(
    C,
    schema: Str,
    fieldId: *mut ARInternalId,
    reservedIdOK: ARBoolean,
    fieldName: Str,
    fieldMap: *const ARFieldMappingStruct,
    dataType: c_uint,
    option: c_uint,
    createMode: c_uint,
    fieldOption: c_uint,
    defaultVal: *const ARValueStruct,
    permissions: *const ARPermissionList,
    limit: *const ARFieldLimitStruct,
    dInstanceList: *const ARDisplayInstanceList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;

pub type ARSetFieldFn51 = unsafe extern "C" fn(
    C,
    schema: Str,
    fieldId: ARInternalId,
    fieldName: Str,
    fieldMap: *const ARFieldMappingStruct,
    option: *const c_uint,
    createMode: *const c_uint,
    defaultVal: *const ARValueStruct,
    permissions: *const ARPermissionList,
    limit: *const ARFieldLimitStruct51,
    dInstanceList: *const ARDisplayInstanceList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    S,
) -> c_int;
pub type ARSetFieldFn70 = unsafe extern "C" fn(
    C,
    schema: Str,
    fieldId: ARInternalId,
    fieldName: Str,
    fieldMap: *const ARFieldMappingStruct,
    option: *const c_uint,
    createMode: *const c_uint,
    fieldOption: *const c_uint,
    defaultVal: *const ARValueStruct,
    permissions: *const ARPermissionList,
    limit: *const ARFieldLimitStruct51,
    dInstanceList: *const ARDisplayInstanceList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;
pub type ARSetFieldFn75 = unsafe extern "C" fn(
    C,
    schema: Str,
    fieldId: ARInternalId,
    fieldName: Str,
    fieldMap: *const ARFieldMappingStruct,
    option: *const c_uint,
    createMode: *const c_uint,
    fieldOption: *const c_uint,
    defaultVal: *const ARValueStruct,
    permissions: *const ARPermissionList,
    limit: *const ARFieldLimitStruct,
    dInstanceList: *const ARDisplayInstanceList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;
/// 7.6.04 inserts `setFieldOptions` after the id and moves `fieldOption`
/// behind the change diary.
pub type ARSetFieldFn7604 = unsafe extern "C" fn(
    C,
    schema: Str,
    fieldId: ARInternalId,
    setFieldOptions: c_uint,
    fieldName: Str,
    fieldMap: *const ARFieldMappingStruct,
    option: *const c_uint,
    createMode: *const c_uint,
    defaultVal: *const ARValueStruct,
    permissions: *const ARPermissionList,
    limit: *const ARFieldLimitStruct,
    dInstanceList: *const ARDisplayInstanceList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    fieldOption: *const c_uint,
    objPropList: *const ARPropList,
    S,
) -> c_int;

pub type ARDeleteFieldFn =
    unsafe extern "C" fn(C, schema: Str, fieldId: ARInternalId, deleteOption: c_uint, S) -> c_int;

pub type ARGetListFieldFn51 = unsafe extern "C" fn(
    C,
    schema: Str,
    changedSince: ARTimestamp,
    fieldType: c_uint,
    idList: *mut ARInternalIdList,
    S,
) -> c_int;
pub type ARGetListFieldFn70 = unsafe extern "C" fn(
    C,
    schema: Str,
    changedSince: ARTimestamp,
    fieldType: c_uint,
    objPropList: *const ARPropList,
    idList: *mut ARInternalIdList,
    S,
) -> c_int;

pub type ARGetMultipleFieldsFn51 = unsafe extern "C" fn(
    C,
    schema: Str,
    fieldIdList: *const ARInternalIdList,
    existList: *mut ARBooleanList,
    fieldIdListOut: *mut ARInternalIdList,
    fieldNameList: *mut ARNameList,
    fieldMapList: *mut ARFieldMappingList,
    dataTypeList: *mut ARUnsignedIntList,
    optionList: *mut ARUnsignedIntList,
    createModeList: *mut ARUnsignedIntList,
    defaultValList: *mut ARValueList,
    permissionListList: *mut ARPermissionListList,
    limitList: *mut ARFieldLimitList51,
    dInstanceListList: *mut ARDisplayInstanceListList,
    helpTextList: *mut ARTextStringList,
    timestampList: *mut ARTimestampList,
    ownerList: *mut ARAccessNameList,
    lastChangedList: *mut ARAccessNameList,
    changeDiaryList: *mut ARTextStringList,
    S,
) -> c_int;
pub type ARGetMultipleFieldsFn70 = unsafe extern "C" fn(
    C,
    schema: Str,
    fieldIdList: *const ARInternalIdList,
    existList: *mut ARBooleanList,
    fieldIdListOut: *mut ARInternalIdList,
    fieldNameList: *mut ARNameList,
    fieldMapList: *mut ARFieldMappingList,
    dataTypeList: *mut ARUnsignedIntList,
    optionList: *mut ARUnsignedIntList,
    createModeList: *mut ARUnsignedIntList,
    fieldOptionList: *mut ARUnsignedIntList,
    defaultValList: *mut ARValueList,
    permissionListList: *mut ARPermissionListList,
    limitList: *mut ARFieldLimitList51,
    dInstanceListList: *mut ARDisplayInstanceListList,
    helpTextList: *mut ARTextStringList,
    timestampList: *mut ARTimestampList,
    ownerList: *mut ARAccessNameList,
    lastChangedList: *mut ARAccessNameList,
    changeDiaryList: *mut ARTextStringList,
    objPropListList: *mut ARPropListList,
    S,
) -> c_int;
pub type ARGetMultipleFieldsFn75 = unsafe extern "C" fn(
    C,
    schema: Str,
    fieldIdList: *const ARInternalIdList,
    existList: *mut ARBooleanList,
    fieldIdListOut: *mut ARInternalIdList,
    fieldNameList: *mut ARNameList,
    fieldMapList: *mut ARFieldMappingList,
    dataTypeList: *mut ARUnsignedIntList,
    optionList: *mut ARUnsignedIntList,
    createModeList: *mut ARUnsignedIntList,
    fieldOptionList: *mut ARUnsignedIntList,
    defaultValList: *mut ARValueList,
    permissionListList: *mut ARPermissionListList,
    limitList: *mut ARFieldLimitList,
    dInstanceListList: *mut ARDisplayInstanceListList,
    helpTextList: *mut ARTextStringList,
    timestampList: *mut ARTimestampList,
    ownerList: *mut ARAccessNameList,
    lastChangedList: *mut ARAccessNameList,
    changeDiaryList: *mut ARTextStringList,
    objPropListList: *mut ARPropListList,
    S,
) -> c_int;

// ---- Active links ----

pub type ARGetActiveLinkFn51 = unsafe extern "C" fn(
    C,
    name: Str,
    executionOrder: *mut c_uint,
    workflowConnect: *mut ARWorkflowConnectStruct,
    groupList: *mut ARInternalIdList,
    executeMask: *mut c_uint,
    controlField: *mut ARInternalId,
    focusField: *mut ARInternalId,
    enable: *mut c_uint,
    query: *mut ARQualifierStruct,
    actionList: *mut ARActiveLinkActionList,
    elseList: *mut ARActiveLinkActionList,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    S,
) -> c_int;
pub type ARGetActiveLinkFn63 = unsafe extern "C" fn(
    C,
    name: Str,
    executionOrder: *mut c_uint,
    workflowConnect: *mut ARWorkflowConnectStruct,
    groupList: *mut ARInternalIdList,
    executeMask: *mut c_uint,
    controlField: *mut ARInternalId,
    focusField: *mut ARInternalId,
    enable: *mut c_uint,
    query: *mut ARQualifierStruct,
    actionList: *mut ARActiveLinkActionList,
    elseList: *mut ARActiveLinkActionList,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    S,
) -> c_int;
pub type ARGetActiveLinkFn7603 = unsafe extern "C" fn(
    C,
    name: Str,
    executionOrder: *mut c_uint,
    workflowConnect: *mut ARWorkflowConnectStruct,
    groupList: *mut ARInternalIdList,
    executeMask: *mut c_uint,
    controlField: *mut ARInternalId,
    focusField: *mut ARInternalId,
    enable: *mut c_uint,
    query: *mut ARQualifierStruct,
    actionList: *mut ARActiveLinkActionList,
    elseList: *mut ARActiveLinkActionList,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    errorActlinkOptions: *mut c_uint,
    errorActlinkName: OutName,
    S,
) -> c_int;

pub type ARCreateActiveLinkFn51 = unsafe extern "C" fn(
    C,
    name: Str,
    order: c_uint,
    workflowConnect: *const ARWorkflowConnectStruct,
    groupList: *const ARInternalIdList,
    executeMask: c_uint,
    controlField: *const ARInternalId,
    focusField: *const ARInternalId,
    enable: c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARActiveLinkActionList,
    elseList: *const ARActiveLinkActionList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    S,
) -> c_int;
pub type ARCreateActiveLinkFn63 = unsafe extern "C" fn(
    C,
    name: Str,
    order: c_uint,
    workflowConnect: *const ARWorkflowConnectStruct,
    groupList: *const ARInternalIdList,
    executeMask: c_uint,
    controlField: *const ARInternalId,
    focusField: *const ARInternalId,
    enable: c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARActiveLinkActionList,
    elseList: *const ARActiveLinkActionList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;
pub type ARCreateActiveLinkFn7603 = unsafe extern "C" fn(
    C,
    name: Str,
    order: c_uint,
    workflowConnect: *const ARWorkflowConnectStruct,
    groupList: *const ARInternalIdList,
    executeMask: c_uint,
    controlField: *const ARInternalId,
    focusField: *const ARInternalId,
    enable: c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARActiveLinkActionList,
    elseList: *const ARActiveLinkActionList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    errorActlinkOptions: c_uint,
    errorActlinkName: Str,
    S,
) -> c_int;

pub type ARSetActiveLinkFn51 = unsafe extern "C" fn(
    C,
    name: Str,
    newName: Str,
    order: *const c_uint,
    workflowConnect: *const ARWorkflowConnectStruct,
    groupList: *const ARInternalIdList,
    executeMask: *const c_uint,
    controlField: *const ARInternalId,
    focusField: *const ARInternalId,
    enable: *const c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARActiveLinkActionList,
    elseList: *const ARActiveLinkActionList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    S,
) -> c_int;
pub type ARSetActiveLinkFn63 = unsafe extern "C" fn(
    C,
    name: Str,
    newName: Str,
    order: *const c_uint,
    workflowConnect: *const ARWorkflowConnectStruct,
    groupList: *const ARInternalIdList,
    executeMask: *const c_uint,
    controlField: *const ARInternalId,
    focusField: *const ARInternalId,
    enable: *const c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARActiveLinkActionList,
    elseList: *const ARActiveLinkActionList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;
pub type ARSetActiveLinkFn7603 = unsafe extern "C" fn(
    C,
    name: Str,
    newName: Str,
    order: *const c_uint,
    workflowConnect: *const ARWorkflowConnectStruct,
    groupList: *const ARInternalIdList,
    executeMask: *const c_uint,
    controlField: *const ARInternalId,
    focusField: *const ARInternalId,
    enable: *const c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARActiveLinkActionList,
    elseList: *const ARActiveLinkActionList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    errorActlinkOptions: *const c_uint,
    errorActlinkName: Str,
    S,
) -> c_int;

pub type ARDeleteActiveLinkFn = unsafe extern "C" fn(C, name: Str, S) -> c_int;

pub type ARGetListActiveLinkFn51 = unsafe extern "C" fn(
    C,
    schema: Str,
    changedSince: ARTimestamp,
    nameList: *mut ARNameList,
    S,
) -> c_int;
pub type ARGetListActiveLinkFn63 = unsafe extern "C" fn(
    C,
    schema: Str,
    changedSince: ARTimestamp,
    objPropList: *const ARPropList,
    nameList: *mut ARNameList,
    S,
) -> c_int;

pub type ARGetMultipleActiveLinksFn63 = unsafe extern "C" fn(
    C,
    changedSince: ARTimestamp,
    nameList: *const ARNameList,
    existList: *mut ARBooleanList,
    actLinkNameList: *mut ARNameList,
    orderList: *mut ARUnsignedIntList,
    workflowConnectList: *mut ARWorkflowConnectList,
    groupListList: *mut ARInternalIdListList,
    executeMaskList: *mut ARUnsignedIntList,
    controlFieldList: *mut ARInternalIdList,
    focusFieldList: *mut ARInternalIdList,
    enableList: *mut ARUnsignedIntList,
    queryList: *mut ARQualifierList,
    actionListList: *mut ARActiveLinkActionListList,
    elseListList: *mut ARActiveLinkActionListList,
    helpTextList: *mut ARTextStringList,
    timestampList: *mut ARTimestampList,
    ownerList: *mut ARAccessNameList,
    lastChangedList: *mut ARAccessNameList,
    changeDiaryList: *mut ARTextStringList,
    objPropListList: *mut ARPropListList,
    S,
) -> c_int;
pub type ARGetMultipleActiveLinksFn7603 = unsafe extern "C" fn(
    C,
    changedSince: ARTimestamp,
    nameList: *const ARNameList,
    existList: *mut ARBooleanList,
    actLinkNameList: *mut ARNameList,
    orderList: *mut ARUnsignedIntList,
    workflowConnectList: *mut ARWorkflowConnectList,
    groupListList: *mut ARInternalIdListList,
    executeMaskList: *mut ARUnsignedIntList,
    controlFieldList: *mut ARInternalIdList,
    focusFieldList: *mut ARInternalIdList,
    enableList: *mut ARUnsignedIntList,
    queryList: *mut ARQualifierList,
    actionListList: *mut ARActiveLinkActionListList,
    elseListList: *mut ARActiveLinkActionListList,
    helpTextList: *mut ARTextStringList,
    timestampList: *mut ARTimestampList,
    ownerList: *mut ARAccessNameList,
    lastChangedList: *mut ARAccessNameList,
    changeDiaryList: *mut ARTextStringList,
    objPropListList: *mut ARPropListList,
    errorActlinkOptionsList: *mut ARUnsignedIntList,
    errorActlinkNameList: *mut ARNameList,
    S,
) -> c_int;

// ---- Filters ----

pub type ARGetFilterFn51 = unsafe extern "C" fn(
    C,
    name: Str,
    order: *mut c_uint,
    workflowConnect: *mut ARWorkflowConnectStruct,
    opSet: *mut c_uint,
    enable: *mut c_uint,
    query: *mut ARQualifierStruct,
    actionList: *mut ARFilterActionList,
    elseList: *mut ARFilterActionList,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    S,
) -> c_int;
pub type ARGetFilterFn63 = unsafe extern "C" fn(
    C,
    name: Str,
    order: *mut c_uint,
    workflowConnect: *mut ARWorkflowConnectStruct,
    opSet: *mut c_uint,
    enable: *mut c_uint,
    query: *mut ARQualifierStruct,
    actionList: *mut ARFilterActionList,
    elseList: *mut ARFilterActionList,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    S,
) -> c_int;
pub type ARGetFilterFn71 = unsafe extern "C" fn(
    C,
    name: Str,
    order: *mut c_uint,
    workflowConnect: *mut ARWorkflowConnectStruct,
    opSet: *mut c_uint,
    enable: *mut c_uint,
    query: *mut ARQualifierStruct,
    actionList: *mut ARFilterActionList,
    elseList: *mut ARFilterActionList,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    errorFilterOptions: *mut c_uint,
    errorFilterName: OutName,
    S,
) -> c_int;

pub type ARCreateFilterFn51 = unsafe extern "C" fn(
    C,
    name: Str,
    order: c_uint,
    workflowConnect: *const ARWorkflowConnectStruct,
    opSet: c_uint,
    enable: c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARFilterActionList,
    elseList: *const ARFilterActionList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    S,
) -> c_int;
pub type ARCreateFilterFn63 = unsafe extern "C" fn(
    C,
    name: Str,
    order: c_uint,
    workflowConnect: *const ARWorkflowConnectStruct,
    opSet: c_uint,
    enable: c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARFilterActionList,
    elseList: *const ARFilterActionList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;
pub type ARCreateFilterFn71 = unsafe extern "C" fn(
    C,
    name: Str,
    order: c_uint,
    workflowConnect: *const ARWorkflowConnectStruct,
    opSet: c_uint,
    enable: c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARFilterActionList,
    elseList: *const ARFilterActionList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    errorFilterOptions: c_uint,
    errorFilterName: Str,
    S,
) -> c_int;

pub type ARSetFilterFn51 = unsafe extern "C" fn(
    C,
    name: Str,
    newName: Str,
    order: *const c_uint,
    workflowConnect: *const ARWorkflowConnectStruct,
    opSet: *const c_uint,
    enable: *const c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARFilterActionList,
    elseList: *const ARFilterActionList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    S,
) -> c_int;
pub type ARSetFilterFn63 = unsafe extern "C" fn(
    C,
    name: Str,
    newName: Str,
    order: *const c_uint,
    workflowConnect: *const ARWorkflowConnectStruct,
    opSet: *const c_uint,
    enable: *const c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARFilterActionList,
    elseList: *const ARFilterActionList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;
pub type ARSetFilterFn71 = unsafe extern "C" fn(
    C,
    name: Str,
    newName: Str,
    order: *const c_uint,
    workflowConnect: *const ARWorkflowConnectStruct,
    opSet: *const c_uint,
    enable: *const c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARFilterActionList,
    elseList: *const ARFilterActionList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    errorFilterOptions: *const c_uint,
    errorFilterName: Str,
    S,
) -> c_int;

pub type ARDeleteFilterFn = unsafe extern "C" fn(C, name: Str, deleteOption: c_uint, S) -> c_int;

pub type ARGetListFilterFn51 = ARGetListActiveLinkFn51;
pub type ARGetListFilterFn63 = ARGetListActiveLinkFn63;

pub type ARGetMultipleFiltersFn63 = unsafe extern "C" fn(
    C,
    changedSince: ARTimestamp,
    nameList: *const ARNameList,
    existList: *mut ARBooleanList,
    filterNameList: *mut ARNameList,
    orderList: *mut ARUnsignedIntList,
    workflowConnectList: *mut ARWorkflowConnectList,
    opSetList: *mut ARUnsignedIntList,
    enableList: *mut ARUnsignedIntList,
    queryList: *mut ARQualifierList,
    actionListList: *mut ARFilterActionListList,
    elseListList: *mut ARFilterActionListList,
    helpTextList: *mut ARTextStringList,
    timestampList: *mut ARTimestampList,
    ownerList: *mut ARAccessNameList,
    lastChangedList: *mut ARAccessNameList,
    changeDiaryList: *mut ARTextStringList,
    objPropListList: *mut ARPropListList,
    S,
) -> c_int;
pub type ARGetMultipleFiltersFn71 = unsafe extern "C" fn(
    C,
    changedSince: ARTimestamp,
    nameList: *const ARNameList,
    existList: *mut ARBooleanList,
    filterNameList: *mut ARNameList,
    orderList: *mut ARUnsignedIntList,
    workflowConnectList: *mut ARWorkflowConnectList,
    opSetList: *mut ARUnsignedIntList,
    enableList: *mut ARUnsignedIntList,
    queryList: *mut ARQualifierList,
    actionListList: *mut ARFilterActionListList,
    elseListList: *mut ARFilterActionListList,
    helpTextList: *mut ARTextStringList,
    timestampList: *mut ARTimestampList,
    ownerList: *mut ARAccessNameList,
    lastChangedList: *mut ARAccessNameList,
    changeDiaryList: *mut ARTextStringList,
    objPropListList: *mut ARPropListList,
    errorFilterOptionsList: *mut ARUnsignedIntList,
    errorFilterNameList: *mut ARNameList,
    S,
) -> c_int;

// ---- Escalations ----

pub type ARGetEscalationFn51 = unsafe extern "C" fn(
    C,
    name: Str,
    escalationTm: *mut AREscalationTmStruct,
    schemaList: *mut ARWorkflowConnectStruct,
    enable: *mut c_uint,
    query: *mut ARQualifierStruct,
    actionList: *mut ARFilterActionList,
    elseList: *mut ARFilterActionList,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    S,
) -> c_int;
pub type ARGetEscalationFn63 = unsafe extern "C" fn(
    C,
    name: Str,
    escalationTm: *mut AREscalationTmStruct,
    schemaList: *mut ARWorkflowConnectStruct,
    enable: *mut c_uint,
    query: *mut ARQualifierStruct,
    actionList: *mut ARFilterActionList,
    elseList: *mut ARFilterActionList,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    S,
) -> c_int;
pub type ARGetEscalationFn81 = unsafe extern "C" fn(
    C,
    name: Str,
    escalationTm: *mut AREscalationTmStruct,
    schemaList: *mut ARWorkflowConnectStruct,
    enable: *mut c_uint,
    query: *mut ARQualifierStruct,
    actionList: *mut ARFilterActionList,
    elseList: *mut ARFilterActionList,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    errorEscalationOptions: *mut c_uint,
    errorEscalationName: OutName,
    S,
) -> c_int;

pub type ARCreateEscalationFn51 = unsafe extern "C" fn(
    C,
    name: Str,
    escalationTm: *const AREscalationTmStruct,
    schemaList: *const ARWorkflowConnectStruct,
    enable: c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARFilterActionList,
    elseList: *const ARFilterActionList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    S,
) -> c_int;
pub type ARCreateEscalationFn63 = unsafe extern "C" fn(
    C,
    name: Str,
    escalationTm: *const AREscalationTmStruct,
    schemaList: *const ARWorkflowConnectStruct,
    enable: c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARFilterActionList,
    elseList: *const ARFilterActionList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;
pub type ARCreateEscalationFn81 = unsafe extern "C" fn(
    C,
    name: Str,
    escalationTm: *const AREscalationTmStruct,
    schemaList: *const ARWorkflowConnectStruct,
    enable: c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARFilterActionList,
    elseList: *const ARFilterActionList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    errorEscalationOptions: c_uint,
    errorEscalationName: Str,
    S,
) -> c_int;

pub type ARSetEscalationFn51 = unsafe extern "C" fn(
    C,
    name: Str,
    newName: Str,
    escalationTm: *const AREscalationTmStruct,
    schemaList: *const ARWorkflowConnectStruct,
    enable: *const c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARFilterActionList,
    elseList: *const ARFilterActionList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    S,
) -> c_int;
pub type ARSetEscalationFn63 = unsafe extern "C" fn(
    C,
    name: Str,
    newName: Str,
    escalationTm: *const AREscalationTmStruct,
    schemaList: *const ARWorkflowConnectStruct,
    enable: *const c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARFilterActionList,
    elseList: *const ARFilterActionList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;
pub type ARSetEscalationFn81 = unsafe extern "C" fn(
    C,
    name: Str,
    newName: Str,
    escalationTm: *const AREscalationTmStruct,
    schemaList: *const ARWorkflowConnectStruct,
    enable: *const c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARFilterActionList,
    elseList: *const ARFilterActionList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    errorEscalationOptions: *const c_uint,
    errorEscalationName: Str,
    S,
) -> c_int;

pub type ARDeleteEscalationFn = ARDeleteFilterFn;
pub type ARGetListEscalationFn51 = ARGetListActiveLinkFn51;
pub type ARGetListEscalationFn63 = ARGetListActiveLinkFn63;

pub type ARGetMultipleEscalationsFn63 = unsafe extern "C" fn(
    C,
    changedSince: ARTimestamp,
    nameList: *const ARNameList,
    existList: *mut ARBooleanList,
    escalationNameList: *mut ARNameList,
    escalationTmList: *mut AREscalationTmList,
    workflowList: *mut ARWorkflowConnectList,
    enableList: *mut ARUnsignedIntList,
    queryList: *mut ARQualifierList,
    actionListList: *mut ARFilterActionListList,
    elseListList: *mut ARFilterActionListList,
    helpTextList: *mut ARTextStringList,
    timestampList: *mut ARTimestampList,
    ownerList: *mut ARAccessNameList,
    lastChangedList: *mut ARAccessNameList,
    changeDiaryList: *mut ARTextStringList,
    objPropListList: *mut ARPropListList,
    S,
) -> c_int;
pub type ARGetMultipleEscalationsFn81 = unsafe extern "C" fn(
    C,
    changedSince: ARTimestamp,
    nameList: *const ARNameList,
    existList: *mut ARBooleanList,
    escalationNameList: *mut ARNameList,
    escalationTmList: *mut AREscalationTmList,
    workflowList: *mut ARWorkflowConnectList,
    enableList: *mut ARUnsignedIntList,
    queryList: *mut ARQualifierList,
    actionListList: *mut ARFilterActionListList,
    elseListList: *mut ARFilterActionListList,
    helpTextList: *mut ARTextStringList,
    timestampList: *mut ARTimestampList,
    ownerList: *mut ARAccessNameList,
    lastChangedList: *mut ARAccessNameList,
    changeDiaryList: *mut ARTextStringList,
    objPropListList: *mut ARPropListList,
    errorEscalationOptionsList: *mut ARUnsignedIntList,
    errorEscalationNameList: *mut ARNameList,
    S,
) -> c_int;

// ---- Containers ----

/// Note the native order: owner comes before the timestamp here.
pub type ARGetContainerFn51 = unsafe extern "C" fn(
    C,
    name: Str,
    refTypes: *const ARReferenceTypeList,
    groupList: *mut ARPermissionList,
    admingrpList: *mut ARInternalIdList,
    ownerObjList: *mut ARContainerOwnerObjList,
    label: OutStr,
    description: OutStr,
    type_: *mut c_uint,
    references: *mut ARReferenceList,
    helpText: OutStr,
    owner: OutAccess,
    timestamp: OutTs,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    S,
) -> c_int;
pub type ARGetContainerFn80 = unsafe extern "C" fn(
    C,
    name: Str,
    refTypes: *const ARReferenceTypeList,
    groupList: *mut ARPermissionList,
    admingrpList: *mut ARInternalIdList,
    ownerObjList: *mut ARContainerOwnerObjList,
    label: OutStr,
    description: OutStr,
    type_: *mut c_uint,
    references: *mut ARReferenceList,
    helpText: OutStr,
    owner: OutAccess,
    timestamp: OutTs,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    S,
) -> c_int;

pub type ARCreateContainerFn51 = unsafe extern "C" fn(
    C,
    name: Str,
    groupList: *const ARPermissionList,
    admingrpList: *const ARInternalIdList,
    ownerObjList: *const ARContainerOwnerObjList,
    label: Str,
    description: Str,
    type_: c_uint,
    references: *const ARReferenceList,
    removeFlag: ARBoolean,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    S,
) -> c_int;
pub type ARCreateContainerFn80 = unsafe extern "C" fn(
    C,
    name: Str,
    groupList: *const ARPermissionList,
    admingrpList: *const ARInternalIdList,
    ownerObjList: *const ARContainerOwnerObjList,
    label: Str,
    description: Str,
    type_: c_uint,
    references: *const ARReferenceList,
    removeFlag: ARBoolean,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;

pub type ARSetContainerFn51 = unsafe extern "C" fn(
    C,
    name: Str,
    newName: Str,
    groupList: *const ARPermissionList,
    admingrpList: *const ARInternalIdList,
    ownerObjList: *const ARContainerOwnerObjList,
    label: Str,
    description: Str,
    type_: *const c_uint,
    references: *const ARReferenceList,
    removeFlag: ARBoolean,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    S,
) -> c_int;
pub type ARSetContainerFn80 = unsafe extern "C" fn(
    C,
    name: Str,
    newName: Str,
    groupList: *const ARPermissionList,
    admingrpList: *const ARInternalIdList,
    ownerObjList: *const ARContainerOwnerObjList,
    label: Str,
    description: Str,
    type_: *const c_uint,
    references: *const ARReferenceList,
    removeFlag: ARBoolean,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;

pub type ARDeleteContainerFn = ARDeleteFilterFn;

pub type ARGetListContainerFn51 = unsafe extern "C" fn(
    C,
    changedSince: ARTimestamp,
    containerTypes: *const ARContainerTypeList,
    attributes: c_uint,
    ownerObj: *const ARContainerOwnerObj,
    conList: *mut ARContainerInfoList,
    S,
) -> c_int;
pub type ARGetListContainerFn80 = unsafe extern "C" fn(
    C,
    changedSince: ARTimestamp,
    containerTypes: *const ARContainerTypeList,
    attributes: c_uint,
    ownerObj: *const ARContainerOwnerObj,
    objPropList: *const ARPropList,
    conList: *mut ARContainerInfoList,
    S,
) -> c_int;

pub type ARGetMultipleContainersFn63 = unsafe extern "C" fn(
    C,
    changedSince: ARTimestamp,
    nameList: *const ARNameList,
    refTypes: *const ARReferenceTypeList,
    existList: *mut ARBooleanList,
    containerNameList: *mut ARNameList,
    groupListList: *mut ARPermissionListList,
    admingrpListList: *mut ARInternalIdListList,
    ownerObjListList: *mut ARContainerOwnerObjListList,
    labelList: *mut ARTextStringList,
    descriptionList: *mut ARTextStringList,
    typeList: *mut ARUnsignedIntList,
    referenceList: *mut ARReferenceListList,
    helpTextList: *mut ARTextStringList,
    ownerList: *mut ARAccessNameList,
    timestampList: *mut ARTimestampList,
    lastChangedList: *mut ARAccessNameList,
    changeDiaryList: *mut ARTextStringList,
    S,
) -> c_int;
pub type ARGetMultipleContainersFn80 = unsafe extern "C" fn(
    C,
    changedSince: ARTimestamp,
    nameList: *const ARNameList,
    refTypes: *const ARReferenceTypeList,
    existList: *mut ARBooleanList,
    containerNameList: *mut ARNameList,
    groupListList: *mut ARPermissionListList,
    admingrpListList: *mut ARInternalIdListList,
    ownerObjListList: *mut ARContainerOwnerObjListList,
    labelList: *mut ARTextStringList,
    descriptionList: *mut ARTextStringList,
    typeList: *mut ARUnsignedIntList,
    referenceList: *mut ARReferenceListList,
    helpTextList: *mut ARTextStringList,
    ownerList: *mut ARAccessNameList,
    timestampList: *mut ARTimestampList,
    lastChangedList: *mut ARAccessNameList,
    changeDiaryList: *mut ARTextStringList,
    objPropListList: *mut ARPropListList,
    S,
) -> c_int;

// ---- VUIs ----

pub type ARGetVUIFn51 = unsafe extern "C" fn(
    C,
    schema: Str,
    vuiId: ARInternalId,
    vuiName: OutName,
    locale: *mut ARLocaleType,
    vuiType: *mut c_uint,
    dPropList: *mut ARPropList,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    S,
) -> c_int;
pub type ARGetVUIFn63 = unsafe extern "C" fn(
    C,
    schema: Str,
    vuiId: ARInternalId,
    vuiName: OutName,
    locale: *mut ARLocaleType,
    vuiType: *mut c_uint,
    dPropList: *mut ARPropList,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    S,
) -> c_int;

pub type ARCreateVUIFn51 = unsafe extern "C" fn(
    C,
    schema: Str,
    vuiId: *mut ARInternalId,
    vuiName: Str,
    locale: Str,
    vuiType: c_uint,
    dPropList: *const ARPropList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    S,
) -> c_int;
pub type ARCreateVUIFn63 = unsafe extern "C" fn(
    C,
    schema: Str,
    vuiId: *mut ARInternalId,
    vuiName: Str,
    locale: Str,
    vuiType: c_uint,
    dPropList: *const ARPropList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;

pub type ARSetVUIFn51 = unsafe extern "C" fn(
    C,
    schema: Str,
    vuiId: ARInternalId,
    vuiName: Str,
    locale: Str,
    vuiType: *const c_uint,
    dPropList: *const ARPropList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    S,
) -> c_int;
pub type ARSetVUIFn63 = unsafe extern "C" fn(
    C,
    schema: Str,
    vuiId: ARInternalId,
    vuiName: Str,
    locale: Str,
    vuiType: *const c_uint,
    dPropList: *const ARPropList,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;

pub type ARDeleteVUIFn = unsafe extern "C" fn(C, schema: Str, vuiId: ARInternalId, S) -> c_int;

pub type ARGetListVUIFn = unsafe extern "C" fn(
    C,
    schema: Str,
    changedSince: ARTimestamp,
    idList: *mut ARInternalIdList,
    S,
) -> c_int;

pub type ARGetMultipleVUIsFn63 = unsafe extern "C" fn(
    C,
    schema: Str,
    wantedVuiIds: *const ARInternalIdList,
    changedSince: ARTimestamp,
    existList: *mut ARBooleanList,
    gotVuiIds: *mut ARInternalIdList,
    vuiNameList: *mut ARNameList,
    localeList: *mut ARLocaleList,
    vuiTypeList: *mut ARUnsignedIntList,
    dPropListList: *mut ARPropListList,
    helpTextList: *mut ARTextStringList,
    timestampList: *mut ARTimestampList,
    ownerList: *mut ARAccessNameList,
    lastChangedList: *mut ARAccessNameList,
    changeDiaryList: *mut ARTextStringList,
    objPropListList: *mut ARPropListList,
    S,
) -> c_int;

// ---- Character menus ----

pub type ARGetCharMenuFn51 = unsafe extern "C" fn(
    C,
    name: Str,
    refreshCode: *mut c_uint,
    menuDefn: *mut ARCharMenuStruct,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    S,
) -> c_int;
pub type ARGetCharMenuFn63 = unsafe extern "C" fn(
    C,
    name: Str,
    refreshCode: *mut c_uint,
    menuDefn: *mut ARCharMenuStruct,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    S,
) -> c_int;

pub type ARCreateCharMenuFn51 = unsafe extern "C" fn(
    C,
    name: Str,
    refreshCode: c_uint,
    menuDefn: *const ARCharMenuStruct,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    S,
) -> c_int;
pub type ARCreateCharMenuFn63 = unsafe extern "C" fn(
    C,
    name: Str,
    refreshCode: c_uint,
    menuDefn: *const ARCharMenuStruct,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;

pub type ARSetCharMenuFn51 = unsafe extern "C" fn(
    C,
    name: Str,
    newName: Str,
    refreshCode: *const c_uint,
    menuDefn: *const ARCharMenuStruct,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    S,
) -> c_int;
pub type ARSetCharMenuFn63 = unsafe extern "C" fn(
    C,
    name: Str,
    newName: Str,
    refreshCode: *const c_uint,
    menuDefn: *const ARCharMenuStruct,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;

pub type ARDeleteCharMenuFn = ARDeleteFilterFn;

pub type ARGetListCharMenuFn51 = unsafe extern "C" fn(
    C,
    changedSince: ARTimestamp,
    schemaList: *const ARNameList,
    actLinkList: *const ARNameList,
    nameList: *mut ARNameList,
    S,
) -> c_int;
pub type ARGetListCharMenuFn63 = unsafe extern "C" fn(
    C,
    changedSince: ARTimestamp,
    schemaList: *const ARNameList,
    actLinkList: *const ARNameList,
    objPropList: *const ARPropList,
    nameList: *mut ARNameList,
    S,
) -> c_int;

pub type ARGetMultipleCharMenusFn63 = unsafe extern "C" fn(
    C,
    changedSince: ARTimestamp,
    nameList: *const ARNameList,
    existList: *mut ARBooleanList,
    charMenuNameList: *mut ARNameList,
    refreshCodeList: *mut ARUnsignedIntList,
    menuDefnList: *mut ARCharMenuStructList,
    helpTextList: *mut ARTextStringList,
    timestampList: *mut ARTimestampList,
    ownerList: *mut ARAccessNameList,
    lastChangedList: *mut ARAccessNameList,
    changeDiaryList: *mut ARTextStringList,
    objPropListList: *mut ARPropListList,
    S,
) -> c_int;

// ---- Images (7.5+) ----

pub type ARCreateImageFn75 = unsafe extern "C" fn(
    C,
    name: Str,
    imageBuf: *const ARImageDataStruct,
    imageType: Str,
    description: Str,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;

/// Note the native order: owner, change diary, then last changed.
pub type ARGetImageFn75 = unsafe extern "C" fn(
    C,
    name: Str,
    imageBuf: *mut ARImageDataStruct,
    imageType: OutStr,
    timestamp: OutTs,
    checkSum: OutStr,
    description: OutStr,
    helpText: OutStr,
    owner: OutAccess,
    changeDiary: OutStr,
    lastChanged: OutAccess,
    objPropList: *mut ARPropList,
    S,
) -> c_int;

pub type ARSetImageFn75 = unsafe extern "C" fn(
    C,
    name: Str,
    newName: Str,
    imageBuf: *const ARImageDataStruct,
    imageType: Str,
    description: Str,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;

pub type ARDeleteImageFn75 = unsafe extern "C" fn(C, name: Str, updateRef: ARBoolean, S) -> c_int;

pub type ARGetListImageFn75 = unsafe extern "C" fn(
    C,
    schemaList: *const ARNameList,
    changedSince: ARTimestamp,
    imageType: Str,
    nameList: *mut ARNameList,
    S,
) -> c_int;

pub type ARGetMultipleImagesFn75 = unsafe extern "C" fn(
    C,
    changedSince: ARTimestamp,
    nameList: *const ARNameList,
    existList: *mut ARBooleanList,
    imageNameList: *mut ARNameList,
    imageTypeList: *mut ARTextStringList,
    timestampList: *mut ARTimestampList,
    descriptionList: *mut ARTextStringList,
    helpTextList: *mut ARTextStringList,
    ownerList: *mut ARAccessNameList,
    changeDiaryList: *mut ARTextStringList,
    lastChangedList: *mut ARAccessNameList,
    objPropListList: *mut ARPropListList,
    checkSumList: *mut ARTextStringList,
    imageDataList: *mut ARImageDataList,
    S,
) -> c_int;

// ---- Entries ----

pub type ARCreateEntryFn = unsafe extern "C" fn(
    C,
    schema: Str,
    fieldList: *const ARFieldValueList,
    entryId: *mut AREntryIdType,
    S,
) -> c_int;
pub type ARGetEntryFn = unsafe extern "C" fn(
    C,
    schema: Str,
    entryId: *const AREntryIdList,
    idList: *const ARInternalIdList,
    fieldList: *mut ARFieldValueList,
    S,
) -> c_int;
pub type ARSetEntryFn = unsafe extern "C" fn(
    C,
    schema: Str,
    entryId: *const AREntryIdList,
    fieldList: *const ARFieldValueList,
    getTime: ARTimestamp,
    option: c_uint,
    S,
) -> c_int;
pub type ARDeleteEntryFn =
    unsafe extern "C" fn(C, schema: Str, entryId: *const AREntryIdList, option: c_uint, S) -> c_int;
pub type ARGetListEntryFn51 = unsafe extern "C" fn(
    C,
    schema: Str,
    qualifier: *const ARQualifierStruct,
    getListFields: *const AREntryListFieldList,
    sortList: *const ARSortList,
    firstRetrieve: c_uint,
    maxRetrieve: c_uint,
    entryList: *mut AREntryListList,
    numMatches: *mut c_uint,
    S,
) -> c_int;
pub type ARGetListEntryFn70 = unsafe extern "C" fn(
    C,
    schema: Str,
    qualifier: *const ARQualifierStruct,
    getListFields: *const AREntryListFieldList,
    sortList: *const ARSortList,
    firstRetrieve: c_uint,
    maxRetrieve: c_uint,
    useLocale: ARBoolean,
    entryList: *mut AREntryListList,
    numMatches: *mut c_uint,
    S,
) -> c_int;
pub type ARGetMultipleEntriesFn = unsafe extern "C" fn(
    C,
    schema: Str,
    entryIdList: *const AREntryIdListList,
    idList: *const ARInternalIdList,
    existList: *mut ARBooleanList,
    fieldList: *mut ARFieldValueListList,
    S,
) -> c_int;

// ---- XML (6.3+) ----

pub type ARParseXMLDocumentFn = unsafe extern "C" fn(
    C,
    xmlInputDoc: *const ARXMLInputDoc,
    objectsToParse: *const ARStructItemList,
    parsedStream: *mut ARXMLParsedStream,
    parsedObjects: *mut ARStructItemList,
    appBlockNameList: *mut ARNameList,
    S,
) -> c_int;

pub type ARGetSchemaFromXMLFn63 = unsafe extern "C" fn(
    C,
    parsedStream: *const ARXMLParsedStream,
    schemaName: Str,
    appBlockName: OutName,
    compoundSchema: *mut ARCompoundSchema,
    permissionList: *mut ARPermissionList,
    subAdminGrps: *mut ARInternalIdList,
    getListFields: *mut AREntryListFieldList,
    sortList: *mut ARSortList,
    indexList: *mut ARIndexList,
    archiveInfo: *mut ARArchiveInfoStruct,
    defaultVui: OutName,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    arDocVersion: *mut c_uint,
    S,
) -> c_int;
pub type ARGetSchemaFromXMLFn71 = unsafe extern "C" fn(
    C,
    parsedStream: *const ARXMLParsedStream,
    schemaName: Str,
    appBlockName: OutName,
    compoundSchema: *mut ARCompoundSchema,
    permissionList: *mut ARPermissionList,
    subAdminGrps: *mut ARInternalIdList,
    getListFields: *mut AREntryListFieldList,
    sortList: *mut ARSortList,
    indexList: *mut ARIndexList,
    archiveInfo: *mut ARArchiveInfoStruct,
    auditInfo: *mut ARAuditInfoStruct,
    defaultVui: OutName,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    arDocVersion: *mut c_uint,
    S,
) -> c_int;

pub type ARSetSchemaToXMLFn63 = unsafe extern "C" fn(
    C,
    xmlOutputDoc: *mut ARXMLOutputDoc,
    xmlDocHdrFtrFlag: ARBoolean,
    schemaName: Str,
    compoundSchema: *const ARCompoundSchema,
    permissionList: *const ARPermissionList,
    subAdminGrps: *const ARInternalIdList,
    getListFields: *const AREntryListFieldList,
    sortList: *const ARSortList,
    indexList: *const ARIndexList,
    archiveInfo: *const ARArchiveInfoStruct,
    defaultVui: Str,
    helpText: Str,
    owner: Str,
    lastChanged: Str,
    timestamp: *const ARTimestamp,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;
pub type ARSetSchemaToXMLFn71 = unsafe extern "C" fn(
    C,
    xmlOutputDoc: *mut ARXMLOutputDoc,
    xmlDocHdrFtrFlag: ARBoolean,
    schemaName: Str,
    compoundSchema: *const ARCompoundSchema,
    permissionList: *const ARPermissionList,
    subAdminGrps: *const ARInternalIdList,
    getListFields: *const AREntryListFieldList,
    sortList: *const ARSortList,
    indexList: *const ARIndexList,
    archiveInfo: *const ARArchiveInfoStruct,
    auditInfo: *const ARAuditInfoStruct,
    defaultVui: Str,
    helpText: Str,
    owner: Str,
    lastChanged: Str,
    timestamp: *const ARTimestamp,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;

pub type ARGetActiveLinkFromXMLFn63 = unsafe extern "C" fn(
    C,
    parsedStream: *const ARXMLParsedStream,
    name: Str,
    appBlockName: OutName,
    executionOrder: *mut c_uint,
    workflowConnect: *mut ARWorkflowConnectStruct,
    groupList: *mut ARInternalIdList,
    executeMask: *mut c_uint,
    controlField: *mut ARInternalId,
    focusField: *mut ARInternalId,
    enable: *mut c_uint,
    query: *mut ARQualifierStruct,
    actionList: *mut ARActiveLinkActionList,
    elseList: *mut ARActiveLinkActionList,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    arDocVersion: *mut c_uint,
    S,
) -> c_int;
pub type ARGetActiveLinkFromXMLFn7603 = unsafe extern "C" fn(
    C,
    parsedStream: *const ARXMLParsedStream,
    name: Str,
    appBlockName: OutName,
    executionOrder: *mut c_uint,
    workflowConnect: *mut ARWorkflowConnectStruct,
    groupList: *mut ARInternalIdList,
    executeMask: *mut c_uint,
    controlField: *mut ARInternalId,
    focusField: *mut ARInternalId,
    enable: *mut c_uint,
    query: *mut ARQualifierStruct,
    actionList: *mut ARActiveLinkActionList,
    elseList: *mut ARActiveLinkActionList,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    errorActlinkOptions: *mut c_uint,
    errorActlinkName: OutName,
    arDocVersion: *mut c_uint,
    S,
) -> c_int;

pub type ARSetActiveLinkToXMLFn63 = unsafe extern "C" fn(
    C,
    xmlOutputDoc: *mut ARXMLOutputDoc,
    xmlDocHdrFtrFlag: ARBoolean,
    name: Str,
    order: *const c_uint,
    workflowConnect: *const ARWorkflowConnectStruct,
    groupList: *const ARInternalIdList,
    executeMask: *const c_uint,
    controlField: *const ARInternalId,
    focusField: *const ARInternalId,
    enable: *const c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARActiveLinkActionList,
    elseList: *const ARActiveLinkActionList,
    helpText: Str,
    owner: Str,
    lastChanged: Str,
    timestamp: *const ARTimestamp,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;
pub type ARSetActiveLinkToXMLFn7603 = unsafe extern "C" fn(
    C,
    xmlOutputDoc: *mut ARXMLOutputDoc,
    xmlDocHdrFtrFlag: ARBoolean,
    name: Str,
    order: *const c_uint,
    workflowConnect: *const ARWorkflowConnectStruct,
    groupList: *const ARInternalIdList,
    executeMask: *const c_uint,
    controlField: *const ARInternalId,
    focusField: *const ARInternalId,
    enable: *const c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARActiveLinkActionList,
    elseList: *const ARActiveLinkActionList,
    helpText: Str,
    owner: Str,
    lastChanged: Str,
    timestamp: *const ARTimestamp,
    changeDiary: Str,
    objPropList: *const ARPropList,
    errorActlinkOptions: *const c_uint,
    errorActlinkName: Str,
    S,
) -> c_int;

pub type ARGetFilterFromXMLFn63 = unsafe extern "C" fn(
    C,
    parsedStream: *const ARXMLParsedStream,
    name: Str,
    appBlockName: OutName,
    order: *mut c_uint,
    workflowConnect: *mut ARWorkflowConnectStruct,
    opSet: *mut c_uint,
    enable: *mut c_uint,
    query: *mut ARQualifierStruct,
    actionList: *mut ARFilterActionList,
    elseList: *mut ARFilterActionList,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    arDocVersion: *mut c_uint,
    S,
) -> c_int;
pub type ARGetFilterFromXMLFn71 = unsafe extern "C" fn(
    C,
    parsedStream: *const ARXMLParsedStream,
    name: Str,
    appBlockName: OutName,
    order: *mut c_uint,
    workflowConnect: *mut ARWorkflowConnectStruct,
    opSet: *mut c_uint,
    enable: *mut c_uint,
    query: *mut ARQualifierStruct,
    actionList: *mut ARFilterActionList,
    elseList: *mut ARFilterActionList,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    errorFilterOptions: *mut c_uint,
    errorFilterName: OutName,
    arDocVersion: *mut c_uint,
    S,
) -> c_int;

pub type ARSetFilterToXMLFn63 = unsafe extern "C" fn(
    C,
    xmlOutputDoc: *mut ARXMLOutputDoc,
    xmlDocHdrFtrFlag: ARBoolean,
    name: Str,
    order: *const c_uint,
    workflowConnect: *const ARWorkflowConnectStruct,
    opSet: *const c_uint,
    enable: *const c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARFilterActionList,
    elseList: *const ARFilterActionList,
    helpText: Str,
    owner: Str,
    lastChanged: Str,
    timestamp: *const ARTimestamp,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;
pub type ARSetFilterToXMLFn71 = unsafe extern "C" fn(
    C,
    xmlOutputDoc: *mut ARXMLOutputDoc,
    xmlDocHdrFtrFlag: ARBoolean,
    name: Str,
    order: *const c_uint,
    workflowConnect: *const ARWorkflowConnectStruct,
    opSet: *const c_uint,
    enable: *const c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARFilterActionList,
    elseList: *const ARFilterActionList,
    helpText: Str,
    owner: Str,
    lastChanged: Str,
    timestamp: *const ARTimestamp,
    changeDiary: Str,
    objPropList: *const ARPropList,
    errorFilterOptions: *const c_uint,
    errorFilterName: Str,
    S,
) -> c_int;

pub type ARGetEscalationFromXMLFn63 = unsafe extern "C" fn(
    C,
    parsedStream: *const ARXMLParsedStream,
    name: Str,
    appBlockName: OutName,
    escalationTm: *mut AREscalationTmStruct,
    workflowConnect: *mut ARWorkflowConnectStruct,
    enable: *mut c_uint,
    query: *mut ARQualifierStruct,
    actionList: *mut ARFilterActionList,
    elseList: *mut ARFilterActionList,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    arDocVersion: *mut c_uint,
    S,
) -> c_int;
pub type ARGetEscalationFromXMLFn81 = unsafe extern "C" fn(
    C,
    parsedStream: *const ARXMLParsedStream,
    name: Str,
    appBlockName: OutName,
    escalationTm: *mut AREscalationTmStruct,
    workflowConnect: *mut ARWorkflowConnectStruct,
    enable: *mut c_uint,
    query: *mut ARQualifierStruct,
    actionList: *mut ARFilterActionList,
    elseList: *mut ARFilterActionList,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    errorEscalationOptions: *mut c_uint,
    errorEscalationName: OutName,
    arDocVersion: *mut c_uint,
    S,
) -> c_int;

pub type ARSetEscalationToXMLFn63 = unsafe extern "C" fn(
    C,
    xmlOutputDoc: *mut ARXMLOutputDoc,
    xmlDocHdrFtrFlag: ARBoolean,
    name: Str,
    escalationTm: *const AREscalationTmStruct,
    workflowConnect: *const ARWorkflowConnectStruct,
    enable: *const c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARFilterActionList,
    elseList: *const ARFilterActionList,
    helpText: Str,
    owner: Str,
    lastChanged: Str,
    timestamp: *const ARTimestamp,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;
pub type ARSetEscalationToXMLFn81 = unsafe extern "C" fn(
    C,
    xmlOutputDoc: *mut ARXMLOutputDoc,
    xmlDocHdrFtrFlag: ARBoolean,
    name: Str,
    escalationTm: *const AREscalationTmStruct,
    workflowConnect: *const ARWorkflowConnectStruct,
    enable: *const c_uint,
    query: *const ARQualifierStruct,
    actionList: *const ARFilterActionList,
    elseList: *const ARFilterActionList,
    helpText: Str,
    owner: Str,
    lastChanged: Str,
    timestamp: *const ARTimestamp,
    changeDiary: Str,
    objPropList: *const ARPropList,
    errorEscalationOptions: *const c_uint,
    errorEscalationName: Str,
    S,
) -> c_int;

pub type ARGetContainerFromXMLFn63 = unsafe extern "C" fn(
    C,
    parsedStream: *const ARXMLParsedStream,
    name: Str,
    appBlockName: OutName,
    groupList: *mut ARPermissionList,
    admingrpList: *mut ARInternalIdList,
    ownerObjList: *mut ARContainerOwnerObjList,
    label: OutStr,
    description: OutStr,
    type_: *mut c_uint,
    references: *mut ARReferenceList,
    helpText: OutStr,
    owner: OutAccess,
    timestamp: OutTs,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    arDocVersion: *mut c_uint,
    S,
) -> c_int;

pub type ARSetContainerToXMLFn63 = unsafe extern "C" fn(
    C,
    xmlOutputDoc: *mut ARXMLOutputDoc,
    xmlDocHdrFtrFlag: ARBoolean,
    name: Str,
    groupList: *const ARPermissionList,
    admingrpList: *const ARInternalIdList,
    ownerObjList: *const ARContainerOwnerObjList,
    label: Str,
    description: Str,
    type_: *const c_uint,
    references: *const ARReferenceList,
    helpText: Str,
    owner: Str,
    lastChanged: Str,
    timestamp: *const ARTimestamp,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;

pub type ARGetMenuFromXMLFn63 = unsafe extern "C" fn(
    C,
    parsedStream: *const ARXMLParsedStream,
    name: Str,
    appBlockName: OutName,
    refreshCode: *mut c_uint,
    menuDefn: *mut ARCharMenuStruct,
    helpText: OutStr,
    timestamp: OutTs,
    owner: OutAccess,
    lastChanged: OutAccess,
    changeDiary: OutStr,
    objPropList: *mut ARPropList,
    arDocVersion: *mut c_uint,
    S,
) -> c_int;

pub type ARSetMenuToXMLFn63 = unsafe extern "C" fn(
    C,
    xmlOutputDoc: *mut ARXMLOutputDoc,
    xmlDocHdrFtrFlag: ARBoolean,
    name: Str,
    refreshCode: *const c_uint,
    menuDefn: *const ARCharMenuStruct,
    helpText: Str,
    owner: Str,
    lastChanged: Str,
    timestamp: *const ARTimestamp,
    changeDiary: Str,
    objPropList: *const ARPropList,
    S,
) -> c_int;

pub type ARGetImageFromXMLFn75 = unsafe extern "C" fn(
    C,
    parsedStream: *const ARXMLParsedStream,
    name: Str,
    appBlockName: OutName,
    imageType: OutStr,
    timestamp: OutTs,
    description: OutStr,
    helpText: OutStr,
    owner: OutAccess,
    changeDiary: OutStr,
    lastChanged: OutAccess,
    objPropList: *mut ARPropList,
    checkSum: OutStr,
    imageBuf: *mut ARImageDataStruct,
    arDocVersion: *mut c_uint,
    S,
) -> c_int;

pub type ARSetImageToXMLFn75 = unsafe extern "C" fn(
    C,
    xmlOutputDoc: *mut ARXMLOutputDoc,
    xmlDocHdrFtrFlag: ARBoolean,
    name: Str,
    imageType: Str,
    description: Str,
    timestamp: *const ARTimestamp,
    helpText: Str,
    owner: Str,
    changeDiary: Str,
    lastChanged: Str,
    objPropList: *const ARPropList,
    checkSum: Str,
    imageBuf: *const ARImageDataStruct,
    S,
) -> c_int;
