mod common;

use std::cell::RefCell;
use std::ffi::c_void;
use std::os::raw::{c_char, c_int, c_uint};

use arapi::value::QueryValue;
use arapi::{ApiVersion, CurrencyDetail, CurrencyLimits, FieldLimit, FieldPatch, TableLimits, Value};
use arapi_sys::*;
use common::{FakeLibrary, buf, fail, leak_list, leak_str, record};

const V51: ApiVersion = ApiVersion::new(5, 1, 0);
const V70: ApiVersion = ApiVersion::new(7, 0, 0);
const V75: ApiVersion = ApiVersion::new(7, 5, 0);
const V7604: ApiVersion = ApiVersion::new(7, 6, 4);

const PRICE: ARInternalId = 536870913;
const LINES: ARInternalId = 536870914;
const NOTE: ARInternalId = 536870915;

/// What a set-field fake saw: the names of null inputs plus the values the
/// tests care about.
#[derive(Debug, Default, PartialEq)]
struct SetFieldCall {
    nulls: Vec<&'static str>,
    set_options: Option<c_uint>,
    option: Option<c_uint>,
    field_option: Option<c_uint>,
    default_qualifier: Option<String>,
    limit_type: Option<c_uint>,
}

thread_local! {
    static SET_FIELD: RefCell<Option<SetFieldCall>> = const { RefCell::new(None) };
}

fn last_set_field() -> SetFieldCall {
    SET_FIELD.with(|s| s.borrow_mut().take()).expect("ARSetField was not called")
}

fn nulls(args: &[(&'static str, bool)]) -> Vec<&'static str> {
    args.iter().filter(|(_, null)| *null).map(|(name, _)| *name).collect()
}

unsafe fn query_qualifier(default: *const ARValueStruct) -> Option<String> {
    // SAFETY: the default value is null or built by the binding.
    unsafe {
        let v = default.as_ref()?;
        if v.dataType != AR_DATA_TYPE_QUERY {
            return None;
        }
        common::fake_qualifier_text((*v.u.queryValue).qualifier)
    }
}

// ---- reads ----

unsafe extern "C" fn get_field_75(
    _: ARControlPtr,
    _: *const c_char,
    id: ARInternalId,
    name: *mut ARNameType,
    _: *mut ARFieldMappingStruct,
    data_type: *mut c_uint,
    _: *mut c_uint,
    _: *mut c_uint,
    field_option: *mut c_uint,
    _: *mut ARValueStruct,
    _: *mut ARPermissionList,
    limit: *mut ARFieldLimitStruct,
    _: *mut ARDisplayInstanceList,
    _: *mut *mut c_char,
    _: *mut ARTimestamp,
    _: *mut ARAccessNameType,
    _: *mut ARAccessNameType,
    _: *mut *mut c_char,
    _: *mut ARPropList,
    status: *mut ARStatusList,
) -> c_int {
    record("ARGetField");
    let detail = |code: &str, precision: c_int| ARCurrencyDetailStruct {
        currencyCode: buf(code),
        precision,
    };
    // SAFETY: live output slots.
    unsafe {
        *field_option = 1;
        match id {
            PRICE => {
                *name = buf("Price");
                *data_type = AR_DATA_TYPE_CURRENCY;
                (*limit).dataType = AR_DATA_TYPE_CURRENCY;
                (*limit).u.currencyLimits = ARCurrencyLimitsStruct {
                    rangeLow: leak_str("0.00"),
                    rangeHigh: leak_str("99999.99"),
                    precision: 2,
                    functionalCurrencies: leak_list(vec![detail("USD", 2)]),
                    allowableCurrencies: leak_list(vec![detail("USD", 2), detail("JPY", 0)]),
                };
            }
            LINES => {
                *name = buf("Lines");
                *data_type = AR_DATA_TYPE_TABLE;
                (*limit).dataType = AR_DATA_TYPE_TABLE;
                (*limit).u.tableLimits = ARTableLimitsStruct {
                    numColumns: 3,
                    qualifier: common::fake_qualifier("'Status' = 1"),
                    maxRetrieve: 100,
                    schema: buf("Asset"),
                    server: buf("@"),
                    sampleSchema: buf("Asset Sample"),
                    sampleServer: buf("@"),
                };
            }
            _ => return fail(status, 303, "Field does not exist on form"),
        }
    }
    0
}

unsafe extern "C" fn get_field_70(
    _: ARControlPtr,
    _: *const c_char,
    _: ARInternalId,
    name: *mut ARNameType,
    _: *mut ARFieldMappingStruct,
    data_type: *mut c_uint,
    _: *mut c_uint,
    _: *mut c_uint,
    field_option: *mut c_uint,
    _: *mut ARValueStruct,
    _: *mut ARPermissionList,
    limit: *mut ARFieldLimitStruct51,
    _: *mut ARDisplayInstanceList,
    _: *mut *mut c_char,
    _: *mut ARTimestamp,
    _: *mut ARAccessNameType,
    _: *mut ARAccessNameType,
    _: *mut *mut c_char,
    _: *mut ARPropList,
    _: *mut ARStatusList,
) -> c_int {
    record("ARGetField");
    // SAFETY: live output slots.
    unsafe {
        *name = buf("Note");
        *data_type = AR_DATA_TYPE_DISPLAY;
        *field_option = 4;
        (*limit).dataType = AR_DATA_TYPE_DISPLAY;
        (*limit).u.displayLimits = ARDisplayLimitsStruct51 { maxLength: 80 };
    }
    0
}

unsafe extern "C" fn get_field_51(
    _: ARControlPtr,
    _: *const c_char,
    _: ARInternalId,
    name: *mut ARNameType,
    _: *mut ARFieldMappingStruct,
    data_type: *mut c_uint,
    _: *mut c_uint,
    _: *mut c_uint,
    _: *mut ARValueStruct,
    _: *mut ARPermissionList,
    limit: *mut ARFieldLimitStruct51,
    _: *mut ARDisplayInstanceList,
    _: *mut *mut c_char,
    _: *mut ARTimestamp,
    _: *mut ARAccessNameType,
    _: *mut ARAccessNameType,
    _: *mut *mut c_char,
    _: *mut ARStatusList,
) -> c_int {
    record("ARGetField");
    // SAFETY: live output slots.
    unsafe {
        *name = buf("Lines");
        *data_type = AR_DATA_TYPE_TABLE;
        (*limit).dataType = AR_DATA_TYPE_TABLE;
        (*limit).u.tableLimits = ARTableLimitsStruct51 {
            numColumns: 2,
            qualifier: ARQualifierStruct::zeroed(),
            maxRetrieve: 25,
            schema: buf("Asset"),
            server: buf("@"),
        };
    }
    0
}

#[test]
fn currency_limits_are_read() {
    let session = common::session_on(
        FakeLibrary::standard().with("ARGetField", get_field_75 as ARGetFieldFn75 as *const c_void),
        V75,
    );
    let field = session.get_field("Order", PRICE).unwrap();
    assert_eq!(field.name, "Price");
    assert_eq!(field.data_type, AR_DATA_TYPE_CURRENCY);
    assert_eq!(
        field.limit,
        FieldLimit::Currency(CurrencyLimits {
            low: Some("0.00".into()),
            high: Some("99999.99".into()),
            precision: 2,
            functional: vec![CurrencyDetail {
                code: "USD".into(),
                precision: 2,
            }],
            allowable: vec![
                CurrencyDetail {
                    code: "USD".into(),
                    precision: 2,
                },
                CurrencyDetail {
                    code: "JPY".into(),
                    precision: 0,
                },
            ],
        })
    );
}

#[test]
fn table_limits_render_their_qualifier() {
    let session = common::session_on(
        FakeLibrary::standard().with("ARGetField", get_field_75 as ARGetFieldFn75 as *const c_void),
        V75,
    );
    let field = session.get_field("Order", LINES).unwrap();
    assert_eq!(
        field.limit,
        FieldLimit::Table(TableLimits {
            columns: 3,
            qualifier: Some("'Status' = 1".into()),
            max_retrieve: 100,
            schema: "Asset".into(),
            server: "@".into(),
            sample_schema: Some("Asset Sample".into()),
            sample_server: Some("@".into()),
        })
    );
    assert_eq!(common::calls("ARDecodeARQualifierStruct"), 1);
}

#[test]
fn field_at_70_reads_the_narrow_limit() {
    let session = common::session_on(
        FakeLibrary::standard().with("ARGetField", get_field_70 as ARGetFieldFn70 as *const c_void),
        V70,
    );
    let field = session.get_field("Order", NOTE).unwrap();
    assert_eq!(field.field_option, Some(4));
    assert_eq!(
        field.limit,
        FieldLimit::Display {
            max_length: 80,
            length_units: None,
        }
    );
}

#[test]
fn field_at_51_has_no_sample_schema_or_field_option() {
    let session = common::session_on(
        FakeLibrary::standard().with("ARGetField", get_field_51 as ARGetFieldFn51 as *const c_void),
        V51,
    );
    let field = session.get_field("Order", LINES).unwrap();
    assert_eq!(field.field_option, None);
    assert_eq!(field.meta.properties, None);
    assert_eq!(
        field.limit,
        FieldLimit::Table(TableLimits {
            columns: 2,
            qualifier: None,
            max_retrieve: 25,
            schema: "Asset".into(),
            server: "@".into(),
            sample_schema: None,
            sample_server: None,
        })
    );
    assert_eq!(common::calls("ARDecodeARQualifierStruct"), 0);
}

// ---- writes ----

unsafe extern "C" fn set_field_75(
    _: ARControlPtr,
    _: *const c_char,
    _: ARInternalId,
    name: *const c_char,
    mapping: *const ARFieldMappingStruct,
    option: *const c_uint,
    create_mode: *const c_uint,
    field_option: *const c_uint,
    default: *const ARValueStruct,
    perms: *const ARPermissionList,
    limit: *const ARFieldLimitStruct,
    display: *const ARDisplayInstanceList,
    help: *const c_char,
    owner: *const c_char,
    diary: *const c_char,
    props: *const ARPropList,
    _: *mut ARStatusList,
) -> c_int {
    record("ARSetField");
    // SAFETY: every input is null or built by the binding.
    let call = unsafe {
        SetFieldCall {
            nulls: nulls(&[
                ("name", name.is_null()),
                ("mapping", mapping.is_null()),
                ("option", option.is_null()),
                ("create_mode", create_mode.is_null()),
                ("field_option", field_option.is_null()),
                ("default", default.is_null()),
                ("permissions", perms.is_null()),
                ("limit", limit.is_null()),
                ("display", display.is_null()),
                ("help", help.is_null()),
                ("owner", owner.is_null()),
                ("diary", diary.is_null()),
                ("props", props.is_null()),
            ]),
            set_options: None,
            option: option.as_ref().copied(),
            field_option: field_option.as_ref().copied(),
            default_qualifier: query_qualifier(default),
            limit_type: limit.as_ref().map(|l| l.dataType),
        }
    };
    SET_FIELD.with(|s| *s.borrow_mut() = Some(call));
    0
}

unsafe extern "C" fn set_field_7604(
    _: ARControlPtr,
    _: *const c_char,
    _: ARInternalId,
    set_options: c_uint,
    name: *const c_char,
    mapping: *const ARFieldMappingStruct,
    option: *const c_uint,
    create_mode: *const c_uint,
    default: *const ARValueStruct,
    perms: *const ARPermissionList,
    limit: *const ARFieldLimitStruct,
    display: *const ARDisplayInstanceList,
    help: *const c_char,
    owner: *const c_char,
    diary: *const c_char,
    field_option: *const c_uint,
    props: *const ARPropList,
    _: *mut ARStatusList,
) -> c_int {
    record("ARSetField");
    // SAFETY: every input is null or built by the binding.
    let call = unsafe {
        SetFieldCall {
            nulls: nulls(&[
                ("name", name.is_null()),
                ("mapping", mapping.is_null()),
                ("option", option.is_null()),
                ("create_mode", create_mode.is_null()),
                ("field_option", field_option.is_null()),
                ("default", default.is_null()),
                ("permissions", perms.is_null()),
                ("limit", limit.is_null()),
                ("display", display.is_null()),
                ("help", help.is_null()),
                ("owner", owner.is_null()),
                ("diary", diary.is_null()),
                ("props", props.is_null()),
            ]),
            set_options: Some(set_options),
            option: option.as_ref().copied(),
            field_option: field_option.as_ref().copied(),
            default_qualifier: query_qualifier(default),
            limit_type: limit.as_ref().map(|l| l.dataType),
        }
    };
    SET_FIELD.with(|s| *s.borrow_mut() = Some(call));
    0
}

#[test]
fn set_field_at_75_passes_null_for_unchanged_attributes() {
    let session = common::session_on(
        FakeLibrary::standard().with("ARSetField", set_field_75 as ARSetFieldFn75 as *const c_void),
        V75,
    );
    let patch = FieldPatch {
        option: Some(2),
        default: Some(Value::Query(QueryValue {
            schema: "User".into(),
            server: String::new(),
            qualifier: Some("'Login Name' = $USER$".into()),
            value_field: 8,
            multi_match: 1,
        })),
        ..FieldPatch::default()
    };
    session.set_field("Order", NOTE, &patch).unwrap();

    let call = last_set_field();
    assert_eq!(
        call.nulls,
        [
            "name",
            "mapping",
            "create_mode",
            "field_option",
            "permissions",
            "limit",
            "display",
            "help",
            "owner",
            "diary",
            "props"
        ]
    );
    assert_eq!(call.option, Some(2));
    assert_eq!(call.default_qualifier.as_deref(), Some("'Login Name' = $USER$"));
    assert_eq!(common::qualifier_schema().as_deref(), Some("User"));
    assert_eq!(call.set_options, None);
}

#[test]
fn set_field_at_7604_moves_field_option_behind_the_diary() {
    let session = common::session_on(
        FakeLibrary::standard().with("ARSetField", set_field_7604 as ARSetFieldFn7604 as *const c_void),
        V7604,
    );
    let patch = FieldPatch {
        field_option: Some(9),
        limit: Some(FieldLimit::Display {
            max_length: 40,
            length_units: Some(1),
        }),
        set_options: 3,
        ..FieldPatch::default()
    };
    session.set_field("Order", NOTE, &patch).unwrap();

    let call = last_set_field();
    assert_eq!(call.set_options, Some(3));
    assert_eq!(call.field_option, Some(9));
    assert_eq!(call.option, None);
    assert_eq!(call.limit_type, Some(AR_DATA_TYPE_DISPLAY));
    assert_eq!(call.default_qualifier, None);
    assert_eq!(
        call.nulls,
        [
            "name",
            "mapping",
            "option",
            "create_mode",
            "default",
            "permissions",
            "display",
            "help",
            "owner",
            "diary",
            "props"
        ]
    );
}

#[test]
fn reading_a_query_default_renders_its_qualifier() {
    unsafe extern "C" fn get_field_query_default(
        _: ARControlPtr,
        _: *const c_char,
        _: ARInternalId,
        name: *mut ARNameType,
        _: *mut ARFieldMappingStruct,
        data_type: *mut c_uint,
        _: *mut c_uint,
        _: *mut c_uint,
        _: *mut c_uint,
        default: *mut ARValueStruct,
        _: *mut ARPermissionList,
        _: *mut ARFieldLimitStruct,
        _: *mut ARDisplayInstanceList,
        _: *mut *mut c_char,
        _: *mut ARTimestamp,
        _: *mut ARAccessNameType,
        _: *mut ARAccessNameType,
        _: *mut *mut c_char,
        _: *mut ARPropList,
        _: *mut ARStatusList,
    ) -> c_int {
        record("ARGetField");
        let query = ARQueryValueStruct {
            schema: buf("User"),
            server: buf("@"),
            qualifier: Box::into_raw(Box::new(common::fake_qualifier("'Status' = 0"))),
            valueField: 8,
            multiMatchCode: 1,
        };
        // SAFETY: live output slots.
        unsafe {
            *name = buf("Assignee");
            *data_type = AR_DATA_TYPE_CHAR;
            *default = ARValueStruct {
                dataType: AR_DATA_TYPE_QUERY,
                u: ARValueUnion {
                    queryValue: Box::into_raw(Box::new(query)),
                },
            };
        }
        0
    }

    let session = common::session_on(
        FakeLibrary::standard().with("ARGetField", get_field_query_default as ARGetFieldFn75 as *const c_void),
        V75,
    );
    let field = session.get_field("Order", 4).unwrap();
    assert_eq!(
        field.default,
        Value::Query(QueryValue {
            schema: "User".into(),
            server: "@".into(),
            qualifier: Some("'Status' = 0".into()),
            value_field: 8,
            multi_match: 1,
        })
    );
}
