mod common;

use std::cell::RefCell;
use std::ffi::{CStr, c_void};
use std::os::raw::{c_char, c_int, c_uint};

use arapi::{ApiVersion, ErrorHandler, FilterPatch, OperationSet, Session, WorkflowConnect};
use arapi_sys::*;
use common::{FakeLibrary, buf, fail, leak_list, record};

const V71: ApiVersion = ApiVersion::new(7, 1, 0);

#[derive(Debug, Default, PartialEq)]
struct SetFilterCall {
    nulls: Vec<&'static str>,
    order: Option<c_uint>,
    enable: Option<c_uint>,
    query: Option<String>,
}

thread_local! {
    static SET_FILTER: RefCell<Option<SetFilterCall>> = const { RefCell::new(None) };
}

unsafe extern "C" fn get_filter_71(
    _: ARControlPtr,
    name: *const c_char,
    order: *mut c_uint,
    connect: *mut ARWorkflowConnectStruct,
    operations: *mut c_uint,
    enable: *mut c_uint,
    query: *mut ARQualifierStruct,
    _: *mut ARFilterActionList,
    _: *mut ARFilterActionList,
    _: *mut *mut c_char,
    _: *mut ARTimestamp,
    owner: *mut ARAccessNameType,
    _: *mut ARAccessNameType,
    _: *mut *mut c_char,
    _: *mut ARPropList,
    handler_options: *mut c_uint,
    handler_name: *mut ARNameType,
    status: *mut ARStatusList,
) -> c_int {
    record("ARGetFilter");
    // SAFETY: the name is a NUL-terminated input; outputs are live slots.
    unsafe {
        if CStr::from_ptr(name).to_bytes() != b"HD:Route" {
            return fail(status, 304, "Filter does not exist on server");
        }
        *order = 500;
        (*connect).type_ = AR_WORKFLOW_CONN_SCHEMA_LIST;
        (*connect).u.schemaList = Box::into_raw(Box::new(leak_list(vec![buf("HelpDesk")])));
        *operations = 3;
        *enable = 1;
        *query = common::fake_qualifier("'Status' = \"New\"");
        *owner = buf("Demo");
        *handler_options = 1;
        *handler_name = buf("HD:OnError");
    }
    0
}

unsafe extern "C" fn set_filter_71(
    _: ARControlPtr,
    _: *const c_char,
    new_name: *const c_char,
    order: *const c_uint,
    connect: *const ARWorkflowConnectStruct,
    operations: *const c_uint,
    enable: *const c_uint,
    query: *const ARQualifierStruct,
    actions: *const ARFilterActionList,
    else_actions: *const ARFilterActionList,
    help: *const c_char,
    owner: *const c_char,
    diary: *const c_char,
    props: *const ARPropList,
    handler_options: *const c_uint,
    handler_name: *const c_char,
    _: *mut ARStatusList,
) -> c_int {
    record("ARSetFilter");
    let flags = [
        ("new_name", new_name.is_null()),
        ("order", order.is_null()),
        ("connect", connect.is_null()),
        ("operations", operations.is_null()),
        ("enable", enable.is_null()),
        ("query", query.is_null()),
        ("actions", actions.is_null()),
        ("else_actions", else_actions.is_null()),
        ("help", help.is_null()),
        ("owner", owner.is_null()),
        ("diary", diary.is_null()),
        ("props", props.is_null()),
        ("handler_options", handler_options.is_null()),
        ("handler_name", handler_name.is_null()),
    ];
    // SAFETY: every input is null or built by the binding.
    let call = unsafe {
        SetFilterCall {
            nulls: flags.iter().filter(|(_, null)| *null).map(|(n, _)| *n).collect(),
            order: order.as_ref().copied(),
            enable: enable.as_ref().copied(),
            query: common::fake_qualifier_text(query),
        }
    };
    SET_FILTER.with(|s| *s.borrow_mut() = Some(call));
    0
}

fn filter_session() -> Session {
    common::session_on(
        FakeLibrary::standard()
            .with("ARGetFilter", get_filter_71 as ARGetFilterFn71 as *const c_void)
            .with("ARSetFilter", set_filter_71 as ARSetFilterFn71 as *const c_void),
        V71,
    )
}

#[test]
fn filter_at_71_carries_its_error_handler() {
    let session = filter_session();
    let filter = session.get_filter("HD:Route").unwrap();
    assert_eq!(filter.order, 500);
    assert_eq!(filter.connect, WorkflowConnect::schema("HelpDesk"));
    assert_eq!(filter.operations, OperationSet::GET | OperationSet::SET);
    assert!(filter.enabled);
    assert_eq!(filter.query.as_deref(), Some("'Status' = \"New\""));
    assert!(filter.actions.is_empty());
    assert_eq!(filter.meta.owner, "Demo");
    assert_eq!(
        filter.error_handler,
        Some(ErrorHandler {
            options: 1,
            name: "HD:OnError".into(),
        })
    );
}

#[test]
fn new_filter_query_compiles_against_the_current_connection() {
    let session = filter_session();
    let patch = FilterPatch {
        order: Some(7),
        enabled: Some(false),
        query: Some("'Priority' = 0".into()),
        ..FilterPatch::default()
    };
    session.set_filter("HD:Route", &patch).unwrap();

    assert_eq!(common::calls("ARGetFilter"), 1);
    assert_eq!(common::qualifier_schema().as_deref(), Some("HelpDesk"));
    let call = SET_FILTER.with(|s| s.borrow_mut().take()).unwrap();
    assert_eq!(call.order, Some(7));
    assert_eq!(call.enable, Some(0));
    assert_eq!(call.query.as_deref(), Some("'Priority' = 0"));
    assert_eq!(
        call.nulls,
        [
            "new_name",
            "connect",
            "operations",
            "actions",
            "else_actions",
            "help",
            "owner",
            "diary",
            "props",
            "handler_options",
            "handler_name"
        ]
    );
}

#[test]
fn unchanged_query_is_a_null_qualifier() {
    let session = filter_session();
    let patch = FilterPatch {
        operations: Some(OperationSet::CREATE),
        ..FilterPatch::default()
    };
    session.set_filter("HD:Route", &patch).unwrap();

    assert_eq!(common::calls("ARGetFilter"), 0);
    assert_eq!(common::calls("ARLoadARQualifierStruct"), 0);
    let call = SET_FILTER.with(|s| s.borrow_mut().take()).unwrap();
    assert!(call.nulls.contains(&"query"));
    assert!(!call.nulls.contains(&"operations"));
}
