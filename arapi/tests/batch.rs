mod common;

use std::ffi::c_void;
use std::os::raw::{c_char, c_int};

use arapi::{ApiVersion, BatchItem, EntryId, Error, LoginParams, Session, Value};
use arapi_sys::*;
use common::FakeLibrary;

#[test]
fn missing_entries_keep_their_position() {
    let session = common::session(ApiVersion::new(8, 1, 0));
    let ids = [
        EntryId::new("000000000000001"),
        EntryId::new(common::MISSING_ENTRY),
        EntryId::new("000000000000003"),
    ];

    let items = session.get_multiple_entries("HelpDesk", &ids, None).unwrap();
    assert_eq!(items.len(), ids.len());

    let first = items[0].found().unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].field_id, 1);
    assert_eq!(first[0].value, Value::Char("000000000000001".into()));

    assert_eq!(items[1], BatchItem::Missing { key: EntryId::new(common::MISSING_ENTRY) });
    assert!(items[1].is_missing());

    let third = items[2].clone().into_found().unwrap();
    assert_eq!(third[0].value, Value::Char("000000000000003".into()));
}

#[test]
fn empty_request_makes_no_call() {
    let session = common::session(ApiVersion::new(8, 1, 0));
    let items = session.get_multiple_entries("HelpDesk", &[], Some(&[1])).unwrap();
    assert!(items.is_empty());
    assert_eq!(common::calls("ARGetMultipleEntries"), 0);

    assert!(session.get_multiple_vuis("HelpDesk", &[]).unwrap().is_empty());
    assert_eq!(common::calls("ARGetMultipleVUIs"), 0);
}

/// Answers any request with two entries, as the library does for an empty
/// id list.
unsafe extern "C" fn get_every_entry(
    _: ARControlPtr,
    _: *const c_char,
    _: *const AREntryIdListList,
    _: *const ARInternalIdList,
    exist: *mut ARBooleanList,
    values: *mut ARFieldValueListList,
    _: *mut ARStatusList,
) -> c_int {
    common::record("ARGetMultipleEntries");
    // SAFETY: live output slots.
    unsafe {
        *exist = common::leak_list(vec![TRUE, TRUE]);
        *values = common::leak_list(vec![ARFieldValueList::empty(), ARFieldValueList::empty()]);
    }
    0
}

#[test]
fn empty_request_never_reaches_a_library_that_returns_everything() {
    common::init_logging();
    let binding = FakeLibrary::standard()
        .with("ARGetMultipleEntries", get_every_entry as ARGetMultipleEntriesFn as *const c_void)
        .binding(ApiVersion::new(8, 1, 0));
    let mut session = Session::new(binding);
    session.login(&LoginParams::new("host", "demo", "pw")).unwrap();

    let items = session.get_multiple_entries("HelpDesk", &[], None).unwrap();
    assert!(items.is_empty());
    assert_eq!(common::calls("ARGetMultipleEntries"), 0);

    let one = session
        .get_multiple_entries("HelpDesk", &[EntryId::new("000000000000001")], None)
        .unwrap_err();
    assert!(matches!(one, Error::BatchShape { expected: 1, got: 2, .. }), "{one}");
    assert_eq!(common::calls("ARGetMultipleEntries"), 1);
}

#[test]
fn views_come_back_in_request_order() {
    let session = common::session(ApiVersion::new(8, 1, 0));
    let items = session.get_multiple_vuis("HelpDesk", &[536870912, 536870913]).unwrap();
    let names: Vec<_> = items.iter().map(|i| i.found().unwrap().name.as_str()).collect();
    assert_eq!(names, ["View 536870912", "View 536870913"]);
    assert_eq!(items[0].found().unwrap().meta.owner, "Demo");
}
