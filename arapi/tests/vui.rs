mod common;

use arapi::ApiVersion;

fn fetch(version: ApiVersion) -> Option<String> {
    let session = common::session(version);
    let items = session.get_multiple_vuis("HelpDesk", &[536870912]).unwrap();
    items[0].found().unwrap().locale.clone()
}

#[test]
fn locales_are_skipped_on_affected_libraries() {
    assert_eq!(fetch(ApiVersion::new(7, 5, 0)), None);
    assert_eq!(common::locales_requested(), Some(false));

    assert_eq!(fetch(ApiVersion::new(7, 6, 3)), None);
    assert_eq!(common::locales_requested(), Some(false));
}

#[test]
fn locales_are_read_from_7_6_04() {
    assert_eq!(fetch(ApiVersion::new(7, 6, 4)).as_deref(), Some("en_US"));
    assert_eq!(common::locales_requested(), Some(true));
}

#[test]
fn locales_are_read_before_7_5() {
    assert_eq!(fetch(ApiVersion::new(7, 1, 0)).as_deref(), Some("en_US"));
    assert_eq!(common::locales_requested(), Some(true));
}
