mod common;

use arapi::{ApiVersion, EntryId, EntryPoint, Error, Outcome, Severity};

#[test]
fn failed_call_reports_the_status_list() {
    let session = common::session(ApiVersion::new(8, 1, 0));
    let err = session.delete_entry("HelpDesk", &EntryId::new("000000000000001"), 0).unwrap_err();

    let Error::Server { entry, status } = err else {
        panic!("expected a server error");
    };
    assert_eq!(entry, EntryPoint::DeleteEntry);
    assert_eq!(status.outcome(), Outcome::Failure);
    let first = &status.entries()[0];
    assert_eq!(first.severity, Severity::Error);
    assert_eq!(first.code, 302);
    assert_eq!(first.message, "Entry does not exist in database");
    assert_eq!(first.appended, None);

    assert_eq!(session.last_outcome(), Outcome::Failure);
    assert_eq!(session.last_status(), status);
}

#[test]
fn successful_call_clears_the_last_status() {
    let session = common::session(ApiVersion::new(8, 1, 0));
    let _ = session.delete_entry("HelpDesk", &EntryId::new("000000000000001"), 0);
    session.list_schemas(&Default::default()).unwrap();
    assert!(session.last_status().is_empty());
    assert_eq!(session.last_outcome(), Outcome::Ok);
}
