mod common;

use arapi::{ApiVersion, EntryId, FieldValue, Outcome, SchemaFilter, Value};
use arapi_sys::AR_DATA_TYPE_CHAR;

#[test]
fn login_browse_and_logoff() {
    let mut session = common::session(ApiVersion::new(7, 6, 4));

    let schemas = session.list_schemas(&SchemaFilter::default()).unwrap();
    assert_eq!(schemas, ["HelpDesk", "User"]);
    assert_eq!(session.last_outcome(), Outcome::Ok);

    let field = session.get_field("HelpDesk", 1).unwrap();
    assert_eq!(field.id, 1);
    assert_eq!(field.name, "Request ID");
    assert_eq!(field.data_type, AR_DATA_TYPE_CHAR);
    assert_eq!(field.meta.owner, "Demo");
    assert_eq!(field.meta.timestamp, 1_700_000_000);
    assert_eq!(field.default, Value::Null);

    let id = session
        .create_entry("HelpDesk", &[FieldValue::new(8, Value::Char("Printer on fire".into()))])
        .unwrap();
    assert_eq!(id, EntryId::new(common::CREATED_ENTRY));

    session.logoff().unwrap();
    session.logoff().unwrap();
    assert_eq!(common::calls("ARTermination"), 1);
}

#[test]
fn unknown_field_surfaces_the_server_status() {
    let session = common::session(ApiVersion::new(8, 1, 0));
    let err = session.get_field("HelpDesk", 99).unwrap_err();
    match err {
        arapi::Error::Server { status, .. } => assert_eq!(status.entries()[0].code, 303),
        other => panic!("unexpected error: {other}"),
    }
}
