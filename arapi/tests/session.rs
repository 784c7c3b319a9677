mod common;

use arapi::{ApiVersion, Charset, Error, EntryId, LoginParams, SchemaFilter, Session, SessionState, Value};
use arapi_sys::AR_MAX_AUTH_SIZE;
use common::FakeLibrary;

const V81: ApiVersion = ApiVersion::new(8, 1, 0);

#[test]
fn calls_before_login_are_rejected() {
    common::init_logging();
    let session = Session::new(FakeLibrary::standard().binding(V81));
    assert_eq!(session.state(), SessionState::Uninitialized);

    let err = session.list_schemas(&SchemaFilter::default()).unwrap_err();
    assert!(matches!(err, Error::Uninitialized), "{err}");
    let err = session.delete_entry("HelpDesk", &EntryId::new("1"), 0).unwrap_err();
    assert!(matches!(err, Error::Uninitialized), "{err}");
    assert_eq!(common::calls("ARGetListSchema"), 0);
}

#[test]
fn login_with_port_sets_it_and_verifies_the_user() {
    let session = common::session(V81);
    assert_eq!(session.state(), SessionState::Active);
    assert_eq!(session.server(), Some("host"));
    assert_eq!(common::last_port(), Some(1234));
    assert!(session.user_flags().admin);
    assert!(!session.user_flags().sub_admin);
    assert_eq!(common::calls("ARInitialization"), 1);
    assert_eq!(common::calls("ARVerifyUser"), 1);
}

#[test]
fn login_without_port_skips_set_server_port() {
    common::init_logging();
    let mut session = Session::new(FakeLibrary::standard().binding(V81));
    session.login(&LoginParams::new("host", "demo", "pw")).unwrap();
    assert_eq!(common::calls("ARSetServerPort"), 0);
}

#[test]
fn empty_host_takes_the_first_listed_server() {
    common::init_logging();
    let mut session = Session::new(FakeLibrary::standard().binding(V81));
    session.login(&LoginParams::new("", "demo", "pw")).unwrap();
    assert_eq!(session.server(), Some("fallback-host"));
    assert_eq!(common::calls("ARGetListServer"), 1);
}

#[test]
fn malformed_endpoint_is_rejected_before_any_call() {
    common::init_logging();
    let mut session = Session::new(FakeLibrary::standard().binding(V81));
    let err = session.login(&LoginParams::new("host:port", "demo", "pw")).unwrap_err();
    assert!(matches!(err, Error::InvalidEndpoint(_)), "{err}");
    assert_eq!(common::calls("ARInitialization"), 0);
    assert_ne!(session.state(), SessionState::Active);
}

#[test]
fn second_login_is_rejected() {
    let mut session = common::session(V81);
    let err = session.login(&LoginParams::new("other", "demo", "pw")).unwrap_err();
    assert!(matches!(err, Error::SessionActive), "{err}");
    assert_eq!(session.server(), Some("host"));
}

#[test]
fn logoff_terminates_once() {
    let mut session = common::session(V81);
    session.logoff().unwrap();
    assert_eq!(session.state(), SessionState::Terminated);
    assert!(session.logoff().unwrap().is_empty());
    drop(session);
    assert_eq!(common::calls("ARTermination"), 1);
}

#[test]
fn dropping_an_active_session_logs_off() {
    let session = common::session(V81);
    drop(session);
    assert_eq!(common::calls("ARTermination"), 1);
}

#[test]
fn session_can_log_in_again_after_logoff() {
    let mut session = common::session(V81);
    session.logoff().unwrap();
    session.login(&LoginParams::new("host", "demo", "pw")).unwrap();
    assert_eq!(session.state(), SessionState::Active);
    assert_eq!(common::calls("ARInitialization"), 2);
}

#[test]
fn failed_verification_terminates_the_context() {
    common::init_logging();
    let binding = FakeLibrary::standard().without("ARVerifyUser").binding(V81);
    let mut session = Session::new(binding);
    let err = session.login(&LoginParams::new("host", "demo", "pw")).unwrap_err();
    assert!(matches!(err, Error::MissingSymbol("ARVerifyUser")), "{err}");
    assert_eq!(session.state(), SessionState::Terminated);
    assert_eq!(common::calls("ARTermination"), 1);
}

#[test]
fn overlong_password_is_not_echoed() {
    common::init_logging();
    let password = "correct-horse-battery-staple-0123456789";
    let mut session = Session::new(FakeLibrary::standard().binding(V81));
    let err = session.login(&LoginParams::new("host", "demo", password)).unwrap_err();
    assert!(matches!(err, Error::FieldTooLong { field: "password", .. }), "{err}");
    assert!(!err.to_string().contains(password));
    assert!(!format!("{err:?}").contains(password));
    assert_eq!(common::calls("ARInitialization"), 0);
    assert_eq!(session.state(), SessionState::Terminated);
}

#[test]
fn overlong_auth_string_is_not_echoed() {
    common::init_logging();
    let auth = "x".repeat(2 * AR_MAX_AUTH_SIZE);
    let mut session = Session::new(FakeLibrary::standard().binding(V81));
    let err = session.login(&LoginParams::new("host", "demo", "pw").auth(&auth)).unwrap_err();
    assert!(matches!(err, Error::FieldTooLong { .. }), "{err}");
    assert!(!format!("{err:?}").contains(&auth));
}

#[test]
fn rpc_number_beyond_c_int_is_rejected() {
    common::init_logging();
    let mut session = Session::new(FakeLibrary::standard().binding(V81));
    let err = session
        .login(&LoginParams::new("host:1234", "demo", "pw").rpc(u32::MAX))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidEndpoint(_)), "{err}");
    assert_eq!(common::calls("ARSetServerPort"), 0);
    assert_eq!(common::calls("ARTermination"), 1);
    assert_eq!(session.state(), SessionState::Terminated);
}

#[test]
fn utf8_locale_carries_wide_text_until_logoff() {
    common::init_logging();
    let mut session = Session::new(FakeLibrary::standard().binding(V81));
    session
        .login(&LoginParams::new("host", "demo", "pw").locale("en_US.UTF-8"))
        .unwrap();
    assert_eq!(session.codec().charset(), Charset::Utf8);

    // The fake echoes each entry id back as the entry's only value.
    let id = EntryId::new("日本語");
    let items = session.get_multiple_entries("HelpDesk", &[id], None).unwrap();
    assert_eq!(items[0].found().unwrap()[0].value, Value::Char("日本語".into()));

    session.logoff().unwrap();
    assert_eq!(session.codec().charset(), Charset::Latin1);

    session.login(&LoginParams::new("host", "demo", "pw")).unwrap();
    let err = session
        .get_multiple_entries("HelpDesk", &[EntryId::new("日本語")], None)
        .unwrap_err();
    assert!(matches!(err, Error::Encoding(_)), "{err}");
}
