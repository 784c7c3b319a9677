mod common;

use arapi::{ApiVersion, Binding, EntryPoint, Error, Revision, Session};
use common::FakeLibrary;

#[test]
fn revision_follows_the_library_version() {
    let binding = FakeLibrary::standard().binding(ApiVersion::new(7, 6, 2));
    assert_eq!(binding.revision(), Revision::V7_5);
    assert_eq!(binding.version(), ApiVersion::new(7, 6, 2));

    let binding = FakeLibrary::standard().binding(ApiVersion::new(9, 0, 0));
    assert_eq!(binding.revision(), Revision::V8_1);
}

#[test]
fn version_is_read_from_the_library_name() {
    let binding = Binding::from_source(Box::new(FakeLibrary::empty("/opt/ar/lib/libarapi7604.so")), None).unwrap();
    assert_eq!(binding.version(), ApiVersion::new(7, 6, 4));
    assert_eq!(binding.revision(), Revision::V7_6_04);
    assert_eq!(binding.library_name(), "/opt/ar/lib/libarapi7604.so");
}

#[test]
fn unnamed_library_needs_an_explicit_version() {
    let err = Binding::from_source(Box::new(FakeLibrary::empty("libclient.so")), None).unwrap_err();
    assert!(matches!(err, Error::UnknownLibraryVersion(_)), "{err}");
}

#[test]
fn versions_below_the_ladder_are_rejected() {
    let err = Binding::from_source(Box::new(FakeLibrary::standard()), Some(ApiVersion::new(4, 5, 0))).unwrap_err();
    assert!(matches!(err, Error::UnsupportedVersion(v) if v == ApiVersion::new(4, 5, 0)), "{err}");
}

#[test]
fn later_entry_points_are_not_supported_on_old_libraries() {
    let session = common::session(ApiVersion::new(5, 1, 0));
    match session.get_image("Logo").unwrap_err() {
        Error::NotSupported { entry, since, revision } => {
            assert_eq!(entry, EntryPoint::GetImage);
            assert_eq!(since, Revision::V7_5);
            assert_eq!(revision, Revision::V5_1);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!session.binding().supports(EntryPoint::GetMultipleVuis));
    assert!(session.binding().supports(EntryPoint::GetMultipleEntries));
}

#[test]
fn gaps_are_reported_without_a_session() {
    common::init_logging();
    let session = Session::new(FakeLibrary::standard().binding(ApiVersion::new(8, 1, 0)));
    let err = session.get_multiple_ext_field_candidates("HelpDesk").unwrap_err();
    assert!(matches!(err, Error::NotImplemented(EntryPoint::GetMultipleExtFieldCandidates)), "{err}");
    let err = session.list_ext_schema_candidates().unwrap_err();
    assert!(matches!(err, Error::NotImplemented(_)), "{err}");
}

#[test]
fn absent_symbols_fail_only_when_called() {
    let binding = FakeLibrary::standard().without("ARGetListSchema").binding(ApiVersion::new(8, 1, 0));
    assert!(!binding.supports(EntryPoint::GetListSchema));

    let mut session = Session::new(binding);
    session.login(&arapi::LoginParams::new("host", "demo", "pw")).unwrap();
    let err = session.list_schemas(&Default::default()).unwrap_err();
    assert!(matches!(err, Error::MissingSymbol("ARGetListSchema")), "{err}");
    assert!(session.get_field("HelpDesk", 1).is_ok());
}
