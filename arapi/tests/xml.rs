mod common;

use arapi::{ApiVersion, Error, Image, ObjectMeta, XmlInput};
use arapi_sys::{AR_STRUCT_ITEM_FILTER, AR_STRUCT_ITEM_IMAGE, AR_STRUCT_ITEM_SCHEMA};

const DOC: &str = "<arDoc><image name=\"Logo\"/><filter name=\"HD:Route\"/></arDoc>";

#[test]
fn parse_lists_objects_and_app_blocks() {
    let session = common::session(ApiVersion::new(8, 1, 0));
    let parsed = session.parse_xml(&XmlInput::Text(DOC.into()), None).unwrap();

    assert_eq!(parsed.items().len(), 2);
    assert_eq!(parsed.items()[0].base_kind(), AR_STRUCT_ITEM_IMAGE);
    assert_eq!(parsed.names_of(AR_STRUCT_ITEM_FILTER).collect::<Vec<_>>(), ["HD:Route"]);
    assert_eq!(parsed.names_of(AR_STRUCT_ITEM_SCHEMA).count(), 0);
    assert_eq!(parsed.app_blocks(), ["Support"]);
}

#[test]
fn parse_failure_is_a_server_error() {
    let session = common::session(ApiVersion::new(8, 1, 0));
    let err = session.parse_xml(&XmlInput::Text(String::new()), None).unwrap_err();
    assert!(matches!(err, Error::Server { .. }), "{err}");
    assert_eq!(session.last_status().entries()[0].code, 8951);
}

#[test]
fn image_is_read_from_a_parsed_document() {
    let session = common::session(ApiVersion::new(8, 1, 0));
    let parsed = session.parse_xml(&XmlInput::Text(DOC.into()), None).unwrap();
    let image = session.get_image_from_xml(&parsed, "Logo").unwrap();

    assert_eq!(image.app_block.as_deref(), Some("Support"));
    assert_eq!(image.doc_version, 2);
    assert_eq!(image.object.name, "Logo");
    assert_eq!(image.object.kind, "png");
    assert_eq!(image.object.description.as_deref(), Some("Company logo"));
    assert_eq!(image.object.data, [0x89, b'P', b'N', b'G']);
}

#[test]
fn image_is_written_as_xml() {
    let session = common::session(ApiVersion::new(8, 1, 0));
    let image = Image {
        name: "Logo".into(),
        kind: "png".into(),
        description: None,
        checksum: None,
        data: vec![1, 2, 3],
        meta: ObjectMeta {
            owner: "Demo".into(),
            ..Default::default()
        },
    };

    let body = session.set_image_to_xml(&image, false).unwrap();
    assert_eq!(body, "<image name=\"Logo\" type=\"png\" bytes=\"3\"/>");
    let full = session.set_image_to_xml(&image, true).unwrap();
    assert!(full.starts_with("<?xml"));
}

#[test]
fn image_xml_needs_7_5() {
    let session = common::session(ApiVersion::new(7, 1, 0));
    let parsed = session.parse_xml(&XmlInput::Text(DOC.into()), None).unwrap();
    let err = session.get_image_from_xml(&parsed, "Logo").unwrap_err();
    assert!(matches!(err, Error::NotSupported { .. }), "{err}");
}
