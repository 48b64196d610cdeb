use crate::transport::RequestBody;
use crate::transport::body::{JSON_CONTENT_TYPE, OPAQUE_CONTENT_TYPE};

use models::{ArtifactType, EditableGroupMetadata};

/// **VALUE**: Verifies the body variant alone decides the content type.
///
/// **WHY THIS MATTERS**: The registry treats `*/*` bodies as raw schema content and
/// `application/json` bodies as structured requests; mixing them up changes meaning.
///
/// **BUG THIS CATCHES**: Would catch content sniffing or a default content type on empty bodies.
#[test]
fn given_each_body_kind_when_asked_then_content_type_follows_variant() {
    assert_eq!(RequestBody::Empty.content_type(), None);
    assert_eq!(
        RequestBody::opaque(r#"{"looks":"like json"}"#).content_type(),
        Some(OPAQUE_CONTENT_TYPE)
    );
    assert_eq!(
        RequestBody::structured(&ArtifactType::Avro)
            .unwrap()
            .content_type(),
        Some(JSON_CONTENT_TYPE)
    );
}

#[test]
fn given_empty_body_when_encoded_then_no_bytes() {
    assert_eq!(RequestBody::Empty.into_bytes().unwrap(), None);
    assert_eq!(RequestBody::default(), RequestBody::Empty);
}

#[test]
fn given_opaque_body_when_encoded_then_bytes_unchanged() {
    let body = RequestBody::from("syntax = \"proto3\";");

    assert_eq!(
        body.into_bytes().unwrap(),
        Some(b"syntax = \"proto3\";".to_vec())
    );
}

#[test]
fn given_structured_body_when_encoded_then_json_round_trips() {
    let metadata = EditableGroupMetadata {
        description: Some("Payments team".to_string()),
        labels: None,
    };

    let bytes = RequestBody::structured(&metadata)
        .unwrap()
        .into_bytes()
        .unwrap()
        .expect("structured body has bytes");
    let decoded: EditableGroupMetadata = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(decoded, metadata);
}
