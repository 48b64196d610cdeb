use crate::error::{ErrorKind, RegistryError};
use crate::transport::{ARTIFACT_TYPE_HEADER, parse_artifact_type};

use models::ArtifactType;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

fn headers_with(value: &'static [u8]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_bytes(ARTIFACT_TYPE_HEADER.as_bytes()).unwrap(),
        HeaderValue::from_bytes(value).unwrap(),
    );
    headers
}

/// **VALUE**: Verifies a known token in the format header maps to its enum value.
///
/// **WHY THIS MATTERS**: Callers pick a deserializer for raw content from this value.
///
/// **BUG THIS CATCHES**: Would catch a header lookup that is case-sensitive on the name.
#[test]
fn given_known_token_when_parsed_then_artifact_type_returned() {
    assert_eq!(
        parse_artifact_type(&headers_with(b"JSON")).unwrap(),
        ArtifactType::Json
    );
    assert_eq!(
        parse_artifact_type(&headers_with(b"PROTOBUF")).unwrap(),
        ArtifactType::Protobuf
    );
}

#[test]
fn given_surrounding_whitespace_when_parsed_then_trimmed() {
    assert_eq!(
        parse_artifact_type(&headers_with(b"  AVRO ")).unwrap(),
        ArtifactType::Avro
    );
}

/// **VALUE**: Verifies an unknown token is rejected with the offending value in the error.
///
/// **BUG THIS CATCHES**: Would catch silently defaulting to some format.
#[test]
fn given_unknown_token_when_parsed_then_error_names_value() {
    let err = parse_artifact_type(&headers_with(b"BOGUS")).expect_err("unknown token");

    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(err.to_string().contains("BOGUS"));
    match err {
        RegistryError::InvalidContentType { header, value, .. } => {
            assert_eq!(header, ARTIFACT_TYPE_HEADER);
            assert_eq!(value, "BOGUS");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn given_lowercase_token_when_parsed_then_rejected() {
    assert!(parse_artifact_type(&headers_with(b"json")).is_err());
}

#[test]
fn given_missing_header_when_parsed_then_error() {
    let err = parse_artifact_type(&HeaderMap::new()).expect_err("missing header");

    assert!(matches!(
        err,
        RegistryError::InvalidContentType { ref value, .. } if value.is_empty()
    ));
}
