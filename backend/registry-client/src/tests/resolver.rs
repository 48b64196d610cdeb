use crate::error::{ErrorKind, RegistryError};
use crate::transport::resolver::{api_error, decode_json};

use common::HttpStatusCode;
use models::{ApiProblem, SystemInfo};

use reqwest::StatusCode;

/// **VALUE**: Verifies an unexpected status with a problem body surfaces status and title verbatim.
///
/// **WHY THIS MATTERS**: Callers branch on 404 vs 409 and show the registry's own title.
///
/// **BUG THIS CATCHES**: Would catch re-wording or dropping the registry's title.
#[test]
fn given_problem_body_when_resolved_then_api_error_with_status_and_title() {
    let err = api_error(
        StatusCode::NOT_FOUND,
        br#"{"status":404,"title":"Not found","detail":"ignored"}"#,
    );

    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.api_problem(), Some(&ApiProblem::new(404, "Not found")));
    assert_eq!(err.status(), Some(HttpStatusCode::NOT_FOUND));
    assert!(err.is_not_found());
    assert!(err.to_string().contains("HTTP 404 - Not found"));
}

/// **VALUE**: Verifies a non-problem error body still reports the HTTP status.
///
/// **WHY THIS MATTERS**: Proxies answer with HTML; the status is the only useful signal left.
///
/// **BUG THIS CATCHES**: Would catch losing the status when the problem decode fails.
#[test]
fn given_html_error_body_when_resolved_then_malformed_error_keeps_status() {
    let err = api_error(StatusCode::BAD_GATEWAY, b"<html>Bad gateway</html>");

    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.status(), Some(HttpStatusCode(502)));
    assert!(matches!(err, RegistryError::MalformedErrorBody { .. }));
}

#[test]
fn given_empty_error_body_when_resolved_then_malformed_error() {
    let err = api_error(StatusCode::CONFLICT, b"");

    assert!(matches!(err, RegistryError::MalformedErrorBody { .. }));
    assert!(err.is_conflict());
}

/// **VALUE**: Verifies an undecodable success body is a decode error, not an API error.
///
/// **BUG THIS CATCHES**: Would catch decode failures being reported as remote rejections.
#[test]
fn given_invalid_success_body_when_decoded_then_decode_error() {
    let err = decode_json::<SystemInfo>(b"not json").expect_err("invalid json");

    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.status(), None);
}

#[test]
fn given_valid_success_body_when_decoded_then_value_returned() {
    let info: SystemInfo =
        decode_json(br#"{"name":"Registry","version":"3.0.6","builtOn":"2024-11-02"}"#).unwrap();

    assert_eq!(info.name, "Registry");
    assert_eq!(info.version, "3.0.6");
}
