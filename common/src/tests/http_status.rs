use crate::HttpStatusCode;

/// **VALUE**: Verifies status classification used by callers to branch on failures.
///
/// **WHY THIS MATTERS**: Callers distinguish "missing" (404) from "already exists" (409)
/// and from server faults without parsing messages.
///
/// **BUG THIS CATCHES**: Would catch off-by-one range bounds in the class helpers.
#[test]
fn given_status_codes_when_classified_then_ranges_are_exact() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(300).is_success());

    assert!(HttpStatusCode(400).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());

    assert!(HttpStatusCode(500).is_server_error());
    assert!(!HttpStatusCode(600).is_server_error());

    assert!(HttpStatusCode::NOT_FOUND.is_not_found());
    assert!(HttpStatusCode::CONFLICT.is_conflict());
    assert!(!HttpStatusCode::NOT_FOUND.is_conflict());
}

#[test]
fn given_u16_when_converted_then_displays_bare_number() {
    let status = HttpStatusCode::from(409);

    assert_eq!(status, HttpStatusCode::CONFLICT);
    assert_eq!(status.as_u16(), 409);
    assert_eq!(status.to_string(), "409");
}
