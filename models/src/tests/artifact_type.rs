use crate::{ArtifactType, ModelError, VersionState};

use std::str::FromStr;

/// **VALUE**: Verifies every known format token parses to its variant and prints back identically.
///
/// **WHY THIS MATTERS**: The same enumeration backs query filters, response models and the
/// content-type header. A token that parses but prints differently would send filters the
/// registry does not recognise.
///
/// **BUG THIS CATCHES**: Would catch `ALL`/`TOKENS` drifting out of order or an `as_str` typo.
#[test]
fn given_all_tokens_when_parsed_then_round_trip_through_display() {
    for (token, kind) in ArtifactType::TOKENS.iter().zip(ArtifactType::ALL) {
        let parsed = ArtifactType::from_str(token).expect("known token should parse");
        assert_eq!(parsed, kind);
        assert_eq!(parsed.to_string(), *token);
    }
}

/// **VALUE**: Verifies unknown tokens are rejected with the offending value in the error.
///
/// **WHY THIS MATTERS**: A silent fallback to some default format would mislabel content.
///
/// **BUG THIS CATCHES**: Would catch a lenient parser (e.g. case-insensitive matching or
/// defaulting to JSON).
#[test]
fn given_unknown_or_lowercase_token_when_parsed_then_returns_unknown_token_error() {
    for bogus in ["BOGUS", "json", ""] {
        let err = ArtifactType::from_str(bogus).expect_err("should reject");
        match err {
            ModelError::UnknownToken { kind, value, .. } => {
                assert_eq!(kind, "artifact type");
                assert_eq!(value, bogus);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn given_artifact_type_when_serialized_then_uses_upper_case_token() {
    let json = serde_json::to_string(&ArtifactType::OpenApi).unwrap();
    assert_eq!(json, "\"OPENAPI\"");

    let parsed: ArtifactType = serde_json::from_str("\"KCONNECT\"").unwrap();
    assert_eq!(parsed, ArtifactType::KConnect);
}

#[test]
fn given_token_when_checked_then_membership_is_exact() {
    assert!(ArtifactType::is_token("AVRO"));
    assert!(!ArtifactType::is_token("Avro"));
    assert!(!ArtifactType::is_token("AVRO "));
}

/// **VALUE**: Verifies the token lists match the names serde puts on the wire.
///
/// **WHY THIS MATTERS**: Query filters are checked against `TOKENS` while response
/// bodies go through serde; the two must agree or a valid filter is rejected locally.
///
/// **BUG THIS CATCHES**: Would catch an `as_str` edit that forgets the serde rename.
#[test]
fn given_token_lists_when_compared_with_serde_then_identical() {
    for (token, kind) in ArtifactType::TOKENS.iter().zip(ArtifactType::ALL) {
        assert_eq!(serde_json::to_value(kind).unwrap(), *token);
    }
    assert_eq!(ArtifactType::TOKENS.len(), ArtifactType::ALL.len());

    for (token, state) in VersionState::TOKENS.iter().zip(VersionState::ALL) {
        assert_eq!(serde_json::to_value(state).unwrap(), *token);
        assert_eq!(VersionState::from_str(token).unwrap(), state);
    }
    assert_eq!(VersionState::TOKENS, ["ENABLED", "DISABLED", "DEPRECATED", "DRAFT"]);
}
