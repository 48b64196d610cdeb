use crate::error::{ErrorKind, RegistryError};
use crate::validation::{DOT_SEGMENT_RULE, GROUP_ID_PATTERN, IdentifierKind, Validator};

/// **VALUE**: Verifies the validator error names the field, echoes the value and shows the pattern.
///
/// **WHY THIS MATTERS**: The message is the only thing a caller sees when a path
/// segment is rejected before any request is sent.
///
/// **BUG THIS CATCHES**: Would catch a message that drops the offending value or the rule.
#[test]
fn given_empty_group_id_when_validated_then_error_names_field_value_and_pattern() {
    let validator = Validator::new();

    let err = validator
        .validate("", IdentifierKind::GroupId)
        .expect_err("empty group id must fail");

    assert_eq!(err.kind(), ErrorKind::Validation);
    let message = err.to_string();
    assert!(message.contains("Group ID"), "message: {message}");
    assert!(message.contains("''"), "message: {message}");
    assert!(message.contains(GROUP_ID_PATTERN), "message: {message}");

    match err {
        RegistryError::InvalidIdentifier { field, value, .. } => {
            assert_eq!(field, "Group ID");
            assert_eq!(value, "");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

/// **VALUE**: Verifies length limits are enforced at both ends.
///
/// **BUG THIS CATCHES**: Would catch an unbounded quantifier in the id patterns.
#[test]
fn given_ids_at_length_limits_when_validated_then_only_overlong_fails() {
    let validator = Validator::new();

    assert!(validator.is_valid(&"g".repeat(512), IdentifierKind::GroupId));
    assert!(!validator.is_valid(&"g".repeat(513), IdentifierKind::GroupId));
    assert!(validator.is_valid(&"a".repeat(512), IdentifierKind::ArtifactId));
    assert!(!validator.is_valid(&"a".repeat(513), IdentifierKind::ArtifactId));
    assert!(validator.is_valid(&"1".repeat(256), IdentifierKind::Version));
    assert!(!validator.is_valid(&"1".repeat(257), IdentifierKind::Version));
}

/// **VALUE**: Verifies patterns match the whole value, not a substring.
///
/// **WHY THIS MATTERS**: A valid prefix followed by junk must not slip through into a URL.
///
/// **BUG THIS CATCHES**: Would catch a pattern missing its `^`/`$` anchors.
#[test]
fn given_value_with_valid_prefix_when_validated_then_whole_value_must_match() {
    let validator = Validator::new();

    assert!(validator.is_valid("1.0.0", IdentifierKind::Version));
    assert!(!validator.is_valid("1.0.0 beta", IdentifierKind::Version));
    assert!(!validator.is_valid("1.0.0/../x", IdentifierKind::Version));
    assert!(!validator.is_valid("abc\n", IdentifierKind::BranchId));
    assert!(!validator.is_valid("cafe babe", IdentifierKind::ContentHash));
}

#[test]
fn given_version_expressions_when_validated_then_branch_form_accepted() {
    let validator = Validator::new();

    assert!(validator.is_valid("3", IdentifierKind::VersionExpression));
    assert!(validator.is_valid("branch=latest", IdentifierKind::VersionExpression));
    assert!(!validator.is_valid("branch=", IdentifierKind::VersionExpression));
    assert!(!validator.is_valid("", IdentifierKind::VersionExpression));
}

#[test]
fn given_label_filters_when_validated_then_key_and_key_value_forms_accepted() {
    let validator = Validator::new();

    assert!(validator.is_valid("env", IdentifierKind::LabelFilter));
    assert!(validator.is_valid("env:prod", IdentifierKind::LabelFilter));
    assert!(validator.is_valid("env:", IdentifierKind::LabelFilter));
    assert!(!validator.is_valid(":prod", IdentifierKind::LabelFilter));
}

/// **VALUE**: Verifies commas are only reserved in the comma-joined label encoding.
///
/// **WHY THIS MATTERS**: Repeated `labels` keys carry each filter whole, so a comma
/// there is ordinary data; in the joined form it would split one filter into two.
///
/// **BUG THIS CATCHES**: Would catch one label rule applied to both encodings.
#[test]
fn given_label_with_comma_when_validated_then_only_joined_form_rejects_it() {
    let validator = Validator::new();

    assert!(validator.is_valid("env:prod,eu", IdentifierKind::LabelFilter));
    assert!(!validator.is_valid("env:prod,eu", IdentifierKind::JoinedLabelFilter));
    assert!(!validator.is_valid("env,team", IdentifierKind::JoinedLabelFilter));
    assert!(validator.is_valid("env:prod", IdentifierKind::JoinedLabelFilter));
}

/// **VALUE**: Verifies `.` and `..` are rejected for every kind that lands in a URL path.
///
/// **WHY THIS MATTERS**: URL normalization drops dot segments, so `delete_artifact("g", "..")`
/// would otherwise be sent as a delete of every artifact in group `g`.
///
/// **BUG THIS CATCHES**: Would catch identifiers that pass their pattern yet rewrite the path.
#[test]
fn given_dot_segments_when_validated_then_path_kinds_reject_them() {
    let validator = Validator::new();
    let path_kinds = [
        IdentifierKind::GroupId,
        IdentifierKind::ArtifactId,
        IdentifierKind::Version,
        IdentifierKind::VersionExpression,
        IdentifierKind::BranchId,
        IdentifierKind::CommentId,
    ];

    for kind in path_kinds {
        assert!(!validator.is_valid(".", kind), "{kind} accepted '.'");
        assert!(!validator.is_valid("..", kind), "{kind} accepted '..'");
        assert!(validator.is_valid("...", kind), "{kind} rejected '...'");
        assert!(validator.is_valid(".v1", kind), "{kind} rejected '.v1'");
    }
    assert!(validator.is_valid("%2E", IdentifierKind::GroupId));
    assert!(validator.is_valid(".", IdentifierKind::LabelFilter));

    let err = validator
        .validate("..", IdentifierKind::ArtifactId)
        .expect_err("dot segment must fail");
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains(DOT_SEGMENT_RULE), "message: {err}");
}

#[test]
fn given_hex_hash_when_validated_then_case_insensitive() {
    let validator = Validator::new();

    assert!(validator.is_valid("deadBEEF0123", IdentifierKind::ContentHash));
    assert!(!validator.is_valid("xyz", IdentifierKind::ContentHash));
}

#[test]
fn given_kind_when_displayed_then_field_name_used() {
    assert_eq!(IdentifierKind::CommentId.to_string(), "Comment ID");
    assert_eq!(IdentifierKind::VersionExpression.field_name(), "Version Expression");
}
