// Wire-shape tests: field naming and optional-field handling against
// registry payloads.

use crate::{
    ApiProblem, ArtifactType, CreateArtifact, CreateVersion, Rule, RuleType, ValidityLevel,
    VersionContent, VersionMetadata, VersionState,
};

use serde_json::json;

/// **VALUE**: Verifies a registry version payload decodes with camelCase field mapping.
///
/// **WHY THIS MATTERS**: Every resource operation decodes through these derives; a wrong
/// rename attribute turns every call into a decode error.
///
/// **BUG THIS CATCHES**: Would catch a missing `rename_all = "camelCase"` or wrong enum casing.
#[test]
fn given_registry_version_payload_when_decoded_then_fields_map() {
    let payload = json!({
        "groupId": "payments",
        "artifactId": "invoice",
        "version": "3",
        "artifactType": "PROTOBUF",
        "globalId": 41,
        "contentId": 17,
        "state": "DEPRECATED",
        "createdOn": "2024-05-01T10:00:00Z",
        "labels": {"env": "prod"}
    });

    let metadata: VersionMetadata = serde_json::from_value(payload).unwrap();

    assert_eq!(metadata.group_id.as_deref(), Some("payments"));
    assert_eq!(metadata.artifact_type, ArtifactType::Protobuf);
    assert_eq!(metadata.global_id, 41);
    assert_eq!(metadata.state, Some(VersionState::Deprecated));
    assert!(metadata.name.is_none());
}

#[test]
fn given_create_artifact_when_serialized_then_unset_fields_are_absent() {
    let request = CreateArtifact::builder()
        .with_artifact_id("invoice")
        .with_first_version(CreateVersion::new(VersionContent::new(
            "syntax = \"proto3\";",
            "application/x-protobuf",
        )))
        .build()
        .unwrap();

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        json!({
            "artifactId": "invoice",
            "firstVersion": {
                "content": {
                    "content": "syntax = \"proto3\";",
                    "contentType": "application/x-protobuf"
                }
            }
        })
    );
}

/// **VALUE**: Verifies problem bodies decode when the registry sends extra fields.
///
/// **WHY THIS MATTERS**: Real error bodies carry `detail`, `name`, `instance`; only
/// `status` and `title` are contractual.
///
/// **BUG THIS CATCHES**: Would catch `deny_unknown_fields` sneaking onto `ApiProblem`.
#[test]
fn given_problem_body_with_extra_fields_when_decoded_then_status_and_title_kept() {
    let body = r#"{"status":409,"title":"Artifact already exists","detail":"x","name":"ArtifactAlreadyExistsException"}"#;

    let problem: ApiProblem = serde_json::from_str(body).unwrap();

    assert_eq!(problem, ApiProblem::new(409, "Artifact already exists"));
    assert_eq!(problem.to_string(), "HTTP 409 - Artifact already exists");
}

#[test]
fn given_problem_body_missing_title_when_decoded_then_fails() {
    let result = serde_json::from_str::<ApiProblem>(r#"{"status":500}"#);
    assert!(result.is_err());
}

#[test]
fn given_typed_rule_constructor_when_serialized_then_config_is_level_token() {
    let rule = Rule::validity(ValidityLevel::SyntaxOnly);

    assert_eq!(rule.rule_type, RuleType::Validity);
    assert_eq!(
        serde_json::to_value(&rule).unwrap(),
        json!({"ruleType": "VALIDITY", "config": "SYNTAX_ONLY"})
    );
}
