use crate::{ArtifactType, CreateArtifact, CreateVersion, ModelError, VersionContent};

fn avro_version() -> CreateVersion {
    CreateVersion::new(VersionContent::new(
        r#"{"type":"record","name":"Heartbeat","fields":[{"name":"beat","type":"long"}]}"#,
        "application/json",
    ))
    .with_version("1.0.0")
}

/// **VALUE**: Verifies a fully specified artifact request builds with every field carried over.
///
/// **WHY THIS MATTERS**: `create_artifact` serializes exactly what the builder produced.
///
/// **BUG THIS CATCHES**: Would catch a builder method that forgets to store its value.
#[test]
fn given_complete_builder_when_built_then_all_fields_present() {
    let request = CreateArtifact::builder()
        .with_artifact_id("heartbeat")
        .with_artifact_type(ArtifactType::Avro)
        .with_name("Heartbeat")
        .with_description("Liveness event")
        .with_label("team", "platform")
        .with_first_version(avro_version())
        .build()
        .expect("valid request");

    assert_eq!(request.artifact_id.as_deref(), Some("heartbeat"));
    assert_eq!(request.artifact_type, Some(ArtifactType::Avro));
    assert_eq!(request.name.as_deref(), Some("Heartbeat"));
    assert_eq!(
        request.labels.as_ref().and_then(|l| l.get("team")).map(String::as_str),
        Some("platform")
    );
    assert_eq!(
        request.first_version.as_ref().and_then(|v| v.version.as_deref()),
        Some("1.0.0")
    );
}

#[test]
fn given_no_labels_when_built_then_labels_omitted() {
    let request = CreateArtifact::builder()
        .with_artifact_id("heartbeat")
        .build()
        .unwrap();

    assert!(request.labels.is_none());
}

/// **VALUE**: Verifies the builder rejects an empty artifact id.
///
/// **WHY THIS MATTERS**: An empty id would produce a request the registry rejects with a
/// less specific error; failing locally is cheaper and clearer.
///
/// **BUG THIS CATCHES**: Would catch removal of the empty-id guard.
#[test]
fn given_empty_artifact_id_when_built_then_validation_error() {
    let err = CreateArtifact::builder()
        .with_artifact_id("")
        .build()
        .expect_err("empty id must fail");

    assert!(matches!(err, ModelError::Validation { .. }));
    assert!(err.to_string().contains("Artifact ID cannot be empty"));
}

#[test]
fn given_first_version_without_content_when_built_then_validation_error() {
    let err = CreateArtifact::builder()
        .with_artifact_id("heartbeat")
        .with_first_version(CreateVersion::new(VersionContent::new("", "application/json")))
        .build()
        .expect_err("empty content must fail");

    assert!(err.to_string().contains("Version content cannot be empty"));
}

#[test]
fn given_neither_id_nor_version_when_built_then_validation_error() {
    let err = CreateArtifact::builder().build().expect_err("must fail");

    assert!(err.to_string().contains("Either an artifact ID or a first version"));
}
