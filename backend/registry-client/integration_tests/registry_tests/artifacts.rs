use crate::registry_tests::helpers::{
    AVRO_SCHEMA, api, artifact_json, forbid_any_request, start_registry, version_json,
};

use registry_client::params::{
    CreateArtifactParams, ListArtifactsParams, SearchArtifactsByContentParams,
    SearchArtifactsParams,
};
use registry_client::{ErrorKind, RequestContext};

use models::{
    ArtifactType, CreateArtifact, CreateVersion, EditableArtifactMetadata, VersionContent,
};
use serde_json::json;
use wiremock::matchers::{
    body_json, body_string, header, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Verifies artifact creation sends query flags and the JSON body, and decodes
/// both the artifact and its first version.
///
/// **BUG THIS CATCHES**: Would catch `ifExists`/`dryRun` being dropped or mis-cased.
#[tokio::test]
async fn given_artifact_with_first_version_when_created_then_both_returned() {
    // GIVEN
    let (server, client) = start_registry().await;
    Mock::given(method("POST"))
        .and(path(api("/groups/telemetry/artifacts")))
        .and(query_param("ifExists", "FIND_OR_CREATE_VERSION"))
        .and(query_param("dryRun", "true"))
        .and(query_param_is_missing("canonical"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "artifactId": "heartbeat",
            "artifactType": "AVRO",
            "firstVersion": {
                "version": "1.0.0",
                "content": {
                    "content": AVRO_SCHEMA,
                    "contentType": "application/json"
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artifact": artifact_json("telemetry", "heartbeat"),
            "version": version_json("telemetry", "heartbeat", "1.0.0")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateArtifact::builder()
        .with_artifact_id("heartbeat")
        .with_artifact_type(ArtifactType::Avro)
        .with_first_version(
            CreateVersion::new(VersionContent::new(AVRO_SCHEMA, "application/json"))
                .with_version("1.0.0"),
        )
        .build()
        .unwrap();
    let params = CreateArtifactParams {
        if_exists: "FIND_OR_CREATE_VERSION".to_string(),
        dry_run: true,
        ..Default::default()
    };

    // WHEN
    let created = client
        .create_artifact(&RequestContext::new(), "telemetry", &request, &params)
        .await
        .unwrap();

    // THEN
    assert_eq!(created.artifact.artifact_id, "heartbeat");
    assert_eq!(created.artifact.artifact_type, ArtifactType::Avro);
    let version = created.version.expect("first version returned");
    assert_eq!(version.version, "1.0.0");
    assert_eq!(version.global_id, 41);
}

#[tokio::test]
async fn given_unknown_if_exists_when_created_then_rejected_locally() {
    let (server, client) = start_registry().await;
    forbid_any_request(&server).await;

    let request = CreateArtifact::builder()
        .with_artifact_id("heartbeat")
        .build()
        .unwrap();
    let params = CreateArtifactParams {
        if_exists: "UPDATE".to_string(),
        ..Default::default()
    };

    let err = client
        .create_artifact(&RequestContext::new(), "telemetry", &request, &params)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.violations()[0].field, "if_exists");
}

/// **VALUE**: Verifies artifact search repeats the `labels` key per filter.
///
/// **BUG THIS CATCHES**: Would catch using the comma-joined encoding of group search here.
#[tokio::test]
async fn given_label_filters_when_searching_artifacts_then_key_repeated() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(api("/search/artifacts")))
        .and(query_param("labels", "env:prod"))
        .and(query_param("labels", "team"))
        .and(query_param("artifactType", "PROTOBUF"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artifacts": [{
                "groupId": "telemetry",
                "artifactId": "heartbeat",
                "artifactType": "PROTOBUF"
            }],
            "count": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = SearchArtifactsParams {
        labels: vec!["env:prod".to_string(), "team".to_string()],
        artifact_type: "PROTOBUF".to_string(),
        ..Default::default()
    };
    let page = client
        .search_artifacts(&RequestContext::new(), &params)
        .await
        .unwrap();

    assert_eq!(page.count, 1);
    assert_eq!(page.artifacts[0].artifact_type, Some(ArtifactType::Protobuf));
}

/// **VALUE**: Verifies content search sends the document as an opaque body.
///
/// **WHY THIS MATTERS**: The registry only compares raw content when the body is `*/*`.
///
/// **BUG THIS CATCHES**: Would catch the schema being wrapped as JSON.
#[tokio::test]
async fn given_schema_text_when_searching_by_content_then_sent_raw() {
    let (server, client) = start_registry().await;
    Mock::given(method("POST"))
        .and(path(api("/search/artifacts")))
        .and(header("content-type", "*/*"))
        .and(query_param("canonical", "true"))
        .and(body_string(AVRO_SCHEMA))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artifacts": [],
            "count": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = SearchArtifactsByContentParams {
        canonical: true,
        ..Default::default()
    };
    let page = client
        .search_artifacts_by_content(&RequestContext::new(), AVRO_SCHEMA, &params)
        .await
        .unwrap();

    assert_eq!(page.count, 0);
}

#[tokio::test]
async fn given_group_when_listing_artifacts_then_page_decoded() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(api("/groups/telemetry/artifacts")))
        .and(query_param("orderby", "name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artifacts": [
                { "artifactId": "a" },
                { "artifactId": "b" }
            ],
            "count": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = ListArtifactsParams {
        order_by: "name".to_string(),
        ..Default::default()
    };
    let page = client
        .list_artifacts(&RequestContext::new(), "telemetry", &params)
        .await
        .unwrap();

    let ids: Vec<&str> = page
        .artifacts
        .iter()
        .map(|artifact| artifact.artifact_id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[tokio::test]
async fn given_artifact_when_fetched_updated_and_deleted_then_each_call_resolves() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(api("/groups/telemetry/artifacts/heartbeat")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(artifact_json("telemetry", "heartbeat")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(api("/groups/telemetry/artifacts/heartbeat")))
        .and(body_json(json!({ "name": "Heartbeat v2" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api("/groups/telemetry/artifacts/heartbeat")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api("/groups/telemetry/artifacts")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = RequestContext::new();
    let artifact = client
        .get_artifact(&ctx, "telemetry", "heartbeat")
        .await
        .unwrap();
    assert_eq!(artifact.name.as_deref(), Some("Heartbeat"));

    let metadata = EditableArtifactMetadata {
        name: Some("Heartbeat v2".to_string()),
        ..Default::default()
    };
    client
        .update_artifact(&ctx, "telemetry", "heartbeat", &metadata)
        .await
        .unwrap();
    client
        .delete_artifact(&ctx, "telemetry", "heartbeat")
        .await
        .unwrap();
    client
        .delete_artifacts_in_group(&ctx, "telemetry")
        .await
        .unwrap();
}

#[tokio::test]
async fn given_first_version_without_content_when_created_then_rejected_locally() {
    let (server, client) = start_registry().await;
    forbid_any_request(&server).await;

    let request = CreateArtifact {
        artifact_id: Some("heartbeat".to_string()),
        artifact_type: None,
        name: None,
        description: None,
        labels: None,
        first_version: Some(CreateVersion::new(VersionContent::new("", "application/json"))),
    };

    let err = client
        .create_artifact(
            &RequestContext::new(),
            "telemetry",
            &request,
            &CreateArtifactParams::default(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("Version content cannot be empty"));
}

/// **VALUE**: Verifies a first version is held to the same identifier rules as
/// `create_version`.
///
/// **WHY THIS MATTERS**: The same `CreateVersion` payload must not be accepted through
/// artifact creation and rejected through version creation.
///
/// **BUG THIS CATCHES**: Would catch `create_artifact` skipping the version and branch
/// identifier checks.
#[tokio::test]
async fn given_first_version_with_bad_identifiers_when_created_then_rejected_locally() {
    let (server, client) = start_registry().await;
    forbid_any_request(&server).await;
    let ctx = RequestContext::new();

    let content = || VersionContent::new(AVRO_SCHEMA, "application/json");
    let mut bad_version = CreateVersion::new(content());
    bad_version.version = Some("bad/ver".to_string());
    let mut bad_branch = CreateVersion::new(content());
    bad_branch.branches = vec!["no spaces".to_string()];

    for first_version in [bad_version, bad_branch] {
        let request = CreateArtifact {
            artifact_id: Some("heartbeat".to_string()),
            artifact_type: Some(ArtifactType::Avro),
            name: None,
            description: None,
            labels: None,
            first_version: Some(first_version),
        };

        let err = client
            .create_artifact(&ctx, "telemetry", &request, &CreateArtifactParams::default())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation, "error: {err}");
    }
}
