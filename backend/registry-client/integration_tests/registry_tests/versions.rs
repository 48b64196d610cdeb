use crate::registry_tests::helpers::{
    AVRO_SCHEMA, api, forbid_any_request, problem, start_registry, version_json,
};

use registry_client::params::{
    ContentParams, CreateVersionParams, ListVersionsParams, ReferencesParams,
    SearchVersionsParams, UpdateStateParams,
};
use registry_client::{ErrorKind, RegistryError, RequestContext};

use models::{
    ArtifactType, CreateVersion, EditableVersionMetadata, VersionContent, VersionState,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const VERSIONS: &str = "/groups/telemetry/artifacts/heartbeat/versions";

fn versions_path(suffix: &str) -> String {
    api(&format!("{VERSIONS}{suffix}"))
}

#[tokio::test]
async fn given_new_version_when_created_then_metadata_returned() {
    let (server, client) = start_registry().await;
    Mock::given(method("POST"))
        .and(path(versions_path("")))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "version": "1.1.0",
            "content": { "content": AVRO_SCHEMA, "contentType": "application/json" },
            "branches": ["release"],
            "isDraft": true
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(version_json("telemetry", "heartbeat", "1.1.0")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateVersion::new(VersionContent::new(AVRO_SCHEMA, "application/json"))
        .with_version("1.1.0")
        .with_branch("release")
        .as_draft();
    let created = client
        .create_version(
            &RequestContext::new(),
            "telemetry",
            "heartbeat",
            &request,
            &CreateVersionParams::default(),
        )
        .await
        .unwrap();

    assert_eq!(created.version, "1.1.0");
    assert_eq!(created.content_id, 17);
    assert_eq!(created.state, Some(VersionState::Enabled));
}

#[tokio::test]
async fn given_version_name_with_space_when_created_then_rejected_locally() {
    let (server, client) = start_registry().await;
    forbid_any_request(&server).await;

    let request = CreateVersion::new(VersionContent::new(AVRO_SCHEMA, "application/json"))
        .with_version("1.1 beta");
    let err = client
        .create_version(
            &RequestContext::new(),
            "telemetry",
            "heartbeat",
            &request,
            &CreateVersionParams::default(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, RegistryError::InvalidIdentifier { field: "Version", .. }));
}

/// **VALUE**: Verifies raw content comes back verbatim and the negotiated format is parsed.
///
/// **WHY THIS MATTERS**: Schema documents are consumed byte for byte by serializers.
///
/// **BUG THIS CATCHES**: Would catch the content being JSON-decoded or re-encoded.
#[tokio::test]
async fn given_negotiated_content_when_fetched_then_text_and_type_returned() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(versions_path("/branch=latest/content")))
        .and(query_param("references", "DEREFERENCE"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Registry-ArtifactType", "AVRO")
                .set_body_string(AVRO_SCHEMA),
        )
        .expect(1)
        .mount(&server)
        .await;

    let params = ContentParams {
        references: "DEREFERENCE".to_string(),
    };
    let content = client
        .get_version_content(
            &RequestContext::new(),
            "telemetry",
            "heartbeat",
            "branch=latest",
            &params,
            true,
        )
        .await
        .unwrap();

    assert_eq!(content.content, AVRO_SCHEMA);
    assert_eq!(content.artifact_type, Some(ArtifactType::Avro));
}

#[tokio::test]
async fn given_unknown_format_header_when_negotiated_then_content_type_error() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(versions_path("/1/content")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Registry-ArtifactType", "BOGUS")
                .set_body_string("whatever"),
        )
        .mount(&server)
        .await;

    let err = client
        .get_version_content(
            &RequestContext::new(),
            "telemetry",
            "heartbeat",
            "1",
            &ContentParams::default(),
            true,
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(err.to_string().contains("BOGUS"));
}

#[tokio::test]
async fn given_content_without_negotiation_when_fetched_then_header_ignored() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(versions_path("/1/content")))
        .respond_with(ResponseTemplate::new(200).set_body_string("syntax = \"proto3\";"))
        .mount(&server)
        .await;

    let content = client
        .get_version_content(
            &RequestContext::new(),
            "telemetry",
            "heartbeat",
            "1",
            &ContentParams::default(),
            false,
        )
        .await
        .unwrap();

    assert_eq!(content.content, "syntax = \"proto3\";");
    assert_eq!(content.artifact_type, None);
}

#[tokio::test]
async fn given_missing_version_when_content_fetched_then_not_found() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(versions_path("/9/content")))
        .respond_with(problem(404, "No version '9' found."))
        .mount(&server)
        .await;

    let err = client
        .get_version_content(
            &RequestContext::new(),
            "telemetry",
            "heartbeat",
            "9",
            &ContentParams::default(),
            true,
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert!(err.is_not_found());
}

#[tokio::test]
async fn given_version_state_when_read_and_changed_then_round_trips() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(versions_path("/1.0.0/state")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "state": "DEPRECATED" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(versions_path("/1.0.0/state")))
        .and(query_param("dryRun", "true"))
        .and(body_json(json!({ "state": "DISABLED" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = RequestContext::new();
    let state = client
        .get_version_state(&ctx, "telemetry", "heartbeat", "1.0.0")
        .await
        .unwrap();
    assert_eq!(state, VersionState::Deprecated);

    client
        .update_version_state(
            &ctx,
            "telemetry",
            "heartbeat",
            "1.0.0",
            VersionState::Disabled,
            &UpdateStateParams { dry_run: true },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn given_versions_when_listed_and_searched_then_pages_decoded() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(versions_path("")))
        .and(query_param("orderby", "globalId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "versions": [{ "artifactId": "heartbeat", "version": "1.0.0", "globalId": 41 }],
            "count": 1
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api("/search/versions")))
        .and(query_param("state", "ENABLED"))
        .and(query_param("labels", "env:prod"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "versions": [],
            "count": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = RequestContext::new();
    let listed = client
        .list_versions(
            &ctx,
            "telemetry",
            "heartbeat",
            &ListVersionsParams {
                order_by: "globalId".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(listed.versions[0].global_id, Some(41));

    let searched = client
        .search_versions(
            &ctx,
            &SearchVersionsParams {
                state: "ENABLED".to_string(),
                labels: vec!["env:prod".to_string()],
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(searched.count, 0);
}

#[tokio::test]
async fn given_version_when_metadata_updated_content_replaced_and_deleted_then_no_content() {
    let (server, client) = start_registry().await;
    Mock::given(method("PUT"))
        .and(path(versions_path("/1.0.0")))
        .and(body_json(json!({ "description": "First cut" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(versions_path("/1.0.0/content")))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(versions_path("/1.0.0")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = RequestContext::new();
    let metadata = EditableVersionMetadata {
        description: Some("First cut".to_string()),
        ..Default::default()
    };
    client
        .update_version(&ctx, "telemetry", "heartbeat", "1.0.0", &metadata)
        .await
        .unwrap();
    client
        .update_version_content(
            &ctx,
            "telemetry",
            "heartbeat",
            "1.0.0",
            &VersionContent::new(AVRO_SCHEMA, "application/json"),
        )
        .await
        .unwrap();
    client
        .delete_version(&ctx, "telemetry", "heartbeat", "1.0.0")
        .await
        .unwrap();
}

#[tokio::test]
async fn given_version_when_fetched_then_metadata_decoded() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(versions_path("/1.0.0")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(version_json("telemetry", "heartbeat", "1.0.0")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let version = client
        .get_version(&RequestContext::new(), "telemetry", "heartbeat", "1.0.0")
        .await
        .unwrap();

    assert_eq!(version.global_id, 41);
    assert_eq!(version.artifact_type, ArtifactType::Avro);
}

#[tokio::test]
async fn given_references_when_listed_then_ref_type_sent() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(versions_path("/1.0.0/references")))
        .and(query_param("refType", "INBOUND"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "groupId": "telemetry", "artifactId": "envelope", "version": "2", "name": "Envelope" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let references = client
        .list_version_references(
            &RequestContext::new(),
            "telemetry",
            "heartbeat",
            "1.0.0",
            &ReferencesParams {
                ref_type: "INBOUND".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(references.len(), 1);
    assert_eq!(references[0].artifact_id, "envelope");
    assert_eq!(references[0].name.as_deref(), Some("Envelope"));
}

#[tokio::test]
async fn given_comments_when_listed_added_updated_and_deleted_then_each_call_resolves() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(versions_path("/1.0.0/comments")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "commentId": "c-1", "value": "Looks good", "owner": "alex" }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(versions_path("/1.0.0/comments")))
        .and(body_json(json!({ "value": "Ship it" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "commentId": "c-2", "value": "Ship it" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(versions_path("/1.0.0/comments/c-2")))
        .and(body_json(json!({ "value": "Shipped" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(versions_path("/1.0.0/comments/c-2")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = RequestContext::new();
    let comments = client
        .list_comments(&ctx, "telemetry", "heartbeat", "1.0.0")
        .await
        .unwrap();
    assert_eq!(comments[0].owner.as_deref(), Some("alex"));

    let added = client
        .add_comment(&ctx, "telemetry", "heartbeat", "1.0.0", "Ship it")
        .await
        .unwrap();
    assert_eq!(added.comment_id, "c-2");

    client
        .update_comment(&ctx, "telemetry", "heartbeat", "1.0.0", "c-2", "Shipped")
        .await
        .unwrap();
    client
        .delete_comment(&ctx, "telemetry", "heartbeat", "1.0.0", "c-2")
        .await
        .unwrap();
}
