use crate::registry_tests::helpers::{AVRO_SCHEMA, api, forbid_any_request, start_registry};

use registry_client::params::{ContentParams, GlobalIdContentParams};
use registry_client::{ErrorKind, RequestContext};

use models::ArtifactType;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Verifies the format header is read exactly when it was requested.
///
/// **BUG THIS CATCHES**: Would catch negotiation being decoupled from `returnArtifactType`.
#[tokio::test]
async fn given_return_artifact_type_when_fetched_by_global_id_then_type_parsed() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(api("/ids/globalIds/41")))
        .and(query_param("returnArtifactType", "true"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Registry-ArtifactType", "AVRO")
                .set_body_string(AVRO_SCHEMA),
        )
        .expect(1)
        .mount(&server)
        .await;

    let params = GlobalIdContentParams {
        return_artifact_type: true,
        ..Default::default()
    };
    let content = client
        .content_by_global_id(&RequestContext::new(), 41, &params)
        .await
        .unwrap();

    assert_eq!(content.content, AVRO_SCHEMA);
    assert_eq!(content.artifact_type, Some(ArtifactType::Avro));
}

#[tokio::test]
async fn given_no_negotiation_when_fetched_by_global_id_then_type_absent() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(api("/ids/globalIds/41")))
        .and(query_param_is_missing("returnArtifactType"))
        .respond_with(ResponseTemplate::new(200).set_body_string(AVRO_SCHEMA))
        .expect(1)
        .mount(&server)
        .await;

    let content = client
        .content_by_global_id(&RequestContext::new(), 41, &GlobalIdContentParams::default())
        .await
        .unwrap();

    assert_eq!(content.artifact_type, None);
}

#[tokio::test]
async fn given_content_id_and_hash_when_fetched_then_raw_content_returned() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(api("/ids/contentIds/17")))
        .and(query_param("references", "PRESERVE"))
        .respond_with(ResponseTemplate::new(200).set_body_string(AVRO_SCHEMA))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api("/ids/contentHashes/9f86d081884c7d65")))
        .respond_with(ResponseTemplate::new(200).set_body_string(AVRO_SCHEMA))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = RequestContext::new();
    let by_id = client
        .content_by_content_id(
            &ctx,
            17,
            &ContentParams {
                references: "PRESERVE".to_string(),
            },
        )
        .await
        .unwrap();
    let by_hash = client
        .content_by_hash(&ctx, "9f86d081884c7d65", &ContentParams::default())
        .await
        .unwrap();

    assert_eq!(by_id.content, by_hash.content);
}

#[tokio::test]
async fn given_global_id_when_references_listed_then_decoded() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(api("/ids/globalIds/41/references")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "groupId": "telemetry", "artifactId": "envelope", "version": "2", "name": "Envelope" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let references = client
        .references_by_global_id(&RequestContext::new(), 41)
        .await
        .unwrap();

    assert_eq!(references[0].version.as_deref(), Some("2"));
}

#[tokio::test]
async fn given_negative_id_or_bad_hash_when_fetched_then_rejected_locally() {
    let (server, client) = start_registry().await;
    forbid_any_request(&server).await;

    let ctx = RequestContext::new();
    let negative = client
        .content_by_global_id(&ctx, -1, &GlobalIdContentParams::default())
        .await
        .unwrap_err();
    let bad_hash = client
        .content_by_hash(&ctx, "not-hex", &ContentParams::default())
        .await
        .unwrap_err();

    assert_eq!(negative.kind(), ErrorKind::Validation);
    assert_eq!(bad_hash.kind(), ErrorKind::Validation);
    assert!(bad_hash.to_string().contains("Content Hash"));
}
