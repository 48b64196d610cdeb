use crate::registry_tests::helpers::{api, branch_json, forbid_any_request, start_registry};

use registry_client::params::ListBranchesParams;
use registry_client::{ErrorKind, RequestContext};

use models::{CreateBranch, EditableBranchMetadata};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const BRANCHES: &str = "/groups/telemetry/artifacts/heartbeat/branches";

fn branches_path(suffix: &str) -> String {
    api(&format!("{BRANCHES}{suffix}"))
}

#[tokio::test]
async fn given_new_branch_when_created_then_metadata_returned() {
    let (server, client) = start_registry().await;
    Mock::given(method("POST"))
        .and(path(branches_path("")))
        .and(body_json(json!({
            "branchId": "release",
            "description": "Release line",
            "versions": ["1.0.0", "1.1.0"]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(branch_json("telemetry", "heartbeat", "release")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateBranch::new("release")
        .with_description("Release line")
        .with_version("1.0.0")
        .with_version("1.1.0");
    let branch = client
        .create_branch(&RequestContext::new(), "telemetry", "heartbeat", &request)
        .await
        .unwrap();

    assert_eq!(branch.branch_id, "release");
    assert!(!branch.system_defined);
}

#[tokio::test]
async fn given_branches_when_listed_then_paging_sent() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(branches_path("")))
        .and(query_param("offset", "10"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "branches": [
                { "artifactId": "heartbeat", "branchId": "latest", "systemDefined": true }
            ],
            "count": 11
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = ListBranchesParams {
        offset: 10,
        limit: 10,
    };
    let page = client
        .list_branches(&RequestContext::new(), "telemetry", "heartbeat", &params)
        .await
        .unwrap();

    assert_eq!(page.count, 11);
    assert!(page.branches[0].system_defined);
}

#[tokio::test]
async fn given_branch_when_fetched_updated_and_deleted_then_each_call_resolves() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(branches_path("/release")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(branch_json("telemetry", "heartbeat", "release")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(branches_path("/release")))
        .and(body_json(json!({ "description": "Stable" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(branches_path("/release")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = RequestContext::new();
    let branch = client
        .get_branch(&ctx, "telemetry", "heartbeat", "release")
        .await
        .unwrap();
    assert_eq!(branch.description.as_deref(), Some("Release line"));

    let metadata = EditableBranchMetadata {
        description: Some("Stable".to_string()),
    };
    client
        .update_branch(&ctx, "telemetry", "heartbeat", "release", &metadata)
        .await
        .unwrap();
    client
        .delete_branch(&ctx, "telemetry", "heartbeat", "release")
        .await
        .unwrap();
}

/// **VALUE**: Verifies the replacement version list is sent in caller order.
///
/// **WHY THIS MATTERS**: Branch order decides which version `branch=<id>` resolves to.
///
/// **BUG THIS CATCHES**: Would catch sorting or deduplicating the list before sending.
#[tokio::test]
async fn given_version_list_when_branch_replaced_then_order_preserved() {
    let (server, client) = start_registry().await;
    Mock::given(method("PUT"))
        .and(path(branches_path("/release/versions")))
        .and(body_json(json!({ "versions": ["2.0.0", "1.0.0", "1.5.0"] })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let versions = vec![
        "2.0.0".to_string(),
        "1.0.0".to_string(),
        "1.5.0".to_string(),
    ];
    client
        .replace_branch_versions(
            &RequestContext::new(),
            "telemetry",
            "heartbeat",
            "release",
            &versions,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn given_invalid_version_in_list_when_branch_replaced_then_no_request() {
    let (server, client) = start_registry().await;
    forbid_any_request(&server).await;

    let versions = vec!["1.0.0".to_string(), "not a version".to_string()];
    let err = client
        .replace_branch_versions(
            &RequestContext::new(),
            "telemetry",
            "heartbeat",
            "release",
            &versions,
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("not a version"));
}

#[tokio::test]
async fn given_version_when_added_to_branch_and_listed_then_resolves() {
    let (server, client) = start_registry().await;
    Mock::given(method("POST"))
        .and(path(branches_path("/release/versions")))
        .and(body_json(json!({ "version": "1.2.0" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(branches_path("/release/versions")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "versions": [
                { "artifactId": "heartbeat", "version": "1.2.0" },
                { "artifactId": "heartbeat", "version": "1.1.0" }
            ],
            "count": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = RequestContext::new();
    client
        .add_version_to_branch(&ctx, "telemetry", "heartbeat", "release", "1.2.0")
        .await
        .unwrap();
    let page = client
        .list_branch_versions(
            &ctx,
            "telemetry",
            "heartbeat",
            "release",
            &ListBranchesParams::default(),
        )
        .await
        .unwrap();

    assert_eq!(page.versions[0].version, "1.2.0");
}

#[tokio::test]
async fn given_branch_id_with_slash_when_fetched_then_rejected_locally() {
    let (server, client) = start_registry().await;
    forbid_any_request(&server).await;

    let err = client
        .get_branch(&RequestContext::new(), "telemetry", "heartbeat", "feature/x")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Branch ID"));
}
