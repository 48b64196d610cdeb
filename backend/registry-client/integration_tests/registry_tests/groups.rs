use crate::registry_tests::helpers::{api, forbid_any_request, group_json, problem, start_registry};

use registry_client::params::{ListGroupsParams, SearchGroupsParams};
use registry_client::{ErrorKind, RequestContext};

use models::{CreateGroup, EditableGroupMetadata};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Verifies create_group posts a JSON body and decodes the returned metadata.
///
/// **BUG THIS CATCHES**: Would catch a missing `application/json` content type on
/// structured bodies.
#[tokio::test]
async fn given_new_group_when_created_then_json_body_posted_and_metadata_returned() {
    let (server, client) = start_registry().await;
    Mock::given(method("POST"))
        .and(path(api("/groups")))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "groupId": "payments",
            "description": "Payment events",
            "labels": { "team": "billing" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(group_json("payments")))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateGroup::new("payments")
        .with_description("Payment events")
        .with_label("team", "billing");
    let group = client
        .create_group(&RequestContext::new(), &request)
        .await
        .unwrap();

    assert_eq!(group.group_id, "payments");
    assert_eq!(group.owner.as_deref(), Some("tester"));
}

#[tokio::test]
async fn given_existing_group_when_created_then_conflict() {
    let (server, client) = start_registry().await;
    Mock::given(method("POST"))
        .and(path(api("/groups")))
        .respond_with(problem(409, "Group 'payments' already exists."))
        .mount(&server)
        .await;

    let err = client
        .create_group(&RequestContext::new(), &CreateGroup::new("payments"))
        .await
        .unwrap_err();

    assert!(err.is_conflict());
}

#[tokio::test]
async fn given_list_params_when_listed_then_only_set_fields_in_query() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(api("/groups")))
        .and(query_param("limit", "5"))
        .and(query_param("order", "desc"))
        .and(query_param_is_missing("offset"))
        .and(query_param_is_missing("orderby"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "groups": [group_json("a"), group_json("b")],
            "count": 12
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = ListGroupsParams {
        limit: 5,
        order: "desc".to_string(),
        ..Default::default()
    };
    let page = client
        .list_groups(&RequestContext::new(), &params)
        .await
        .unwrap();

    assert_eq!(page.count, 12);
    assert_eq!(page.groups.len(), 2);
}

/// **VALUE**: Verifies invalid parameters are rejected locally with every violation listed.
///
/// **WHY THIS MATTERS**: A bad request must cost zero network round trips.
///
/// **BUG THIS CATCHES**: Would catch parameters being validated after dispatch.
#[tokio::test]
async fn given_invalid_params_when_listed_then_no_request_and_all_violations() {
    let (server, client) = start_registry().await;
    forbid_any_request(&server).await;

    let params = ListGroupsParams {
        limit: -1,
        order_by: "bogus".to_string(),
        ..Default::default()
    };
    let err = client
        .list_groups(&RequestContext::new(), &params)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    let fields: Vec<&str> = err.violations().iter().map(|v| v.field).collect();
    assert_eq!(fields, vec!["limit", "order_by"]);
}

#[tokio::test]
async fn given_label_filters_when_searching_groups_then_single_joined_value() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(api("/search/groups")))
        .and(query_param("labels", "env:prod,team"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "groups": [],
            "count": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = SearchGroupsParams {
        labels: vec!["env:prod".to_string(), "team".to_string()],
        ..Default::default()
    };
    let page = client
        .search_groups(&RequestContext::new(), &params)
        .await
        .unwrap();

    assert_eq!(page.count, 0);
    assert!(page.groups.is_empty());
}

#[tokio::test]
async fn given_group_when_updated_and_deleted_then_no_content_accepted() {
    let (server, client) = start_registry().await;
    Mock::given(method("PUT"))
        .and(path(api("/groups/payments")))
        .and(body_json(json!({ "description": "Renamed" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api("/groups/payments")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = RequestContext::new();
    let metadata = EditableGroupMetadata {
        description: Some("Renamed".to_string()),
        labels: None,
    };
    client.update_group(&ctx, "payments", &metadata).await.unwrap();
    client.delete_group(&ctx, "payments").await.unwrap();
}

#[tokio::test]
async fn given_empty_group_id_when_fetched_then_validation_error_and_no_request() {
    let (server, client) = start_registry().await;
    forbid_any_request(&server).await;

    let err = client
        .get_group(&RequestContext::new(), "")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("Group ID"));
}
