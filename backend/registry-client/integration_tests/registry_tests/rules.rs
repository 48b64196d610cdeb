use crate::registry_tests::helpers::{api, forbid_any_request, problem, start_registry};

use registry_client::{ErrorKind, RequestContext, RuleScope};

use models::{CompatibilityLevel, Rule, RuleType, ValidityLevel};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Verifies each rule scope addresses its own collection.
///
/// **BUG THIS CATCHES**: Would catch group or artifact rules landing on the global path.
#[tokio::test]
async fn given_each_scope_when_rules_listed_then_scope_path_used() {
    let (server, client) = start_registry().await;
    for (suffix, body) in [
        ("/admin/rules", json!(["VALIDITY"])),
        ("/groups/telemetry/rules", json!(["COMPATIBILITY"])),
        (
            "/groups/telemetry/artifacts/heartbeat/rules",
            json!(["VALIDITY", "INTEGRITY"]),
        ),
    ] {
        Mock::given(method("GET"))
            .and(path(api(suffix)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
    }

    let ctx = RequestContext::new();
    let global = client.list_rules(&ctx, &RuleScope::Global).await.unwrap();
    let group = client
        .list_rules(&ctx, &RuleScope::group("telemetry"))
        .await
        .unwrap();
    let artifact = client
        .list_rules(&ctx, &RuleScope::artifact("telemetry", "heartbeat"))
        .await
        .unwrap();

    assert_eq!(global, vec![RuleType::Validity]);
    assert_eq!(group, vec![RuleType::Compatibility]);
    assert_eq!(artifact, vec![RuleType::Validity, RuleType::Integrity]);
}

#[tokio::test]
async fn given_rule_when_created_then_no_content_accepted() {
    let (server, client) = start_registry().await;
    Mock::given(method("POST"))
        .and(path(api("/groups/telemetry/rules")))
        .and(body_json(json!({ "ruleType": "COMPATIBILITY", "config": "BACKWARD" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .create_rule(
            &RequestContext::new(),
            &RuleScope::group("telemetry"),
            &Rule::compatibility(CompatibilityLevel::Backward),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn given_rule_when_fetched_and_updated_then_rule_returned() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(api("/admin/rules/VALIDITY")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "ruleType": "VALIDITY", "config": "SYNTAX_ONLY" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(api("/admin/rules/VALIDITY")))
        .and(body_json(json!({ "ruleType": "VALIDITY", "config": "FULL" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "ruleType": "VALIDITY", "config": "FULL" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let ctx = RequestContext::new();
    let current = client
        .get_rule(&ctx, &RuleScope::Global, RuleType::Validity)
        .await
        .unwrap();
    assert_eq!(current.config, "SYNTAX_ONLY");

    let updated = client
        .update_rule(&ctx, &RuleScope::Global, &Rule::validity(ValidityLevel::Full))
        .await
        .unwrap();
    assert_eq!(updated, Rule::validity(ValidityLevel::Full));
}

#[tokio::test]
async fn given_rules_when_deleted_then_single_and_all_resolve() {
    let (server, client) = start_registry().await;
    Mock::given(method("DELETE"))
        .and(path(api("/groups/telemetry/artifacts/heartbeat/rules/INTEGRITY")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api("/groups/telemetry/artifacts/heartbeat/rules")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = RequestContext::new();
    let scope = RuleScope::artifact("telemetry", "heartbeat");
    client
        .delete_rule(&ctx, &scope, RuleType::Integrity)
        .await
        .unwrap();
    client.delete_all_rules(&ctx, &scope).await.unwrap();
}

#[tokio::test]
async fn given_duplicate_rule_when_created_then_conflict() {
    let (server, client) = start_registry().await;
    Mock::given(method("POST"))
        .and(path(api("/admin/rules")))
        .respond_with(problem(409, "A rule named 'VALIDITY' already exists."))
        .mount(&server)
        .await;

    let err = client
        .create_rule(
            &RequestContext::new(),
            &RuleScope::Global,
            &Rule::validity(ValidityLevel::Full),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert!(err.is_conflict());
}

#[tokio::test]
async fn given_empty_group_in_scope_when_listed_then_no_request() {
    let (server, client) = start_registry().await;
    forbid_any_request(&server).await;

    let err = client
        .list_rules(&RequestContext::new(), &RuleScope::group(""))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
}
