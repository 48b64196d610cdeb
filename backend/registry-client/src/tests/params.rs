use crate::params::{
    ContentParams, CreateArtifactParams, GlobalIdContentParams, ListArtifactsParams,
    ListBranchesParams, QueryParams, SearchArtifactsParams, SearchGroupsParams,
    SearchVersionsParams,
};
use crate::validation::Validator;

/// **VALUE**: Verifies zero-valued fields never reach the query string.
///
/// **WHY THIS MATTERS**: The registry applies its own defaults only when a key is absent;
/// sending `limit=0` would return an empty page.
///
/// **BUG THIS CATCHES**: Would catch serialization of unset numeric or text fields.
#[test]
fn given_default_params_when_serialized_then_query_is_empty() {
    assert!(ListArtifactsParams::default().to_query().is_empty());
    assert!(SearchArtifactsParams::default().to_query().is_empty());
    assert!(SearchVersionsParams::default().to_query().is_empty());
    assert!(SearchGroupsParams::default().to_query().is_empty());
    assert!(ListBranchesParams::default().to_query().is_empty());
    assert!(CreateArtifactParams::default().to_query().is_empty());
}

#[test]
fn given_populated_params_when_serialized_then_wire_keys_used() {
    let params = SearchArtifactsParams {
        limit: 20,
        order_by: "createdOn".to_string(),
        group_id: "payments".to_string(),
        global_id: 7,
        artifact_type: "AVRO".to_string(),
        ..Default::default()
    };

    let query = params.to_query();

    assert_eq!(query.get("limit"), Some("20"));
    assert_eq!(query.get("orderby"), Some("createdOn"));
    assert_eq!(query.get("groupId"), Some("payments"));
    assert_eq!(query.get("globalId"), Some("7"));
    assert_eq!(query.get("artifactType"), Some("AVRO"));
    assert!(!query.contains_key("offset"));
    assert_eq!(query.len(), 5);
}

#[test]
fn given_same_params_when_serialized_twice_then_identical() {
    let params = SearchVersionsParams {
        version: "1.0.0".to_string(),
        labels: vec!["env:prod".to_string()],
        state: "ENABLED".to_string(),
        ..Default::default()
    };

    assert_eq!(params.to_query(), params.to_query());
}

/// **VALUE**: Verifies every failing field is reported, not just the first.
///
/// **WHY THIS MATTERS**: Callers fix all problems in one round trip.
///
/// **BUG THIS CATCHES**: Would catch validation that short-circuits on the first violation.
#[test]
fn given_negative_limit_and_unknown_sort_when_validated_then_both_reported() {
    let validator = Validator::new();
    let params = ListArtifactsParams {
        limit: -1,
        order_by: "bogus".to_string(),
        ..Default::default()
    };

    let err = params.validate(&validator).expect_err("two violations");

    assert_eq!(err.violations().len(), 2);
    assert!(err.has("limit", "gte"));
    assert!(err.has("order_by", "oneof"));
    assert!(!err.has("offset", "gte"));
}

#[test]
fn given_valid_params_when_validated_then_ok() {
    let validator = Validator::new();
    let params = ListArtifactsParams {
        limit: 10,
        offset: 20,
        order: "desc".to_string(),
        order_by: "name".to_string(),
    };

    assert!(params.validate(&validator).is_ok());
}

/// **VALUE**: Verifies artifact and version search send labels as repeated keys.
///
/// **BUG THIS CATCHES**: Would catch switching to the comma-joined group search encoding.
#[test]
fn given_search_labels_when_serialized_then_artifact_search_repeats_key() {
    let params = SearchArtifactsParams {
        labels: vec!["env:prod".to_string(), "team".to_string()],
        ..Default::default()
    };

    let query = params.to_query();

    assert_eq!(query.get_all("labels"), vec!["env:prod", "team"]);
}

#[test]
fn given_search_labels_when_serialized_then_group_search_joins_with_comma() {
    let params = SearchGroupsParams {
        labels: vec!["env:prod".to_string(), "team".to_string()],
        ..Default::default()
    };

    let query = params.to_query();

    assert_eq!(query.get_all("labels"), vec!["env:prod,team"]);
}

#[test]
fn given_label_with_comma_when_validated_then_rejected() {
    let validator = Validator::new();
    let params = SearchGroupsParams {
        labels: vec!["a:1,b:2".to_string()],
        ..Default::default()
    };

    let err = params.validate(&validator).expect_err("comma in label");

    assert!(err.has("labels", "pattern"));
}

#[test]
fn given_label_with_comma_when_artifact_search_validated_then_accepted() {
    let validator = Validator::new();
    let params = SearchArtifactsParams {
        labels: vec!["region:eu,us".to_string()],
        ..Default::default()
    };

    assert!(params.validate(&validator).is_ok());
    assert_eq!(params.to_query().get_all("labels"), vec!["region:eu,us"]);
}

/// **VALUE**: Verifies an empty label entry is treated as unset by both validation and
/// serialization.
///
/// **BUG THIS CATCHES**: Would catch a label that fails validation even though the
/// query would have silently dropped it.
#[test]
fn given_empty_label_entry_when_validated_then_skipped_like_serialization() {
    let validator = Validator::new();
    let params = SearchVersionsParams {
        labels: vec![String::new(), "env".to_string()],
        ..Default::default()
    };

    assert!(params.validate(&validator).is_ok());
    assert_eq!(params.to_query().get_all("labels"), vec!["env"]);
}

/// **VALUE**: Verifies format filters accept only known tokens, exactly.
///
/// **BUG THIS CATCHES**: Would catch case-insensitive matching sneaking in.
#[test]
fn given_artifact_type_filter_when_validated_then_only_known_tokens_pass() {
    let validator = Validator::new();

    let ok = SearchArtifactsParams {
        artifact_type: "PROTOBUF".to_string(),
        ..Default::default()
    };
    assert!(ok.validate(&validator).is_ok());

    let lower = SearchArtifactsParams {
        artifact_type: "protobuf".to_string(),
        ..Default::default()
    };
    let err = lower.validate(&validator).expect_err("lowercase token");
    assert!(err.has("artifact_type", "oneof"));
}

#[test]
fn given_unknown_state_when_validated_then_rejected() {
    let validator = Validator::new();
    let params = SearchVersionsParams {
        state: "RETIRED".to_string(),
        ..Default::default()
    };

    let err = params.validate(&validator).expect_err("unknown state");

    assert!(err.has("state", "oneof"));
    assert!(err.to_string().contains("RETIRED"));
}

#[test]
fn given_flags_when_set_then_serialized_as_true() {
    let params = CreateArtifactParams {
        if_exists: "FIND_OR_CREATE_VERSION".to_string(),
        canonical: false,
        dry_run: true,
    };

    let query = params.to_query();

    assert_eq!(query.get("ifExists"), Some("FIND_OR_CREATE_VERSION"));
    assert_eq!(query.get("dryRun"), Some("true"));
    assert!(!query.contains_key("canonical"));
}

#[test]
fn given_content_params_when_validated_then_reference_handling_checked() {
    let validator = Validator::new();

    let ok = GlobalIdContentParams {
        references: "DEREFERENCE".to_string(),
        return_artifact_type: true,
    };
    assert!(ok.validate(&validator).is_ok());
    assert_eq!(ok.to_query().get("returnArtifactType"), Some("true"));

    let bad = ContentParams {
        references: "INLINE".to_string(),
    };
    assert!(bad.validate(&validator).unwrap_err().has("references", "oneof"));
}
