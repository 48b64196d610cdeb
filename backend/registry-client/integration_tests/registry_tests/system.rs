use crate::registry_tests::helpers::{api, start_registry};

use registry_client::{RegistryClient, RegistryConfig, RequestContext};

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn given_registry_when_info_requested_then_decoded() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(api("/system/info")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Apicurio Registry (In Memory)",
            "description": "High performance, runtime registry for schemas and API designs.",
            "version": "3.0.6",
            "builtOn": "2024-12-04T14:36:19Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let info = client.system_info(&RequestContext::new()).await.unwrap();

    assert_eq!(info.version, "3.0.6");
    assert_eq!(info.built_on.as_deref(), Some("2024-12-04T14:36:19Z"));
}

#[tokio::test]
async fn given_partial_limits_when_requested_then_missing_fields_none() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(api("/system/limits")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "maxTotalSchemasCount": 1000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let limits = client.resource_limits(&RequestContext::new()).await.unwrap();

    assert_eq!(limits.max_total_schemas_count, Some(1000));
}

/// **VALUE**: Verifies a client built from config sends the configured user agent.
///
/// **BUG THIS CATCHES**: Would catch `from_config` ignoring optional fields.
#[tokio::test]
async fn given_config_with_user_agent_when_client_built_then_header_sent() {
    let (server, _) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(api("/system/info")))
        .and(header("user-agent", "ingest/2.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Registry",
            "version": "3.0.6"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = RegistryConfig {
        base_url: format!("{}{}", server.uri(), registry_client::REGISTRY_API_PATH),
        timeout_secs: 5,
        user_agent: Some("ingest/2.1".to_string()),
    };
    let client = RegistryClient::from_config(&config).unwrap();

    let info = client.system_info(&RequestContext::new()).await.unwrap();

    assert_eq!(info.name, "Registry");
}

#[tokio::test]
async fn given_invalid_config_when_client_built_then_error() {
    let config = RegistryConfig {
        timeout_secs: 0,
        ..Default::default()
    };

    assert!(RegistryClient::from_config(&config).is_err());
}
