//! Test helpers for registry client integration tests.
//!
//! Each test gets its own wiremock server and a client pointed at the
//! server's `/apis/registry/v3` prefix.

use registry_client::{REGISTRY_API_PATH, RegistryClient};

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a mock registry and a client bound to it.
pub async fn start_registry() -> (MockServer, RegistryClient) {
    let server = MockServer::start().await;
    let base_url = format!("{}{}", server.uri(), REGISTRY_API_PATH);
    let client = RegistryClient::new(&base_url).expect("Failed to build client");
    (server, client)
}

/// Path under the API prefix, e.g. `api("/groups")`.
pub fn api(suffix: &str) -> String {
    format!("{REGISTRY_API_PATH}{suffix}")
}

/// Fails the test (on server drop) if any request reaches the server.
pub async fn forbid_any_request(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

/// A registry that sends `200` headers announcing a 100-byte body, writes one
/// byte of it, then goes silent for `stall`.
///
/// Runs on a plain thread so the stall does not depend on the test runtime.
pub fn start_stalled_body_registry(stall: Duration) -> RegistryClient {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind listener");
    let port = listener.local_addr().expect("Failed to read local addr").port();

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };

        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            match stream.read(&mut chunk) {
                Ok(0) | Err(_) => return,
                Ok(n) => request.extend_from_slice(&chunk[..n]),
            }
        }

        let head = concat!(
            "HTTP/1.1 200 OK\r\n",
            "Content-Type: application/json\r\n",
            "Content-Length: 100\r\n\r\n",
            "{",
        );
        if stream.write_all(head.as_bytes()).is_err() || stream.flush().is_err() {
            return;
        }
        thread::sleep(stall);
    });

    RegistryClient::new(&format!("http://127.0.0.1:{port}{REGISTRY_API_PATH}"))
        .expect("Failed to build client")
}

pub fn problem(status: u16, title: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "status": status,
        "title": title,
        "detail": format!("{title} (detail)"),
    }))
}

pub fn group_json(group_id: &str) -> Value {
    json!({
        "groupId": group_id,
        "description": "Test group",
        "owner": "tester",
        "createdOn": "2024-11-02T10:00:00Z",
        "labels": { "env": "test" }
    })
}

pub fn artifact_json(group_id: &str, artifact_id: &str) -> Value {
    json!({
        "groupId": group_id,
        "artifactId": artifact_id,
        "name": "Heartbeat",
        "artifactType": "AVRO",
        "owner": "tester",
        "createdOn": "2024-11-02T10:00:00Z"
    })
}

pub fn version_json(group_id: &str, artifact_id: &str, version: &str) -> Value {
    json!({
        "groupId": group_id,
        "artifactId": artifact_id,
        "version": version,
        "artifactType": "AVRO",
        "globalId": 41,
        "contentId": 17,
        "state": "ENABLED"
    })
}

pub fn branch_json(group_id: &str, artifact_id: &str, branch_id: &str) -> Value {
    json!({
        "groupId": group_id,
        "artifactId": artifact_id,
        "branchId": branch_id,
        "description": "Release line",
        "systemDefined": false
    })
}

pub const AVRO_SCHEMA: &str =
    r#"{"type":"record","name":"Heartbeat","fields":[{"name":"beat","type":"long"}]}"#;
