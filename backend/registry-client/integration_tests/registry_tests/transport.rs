use crate::registry_tests::helpers::{
    api, forbid_any_request, group_json, problem, start_registry, start_stalled_body_registry,
};

use registry_client::{
    ErrorKind, RegistryClient, RegistryError, RequestContext, TransportFailure,
};

use std::time::Duration;

use models::GroupMetadata;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Verifies a per-call deadline aborts a slow request with a transport error.
///
/// **WHY THIS MATTERS**: A hung registry must not hang the caller; the deadline is the
/// caller's only bound on latency.
///
/// **BUG THIS CATCHES**: Would catch the context timeout being ignored, or surfacing as
/// an API error with a fake status.
#[tokio::test]
async fn given_slow_registry_when_deadline_passes_then_deadline_exceeded() {
    // GIVEN: A registry that answers after 2 seconds
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(api("/groups/slow")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(group_json("slow"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    // WHEN: Calling with a 100ms deadline
    let ctx = RequestContext::new().with_timeout(Duration::from_millis(100));
    let err = client.get_group(&ctx, "slow").await.unwrap_err();

    // THEN: Transport failure, no status
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(
        err.transport_failure(),
        Some(TransportFailure::DeadlineExceeded)
    );
    assert_eq!(err.status(), None);
}

/// **VALUE**: Verifies an already-cancelled context sends nothing.
///
/// **BUG THIS CATCHES**: Would catch the executor dispatching before checking the token.
#[tokio::test]
async fn given_cancelled_token_when_called_then_no_request_and_cancelled() {
    let (server, client) = start_registry().await;
    forbid_any_request(&server).await;

    let token = CancellationToken::new();
    token.cancel();
    let ctx = RequestContext::new().with_cancellation(token);

    let err = client.get_group(&ctx, "payments").await.unwrap_err();

    assert_eq!(err.transport_failure(), Some(TransportFailure::Cancelled));
}

#[tokio::test]
async fn given_in_flight_request_when_token_cancelled_then_cancelled() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(api("/groups/slow")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(group_json("slow"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    let ctx = RequestContext::new().with_cancellation(token.clone());
    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let err = client.get_group(&ctx, "slow").await.unwrap_err();
    canceller.await.unwrap();

    assert_eq!(err.transport_failure(), Some(TransportFailure::Cancelled));
}

/// **VALUE**: Verifies the deadline still applies after headers arrive, while the body
/// is being read.
///
/// **WHY THIS MATTERS**: A registry that answers the status line and then stalls would
/// otherwise hold the caller indefinitely despite a per-call deadline.
///
/// **BUG THIS CATCHES**: Would catch the deadline wrapping only the wait for headers.
#[tokio::test]
async fn given_body_stalls_after_headers_when_deadline_passes_then_deadline_exceeded() {
    // GIVEN: Headers and one body byte, then 5 seconds of silence
    let client = start_stalled_body_registry(Duration::from_secs(5));
    let ctx = RequestContext::new().with_timeout(Duration::from_millis(200));

    // WHEN
    let outcome = tokio::time::timeout(Duration::from_secs(3), client.get_group(&ctx, "slow"))
        .await
        .expect("call must finish within its own deadline");

    // THEN
    let err = outcome.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(
        err.transport_failure(),
        Some(TransportFailure::DeadlineExceeded)
    );
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn given_body_stalls_after_headers_when_token_cancelled_then_cancelled() {
    let client = start_stalled_body_registry(Duration::from_secs(5));
    let token = CancellationToken::new();
    let ctx = RequestContext::new().with_cancellation(token.clone());
    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        token.cancel();
    });

    let outcome = tokio::time::timeout(Duration::from_secs(3), client.get_group(&ctx, "slow"))
        .await
        .expect("cancellation must abort the body read");
    canceller.await.unwrap();

    assert_eq!(
        outcome.unwrap_err().transport_failure(),
        Some(TransportFailure::Cancelled)
    );
}

/// **VALUE**: Verifies `.` and `..` identifiers are rejected before any request is sent.
///
/// **WHY THIS MATTERS**: URL building drops dot segments, so `delete_artifact("g", "..")`
/// would reach the registry as a delete of every artifact in `g`.
///
/// **BUG THIS CATCHES**: Would catch an identifier that silently retargets a destructive call.
#[tokio::test]
async fn given_dot_segment_identifiers_when_deleting_then_no_request_is_sent() {
    let (server, client) = start_registry().await;
    forbid_any_request(&server).await;
    let ctx = RequestContext::new();

    let errors = [
        client.delete_artifact(&ctx, "g", "..").await.unwrap_err(),
        client.delete_group(&ctx, ".").await.unwrap_err(),
        client.delete_version(&ctx, "g", "a", "..").await.unwrap_err(),
        client.delete_branch(&ctx, "g", "a", ".").await.unwrap_err(),
    ];

    for err in errors {
        assert_eq!(err.kind(), ErrorKind::Validation, "error: {err}");
    }
}

#[tokio::test]
async fn given_percent_dot_identifier_when_called_then_segment_reaches_registry_escaped() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(api("/groups/%252E")))
        .respond_with(ResponseTemplate::new(200).set_body_json(group_json("%2E")))
        .expect(1)
        .mount(&server)
        .await;

    let group = client
        .get_group(&RequestContext::new(), "%2E")
        .await
        .unwrap();

    assert_eq!(group.group_id, "%2E");
}

/// **VALUE**: Verifies an unreachable registry is a connect failure carrying the OS cause.
///
/// **WHY THIS MATTERS**: "Connection refused" tells an operator the registry is down,
/// not misconfigured.
///
/// **BUG THIS CATCHES**: Would catch the error chain being truncated to reqwest's outer message.
#[tokio::test]
async fn given_closed_port_when_called_then_connect_failure() {
    // GIVEN: A port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client =
        RegistryClient::new(&format!("http://127.0.0.1:{port}/apis/registry/v3")).unwrap();

    // WHEN
    let err = client
        .system_info(&RequestContext::new())
        .await
        .unwrap_err();

    // THEN
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.transport_failure(), Some(TransportFailure::Connect));
    assert_eq!(err.status(), None);
}

/// **VALUE**: Verifies concurrent calls on one client each get their own response.
///
/// **WHY THIS MATTERS**: The client is shared across tasks; responses must never be
/// attributed to the wrong call.
///
/// **BUG THIS CATCHES**: Would catch shared mutable per-request state inside the client.
#[tokio::test]
async fn given_concurrent_calls_when_resolved_then_each_gets_own_group() {
    let (server, client) = start_registry().await;
    for index in 0..16u64 {
        let group_id = format!("group-{index}");
        Mock::given(method("GET"))
            .and(path(api(&format!("/groups/{group_id}"))))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(group_json(&group_id))
                    .set_delay(Duration::from_millis(10 * (16 - index))),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let mut tasks = JoinSet::new();
    for index in 0..16u64 {
        let client = client.clone();
        tasks.spawn(async move {
            let group_id = format!("group-{index}");
            let group: GroupMetadata = client
                .get_group(&RequestContext::new(), &group_id)
                .await
                .unwrap();
            (group_id, group)
        });
    }

    let mut seen = 0;
    while let Some(result) = tasks.join_next().await {
        let (requested, group) = result.unwrap();
        assert_eq!(group.group_id, requested);
        seen += 1;
    }
    assert_eq!(seen, 16);
}

/// **VALUE**: Verifies path identifiers are escaped as single segments.
///
/// **WHY THIS MATTERS**: Group and artifact ids may contain `/`, spaces or `?`; unescaped
/// they would address a different resource.
///
/// **BUG THIS CATCHES**: Would catch building paths by string concatenation.
#[tokio::test]
async fn given_id_with_reserved_characters_when_called_then_segment_escaped() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(api("/groups/team%20a%2Fb%3Fx")))
        .respond_with(ResponseTemplate::new(200).set_body_json(group_json("team a/b?x")))
        .expect(1)
        .mount(&server)
        .await;

    let group = client
        .get_group(&RequestContext::new(), "team a/b?x")
        .await
        .unwrap();

    assert_eq!(group.group_id, "team a/b?x");
}

/// **VALUE**: Verifies a problem response surfaces the registry's status and title.
///
/// **BUG THIS CATCHES**: Would catch decoding the problem body into the success type.
#[tokio::test]
async fn given_missing_group_when_fetched_then_api_error_not_found() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(api("/groups/missing")))
        .respond_with(problem(404, "No group 'missing' was found."))
        .mount(&server)
        .await;

    let err = client
        .get_group(&RequestContext::new(), "missing")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert!(err.is_not_found());
    assert_eq!(
        err.api_problem().map(|problem| problem.title.as_str()),
        Some("No group 'missing' was found.")
    );
}

#[tokio::test]
async fn given_html_error_page_when_fetched_then_malformed_body_keeps_status() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(api("/groups/proxy")))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>Service Unavailable</html>"))
        .mount(&server)
        .await;

    let err = client
        .get_group(&RequestContext::new(), "proxy")
        .await
        .unwrap_err();

    assert!(matches!(err, RegistryError::MalformedErrorBody { .. }));
    assert_eq!(err.status().map(|status| status.as_u16()), Some(503));
}

/// **VALUE**: Verifies a success status with an undecodable body is a decode error.
///
/// **BUG THIS CATCHES**: Would catch reporting decode failures as API errors.
#[tokio::test]
async fn given_invalid_json_on_success_when_fetched_then_decode_error() {
    let (server, client) = start_registry().await;
    Mock::given(method("GET"))
        .and(path(api("/groups/broken")))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"groupId\":"))
        .mount(&server)
        .await;

    let err = client
        .get_group(&RequestContext::new(), "broken")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.status(), None);
}

/// **VALUE**: Verifies status matching is exact: a 2xx other than the expected one is an error.
///
/// **BUG THIS CATCHES**: Would catch treating any 2xx as success.
#[tokio::test]
async fn given_unexpected_success_status_when_resolved_then_error() {
    let (server, client) = start_registry().await;
    Mock::given(method("DELETE"))
        .and(path(api("/groups/payments")))
        .respond_with(ResponseTemplate::new(200).set_body_json(group_json("payments")))
        .mount(&server)
        .await;

    let err = client
        .delete_group(&RequestContext::new(), "payments")
        .await
        .unwrap_err();

    assert!(matches!(err, RegistryError::MalformedErrorBody { .. }));
    assert_eq!(err.status().map(|status| status.as_u16()), Some(200));
}

#[tokio::test]
async fn given_invalid_base_url_when_client_built_then_error() {
    let err = RegistryClient::new("not a url").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Request);

    let err = RegistryClient::new("mailto:registry@example.com").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Request);
}
