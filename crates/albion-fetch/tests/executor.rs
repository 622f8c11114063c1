//! Executor behavior against a live mock upstream.
//!
//! Starts the mock server on a random port and drives the executor over real
//! HTTP, covering success, HTTP errors, the status-host policy, timeouts,
//! cancellation and transport failures.

use std::error::Error as _;
use std::time::{Duration, Instant};

use albion_fetch::{CancelToken, ClientConfig, Executor, FetchOptions};
use albion_mock::{MockResponse, MockServer, fixtures};
use albion_types::{AbortReason, AlbionError, Player, ServerStatus, StatusKind};

async fn setup() -> (MockServer, Executor) {
    let server = MockServer::start().await.unwrap();
    let executor = Executor::with_defaults().unwrap();
    (server, executor)
}

#[tokio::test]
async fn json_success_is_typed() {
    let (server, executor) = setup().await;
    server
        .mount_api("/players/abc", MockResponse::json(fixtures::player("abc", "Caller")))
        .await;

    let url = format!("{}/players/abc", server.api_url());
    let player: Player = executor.execute_json(&url, &FetchOptions::new()).await.unwrap();

    assert_eq!(player.id, "abc");
    assert_eq!(player.name, "Caller");
}

#[tokio::test]
async fn non_2xx_is_http_error_with_body() {
    let (server, executor) = setup().await;
    server
        .mount_api("/players/missing", MockResponse::text(404, "player not found"))
        .await;

    let url = format!("{}/players/missing", server.api_url());
    let err = executor
        .execute_json::<Player>(&url, &FetchOptions::new())
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.status_text(), Some("Not Found"));
    assert_eq!(err.request_url(), Some(url.as_str()));
    assert_eq!(err.response_body(), Some("player not found"));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn empty_error_body_is_omitted() {
    let (server, executor) = setup().await;
    server.mount_api("/guilds/x", MockResponse::status(500)).await;

    let url = format!("{}/guilds/x", server.api_url());
    let err = executor
        .execute_json::<serde_json::Value>(&url, &FetchOptions::new())
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(500));
    assert_eq!(err.response_body(), None);
}

#[tokio::test]
async fn status_non_2xx_resolves_offline() {
    let (server, executor) = setup().await;
    server.mount_status(MockResponse::text(503, "maintenance")).await;

    let status = executor
        .execute_status(&server.status_url(), &FetchOptions::new())
        .await
        .unwrap();

    assert_eq!(status.kind(), StatusKind::Offline);
    assert!(status.message().contains("503"));
}

#[tokio::test]
async fn status_online_is_parsed() {
    let (server, executor) = setup().await;
    server
        .mount_status(MockResponse::json(fixtures::status("online", "All good.")))
        .await;

    let status = executor
        .execute_status(&server.status_url(), &FetchOptions::new())
        .await
        .unwrap();

    assert_eq!(
        status,
        ServerStatus::Online {
            message: "All good.".to_string()
        }
    );
}

#[tokio::test]
async fn timeout_aborts_hanging_request() {
    let (server, executor) = setup().await;
    server.mount_api("/battles", MockResponse::hang()).await;

    let url = format!("{}/battles", server.api_url());
    let options = FetchOptions::new().with_timeout(Duration::from_millis(50));
    let started = Instant::now();
    let err = executor
        .execute_json::<serde_json::Value>(&url, &options)
        .await
        .unwrap_err();
    let elapsed = started.elapsed();

    assert!(err.is_aborted());
    assert!(err.is_timeout());
    assert!(elapsed >= Duration::from_millis(50));
    assert!(elapsed < Duration::from_millis(1000), "took {elapsed:?}");
}

#[tokio::test]
async fn status_timeout_still_propagates() {
    let (server, executor) = setup().await;
    server.mount_status(MockResponse::hang()).await;

    let options = FetchOptions::new().with_timeout(Duration::from_millis(50));
    let err = executor
        .execute_status(&server.status_url(), &options)
        .await
        .unwrap_err();

    assert!(err.is_timeout());
}

#[tokio::test]
async fn cancellation_beats_long_timeout() {
    let (server, executor) = setup().await;
    server.mount_api("/events", MockResponse::hang()).await;

    let token = CancelToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        trigger.cancel();
    });

    let url = format!("{}/events", server.api_url());
    let options = FetchOptions::new()
        .with_timeout(Duration::from_millis(5000))
        .with_cancel(token);
    let started = Instant::now();
    let err = executor
        .execute_json::<serde_json::Value>(&url, &options)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AlbionError::Aborted {
            reason: AbortReason::Cancelled,
            ..
        }
    ));
    assert!(started.elapsed() < Duration::from_millis(1000));
}

#[tokio::test]
async fn pre_cancelled_token_sends_nothing() {
    let (server, executor) = setup().await;
    server
        .mount_api("/players/abc", MockResponse::json(fixtures::player("abc", "Caller")))
        .await;

    let token = CancelToken::new();
    token.cancel();
    let url = format!("{}/players/abc", server.api_url());
    let err = executor
        .execute_json::<Player>(&url, &FetchOptions::new().with_cancel(token))
        .await
        .unwrap_err();

    assert!(err.is_aborted());
    assert_eq!(server.request_count().await, 0);
}

#[tokio::test]
async fn config_default_timeout_applies() {
    let server = MockServer::start().await.unwrap();
    server.mount_api("/battles", MockResponse::hang()).await;
    let executor = Executor::new(ClientConfig {
        default_timeout: Some(Duration::from_millis(50)),
        ..ClientConfig::default()
    })
    .unwrap();

    let url = format!("{}/battles", server.api_url());
    let err = executor
        .execute_json::<serde_json::Value>(&url, &FetchOptions::new())
        .await
        .unwrap_err();

    assert!(err.is_timeout());
}

#[tokio::test]
async fn malformed_json_is_transport_with_source() {
    let (server, executor) = setup().await;
    server
        .mount_api("/events/1", MockResponse::text(200, "{not json"))
        .await;

    let url = format!("{}/events/1", server.api_url());
    let err = executor
        .execute_json::<serde_json::Value>(&url, &FetchOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(err, AlbionError::Transport { .. }));
    let source = err.source().expect("cause is kept");
    assert!(source.downcast_ref::<serde_json::Error>().is_some());
}

#[tokio::test]
async fn connection_refused_is_transport() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let executor = Executor::with_defaults().unwrap();
    let url = format!("http://{addr}/api/gameinfo/players/abc");
    let err = executor
        .execute_json::<Player>(&url, &FetchOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(err, AlbionError::Transport { .. }));
    assert!(!err.is_aborted());
    let source = err.source().expect("cause is kept");
    assert!(source.downcast_ref::<reqwest::Error>().is_some());
}

#[tokio::test]
async fn user_agent_is_sent() {
    let (server, executor) = setup().await;
    server
        .mount_status(MockResponse::json(fixtures::status("online", "ok")))
        .await;

    executor
        .execute_status(&server.status_url(), &FetchOptions::new())
        .await
        .unwrap();

    let requests = server.requests().await;
    assert_eq!(requests.len(), 1);
    assert!(
        requests[0]
            .user_agent
            .as_deref()
            .unwrap()
            .starts_with("albion-sdk/")
    );
}
