//! Client calls end to end against the mock upstream.

use std::time::{Duration, Instant};

use albion_mock::{MockResponse, MockServer, fixtures};
use albion_sdk::prelude::*;

async fn setup() -> (MockServer, AlbionClient) {
    let server = MockServer::start().await.unwrap();
    let target = EndpointTarget::new(server.api_url(), server.status_url());
    let client = AlbionClient::with_target(target).unwrap();
    (server, client)
}

#[tokio::test]
async fn search_returns_typed_players() {
    let (server, client) = setup().await;
    server
        .mount_api("/search", MockResponse::json(fixtures::search("abc", "Caller")))
        .await;

    let result = client.search("Caller").await.unwrap();

    assert!(result.guilds.is_empty());
    assert_eq!(result.players[0].id, "abc");
    assert_eq!(result.players[0].name, "Caller");
    let requests = server.requests().await;
    assert_eq!(requests[0].path_and_query(), "/api/gameinfo/search?q=Caller");
}

#[tokio::test]
async fn unknown_region_never_reaches_network() {
    let server = MockServer::start().await.unwrap();

    let err = AlbionClient::from_region_name("Atlantis").unwrap_err();

    assert!(matches!(err, AlbionError::InvalidRegion(_)));
    assert_eq!(server.request_count().await, 0);
}

#[tokio::test]
async fn http_error_propagates_unchanged() {
    let (server, client) = setup().await;
    server
        .mount_api("/players/ghost", MockResponse::text(404, "not found"))
        .await;

    let call = client.player_info("ghost");
    let url = call.url().to_string();
    let err = call.await.unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.request_url(), Some(url.as_str()));
    assert_eq!(err.response_body(), Some("not found"));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn server_status_offline_on_error_code() {
    let (server, client) = setup().await;
    server.mount_status(MockResponse::status(502)).await;

    let status = client.server_status().await.unwrap();

    assert_eq!(status.kind(), StatusKind::Offline);
    assert!(status.message().contains("502"));
}

#[tokio::test]
async fn guild_events_send_guild_id_first() {
    let (server, client) = setup().await;
    server
        .mount_api("/events", MockResponse::json(serde_json::json!([fixtures::event(7)])))
        .await;

    let events = client
        .guild_recent_events("g1", Some(PaginationParams::new(10, 0)))
        .await
        .unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_id, 7);
    let requests = server.requests().await;
    assert_eq!(requests[0].query.as_deref(), Some("guildId=g1&limit=10&offset=0"));
}

#[tokio::test]
async fn battle_info_and_events() {
    let (server, client) = setup().await;
    server
        .mount_api("/battles/99", MockResponse::json(fixtures::battle(99)))
        .await;
    server
        .mount_api("/battle/99", MockResponse::json(serde_json::json!([fixtures::event(1)])))
        .await;

    let battle = client.battle_info(99).await.unwrap();
    let events = client.battle_events(99, 51, 0).await.unwrap();

    assert_eq!(battle.id, 99);
    assert_eq!(events.len(), 1);
    let requests = server.requests().await;
    assert_eq!(requests[1].path_and_query(), "/api/gameinfo/battle/99?offset=0&limit=51");
}

#[tokio::test]
async fn per_call_timeout_aborts() {
    let (server, client) = setup().await;
    server.mount_api("/events", MockResponse::hang()).await;

    let started = Instant::now();
    let err = client
        .recent_events(None)
        .timeout(Duration::from_millis(50))
        .await
        .unwrap_err();

    assert!(err.is_timeout());
    assert!(started.elapsed() < Duration::from_millis(1000));
}

#[tokio::test]
async fn cancel_token_aborts_call() {
    let (server, client) = setup().await;
    server.mount_api("/battles", MockResponse::hang()).await;

    let token = CancelToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        trigger.cancel();
    });

    let started = Instant::now();
    let err = client
        .recent_battles(None)
        .timeout(Duration::from_millis(5000))
        .cancel_on(token)
        .await
        .unwrap_err();

    assert!(err.is_aborted());
    assert!(!err.is_timeout());
    assert!(started.elapsed() < Duration::from_millis(1000));
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let (server, client) = setup().await;
    server
        .mount_api("/players/a", MockResponse::json(fixtures::player("a", "Alpha")))
        .await;
    server.mount_api("/players/b", MockResponse::hang()).await;

    let (fast, slow) = tokio::join!(
        async { client.player_info("a").await },
        async {
            client
                .player_info("b")
                .timeout(Duration::from_millis(50))
                .await
        },
    );

    assert_eq!(fast.unwrap().name, "Alpha");
    assert!(slow.unwrap_err().is_timeout());
}
