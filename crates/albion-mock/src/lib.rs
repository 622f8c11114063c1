//! In-process mock of the Albion Online gameinfo and status hosts.
//!
//! ```ignore
//! let server = MockServer::start().await?;
//! server.mount("/api/gameinfo/players/abc", MockResponse::json(fixtures::player())).await;
//! // point a client at server.api_url() / server.status_url()
//! assert_eq!(server.requests().await[0].path, "/api/gameinfo/players/abc");
//! ```

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod fixtures;

use std::{collections::HashMap, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tokio::{net::TcpListener, sync::RwLock, task::JoinHandle};

/// Path prefix the mock serves the data API under.
pub const API_PREFIX: &str = "/api/gameinfo";

/// Path the mock serves the status API under.
pub const STATUS_PATH: &str = "/status";

/// A canned response for one path.
#[derive(Debug, Clone)]
pub struct MockResponse {
    status: u16,
    body: String,
    content_type: &'static str,
    delay: Option<Duration>,
}

impl MockResponse {
    /// A 200 response with a JSON body.
    #[must_use]
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            content_type: "application/json",
            delay: None,
        }
    }

    /// A response with an arbitrary status and plain-text body.
    #[must_use]
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            content_type: "text/plain",
            delay: None,
        }
    }

    /// A response with an arbitrary status and an empty body.
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self::text(status, "")
    }

    /// A response that is never sent within any reasonable test timeout.
    #[must_use]
    pub fn hang() -> Self {
        Self::status(200).with_delay(Duration::from_secs(3600))
    }

    /// Waits `delay` before answering.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// A request the mock received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Request path, still percent-encoded.
    pub path: String,
    /// Raw query string, if any.
    pub query: Option<String>,
    /// `User-Agent` header, if any.
    pub user_agent: Option<String>,
}

impl RecordedRequest {
    /// Returns the path and query as sent on the wire.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{query}", self.path),
            None => self.path.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    routes: RwLock<HashMap<String, MockResponse>>,
    requests: RwLock<Vec<RecordedRequest>>,
}

/// A running mock server. The server task stops when this value is dropped.
#[derive(Debug)]
pub struct MockServer {
    addr: SocketAddr,
    state: Arc<MockState>,
    task: JoinHandle<()>,
}

impl MockServer {
    /// Binds to a random local port and starts serving.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(MockState::default());
        let app = app(Arc::clone(&state));
        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Ok(Self { addr, state, task })
    }

    /// Mounts a response for an exact path (query strings are ignored).
    pub async fn mount(&self, path: impl Into<String>, response: MockResponse) {
        self.state.routes.write().await.insert(path.into(), response);
    }

    /// Mounts a response under the data API prefix.
    pub async fn mount_api(&self, path: &str, response: MockResponse) {
        self.mount(format!("{API_PREFIX}{path}"), response).await;
    }

    /// Mounts the status host response.
    pub async fn mount_status(&self, response: MockResponse) {
        self.mount(STATUS_PATH, response).await;
    }

    /// Returns the server origin, e.g. `http://127.0.0.1:41234`.
    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Returns the data API base URL.
    #[must_use]
    pub fn api_url(&self) -> String {
        format!("{}{API_PREFIX}", self.url())
    }

    /// Returns the status API URL.
    #[must_use]
    pub fn status_url(&self) -> String {
        format!("{}{STATUS_PATH}", self.url())
    }

    /// Returns every request received so far.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.read().await.clone()
    }

    /// Returns the number of requests received so far.
    pub async fn request_count(&self) -> usize {
        self.state.requests.read().await.len()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn app(state: Arc<MockState>) -> Router {
    Router::new().fallback(respond).with_state(state)
}

async fn respond(State(state): State<Arc<MockState>>, uri: Uri, headers: HeaderMap) -> Response {
    state.requests.write().await.push(RecordedRequest {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        user_agent: headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    let route = state.routes.read().await.get(uri.path()).cloned();
    let Some(route) = route else {
        return (StatusCode::NOT_FOUND, "no route mounted").into_response();
    };

    if let Some(delay) = route.delay {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(route.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, route.content_type)], route.body).into_response()
}
