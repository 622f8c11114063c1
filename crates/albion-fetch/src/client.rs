//! HTTP executor for gameinfo and status requests.

use albion_types::{AbortReason, AlbionError, Result, ServerStatus};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::FetchOptions;

/// Configuration for the executor.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Deadline applied to calls that do not set their own.
    pub default_timeout: Option<Duration>,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            default_timeout: None,
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("albion-sdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Issues GET requests and normalizes every outcome into [`AlbionError`].
///
/// Holds no per-call state; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Executor {
    http: Client,
    config: ClientConfig,
}

impl Executor {
    /// Creates a new executor with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> std::result::Result<Self, reqwest::Error> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { http, config })
    }

    /// Creates an executor with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> std::result::Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the executor configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches `url` and decodes the JSON body as `T`.
    ///
    /// The body is trusted to match `T`; a mismatch surfaces as a transport
    /// error carrying the `serde_json` cause.
    ///
    /// # Errors
    ///
    /// - [`AlbionError::Http`] for a non-2xx answer
    /// - [`AlbionError::Aborted`] if the timeout or the cancel token fires first
    /// - [`AlbionError::Transport`] for network, body or JSON failures
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        url: &str,
        options: &FetchOptions,
    ) -> Result<T> {
        let fetch = async {
            let response = self.send(url).await?;
            if !response.status().is_success() {
                return Err(http_error(url, response).await);
            }
            let body = read_body(url, response).await?;
            parse_json(url, &body)
        };
        self.abortable(url, options, fetch).await
    }

    /// Fetches a status host.
    ///
    /// A non-2xx answer is reported as [`ServerStatus::Offline`]: the status
    /// hosts are expected to be unreachable during maintenance.
    ///
    /// # Errors
    ///
    /// Returns [`AlbionError::Aborted`] or [`AlbionError::Transport`]; never
    /// [`AlbionError::Http`].
    pub async fn execute_status(&self, url: &str, options: &FetchOptions) -> Result<ServerStatus> {
        let fetch = async {
            let response = self.send(url).await?;
            let status = response.status();
            if !status.is_success() {
                warn!(url, status = status.as_u16(), "status host answered with an error");
                return Ok(ServerStatus::unreachable(status.as_u16()));
            }
            let body = read_body(url, response).await?;
            parse_json(url, &body)
        };
        self.abortable(url, options, fetch).await
    }

    async fn send(&self, url: &str) -> Result<Response> {
        debug!(url, "sending request");
        self.http
            .get(url)
            .send()
            .await
            .map_err(|e| AlbionError::transport(url, describe(&e), e))
    }

    /// Races `fetch` against the call's deadline and cancel token.
    ///
    /// Whichever finishes first wins; the losers are dropped with the select,
    /// which releases the timer and the token subscription on every path.
    async fn abortable<T>(
        &self,
        url: &str,
        options: &FetchOptions,
        fetch: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        let timeout = options.timeout.or(self.config.default_timeout);
        let deadline = async {
            match timeout {
                Some(after) => {
                    tokio::time::sleep(after).await;
                    AbortReason::TimedOut(after)
                }
                None => std::future::pending().await,
            }
        };
        let cancelled = async {
            match &options.cancel {
                Some(token) => {
                    token.cancelled().await;
                    AbortReason::Cancelled
                }
                None => std::future::pending().await,
            }
        };

        let started = Instant::now();
        // Cancellation is polled first so a token that already fired never
        // lets the request go out.
        let result = tokio::select! {
            biased;
            reason = cancelled => Err(AlbionError::aborted(url, reason)),
            reason = deadline => Err(AlbionError::aborted(url, reason)),
            result = fetch => result,
        };

        let elapsed_ms = millis(started.elapsed());
        match &result {
            Ok(_) => debug!(url, elapsed_ms, "request completed"),
            Err(AlbionError::Aborted { reason, .. }) => {
                debug!(url, elapsed_ms, %reason, "request aborted");
            }
            Err(e) => debug!(url, elapsed_ms, error = %e, "request failed"),
        }
        result
    }
}

/// Builds an HTTP error, capturing the body when it can be read.
async fn http_error(url: &str, response: Response) -> AlbionError {
    let status = response.status();
    // A failed body read must not hide the status itself.
    let body = response
        .text()
        .await
        .ok()
        .filter(|body| !body.trim().is_empty());
    warn!(url, status = status.as_u16(), "upstream answered with an error");

    AlbionError::Http {
        status_code: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        url: url.to_string(),
        body,
    }
}

async fn read_body(url: &str, response: Response) -> Result<String> {
    response
        .text()
        .await
        .map_err(|e| AlbionError::transport(url, "failed to read response body", e))
}

/// Decodes a JSON body, tolerating the byte-order mark some hosts prepend.
fn parse_json<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
    let body = body.strip_prefix('\u{feff}').unwrap_or(body);
    serde_json::from_str(body)
        .map_err(|e| AlbionError::transport(url, format!("invalid JSON body: {e}"), e))
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

fn describe(error: &reqwest::Error) -> &'static str {
    if error.is_connect() {
        "connection failed"
    } else if error.is_timeout() {
        "connection timed out"
    } else if error.is_builder() {
        "invalid request"
    } else {
        "request failed"
    }
}
