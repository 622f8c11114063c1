//! Awaitable request values returned by the client.

use std::future::IntoFuture;
use std::marker::PhantomData;
use std::time::Duration;

use albion_fetch::{CancelToken, Executor, FetchOptions};
use albion_types::{Result, ServerStatus};
use futures::future::BoxFuture;
use serde::de::DeserializeOwned;

/// A resolved gameinfo request.
///
/// The URL is fixed when the call is created; nothing is sent until the
/// call is awaited.
///
/// ```ignore
/// let kills = client
///     .player_latest_kills("abc")
///     .timeout(Duration::from_secs(5))
///     .await?;
/// ```
#[must_use = "calls do nothing unless awaited"]
pub struct Call<'a, T> {
    executor: &'a Executor,
    url: String,
    options: FetchOptions,
    _output: PhantomData<fn() -> T>,
}

impl<'a, T> Call<'a, T> {
    pub(crate) const fn new(executor: &'a Executor, url: String) -> Self {
        Self {
            executor,
            url,
            options: FetchOptions::new(),
            _output: PhantomData,
        }
    }

    /// Returns the fully resolved request URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Aborts the call if it has not completed after `timeout`.
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = Some(timeout);
        self
    }

    /// Aborts the call when `token` fires.
    pub fn cancel_on(mut self, token: CancelToken) -> Self {
        self.options.cancel = Some(token);
        self
    }

    /// Replaces the call's options wholesale.
    pub fn options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }
}

impl<T> std::fmt::Debug for Call<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Call")
            .field("url", &self.url)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<'a, T> IntoFuture for Call<'a, T>
where
    T: DeserializeOwned + Send + 'a,
{
    type Output = Result<T>;
    type IntoFuture = BoxFuture<'a, Result<T>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move { self.executor.execute_json(&self.url, &self.options).await })
    }
}

/// A server status probe.
///
/// Resolves to [`ServerStatus::Offline`] instead of an error when the status
/// host answers with a non-2xx code.
#[must_use = "calls do nothing unless awaited"]
#[derive(Debug)]
pub struct StatusCall<'a> {
    executor: &'a Executor,
    url: String,
    options: FetchOptions,
}

impl<'a> StatusCall<'a> {
    pub(crate) const fn new(executor: &'a Executor, url: String) -> Self {
        Self {
            executor,
            url,
            options: FetchOptions::new(),
        }
    }

    /// Returns the status host URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Aborts the probe if it has not completed after `timeout`.
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = Some(timeout);
        self
    }

    /// Aborts the probe when `token` fires.
    pub fn cancel_on(mut self, token: CancelToken) -> Self {
        self.options.cancel = Some(token);
        self
    }

    /// Replaces the probe's options wholesale.
    pub fn options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }
}

impl<'a> IntoFuture for StatusCall<'a> {
    type Output = Result<ServerStatus>;
    type IntoFuture = BoxFuture<'a, Result<ServerStatus>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move { self.executor.execute_status(&self.url, &self.options).await })
    }
}
