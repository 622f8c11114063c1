//! CLI command implementations.

pub(crate) mod catalog;
pub(crate) mod guild;
pub(crate) mod icon;
pub(crate) mod killboard;
pub(crate) mod matches;
pub(crate) mod player;
pub(crate) mod status;

use std::time::Duration;

use albion_sdk::prelude::*;
use anyhow::{Context, Result};
use serde::{Serialize, de::DeserializeOwned};

use crate::display;

/// A client plus the options every request of this invocation uses.
pub(crate) struct Session {
    client: AlbionClient,
    options: FetchOptions,
}

impl Session {
    pub(crate) fn new(region: &str, timeout: Option<Duration>, cancel: CancelToken) -> Result<Self> {
        let client = AlbionClient::from_region_name(region)
            .with_context(|| format!("Cannot create a client for region '{region}'"))?;
        let mut options = FetchOptions::new().with_cancel(cancel);
        options.timeout = timeout;
        tracing::debug!(region, api_url = client.target().api_url(), "client ready");
        Ok(Self { client, options })
    }

    pub(crate) const fn client(&self) -> &AlbionClient {
        &self.client
    }

    /// Awaits `call` with the session options and prints the result.
    pub(crate) async fn emit<'a, T>(&self, call: Call<'a, T>) -> Result<()>
    where
        T: DeserializeOwned + Serialize + Send + 'a,
    {
        let value = call
            .options(self.options.clone())
            .await
            .context("Request failed")?;
        display::print_json(&value)
    }

    pub(crate) fn options(&self) -> FetchOptions {
        self.options.clone()
    }
}
