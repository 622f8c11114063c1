//! Typed async client for the Albion Online gameinfo API.
//!
//! This is a facade crate over the albion workspace crates:
//!
//! - [`AlbionClient`] - One method per gameinfo endpoint
//! - [`Call`] / [`StatusCall`] - Awaitable requests with per-call timeout and cancellation
//! - The record and parameter types from `albion-types`
//! - Icon URL builders from `albion-render` (feature `render`)
//!
//! # Quick Start
//!
//! ```ignore
//! use albion_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AlbionClient::new(Region::Americas)?;
//!
//!     println!("{}", client.server_status().await?);
//!
//!     let events = client
//!         .recent_events(Some(PaginationParams::new(10, 0)))
//!         .timeout(Duration::from_secs(10))
//!         .await?;
//!     for event in &events {
//!         println!("{} killed {}", event.killer.name, event.victim.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/albion-sdk/albion-sdk/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod call;
mod client;

pub use call::{Call, StatusCall};
pub use client::AlbionClient;

pub use albion_types::*;

pub use albion_fetch::{CancelToken, ClientConfig, Executor, FetchOptions, url::build_url};

#[cfg(feature = "render")]
pub use albion_render as render;

/// Prelude module for convenient imports.
///
/// ```
/// use albion_sdk::prelude::*;
/// ```
pub mod prelude {
    pub use std::time::Duration;

    pub use albion_types::{
        AlbionError, BattleParams, BattleSort, EndpointTarget, KillRange, PaginationParams,
        Region, Result, ServerStatus, StatusKind, TopKillsParams,
    };

    pub use albion_fetch::{CancelToken, ClientConfig, FetchOptions};

    pub use crate::{AlbionClient, Call, StatusCall};

    #[cfg(feature = "render")]
    pub use albion_render::{
        GuildLogoParams, IconParams, IconSize, ItemIconParams, Quality, guild_logo_url,
        item_icon_url,
    };
}
