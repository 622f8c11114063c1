//! Request execution for the Albion Online gameinfo API client.
//!
//! This crate provides the request pipeline every endpoint goes through:
//!
//! - [`url::build_url`] - Joins base URL, path and query parameters
//! - [`Executor`] - HTTP GET with timeout/cancellation racing and error normalization
//! - [`FetchOptions`] / [`CancelToken`] - Per-call deadline and cancellation

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/albion-sdk/albion-sdk/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cancel;
mod client;
pub mod url;

pub use cancel::{CancelToken, FetchOptions};
pub use client::{ClientConfig, Executor};
