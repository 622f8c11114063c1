//! Server status command.

use anyhow::{Context, Result};

use super::Session;
use crate::display;

/// Probe the region's status host and print the result.
///
/// Maintenance windows show up as an `offline` status, not as an error.
pub(crate) async fn status(session: &Session) -> Result<()> {
    let status = session
        .client()
        .server_status()
        .options(session.options())
        .await
        .context("Failed to reach the status host")?;

    if !status.is_online() {
        tracing::warn!(%status, "server is not online");
    }
    display::print_json(&status)
}
