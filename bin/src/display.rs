//! Output formatting for the albion CLI.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

/// Writes `value` to stdout as pretty-printed JSON.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("Failed to serialize response")?;
    writeln!(stdout)?;
    Ok(())
}
