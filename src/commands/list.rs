//! Command: show the embedded payloads.
use anyhow::{Context as _, Result};
use serde::Serialize;
use std::fmt::Write as _;

use crate::cli::ListOpts;
use crate::config::payloads::{PAYLOADS, Payload};

/// Serializable description of one payload.
#[derive(Debug, Serialize)]
pub struct PayloadInfo {
    /// File name.
    pub name: &'static str,
    /// Destination relative to the profile directory.
    pub path: String,
    /// What the file configures.
    pub kind: String,
    /// Size in bytes.
    pub size: usize,
    /// Lowercase hex SHA-256 of the content.
    pub sha256: String,
}

impl From<&Payload> for PayloadInfo {
    fn from(p: &Payload) -> Self {
        Self {
            name: p.name,
            path: p.relative_display(),
            kind: p.kind.to_string(),
            size: p.len(),
            sha256: p.sha256(),
        }
    }
}

/// Render the payload list as a table or as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(json: bool) -> Result<String> {
    let infos: Vec<PayloadInfo> = PAYLOADS.iter().map(PayloadInfo::from).collect();
    if json {
        return serde_json::to_string_pretty(&infos).context("serializing payload list");
    }

    let width = infos.iter().map(|i| i.path.len()).max().unwrap_or_default();
    let mut out = String::new();
    for info in &infos {
        let short = info.sha256.get(..12).unwrap_or(&info.sha256);
        // writeln! to a String is infallible
        writeln!(
            out,
            "{:<width$}  {:>6}  {short}  {}",
            info.path, info.size, info.kind
        )
        .unwrap_or(());
    }
    Ok(out)
}

/// Run the list command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
#[allow(clippy::print_stdout)]
pub fn run(opts: &ListOpts) -> Result<()> {
    print!("{}", render(opts.json)?);
    Ok(())
}
