//! Provider — the external search index and filesystem boundary.
//!
//! Turns a keyword into validated `FileRecord`s: the Everything CLI supplies
//! candidate paths, the probe stats them and drops anything stale.

pub mod everything;
pub mod probe;

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// A keyword search against an external index.
///
/// `Err` means the provider itself was unavailable; "no matches" is
/// `Ok(vec![])`. Callers that must not die on provider trouble (the
/// interactive loop) report the error and carry on.
pub trait SearchProvider {
    fn search(&self, keyword: &str) -> Result<Vec<PathBuf>, ProviderError>;
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("search tool `{0}` not found on PATH")]
    ToolMissing(String),

    #[error("failed to run search tool: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("search tool exited with {status}: {stderr}")]
    NonZeroExit { status: ExitStatus, stderr: String },
}
