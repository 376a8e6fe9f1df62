use super::{ProviderError, SearchProvider};
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Default name of the Everything command-line client.
pub const DEFAULT_TOOL: &str = "es";

/// Default cap on candidates requested per query.
pub const DEFAULT_LIMIT: usize = 100;

/// Search provider backed by the Everything CLI (`es`).
///
/// Queries ask for paths only (`-s`), capped at `limit` hits, pre-sorted by
/// modification date (`-sort dm`); one absolute path per output line.
pub struct EverythingProvider {
    tool: String,
    limit: usize,
}

impl EverythingProvider {
    pub fn new(tool: impl Into<String>, limit: usize) -> Self {
        Self { tool: tool.into(), limit }
    }
}

impl SearchProvider for EverythingProvider {
    fn search(&self, keyword: &str) -> Result<Vec<PathBuf>, ProviderError> {
        let program = which::which(&self.tool)
            .map_err(|_| ProviderError::ToolMissing(self.tool.clone()))?;

        let output = Command::new(program)
            .arg("-s")
            .args(["-n", &self.limit.to_string()])
            .args(["-sort", "dm"])
            .arg(keyword)
            .output()
            .map_err(ProviderError::Spawn)?;

        if !output.status.success() {
            return Err(ProviderError::NonZeroExit {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let paths: Vec<PathBuf> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect();
        debug!(keyword, candidates = paths.len(), "search tool returned");
        Ok(paths)
    }
}
