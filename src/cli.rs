use crate::provider::everything::{DEFAULT_LIMIT, DEFAULT_TOOL};
use clap::Parser;

/// Keyword file search that keeps only the latest file of every document series.
#[derive(Debug, Parser)]
#[command(name = "freshest", version, about)]
pub struct Cli {
    /// Run one query and exit instead of starting the interactive prompt.
    pub keyword: Option<String>,

    /// Emit results as JSON. Single-query mode only.
    #[arg(long, requires = "keyword")]
    pub json: bool,

    /// Maximum number of candidates requested from the search tool.
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Search tool binary to invoke.
    #[arg(long, default_value = DEFAULT_TOOL)]
    pub tool: String,
}
