mod cli;
mod provider;
mod repl;
mod series;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use provider::everything::EverythingProvider;
use provider::probe::probe_candidates;
use provider::SearchProvider;
use series::{assemble, RankedResult};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let provider = EverythingProvider::new(&cli.tool, cli.limit);

    match cli.keyword {
        Some(keyword) => run_once(&provider, &keyword, cli.json),
        None => {
            let stdin = io::stdin();
            repl::run(&provider, stdin.lock(), io::stdout())
                .context("interactive session failed")
        }
    }
}

/// Single-query mode: one search, rendered or serialized, then exit.
/// Provider failure is a process error here; only the interactive loop
/// downgrades it to a diagnostic.
fn run_once(provider: &EverythingProvider, keyword: &str, json: bool) -> Result<()> {
    let candidates = provider.search(keyword).context("search provider failed")?;
    let results = assemble(probe_candidates(&candidates));

    if json {
        let rows: Vec<RankedResult> = results
            .iter()
            .enumerate()
            .map(|(idx, record)| RankedResult::from_record(idx + 1, record))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if results.is_empty() {
        println!("No matching files.");
    } else {
        repl::render(&results, &mut io::stdout().lock())?;
    }
    Ok(())
}
