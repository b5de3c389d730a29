//! CLI commands
//!
//! Every command scans its repository, runs one query and prints the result.
//! Nothing is kept between invocations.

pub mod graph;
pub mod query;
pub mod scan;

use anyhow::{Context, Result};
use calltrace_core::ScanOutcome;
use tracing::info;

use crate::types::{Commands, RepoArgs};

/// Dispatch a parsed command and print its output
///
/// # Errors
/// Returns an error if the repository cannot be scanned or the result cannot
/// be serialized.
pub fn run(command: Commands) -> Result<()> {
    let output = match command {
        Commands::Scan { repo } => scan::run(&repo)?,
        Commands::Locate {
            repo,
            keyword,
            kind,
        } => query::locate(&load(&repo)?, &keyword, kind, repo.json)?,
        Commands::Tree {
            repo,
            symbol,
            depth,
            direction,
            sequence,
        } => graph::tree(&load(&repo)?, &symbol, depth, direction, sequence, repo.json)?,
        Commands::Path {
            repo,
            source,
            target,
            max_hops,
            direction,
        } => graph::path(&load(&repo)?, &source, &target, max_hops, direction, repo.json)?,
        Commands::Concept {
            repo,
            label,
            keywords,
            direction,
        } => graph::concept(&load(&repo)?, &label, &keywords, direction, repo.json)?,
        Commands::Code { repo, symbol } => query::code(&load(&repo)?, &symbol, repo.json)?,
        Commands::Complexity { repo, symbol } => {
            query::complexity(&load(&repo)?, &symbol, repo.json)?
        }
        Commands::Classes { repo, keyword } => {
            graph::classes(&load(&repo)?, keyword.as_deref().unwrap_or(""), repo.json)?
        }
        Commands::Deps {
            repo,
            includes,
            direction,
        } => graph::deps(&load(&repo)?, includes, direction, repo.json)?,
    };
    println!("{output}");
    Ok(())
}

/// Scan the repository named on the command line
///
/// # Errors
/// Returns an error if the path does not exist or is not a directory.
pub fn load(repo: &RepoArgs) -> Result<ScanOutcome> {
    let extensions = (!repo.ext.is_empty()).then_some(repo.ext.as_slice());
    let outcome = calltrace_core::scan(&repo.path, extensions)
        .with_context(|| format!("Failed to scan {}", repo.path.display()))?;
    info!(
        "Loaded {} symbols from {} files",
        outcome.manifest.symbol_count, outcome.manifest.files_indexed
    );
    Ok(outcome)
}
