//! Scan command: index a repository and report what was found

use std::fmt::Write;

use anyhow::Result;
use calltrace_core::ScanManifest;

use super::load;
use crate::types::RepoArgs;

/// Scan `repo` and format its manifest
///
/// # Errors
/// Returns an error if the scan fails or the manifest cannot be serialized.
pub fn run(repo: &RepoArgs) -> Result<String> {
    let outcome = load(repo)?;
    if repo.json {
        return Ok(serde_json::to_string_pretty(&outcome.manifest)?);
    }
    Ok(format_manifest(&outcome.manifest))
}

/// Human-readable manifest summary
#[must_use]
pub fn format_manifest(manifest: &ScanManifest) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Root: {}", manifest.root.display());
    let _ = writeln!(
        out,
        "Files: {} indexed / {} considered",
        manifest.files_indexed, manifest.files_considered
    );
    for (ext, count) in &manifest.per_extension {
        let _ = writeln!(out, "  {ext:<8} {count}");
    }
    let _ = writeln!(
        out,
        "Symbols: {} ({} functions, {} structs/classes)",
        manifest.symbol_count, manifest.function_count, manifest.struct_count
    );
    if manifest.unterminated > 0 {
        let _ = writeln!(out, "Unterminated blocks: {}", manifest.unterminated);
    }
    let _ = write!(out, "Errors: {}", manifest.error_count);
    for failure in &manifest.errors {
        let _ = write!(out, "\n  {}: {}", failure.file, failure.reason);
    }
    out
}
