//! Index module: Repository scanning into a symbol table
//!
//! Discovers files with the [`Scanner`], reads and extracts them in parallel,
//! then merges the per-file fragments into one [`SymbolTable`]. Per-file
//! failures are recorded in the [`ScanManifest`]; only an unusable root fails
//! the scan.

mod manifest;

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

pub use manifest::{IndexFailure, ScanManifest};

use crate::config::IndexConfig;
use crate::extract::{ReadError, SourceFile};
use crate::graph::table::{FileFragment, SymbolTable};
use crate::scanner::{DiscoveredFile, Scanner};

/// Errors that fail a whole scan
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Root does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error("Root is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Table and manifest produced by one scan
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub table: SymbolTable,
    pub manifest: ScanManifest,
}

/// Builds symbol tables from directory trees
#[derive(Debug, Clone, Default)]
pub struct Indexer {
    config: IndexConfig,
}

impl Indexer {
    #[must_use]
    pub fn new(config: IndexConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Scan a directory tree
    ///
    /// # Errors
    /// Returns an error if `root` does not exist or is not a directory.
    pub fn scan(&self, root: impl AsRef<Path>) -> Result<ScanOutcome, IndexError> {
        let root = canonical_root(root.as_ref())?;
        info!("Scanning {}", root.display());

        let discovery = Scanner::from_config(&root, &self.config).scan();
        let mut manifest = ScanManifest::new(&root);
        manifest.files_considered = discovery.files.len();
        for failure in discovery.failures {
            manifest.record_failure(failure.path, failure.reason);
        }

        let results: Vec<(&DiscoveredFile, Result<FileFragment, ReadError>)> = discovery
            .files
            .par_iter()
            .map(|file| (file, SourceFile::read(file).map(FileFragment::extract)))
            .collect();

        let mut fragments = Vec::with_capacity(results.len());
        for (file, result) in results {
            match result {
                Ok(fragment) => {
                    debug!("{}: {} symbols", file.key, fragment.symbols.len());
                    if fragment.unterminated > 0 {
                        warn!(
                            "{}: {} unterminated block(s) run to end of file",
                            file.key, fragment.unterminated
                        );
                    }
                    manifest.unterminated += fragment.unterminated;
                    manifest.record_indexed(&file.extension);
                    fragments.push(fragment);
                }
                Err(e) => {
                    warn!("Skipping {}: {}", file.key, e);
                    manifest.record_failure(file.key.clone(), e.to_string());
                }
            }
        }

        let table = SymbolTable::from_fragments(fragments);
        manifest.symbol_count = table.len();
        manifest.function_count = table.function_count();
        manifest.struct_count = table.struct_count();

        info!(
            "Indexed {}/{} files: {} symbols ({} functions, {} structs/classes), {} errors",
            manifest.files_indexed,
            manifest.files_considered,
            manifest.symbol_count,
            manifest.function_count,
            manifest.struct_count,
            manifest.error_count
        );

        Ok(ScanOutcome { table, manifest })
    }
}

/// Scan `root` with the environment configuration, optionally replacing the
/// extension filter.
///
/// # Errors
/// Returns an error if `root` does not exist or is not a directory.
pub fn scan<S: AsRef<str>>(
    root: impl AsRef<Path>,
    extensions: Option<&[S]>,
) -> Result<ScanOutcome, IndexError> {
    let mut config = IndexConfig::from_env();
    if let Some(extensions) = extensions {
        config = config.with_extensions(extensions.iter().map(AsRef::as_ref));
    }
    Indexer::new(config).scan(root)
}

/// Validate and canonicalize a scan root
///
/// # Errors
/// Returns an error if `root` does not exist or is not a directory.
pub fn canonical_root(root: &Path) -> Result<PathBuf, IndexError> {
    if !root.exists() {
        return Err(IndexError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(IndexError::NotADirectory(root.to_path_buf()));
    }
    Ok(root.canonicalize().unwrap_or_else(|_| root.to_path_buf()))
}

#[cfg(test)]
mod tests;
