//! Scan manifest: what a scan looked at and what it found

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A file the indexer had to skip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexFailure {
    /// Repository-relative key, or the path the walker reported
    pub file: String,
    pub reason: String,
}

/// Summary of one scan
#[derive(Debug, Clone, Serialize)]
pub struct ScanManifest {
    /// Canonical root that was scanned
    pub root: PathBuf,
    /// Files that passed the extension and ignore filters
    pub files_considered: usize,
    /// Files read and extracted successfully
    pub files_indexed: usize,
    /// Indexed files per extension, keyed with a leading dot (`.py`)
    pub per_extension: BTreeMap<String, usize>,
    pub symbol_count: usize,
    pub function_count: usize,
    pub struct_count: usize,
    /// Symbols whose block never closed before end of file
    pub unterminated: usize,
    pub error_count: usize,
    pub errors: Vec<IndexFailure>,
    pub scanned_at: DateTime<Utc>,
}

impl ScanManifest {
    /// Start a manifest for a root with the current time
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files_considered: 0,
            files_indexed: 0,
            per_extension: BTreeMap::new(),
            symbol_count: 0,
            function_count: 0,
            struct_count: 0,
            unterminated: 0,
            error_count: 0,
            errors: Vec::new(),
            scanned_at: Utc::now(),
        }
    }

    /// Count a successfully indexed file
    pub fn record_indexed(&mut self, extension: &str) {
        self.files_indexed += 1;
        *self
            .per_extension
            .entry(format!(".{extension}"))
            .or_default() += 1;
    }

    /// Count a skipped file
    pub fn record_failure(&mut self, file: impl Into<String>, reason: impl Into<String>) {
        self.error_count += 1;
        self.errors.push(IndexFailure {
            file: file.into(),
            reason: reason.into(),
        });
    }

    /// True when no file had to be skipped
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.error_count == 0
    }
}
