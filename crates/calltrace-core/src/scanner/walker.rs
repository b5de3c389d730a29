//! File walker: Discovers files in a directory tree

use std::path::{Path, PathBuf};

use ignore::overrides::{Override, OverrideBuilder};
use ignore::WalkBuilder;
use serde::Serialize;
use tracing::{debug, warn};

use super::Language;
use crate::config::{normalize_extension, IndexConfig};

/// A file discovered during scanning
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveredFile {
    /// Absolute path on disk
    pub path: PathBuf,
    /// Path relative to the scan root, `/`-separated
    pub key: String,
    /// Lowercase extension without the leading dot
    pub extension: String,
    pub language: Language,
}

/// An entry the walker could not visit
#[derive(Debug, Clone, Serialize)]
pub struct WalkFailure {
    pub path: String,
    pub reason: String,
}

/// Path of the entry an [`ignore::Error`] is about, if it names one
pub(crate) fn failure_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::Loop { child, .. } => Some(child),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            failure_path(err)
        }
        ignore::Error::Partial(errs) => errs.iter().find_map(failure_path),
        _ => None,
    }
}

/// Files found under a root, sorted by key
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<DiscoveredFile>,
    pub failures: Vec<WalkFailure>,
}

/// Scanner for discovering source files in a directory
#[derive(Debug)]
pub struct Scanner {
    root: PathBuf,
    extensions: Vec<String>,
    ignore_patterns: Vec<String>,
    respect_gitignore: bool,
}

impl Scanner {
    /// Create a new scanner for the given root directory with default settings
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::from_config(root, &IndexConfig::default())
    }

    /// Create a scanner using the extension and ignore settings of `config`
    #[must_use]
    pub fn from_config(root: impl Into<PathBuf>, config: &IndexConfig) -> Self {
        Self {
            root: root.into(),
            extensions: config.extensions.clone(),
            ignore_patterns: config.ignore_patterns.clone(),
            respect_gitignore: config.respect_gitignore,
        }
    }

    /// Filter to only scan specific extensions
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .filter(|ext| !ext.is_empty())
            .collect();
        self
    }

    /// Walk the root and return every file that survives the filters
    #[must_use]
    pub fn scan(&self) -> Discovery {
        let mut discovery = Discovery::default();

        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .overrides(self.build_overrides())
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    let path = failure_path(&e).map_or_else(
                        || self.root.display().to_string(),
                        |path| relative_key(&self.root, path),
                    );
                    discovery.failures.push(WalkFailure {
                        path,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            if let Some(file) = self.discovered(entry.into_path()) {
                discovery.files.push(file);
            }
        }

        discovery.files.sort_by(|a, b| a.key.cmp(&b.key));
        debug!(
            "Discovered {} files under {}",
            discovery.files.len(),
            self.root.display()
        );
        discovery
    }

    /// Get the root directory being scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn discovered(&self, path: PathBuf) -> Option<DiscoveredFile> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(normalize_extension)?;
        if !self.extensions.contains(&extension) {
            return None;
        }
        let language = Language::from_extension(&extension).unwrap_or(Language::Other);
        let key = relative_key(&self.root, &path);
        Some(DiscoveredFile {
            path,
            key,
            extension,
            language,
        })
    }

    /// Ignore patterns become negated override globs so ignored directories are
    /// never descended into.
    fn build_overrides(&self) -> Override {
        let mut builder = OverrideBuilder::new(&self.root);
        for pattern in &self.ignore_patterns {
            if let Err(e) = builder.add(&format!("!{pattern}")) {
                warn!("Ignoring invalid ignore pattern '{}': {}", pattern, e);
            }
        }
        builder.build().unwrap_or_else(|e| {
            warn!("Failed to build ignore overrides: {}", e);
            Override::empty()
        })
    }
}

/// Path of `path` relative to `root` with `/` separators
#[must_use]
pub fn relative_key(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
