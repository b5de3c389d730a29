//! Indexing and analysis configuration

use serde::{Deserialize, Serialize};

/// Environment variable overriding the scanned extensions (comma separated)
pub const EXTENSIONS_ENV: &str = "CODE_EXTENSIONS";

/// Environment variable appending ignore patterns (comma separated)
pub const IGNORE_ENV: &str = "CALLTRACE_IGNORE";

/// Extensions scanned when no filter is given
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "py", "c", "h", "cpp", "hpp", "cc", "java", "js", "ts", "go", "rs",
];

/// File and directory names skipped at any depth
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    ".git",
    "__pycache__",
    "node_modules",
    ".venv",
    "venv",
    "*.pyc",
    "*.pyo",
    "*.so",
    "*.o",
    "*.a",
    "*.exe",
    ".DS_Store",
    "Thumbs.db",
    ".idea",
    ".vscode",
    "dist",
    "build",
    "target",
    "*.egg-info",
];

/// Normalize an extension: trimmed, lowercase, no leading dot
#[must_use]
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Configuration for a repository scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Normalized extensions (no leading dot)
    pub extensions: Vec<String>,
    /// Glob patterns matched against file and directory names
    pub ignore_patterns: Vec<String>,
    /// Honour `.gitignore` files inside git repositories
    pub respect_gitignore: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
            ignore_patterns: DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
            respect_gitignore: true,
        }
    }
}

impl IndexConfig {
    /// Create a configuration with the default extensions and ignore patterns
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `CODE_EXTENSIONS` and extended by `CALLTRACE_IGNORE`
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(EXTENSIONS_ENV) {
            let extensions: Vec<&str> = split_list(&value).collect();
            if !extensions.is_empty() {
                config = config.with_extensions(extensions);
            }
        }
        if let Ok(value) = std::env::var(IGNORE_ENV) {
            config = config.with_ignore_patterns(split_list(&value));
        }
        config
    }

    /// Replace the extension filter; entries may carry a leading dot
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for ext in extensions {
            let ext = normalize_extension(ext.as_ref());
            if !ext.is_empty() && !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }
        self.extensions = normalized;
        self
    }

    /// Append ignore patterns to the defaults
    #[must_use]
    pub fn with_ignore_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Toggle `.gitignore` handling
    #[must_use]
    pub fn with_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }

    /// Whether files with this extension are scanned
    #[must_use]
    pub fn accepts_extension(&self, ext: &str) -> bool {
        let ext = normalize_extension(ext);
        self.extensions.iter().any(|e| *e == ext)
    }
}

/// Bounds applied to analyzer queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisLimits {
    /// Depth used when a caller does not pick one
    pub default_depth: usize,
    /// Ceiling depth requests are clamped to
    pub max_depth: usize,
    /// Ceiling hop count for path search
    pub max_hops: usize,
    /// Depth of the per-match trees in concept extraction (1 or 2)
    pub concept_depth: usize,
    /// Maximum number of paths reported by one search
    pub max_paths: usize,
    /// Partial paths a search may expand before giving up
    pub max_expansions: usize,
    /// Nodes a single call tree may hold
    pub max_tree_nodes: usize,
    /// Characters kept in concept snippets
    pub snippet_length: usize,
}

impl Default for AnalysisLimits {
    fn default() -> Self {
        Self {
            default_depth: 5,
            max_depth: 10,
            max_hops: 10,
            concept_depth: 2,
            max_paths: 100,
            max_expansions: 100_000,
            max_tree_nodes: 2_000,
            snippet_length: 500,
        }
    }
}

impl AnalysisLimits {
    /// Set the depth ceiling
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    /// Set the hop ceiling
    #[must_use]
    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops.max(1);
        self
    }

    /// Set the path cap
    #[must_use]
    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = max_paths.max(1);
        self
    }

    /// Set the per-tree node budget
    #[must_use]
    pub fn with_max_tree_nodes(mut self, max_tree_nodes: usize) -> Self {
        self.max_tree_nodes = max_tree_nodes.max(1);
        self
    }

    /// Clamp a requested depth into `1..=max_depth`
    #[must_use]
    pub fn clamp_depth(&self, depth: usize) -> usize {
        depth.clamp(1, self.max_depth.max(1))
    }

    /// Clamp a requested hop count into `1..=max_hops`
    #[must_use]
    pub fn clamp_hops(&self, hops: usize) -> usize {
        hops.clamp(1, self.max_hops.max(1))
    }

    /// Concept tree depth, always 1 or 2
    #[must_use]
    pub fn concept_tree_depth(&self) -> usize {
        self.concept_depth.clamp(1, 2)
    }
}

#[cfg(test)]
mod tests;
