//! Keyword lookup over symbol names

use serde::Serialize;
use tracing::info;

use super::{Analyzer, QueryStatus};
use crate::graph::model::{Symbol, SymbolKind};

/// Occurrences whose name contains a keyword
#[derive(Debug, Clone, Serialize)]
pub struct LocateResult {
    pub keyword: String,
    /// Ordered by file, then start line
    pub matches: Vec<Symbol>,
    pub status: QueryStatus,
}

impl Analyzer<'_> {
    /// Case-insensitive substring search over symbol names
    #[must_use]
    pub fn locate(&self, keyword: &str) -> LocateResult {
        self.locate_kind(keyword, None)
    }

    /// [`Analyzer::locate`] restricted to one kind of symbol
    #[must_use]
    pub fn locate_kind(&self, keyword: &str, kind: Option<SymbolKind>) -> LocateResult {
        let needle = keyword.trim().to_lowercase();
        let matches: Vec<Symbol> = if needle.is_empty() {
            Vec::new()
        } else {
            self.table
                .symbols()
                .iter()
                .filter(|s| kind.is_none_or(|k| s.kind == k))
                .filter(|s| s.name.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        };

        info!("locate '{}': {} matches", keyword, matches.len());
        let status = if matches.is_empty() {
            QueryStatus::NoMatches {
                query: keyword.to_string(),
            }
        } else {
            QueryStatus::Found
        };
        LocateResult {
            keyword: keyword.to_string(),
            matches,
            status,
        }
    }
}
