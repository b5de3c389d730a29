//! Keyword-driven concept extraction

use serde::Serialize;
use tracing::info;

use super::{Analyzer, CallTree, QueryStatus};
use crate::graph::model::{Symbol, SymbolId, SymbolKind};

/// Lines shown before a match's first line in its snippet
const SNIPPET_LEAD: u32 = 2;
/// Lines shown after a match's first line in its snippet
const SNIPPET_TRAIL: u32 = 10;

/// An occurrence related to a keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConceptMatch {
    pub symbol: SymbolId,
    pub kind: SymbolKind,
    pub matched_name: bool,
    pub matched_body: bool,
    pub snippet: String,
}

/// Matches for one keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordGroup {
    pub keyword: String,
    pub matches: Vec<ConceptMatch>,
}

/// Everything related to a theme: grouped matches plus one shallow tree per
/// distinct matched occurrence
#[derive(Debug, Clone, Serialize)]
pub struct ConceptResult {
    pub concept: String,
    pub keywords: Vec<String>,
    pub groups: Vec<KeywordGroup>,
    pub trees: Vec<CallTree>,
    /// Distinct occurrences across all groups
    pub total_symbols: usize,
    pub status: QueryStatus,
}

impl Analyzer<'_> {
    /// Collect occurrences whose name or body mentions any keyword
    /// (case-insensitive). A symbol may appear under several keywords.
    #[must_use]
    pub fn concept<S: AsRef<str>>(&self, label: &str, keywords: &[S]) -> ConceptResult {
        let keywords: Vec<String> = keywords
            .iter()
            .map(|k| k.as_ref().trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        let mut distinct: Vec<usize> = Vec::new();
        let mut groups = Vec::with_capacity(keywords.len());
        for keyword in &keywords {
            let needle = keyword.to_lowercase();
            let mut matches = Vec::new();
            for (index, symbol) in self.table.symbols().iter().enumerate() {
                let matched_name = symbol.name.to_lowercase().contains(&needle);
                let matched_body = symbol.body.to_lowercase().contains(&needle);
                if !matched_name && !matched_body {
                    continue;
                }
                if !distinct.contains(&index) {
                    distinct.push(index);
                }
                matches.push(ConceptMatch {
                    symbol: symbol.id(),
                    kind: symbol.kind,
                    matched_name,
                    matched_body,
                    snippet: self.snippet(symbol),
                });
            }
            groups.push(KeywordGroup {
                keyword: keyword.clone(),
                matches,
            });
        }

        let depth = self.limits.concept_tree_depth();
        let trees: Vec<CallTree> = distinct.iter().map(|&i| self.tree_at(i, depth)).collect();

        info!(
            "concept '{}' ({} keywords): {} symbols",
            label,
            keywords.len(),
            distinct.len()
        );
        let status = if distinct.is_empty() {
            QueryStatus::NoMatches {
                query: keywords.join(", "),
            }
        } else {
            QueryStatus::Found
        };
        ConceptResult {
            concept: label.to_string(),
            keywords,
            groups,
            trees,
            total_symbols: distinct.len(),
            status,
        }
    }

    /// A few lines around the start of a symbol, capped at `snippet_length` chars
    fn snippet(&self, symbol: &Symbol) -> String {
        let text = match self.table.source(&symbol.file) {
            Some(source) => source.lines(
                symbol.start_line.saturating_sub(SNIPPET_LEAD).max(1),
                symbol.start_line + SNIPPET_TRAIL,
            ),
            None => symbol.body.as_str(),
        };
        text.chars().take(self.limits.snippet_length).collect()
    }
}
