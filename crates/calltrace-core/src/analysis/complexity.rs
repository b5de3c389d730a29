//! Heuristic complexity scoring
//!
//! The score counts branching tokens and code lines in a symbol's code view.
//! It is a rough signal for spotting large or branchy symbols, not a
//! cyclomatic complexity computed from a control-flow graph: it cannot tell
//! `else if` chains from nested branches, and counts `and`/`or` in every
//! language.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::Analyzer;
use crate::graph::model::SymbolId;

#[allow(clippy::expect_used)]
mod patterns {
    use super::{Lazy, Regex};

    pub static BRANCH: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\b(?:if|elif|for|while|case|catch|except|and|or)\b|&&|\|\|")
            .expect("Invalid branch regex")
    });

    pub static CALL: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\b([A-Za-z_]\w*)\s*\(").expect("Invalid call site regex")
    });
}

/// Words followed by `(` that are not calls
const NOT_CALLS: &[&str] = &[
    "if", "elif", "for", "while", "switch", "catch", "return", "sizeof", "typeof", "except",
    "with", "and", "or", "not", "in",
];

/// Coarse bucket for a complexity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl ComplexityLevel {
    /// Low up to 5, moderate up to 10, high up to 20, very high above
    #[must_use]
    pub fn from_score(score: usize) -> Self {
        match score {
            0..=5 => Self::Low,
            6..=10 => Self::Moderate,
            11..=20 => Self::High,
            _ => Self::VeryHigh,
        }
    }
}

impl std::fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very high",
        };
        write!(f, "{s}")
    }
}

/// Size and branching counts for one occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexityReport {
    pub symbol: SymbolId,
    pub total_lines: usize,
    /// Lines left with code once comments and blank lines are dropped
    pub code_lines: usize,
    pub branch_points: usize,
    pub call_sites: usize,
    /// `1 + branch_points`
    pub cyclomatic: usize,
    /// `cyclomatic + code_lines / 20`
    pub score: usize,
    pub level: ComplexityLevel,
}

impl Analyzer<'_> {
    /// Score one occurrence; `None` if it is not in the table
    #[must_use]
    pub fn complexity(&self, id: &SymbolId) -> Option<ComplexityReport> {
        let symbol = self.table.get(id)?;
        let code = self
            .table
            .source(&symbol.file)
            .map_or(symbol.body.as_str(), |source| {
                source.code_lines(symbol.start_line, symbol.end_line)
            });
        Some(score(id.clone(), code))
    }
}

/// Score a code view fragment
#[must_use]
pub(crate) fn score(symbol: SymbolId, code: &str) -> ComplexityReport {
    let total_lines = code.lines().count().max(1);
    let code_lines = code.lines().filter(|l| !l.trim().is_empty()).count();
    let branch_points = patterns::BRANCH.find_iter(code).count();
    let call_sites = patterns::CALL
        .captures_iter(code)
        .filter(|cap| !NOT_CALLS.contains(&&cap[1]))
        .count();
    let cyclomatic = 1 + branch_points;
    let score = cyclomatic + code_lines / 20;

    ComplexityReport {
        symbol,
        total_lines,
        code_lines,
        branch_points,
        call_sites,
        cyclomatic,
        score,
        level: ComplexityLevel::from_score(score),
    }
}
