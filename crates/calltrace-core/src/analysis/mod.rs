//! Analysis module: Call graph queries over a symbol table
//!
//! An [`Analyzer`] borrows a finished [`SymbolTable`], discovers the call
//! edges of every symbol once, then answers locate, call tree, path,
//! concept, class outline, code and complexity queries. Queries never mutate
//! the table, so any number of analyzers may share one table across threads.

mod calls;
mod classes;
mod code;
mod complexity;
mod concept;
mod deps;
mod locate;
mod paths;
mod tree;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

pub use classes::{ClassOutline, ClassesResult};
pub use code::{CodeExtract, CodeResult};
pub use complexity::{ComplexityLevel, ComplexityReport};
pub use concept::{ConceptMatch, ConceptResult, KeywordGroup};
pub use deps::{FileDependencies, FileEdge};
pub use locate::LocateResult;
pub use paths::{PathResult, PathStep};
pub use tree::{CallTree, CallTreeNode, CallTreeResult};

use crate::config::AnalysisLimits;
use crate::graph::model::{CallEdge, Symbol};
use crate::graph::table::SymbolTable;

/// Why a query returned what it did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryStatus {
    Found,
    UnknownSymbol { name: String },
    NoPath { source: String, target: String },
    NoMatches { query: String },
}

impl QueryStatus {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found)
    }
}

impl std::fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Found => write!(f, "found"),
            Self::UnknownSymbol { name } => write!(f, "unknown symbol '{name}'"),
            Self::NoPath { source, target } => {
                write!(f, "no call path from '{source}' to '{target}'")
            }
            Self::NoMatches { query } => write!(f, "no matches for '{query}'"),
        }
    }
}

/// Query engine over one symbol table
#[derive(Debug)]
pub struct Analyzer<'t> {
    table: &'t SymbolTable,
    limits: AnalysisLimits,
    /// Outgoing edges per symbol, indexed like `table.symbols()`
    edges: Vec<Vec<CallEdge>>,
}

impl<'t> Analyzer<'t> {
    /// Discover the call edges of every symbol in `table`
    #[must_use]
    pub fn new(table: &'t SymbolTable, limits: AnalysisLimits) -> Self {
        let edges: Vec<Vec<CallEdge>> = table
            .symbols()
            .par_iter()
            .map(|symbol| calls::discover(table, symbol))
            .collect();
        debug!(
            "Discovered {} call edges across {} symbols",
            edges.iter().map(Vec::len).sum::<usize>(),
            table.len()
        );
        Self {
            table,
            limits,
            edges,
        }
    }

    #[must_use]
    pub fn table(&self) -> &'t SymbolTable {
        self.table
    }

    #[must_use]
    pub fn limits(&self) -> &AnalysisLimits {
        &self.limits
    }

    /// Outgoing edges of one occurrence
    #[must_use]
    pub fn edges_of(&self, symbol: &Symbol) -> &[CallEdge] {
        self.table
            .index_of(&symbol.id())
            .map_or(&[], |i| self.edges[i].as_slice())
    }

    /// Every edge whose callee is `name`, in caller order
    #[must_use]
    pub fn callers_of(&self, name: &str) -> Vec<&CallEdge> {
        self.edges
            .iter()
            .flatten()
            .filter(|edge| edge.callee == name)
            .collect()
    }

    /// Occurrences a call from `caller` to `callee` may reach: those in the
    /// caller's file when any exist, otherwise every occurrence.
    pub(crate) fn resolve(&self, caller: usize, callee: &str) -> Vec<usize> {
        let candidates = self.table.occurrence_indices(callee);
        let file = &self.table.symbol_at(caller).file;
        let local: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&i| self.table.symbol_at(i).file == *file)
            .collect();
        if local.is_empty() {
            candidates.to_vec()
        } else {
            local
        }
    }

    pub(crate) fn edges_at(&self, index: usize) -> &[CallEdge] {
        &self.edges[index]
    }
}

#[cfg(test)]
mod tests;
