//! File-level dependencies derived from call edges

use std::collections::BTreeMap;

use serde::Serialize;

use super::Analyzer;

/// `from` has symbols calling symbols defined in `to`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEdge {
    pub from: String,
    pub to: String,
    /// Caller/callee pairs behind the edge
    pub calls: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FileDependencies {
    /// Every indexed file, in key order
    pub files: Vec<String>,
    /// Sorted by `from`, then `to`
    pub edges: Vec<FileEdge>,
}

impl Analyzer<'_> {
    /// Cross-file call edges, with callees resolved the way call trees
    /// resolve them
    #[must_use]
    pub fn file_dependencies(&self) -> FileDependencies {
        let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
        for (index, symbol) in self.table.symbols().iter().enumerate() {
            for edge in self.edges_at(index) {
                for callee in self.resolve(index, &edge.callee) {
                    let target = &self.table.symbol_at(callee).file;
                    if *target != symbol.file {
                        *counts
                            .entry((symbol.file.as_str(), target.as_str()))
                            .or_default() += 1;
                    }
                }
            }
        }

        FileDependencies {
            files: self.table.files().map(str::to_string).collect(),
            edges: counts
                .into_iter()
                .map(|((from, to), calls)| FileEdge {
                    from: from.to_string(),
                    to: to.to_string(),
                    calls,
                })
                .collect(),
        }
    }
}
