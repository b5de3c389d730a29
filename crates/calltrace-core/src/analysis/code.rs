//! Verbatim source extraction

use serde::Serialize;

use super::{Analyzer, QueryStatus};
use crate::graph::model::{Symbol, SymbolId, SymbolKind};

/// Source text of one occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeExtract {
    pub symbol: SymbolId,
    pub kind: SymbolKind,
    pub start_line: u32,
    pub end_line: u32,
    pub code: String,
}

/// Source text of every occurrence of a name
#[derive(Debug, Clone, Serialize)]
pub struct CodeResult {
    pub name: String,
    pub extracts: Vec<CodeExtract>,
    pub status: QueryStatus,
}

impl Analyzer<'_> {
    /// Text of one occurrence, read from the stored source
    #[must_use]
    pub fn extract_code(&self, id: &SymbolId) -> Option<CodeExtract> {
        self.table.get(id).map(|symbol| self.code_of(symbol))
    }

    /// Text of every occurrence of `name`, in file then line order
    #[must_use]
    pub fn extract_code_by_name(&self, name: &str) -> CodeResult {
        let extracts: Vec<CodeExtract> = self
            .table
            .occurrences(name)
            .map(|symbol| self.code_of(symbol))
            .collect();
        let status = if extracts.is_empty() {
            QueryStatus::UnknownSymbol {
                name: name.to_string(),
            }
        } else {
            QueryStatus::Found
        };
        CodeResult {
            name: name.to_string(),
            extracts,
            status,
        }
    }

    fn code_of(&self, symbol: &Symbol) -> CodeExtract {
        let code = self
            .table
            .source(&symbol.file)
            .map_or(symbol.body.as_str(), |source| {
                source.lines(symbol.start_line, symbol.end_line)
            });
        CodeExtract {
            symbol: symbol.id(),
            kind: symbol.kind,
            start_line: symbol.start_line,
            end_line: symbol.end_line,
            code: code.to_string(),
        }
    }
}
