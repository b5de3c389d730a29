//! Class outlines: each struct or class with the functions defined inside it

use serde::Serialize;
use tracing::info;

use super::{Analyzer, QueryStatus};
use crate::graph::model::{Symbol, SymbolId, SymbolKind};

/// One class and the members found within its line range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassOutline {
    pub class: SymbolId,
    /// Functions whose innermost enclosing class is this one, in line order
    pub methods: Vec<SymbolId>,
    /// Innermost class this one is nested in
    pub outer: Option<SymbolId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassesResult {
    pub keyword: String,
    /// Ordered by file, then start line
    pub classes: Vec<ClassOutline>,
    pub status: QueryStatus,
}

impl Analyzer<'_> {
    /// Outline every class whose name contains `keyword` (case-insensitive);
    /// a blank keyword selects all classes
    #[must_use]
    pub fn class_outline(&self, keyword: &str) -> ClassesResult {
        let needle = keyword.trim().to_lowercase();
        let mut classes = Vec::new();

        for file in self.table.files() {
            let symbols: Vec<&Symbol> = self.table.symbols_in_file(file).collect();
            let file_classes: Vec<&Symbol> = symbols
                .iter()
                .copied()
                .filter(|s| s.kind == SymbolKind::StructOrClass)
                .collect();

            for class in &file_classes {
                if !class.name.to_lowercase().contains(&needle) {
                    continue;
                }
                let methods = symbols
                    .iter()
                    .filter(|s| s.kind == SymbolKind::Function)
                    .filter(|s| innermost(&file_classes, s).is_some_and(|c| c.id() == class.id()))
                    .map(|s| s.id())
                    .collect();
                classes.push(ClassOutline {
                    class: class.id(),
                    methods,
                    outer: innermost(&file_classes, class).map(Symbol::id),
                });
            }
        }

        info!("class outline '{}': {} classes", keyword, classes.len());
        let status = if classes.is_empty() {
            QueryStatus::NoMatches {
                query: keyword.to_string(),
            }
        } else {
            QueryStatus::Found
        };
        ClassesResult {
            keyword: keyword.to_string(),
            classes,
            status,
        }
    }
}

/// Closest class whose body strictly contains `symbol`'s header line
fn innermost<'a>(classes: &[&'a Symbol], symbol: &Symbol) -> Option<&'a Symbol> {
    classes
        .iter()
        .copied()
        .filter(|c| c.id() != symbol.id())
        .filter(|c| c.start_line < symbol.start_line && symbol.start_line <= c.end_line)
        .max_by_key(|c| c.start_line)
}
