mod tests_class;
mod tests_dependency;
mod tests_sequence;

use crate::extract::SourceFile;
use crate::graph::table::SymbolTable;
use crate::scanner::Language;

/// `a` calls `b`, `b` calls `c`
pub(super) fn chain_table() -> SymbolTable {
    SymbolTable::from_sources([SourceFile::new(
        "chain.py",
        Language::Python,
        "def a():\n    return b()\n\ndef b():\n    return c()\n\ndef c():\n    return 0\n",
    )])
}

pub(super) fn c_table(files: &[(&str, &str)]) -> SymbolTable {
    SymbolTable::from_sources(
        files
            .iter()
            .map(|(key, text)| SourceFile::new(*key, Language::C, *text)),
    )
}

pub(super) const ROOT: &str = "fill:#f9f,stroke:#333,stroke-width:4px";
