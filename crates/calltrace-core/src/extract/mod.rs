//! Extract module: Pattern-based symbol extraction
//!
//! Each rule family implements [`SymbolExtractor`]. Rules run on the code view
//! of a [`SourceFile`] (comments and strings blanked) and report definitions
//! with their line ranges. A grammar-aware parser can replace any family by
//! implementing the same trait; the analyzer and renderer only see symbols.

mod blocks;
mod c_family;
mod generic;
mod mask;
mod python;
mod source;

use std::collections::HashSet;

pub use blocks::{
    brace_block_end, find_body_open, indent_width, indented_block_end, match_brace, match_paren,
    BlockEnd,
};
pub use c_family::CFamilyExtractor;
pub use generic::GenericExtractor;
pub use mask::code_view;
pub use python::PythonExtractor;
pub use source::{ReadError, SourceFile};

use crate::graph::model::{Symbol, SymbolKind};
use crate::scanner::RuleFamily;

/// Symbols and imports found in one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub symbols: Vec<Symbol>,
    /// Raw include/import targets, in file order
    pub includes: Vec<String>,
    /// Symbols whose block never closed and were extended to end of file
    pub unterminated: usize,
}

impl Extraction {
    /// Record a symbol unless the same name already starts on that line
    pub fn push(&mut self, symbol: Symbol) {
        let duplicate = self
            .symbols
            .iter()
            .any(|s| s.start_line == symbol.start_line && s.name == symbol.name);
        if !duplicate {
            self.symbols.push(symbol);
        }
    }

    /// Order symbols by position and drop repeated includes
    #[must_use]
    pub fn finish(mut self) -> Self {
        self.symbols
            .sort_by(|a, b| (a.start_line, &a.name).cmp(&(b.start_line, &b.name)));
        let mut seen = HashSet::new();
        self.includes.retain(|include| seen.insert(include.clone()));
        self
    }
}

/// Per-language extraction rules
pub trait SymbolExtractor: Send + Sync {
    /// Extract symbol definitions and includes from a source file
    fn extract(&self, source: &SourceFile) -> Extraction;
}

static C_FAMILY: CFamilyExtractor = CFamilyExtractor;
static PYTHON: PythonExtractor = PythonExtractor;
static GENERIC: GenericExtractor = GenericExtractor;

/// Extractor for a rule family
#[must_use]
pub fn extractor_for(family: RuleFamily) -> &'static dyn SymbolExtractor {
    match family {
        RuleFamily::CFamily => &C_FAMILY,
        RuleFamily::Python => &PYTHON,
        RuleFamily::Generic => &GENERIC,
    }
}

/// Extract a source file with the rules for its language
#[must_use]
pub fn extract(source: &SourceFile) -> Extraction {
    extractor_for(source.language.family()).extract(source)
}

/// Build a symbol from the definition spanning `start..header_end` and
/// ending on `end_line`.
pub(crate) fn symbol_at(
    source: &SourceFile,
    name: &str,
    kind: SymbolKind,
    start: usize,
    header_end: usize,
    end_line: u32,
) -> Symbol {
    let text = source.text();
    let start = start
        + text[start..]
            .bytes()
            .take_while(u8::is_ascii_whitespace)
            .count();
    let header_end = header_end.clamp(start, text.len());
    let start_line = source.line_at(start);
    let end_line = end_line.max(start_line);
    let signature = text[start..header_end]
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    Symbol {
        name: name.to_string(),
        kind,
        file: source.key.clone(),
        start_line,
        end_line,
        signature,
        body: source.lines(start_line, end_line).to_string(),
    }
}

/// Words that look like a definition name to the patterns but never are
pub(crate) fn is_reserved(name: &str) -> bool {
    matches!(
        name,
        "if" | "else"
            | "for"
            | "while"
            | "do"
            | "switch"
            | "case"
            | "return"
            | "sizeof"
            | "typeof"
            | "catch"
            | "try"
            | "new"
            | "delete"
            | "throw"
            | "function"
            | "func"
            | "fn"
            | "with"
            | "elif"
            | "except"
            | "match"
            | "loop"
            | "synchronized"
            | "super"
            | "this"
            | "await"
            | "yield"
            | "defer"
            | "go"
            | "select"
            | "assert"
    )
}

#[cfg(test)]
mod tests;
