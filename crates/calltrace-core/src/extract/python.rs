//! Python extraction rules
//!
//! A block starts at a `def`/`class` header and ends at the last non-blank line
//! indented deeper than the header. Headers may span several lines when the
//! parameter list does.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::blocks::{indent_width, indented_block_end, match_paren};
use super::{symbol_at, Extraction, SourceFile, SymbolExtractor};
use crate::graph::model::SymbolKind;

#[allow(clippy::expect_used)]
mod patterns {
    use super::{Lazy, Regex};

    /// `def name(` or `async def name(`
    pub static FUNCTION: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?m)^([ \t]*)(?:async[ \t]+)?def[ \t]+([A-Za-z_]\w*)[ \t]*\(")
            .expect("Invalid Python function regex")
    });

    /// `class Name:` or `class Name(Base):`
    pub static CLASS: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?m)^([ \t]*)class[ \t]+([A-Za-z_]\w*)[ \t]*[(:]")
            .expect("Invalid Python class regex")
    });

    /// `import x` and `from x import y`
    pub static IMPORT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?m)^[ \t]*((?:from[ \t]+[\w\.]+[ \t]+)?import[ \t]+[^\n#]+)")
            .expect("Invalid Python import regex")
    });
}

/// Extracts Python functions, classes and imports
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonExtractor;

impl SymbolExtractor for PythonExtractor {
    fn extract(&self, source: &SourceFile) -> Extraction {
        let mut extraction = Extraction::default();
        extract_blocks(source, &patterns::FUNCTION, SymbolKind::Function, &mut extraction);
        extract_blocks(source, &patterns::CLASS, SymbolKind::StructOrClass, &mut extraction);

        extraction.includes = patterns::IMPORT
            .captures_iter(source.code())
            .filter_map(|cap| cap.get(1))
            .map(|m| source.text()[m.range()].trim().to_string())
            .collect();

        debug!("{}: {} Python symbols", source.key, extraction.symbols.len());
        extraction.finish()
    }
}

fn extract_blocks(
    source: &SourceFile,
    pattern: &Regex,
    kind: SymbolKind,
    extraction: &mut Extraction,
) {
    let code = source.code();
    for cap in pattern.captures_iter(code) {
        let (Some(whole), Some(indent), Some(name)) = (cap.get(0), cap.get(1), cap.get(2)) else {
            continue;
        };
        let Some(colon) = header_colon(code, whole.end() - 1) else {
            extraction.unterminated += 1;
            continue;
        };
        let header_end = source.line_at(colon);
        let end_line = indented_block_end(source, header_end, indent_width(indent.as_str()));
        extraction.push(symbol_at(
            source,
            name.as_str(),
            kind,
            whole.start(),
            colon,
            end_line,
        ));
    }
}

/// Offset of the `:` closing a header whose pattern ended at `last`
/// (either the `(` of a parameter list or the `:` itself).
fn header_colon(code: &str, last: usize) -> Option<usize> {
    let after = match code.as_bytes().get(last) {
        Some(b':') => return Some(last),
        Some(b'(') => match_paren(code, last)? + 1,
        _ => return None,
    };
    let mut depth = 0usize;
    for (offset, byte) in code.as_bytes().iter().enumerate().skip(after) {
        match byte {
            b'(' | b'[' => depth += 1,
            b')' | b']' => depth = depth.saturating_sub(1),
            b':' if depth == 0 => return Some(offset),
            b'\n' if depth == 0 && !continues_line(code, offset) => return None,
            _ => {}
        }
    }
    None
}

/// A backslash before the newline continues the logical line
fn continues_line(code: &str, newline: usize) -> bool {
    code[..newline].trim_end_matches([' ', '\t', '\r']).ends_with('\\')
}
