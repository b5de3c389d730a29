//! C and C++ extraction rules

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::blocks::{brace_block_end, match_brace, match_paren};
use super::{is_reserved, symbol_at, Extraction, SourceFile, SymbolExtractor};
use crate::graph::model::SymbolKind;

/// Regex patterns for C-family definitions, compiled once.
#[allow(clippy::expect_used)]
mod patterns {
    use super::{Lazy, Regex};

    /// Return type tokens, then a (possibly qualified) name and `(`.
    /// The type may sit on the line above the name, and constructors have
    /// none. Type tokens only take `::` pairs so access labels like
    /// `public:` never start a match.
    pub static FUNCTION: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"(?m)^[ \t]*(?:[A-Za-z_][\w<>,\*&]*(?:::[A-Za-z_][\w<>,\*&]*)*[\s\*&]+)*?([A-Za-z_~][\w:~]*)\s*\(",
        )
        .expect("Invalid C function regex")
    });

    /// What may sit between `)` and the opening brace of a definition:
    /// qualifiers, a trailing return type, a member initializer list
    pub static FUNCTION_TAIL: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^\s*(?:(?:const|volatile|noexcept|override|final|throw\s*\([^)]*\))\s*|->\s*[\w:<>,\*& ]+?\s*)*(?P<init>:\s*[\w:<>]+\s*(?:\([^;{}]*?\)|\{[^;{}]*\})(?:\s*,\s*[\w:<>]+\s*(?:\([^;{}]*?\)|\{[^;{}]*\}))*\s*)?\{",
        )
        .expect("Invalid C function tail regex")
    });

    /// Named `struct`/`class`/`union`/`enum` with a body
    pub static RECORD: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"(?m)^[ \t]*(?:typedef[ \t]+)?(?:template[ \t]*<[^>]*>[ \t]*)?(?:struct|class|union|enum)(?:[ \t]+class)?[ \t]+(?:[A-Z_][A-Z0-9_]*[ \t]+)?([A-Za-z_]\w*)[^;{()=]*\{",
        )
        .expect("Invalid C record regex")
    });

    /// `typedef struct { ... } Name;`
    pub static ANONYMOUS_TYPEDEF: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?m)^[ \t]*typedef[ \t]+(?:struct|union|enum)[ \t]*\{")
            .expect("Invalid C typedef regex")
    });

    /// Name following the closing brace of an anonymous typedef
    pub static TYPEDEF_NAME: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^[\s\*]*([A-Za-z_]\w*)").expect("Invalid C typedef name regex")
    });

    pub static INCLUDE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r#"(?m)^[ \t]*#[ \t]*include[ \t]*[<"]([^>"\n]+)[>"]"#)
            .expect("Invalid C include regex")
    });
}

/// Extracts C and C++ functions, records and includes
#[derive(Debug, Default, Clone, Copy)]
pub struct CFamilyExtractor;

impl SymbolExtractor for CFamilyExtractor {
    fn extract(&self, source: &SourceFile) -> Extraction {
        let mut extraction = Extraction::default();
        extract_functions(source, &mut extraction);
        extract_records(source, &mut extraction);

        extraction.includes = patterns::INCLUDE
            .captures_iter(source.text())
            .map(|cap| cap[1].trim().to_string())
            .collect();

        debug!(
            "{}: {} C-family symbols",
            source.key,
            extraction.symbols.len()
        );
        extraction.finish()
    }
}

fn extract_functions(source: &SourceFile, extraction: &mut Extraction) {
    let code = source.code();
    for cap in patterns::FUNCTION.captures_iter(code) {
        let (Some(whole), Some(qualified)) = (cap.get(0), cap.get(1)) else {
            continue;
        };
        let name = short_name(qualified.as_str());
        if is_reserved(name) || name.is_empty() {
            continue;
        }
        let open_paren = whole.end() - 1;
        let Some(close_paren) = match_paren(code, open_paren) else {
            continue;
        };
        let Some(tail) = patterns::FUNCTION_TAIL.captures(&code[close_paren + 1..]) else {
            continue;
        };
        // Without a return type only constructors count; macro loops like
        // `list_for_each(pos, head) {` look the same otherwise
        let untyped = code[whole.start()..qualified.start()].trim().is_empty();
        if untyped && !qualified.as_str().contains("::") && tail.name("init").is_none() {
            continue;
        }
        let Some(tail_end) = tail.get(0).map(|m| m.end()) else {
            continue;
        };
        let open_brace = close_paren + tail_end;
        let end = brace_block_end(source, open_brace);
        if end.unterminated {
            extraction.unterminated += 1;
        }
        extraction.push(symbol_at(
            source,
            name,
            SymbolKind::Function,
            whole.start(),
            open_brace,
            end.line,
        ));
    }
}

fn extract_records(source: &SourceFile, extraction: &mut Extraction) {
    let code = source.code();
    for cap in patterns::RECORD.captures_iter(code) {
        let (Some(whole), Some(name)) = (cap.get(0), cap.get(1)) else {
            continue;
        };
        let open_brace = whole.end() - 1;
        let end = brace_block_end(source, open_brace);
        if end.unterminated {
            extraction.unterminated += 1;
        }
        extraction.push(symbol_at(
            source,
            name.as_str(),
            SymbolKind::StructOrClass,
            whole.start(),
            open_brace,
            end.line,
        ));
    }

    for whole in patterns::ANONYMOUS_TYPEDEF.find_iter(code) {
        let open_brace = whole.end() - 1;
        let Some(close) = match_brace(code, open_brace) else {
            extraction.unterminated += 1;
            continue;
        };
        let Some(alias) = patterns::TYPEDEF_NAME.captures(&code[close + 1..]) else {
            continue;
        };
        let Some(name) = alias.get(1) else {
            continue;
        };
        let end_line = source.line_at(close + 1 + name.end());
        extraction.push(symbol_at(
            source,
            name.as_str(),
            SymbolKind::StructOrClass,
            whole.start(),
            open_brace,
            end_line,
        ));
    }
}

/// Last segment of a qualified C++ name (`Foo::bar` -> `bar`)
fn short_name(name: &str) -> &str {
    name.rsplit("::").next().unwrap_or(name)
}
