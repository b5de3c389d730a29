//! Generic brace-language rules
//!
//! Shared by Java, JavaScript, TypeScript, Go, Rust and any extension the
//! filter admits without dedicated rules. Each pattern only has to find a
//! definition header; the body is whatever brace block follows it. Headers
//! followed by `;` before any `{` are declarations and are skipped.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::blocks::{brace_block_end, find_body_open};
use super::{is_reserved, symbol_at, Extraction, SourceFile, SymbolExtractor};
use crate::graph::model::SymbolKind;

#[allow(clippy::expect_used)]
mod patterns {
    use super::{Lazy, Regex};

    /// `function name(` with optional export/async/generator markers
    pub static JS_FUNCTION: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"(?m)^[ \t]*(?:export[ \t]+)?(?:default[ \t]+)?(?:async[ \t]+)?function[ \t]*\*?[ \t]*([A-Za-z_$][\w$]*)",
        )
        .expect("Invalid function regex")
    });

    /// `const name = (...) =>` and `const name = async x =>`
    pub static ARROW: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"(?m)^[ \t]*(?:export[ \t]+)?(?:const|let|var)[ \t]+([A-Za-z_$][\w$]*)[ \t]*(?::[^=\n]+)?=[ \t]*(?:async[ \t]*)?(?:\([^()]*\)|[A-Za-z_$][\w$]*)[ \t]*(?::[^=\n]+)?=>",
        )
        .expect("Invalid arrow function regex")
    });

    /// Go `func name(` and `func (r *T) name(`
    pub static GO_FUNC: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?m)^func\b[ \t]*(?:\([^)]*\)[ \t]*)?([A-Za-z_]\w*)")
            .expect("Invalid Go func regex")
    });

    /// Rust `fn name` with visibility and qualifiers
    pub static RUST_FN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"(?m)^[ \t]*(?:pub(?:\([^)]*\))?[ \t]+)?(?:default[ \t]+)?(?:const[ \t]+)?(?:async[ \t]+)?(?:unsafe[ \t]+)?(?:extern[ \t]+)?fn[ \t]+([A-Za-z_]\w*)",
        )
        .expect("Invalid Rust fn regex")
    });

    /// Java/TypeScript style methods: modifiers, optional type, name, `(`.
    /// Calls and control flow look the same, so names are checked afterwards.
    pub static METHOD: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"(?m)^[ \t]*(?:(?:public|private|protected|internal|static|final|abstract|synchronized|native|async|override|readonly|virtual|default)[ \t]+)*(?:(?P<ty>[A-Za-z_$][\w$<>\[\],\.\?]*)[ \t]+)?(?P<name>[A-Za-z_$][\w$]*)[ \t]*(?:<[^>\n]*>)?[ \t]*\(",
        )
        .expect("Invalid method regex")
    });

    /// `class`/`interface`/`struct`/`enum`/`trait` declarations
    pub static TYPE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"(?m)^[ \t]*(?:export[ \t]+)?(?:default[ \t]+)?(?:pub(?:\([^)]*\))?[ \t]+)?(?:(?:public|private|protected|internal|static|final|abstract|sealed|declare)[ \t]+)*(?:class|interface|struct|enum|trait|record)[ \t]+([A-Za-z_$][\w$]*)",
        )
        .expect("Invalid type regex")
    });

    /// Go `type Name struct` / `type Name interface`
    pub static GO_TYPE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?m)^[ \t]*type[ \t]+([A-Za-z_]\w*)[ \t]+(?:struct|interface)\b")
            .expect("Invalid Go type regex")
    });

    /// `import ... from 'x'`, `import a.b.C;`, `use a::b;`
    pub static IMPORTS: Lazy<[Regex; 3]> = Lazy::new(|| {
        [
            Regex::new(r#"(?m)^[ \t]*import[ \t][^\n]*?from[ \t]+['"]([^'"\n]+)['"]"#)
                .expect("Invalid ES import regex"),
            Regex::new(r"(?m)^[ \t]*import[ \t]+(?:static[ \t]+)?([\w\.\*]+)[ \t]*;")
                .expect("Invalid Java import regex"),
            Regex::new(r"(?m)^[ \t]*(?:pub[ \t]+)?use[ \t]+([^;\n]+);")
                .expect("Invalid Rust use regex"),
        ]
    });
}

/// How the body of a matched header is located
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Body {
    /// Brace block required; declarations without one are skipped
    Block,
    /// Brace block if present, otherwise the header line alone
    BlockOrLine,
    /// Arrow function: brace block right after `=>`, else the expression line
    Arrow,
}

struct Rule {
    pattern: &'static Lazy<Regex>,
    kind: SymbolKind,
    body: Body,
    /// No keyword proves a definition, so reserved words must be filtered
    ambiguous: bool,
}

static RULES: [Rule; 7] = [
    Rule {
        pattern: &patterns::JS_FUNCTION,
        kind: SymbolKind::Function,
        body: Body::Block,
        ambiguous: false,
    },
    Rule {
        pattern: &patterns::ARROW,
        kind: SymbolKind::Function,
        body: Body::Arrow,
        ambiguous: false,
    },
    Rule {
        pattern: &patterns::GO_FUNC,
        kind: SymbolKind::Function,
        body: Body::Block,
        ambiguous: false,
    },
    Rule {
        pattern: &patterns::RUST_FN,
        kind: SymbolKind::Function,
        body: Body::Block,
        ambiguous: false,
    },
    Rule {
        pattern: &patterns::METHOD,
        kind: SymbolKind::Function,
        body: Body::Block,
        ambiguous: true,
    },
    Rule {
        pattern: &patterns::TYPE,
        kind: SymbolKind::StructOrClass,
        body: Body::BlockOrLine,
        ambiguous: false,
    },
    Rule {
        pattern: &patterns::GO_TYPE,
        kind: SymbolKind::StructOrClass,
        body: Body::BlockOrLine,
        ambiguous: false,
    },
];

/// Extracts functions, methods and type declarations from brace languages
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericExtractor;

impl SymbolExtractor for GenericExtractor {
    fn extract(&self, source: &SourceFile) -> Extraction {
        let mut extraction = Extraction::default();
        for rule in &RULES {
            apply_rule(source, rule, &mut extraction);
        }

        // Import targets are string literals, so these run on the raw text
        for pattern in patterns::IMPORTS.iter() {
            extraction.includes.extend(
                pattern
                    .captures_iter(source.text())
                    .filter_map(|cap| cap.get(1))
                    .map(|m| m.as_str().trim().to_string())
                    .filter(|include| !include.is_empty()),
            );
        }

        debug!("{}: {} symbols", source.key, extraction.symbols.len());
        extraction.finish()
    }
}

fn apply_rule(source: &SourceFile, rule: &Rule, extraction: &mut Extraction) {
    let code = source.code();
    for cap in rule.pattern.captures_iter(code) {
        let name = cap.name("name").or_else(|| cap.get(1));
        let (Some(whole), Some(name)) = (cap.get(0), name) else {
            continue;
        };
        // `match foo(x) {` reads like `Type name(args) {`
        if rule.ambiguous
            && [Some(name), cap.name("ty")]
                .into_iter()
                .flatten()
                .any(|word| is_reserved(word.as_str()) || is_clause_word(word.as_str()))
        {
            continue;
        }

        // Start on the `(` when the header ends with one so arguments stay balanced
        let from = if code.as_bytes()[whole.end() - 1] == b'(' {
            whole.end() - 1
        } else {
            whole.end()
        };
        let open = match rule.body {
            Body::Arrow => arrow_body_open(code, from),
            Body::Block | Body::BlockOrLine => find_body_open(code, from),
        };

        let (header_end, end_line) = match open {
            Some(open) => {
                let end = brace_block_end(source, open);
                if end.unterminated {
                    extraction.unterminated += 1;
                }
                (open, end.line)
            }
            None if rule.body == Body::Block => continue,
            None => (whole.end(), source.line_at(whole.end())),
        };

        extraction.push(symbol_at(
            source,
            name.as_str(),
            rule.kind,
            whole.start(),
            header_end,
            end_line,
        ));
    }
}

/// Words that introduce clauses rather than types or names
fn is_clause_word(word: &str) -> bool {
    matches!(
        word,
        "let" | "const" | "var" | "mut" | "in" | "of" | "use" | "impl" | "extends" | "implements"
    )
}

/// `{` directly after `=>`, if the arrow body is a block
fn arrow_body_open(code: &str, from: usize) -> Option<usize> {
    code.as_bytes()
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, b)| !b.is_ascii_whitespace())
        .filter(|(_, b)| **b == b'{')
        .map(|(offset, _)| offset)
}
