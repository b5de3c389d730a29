//! Code view: comments and string literals blanked out
//!
//! Every masked character is replaced by as many spaces as its UTF-8 width, and
//! newlines are always kept, so byte offsets and line numbers in the code view
//! are identical to the raw text. Pattern rules and brace matching run on the
//! code view so that braces or names inside strings and comments are invisible.

use crate::scanner::RuleFamily;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    LineComment,
    BlockComment,
    /// String closed by the given quote; `multiline` strings survive newlines
    Str { quote: char, multiline: bool },
    /// Python triple-quoted string
    TripleStr(char),
}

/// Blank comments and string literals in `text`
#[must_use]
pub fn code_view(text: &str, family: RuleFamily) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut state = State::Code;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if c == '\n' {
            out.push('\n');
            state = match state {
                State::LineComment => State::Code,
                State::Str {
                    multiline: false, ..
                } => State::Code,
                other => other,
            };
            i += 1;
            continue;
        }

        match state {
            State::Code => match (family, c) {
                (RuleFamily::Python, '#') => {
                    state = State::LineComment;
                    blank(&mut out, c);
                }
                (RuleFamily::Python, '"' | '\'') => {
                    if next == Some(c) && chars.get(i + 2) == Some(&c) {
                        state = State::TripleStr(c);
                        blank_n(&mut out, 3);
                        i += 3;
                        continue;
                    }
                    state = State::Str {
                        quote: c,
                        multiline: false,
                    };
                    blank(&mut out, c);
                }
                (RuleFamily::Python, _) => out.push(c),
                (_, '/') if next == Some('/') => {
                    state = State::LineComment;
                    blank_n(&mut out, 2);
                    i += 2;
                    continue;
                }
                (_, '/') if next == Some('*') => {
                    state = State::BlockComment;
                    blank_n(&mut out, 2);
                    i += 2;
                    continue;
                }
                (_, '"') => {
                    state = State::Str {
                        quote: '"',
                        multiline: false,
                    };
                    blank(&mut out, c);
                }
                (_, '`') => {
                    state = State::Str {
                        quote: '`',
                        multiline: true,
                    };
                    blank(&mut out, c);
                }
                (_, '\'') => {
                    let width = char_literal_width(&chars, i);
                    if width == 0 {
                        out.push(c);
                    } else {
                        for ch in &chars[i..i + width] {
                            blank(&mut out, *ch);
                        }
                        i += width;
                        continue;
                    }
                }
                _ => out.push(c),
            },
            State::LineComment => blank(&mut out, c),
            State::BlockComment => {
                if c == '*' && next == Some('/') {
                    state = State::Code;
                    blank_n(&mut out, 2);
                    i += 2;
                    continue;
                }
                blank(&mut out, c);
            }
            State::Str { quote, .. } => {
                if c == '\\' {
                    blank(&mut out, c);
                    if let Some(escaped) = next {
                        if escaped == '\n' {
                            out.push('\n');
                        } else {
                            blank(&mut out, escaped);
                        }
                        i += 2;
                        continue;
                    }
                } else {
                    if c == quote {
                        state = State::Code;
                    }
                    blank(&mut out, c);
                }
            }
            State::TripleStr(quote) => {
                if c == '\\' {
                    blank(&mut out, c);
                    if let Some(escaped) = next.filter(|n| *n != '\n') {
                        blank(&mut out, escaped);
                        i += 2;
                        continue;
                    }
                } else if c == quote && next == Some(quote) && chars.get(i + 2) == Some(&quote) {
                    state = State::Code;
                    blank_n(&mut out, 3);
                    i += 3;
                    continue;
                } else {
                    blank(&mut out, c);
                }
            }
        }
        i += 1;
    }

    out
}

/// Width in chars of a character literal starting at `i`, or 0 when the quote
/// is not one (Rust lifetimes, apostrophes in macros).
fn char_literal_width(chars: &[char], i: usize) -> usize {
    match chars.get(i + 1) {
        Some('\\') => chars
            .iter()
            .skip(i + 3)
            .take(10)
            .position(|c| *c == '\'' || *c == '\n')
            .filter(|p| chars[i + 3 + p] == '\'')
            .map_or(0, |p| p + 4),
        Some('\n') | None => 0,
        Some(_) if chars.get(i + 2) == Some(&'\'') => 3,
        Some(_) => 0,
    }
}

fn blank(out: &mut String, c: char) {
    blank_n(out, c.len_utf8());
}

fn blank_n(out: &mut String, n: usize) {
    out.extend(std::iter::repeat(' ').take(n));
}
