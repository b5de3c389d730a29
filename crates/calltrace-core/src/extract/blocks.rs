//! Block boundary detection on the code view

use super::source::SourceFile;

/// Offset of the `}` matching the `{` at `open`, or `None` when the block
/// never closes.
#[must_use]
pub fn match_brace(code: &str, open: usize) -> Option<usize> {
    let bytes = code.as_bytes();
    if bytes.get(open) != Some(&b'{') {
        return None;
    }
    let mut depth = 0usize;
    for (offset, byte) in bytes.iter().enumerate().skip(open) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Offset of the `)` closing the `(` at `open`
#[must_use]
pub fn match_paren(code: &str, open: usize) -> Option<usize> {
    let bytes = code.as_bytes();
    if bytes.get(open) != Some(&b'(') {
        return None;
    }
    let mut depth = 0usize;
    for (offset, byte) in bytes.iter().enumerate().skip(open) {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// First `{` after `from` outside parentheses, unless a `;` ends the
/// declaration first.
#[must_use]
pub fn find_body_open(code: &str, from: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, byte) in code.as_bytes().iter().enumerate().skip(from) {
        match byte {
            b'(' | b'[' => depth += 1,
            b')' | b']' => depth = depth.saturating_sub(1),
            b'{' if depth == 0 => return Some(offset),
            b';' | b'}' if depth == 0 => return None,
            _ => {}
        }
    }
    None
}

/// Result of locating the end of a brace block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockEnd {
    pub line: u32,
    /// The block had no closing delimiter and runs to end of file
    pub unterminated: bool,
}

/// End of the brace block opened at `open`
#[must_use]
pub fn brace_block_end(source: &SourceFile, open: usize) -> BlockEnd {
    match match_brace(source.code(), open) {
        Some(close) => BlockEnd {
            line: source.line_at(close),
            unterminated: false,
        },
        None => BlockEnd {
            line: source.line_count().max(source.line_at(open)),
            unterminated: true,
        },
    }
}

/// Visual indentation of a line; tabs advance to the next multiple of 8
#[must_use]
pub fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width = (width / 8 + 1) * 8,
            _ => break,
        }
    }
    width
}

/// Last line of an indentation block whose header ends on `header_end` and
/// is indented by `indent`. Blank and comment-only lines never close a block.
#[must_use]
pub fn indented_block_end(source: &SourceFile, header_end: u32, indent: usize) -> u32 {
    let mut last = header_end;
    for line in header_end + 1..=source.line_count() {
        let code = source.code_lines(line, line);
        if code.trim().is_empty() {
            continue;
        }
        if indent_width(code) <= indent {
            break;
        }
        last = line;
    }
    last
}
