//! Call edge discovery

use once_cell::sync::Lazy;
use regex::Regex;

use crate::graph::model::{CallEdge, Symbol};
use crate::graph::table::SymbolTable;

#[allow(clippy::expect_used)]
static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z_$][\w$]*").expect("Invalid identifier regex"));

/// Edges from `symbol` to every known name its body mentions, in order of
/// first mention. Comments and string literals are not searched.
pub(crate) fn discover(table: &SymbolTable, symbol: &Symbol) -> Vec<CallEdge> {
    let body = table
        .source(&symbol.file)
        .map_or(symbol.body.as_str(), |source| {
            source.code_lines(symbol.start_line, symbol.end_line)
        });
    let caller = symbol.id();

    let mut edges: Vec<CallEdge> = Vec::new();
    let mut line = symbol.start_line;
    let mut scanned = 0;
    for token in IDENTIFIER.find_iter(body) {
        line += count_newlines(&body[scanned..token.start()]);
        scanned = token.start();

        let name = token.as_str();
        if name == symbol.name || !table.contains_name(name) {
            continue;
        }
        match edges.iter_mut().find(|edge| edge.callee == name) {
            Some(edge) => {
                if edge.lines.last() != Some(&line) {
                    edge.lines.push(line);
                }
            }
            None => edges.push(CallEdge {
                caller: caller.clone(),
                callee: name.to_string(),
                lines: vec![line],
            }),
        }
    }
    edges
}

fn count_newlines(text: &str) -> u32 {
    u32::try_from(text.bytes().filter(|&b| b == b'\n').count()).unwrap_or(u32::MAX)
}
