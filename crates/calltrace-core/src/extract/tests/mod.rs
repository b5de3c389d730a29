
use crate::graph::model::{Symbol, SymbolKind};

/// `(name, kind, start_line, end_line)` for each symbol, in order
pub(super) fn spans(symbols: &[Symbol]) -> Vec<(&str, SymbolKind, u32, u32)> {
    symbols
        .iter()
        .map(|s| (s.name.as_str(), s.kind, s.start_line, s.end_line))
        .collect()
}
