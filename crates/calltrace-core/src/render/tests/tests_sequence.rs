//! Tests for sequence diagrams

use super::chain_table;
use crate::analysis::Analyzer;
use crate::config::AnalysisLimits;
use crate::render::{render_sequence, DiagramKind};

#[test]
fn test_sequence_text() {
    let table = chain_table();
    let analyzer = Analyzer::new(&table, AnalysisLimits::default());
    let diagram = render_sequence(&analyzer.call_tree("a", 2));

    let expected = [
        "sequenceDiagram",
        "    participant p1 as a<br/>chain.py:1",
        "    participant p2 as b<br/>chain.py:4",
        "    participant p3 as c<br/>chain.py:7",
        "    p1->>p2: b (line 2)",
        "    p2->>p3: c (line 5)",
    ]
    .join("\n");
    assert_eq!(diagram.text, expected);
    assert_eq!(diagram.kind, DiagramKind::Sequence);
    assert_eq!(diagram.node_count, 3);
    assert_eq!(diagram.edge_count, 2);
}

#[test]
fn test_unknown_symbol_sequence() {
    let table = chain_table();
    let analyzer = Analyzer::new(&table, AnalysisLimits::default());
    let diagram = render_sequence(&analyzer.call_tree("nope", 2));

    assert_eq!(
        diagram.text,
        "sequenceDiagram\n    participant p1 as unknown symbol 'nope'"
    );
    assert!(diagram.is_empty());
}
