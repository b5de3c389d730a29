//! Tests for source extraction

use super::{python_table, CHAIN};
use crate::analysis::{Analyzer, QueryStatus};
use crate::config::AnalysisLimits;
use crate::graph::model::SymbolId;

#[test]
fn test_extract_one_occurrence() {
    let table = python_table(&[("chain.py", CHAIN)]);
    let analyzer = Analyzer::new(&table, AnalysisLimits::default());
    let extract = analyzer.extract_code(&SymbolId::new("b", "chain.py", 4));

    let extract = extract.unwrap_or_else(|| panic!("b should be indexed"));
    assert_eq!(extract.start_line, 4);
    assert_eq!(extract.end_line, 5);
    assert_eq!(extract.code, "def b():\n    return c()");
}

#[test]
fn test_missing_occurrence() {
    let table = python_table(&[("chain.py", CHAIN)]);
    let analyzer = Analyzer::new(&table, AnalysisLimits::default());

    assert!(analyzer
        .extract_code(&SymbolId::new("b", "chain.py", 9))
        .is_none());
}

#[test]
fn test_comments_survive_extraction() {
    let text = "def a():\n    # keep me\n    return 1\n";
    let table = python_table(&[("c.py", text)]);
    let analyzer = Analyzer::new(&table, AnalysisLimits::default());
    let result = analyzer.extract_code_by_name("a");

    assert_eq!(result.extracts.len(), 1);
    assert!(result.extracts[0].code.contains("# keep me"));
}

#[test]
fn test_every_occurrence_by_name() {
    let table = python_table(&[
        ("one.py", "def a():\n    return 1\n"),
        ("two.py", "x = 1\n\ndef a():\n    return 2\n"),
    ]);
    let analyzer = Analyzer::new(&table, AnalysisLimits::default());
    let result = analyzer.extract_code_by_name("a");

    assert_eq!(result.status, QueryStatus::Found);
    let found: Vec<(String, u32)> = result
        .extracts
        .iter()
        .map(|e| (e.symbol.file.clone(), e.start_line))
        .collect();
    assert_eq!(
        found,
        vec![("one.py".to_string(), 1), ("two.py".to_string(), 3)]
    );
    assert!(result.extracts[1].code.ends_with("return 2"));
}

#[test]
fn test_unknown_name() {
    let table = python_table(&[("chain.py", CHAIN)]);
    let analyzer = Analyzer::new(&table, AnalysisLimits::default());
    let result = analyzer.extract_code_by_name("nope");

    assert!(result.extracts.is_empty());
    assert_eq!(
        result.status,
        QueryStatus::UnknownSymbol {
            name: "nope".to_string()
        }
    );
}
