//! Tests for keyword lookup

use rstest::rstest;

use super::{c_table, python_table, CHAIN};
use crate::analysis::{Analyzer, QueryStatus};
use crate::config::AnalysisLimits;
use crate::graph::model::SymbolKind;

#[test]
fn test_duplicate_names_are_distinct_occurrences() {
    let table = python_table(&[("dup.py", "def a(x): return b(x)\ndef a(y): return y\n")]);
    let analyzer = Analyzer::new(&table, AnalysisLimits::default());
    let result = analyzer.locate("a");

    let lines: Vec<u32> = result.matches.iter().map(|s| s.start_line).collect();
    assert_eq!(lines, vec![1, 2]);
    assert!(result.matches.iter().all(|s| s.name == "a"));
    assert_eq!(result.status, QueryStatus::Found);
}

#[rstest]
#[case("ALLOC", 2)]
#[case("page", 2)]
#[case("kmalloc", 1)]
#[case("zzz", 0)]
fn test_case_insensitive_substring(#[case] keyword: &str, #[case] expected: usize) {
    let table = c_table(&[(
        "mm.c",
        "void *kmalloc(int n) {\n    return alloc_pages(n);\n}\n\n\
void *alloc_pages(int n) {\n    return 0;\n}\n\n\
struct page {\n    int flags;\n};\n",
    )]);
    let analyzer = Analyzer::new(&table, AnalysisLimits::default());

    assert_eq!(analyzer.locate(keyword).matches.len(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn test_blank_keyword_matches_nothing(#[case] keyword: &str) {
    let table = python_table(&[("chain.py", CHAIN)]);
    let analyzer = Analyzer::new(&table, AnalysisLimits::default());
    let result = analyzer.locate(keyword);

    assert!(result.matches.is_empty());
    assert!(matches!(result.status, QueryStatus::NoMatches { .. }));
}

#[test]
fn test_kind_filter() {
    let table = python_table(&[(
        "k.py",
        "class Parser:\n    def parse(self):\n        pass\n",
    )]);
    let analyzer = Analyzer::new(&table, AnalysisLimits::default());

    let classes = analyzer.locate_kind("pars", Some(SymbolKind::StructOrClass));
    assert_eq!(classes.matches.len(), 1);
    assert_eq!(classes.matches[0].name, "Parser");

    let functions = analyzer.locate_kind("pars", Some(SymbolKind::Function));
    assert_eq!(functions.matches.len(), 1);
    assert_eq!(functions.matches[0].name, "parse");

    assert_eq!(analyzer.locate("pars").matches.len(), 2);
}

#[test]
fn test_matches_are_ordered_by_file_then_line() {
    let table = python_table(&[
        ("b.py", "def run_b():\n    pass\n"),
        ("a.py", "def run_late():\n    pass\n\ndef run_early():\n    pass\n"),
    ]);
    let analyzer = Analyzer::new(&table, AnalysisLimits::default());
    let found: Vec<String> = analyzer
        .locate("run")
        .matches
        .iter()
        .map(|s| format!("{}:{}", s.file, s.start_line))
        .collect();

    assert_eq!(found, vec!["a.py:1", "a.py:4", "b.py:1"]);
}
