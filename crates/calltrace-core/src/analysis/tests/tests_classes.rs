//! Tests for class outlines

use super::python_table;
use crate::analysis::{Analyzer, QueryStatus};
use crate::config::AnalysisLimits;

const SHAPES: &str = "class Shape:\n    def area(self):\n        return 0\n\n    class Meta:\n        def tag(self):\n            return 1\n\ndef helper():\n    return Shape()\n";

fn names(ids: &[crate::graph::model::SymbolId]) -> Vec<&str> {
    ids.iter().map(|id| id.name.as_str()).collect()
}

#[test]
fn test_methods_belong_to_the_innermost_class() {
    let table = python_table(&[("shapes.py", SHAPES)]);
    let analyzer = Analyzer::new(&table, AnalysisLimits::default());
    let result = analyzer.class_outline("");

    assert_eq!(result.status, QueryStatus::Found);
    assert_eq!(result.classes.len(), 2);

    let shape = &result.classes[0];
    assert_eq!(shape.class.name, "Shape");
    assert_eq!(names(&shape.methods), vec!["area"]);
    assert_eq!(shape.outer, None);

    let meta = &result.classes[1];
    assert_eq!(meta.class.name, "Meta");
    assert_eq!(names(&meta.methods), vec!["tag"]);
    assert_eq!(meta.outer.as_ref().map(|id| id.name.as_str()), Some("Shape"));
}

#[test]
fn test_keyword_selects_classes_case_insensitively() {
    let table = python_table(&[("shapes.py", SHAPES)]);
    let analyzer = Analyzer::new(&table, AnalysisLimits::default());
    let result = analyzer.class_outline("META");

    let classes: Vec<&str> = result.classes.iter().map(|c| c.class.name.as_str()).collect();
    assert_eq!(classes, vec!["Meta"]);
}

#[test]
fn test_classes_in_other_files_do_not_claim_methods() {
    let table = python_table(&[
        ("a.py", "class A:\n    def run(self):\n        pass\n"),
        ("b.py", "def run():\n    pass\n"),
    ]);
    let analyzer = Analyzer::new(&table, AnalysisLimits::default());
    let result = analyzer.class_outline("");

    assert_eq!(result.classes.len(), 1);
    assert_eq!(result.classes[0].methods.len(), 1);
    assert_eq!(result.classes[0].methods[0].file, "a.py");
}

#[test]
fn test_no_classes_is_no_matches() {
    let table = python_table(&[("shapes.py", SHAPES)]);
    let analyzer = Analyzer::new(&table, AnalysisLimits::default());
    let result = analyzer.class_outline("zzz");

    assert!(result.classes.is_empty());
    assert_eq!(
        result.status,
        QueryStatus::NoMatches {
            query: "zzz".to_string()
        }
    );
}
