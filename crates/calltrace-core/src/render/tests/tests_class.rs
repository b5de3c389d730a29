//! Tests for class diagrams

use crate::analysis::Analyzer;
use crate::config::AnalysisLimits;
use crate::extract::SourceFile;
use crate::graph::table::SymbolTable;
use crate::render::{render_class_diagram, DiagramKind};
use crate::scanner::Language;

fn repo_table() -> SymbolTable {
    SymbolTable::from_sources([SourceFile::new(
        "Repo.java",
        Language::Java,
        "public class Repo {\n    public Repo() {\n    }\n\n    public int count() {\n        return 0;\n    }\n\n    static class Entry {\n        String key() {\n            return null;\n        }\n    }\n}\n",
    )])
}

#[test]
fn test_class_diagram_text() {
    let table = repo_table();
    let analyzer = Analyzer::new(&table, AnalysisLimits::default());
    let diagram = render_class_diagram(&analyzer.class_outline(""));

    let expected = [
        "classDiagram",
        "    class c1[\"Repo (Repo.java:1)\"]",
        "    c1 : +Repo()",
        "    c1 : +count()",
        "    class c2[\"Entry (Repo.java:9)\"]",
        "    c2 : +key()",
        "    c1 *-- c2",
    ]
    .join("\n");
    assert_eq!(diagram.text, expected);
    assert_eq!(diagram.kind, DiagramKind::Classes);
    assert_eq!(diagram.node_count, 2);
    assert_eq!(diagram.edge_count, 1);
    assert!(!diagram.is_empty());
}

#[test]
fn test_outer_class_outside_the_selection_has_no_relation() {
    let table = repo_table();
    let analyzer = Analyzer::new(&table, AnalysisLimits::default());
    let diagram = render_class_diagram(&analyzer.class_outline("entry"));

    assert_eq!(
        diagram.text,
        "classDiagram\n    class c1[\"Entry (Repo.java:9)\"]\n    c1 : +key()"
    );
    assert_eq!(diagram.edge_count, 0);
}

#[test]
fn test_no_classes_renders_a_note() {
    let table = repo_table();
    let analyzer = Analyzer::new(&table, AnalysisLimits::default());
    let diagram = render_class_diagram(&analyzer.class_outline("zzz"));

    assert_eq!(
        diagram.text,
        "classDiagram\n    class c1[\"no matches for 'zzz'\"]"
    );
    assert_eq!(diagram.note.as_deref(), Some("no matches for 'zzz'"));
    assert_eq!(diagram.node_count, 1);
    assert_eq!(diagram.edge_count, 0);
}
