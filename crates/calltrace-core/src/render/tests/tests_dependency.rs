//! Tests for file dependency and include graphs

use std::collections::BTreeMap;

use super::c_table;
use crate::analysis::{Analyzer, FileDependencies};
use crate::config::AnalysisLimits;
use crate::render::{render_file_dependencies, render_includes, Direction};

#[test]
fn test_file_dependency_graph() {
    let table = c_table(&[
        ("main.c", "int main(void) {\n    return helper();\n}\n"),
        ("util.c", "int helper(void) {\n    return 0;\n}\n"),
    ]);
    let analyzer = Analyzer::new(&table, AnalysisLimits::default());
    let diagram = render_file_dependencies(&analyzer.file_dependencies(), Direction::LeftRight);

    assert_eq!(
        diagram.text,
        "graph LR\n    n1[\"main.c\"]\n    n2[\"util.c\"]\n    n1 --> n2"
    );
}

#[test]
fn test_no_files() {
    let diagram = render_file_dependencies(&FileDependencies::default(), Direction::TopDown);

    assert!(diagram.is_empty());
    assert_eq!(diagram.note.as_deref(), Some("no files indexed"));
}

#[test]
fn test_includes_link_to_indexed_files() {
    let mut includes = BTreeMap::new();
    includes.insert(
        "src/main.c".to_string(),
        vec!["util.h".to_string(), "stdio.h".to_string()],
    );
    includes.insert("src/util.h".to_string(), Vec::new());
    let diagram = render_includes(&includes, Direction::TopDown);

    let expected = [
        "graph TD",
        "    n1[\"src/main.c\"]",
        "    n2[\"src/util.h\"]",
        "    n3[\"stdio.h\"]",
        "    n1 --> n2",
        "    n1 --> n3",
    ]
    .join("\n");
    assert_eq!(diagram.text, expected);
}

#[test]
fn test_no_includes() {
    let mut includes = BTreeMap::new();
    includes.insert("a.c".to_string(), Vec::new());
    let diagram = render_includes(&includes, Direction::TopDown);

    assert_eq!(diagram.note.as_deref(), Some("no includes found"));
}

#[test]
fn test_includes_from_a_table() {
    let table = c_table(&[
        ("main.c", "#include \"util.h\"\n#include <stdio.h>\n"),
        ("util.h", "int helper(void);\n"),
    ]);
    let diagram = render_includes(table.all_includes(), Direction::TopDown);

    assert_eq!(diagram.node_count, 3);
    assert_eq!(diagram.edge_count, 2);
}
