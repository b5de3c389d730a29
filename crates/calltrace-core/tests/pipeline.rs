//! End-to-end tests: scan a directory, query it, render the results

#![allow(clippy::expect_used)]

use std::fs;
use std::path::Path;

use calltrace_core::render::{render_call_tree, render_paths, render_sequence};
use calltrace_core::{
    scan, AnalysisLimits, Analyzer, Direction, IndexConfig, Indexer, QueryStatus, ScanOutcome,
};
use serial_test::serial;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create dir");
    }
    fs::write(path, content).expect("Failed to write file");
}

/// A small mixed-language repository
fn create_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    write(
        root,
        "app/chain.py",
        "def a():\n    return b()\n\ndef b():\n    return c()\n\ndef c():\n    return 0\n",
    );
    write(
        root,
        "app/dup.py",
        "def a(x): return b(x)\ndef a(y): return y\n",
    );
    write(
        root,
        "native/list.c",
        "#include \"list.h\"\n\nstruct node {\n    struct node *next;\n};\n\n\
int length(struct node *n) {\n    return n ? 1 + length(n->next) : 0;\n}\n\n\
int walk(struct node *n) {\n    return length(n);\n}\n",
    );
    write(root, "native/list.h", "int length(struct node *n);\n");
    write(root, "node_modules/dep/index.js", "function hidden() {\n}\n");
    write(root, "README.md", "# not code\n");
    temp_dir
}

fn index(root: &Path) -> ScanOutcome {
    Indexer::new(IndexConfig::default())
        .scan(root)
        .expect("Scan failed")
}

#[test]
fn test_scan_manifest() {
    let temp_dir = create_repo();
    let outcome = index(temp_dir.path());
    let manifest = &outcome.manifest;

    assert_eq!(manifest.files_considered, 4);
    assert_eq!(manifest.files_indexed, 4);
    assert_eq!(manifest.per_extension.get(".py"), Some(&2));
    assert_eq!(manifest.per_extension.get(".c"), Some(&1));
    assert_eq!(manifest.per_extension.get(".h"), Some(&1));
    assert_eq!(manifest.struct_count, 1);
    assert!(manifest.is_complete());
    assert!(outcome.table.occurrences("hidden").next().is_none());
}

#[test]
fn test_rescan_without_changes_is_identical() {
    let temp_dir = create_repo();
    let first = index(temp_dir.path());
    let second = index(temp_dir.path());

    assert_eq!(first.table.fingerprint(), second.table.fingerprint());

    write(temp_dir.path(), "app/extra.py", "def extra():\n    pass\n");
    let third = index(temp_dir.path());
    assert_ne!(first.table.fingerprint(), third.table.fingerprint());
}

#[test]
fn test_chain_queries() {
    let temp_dir = create_repo();
    let outcome = index(temp_dir.path());
    let analyzer = Analyzer::new(&outcome.table, AnalysisLimits::default());

    let tree = analyzer.call_tree("b", 2);
    assert_eq!(tree.trees.len(), 1);
    let root = &tree.trees[0].root;
    assert_eq!(root.symbol.file, "app/chain.py");
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].symbol.name, "c");

    let paths = analyzer.path_search("b", "c", 5);
    assert_eq!(paths.name_paths(), vec![vec!["b", "c"]]);
}

#[test]
fn test_same_name_in_one_file() {
    let temp_dir = create_repo();
    let outcome = index(temp_dir.path());
    let analyzer = Analyzer::new(&outcome.table, AnalysisLimits::default());

    let in_dup: Vec<u32> = analyzer
        .locate("a")
        .matches
        .iter()
        .filter(|s| s.name == "a" && s.file == "app/dup.py")
        .map(|s| s.start_line)
        .collect();
    assert_eq!(in_dup, vec![1, 2]);
    assert_eq!(analyzer.call_tree("a", 1).trees.len(), 3);
}

#[test]
fn test_recursion_is_not_an_edge_to_itself() {
    let temp_dir = create_repo();
    let outcome = index(temp_dir.path());
    let analyzer = Analyzer::new(&outcome.table, AnalysisLimits::default());

    let tree = analyzer.call_tree("walk", 5);
    let length = tree.trees[0]
        .root
        .children
        .iter()
        .find(|c| c.symbol.name == "length")
        .expect("walk should call length");
    assert!(length.children.iter().all(|c| c.symbol.name != "length"));
    assert!(length.recursive_calls.is_empty());
}

#[test]
fn test_unknown_names_are_not_errors() {
    let temp_dir = create_repo();
    let outcome = index(temp_dir.path());
    let analyzer = Analyzer::new(&outcome.table, AnalysisLimits::default());

    assert!(matches!(
        analyzer.call_tree("missing", 3).status,
        QueryStatus::UnknownSymbol { .. }
    ));
    assert!(matches!(
        analyzer.path_search("a", "missing", 3).status,
        QueryStatus::UnknownSymbol { .. }
    ));
    let diagram = render_call_tree(&analyzer.call_tree("missing", 3), Direction::TopDown);
    assert!(diagram.is_empty());
}

#[test]
fn test_rendering_is_stable_across_scans() {
    let temp_dir = create_repo();
    let first = index(temp_dir.path());
    let second = index(temp_dir.path());
    let left = Analyzer::new(&first.table, AnalysisLimits::default());
    let right = Analyzer::new(&second.table, AnalysisLimits::default());

    assert_eq!(
        render_call_tree(&left.call_tree("a", 3), Direction::LeftRight).text,
        render_call_tree(&right.call_tree("a", 3), Direction::LeftRight).text
    );
    assert_eq!(
        render_paths(&left.path_search("a", "c", 5), Direction::TopDown).text,
        render_paths(&right.path_search("a", "c", 5), Direction::TopDown).text
    );
    assert_eq!(
        render_sequence(&left.call_tree("walk", 2)).text,
        render_sequence(&right.call_tree("walk", 2)).text
    );
}

#[test]
fn test_results_serialize_to_json() {
    let temp_dir = create_repo();
    let outcome = index(temp_dir.path());
    let analyzer = Analyzer::new(&outcome.table, AnalysisLimits::default());

    let json = serde_json::to_value(analyzer.path_search("a", "zz", 3)).expect("Serialize failed");
    assert_eq!(json["status"]["status"], "unknown_symbol");
    assert_eq!(json["status"]["name"], "zz");

    let manifest = serde_json::to_value(&outcome.manifest).expect("Serialize failed");
    assert_eq!(manifest["files_indexed"], 4);
}

#[test]
fn test_unreadable_files_are_reported() {
    let temp_dir = create_repo();
    fs::write(temp_dir.path().join("app/bad.py"), [0xff, 0xfe, 0x00, 0x81])
        .expect("Failed to write file");
    let outcome = index(temp_dir.path());

    assert_eq!(outcome.manifest.files_considered, 5);
    assert_eq!(outcome.manifest.files_indexed, 4);
    assert_eq!(outcome.manifest.error_count, 1);
    assert!(!outcome.manifest.is_complete());
}

#[test]
#[serial]
fn test_scan_with_extension_filter() {
    let temp_dir = create_repo();
    let outcome = scan(temp_dir.path(), Some(&[".py"][..])).expect("Scan failed");

    assert_eq!(outcome.manifest.files_indexed, 2);
    assert!(outcome.table.files().all(|f| f.ends_with(".py")));
}

#[test]
fn test_missing_root() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("nowhere");

    assert!(Indexer::default().scan(&missing).is_err());
}
