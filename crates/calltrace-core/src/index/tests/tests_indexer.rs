//! Tests for Indexer

#![allow(clippy::expect_used)]

use crate::config::IndexConfig;
use crate::index::{IndexError, Indexer};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create dir");
    }
    fs::write(path, content).expect("Failed to write file");
}

fn repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write(
        temp_dir.path(),
        "pkg/a.py",
        b"def a():\n    return b()\n\ndef b():\n    return 1\n",
    );
    write(
        temp_dir.path(),
        "src/util.c",
        b"#include \"util.h\"\n\nstruct pair {\n    int l;\n};\n\nint add(int x, int y) {\n    return x + y;\n}\n",
    );
    write(temp_dir.path(), "notes.txt", b"def not_code():\n    pass\n");
    temp_dir
}

#[test]
fn test_scan_builds_table_and_manifest() {
    let temp_dir = repo();
    let outcome = Indexer::default().scan(temp_dir.path()).expect("Scan failed");

    assert_eq!(outcome.table.len(), 4);
    assert_eq!(outcome.manifest.files_considered, 2);
    assert_eq!(outcome.manifest.files_indexed, 2);
    assert_eq!(outcome.manifest.per_extension.get(".py"), Some(&1));
    assert_eq!(outcome.manifest.per_extension.get(".c"), Some(&1));
    assert_eq!(outcome.manifest.function_count, 3);
    assert_eq!(outcome.manifest.struct_count, 1);
    assert!(outcome.manifest.is_complete());
    assert_eq!(outcome.table.includes("src/util.c"), ["util.h".to_string()]);
}

#[test]
fn test_scan_is_idempotent() {
    let temp_dir = repo();
    let indexer = Indexer::default();
    let first = indexer.scan(temp_dir.path()).expect("Scan failed");
    let second = indexer.scan(temp_dir.path()).expect("Scan failed");

    assert_eq!(first.table.fingerprint(), second.table.fingerprint());
    assert_eq!(first.table.symbols(), second.table.symbols());
}

#[test]
fn test_scan_counts_unreadable_files_and_continues() {
    let temp_dir = repo();
    write(temp_dir.path(), "src/bad.c", &[0x69, 0x6e, 0x74, 0xff, 0xfe]);

    let outcome = Indexer::default().scan(temp_dir.path()).expect("Scan failed");

    assert_eq!(outcome.manifest.files_considered, 3);
    assert_eq!(outcome.manifest.files_indexed, 2);
    assert_eq!(outcome.manifest.error_count, 1);
    assert_eq!(outcome.manifest.errors[0].file, "src/bad.c");
    assert!(!outcome.manifest.is_complete());
    assert_eq!(outcome.table.len(), 4);
}

#[test]
fn test_scan_counts_unterminated_blocks() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write(temp_dir.path(), "broken.c", b"int f(void) {\n    g();\n");

    let outcome = Indexer::default().scan(temp_dir.path()).expect("Scan failed");

    assert_eq!(outcome.manifest.unterminated, 1);
    assert_eq!(outcome.table.symbols()[0].end_line, 2);
}

#[test]
fn test_scan_with_extension_filter() {
    let temp_dir = repo();
    let indexer = Indexer::new(IndexConfig::default().with_extensions([".c"]));
    let outcome = indexer.scan(temp_dir.path()).expect("Scan failed");

    assert_eq!(outcome.manifest.files_indexed, 1);
    assert!(outcome.table.files().all(|f| f.ends_with(".c")));
}

#[test]
fn test_scan_missing_root() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("missing");

    let result = Indexer::default().scan(&missing);
    assert!(matches!(result, Err(IndexError::RootNotFound(_))));
}

#[test]
fn test_scan_root_is_a_file() {
    let temp_dir = repo();
    let file = temp_dir.path().join("notes.txt");

    let result = Indexer::default().scan(&file);
    assert!(matches!(result, Err(IndexError::NotADirectory(_))));
}

#[test]
fn test_empty_directory_scans_cleanly() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let outcome = Indexer::default().scan(temp_dir.path()).expect("Scan failed");

    assert!(outcome.table.is_empty());
    assert_eq!(outcome.manifest.files_considered, 0);
    assert!(outcome.manifest.is_complete());
}
