//! Tests for IndexConfig

use crate::config::{normalize_extension, IndexConfig, DEFAULT_EXTENSIONS, EXTENSIONS_ENV, IGNORE_ENV};
use rstest::rstest;
use serial_test::serial;

#[rstest]
#[case(".py", "py")]
#[case("PY", "py")]
#[case("  .Rs ", "rs")]
#[case("c", "c")]
fn test_normalize_extension(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(normalize_extension(raw), expected);
}

#[test]
fn test_default_config() {
    let config = IndexConfig::default();
    assert_eq!(config.extensions.len(), DEFAULT_EXTENSIONS.len());
    assert!(config.ignore_patterns.iter().any(|p| p == "node_modules"));
    assert!(config.ignore_patterns.iter().any(|p| p == "*.egg-info"));
    assert!(config.respect_gitignore);
}

#[test]
fn test_with_extensions_normalizes_and_dedupes() {
    let config = IndexConfig::new().with_extensions([".c", "C", "h", ""]);
    assert_eq!(config.extensions, vec!["c", "h"]);
    assert!(config.accepts_extension(".C"));
    assert!(!config.accepts_extension("py"));
}

#[test]
fn test_with_ignore_patterns_appends() {
    let before = IndexConfig::new().ignore_patterns.len();
    let config = IndexConfig::new().with_ignore_patterns(["third_party"]);
    assert_eq!(config.ignore_patterns.len(), before + 1);
    assert_eq!(config.ignore_patterns.last().map(String::as_str), Some("third_party"));
}

#[test]
#[serial]
fn test_from_env_overrides_extensions() {
    std::env::set_var(EXTENSIONS_ENV, ".c, .h ,");
    std::env::remove_var(IGNORE_ENV);
    let config = IndexConfig::from_env();
    std::env::remove_var(EXTENSIONS_ENV);

    assert_eq!(config.extensions, vec!["c", "h"]);
}

#[test]
#[serial]
fn test_from_env_appends_ignore_patterns() {
    std::env::remove_var(EXTENSIONS_ENV);
    std::env::set_var(IGNORE_ENV, "generated,*.pb.go");
    let config = IndexConfig::from_env();
    std::env::remove_var(IGNORE_ENV);

    assert!(config.ignore_patterns.iter().any(|p| p == "generated"));
    assert!(config.ignore_patterns.iter().any(|p| p == "*.pb.go"));
    assert_eq!(config.extensions.len(), DEFAULT_EXTENSIONS.len());
}

#[test]
#[serial]
fn test_from_env_ignores_empty_extension_list() {
    std::env::set_var(EXTENSIONS_ENV, " , ");
    let config = IndexConfig::from_env();
    std::env::remove_var(EXTENSIONS_ENV);

    assert_eq!(config.extensions.len(), DEFAULT_EXTENSIONS.len());
}
