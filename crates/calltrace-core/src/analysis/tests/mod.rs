mod tests_classes;
mod tests_code;
mod tests_locate;

use crate::extract::SourceFile;
use crate::graph::table::SymbolTable;
use crate::scanner::Language;

/// Python table from `(key, text)` pairs
pub(super) fn python_table(files: &[(&str, &str)]) -> SymbolTable {
    SymbolTable::from_sources(
        files
            .iter()
            .map(|(key, text)| SourceFile::new(*key, Language::Python, *text)),
    )
}

/// C table from `(key, text)` pairs
pub(super) fn c_table(files: &[(&str, &str)]) -> SymbolTable {
    SymbolTable::from_sources(
        files
            .iter()
            .map(|(key, text)| SourceFile::new(*key, Language::C, *text)),
    )
}

/// `a` calls `b`, `b` calls `c`
pub(super) const CHAIN: &str =
    "def a():\n    return b()\n\ndef b():\n    return c()\n\ndef c():\n    return 0\n";

/// `ping` and `pong` call each other
pub(super) const CYCLE: &str =
    "def ping(n):\n    return pong(n - 1)\n\ndef pong(n):\n    return ping(n - 1)\n";

/// `f0` calls `f1` calls ... `f{n-1}`
pub(super) fn long_chain(n: usize) -> String {
    (0..n)
        .map(|i| {
            if i + 1 < n {
                format!("def f{i}():\n    return f{}()\n\n", i + 1)
            } else {
                format!("def f{i}():\n    return 0\n")
            }
        })
        .collect()
}
