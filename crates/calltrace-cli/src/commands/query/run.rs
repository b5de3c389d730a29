use std::fmt::Write;

use anyhow::Result;
use calltrace_core::{AnalysisLimits, Analyzer, ScanOutcome, SymbolKind};
use tracing::info;

/// Symbols whose name contains `keyword`
///
/// # Errors
/// Returns an error if the result cannot be serialized.
pub fn locate(
    outcome: &ScanOutcome,
    keyword: &str,
    kind: Option<SymbolKind>,
    json: bool,
) -> Result<String> {
    let analyzer = Analyzer::new(&outcome.table, AnalysisLimits::default());
    let result = analyzer.locate_kind(keyword, kind);
    if json {
        return Ok(serde_json::to_string_pretty(&result)?);
    }
    if result.matches.is_empty() {
        return Ok(format!("No symbols found matching '{keyword}'"));
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<40} {:<15} {:<50} LINES", "NAME", "KIND", "FILE");
    let _ = writeln!(out, "{}", "-".repeat(110));
    for s in &result.matches {
        let _ = writeln!(
            out,
            "{:<40} {:<15} {:<50} {}-{}",
            truncate_str(&s.name, 40),
            truncate_str(&s.kind.to_string(), 15),
            truncate_path(&s.file, 50),
            s.start_line,
            s.end_line
        );
    }
    let _ = write!(out, "\nFound {} symbols", result.matches.len());
    Ok(out)
}

/// Source text of every occurrence of `name`
///
/// # Errors
/// Returns an error if the result cannot be serialized.
pub fn code(outcome: &ScanOutcome, name: &str, json: bool) -> Result<String> {
    let analyzer = Analyzer::new(&outcome.table, AnalysisLimits::default());
    let result = analyzer.extract_code_by_name(name);
    if json {
        return Ok(serde_json::to_string_pretty(&result)?);
    }
    if result.extracts.is_empty() {
        return Ok(format!("No symbol named '{name}'"));
    }

    let blocks: Vec<String> = result
        .extracts
        .iter()
        .map(|e| {
            format!(
                "// {} ({} {}-{})\n{}",
                e.symbol.name, e.symbol.file, e.start_line, e.end_line, e.code
            )
        })
        .collect();
    Ok(blocks.join("\n\n"))
}

/// Complexity report for every occurrence of `name`
///
/// # Errors
/// Returns an error if the result cannot be serialized.
pub fn complexity(outcome: &ScanOutcome, name: &str, json: bool) -> Result<String> {
    let analyzer = Analyzer::new(&outcome.table, AnalysisLimits::default());
    let reports: Vec<_> = outcome
        .table
        .occurrences(name)
        .filter_map(|symbol| analyzer.complexity(&symbol.id()))
        .collect();
    info!("Scored {} occurrence(s) of '{}'", reports.len(), name);
    if json {
        return Ok(serde_json::to_string_pretty(&reports)?);
    }
    if reports.is_empty() {
        return Ok(format!("No symbol named '{name}'"));
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<50} {:>6} {:>6} {:>8} {:>6} {:>6}  LEVEL",
        "SYMBOL", "LINES", "CODE", "BRANCHES", "CALLS", "SCORE"
    );
    let _ = writeln!(out, "{}", "-".repeat(100));
    for r in &reports {
        let _ = writeln!(
            out,
            "{:<50} {:>6} {:>6} {:>8} {:>6} {:>6}  {}",
            truncate_str(&r.symbol.to_string(), 50),
            r.total_lines,
            r.code_lines,
            r.branch_points,
            r.call_sites,
            r.score,
            r.level
        );
    }
    let _ = write!(
        out,
        "\nScores count branch tokens and lines; they are not control-flow exact"
    );
    Ok(out)
}

pub(super) fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

pub(super) fn truncate_path(path: &str, max_len: usize) -> String {
    let len = path.chars().count();
    if len <= max_len {
        path.to_string()
    } else {
        // Keep the end of the path
        let kept: String = path.chars().skip(len - max_len + 3).collect();
        format!("...{kept}")
    }
}
