use anyhow::Result;
use calltrace_core::render::{
    render_call_tree, render_class_diagram, render_concept, render_file_dependencies,
    render_includes, render_paths, render_sequence,
};
use calltrace_core::{AnalysisLimits, Analyzer, Diagram, Direction, QueryStatus, ScanOutcome};
use tracing::warn;

/// Call tree of `symbol` as a flowchart or sequence diagram
///
/// # Errors
/// Returns an error if the result cannot be serialized.
pub fn tree(
    outcome: &ScanOutcome,
    symbol: &str,
    depth: Option<usize>,
    direction: Direction,
    sequence: bool,
    json: bool,
) -> Result<String> {
    let limits = AnalysisLimits::default();
    let analyzer = Analyzer::new(&outcome.table, limits);
    let result = analyzer.call_tree(symbol, depth.unwrap_or(limits.default_depth));
    report_status(&result.status);
    if json {
        return Ok(serde_json::to_string_pretty(&result)?);
    }
    let diagram = if sequence {
        render_sequence(&result)
    } else {
        render_call_tree(&result, direction)
    };
    Ok(diagram_text(&diagram))
}

/// Every call path from `source` to `target`
///
/// # Errors
/// Returns an error if the result cannot be serialized.
pub fn path(
    outcome: &ScanOutcome,
    source: &str,
    target: &str,
    max_hops: usize,
    direction: Direction,
    json: bool,
) -> Result<String> {
    let analyzer = Analyzer::new(&outcome.table, AnalysisLimits::default());
    let result = analyzer.path_search(source, target, max_hops);
    report_status(&result.status);
    if result.truncated {
        warn!(
            "Path search stopped after {} paths; more may exist",
            result.paths.len()
        );
    }
    if json {
        return Ok(serde_json::to_string_pretty(&result)?);
    }
    Ok(diagram_text(&render_paths(&result, direction)))
}

/// Symbols related to `keywords`, grouped under `label`
///
/// # Errors
/// Returns an error if the result cannot be serialized.
pub fn concept(
    outcome: &ScanOutcome,
    label: &str,
    keywords: &[String],
    direction: Direction,
    json: bool,
) -> Result<String> {
    let analyzer = Analyzer::new(&outcome.table, AnalysisLimits::default());
    let result = analyzer.concept(label, keywords);
    report_status(&result.status);
    if json {
        return Ok(serde_json::to_string_pretty(&result)?);
    }
    Ok(diagram_text(&render_concept(&result, direction)))
}

/// Classes whose name contains `keyword`, all of them when it is blank
///
/// # Errors
/// Returns an error if the result cannot be serialized.
pub fn classes(outcome: &ScanOutcome, keyword: &str, json: bool) -> Result<String> {
    let analyzer = Analyzer::new(&outcome.table, AnalysisLimits::default());
    let result = analyzer.class_outline(keyword);
    report_status(&result.status);
    if json {
        return Ok(serde_json::to_string_pretty(&result)?);
    }
    Ok(diagram_text(&render_class_diagram(&result)))
}

/// File dependencies from cross-file calls, or from include targets
///
/// # Errors
/// Returns an error if the result cannot be serialized.
pub fn deps(
    outcome: &ScanOutcome,
    includes: bool,
    direction: Direction,
    json: bool,
) -> Result<String> {
    if includes {
        let all = outcome.table.all_includes();
        if json {
            return Ok(serde_json::to_string_pretty(all)?);
        }
        return Ok(diagram_text(&render_includes(all, direction)));
    }

    let analyzer = Analyzer::new(&outcome.table, AnalysisLimits::default());
    let result = analyzer.file_dependencies();
    if json {
        return Ok(serde_json::to_string_pretty(&result)?);
    }
    Ok(diagram_text(&render_file_dependencies(&result, direction)))
}

fn report_status(status: &QueryStatus) {
    if !status.is_found() {
        warn!("{}", status);
    }
}

/// Diagram text; a note explains an empty diagram
fn diagram_text(diagram: &Diagram) -> String {
    match &diagram.note {
        Some(note) => format!("%% {note}\n{}", diagram.text),
        None => diagram.text.clone(),
    }
}
