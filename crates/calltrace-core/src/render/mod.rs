//! Render module: Mermaid diagram text from analysis results
//!
//! Every renderer is a pure function from a result to a [`Diagram`]. Node ids
//! are assigned sequentially per call (`n1`, `n2`, ...), so identical input
//! always produces identical text. Empty input yields a one-node diagram with
//! a note instead of an error.

mod class;
mod dependency;
mod flowchart;
mod sequence;

use std::collections::{HashMap, HashSet};

use serde::Serialize;

pub use class::render_class_diagram;
pub use dependency::{render_file_dependencies, render_includes};
pub use flowchart::{render_call_tree, render_concept, render_paths};
pub use sequence::render_sequence;

use crate::graph::model::SymbolId;

/// Longest label part kept before truncation
pub const MAX_LABEL_CHARS: usize = 60;

pub(crate) const ROOT_STYLE: &str = "fill:#f9f,stroke:#333,stroke-width:4px";
pub(crate) const TARGET_STYLE: &str = "fill:#9f9,stroke:#333,stroke-width:2px";
pub(crate) const CONCEPT_STYLE: &str = "fill:#ff9,stroke:#333,stroke-width:4px";
pub(crate) const KEYWORD_STYLE: &str = "fill:#eef,stroke:#333,stroke-width:1px";

/// Layout direction of a flowchart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "TD")]
    TopDown,
    #[serde(rename = "LR")]
    LeftRight,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::TopDown => "TD",
            Self::LeftRight => "LR",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TD" | "TB" => Ok(Self::TopDown),
            "LR" => Ok(Self::LeftRight),
            other => Err(format!("unknown direction '{other}', expected TD or LR")),
        }
    }
}

/// What a diagram depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagramKind {
    CallTree,
    Paths,
    Concept,
    FileDependencies,
    Includes,
    Sequence,
    Classes,
}

/// Rendered diagram text with summary counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagram {
    pub kind: DiagramKind,
    pub direction: Direction,
    pub text: String,
    pub node_count: usize,
    pub edge_count: usize,
    /// Set when the input was empty
    pub note: Option<String>,
}

impl Diagram {
    /// A diagram holding only a note node
    #[must_use]
    pub fn empty(kind: DiagramKind, direction: Direction, note: impl Into<String>) -> Self {
        let note = note.into();
        let mut writer = MermaidWriter::new(direction);
        writer.node("note", &sanitize_label(&note));
        writer.finish(kind, Some(note))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.note.is_some()
    }
}

impl std::fmt::Display for Diagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Arrow drawn between two flowchart nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Arrow {
    Call,
    Grouping,
}

impl Arrow {
    fn token(self) -> &'static str {
        match self {
            Self::Call => "-->",
            Self::Grouping => "-.->",
        }
    }
}

/// Accumulates flowchart lines: nodes, then edges, then styles
#[derive(Debug)]
pub(crate) struct MermaidWriter {
    direction: Direction,
    ids: HashMap<String, String>,
    nodes: Vec<String>,
    edges: Vec<String>,
    seen_edges: HashSet<(String, String, Arrow)>,
    styles: Vec<String>,
}

impl MermaidWriter {
    pub(crate) fn new(direction: Direction) -> Self {
        Self {
            direction,
            ids: HashMap::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            seen_edges: HashSet::new(),
            styles: Vec::new(),
        }
    }

    /// Id of the node for `key`, declaring it with `label` on first use.
    /// `label` must already be sanitized.
    pub(crate) fn node(&mut self, key: &str, label: &str) -> String {
        if let Some(id) = self.ids.get(key) {
            return id.clone();
        }
        let id = format!("n{}", self.ids.len() + 1);
        self.nodes.push(format!("    {id}[\"{label}\"]"));
        self.ids.insert(key.to_string(), id.clone());
        id
    }

    /// Node for one symbol occurrence, labelled `name<br/>file:line`
    pub(crate) fn symbol_node(&mut self, symbol: &SymbolId) -> String {
        let label = format!(
            "{}<br/>{}",
            sanitize_label(&symbol.name),
            sanitize_label(&symbol.location())
        );
        self.node(&format!("symbol:{symbol}"), &label)
    }

    /// Emit an edge unless the same one was already emitted
    pub(crate) fn edge(&mut self, from: &str, to: &str, arrow: Arrow) {
        if self
            .seen_edges
            .insert((from.to_string(), to.to_string(), arrow))
        {
            self.edges
                .push(format!("    {from} {} {to}", arrow.token()));
        }
    }

    pub(crate) fn style(&mut self, id: &str, style: &str) {
        let line = format!("    style {id} {style}");
        if !self.styles.contains(&line) {
            self.styles.push(line);
        }
    }

    pub(crate) fn finish(self, kind: DiagramKind, note: Option<String>) -> Diagram {
        let mut lines = Vec::with_capacity(1 + self.nodes.len() + self.edges.len() + self.styles.len());
        lines.push(format!("graph {}", self.direction));
        lines.extend(self.nodes.iter().cloned());
        lines.extend(self.edges.iter().cloned());
        lines.extend(self.styles);
        Diagram {
            kind,
            direction: self.direction,
            text: lines.join("\n"),
            node_count: self.nodes.len(),
            edge_count: self.edges.len(),
            note,
        }
    }
}

/// Make text safe inside a quoted Mermaid label and cap its length
#[must_use]
pub fn sanitize_label(text: &str) -> String {
    let flat: String = text
        .chars()
        .filter(|c| *c != '\r')
        .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
        .collect();
    let trimmed = flat.trim();
    let truncated: String = if trimmed.chars().count() > MAX_LABEL_CHARS {
        let mut cut: String = trimmed.chars().take(MAX_LABEL_CHARS - 3).collect();
        cut.push_str("...");
        cut
    } else {
        trimmed.to_string()
    };
    truncated
        .replace('&', "#amp;")
        .replace('"', "#quot;")
        .replace('<', "#lt;")
        .replace('>', "#gt;")
        .replace('[', "#91;")
        .replace(']', "#93;")
}

#[cfg(test)]
mod tests;
