//! Class diagrams from class outlines

use std::collections::HashMap;

use tracing::debug;

use super::{sanitize_label, Diagram, DiagramKind, Direction};
use crate::analysis::ClassesResult;
use crate::graph::model::SymbolId;

/// One class per outline with its methods as members; nested classes are
/// composed into the class that encloses them
#[must_use]
pub fn render_class_diagram(result: &ClassesResult) -> Diagram {
    let mut lines = vec!["classDiagram".to_string()];
    if result.classes.is_empty() {
        let note = result.status.to_string();
        lines.push(format!("    class c1[\"{}\"]", sanitize_label(&note)));
        return finish(lines, 1, 0, Some(note));
    }

    let mut ids: HashMap<&SymbolId, String> = HashMap::new();
    for outline in &result.classes {
        let id = format!("c{}", ids.len() + 1);
        lines.push(format!(
            "    class {id}[\"{}\"]",
            sanitize_label(&outline.class.to_string())
        ));
        for method in &outline.methods {
            lines.push(format!("    {id} : +{}()", sanitize_label(&method.name)));
        }
        ids.insert(&outline.class, id);
    }

    let mut relations = 0;
    for outline in &result.classes {
        let (Some(outer), Some(inner)) = (
            outline.outer.as_ref().and_then(|outer| ids.get(outer)),
            ids.get(&outline.class),
        ) else {
            continue;
        };
        lines.push(format!("    {outer} *-- {inner}"));
        relations += 1;
    }

    debug!(
        "Rendered class diagram: {} classes, {} relations",
        ids.len(),
        relations
    );
    finish(lines, ids.len(), relations, None)
}

fn finish(lines: Vec<String>, node_count: usize, edge_count: usize, note: Option<String>) -> Diagram {
    Diagram {
        kind: DiagramKind::Classes,
        direction: Direction::TopDown,
        text: lines.join("\n"),
        node_count,
        edge_count,
        note,
    }
}
