//! Flowcharts for call trees, paths and concepts

use tracing::debug;

use super::{
    sanitize_label, Arrow, Diagram, DiagramKind, Direction, MermaidWriter, CONCEPT_STYLE,
    KEYWORD_STYLE, ROOT_STYLE, TARGET_STYLE,
};
use crate::analysis::{CallTree, CallTreeResult, ConceptResult, PathResult};

/// One node per occurrence, an edge from each caller to each callee, roots
/// highlighted
#[must_use]
pub fn render_call_tree(result: &CallTreeResult, direction: Direction) -> Diagram {
    if result.trees.is_empty() {
        return Diagram::empty(DiagramKind::CallTree, direction, result.status.to_string());
    }

    let mut writer = MermaidWriter::new(direction);
    for tree in &result.trees {
        let root = write_tree(&mut writer, tree);
        writer.style(&root, ROOT_STYLE);
    }
    let diagram = writer.finish(DiagramKind::CallTree, None);
    debug!(
        "Rendered call tree of '{}': {} nodes, {} edges",
        result.symbol, diagram.node_count, diagram.edge_count
    );
    diagram
}

/// Steps chained left to right; source and target highlighted
#[must_use]
pub fn render_paths(result: &PathResult, direction: Direction) -> Diagram {
    if result.paths.is_empty() {
        return Diagram::empty(DiagramKind::Paths, direction, result.status.to_string());
    }

    let mut writer = MermaidWriter::new(direction);
    for path in &result.paths {
        let ids: Vec<String> = path
            .iter()
            .map(|step| writer.symbol_node(&step.symbol))
            .collect();
        for pair in ids.windows(2) {
            writer.edge(&pair[0], &pair[1], Arrow::Call);
        }
        if let (Some(first), Some(last)) = (ids.first(), ids.last()) {
            writer.style(first, ROOT_STYLE);
            if last != first {
                writer.style(last, TARGET_STYLE);
            }
        }
    }
    let diagram = writer.finish(DiagramKind::Paths, None);
    debug!(
        "Rendered {} path(s) '{}' -> '{}'",
        result.paths.len(),
        result.source,
        result.target
    );
    diagram
}

/// Concept node grouping keyword nodes, each grouping its matches, plus the
/// shallow call tree under every match
#[must_use]
pub fn render_concept(result: &ConceptResult, direction: Direction) -> Diagram {
    if result.total_symbols == 0 {
        return Diagram::empty(DiagramKind::Concept, direction, result.status.to_string());
    }

    let mut writer = MermaidWriter::new(direction);
    let concept = writer.node("concept", &sanitize_label(&result.concept));
    writer.style(&concept, CONCEPT_STYLE);

    for group in result.groups.iter().filter(|g| !g.matches.is_empty()) {
        let keyword = writer.node(
            &format!("keyword:{}", group.keyword),
            &sanitize_label(&group.keyword),
        );
        writer.style(&keyword, KEYWORD_STYLE);
        writer.edge(&concept, &keyword, Arrow::Grouping);
        for matched in &group.matches {
            let id = writer.symbol_node(&matched.symbol);
            writer.edge(&keyword, &id, Arrow::Grouping);
        }
    }
    for tree in &result.trees {
        write_tree(&mut writer, tree);
    }

    let diagram = writer.finish(DiagramKind::Concept, None);
    debug!(
        "Rendered concept '{}': {} nodes, {} edges",
        result.concept, diagram.node_count, diagram.edge_count
    );
    diagram
}

/// Declare every node of a tree in preorder and link parents to children.
/// Returns the root id.
fn write_tree(writer: &mut MermaidWriter, tree: &CallTree) -> String {
    let root = writer.symbol_node(&tree.root.symbol);
    tree.root.walk(&mut |node, parent| {
        let id = writer.symbol_node(&node.symbol);
        if let Some(parent) = parent {
            let parent_id = writer.symbol_node(&parent.symbol);
            writer.edge(&parent_id, &id, Arrow::Call);
        }
    });
    root
}
