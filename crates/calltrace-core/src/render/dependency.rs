//! File dependency and include graphs

use std::collections::BTreeMap;

use tracing::debug;

use super::{sanitize_label, Arrow, Diagram, DiagramKind, Direction, MermaidWriter};
use crate::analysis::FileDependencies;

/// One node per indexed file, an edge wherever a symbol in one file calls a
/// symbol in another
#[must_use]
pub fn render_file_dependencies(deps: &FileDependencies, direction: Direction) -> Diagram {
    if deps.files.is_empty() {
        return Diagram::empty(DiagramKind::FileDependencies, direction, "no files indexed");
    }

    let mut writer = MermaidWriter::new(direction);
    for file in &deps.files {
        writer.node(file, &sanitize_label(file));
    }
    for edge in &deps.edges {
        let from = writer.node(&edge.from, &sanitize_label(&edge.from));
        let to = writer.node(&edge.to, &sanitize_label(&edge.to));
        writer.edge(&from, &to, Arrow::Call);
    }
    let diagram = writer.finish(DiagramKind::FileDependencies, None);
    debug!(
        "Rendered file dependencies: {} files, {} edges",
        diagram.node_count, diagram.edge_count
    );
    diagram
}

/// Files linked to their raw include/import targets. A target naming an
/// indexed file (by key suffix) points at that file's node.
#[must_use]
pub fn render_includes(includes: &BTreeMap<String, Vec<String>>, direction: Direction) -> Diagram {
    let with_includes: Vec<(&String, &Vec<String>)> =
        includes.iter().filter(|(_, targets)| !targets.is_empty()).collect();
    if with_includes.is_empty() {
        return Diagram::empty(DiagramKind::Includes, direction, "no includes found");
    }

    let mut writer = MermaidWriter::new(direction);
    for (file, targets) in with_includes {
        let from = writer.node(file, &sanitize_label(file));
        for target in targets {
            let to = match resolve_include(includes, target) {
                Some(key) => writer.node(key, &sanitize_label(key)),
                None => writer.node(&format!("include:{target}"), &sanitize_label(target)),
            };
            writer.edge(&from, &to, Arrow::Call);
        }
    }
    writer.finish(DiagramKind::Includes, None)
}

/// Indexed file whose key is the include target or ends with `/target`
fn resolve_include<'a>(includes: &'a BTreeMap<String, Vec<String>>, target: &str) -> Option<&'a str> {
    includes
        .keys()
        .find(|key| *key == target || key.ends_with(&format!("/{target}")))
        .map(String::as_str)
}
