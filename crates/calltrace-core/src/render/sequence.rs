//! Sequence diagrams from call trees

use std::collections::HashMap;

use super::{sanitize_label, Diagram, DiagramKind, Direction};
use crate::analysis::CallTreeResult;
use crate::graph::model::SymbolId;

#[derive(Debug, Default)]
struct SequenceWriter {
    ids: HashMap<SymbolId, String>,
    participants: Vec<String>,
    messages: Vec<String>,
}

impl SequenceWriter {
    fn participant(&mut self, symbol: &SymbolId) -> String {
        if let Some(id) = self.ids.get(symbol) {
            return id.clone();
        }
        let id = format!("p{}", self.ids.len() + 1);
        self.declare(
            &id,
            &format!(
                "{}<br/>{}",
                sanitize_label(&symbol.name),
                sanitize_label(&symbol.location())
            ),
        );
        self.ids.insert(symbol.clone(), id.clone());
        id
    }

    fn declare(&mut self, id: &str, label: &str) {
        self.participants
            .push(format!("    participant {id} as {label}"));
    }

    fn finish(self, note: Option<String>) -> Diagram {
        let mut lines = vec!["sequenceDiagram".to_string()];
        lines.extend(self.participants.iter().cloned());
        lines.extend(self.messages.iter().cloned());
        Diagram {
            kind: DiagramKind::Sequence,
            direction: Direction::TopDown,
            text: lines.join("\n"),
            node_count: self.participants.len(),
            edge_count: self.messages.len(),
            note,
        }
    }
}

/// One participant per occurrence, one message per tree edge in preorder
#[must_use]
pub fn render_sequence(result: &CallTreeResult) -> Diagram {
    let mut writer = SequenceWriter::default();
    if result.trees.is_empty() {
        let note = result.status.to_string();
        writer.declare("p1", &sanitize_label(&note));
        return writer.finish(Some(note));
    }

    for tree in &result.trees {
        tree.root.walk(&mut |node, parent| {
            let to = writer.participant(&node.symbol);
            let Some(parent) = parent else { return };
            let from = writer.participant(&parent.symbol);
            let line = node
                .call_line
                .map_or_else(String::new, |line| format!(" (line {line})"));
            writer.messages.push(format!(
                "    {from}->>{to}: {}{line}",
                sanitize_label(&node.symbol.name)
            ));
        });
    }
    writer.finish(None)
}
