//! Bounded-depth call tree construction

use serde::Serialize;
use tracing::{debug, info};

use super::{Analyzer, QueryStatus};
use crate::graph::model::{SymbolId, SymbolKind};

/// One symbol occurrence in a call tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallTreeNode {
    pub symbol: SymbolId,
    pub kind: SymbolKind,
    /// Line in the parent's body that produced this node; `None` at the root
    pub call_line: Option<u32>,
    pub children: Vec<CallTreeNode>,
    /// Calls were left unexpanded because the depth or node budget ran out
    pub truncated: bool,
    /// Callees cut because they already appear among this node's ancestors
    pub recursive_calls: Vec<String>,
}

impl CallTreeNode {
    /// Nodes in this subtree, including itself
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Edges on the longest root-to-leaf branch
    #[must_use]
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Visit nodes parent first, children in call order
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a CallTreeNode, Option<&'a CallTreeNode>)) {
        self.walk_from(None, visit);
    }

    fn walk_from<'a>(
        &'a self,
        parent: Option<&'a CallTreeNode>,
        visit: &mut impl FnMut(&'a CallTreeNode, Option<&'a CallTreeNode>),
    ) {
        visit(self, parent);
        for child in &self.children {
            child.walk_from(Some(self), visit);
        }
    }
}

/// Call tree rooted at one occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallTree {
    pub root: CallTreeNode,
    pub max_depth: usize,
}

/// One tree per occurrence of the requested name
#[derive(Debug, Clone, Serialize)]
pub struct CallTreeResult {
    pub symbol: String,
    /// Depth after clamping
    pub depth: usize,
    pub trees: Vec<CallTree>,
    pub status: QueryStatus,
}

impl Analyzer<'_> {
    /// Build the call tree of every occurrence of `name`, `depth` edges deep
    #[must_use]
    pub fn call_tree(&self, name: &str, depth: usize) -> CallTreeResult {
        let depth = self.limits.clamp_depth(depth);
        let roots = self.table.occurrence_indices(name);
        if roots.is_empty() {
            info!("call_tree '{}': unknown symbol", name);
            return CallTreeResult {
                symbol: name.to_string(),
                depth,
                trees: Vec::new(),
                status: QueryStatus::UnknownSymbol {
                    name: name.to_string(),
                },
            };
        }

        let trees: Vec<CallTree> = roots.iter().map(|&i| self.tree_at(i, depth)).collect();
        info!(
            "call_tree '{}' depth {}: {} tree(s), {} nodes",
            name,
            depth,
            trees.len(),
            trees.iter().map(|t| t.root.node_count()).sum::<usize>()
        );
        CallTreeResult {
            symbol: name.to_string(),
            depth,
            trees,
            status: QueryStatus::Found,
        }
    }

    /// Call tree of the occurrence at `index`; `depth` is used as given
    pub(crate) fn tree_at(&self, index: usize, depth: usize) -> CallTree {
        let mut ancestors = Vec::new();
        let mut budget = self.limits.max_tree_nodes;
        let root = self.expand(index, None, depth, &mut ancestors, &mut budget);
        if budget == 0 {
            debug!("Tree node budget exhausted at {}", root.symbol);
        }
        CallTree {
            root,
            max_depth: depth,
        }
    }

    /// `ancestors` holds the names on the current branch only, so sibling
    /// branches may revisit the same callee.
    fn expand<'a>(
        &'a self,
        index: usize,
        call_line: Option<u32>,
        remaining: usize,
        ancestors: &mut Vec<&'a str>,
        budget: &mut usize,
    ) -> CallTreeNode {
        *budget = budget.saturating_sub(1);
        let symbol = self.table.symbol_at(index);
        let mut node = CallTreeNode {
            symbol: symbol.id(),
            kind: symbol.kind,
            call_line,
            children: Vec::new(),
            truncated: false,
            recursive_calls: Vec::new(),
        };

        ancestors.push(symbol.name.as_str());
        for edge in self.edges_at(index) {
            if ancestors.contains(&edge.callee.as_str()) {
                node.recursive_calls.push(edge.callee.clone());
                continue;
            }
            if remaining == 0 || *budget == 0 {
                node.truncated = true;
                continue;
            }
            for callee in self.resolve(index, &edge.callee) {
                if *budget == 0 {
                    node.truncated = true;
                    break;
                }
                let child = self.expand(callee, Some(edge.line()), remaining - 1, ancestors, budget);
                node.children.push(child);
            }
        }
        ancestors.pop();
        node
    }
}
