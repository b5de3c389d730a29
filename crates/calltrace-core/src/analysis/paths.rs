//! Simple path enumeration between two symbol names

use std::collections::{BTreeMap, VecDeque};

use serde::Serialize;
use tracing::{debug, info};

use super::{Analyzer, QueryStatus};
use crate::graph::model::SymbolId;

/// One step of a call path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathStep {
    pub name: String,
    /// Occurrence chosen to stand for this step
    pub symbol: SymbolId,
}

/// Every simple path from `source` to `target`, shortest first
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub source: String,
    pub target: String,
    /// Hop bound after clamping
    pub max_hops: usize,
    pub paths: Vec<Vec<PathStep>>,
    /// The path cap or expansion budget stopped the search early
    pub truncated: bool,
    pub status: QueryStatus,
}

impl PathResult {
    /// Paths as plain name sequences
    #[must_use]
    pub fn name_paths(&self) -> Vec<Vec<&str>> {
        self.paths
            .iter()
            .map(|path| path.iter().map(|step| step.name.as_str()).collect())
            .collect()
    }
}

impl Analyzer<'_> {
    /// Breadth-first search for all simple paths of at most `hops` edges.
    /// A name never repeats within one path.
    #[must_use]
    pub fn path_search(&self, source: &str, target: &str, hops: usize) -> PathResult {
        let max_hops = self.limits.clamp_hops(hops);
        let mut result = PathResult {
            source: source.to_string(),
            target: target.to_string(),
            max_hops,
            paths: Vec::new(),
            truncated: false,
            status: QueryStatus::Found,
        };

        for name in [source, target] {
            if !self.table.contains_name(name) {
                info!("path_search '{}' -> '{}': unknown '{}'", source, target, name);
                result.status = QueryStatus::UnknownSymbol {
                    name: name.to_string(),
                };
                return result;
            }
        }

        let adjacency = self.name_adjacency();
        let (name_paths, truncated) = self.simple_paths(&adjacency, source, target, max_hops);
        result.truncated = truncated;
        result.paths = name_paths
            .iter()
            .map(|names| self.representatives(names))
            .collect();

        info!(
            "path_search '{}' -> '{}' within {} hops: {} path(s){}",
            source,
            target,
            max_hops,
            result.paths.len(),
            if truncated { " (truncated)" } else { "" }
        );
        if result.paths.is_empty() {
            result.status = QueryStatus::NoPath {
                source: source.to_string(),
                target: target.to_string(),
            };
        }
        result
    }

    /// Callee names per caller name, merged over all occurrences
    fn name_adjacency(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut adjacency: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (index, symbol) in self.table.symbols().iter().enumerate() {
            let callees = adjacency.entry(symbol.name.as_str()).or_default();
            for edge in self.edges_at(index) {
                if !callees.contains(&edge.callee.as_str()) {
                    callees.push(edge.callee.as_str());
                }
            }
        }
        adjacency
    }

    fn simple_paths<'n>(
        &self,
        adjacency: &BTreeMap<&'n str, Vec<&'n str>>,
        source: &'n str,
        target: &str,
        max_hops: usize,
    ) -> (Vec<Vec<&'n str>>, bool) {
        if source == target {
            return (vec![vec![source]], false);
        }

        let mut found = Vec::new();
        let mut queue: VecDeque<Vec<&'n str>> = VecDeque::from([vec![source]]);
        let mut expansions = 0usize;

        while let Some(path) = queue.pop_front() {
            if path.len() > max_hops {
                continue;
            }
            let Some(last) = path.last() else { continue };
            for &callee in adjacency.get(last).map_or(&[][..], Vec::as_slice) {
                if path.contains(&callee) {
                    continue;
                }
                expansions += 1;
                if expansions > self.limits.max_expansions {
                    debug!("Path expansion budget exhausted");
                    return (found, true);
                }

                let mut next = path.clone();
                next.push(callee);
                if callee == target {
                    found.push(next);
                    if found.len() >= self.limits.max_paths {
                        return (found, !queue.is_empty());
                    }
                } else {
                    queue.push_back(next);
                }
            }
        }
        (found, false)
    }

    /// Pick one occurrence per step, following real edges where possible
    fn representatives(&self, names: &[&str]) -> Vec<PathStep> {
        let mut steps: Vec<PathStep> = Vec::with_capacity(names.len());
        let mut previous: Option<usize> = None;

        for (position, name) in names.iter().enumerate() {
            let candidates = match previous {
                Some(caller) if self.calls(caller, name) => self.resolve(caller, name),
                _ => self.table.occurrence_indices(name).to_vec(),
            };
            let next = names.get(position + 1);
            let chosen = candidates
                .iter()
                .copied()
                .find(|&i| next.is_some_and(|n| self.calls(i, n)))
                .or_else(|| candidates.first().copied());
            let Some(chosen) = chosen else { break };

            steps.push(PathStep {
                name: (*name).to_string(),
                symbol: self.table.symbol_at(chosen).id(),
            });
            previous = Some(chosen);
        }
        steps
    }

    fn calls(&self, caller: usize, callee: &str) -> bool {
        self.edges_at(caller).iter().any(|edge| edge.callee == callee)
    }
}
