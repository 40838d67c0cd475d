//! Depth-first linearization of a discovered graph
//!
//! The order is the preorder of a depth-first walk that follows each
//! artifact's dependencies in extraction order and skips artifacts it has
//! already emitted. The walk uses an explicit stack, so deep chains do not
//! grow the call stack.

use std::collections::HashSet;

use log::warn;

use super::ResolvedArtifact;
use super::graph::Graph;
use crate::domain::ArtifactKey;
use crate::error::Result;

/// Order the graph from `root`, stamping `version` on the root entry only
///
/// Returns the failure of the first failed artifact in walk order, if any.
pub fn linearize(
    root: &ArtifactKey,
    graph: Graph,
    version: Option<&str>,
) -> Result<Vec<ResolvedArtifact>> {
    let Graph {
        nodes,
        mut failures,
    } = graph;

    let mut emitted = HashSet::new();
    let mut ordered = Vec::with_capacity(nodes.len());
    let mut stack = vec![root.clone()];

    while let Some(key) = stack.pop() {
        if !emitted.insert(key.clone()) {
            continue;
        }
        if let Some(e) = failures.remove(&key) {
            return Err(e);
        }
        let Some(node) = nodes.get(&key) else {
            warn!("{} was referenced but never inspected", key);
            continue;
        };

        stack.extend(
            node.dependencies
                .iter()
                .rev()
                .filter(|dep| !emitted.contains(*dep))
                .cloned(),
        );

        let entry_version = if ordered.is_empty() {
            version.map(str::to_string)
        } else {
            None
        };
        ordered.push(ResolvedArtifact {
            entry: node.to_entry(entry_version),
            directory: node.directory.clone(),
        });
    }

    Ok(ordered)
}
