//! Concurrent discovery of a closure
//!
//! Every newly seen artifact is inspected in its own task inside one
//! [`rayon::scope`]. A single visited set guarded by a mutex is shared by all
//! branches, so each artifact is claimed and inspected at most once even when
//! branches race towards it.
//!
//! Discovery does not stop at the first failure. All reachable artifacts are
//! explored and failures are recorded per artifact; [`super::sort`] reports
//! the one reached first in manifest order so the error does not depend on
//! scheduling.
//!
//! ```text
//! card ──► badge ──► icon
//!   │                 ▲
//!   └────► header ────┘    icon is claimed by whichever branch gets there first
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;

use super::{Node, Resolver};
use crate::domain::ArtifactKey;
use crate::error::{RegistryError, Result};

/// Everything reached from one root
#[derive(Debug, Default)]
pub struct Graph {
    pub nodes: HashMap<ArtifactKey, Node>,
    pub failures: HashMap<ArtifactKey, RegistryError>,
}

impl Graph {
    pub fn len(&self) -> usize {
        self.nodes.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.failures.is_empty()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

struct Discovery<'r, 'a> {
    resolver: &'r Resolver<'a>,
    visited: Mutex<HashSet<ArtifactKey>>,
    graph: Mutex<Graph>,
}

impl Discovery<'_, '_> {
    /// Claim `key`; false when another branch already has it
    fn claim(&self, key: &ArtifactKey) -> bool {
        lock(&self.visited).insert(key.clone())
    }

    fn visit<'s>(&'s self, scope: &rayon::Scope<'s>, key: ArtifactKey) {
        match self.resolver.inspect(&key) {
            Ok(node) => {
                for dependency in &node.dependencies {
                    if self.claim(dependency) {
                        let dependency = dependency.clone();
                        scope.spawn(move |s| self.visit(s, dependency));
                    }
                }
                lock(&self.graph).nodes.insert(key, node);
            }
            Err(e) => {
                debug!("Inspecting {} failed: {}", key, e);
                lock(&self.graph).failures.insert(key, e);
            }
        }
    }
}

/// Inspect `root` and everything reachable from it
pub fn discover(resolver: &Resolver<'_>, root: &ArtifactKey) -> Result<Graph> {
    let discovery = Discovery {
        resolver,
        visited: Mutex::new(HashSet::new()),
        graph: Mutex::new(Graph::default()),
    };

    discovery.claim(root);
    rayon::scope(|s| discovery.visit(s, root.clone()));

    let graph = discovery
        .graph
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner);
    debug!("Discovered {} artifacts from {}", graph.len(), root);
    Ok(graph)
}
