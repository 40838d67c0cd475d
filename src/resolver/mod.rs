//! Dependency resolution for artifacts
//!
//! This module handles:
//! - Inspecting one artifact: locating it, guarding its directory, and
//!   extracting its direct references
//! - Discovering the transitive closure concurrently ([`graph`])
//! - Ordering the closure depth-first in discovery order ([`sort`])
//!
//! ## Ordering
//!
//! The manifest lists the root first, then the whole subtree of the root's
//! first dependency, then the subtree of its second dependency, and so on.
//! Each `(kind, name)` appears once, so cycles in the raw edge set terminate.
//! Only the root carries the requested version.

pub mod graph;
pub mod sort;

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::domain::{ArtifactKey, ArtifactKind, DependencyRef, ManifestEntry};
use crate::error::Result;
use crate::extractor::{self, MatcherSet, ReferenceTarget};
use crate::guard;
use crate::scanner::SourceIndex;

/// Direct facts about one artifact, as found by [`Resolver::inspect`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub key: ArtifactKey,
    pub directory: PathBuf,
    pub dependencies: Vec<ArtifactKey>,
    pub static_resources: Vec<String>,
}

impl Node {
    fn to_entry(&self, version: Option<String>) -> ManifestEntry {
        ManifestEntry {
            name: self.key.name.clone(),
            kind: self.key.kind,
            dependencies: self.dependencies.iter().map(DependencyRef::from).collect(),
            staticresources: self.static_resources.clone(),
            version,
        }
    }
}

/// One member of a resolved closure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub entry: ManifestEntry,
    pub directory: PathBuf,
}

/// An artifact plus everything it transitively depends on, in manifest order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Closure {
    artifacts: Vec<ResolvedArtifact>,
}

impl Closure {
    pub fn artifacts(&self) -> &[ResolvedArtifact] {
        &self.artifacts
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn root(&self) -> Option<&ManifestEntry> {
        self.artifacts.first().map(|a| &a.entry)
    }

    /// The ordered dependency manifest
    pub fn manifest(&self) -> Vec<ManifestEntry> {
        self.artifacts.iter().map(|a| a.entry.clone()).collect()
    }

    /// Union of the static resources of every entry, in first-reference order
    pub fn static_resources(&self) -> Vec<String> {
        extractor::dedup_preserving_order(
            self.artifacts
                .iter()
                .flat_map(|a| a.entry.staticresources.iter().cloned()),
        )
    }
}

/// Resolves closures against one scanned project
#[derive(Debug)]
pub struct Resolver<'a> {
    index: &'a SourceIndex,
    component_matchers: MatcherSet,
    class_matchers: MatcherSet,
}

impl<'a> Resolver<'a> {
    /// Resolver using the built-in reference shapes
    pub fn new(index: &'a SourceIndex) -> Result<Self> {
        Ok(Self::with_matchers(
            index,
            extractor::component_matchers()?,
            extractor::class_matchers(index.classes())?,
        ))
    }

    /// Resolver using custom matcher sets
    pub fn with_matchers(
        index: &'a SourceIndex,
        component_matchers: MatcherSet,
        class_matchers: MatcherSet,
    ) -> Self {
        Self {
            index,
            component_matchers,
            class_matchers,
        }
    }

    pub fn index(&self) -> &SourceIndex {
        self.index
    }

    /// Resolve the closure of `root`, stamping `version` on the root entry only
    pub fn resolve(&self, root: &ArtifactKey, version: Option<&str>) -> Result<Closure> {
        self.index.require(root)?;
        let graph = graph::discover(self, root)?;
        let artifacts = sort::linearize(root, graph, version)?;
        info!("Resolved {} with {} artifacts in closure", root, artifacts.len());
        Ok(Closure { artifacts })
    }

    fn matchers(&self, kind: ArtifactKind) -> &MatcherSet {
        match kind {
            ArtifactKind::Component => &self.component_matchers,
            ArtifactKind::Class => &self.class_matchers,
        }
    }

    /// Locate, guard and scan one artifact
    ///
    /// References to unknown artifacts and to the artifact itself are dropped.
    pub fn inspect(&self, key: &ArtifactKey) -> Result<Node> {
        let directory = self.index.locate(key)?;
        guard::check_directory(&directory)?;

        let (dependencies, static_resources) = self.direct_references(key, &directory)?;
        debug!(
            "Inspected {}: {} dependencies, {} static resources",
            key,
            dependencies.len(),
            static_resources.len()
        );

        Ok(Node {
            key: key.clone(),
            directory,
            dependencies,
            static_resources,
        })
    }

    fn direct_references(
        &self,
        key: &ArtifactKey,
        directory: &Path,
    ) -> Result<(Vec<ArtifactKey>, Vec<String>)> {
        let references = self.matchers(key.kind).scan_artifact(directory, &key.name)?;

        let mut dependencies = Vec::new();
        let mut static_resources = Vec::new();
        for reference in references {
            let candidate = match reference.target {
                ReferenceTarget::StaticResource => {
                    static_resources.push(reference.name);
                    continue;
                }
                ReferenceTarget::Component => ArtifactKey::component(reference.name),
                ReferenceTarget::Class => ArtifactKey::class(reference.name),
            };
            if candidate == *key {
                continue;
            }
            if !self.index.contains(&candidate) {
                debug!("Dropping unresolved reference {} from {}", candidate, key);
                continue;
            }
            dependencies.push(candidate);
        }

        Ok((
            extractor::dedup_preserving_order(dependencies),
            extractor::dedup_preserving_order(static_resources),
        ))
    }
}
