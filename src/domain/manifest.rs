//! Manifest records written into a deployment package
//!
//! `registry-deps.json` holds the ordered list of [`ManifestEntry`] values for
//! a closure; `metadata.json` holds the [`PackageMetadata`] of its root.

use serde::{Deserialize, Serialize};

use super::artifact::{ArtifactKey, ArtifactKind};

/// Reference from one manifest entry to another
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyRef {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ArtifactKind,
}

impl DependencyRef {
    pub fn key(&self) -> ArtifactKey {
        ArtifactKey::new(self.kind, self.name.clone())
    }
}

impl From<&ArtifactKey> for DependencyRef {
    fn from(key: &ArtifactKey) -> Self {
        Self {
            name: key.name.clone(),
            kind: key.kind,
        }
    }
}

/// One artifact's record within a packaged closure
///
/// Only the root entry carries a `version`; transitive entries omit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ArtifactKind,
    pub dependencies: Vec<DependencyRef>,
    pub staticresources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ManifestEntry {
    pub fn key(&self) -> ArtifactKey {
        ArtifactKey::new(self.kind, self.name.clone())
    }
}

/// Root metadata written as `metadata.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ArtifactKind,
    pub version: String,
    pub description: String,
}
