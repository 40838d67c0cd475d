//! Domain models for sf-registry
//!
//! This module contains pure domain objects representing artifacts and the
//! manifests that describe a packaged closure.

pub mod artifact;
pub mod manifest;

pub use artifact::{ArtifactKey, ArtifactKind};
pub use manifest::{DependencyRef, ManifestEntry, PackageMetadata};
