//! sf-registry - LWC component and Apex class packager
//!
//! Resolves the transitive closure of a component or class in a project,
//! guards it against forbidden files, validates the static resources it
//! references, and writes a deterministic deployment archive. The inverse
//! path extracts a downloaded archive and places its artifacts without
//! overwriting anything already present.
//!
//! The core pipeline is:
//!
//! ```text
//! scanner → extractor → resolver (+ guard) → resources → packager
//!                                            unpacker ← archive
//! ```

pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod domain;
pub mod error;
pub mod extractor;
pub mod guard;
pub mod hash;
pub mod operations;
pub mod packager;
pub mod progress;
pub mod project;
pub mod resolver;
pub mod resources;
pub mod scanner;
pub mod temp;
pub mod transport;
pub mod unpacker;

#[cfg(test)]
mod test_fixtures;

pub use domain::{ArtifactKey, ArtifactKind, ManifestEntry, PackageMetadata};
pub use error::{AuthError, RegistryError, Result};
