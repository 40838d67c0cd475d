//! Project discovery and source-tree scanning errors

use super::RegistryError;
use crate::domain::ArtifactKind;

/// Creates a scan failure for an unreadable source root
pub fn scan_failed(path: impl Into<String>, reason: impl Into<String>) -> RegistryError {
    RegistryError::ScanFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an error for an artifact absent from the project
pub fn artifact_not_found(kind: ArtifactKind, name: impl Into<String>) -> RegistryError {
    RegistryError::ArtifactNotFound {
        kind,
        name: name.into(),
    }
}

/// Creates an error for a class with no known directory
pub fn unresolved_directory(name: impl Into<String>) -> RegistryError {
    RegistryError::UnresolvedDirectory { name: name.into() }
}
