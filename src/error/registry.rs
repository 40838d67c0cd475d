//! Catalog lookup and transport errors

use super::RegistryError;
use crate::domain::ArtifactKind;

/// Creates an error for a catalog with no entries of a kind
pub fn catalog_empty(kind: ArtifactKind) -> RegistryError {
    RegistryError::CatalogEmpty { kind }
}

/// Creates an error for a name missing from the catalog
pub fn entry_not_found(kind: ArtifactKind, name: impl Into<String>) -> RegistryError {
    RegistryError::EntryNotFound {
        kind,
        name: name.into(),
    }
}

/// Creates an error for a version missing from a catalog entry
pub fn version_not_found(name: impl Into<String>, version: impl Into<String>) -> RegistryError {
    RegistryError::VersionNotFound {
        name: name.into(),
        version: version.into(),
    }
}

/// Creates a transport failure
pub fn transport_failed(message: impl Into<String>) -> RegistryError {
    RegistryError::TransportFailed {
        message: message.into(),
    }
}
