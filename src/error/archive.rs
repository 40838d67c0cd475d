//! Packaging and unpacking errors

use super::RegistryError;

/// Creates an archive failure
pub fn archive_failed(message: impl Into<String>) -> RegistryError {
    RegistryError::ArchiveFailed {
        message: message.into(),
    }
}

/// Creates an error for an extracted directory that is neither a class nor a component
pub fn unrecognized_artifact(path: impl Into<String>) -> RegistryError {
    RegistryError::UnrecognizedArtifact { path: path.into() }
}
