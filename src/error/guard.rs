//! Forbidden file errors

use super::RegistryError;

/// Creates a forbidden file error
pub fn forbidden_file(path: impl Into<String>, extension: impl Into<String>) -> RegistryError {
    RegistryError::ForbiddenFile {
        path: path.into(),
        extension: extension.into(),
    }
}
