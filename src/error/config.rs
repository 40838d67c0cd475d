//! Configuration errors

use super::RegistryError;

/// Creates an invalid configuration error
pub fn invalid(message: impl Into<String>) -> RegistryError {
    RegistryError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> RegistryError {
    RegistryError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
