//! Static resource validation errors

use super::RegistryError;

/// Creates an error for a static resource without a payload file
pub fn missing_resource(name: impl Into<String>) -> RegistryError {
    RegistryError::MissingResource { name: name.into() }
}

/// Creates an error for a static resource without a descriptor
pub fn missing_descriptor(name: impl Into<String>) -> RegistryError {
    RegistryError::MissingResourceDescriptor { name: name.into() }
}
