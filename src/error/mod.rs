//! Error types and handling for sf-registry
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`scan`]: Project discovery and source-tree scanning errors
//! - [`guard`]: Forbidden file errors
//! - [`resource`]: Static resource validation errors
//! - [`archive`]: Packaging and unpacking errors
//! - [`config`]: Root input configuration errors
//! - [`registry`]: Catalog lookup and transport errors
//! - [`fs`]: File system errors

pub mod archive;
pub mod config;
pub mod fs;
pub mod guard;
pub mod registry;
pub mod resource;
pub mod scan;

pub use archive::{archive_failed, unrecognized_artifact};
pub use config::{invalid as config_invalid, parse_failed as config_parse_failed};
pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};
pub use guard::forbidden_file;
pub use registry::{catalog_empty, entry_not_found, transport_failed, version_not_found};
pub use resource::{missing_descriptor, missing_resource};
pub use scan::{artifact_not_found, scan_failed, unresolved_directory};

use miette::Diagnostic;
use thiserror::Error;

use crate::domain::ArtifactKind;

/// Reason a registry credential was rejected
///
/// Produced by the transport collaborator and surfaced unchanged.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Not authenticated: no registry token found")]
    #[diagnostic(
        code(sf_registry::auth::no_token),
        help("Log in to the registry before deploying or downloading")
    )]
    NoToken,

    #[error("Registry token expired: {message}")]
    #[diagnostic(code(sf_registry::auth::token_expired), help("Log in again"))]
    TokenExpired { message: String },

    #[error("Registry token invalid: {message}")]
    #[diagnostic(code(sf_registry::auth::token_invalid))]
    TokenInvalid { message: String },
}

/// Main error type for sf-registry operations
#[derive(Error, Diagnostic, Debug)]
pub enum RegistryError {
    // Scan errors
    #[error("Project root not found from: {path}")]
    #[diagnostic(
        code(sf_registry::scan::project_not_found),
        help("Run the command inside a project containing sfdx-project.json")
    )]
    ProjectNotFound { path: String },

    #[error("Failed to scan source directory '{path}': {reason}")]
    #[diagnostic(code(sf_registry::scan::failed))]
    ScanFailed { path: String, reason: String },

    #[error("No {kind} named '{name}' in this project")]
    #[diagnostic(code(sf_registry::scan::not_found))]
    ArtifactNotFound { kind: ArtifactKind, name: String },

    #[error("No directory known for class '{name}'")]
    #[diagnostic(code(sf_registry::scan::unresolved_directory))]
    UnresolvedDirectory { name: String },

    // Guard errors
    #[error("Forbidden file detected: {path} (extension '.{extension}' is not allowed)")]
    #[diagnostic(
        code(sf_registry::guard::forbidden_file),
        help("Remove executable or script files from the artifact directory before packaging")
    )]
    ForbiddenFile { path: String, extension: String },

    // Static resource errors
    #[error("Static resource '{name}' is referenced but no payload file exists")]
    #[diagnostic(code(sf_registry::resource::missing))]
    MissingResource { name: String },

    #[error("Static resource '{name}' has no .resource-meta.xml descriptor")]
    #[diagnostic(code(sf_registry::resource::missing_descriptor))]
    MissingResourceDescriptor { name: String },

    // Archive errors
    #[error("Unrecognized artifact in '{path}': no class or script file found")]
    #[diagnostic(code(sf_registry::archive::unrecognized))]
    UnrecognizedArtifact { path: String },

    #[error("Archive operation failed: {message}")]
    #[diagnostic(code(sf_registry::archive::failed))]
    ArchiveFailed { message: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(sf_registry::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(sf_registry::config::invalid))]
    ConfigInvalid { message: String },

    // Registry errors
    #[error("The registry has no {kind} entries")]
    #[diagnostic(code(sf_registry::registry::empty))]
    CatalogEmpty { kind: ArtifactKind },

    #[error("No {kind} named '{name}' in the registry")]
    #[diagnostic(code(sf_registry::registry::entry_not_found))]
    EntryNotFound { kind: ArtifactKind, name: String },

    #[error("Version '{version}' of '{name}' is not in the registry")]
    #[diagnostic(code(sf_registry::registry::version_not_found))]
    VersionNotFound { name: String, version: String },

    #[error("Registry transport failed: {message}")]
    #[diagnostic(code(sf_registry::registry::transport_failed))]
    TransportFailed { message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Auth(#[from] AuthError),

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(sf_registry::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(sf_registry::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(sf_registry::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> Self {
        RegistryError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for RegistryError {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map_or_else(|| "unknown".to_string(), |p| p.display().to_string());
        RegistryError::FileReadFailed {
            path,
            reason: err.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for RegistryError {
    fn from(err: zip::result::ZipError) -> Self {
        RegistryError::ArchiveFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RegistryError>;

#[cfg(test)]
mod tests;
