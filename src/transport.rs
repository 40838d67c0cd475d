//! Registry transport seam
//!
//! The registry itself is reached through an implementation of [`Transport`]
//! supplied by the caller. Credential problems surface as
//! [`AuthError`](crate::error::AuthError) wrapped in
//! [`RegistryError::Auth`](crate::error::RegistryError::Auth) and are passed
//! through unchanged by every operation.

use std::path::Path;

use crate::config::Catalog;
use crate::domain::ArtifactKind;
use crate::error::Result;

/// Authenticated access to a remote registry
pub trait Transport: Send + Sync {
    /// Publish a finished deployment archive
    fn upload(&self, archive: &Path) -> Result<()>;

    /// Fetch the archive of one published version
    fn download(&self, kind: ArtifactKind, name: &str, version: &str) -> Result<Vec<u8>>;

    /// Fetch the full registry listing
    fn catalog(&self) -> Result<Catalog>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn upload(&self, archive: &Path) -> Result<()> {
        (**self).upload(archive)
    }

    fn download(&self, kind: ArtifactKind, name: &str, version: &str) -> Result<Vec<u8>> {
        (**self).download(kind, name, version)
    }

    fn catalog(&self) -> Result<Catalog> {
        (**self).catalog()
    }
}
