//! Retrieve operation
//!
//! Checks the catalog, downloads one published version, and places its
//! contents under a target directory without overwriting anything.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::domain::ArtifactKind;
use crate::error::{Result, archive_failed, version_not_found};
use crate::hash;
use crate::transport::Transport;
use crate::unpacker::{self, UnpackReport};

/// Result of a retrieve; placement failures are inside the report
#[derive(Debug)]
pub struct RetrieveOutcome {
    pub name: String,
    pub version: String,
    pub report: UnpackReport,
}

/// Download and place one artifact version
pub struct RetrieveOperation<T: Transport> {
    transport: T,
    target: PathBuf,
}

impl<T: Transport> RetrieveOperation<T> {
    pub fn new(transport: T, target: impl Into<PathBuf>) -> Self {
        Self {
            transport,
            target: target.into(),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Retrieve `version`, or the latest published version when absent
    pub fn execute(
        &self,
        kind: ArtifactKind,
        name: &str,
        version: Option<&str>,
    ) -> Result<RetrieveOutcome> {
        let catalog = self.transport.catalog()?;
        let entry = catalog.entry(kind, name)?;
        let published = match version {
            Some(v) => entry.version(v)?,
            None => entry
                .latest()
                .ok_or_else(|| version_not_found(name, "latest"))?,
        };

        let bytes = self.transport.download(kind, name, &published.version)?;
        if hash::is_blake3(&published.hash) {
            let actual = hash::hash_bytes(&bytes);
            if !hash::verify_hash(&published.hash, &actual) {
                return Err(archive_failed(format!(
                    "digest mismatch for {name} {}: expected {}, got {actual}",
                    published.version, published.hash
                )));
            }
        }

        let report = unpacker::unpack(Cursor::new(bytes), &self.target)?;
        if report.is_success() {
            info!(
                "Retrieved {} {} into {}",
                name,
                published.version,
                self.target.display()
            );
        } else {
            warn!(
                "Retrieved {} {} with {} failed items",
                name,
                published.version,
                report.failures.len()
            );
        }

        Ok(RetrieveOutcome {
            name: name.to_string(),
            version: published.version.clone(),
            report,
        })
    }
}
