//! Deploy operation
//!
//! Packs the root artifact into a transient archive and uploads it. The
//! archive is removed once the operation ends, whether the upload succeeded
//! or not.

use log::info;

use super::pack::{ARCHIVE_SUFFIX, PackOperation};
use crate::config::{InputOverrides, RootInput};
use crate::domain::{ArtifactKind, ManifestEntry};
use crate::error::Result;
use crate::packager::PackageSummary;
use crate::temp::{ARCHIVE_PREFIX, TransientFile};
use crate::transport::Transport;

/// Result of a successful deploy
#[derive(Debug, Clone)]
pub struct DeployOutcome {
    pub input: RootInput,
    pub manifest: Vec<ManifestEntry>,
    /// Summary of the archive that was uploaded (the file itself is gone)
    pub summary: PackageSummary,
}

/// Pack and upload one artifact
pub struct DeployOperation<'a, T: Transport> {
    pack: &'a PackOperation<'a>,
    transport: T,
}

impl<'a, T: Transport> DeployOperation<'a, T> {
    pub fn new(pack: &'a PackOperation<'a>, transport: T) -> Self {
        Self { pack, transport }
    }

    pub fn execute(
        &self,
        kind: ArtifactKind,
        name: &str,
        overrides: InputOverrides,
    ) -> Result<DeployOutcome> {
        let (input, package) = self.pack.prepare(kind, name, overrides)?;

        let archive = TransientFile::create(ARCHIVE_PREFIX, ARCHIVE_SUFFIX)?;
        let summary = package.write_file(archive.path())?;
        self.transport.upload(archive.path())?;
        info!(
            "Deployed {} version {} ({})",
            input.key, input.version, summary.digest
        );

        Ok(DeployOutcome {
            input,
            manifest: package.manifest(),
            summary,
        })
    }
}
