//! Pack operation
//!
//! Scan → root input → resolve → validate resources → write archive.

use std::path::PathBuf;

use log::info;

use crate::config::{InputOverrides, RootInput};
use crate::domain::{ArtifactKey, ArtifactKind, ManifestEntry};
use crate::error::Result;
use crate::packager::{Package, PackageSummary};
use crate::project::ProjectLayout;
use crate::resolver::{Closure, Resolver};
use crate::scanner::{self, SourceIndex};
use crate::temp::{ARCHIVE_PREFIX, TransientFile};

/// Archive file suffix
pub const ARCHIVE_SUFFIX: &str = ".zip";

/// What to pack and where to put it
#[derive(Debug, Clone)]
pub struct PackOptions {
    pub kind: ArtifactKind,
    pub name: String,
    pub overrides: InputOverrides,
    /// Destination path; a transient path under the temp dir when absent
    pub output: Option<PathBuf>,
}

/// Result of a successful pack
#[derive(Debug, Clone)]
pub struct PackOutcome {
    pub input: RootInput,
    pub manifest: Vec<ManifestEntry>,
    pub summary: PackageSummary,
}

/// Packaging against one scanned project
#[derive(Debug)]
pub struct PackOperation<'a> {
    layout: &'a ProjectLayout,
    index: SourceIndex,
}

impl<'a> PackOperation<'a> {
    /// Scan the project once for this operation
    pub fn new(layout: &'a ProjectLayout) -> Result<Self> {
        Ok(Self {
            layout,
            index: scanner::scan(layout)?,
        })
    }

    pub fn index(&self) -> &SourceIndex {
        &self.index
    }

    pub fn layout(&self) -> &ProjectLayout {
        self.layout
    }

    /// Resolve the closure of one artifact
    pub fn resolve(&self, key: &ArtifactKey, version: Option<&str>) -> Result<Closure> {
        Resolver::new(&self.index)?.resolve(key, version)
    }

    /// Resolve root input and closure, and validate static resources
    pub fn prepare(
        &self,
        kind: ArtifactKind,
        name: &str,
        overrides: InputOverrides,
    ) -> Result<(RootInput, Package)> {
        let input = RootInput::resolve(&self.index, kind, name, overrides)?;
        let closure = self.resolve(&input.key, Some(&input.version))?;
        let package = Package::prepare(self.layout, closure, input.metadata())?;
        Ok((input, package))
    }

    /// Build the archive described by `options`
    ///
    /// Without an explicit output the archive is written to a fresh
    /// `sf-deploy-*.zip` under the temp dir and left there for the caller.
    pub fn execute(&self, options: &PackOptions) -> Result<PackOutcome> {
        let (input, package) =
            self.prepare(options.kind, &options.name, options.overrides.clone())?;

        let summary = match &options.output {
            Some(path) => package.write_file(path)?,
            None => {
                let transient = TransientFile::create(ARCHIVE_PREFIX, ARCHIVE_SUFFIX)?;
                let summary = package.write_file(transient.path())?;
                transient.keep();
                summary
            }
        };
        info!("Wrote {} to {}", input.key, summary.path.display());

        Ok(PackOutcome {
            input,
            manifest: package.manifest(),
            summary,
        })
    }
}
