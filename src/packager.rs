//! Deployment package writer
//!
//! A package is a ZIP archive laid out as:
//!
//! ```text
//! <artifact>/...            one directory per manifest entry, in manifest order
//! staticresources/...       payload and descriptor of every referenced resource
//! metadata.json             root metadata
//! registry-deps.json        ordered manifest
//! ```
//!
//! Entries are compressed at the maximum deflate level and stamped with a
//! fixed timestamp, so the same source tree always produces the same bytes.
//! Static resources are validated before the first byte is written.

use std::fs::{self, File};
use std::io::{self, BufWriter, Seek, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::domain::{ManifestEntry, PackageMetadata};
use crate::error::{Result, archive_failed, file_read_failed, file_write_failed};
use crate::hash;
use crate::progress::ProgressDisplay;
use crate::project::ProjectLayout;
use crate::resolver::Closure;
use crate::resources::{self, StaticResource};

/// Root metadata document
pub const METADATA_FILE: &str = "metadata.json";

/// Ordered manifest document
pub const DEPS_FILE: &str = "registry-deps.json";

/// Archive directory holding static resources
pub const RESOURCES_DIR: &str = "staticresources";

const COMPRESSION_LEVEL: i64 = 9;

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(COMPRESSION_LEVEL))
        .last_modified_time(zip::DateTime::default())
}

/// Archive entry name for `path` relative to `base`, under `prefix`
fn entry_name(prefix: &str, base: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    let mut name = prefix.to_string();
    for component in relative.components() {
        name.push('/');
        name.push_str(&component.as_os_str().to_string_lossy());
    }
    name
}

/// Result of writing a package to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSummary {
    pub path: PathBuf,
    pub digest: String,
    pub entries: usize,
    pub bytes: u64,
}

/// A validated closure ready to be written
#[derive(Debug, Clone)]
pub struct Package {
    metadata: PackageMetadata,
    closure: Closure,
    resources: Vec<StaticResource>,
}

impl Package {
    /// Validate the closure's static resources against the project
    pub fn prepare(
        layout: &ProjectLayout,
        closure: Closure,
        metadata: PackageMetadata,
    ) -> Result<Self> {
        let resources =
            resources::validate(&layout.static_resources_dir, &closure.static_resources())?;
        Ok(Self {
            metadata,
            closure,
            resources,
        })
    }

    pub fn metadata(&self) -> &PackageMetadata {
        &self.metadata
    }

    pub fn manifest(&self) -> Vec<ManifestEntry> {
        self.closure.manifest()
    }

    pub fn resources(&self) -> &[StaticResource] {
        &self.resources
    }

    /// Write the archive to any seekable sink, returning the sink and entry count
    pub fn write_to<W: Write + Seek>(
        &self,
        sink: W,
        progress: &ProgressDisplay,
    ) -> Result<(W, usize)> {
        let mut zip = ZipWriter::new(sink);
        let options = entry_options();
        let mut entries = 0;

        for artifact in self.closure.artifacts() {
            progress.update(&artifact.entry.name);
            entries += add_directory(&mut zip, &artifact.directory, &artifact.entry.name, options)?;
            progress.inc();
        }

        for resource in &self.resources {
            progress.update(&resource.name);
            for file in [resource.payload.as_path(), resource.descriptor.as_path()] {
                let name = entry_name(RESOURCES_DIR, file.parent().unwrap_or(file), file);
                add_file(&mut zip, file, name, options)?;
                entries += 1;
            }
            progress.inc();
        }

        let metadata = serde_json::to_vec_pretty(&self.metadata)
            .map_err(|e| archive_failed(format!("cannot encode {METADATA_FILE}: {e}")))?;
        zip.start_file(METADATA_FILE, options)?;
        zip.write_all(&metadata)?;

        let manifest = serde_json::to_vec_pretty(&self.closure.manifest())
            .map_err(|e| archive_failed(format!("cannot encode {DEPS_FILE}: {e}")))?;
        zip.start_file(DEPS_FILE, options)?;
        zip.write_all(&manifest)?;
        entries += 2;
        progress.inc();

        let sink = zip.finish()?;
        Ok((sink, entries))
    }

    /// Write the archive to `path`
    ///
    /// A failed write leaves whatever was written in place; removing it is up
    /// to the caller.
    pub fn write_file(&self, path: &Path) -> Result<PackageSummary> {
        let steps = (self.closure.len() + self.resources.len() + 1) as u64;
        let progress = ProgressDisplay::new(steps);

        let file = File::create(path).map_err(|e| file_write_failed(path, e))?;
        let written = self.write_to(BufWriter::new(file), &progress);
        let (writer, entries) = match written {
            Ok(done) => done,
            Err(e) => {
                progress.abandon();
                return Err(e);
            }
        };
        writer
            .into_inner()
            .map_err(|e| file_write_failed(path, e.error()))?
            .sync_all()
            .map_err(|e| file_write_failed(path, e))?;
        progress.finish();

        let bytes = fs::metadata(path)
            .map_err(|e| file_read_failed(path, e))?
            .len();
        let digest = hash::hash_file(path)?;
        info!(
            "Packaged {} ({} artifacts, {} entries, {} bytes)",
            self.metadata.name,
            self.closure.len(),
            entries,
            bytes
        );

        Ok(PackageSummary {
            path: path.to_path_buf(),
            digest,
            entries,
            bytes,
        })
    }
}

/// Add every file under `dir` as `<prefix>/<relative path>`, in sorted order
fn add_directory<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    dir: &Path,
    prefix: &str,
    options: SimpleFileOptions,
) -> Result<usize> {
    let mut count = 0;
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        add_file(zip, entry.path(), entry_name(prefix, dir, entry.path()), options)?;
        count += 1;
    }
    debug!("Added {} files from {}", count, dir.display());
    Ok(count)
}

fn add_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    path: &Path,
    name: String,
    options: SimpleFileOptions,
) -> Result<()> {
    let mut source = File::open(path).map_err(|e| file_read_failed(path, e))?;
    zip.start_file(name, options)?;
    io::copy(&mut source, zip).map_err(|e| file_read_failed(path, e))?;
    Ok(())
}
