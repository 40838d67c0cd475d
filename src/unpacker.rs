//! Archive extraction and placement
//!
//! A downloaded package is extracted into a fresh temporary directory. Each
//! top-level item directory is classified by its own files and moved under
//! `classes/` or `lwc/` of the target; static resources go to
//! `staticresources/` file by file. Existing destinations are never
//! overwritten: the item is skipped with a warning and the rest continue.

use std::fs::{self, File};
use std::io::{self, Read, Seek};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rayon::prelude::*;
use tempfile::TempDir;
use zip::ZipArchive;

use crate::common::fs::{MoveOutcome, move_no_clobber};
use crate::domain::ArtifactKind;
use crate::error::{
    RegistryError, Result, archive_failed, file_read_failed, file_write_failed,
    unrecognized_artifact,
};
use crate::packager::RESOURCES_DIR;
use crate::scanner::{CLASS_EXTENSION, list_dir_names};
use crate::temp::temp_dir_base;

const COMPONENT_EXTENSIONS: &[&str] = &["js", "ts"];

/// An item moved into the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedItem {
    pub name: String,
    pub kind: ArtifactKind,
    pub destination: PathBuf,
}

/// An item that failed to place; siblings were still processed
#[derive(Debug)]
pub struct ItemFailure {
    pub name: String,
    pub error: RegistryError,
}

/// Outcome of placing one extracted package
#[derive(Debug, Default)]
pub struct UnpackReport {
    pub placed: Vec<PlacedItem>,
    /// Items whose destination already existed
    pub skipped: Vec<PlacedItem>,
    pub resources_placed: Vec<String>,
    pub resources_skipped: Vec<String>,
    pub failures: Vec<ItemFailure>,
}

impl UnpackReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

enum ItemResult {
    Placed(PlacedItem),
    Skipped(PlacedItem),
    Failed(ItemFailure),
}

/// Extract every entry of a ZIP archive under `dest`
///
/// Entries whose names would escape `dest` abort the extraction. Returns the
/// number of files written.
pub fn extract<R: Read + Seek>(reader: R, dest: &Path) -> Result<usize> {
    let mut archive = ZipArchive::new(reader)?;
    let mut count = 0;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let relative = entry
            .enclosed_name()
            .ok_or_else(|| archive_failed(format!("unsafe entry path '{}'", entry.name())))?;
        let output_path = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&output_path).map_err(|e| file_write_failed(&output_path, e))?;
            continue;
        }
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| file_write_failed(parent, e))?;
        }
        let mut outfile =
            File::create(&output_path).map_err(|e| file_write_failed(&output_path, e))?;
        io::copy(&mut entry, &mut outfile).map_err(|e| file_write_failed(&output_path, e))?;
        count += 1;
    }

    debug!("Extracted {} files into {}", count, dest.display());
    Ok(count)
}

/// Extract an archive file under `dest`
pub fn extract_file(archive: &Path, dest: &Path) -> Result<usize> {
    let file = File::open(archive).map_err(|e| file_read_failed(archive, e))?;
    extract(io::BufReader::new(file), dest)
}

/// Infer the kind of an extracted item from its own files
///
/// A class source file wins over script files.
pub fn classify(dir: &Path) -> Result<ArtifactKind> {
    let mut has_script = false;
    for entry in fs::read_dir(dir).map_err(|e| file_read_failed(dir, e))? {
        let entry = entry.map_err(|e| file_read_failed(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(&format!(".{CLASS_EXTENSION}")) {
            return Ok(ArtifactKind::Class);
        }
        if COMPONENT_EXTENSIONS
            .iter()
            .any(|ext| name.ends_with(&format!(".{ext}")))
        {
            has_script = true;
        }
    }
    if has_script {
        Ok(ArtifactKind::Component)
    } else {
        Err(unrecognized_artifact(dir.display().to_string()))
    }
}

fn place_item(extracted: &Path, target: &Path, name: &str) -> ItemResult {
    let source = extracted.join(name);
    let kind = match classify(&source) {
        Ok(kind) => kind,
        Err(error) => {
            return ItemResult::Failed(ItemFailure {
                name: name.to_string(),
                error,
            });
        }
    };
    let destination = target.join(kind.destination_dir()).join(name);
    let item = PlacedItem {
        name: name.to_string(),
        kind,
        destination,
    };

    match move_no_clobber(&source, &item.destination) {
        Ok(MoveOutcome::Moved) => {
            info!("{} '{}' placed in {}", kind, name, item.destination.display());
            ItemResult::Placed(item)
        }
        Ok(MoveOutcome::Skipped) => {
            warn!(
                "An item named '{}' already exists at {}, skipping",
                name,
                item.destination.display()
            );
            ItemResult::Skipped(item)
        }
        Err(e) => ItemResult::Failed(ItemFailure {
            name: name.to_string(),
            error: file_write_failed(&item.destination, e),
        }),
    }
}

fn place_resources(extracted: &Path, target: &Path, report: &mut UnpackReport) -> Result<()> {
    let source_dir = extracted.join(RESOURCES_DIR);
    if !source_dir.is_dir() {
        return Ok(());
    }
    let target_dir = target.join(RESOURCES_DIR);

    let mut files = Vec::new();
    for entry in fs::read_dir(&source_dir).map_err(|e| file_read_failed(&source_dir, e))? {
        let entry = entry.map_err(|e| file_read_failed(&source_dir, e))?;
        files.push(entry.file_name().to_string_lossy().into_owned());
    }
    files.sort();

    for file in files {
        let destination = target_dir.join(&file);
        match move_no_clobber(&source_dir.join(&file), &destination) {
            Ok(MoveOutcome::Moved) => {
                info!("Static resource '{}' placed in {}", file, target_dir.display());
                report.resources_placed.push(file);
            }
            Ok(MoveOutcome::Skipped) => {
                warn!("Static resource '{}' already present, skipping", file);
                report.resources_skipped.push(file);
            }
            Err(e) => report.failures.push(ItemFailure {
                name: format!("{RESOURCES_DIR}/{file}"),
                error: file_write_failed(&destination, e),
            }),
        }
    }
    Ok(())
}

/// Place every item of an extracted package under `target`
///
/// Items are placed concurrently; conflicts become skips and per-item errors
/// are collected without stopping siblings. Static resources are placed
/// afterwards regardless of item outcomes.
pub fn place_extracted(extracted: &Path, target: &Path) -> Result<UnpackReport> {
    let names: Vec<String> = list_dir_names(extracted)?
        .into_iter()
        .filter(|name| name != RESOURCES_DIR)
        .collect();

    let results: Vec<ItemResult> = names
        .par_iter()
        .map(|name| place_item(extracted, target, name))
        .collect();

    let mut report = UnpackReport::default();
    for result in results {
        match result {
            ItemResult::Placed(item) => report.placed.push(item),
            ItemResult::Skipped(item) => report.skipped.push(item),
            ItemResult::Failed(failure) => report.failures.push(failure),
        }
    }

    place_resources(extracted, target, &mut report)?;
    Ok(report)
}

/// Extract an archive into a temporary directory and place its contents
///
/// The temporary directory is removed on both success and failure.
pub fn unpack<R: Read + Seek>(reader: R, target: &Path) -> Result<UnpackReport> {
    let base = temp_dir_base();
    let staging = TempDir::new_in(&base).map_err(|e| file_write_failed(&base, e))?;
    extract(reader, staging.path())?;
    place_extracted(staging.path(), target)
}

/// [`unpack`] reading from an archive file
pub fn unpack_file(archive: &Path, target: &Path) -> Result<UnpackReport> {
    let file = File::open(archive).map_err(|e| file_read_failed(archive, e))?;
    unpack(io::BufReader::new(file), target)
}
