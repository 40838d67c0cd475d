//! Transient files for packaging and retrieval
//!
//! Temp paths are never created under the current working directory (e.g. when
//! TMPDIR=tmp or TMPDIR=./tmp), and a [`TransientFile`] removes itself on drop
//! unless it was kept.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::{Result, file_write_failed};

/// Prefix of transient deployment archives
pub const ARCHIVE_PREFIX: &str = "sf-deploy-";

/// Returns a directory path suitable for creating temporary files.
/// Never returns a relative path.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// A file path owned by the current operation
///
/// The file is removed when the value is dropped, on both success and
/// failure paths, unless [`TransientFile::keep`] was called.
#[derive(Debug)]
pub struct TransientFile {
    path: PathBuf,
    kept: bool,
}

impl TransientFile {
    /// Reserve a new empty file under [`temp_dir_base`]
    pub fn create(prefix: &str, suffix: &str) -> Result<Self> {
        let base = temp_dir_base();
        let file = tempfile::Builder::new()
            .prefix(prefix)
            .suffix(suffix)
            .tempfile_in(&base)
            .map_err(|e| file_write_failed(&base, e))?;
        let (_, path) = file.keep().map_err(|e| file_write_failed(&base, e))?;
        Ok(Self { path, kept: false })
    }

    /// Take ownership of an existing path
    pub fn adopt(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kept: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stop tracking the file and return its path; the caller now owns cleanup
    pub fn keep(mut self) -> PathBuf {
        self.kept = true;
        std::mem::take(&mut self.path)
    }
}

impl Drop for TransientFile {
    fn drop(&mut self) {
        if self.kept || !self.path.exists() {
            return;
        }
        if let Err(e) = fs::remove_file(&self.path) {
            warn!("Failed to remove {}: {}", self.path.display(), e);
        }
    }
}
