//! Forbidden file detection
//!
//! An artifact directory must not carry executables or scripts. The walk is
//! sequential and stops at the first violation; the violation aborts the
//! whole packaging operation.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, forbidden_file};

/// Extensions (lowercase, without the dot) that may not appear in an artifact
pub const FORBIDDEN_EXTENSIONS: &[&str] = &[
    "sh", "bash", "zsh", "bat", "cmd", "ps1", "exe", "scr", "vbs", "msi", "php", "py", "pl", "rb",
    "jar", "com", "wsf",
];

/// Lowercased extension of `path` if it is on the denylist
pub fn forbidden_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    FORBIDDEN_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Walk `dir` recursively and fail on the first forbidden file
///
/// Entries are visited in file-name order so the reported file is stable.
pub fn check_directory(dir: &Path) -> Result<()> {
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        if let Some(ext) = forbidden_extension(entry.path()) {
            return Err(forbidden_file(entry.path().display().to_string(), ext));
        }
    }
    Ok(())
}
