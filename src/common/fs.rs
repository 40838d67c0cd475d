//! Common file system operations for placing extracted items

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

/// What happened to one item handed to [`move_no_clobber`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// The destination already existed and was left untouched
    Skipped,
}

/// Copy a directory recursively
pub fn copy_dir_recursive<P1, P2>(src: P1, dst: P2) -> io::Result<()>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
{
    let src_ref = src.as_ref();
    let dst_ref = dst.as_ref();

    if !dst_ref.exists() {
        fs::create_dir_all(dst_ref)?;
    }

    for entry in fs::read_dir(src_ref)? {
        let entry = entry?;
        let entry_path = entry.path();
        let dst_path = dst_ref.join(entry.file_name());

        if entry_path.is_dir() {
            copy_dir_recursive(&entry_path, &dst_path)?;
        } else {
            fs::copy(&entry_path, &dst_path)?;
        }
    }

    Ok(())
}

/// Move a file or directory unless `dst` already exists
///
/// Tries a rename first and falls back to copy plus remove, which covers
/// moves across file systems.
pub fn move_no_clobber(src: &Path, dst: &Path) -> io::Result<MoveOutcome> {
    if dst.exists() {
        return Ok(MoveOutcome::Skipped);
    }
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }

    if let Err(e) = fs::rename(src, dst) {
        debug!(
            "Rename {} -> {} failed ({}), copying instead",
            src.display(),
            dst.display(),
            e
        );
        if src.is_dir() {
            copy_dir_recursive(src, dst)?;
            fs::remove_dir_all(src)?;
        } else {
            fs::copy(src, dst)?;
            fs::remove_file(src)?;
        }
    }
    Ok(MoveOutcome::Moved)
}
