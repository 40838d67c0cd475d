//! Project layout and root discovery
//!
//! ## Project Structure
//!
//! ```text
//! <root>/
//! ├── sfdx-project.json                      # Marks the project root
//! └── force-app/main/default/
//!     ├── lwc/<component>/                   # One directory per component
//!     ├── classes/<dir>/<Class>.cls          # One directory per class
//!     └── staticresources/                   # Shared payloads + descriptors
//! ```

use std::path::{Path, PathBuf};

use crate::error::{RegistryError, Result};

/// File marking the root of a project
pub const PROJECT_MARKER: &str = "sfdx-project.json";

/// Component root, relative to the project root
pub const COMPONENTS_DIR: &str = "force-app/main/default/lwc";

/// Class root, relative to the project root
pub const CLASSES_DIR: &str = "force-app/main/default/classes";

/// Static resource directory, relative to the project root
pub const STATIC_RESOURCES_DIR: &str = "force-app/main/default/staticresources";

/// Parent of the per-kind placement directories, relative to the project root
pub const DEFAULT_TARGET_DIR: &str = "force-app/main/default";

/// Absolute locations of the fixed source roots of one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub components_dir: PathBuf,
    pub classes_dir: PathBuf,
    pub static_resources_dir: PathBuf,
}

impl ProjectLayout {
    /// Layout of a project rooted at `root`, without checking for the marker
    pub fn at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            components_dir: root.join(COMPONENTS_DIR),
            classes_dir: root.join(CLASSES_DIR),
            static_resources_dir: root.join(STATIC_RESOURCES_DIR),
            root,
        }
    }

    /// Walk upward from `start` until a directory holding the project marker is found
    pub fn discover(start: &Path) -> Result<Self> {
        let start = dunce::canonicalize(start).map_err(|e| RegistryError::ProjectNotFound {
            path: format!("{}: {}", start.display(), e),
        })?;
        find_root_from(&start)
            .map(Self::at)
            .ok_or_else(|| RegistryError::ProjectNotFound {
                path: start.display().to_string(),
            })
    }

    /// Default placement target for retrieved artifacts
    pub fn default_target(&self) -> PathBuf {
        self.root.join(DEFAULT_TARGET_DIR)
    }
}

/// Find the nearest ancestor (including `start`) that contains the project marker
pub fn find_root_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(PROJECT_MARKER).is_file() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}
