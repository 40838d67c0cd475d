//! Test fixtures for building throwaway projects.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::create_project;
//!
//! #[test]
//! fn my_test() {
//!     let (temp, layout) = create_project();
//!     write_component(&layout, "card", &[("html", "<c-badge></c-badge>")]);
//!     write_component(&layout, "badge", &[]);
//! }
//! ```

use std::path::PathBuf;

use tempfile::TempDir;

use crate::project::{PROJECT_MARKER, ProjectLayout};
use crate::resources::descriptor_name;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Create a temp directory holding an empty project (marker file only).
///
/// # Panics
///
/// Panics if the project cannot be created.
#[must_use]
pub fn create_project() -> (TempDir, ProjectLayout) {
    let temp = create_temp_dir();
    std::fs::write(temp.path().join(PROJECT_MARKER), "{}").expect("Failed to write marker");
    let layout = ProjectLayout::at(temp.path());
    (temp, layout)
}

/// Create a component directory with `<name>.<ext>` files.
///
/// An empty file list still creates the directory and a `.js` file.
///
/// # Panics
///
/// Panics if any file cannot be written.
pub fn write_component(layout: &ProjectLayout, name: &str, files: &[(&str, &str)]) -> PathBuf {
    let dir = layout.components_dir.join(name);
    std::fs::create_dir_all(&dir).expect("Failed to create component directory");
    if files.is_empty() {
        std::fs::write(dir.join(format!("{name}.js")), "export default class {}")
            .expect("Failed to write component file");
    }
    for (ext, content) in files {
        std::fs::write(dir.join(format!("{name}.{ext}")), content)
            .expect("Failed to write component file");
    }
    dir
}

/// Create a class file `<folder>/<name>.cls` under the class root.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_class(layout: &ProjectLayout, folder: &str, name: &str, body: &str) -> PathBuf {
    let dir = layout.classes_dir.join(folder);
    std::fs::create_dir_all(&dir).expect("Failed to create class directory");
    std::fs::write(dir.join(format!("{name}.cls")), body).expect("Failed to write class file");
    dir
}

/// Create a static resource payload file plus its descriptor.
///
/// # Panics
///
/// Panics if any file cannot be written.
pub fn write_resource(layout: &ProjectLayout, payload: &str, name: &str) {
    let dir = &layout.static_resources_dir;
    std::fs::create_dir_all(dir).expect("Failed to create static resource directory");
    std::fs::write(dir.join(payload), "payload").expect("Failed to write payload");
    std::fs::write(dir.join(descriptor_name(name)), "<StaticResource/>")
        .expect("Failed to write descriptor");
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_project_has_marker() {
        let (temp, layout) = create_project();
        assert!(temp.path().join(PROJECT_MARKER).exists());
        assert_eq!(layout.root, temp.path());
    }

    #[test]
    fn test_write_component_defaults_to_script() {
        let (_temp, layout) = create_project();
        let dir = write_component(&layout, "card", &[]);
        assert!(dir.join("card.js").exists());
    }
}
