//! Common test utilities for sf-registry integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use sf_registry::project::{COMPONENTS_DIR, ProjectLayout, STATIC_RESOURCES_DIR, CLASSES_DIR};

/// Route library logs to the test harness
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A throwaway project with a `sfdx-project.json` marker
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::write(path.join("sfdx-project.json"), "{}").expect("Failed to write marker");
        Self { temp, path }
    }

    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout::at(&self.path)
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Create a component with `<name>.<ext>` files
    pub fn component(&self, name: &str, files: &[(&str, &str)]) -> &Self {
        let dir = format!("{COMPONENTS_DIR}/{name}");
        self.write_file(&format!("{dir}/{name}.js-meta.xml"), "<LightningComponentBundle/>");
        if files.is_empty() {
            self.write_file(&format!("{dir}/{name}.js"), "export default class {}");
        }
        for (ext, content) in files {
            self.write_file(&format!("{dir}/{name}.{ext}"), content);
        }
        self
    }

    /// Create a class in its own folder
    pub fn class(&self, name: &str, body: &str) -> &Self {
        let dir = format!("{CLASSES_DIR}/{name}");
        self.write_file(&format!("{dir}/{name}.cls"), body);
        self.write_file(&format!("{dir}/{name}.cls-meta.xml"), "<ApexClass/>");
        self
    }

    /// Create a static resource payload with its descriptor
    pub fn resource(&self, payload: &str, name: &str) -> &Self {
        self.write_file(&format!("{STATIC_RESOURCES_DIR}/{payload}"), "payload");
        self.write_file(
            &format!("{STATIC_RESOURCES_DIR}/{name}.resource-meta.xml"),
            "<StaticResource/>",
        );
        self
    }

    pub fn join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.path.join(path)
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}
