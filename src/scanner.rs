//! Source-tree scanning
//!
//! Enumerates the components and classes of a project. Components are the
//! immediate subdirectories of the component root; classes are `.cls` files
//! one level below the class root, mapped to the directory holding them.
//!
//! An absent root yields an empty set so that packaging a class in a project
//! without components remains valid. An unreadable root is a scan failure.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use rayon::prelude::*;

use crate::domain::{ArtifactKey, ArtifactKind};
use crate::error::{Result, artifact_not_found, scan_failed, unresolved_directory};
use crate::project::ProjectLayout;

/// Extension of class source files
pub const CLASS_EXTENSION: &str = "cls";

/// Every artifact known to one project, built once per run
#[derive(Debug, Clone, Default)]
pub struct SourceIndex {
    components_dir: PathBuf,
    components: Vec<String>,
    component_set: HashSet<String>,
    classes: Vec<String>,
    class_dirs: HashMap<String, PathBuf>,
}

impl SourceIndex {
    /// Build an index from explicit name sets
    pub fn new(
        components_dir: impl Into<PathBuf>,
        components: Vec<String>,
        class_dirs: Vec<(String, PathBuf)>,
    ) -> Self {
        let mut classes = Vec::with_capacity(class_dirs.len());
        let mut dirs: HashMap<String, PathBuf> = HashMap::with_capacity(class_dirs.len());
        for (name, dir) in class_dirs {
            if dirs.contains_key(&name) {
                warn!(
                    "Class '{}' found in more than one directory, keeping {}",
                    name,
                    dirs[&name].display()
                );
                continue;
            }
            classes.push(name.clone());
            dirs.insert(name, dir);
        }
        Self {
            components_dir: components_dir.into(),
            component_set: components.iter().cloned().collect(),
            components,
            classes,
            class_dirs: dirs,
        }
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Known names of one kind, in scan order
    pub fn names(&self, kind: ArtifactKind) -> &[String] {
        match kind {
            ArtifactKind::Component => &self.components,
            ArtifactKind::Class => &self.classes,
        }
    }

    pub fn contains(&self, key: &ArtifactKey) -> bool {
        match key.kind {
            ArtifactKind::Component => self.component_set.contains(&key.name),
            ArtifactKind::Class => self.class_dirs.contains_key(&key.name),
        }
    }

    /// Fail unless the artifact is part of this project
    pub fn require(&self, key: &ArtifactKey) -> Result<()> {
        if self.contains(key) {
            Ok(())
        } else {
            Err(artifact_not_found(key.kind, key.name.clone()))
        }
    }

    /// Source directory of an artifact
    pub fn locate(&self, key: &ArtifactKey) -> Result<PathBuf> {
        match key.kind {
            ArtifactKind::Component => Ok(self.components_dir.join(&key.name)),
            ArtifactKind::Class => self
                .class_dirs
                .get(&key.name)
                .cloned()
                .ok_or_else(|| unresolved_directory(key.name.clone())),
        }
    }
}

/// Scan both source roots of a project concurrently
pub fn scan(layout: &ProjectLayout) -> Result<SourceIndex> {
    let (components, classes) = rayon::join(
        || list_dir_names(&layout.components_dir),
        || find_classes(&layout.classes_dir),
    );
    let index = SourceIndex::new(&layout.components_dir, components?, classes?);
    debug!(
        "Scanned {} components and {} classes under {}",
        index.components().len(),
        index.classes().len(),
        layout.root.display()
    );
    Ok(index)
}

/// Names of the immediate subdirectories of `base`, sorted
///
/// A missing `base` yields an empty list.
pub fn list_dir_names(base: &Path) -> Result<Vec<String>> {
    if !base.exists() {
        return Ok(Vec::new());
    }
    let entries = fs::read_dir(base)
        .map_err(|e| scan_failed(base.display().to_string(), e.to_string()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| scan_failed(base.display().to_string(), e.to_string()))?;
        let is_dir = entry
            .file_type()
            .map_err(|e| scan_failed(entry.path().display().to_string(), e.to_string()))?
            .is_dir();
        if is_dir {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Classes under `base`, as `(class name, containing directory)` pairs
fn find_classes(base: &Path) -> Result<Vec<(String, PathBuf)>> {
    let class_dirs = list_dir_names(base)?;

    let per_dir: Vec<Vec<(String, PathBuf)>> = class_dirs
        .par_iter()
        .map(|dir_name| classes_in_dir(&base.join(dir_name)))
        .collect::<Result<_>>()?;

    Ok(per_dir.into_iter().flatten().collect())
}

fn classes_in_dir(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let entries =
        fs::read_dir(dir).map_err(|e| scan_failed(dir.display().to_string(), e.to_string()))?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| scan_failed(dir.display().to_string(), e.to_string()))?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == CLASS_EXTENSION) {
            if let Some(stem) = path.file_stem() {
                found.push((stem.to_string_lossy().into_owned(), dir.to_path_buf()));
            }
        }
    }
    found.sort();
    Ok(found)
}
