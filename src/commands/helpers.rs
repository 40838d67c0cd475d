//! Command helper utilities

use std::path::PathBuf;

use console::Style;

use crate::domain::ManifestEntry;
use crate::error::{Result, io_error};
use crate::project::ProjectLayout;

/// Resolve the start directory from the optional `--project` argument
///
/// Falls back to the current directory.
pub fn resolve_start_path(project: Option<PathBuf>) -> Result<PathBuf> {
    match project {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map_err(|e| io_error(format!("Failed to get current directory: {e}"))),
    }
}

/// Find the project containing the start directory
pub fn open_project(project: Option<PathBuf>) -> Result<ProjectLayout> {
    ProjectLayout::discover(&resolve_start_path(project)?)
}

/// Print a manifest as a numbered list
pub fn print_manifest(manifest: &[ManifestEntry]) {
    let dim = Style::new().dim();
    for (i, entry) in manifest.iter().enumerate() {
        let version = entry
            .version
            .as_deref()
            .map(|v| format!(" v{v}"))
            .unwrap_or_default();
        println!(
            "  {}. {} {}{}",
            i + 1,
            dim.apply_to(entry.kind),
            Style::new().bold().yellow().apply_to(&entry.name),
            version
        );
        if !entry.dependencies.is_empty() {
            let deps: Vec<String> = entry
                .dependencies
                .iter()
                .map(|d| d.key().to_string())
                .collect();
            println!("       {} {}", dim.apply_to("depends on:"), deps.join(", "));
        }
        if !entry.staticresources.is_empty() {
            println!(
                "       {} {}",
                dim.apply_to("static resources:"),
                entry.staticresources.join(", ")
            );
        }
    }
}
