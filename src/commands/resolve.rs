//! Resolve command implementation
//!
//! Prints the ordered dependency manifest of one artifact without writing
//! anything.

use std::path::PathBuf;

use console::Style;

use super::helpers::{open_project, print_manifest};
use crate::cli::ResolveArgs;
use crate::domain::{ArtifactKey, ArtifactKind};
use crate::error::{Result, archive_failed};
use crate::operations::PackOperation;

/// Run resolve command
pub fn run(project: Option<PathBuf>, args: ResolveArgs) -> Result<()> {
    let layout = open_project(project)?;
    let operation = PackOperation::new(&layout)?;

    let key = ArtifactKey::new(ArtifactKind::from(args.kind), args.name);
    let closure = operation.resolve(&key, None)?;
    let manifest = closure.manifest();

    if args.json {
        let json = serde_json::to_string_pretty(&manifest)
            .map_err(|e| archive_failed(format!("cannot encode manifest: {e}")))?;
        println!("{json}");
        return Ok(());
    }

    println!(
        "{} {} ({} artifacts):",
        Style::new().bold().apply_to("Closure of"),
        key,
        manifest.len()
    );
    print_manifest(&manifest);

    let resources = closure.static_resources();
    if !resources.is_empty() {
        println!();
        println!(
            "{} {}",
            Style::new().bold().apply_to("Static resources:"),
            resources.join(", ")
        );
    }
    Ok(())
}
