//! Pack command implementation

use std::path::PathBuf;

use console::Style;

use super::helpers::{open_project, print_manifest};
use crate::cli::PackArgs;
use crate::config::InputOverrides;
use crate::domain::ArtifactKind;
use crate::error::Result;
use crate::operations::{PackOperation, PackOptions};

/// Run pack command
pub fn run(project: Option<PathBuf>, args: PackArgs) -> Result<()> {
    let layout = open_project(project)?;
    let operation = PackOperation::new(&layout)?;

    let options = PackOptions {
        kind: ArtifactKind::from(args.kind),
        name: args.name,
        overrides: InputOverrides {
            version: args.version,
            description: args.description,
        },
        output: args.output,
    };
    let outcome = operation.execute(&options)?;

    println!(
        "{} {} {} v{}",
        Style::new().green().bold().apply_to("Packaged"),
        outcome.input.key.kind.label(false),
        Style::new().bold().yellow().apply_to(&outcome.input.key.name),
        outcome.input.version
    );
    print_manifest(&outcome.manifest);
    println!();
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Archive:"),
        outcome.summary.path.display()
    );
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Digest:"),
        outcome.summary.digest
    );
    println!(
        "  {} {} ({} bytes)",
        Style::new().bold().apply_to("Entries:"),
        outcome.summary.entries,
        outcome.summary.bytes
    );
    Ok(())
}
