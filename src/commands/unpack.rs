//! Unpack command implementation
//!
//! Existing artifacts are reported as skipped. Items that could not be placed
//! are listed and make the command fail after all other items were handled.

use std::path::PathBuf;

use console::Style;

use super::helpers::open_project;
use crate::cli::UnpackArgs;
use crate::error::{Result, archive_failed};
use crate::unpacker::{self, UnpackReport};

/// Run unpack command
pub fn run(project: Option<PathBuf>, args: UnpackArgs) -> Result<()> {
    let target = match args.target {
        Some(target) => target,
        None => open_project(project)?.default_target(),
    };

    let report = unpacker::unpack_file(&args.archive, &target)?;
    print_report(&report);

    if report.is_success() {
        Ok(())
    } else {
        Err(archive_failed(format!(
            "{} item(s) could not be placed",
            report.failures.len()
        )))
    }
}

fn print_report(report: &UnpackReport) {
    let ok = Style::new().green().bold();
    let warn = Style::new().yellow().bold();
    let err = Style::new().red().bold();

    for item in &report.placed {
        println!(
            "{} {} '{}' -> {}",
            ok.apply_to("placed"),
            item.kind.label(false),
            item.name,
            item.destination.display()
        );
    }
    for item in &report.skipped {
        println!(
            "{} {} '{}' already exists at {}",
            warn.apply_to("skipped"),
            item.kind.label(false),
            item.name,
            item.destination.display()
        );
    }
    for file in &report.resources_placed {
        println!("{} static resource '{}'", ok.apply_to("placed"), file);
    }
    for file in &report.resources_skipped {
        println!(
            "{} static resource '{}' already present",
            warn.apply_to("skipped"),
            file
        );
    }
    for failure in &report.failures {
        eprintln!("{} {}: {}", err.apply_to("failed"), failure.name, failure.error);
    }
}
