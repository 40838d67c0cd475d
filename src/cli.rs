//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::ArtifactKind;

/// sf-registry - LWC component and Apex class packager
///
/// Resolve, package and unpack registry artifacts together with everything they depend on.
#[derive(Parser, Debug)]
#[command(
    name = "sf-registry",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Package LWC components and Apex classes with their dependencies",
    long_about = "sf-registry resolves the transitive dependencies of an LWC component or Apex \
                  class, checks them for forbidden files and missing static resources, and packs \
                  them into a deterministic deployment archive. It also unpacks downloaded \
                  archives into a project without overwriting existing artifacts.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  sf-registry resolve component myCard\n    \
                  sf-registry pack class AccountService --version 1.0.0 --description \"Accounts\"\n    \
                  sf-registry unpack ./myCard-1.0.0.zip"
)]
pub struct Cli {
    /// Project directory to search upward from (defaults to current directory)
    #[arg(long, short = 'p', global = true)]
    pub project: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the ordered dependency manifest of an artifact
    Resolve(ResolveArgs),

    /// Build a deployment archive for an artifact
    Pack(PackArgs),

    /// Extract an archive and place its artifacts in the project
    Unpack(UnpackArgs),
}

/// Artifact kind as written on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    /// LWC component
    Component,
    /// Apex class
    Class,
}

impl From<KindArg> for ArtifactKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Component => ArtifactKind::Component,
            KindArg::Class => ArtifactKind::Class,
        }
    }
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show what a component pulls in:\n    sf-registry resolve component myCard\n\n\
                  Machine-readable output:\n    sf-registry resolve class AccountService --json")]
pub struct ResolveArgs {
    /// Artifact kind
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Artifact name
    pub name: String,

    /// Output the manifest as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the pack command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Pack using registry-meta.json of the component:\n    sf-registry pack component myCard\n\n\
                  Pack with explicit values:\n    sf-registry pack class Repo --version 1.2.0 --description \"Data access\"\n\n\
                  Pack to a chosen path:\n    sf-registry pack component myCard -o myCard.zip")]
pub struct PackArgs {
    /// Artifact kind
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Artifact name
    pub name: String,

    /// Version of the root artifact (x.y.z); overrides registry-meta.json
    #[arg(long)]
    pub version: Option<String>,

    /// Description of the root artifact; overrides registry-meta.json
    #[arg(long)]
    pub description: Option<String>,

    /// Archive path (defaults to a new file in the temp directory)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Arguments for the unpack command
#[derive(Parser, Debug)]
pub struct UnpackArgs {
    /// Archive to extract
    pub archive: PathBuf,

    /// Placement directory (defaults to force-app/main/default of the project)
    #[arg(long, short = 't')]
    pub target: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_pack_args() {
        let cli = Cli::try_parse_from([
            "sf-registry",
            "pack",
            "class",
            "Repo",
            "--version",
            "1.0.0",
            "--description",
            "Data",
            "-p",
            "/tmp/project",
        ])
        .unwrap();
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/project")));
        match cli.command {
            Commands::Pack(args) => {
                assert_eq!(ArtifactKind::from(args.kind), ArtifactKind::Class);
                assert_eq!(args.name, "Repo");
                assert_eq!(args.version.as_deref(), Some("1.0.0"));
                assert!(args.output.is_none());
            }
            other => panic!("Expected pack, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(Cli::try_parse_from(["sf-registry", "resolve", "widget", "x"]).is_err());
    }
}
