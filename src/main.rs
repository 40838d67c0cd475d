//! sf-registry - LWC component and Apex class packager

use clap::Parser;
use env_logger::Env;
use miette::Diagnostic;

use sf_registry::cli::{Cli, Commands};
use sf_registry::commands;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::run(cli.project, args),
        Commands::Pack(args) => commands::pack::run(cli.project, args),
        Commands::Unpack(args) => commands::unpack::run(cli.project, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("  help: {}", help);
        }
        std::process::exit(1);
    }
}
