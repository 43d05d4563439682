//! Renamed shim generator CLI

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod config;
mod errors;

use cli::{Cli, Commands};
use config::Config;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        errors::print_error("Command failed", &e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }
    log::debug!("using config {:?}", config);

    match cli.command {
        Commands::Expand { path, format } => {
            commands::expand::execute(&config, &path, format.unwrap_or(config.output_format))
        }
        Commands::Check { path } => commands::check::execute(&config, &path),
        Commands::ParseName { literal } => commands::parse_name::execute(&literal),
    }
}

/// RUST_LOG wins; otherwise warnings only, or debug with --verbose
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}
