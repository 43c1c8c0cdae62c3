//! driftfix CLI - reconcile preferences against an adjustment set.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.reconcile_config();
    let action = cli.command.action();
    debug!(%action, store = %cli.store.display(), ?config, "starting");

    let result = match cli.command {
        Commands::Get {
            adjustments,
            ids_only,
            format,
        } => commands::get::run(cli.store, config, adjustments, ids_only, format),

        Commands::FixBreaking {
            adjustments,
            filter,
        }
        | Commands::FixAll {
            adjustments,
            filter,
        } => commands::fix::run(cli.store, config, action, adjustments, filter, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}
