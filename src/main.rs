mod catalog;
mod classify;
mod cli;
mod error;
mod rules;
mod ui;
mod validation;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    debug!(command = ?cli.command, "Running command");

    let result = match cli.command {
        Commands::Classify {
            message,
            kind,
            plain,
            json,
        } => classify::execute(message, kind, plain, json, cli.config, cli.verbose),
        Commands::Validation { file, fields, json } => {
            validation::execute(file, fields, json, cli.config, cli.verbose)
        }
        Commands::Rules => rules::execute(cli.config),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
