//! Charging Module API test launcher
//!
//! Picks the Postman collection and environment file for the requested
//! environment and runs them with Newman.

mod cli;
mod commands;
mod error;
mod logging;

use std::path::PathBuf;

use clap::Parser;
use cma_core::ProjectLayout;
use cma_runner::NewmanRunner;
use colored::Colorize;

use cli::Cli;
use commands::RunRequest;
use error::{CliError, Result};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        if let Some(hint) = e.hint() {
            eprintln!("{}", hint.dimmed());
        }
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("Failed to initialise logging: {e}")))?;

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let layout = ProjectLayout::new(&root);
    let mut stdout = std::io::stdout().lock();

    if cli.list {
        return commands::run_list(&layout, &mut stdout);
    }

    let request = RunRequest {
        environment: cli
            .environment
            .ok_or_else(|| CliError::user("--environment is required"))?,
        reporters: cli.reporters,
        folders: cli.folders,
    };

    if cli.dry_run {
        return commands::run_dry(&layout, &request, &mut stdout);
    }

    let runner = newman_runner(root, cli.newman);
    commands::run_tests(&layout, &request, &runner, &mut stdout)
}

fn newman_runner(root: PathBuf, newman: Option<PathBuf>) -> NewmanRunner {
    let runner = NewmanRunner::new(root);
    match newman {
        Some(path) => runner.with_newman(path),
        None => runner,
    }
}
