//! Command implementations for cma-cli

use std::io::Write;

use cma_core::{EnvironmentIndex, ProjectLayout, RunConfigResolver};
use cma_runner::CollectionRunner;
use colored::Colorize;

use crate::error::Result;

/// Values taken from the command line for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub environment: String,
    pub reporters: Vec<String>,
    pub folders: Vec<String>,
}

/// Print the environment names found in `environments/`
pub fn run_list(layout: &ProjectLayout, out: &mut impl Write) -> Result<()> {
    let index = EnvironmentIndex::scan(&layout.environments_dir())?;
    for name in index.names() {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

/// Resolve the run configuration and print it as JSON
pub fn run_dry(layout: &ProjectLayout, request: &RunRequest, out: &mut impl Write) -> Result<()> {
    let config = RunConfigResolver::new(layout.clone()).resolve(
        &request.environment,
        request.reporters.clone(),
        request.folders.clone(),
    )?;
    serde_json::to_writer_pretty(&mut *out, &config)?;
    writeln!(out)?;
    Ok(())
}

/// Resolve the run configuration and hand it to `runner`
pub fn run_tests(
    layout: &ProjectLayout,
    request: &RunRequest,
    runner: &dyn CollectionRunner,
    out: &mut impl Write,
) -> Result<()> {
    let config = RunConfigResolver::new(layout.clone()).resolve(
        &request.environment,
        request.reporters.clone(),
        request.folders.clone(),
    )?;

    tracing::debug!(
        environment = %request.environment,
        reporters = ?config.reporters(),
        folders = ?config.folders(),
        "Starting collection run"
    );
    runner.run(&config)?;

    writeln!(out, "{}", "Collection run complete!".green())?;
    Ok(())
}
