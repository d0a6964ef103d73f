//! Newman command line construction and execution
//!
//! Newman is invoked as `newman run <collection> --environment <file> ...`
//! with stdio inherited, so its own console reporter writes straight to the
//! terminal.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use cma_core::RunConfiguration;
use serde_json::Value;

use crate::error::{Result, RunnerError};

/// Build the arguments for `newman run`
///
/// Reporter options are only passed for reporters that were selected; an
/// empty reporter list leaves Newman on its own default.
pub fn newman_args(
    config: &RunConfiguration,
    collection: &Path,
    environment: &Path,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "run".into(),
        collection.into(),
        "--environment".into(),
        environment.into(),
    ];

    for folder in config.folders() {
        args.push("--folder".into());
        args.push(folder.into());
    }

    if !config.reporters().is_empty() {
        args.push("--reporters".into());
        args.push(config.reporters().join(",").into());
    }

    for (reporter, options) in config.reporter_options().iter() {
        if !config.reporters().contains(reporter) {
            continue;
        }
        for (key, value) in options {
            let flag = format!("--reporter-{reporter}-{key}");
            match value {
                Value::Bool(true) => args.push(flag.into()),
                Value::Bool(false) | Value::Null => {}
                Value::String(s) => {
                    args.push(flag.into());
                    args.push(s.into());
                }
                other => {
                    args.push(flag.into());
                    args.push(other.to_string().into());
                }
            }
        }
    }

    args
}

/// Run newman and wait for it to finish
pub fn run_newman(newman: &Path, working_dir: &Path, args: &[OsString]) -> Result<()> {
    tracing::debug!(newman = %newman.display(), ?args, "Starting newman");

    let status = Command::new(newman)
        .current_dir(working_dir)
        .args(args)
        .status()
        .map_err(RunnerError::Io)?;

    if status.success() {
        Ok(())
    } else {
        let code = status.code().unwrap_or(1);
        Err(RunnerError::RunFailed { code })
    }
}
