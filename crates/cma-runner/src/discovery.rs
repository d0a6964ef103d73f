//! Newman discovery: find the `newman` executable
//!
//! An explicitly configured path wins; otherwise `newman` is looked up on
//! `PATH`.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, RunnerError};

/// Name of the Newman executable
#[cfg(target_os = "windows")]
const NEWMAN: &str = "newman.cmd";
#[cfg(not(target_os = "windows"))]
const NEWMAN: &str = "newman";

/// Find the Newman executable
///
/// Returns `explicit` when given and it exists, otherwise the first `newman`
/// found on `PATH`.
pub fn find_newman(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        // Bare names such as "newman" are left for PATH resolution
        if path.components().count() > 1 {
            return Err(RunnerError::NewmanMissing {
                path: path.to_path_buf(),
            });
        }
        let name = path.to_string_lossy();
        return resolve_path(&name).ok_or(RunnerError::NewmanNotFound);
    }

    resolve_path(NEWMAN).ok_or(RunnerError::NewmanNotFound)
}

/// Resolve a command name to its full path
fn resolve_path(command: &str) -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let which_cmd = "where";
    #[cfg(not(target_os = "windows"))]
    let which_cmd = "which";

    let output = Command::new(which_cmd).arg(command).output().ok()?;

    if output.status.success() {
        let path_str = String::from_utf8_lossy(&output.stdout);
        let first_line = path_str.lines().next()?.trim();
        if !first_line.is_empty() {
            tracing::debug!(command, path = first_line, "Resolved executable");
            return Some(PathBuf::from(first_line));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_existing_file_wins() {
        let temp = TempDir::new().unwrap();
        let newman = temp.path().join("newman");
        std::fs::write(&newman, "").unwrap();

        assert_eq!(find_newman(Some(newman.as_path())).unwrap(), newman);
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let temp = TempDir::new().unwrap();
        let newman = temp.path().join("bin").join("newman");

        let err = find_newman(Some(newman.as_path())).unwrap_err();
        assert!(matches!(err, RunnerError::NewmanMissing { .. }));
    }

    #[test]
    fn test_unknown_bare_name_not_found() {
        let err = find_newman(Some(Path::new("newman-does-not-exist-42"))).unwrap_err();
        assert!(matches!(err, RunnerError::NewmanNotFound));
    }
}
