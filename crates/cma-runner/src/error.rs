//! Error types for runner operations

use std::path::PathBuf;

/// Errors that can occur while handing a run to Newman
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Newman executable not found
    #[error("newman not found. Install it with 'npm install -g newman newman-reporter-htmlextra' or pass --newman.")]
    NewmanNotFound,

    /// Newman was given explicitly but the path does not exist
    #[error("newman not found at {path}")]
    NewmanMissing {
        /// The path that was configured
        path: PathBuf,
    },

    /// I/O error while preparing or starting the run
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing the collection or environment
    #[error("Failed to write run input: {0}")]
    Json(#[from] serde_json::Error),

    /// Newman exited with non-zero status
    #[error("Collection run failed (exit code {code})")]
    RunFailed {
        /// Exit code from newman, 1 if it was killed by a signal
        code: i32,
    },
}

impl RunnerError {
    /// Process exit status this error should end the program with
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::RunFailed { code } => *code,
            _ => 1,
        }
    }
}

/// Result type alias for runner operations
pub type Result<T> = std::result::Result<T, RunnerError>;
