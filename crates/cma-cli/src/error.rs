//! Error types for cma-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from cma-core
    #[error(transparent)]
    Core(#[from] cma_core::Error),

    /// Error from cma-runner
    #[error(transparent)]
    Runner(#[from] cma_runner::RunnerError),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Process exit status for this error
    ///
    /// A failed newman run keeps newman's own status; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Runner(e) => e.exit_code(),
            _ => 1,
        }
    }

    /// Extra guidance printed after the error, if any
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Core(cma_core::Error::EnvironmentNotFound { available, .. })
                if !available.is_empty() =>
            {
                Some(format!("Available environments: {}", available.join(", ")))
            }
            _ => None,
        }
    }
}
