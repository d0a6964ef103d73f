//! Error types for cma-core

use std::path::PathBuf;

/// Result type for cma-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a run configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No file in the environments directory starts with the requested name
    #[error("Sorry, we can't find a matching 'environments/{name}.postman_environment.json'")]
    EnvironmentNotFound {
        /// The environment name that was requested
        name: String,
        /// Environment names that are available, for hinting
        available: Vec<String>,
    },

    /// I/O error while listing or reading a file
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A collection or environment file is not valid JSON
    #[error("Failed to parse JSON at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means the user asked for an environment that does not exist
    pub fn is_environment_not_found(&self) -> bool {
        matches!(self, Self::EnvironmentNotFound { .. })
    }
}

/// Read and parse a JSON file, attaching the path to any failure
pub(crate) fn read_json(path: &std::path::Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| Error::json(path, e))
}
