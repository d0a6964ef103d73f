//! Choice of the bundled collection to run.

use serde_json::Value;

use crate::error::{Result, read_json};
use crate::layout::{ProjectLayout, ProjectPath};

/// Environment name used by CI to check the project builds and runs
pub const CI_ENVIRONMENT: &str = "example";

/// Which bundled collection a run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    /// The full Charging Module API collection
    Primary,
    /// The small smoke-test collection run in CI
    Ci,
}

impl CollectionKind {
    pub fn for_environment(environment: &str) -> Self {
        if environment == CI_ENVIRONMENT {
            Self::Ci
        } else {
            Self::Primary
        }
    }

    pub fn project_path(&self) -> ProjectPath {
        match self {
            Self::Primary => ProjectPath::PrimaryCollection,
            Self::Ci => ProjectPath::CiCollection,
        }
    }
}

/// Read the collection to run against `environment`
pub fn select_collection(layout: &ProjectLayout, environment: &str) -> Result<Value> {
    let kind = CollectionKind::for_environment(environment);
    let path = layout.path(kind.project_path());
    tracing::debug!(?kind, path = %path.display(), "Selected collection");
    read_json(&path)
}
