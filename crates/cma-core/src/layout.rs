//! Fixed locations inside a test project.
//!
//! A test project is a directory holding the bundled collections and an
//! `environments/` directory with one JSON file per target environment.

use std::path::{Path, PathBuf};

/// Well-known paths relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPath {
    /// The `environments` directory
    EnvironmentsDir,
    /// The main collection run against real environments
    PrimaryCollection,
    /// The smoke-test collection used when building in CI
    CiCollection,
}

impl ProjectPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnvironmentsDir => "environments",
            Self::PrimaryCollection => "cma.postman_collection.json",
            Self::CiCollection => "ci.postman_collection.json",
        }
    }
}

impl AsRef<Path> for ProjectPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A test project rooted at a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a well-known project path.
    pub fn path(&self, path: ProjectPath) -> PathBuf {
        self.root.join(path)
    }

    pub fn environments_dir(&self) -> PathBuf {
        self.path(ProjectPath::EnvironmentsDir)
    }
}
