//! [`TestProject`] builder for collection-run test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// File name of the primary collection
pub const PRIMARY_COLLECTION: &str = "cma.postman_collection.json";

/// File name of the CI smoke-test collection
pub const CI_COLLECTION: &str = "ci.postman_collection.json";

/// A temporary project directory with helpers for writing collections and
/// environment files.
///
/// # Example
///
/// ```rust,no_run
/// use cma_test_utils::TestProject;
///
/// let project = TestProject::new().with_collections().with_environment("dev");
/// assert!(project.root().join("environments/dev.postman_environment.json").exists());
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory with an empty `environments/`.
    pub fn new() -> Self {
        let project = Self {
            temp_dir: TempDir::new().unwrap(),
        };
        fs::create_dir_all(project.environments_dir()).unwrap();
        project
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn environments_dir(&self) -> PathBuf {
        self.root().join("environments")
    }

    /// The collection JSON written by [`with_collections`](Self::with_collections)
    pub fn primary_collection() -> Value {
        json!({
            "info": { "name": "Charging Module API", "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json" },
            "item": [{ "name": "admin", "item": [] }, { "name": "system", "item": [] }]
        })
    }

    /// The smoke-test collection JSON written by [`with_collections`](Self::with_collections)
    pub fn ci_collection() -> Value {
        json!({
            "info": { "name": "CI", "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json" },
            "item": [{ "name": "smoke", "item": [] }]
        })
    }

    /// The environment JSON written by [`with_environment`](Self::with_environment)
    pub fn environment(name: &str) -> Value {
        json!({
            "name": name,
            "values": [{ "key": "baseUrl", "value": format!("https://{name}.example.com"), "enabled": true }]
        })
    }

    /// Write both bundled collections.
    pub fn with_collections(self) -> Self {
        self.write_json(PRIMARY_COLLECTION, &Self::primary_collection());
        self.write_json(CI_COLLECTION, &Self::ci_collection());
        self
    }

    /// Write `environments/<name>.postman_environment.json`.
    pub fn with_environment(self, name: &str) -> Self {
        let file = format!("environments/{name}.postman_environment.json");
        self.write_json(&file, &Self::environment(name));
        self
    }

    /// Write raw content to `path` (relative to the project root).
    pub fn with_file(self, path: &str, content: &str) -> Self {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
        self
    }

    fn write_json(&self, path: &str, value: &Value) {
        let full_path = self.root().join(path);
        fs::write(&full_path, serde_json::to_string_pretty(value).unwrap())
            .unwrap_or_else(|_| panic!("Could not write file: {}", full_path.display()));
    }
}
