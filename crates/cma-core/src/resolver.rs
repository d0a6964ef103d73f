//! Run configuration resolution
//!
//! The `RunConfigResolver` combines the chosen collection, the environment
//! file and the normalized reporter and folder selections into the single
//! object Newman is run with.

use serde::Serialize;
use serde_json::Value;

use crate::Result;
use crate::collection::select_collection;
use crate::environment::EnvironmentIndex;
use crate::layout::ProjectLayout;
use crate::normalize::{OptionValues, normalize};
use crate::reporters::{ReporterOptions, resolve_reporters};

/// Everything Newman needs for one run
///
/// Field names match the options object `newman.run()` accepts so the
/// serialized form can be handed over as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunConfiguration {
    collection: Value,
    environment: Value,
    folder: Vec<String>,
    reporters: Vec<String>,
    reporter: ReporterOptions,
}

impl RunConfiguration {
    /// Parsed collection contents
    pub fn collection(&self) -> &Value {
        &self.collection
    }

    /// Parsed environment contents
    pub fn environment(&self) -> &Value {
        &self.environment
    }

    /// Folders to run; empty means the whole collection
    pub fn folders(&self) -> &[String] {
        &self.folder
    }

    /// Reporter names, lowercased, unique and aliased
    pub fn reporters(&self) -> &[String] {
        &self.reporters
    }

    /// Per-reporter options
    pub fn reporter_options(&self) -> &ReporterOptions {
        &self.reporter
    }
}

/// Resolves run configurations for a project
#[derive(Debug, Clone)]
pub struct RunConfigResolver {
    layout: ProjectLayout,
    reporter_options: ReporterOptions,
}

impl RunConfigResolver {
    /// Create a resolver using the default reporter options
    pub fn new(layout: ProjectLayout) -> Self {
        Self {
            layout,
            reporter_options: ReporterOptions::default(),
        }
    }

    /// Replace the reporter options every resolved configuration carries
    pub fn with_reporter_options(mut self, options: ReporterOptions) -> Self {
        self.reporter_options = options;
        self
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Resolve the configuration for one run
    ///
    /// Fails with [`crate::Error::EnvironmentNotFound`] when no environment
    /// file matches `environment`; deciding what to do about that (the
    /// binary exits with status 1) is left to the caller.
    pub fn resolve(
        &self,
        environment: &str,
        reporters: impl Into<OptionValues>,
        folders: impl Into<OptionValues>,
    ) -> Result<RunConfiguration> {
        let folder = normalize(folders);
        let reporters = normalize(reporters);

        let collection = select_collection(&self.layout, environment)?;
        let environment =
            EnvironmentIndex::scan(&self.layout.environments_dir())?.load(environment)?;

        Ok(RunConfiguration {
            collection,
            environment,
            folder,
            reporters: resolve_reporters(&reporters),
            reporter: self.reporter_options.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_field_names() {
        let config = RunConfiguration {
            collection: json!({}),
            environment: json!({}),
            folder: vec!["admin".into()],
            reporters: vec!["cli".into()],
            reporter: ReporterOptions::empty(),
        };

        let value = serde_json::to_value(&config).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["collection", "environment", "folder", "reporter", "reporters"]
        );
    }
}
