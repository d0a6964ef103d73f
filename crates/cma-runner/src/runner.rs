//! Collection runners

use std::fs;
use std::path::{Path, PathBuf};

use cma_core::RunConfiguration;
use serde_json::Value;

use crate::discovery::find_newman;
use crate::error::Result;
use crate::subprocess::{newman_args, run_newman};

/// Something that can execute a resolved run configuration
pub trait CollectionRunner {
    /// Execute the run, returning once it has finished
    fn run(&self, config: &RunConfiguration) -> Result<()>;
}

/// Runs collections with the Newman CLI
#[derive(Debug, Clone)]
pub struct NewmanRunner {
    /// Explicit newman executable, if configured
    newman: Option<PathBuf>,
    /// Directory newman is started in; report exports land relative to it
    working_dir: PathBuf,
}

impl NewmanRunner {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            newman: None,
            working_dir: working_dir.into(),
        }
    }

    /// Use a specific newman executable instead of searching `PATH`
    pub fn with_newman(mut self, newman: impl Into<PathBuf>) -> Self {
        self.newman = Some(newman.into());
        self
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }
}

impl CollectionRunner for NewmanRunner {
    fn run(&self, config: &RunConfiguration) -> Result<()> {
        let newman = find_newman(self.newman.as_deref())?;

        // Newman reads its inputs from files; the scratch dir lives until the run ends
        let scratch = tempfile::tempdir()?;
        let collection = write_json(scratch.path(), "collection.json", config.collection())?;
        let environment = write_json(scratch.path(), "environment.json", config.environment())?;

        let args = newman_args(config, &collection, &environment);
        run_newman(&newman, &self.working_dir, &args)
    }
}

fn write_json(dir: &Path, name: &str, value: &Value) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_vec(value)?)?;
    Ok(path)
}
