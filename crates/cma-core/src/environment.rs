//! Environment file lookup.
//!
//! Users name an environment (`dev`, `tst`, `example`) and the matching
//! file is the one in `environments/` whose file name starts with that
//! name, normally `<name>.postman_environment.json`.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Error, Result, read_json};

/// Conventional suffix of environment file names
pub const ENVIRONMENT_SUFFIX: &str = ".postman_environment.json";

/// The files of an environments directory, listed once.
///
/// Entries are kept sorted by file name so that when several files share a
/// prefix the lexicographically first one wins on every platform.
#[derive(Debug, Clone)]
pub struct EnvironmentIndex {
    dir: PathBuf,
    files: Vec<String>,
}

impl EnvironmentIndex {
    /// List the non-directory entries of `dir`
    pub fn scan(dir: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(dir, e))?;
            let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
            if file_type.is_dir() {
                continue;
            }
            // Names that are not valid UTF-8 can never match a CLI argument
            if let Some(name) = entry.file_name().to_str() {
                files.push(name.to_string());
            }
        }
        files.sort();

        tracing::debug!(dir = %dir.display(), count = files.len(), "Scanned environments");
        Ok(Self {
            dir: dir.to_path_buf(),
            files,
        })
    }

    /// Directory the index was built from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File names in lookup order
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Environment names offered by this directory
    ///
    /// Only JSON files count; `find` still matches any file by prefix.
    pub fn names(&self) -> Vec<String> {
        self.files
            .iter()
            .filter(|f| f.ends_with(".json"))
            .map(|f| environment_name(f))
            .collect()
    }

    /// Find the file for an environment name
    pub fn find(&self, name: &str) -> Result<PathBuf> {
        self.files
            .iter()
            .find(|file| file.starts_with(name))
            .map(|file| self.dir.join(file))
            .ok_or_else(|| Error::EnvironmentNotFound {
                name: name.to_string(),
                available: self.names(),
            })
    }

    /// Find and parse the file for an environment name
    pub fn load(&self, name: &str) -> Result<Value> {
        let path = self.find(name)?;
        tracing::debug!(environment = name, path = %path.display(), "Using environment file");
        read_json(&path)
    }
}

/// Locate and parse the environment file for `name` in `dir`
pub fn locate(dir: &Path, name: &str) -> Result<Value> {
    EnvironmentIndex::scan(dir)?.load(name)
}

/// Strip the conventional suffix, or failing that the extension
fn environment_name(file: &str) -> String {
    if let Some(name) = file.strip_suffix(ENVIRONMENT_SUFFIX) {
        return name.to_string();
    }
    Path::new(file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn env_dir(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(temp.path().join(name), content).unwrap();
        }
        temp
    }

    #[test]
    fn test_scan_skips_directories() {
        let temp = env_dir(&[("dev.postman_environment.json", "{}")]);
        fs::create_dir(temp.path().join("dev-archive")).unwrap();

        let index = EnvironmentIndex::scan(temp.path()).unwrap();
        assert_eq!(index.files(), ["dev.postman_environment.json"]);
    }

    #[test]
    fn test_find_uses_lexicographic_order() {
        let temp = env_dir(&[
            ("dev2.postman_environment.json", "{}"),
            ("dev.postman_environment.json", "{}"),
        ]);

        let index = EnvironmentIndex::scan(temp.path()).unwrap();
        let path = index.find("dev").unwrap();
        assert_eq!(path, temp.path().join("dev.postman_environment.json"));
    }

    #[test]
    fn test_find_missing_lists_available() {
        let temp = env_dir(&[
            ("dev.postman_environment.json", "{}"),
            ("notes.txt", ""),
        ]);

        let index = EnvironmentIndex::scan(temp.path()).unwrap();
        match index.find("prod") {
            Err(Error::EnvironmentNotFound { name, available }) => {
                assert_eq!(name, "prod");
                assert_eq!(available, vec!["dev"]);
            }
            other => panic!("expected EnvironmentNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_names_skip_non_json_files() {
        let temp = env_dir(&[
            ("dev.postman_environment.json", "{}"),
            ("local.json", "{}"),
            ("notes.txt", ""),
            ("README", ""),
        ]);

        let index = EnvironmentIndex::scan(temp.path()).unwrap();
        assert_eq!(index.names(), vec!["dev", "local"]);
        assert_eq!(index.files().len(), 4);
    }

    #[test]
    fn test_scan_missing_dir_is_io_error() {
        let temp = TempDir::new().unwrap();
        let result = EnvironmentIndex::scan(&temp.path().join("environments"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp = env_dir(&[("dev.postman_environment.json", "{ not json")]);
        let result = locate(temp.path(), "dev");
        assert!(matches!(result, Err(Error::Json { .. })));
    }

    #[test]
    fn test_environment_name() {
        assert_eq!(environment_name("tst.postman_environment.json"), "tst");
        assert_eq!(environment_name("local.json"), "local");
        assert_eq!(environment_name("README"), "README");
    }
}
