//! `.env` file adapter.
//!
//! Parses env files with `dotenvy` into memory and serves them underneath a
//! base store. The base always wins, the same way `dotenvy::from_path` never
//! overrides a variable that is already set. The process environment is
//! never modified.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::EnvError;
use crate::ports::EnvironmentPort;

/// File names read by [`DotenvEnvironmentAdapter::from_dir`], in priority order.
pub const DOTENV_FILENAMES: [&str; 2] = [".env.local", ".env"];

/// Environment layered over the contents of one or more `.env` files
pub struct DotenvEnvironmentAdapter {
    base: Arc<dyn EnvironmentPort>,
    file_vars: HashMap<String, String>,
}

impl DotenvEnvironmentAdapter {
    /// Load a single env file. A missing or malformed file is an error.
    pub fn from_path(
        path: impl AsRef<Path>,
        base: Arc<dyn EnvironmentPort>,
    ) -> Result<Self, EnvError> {
        let mut adapter = Self {
            base,
            file_vars: HashMap::new(),
        };
        adapter.load_file(path.as_ref())?;
        Ok(adapter)
    }

    /// Load `.env.local` then `.env` from `dir`, skipping files that don't exist.
    ///
    /// A key defined in `.env.local` shadows the same key in `.env`.
    pub fn from_dir(
        dir: impl AsRef<Path>,
        base: Arc<dyn EnvironmentPort>,
    ) -> Result<Self, EnvError> {
        let mut adapter = Self {
            base,
            file_vars: HashMap::new(),
        };
        for filename in DOTENV_FILENAMES {
            let path = dir.as_ref().join(filename);
            if path.exists() {
                adapter.load_file(&path)?;
            }
        }
        Ok(adapter)
    }

    /// Number of variables read from env files (not counting the base store).
    pub fn file_var_count(&self) -> usize {
        self.file_vars.len()
    }

    fn load_file(&mut self, path: &Path) -> Result<(), EnvError> {
        let iter = dotenvy::from_path_iter(path).map_err(|e| EnvError::dotenv(path, e))?;
        let mut loaded = 0usize;
        for item in iter {
            let (key, value) = item.map_err(|e| EnvError::dotenv(path, e))?;
            // First definition wins, across files and within one file.
            if let Entry::Vacant(slot) = self.file_vars.entry(key) {
                slot.insert(value);
                loaded += 1;
            }
        }
        tracing::debug!(path = %path.display(), loaded, "Loaded env file");
        Ok(())
    }
}

impl EnvironmentPort for DotenvEnvironmentAdapter {
    fn get_var(&self, key: &str) -> Option<String> {
        self.base
            .get_var(key)
            .or_else(|| self.file_vars.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::adapters::MapEnvironmentAdapter;

    fn empty_base() -> Arc<dyn EnvironmentPort> {
        Arc::new(MapEnvironmentAdapter::new())
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(".env");
        fs::write(&path, "PORT=8080\nNAME=\"quoted value\"\n# comment\nEMPTY=\n")
            .expect("write env file");

        let env = DotenvEnvironmentAdapter::from_path(&path, empty_base()).expect("load env file");
        assert_eq!(env.get_var("PORT"), Some("8080".to_string()));
        assert_eq!(env.get_var("NAME"), Some("quoted value".to_string()));
        assert_eq!(env.get_var("EMPTY"), Some(String::new()));
        assert_eq!(env.get_var("MISSING"), None);
        assert_eq!(env.file_var_count(), 3);
    }

    #[test]
    fn test_base_store_wins() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(".env");
        fs::write(&path, "PORT=8080\nHOST=localhost\n").expect("write env file");

        let base = Arc::new(MapEnvironmentAdapter::new().with("PORT", "9000"));
        let env = DotenvEnvironmentAdapter::from_path(&path, base).expect("load env file");
        assert_eq!(env.get_var("PORT"), Some("9000".to_string()));
        assert_eq!(env.get_var("HOST"), Some("localhost".to_string()));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = DotenvEnvironmentAdapter::from_path(dir.path().join("nope.env"), empty_base());
        assert!(matches!(result, Err(EnvError::Dotenv { .. })));
    }

    #[test]
    fn test_from_dir_prefers_local_overrides() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(".env"), "MODE=prod\nREGION=eu\n").expect("write .env");
        fs::write(dir.path().join(".env.local"), "MODE=dev\n").expect("write .env.local");

        let env = DotenvEnvironmentAdapter::from_dir(dir.path(), empty_base()).expect("load dir");
        assert_eq!(env.get_var("MODE"), Some("dev".to_string()));
        assert_eq!(env.get_var("REGION"), Some("eu".to_string()));
    }

    #[test]
    fn test_from_dir_without_files_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let env = DotenvEnvironmentAdapter::from_dir(dir.path(), empty_base()).expect("load dir");
        assert_eq!(env.file_var_count(), 0);
    }
}
