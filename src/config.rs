use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name of the category memory when nothing else is configured.
pub const DEFAULT_STORE_FILE: &str = "categorized_memory.json";

/// Environment variable overriding the category memory location.
pub const STORE_PATH_ENV: &str = "STATEMENT_CATEGORIES_PATH";

/// Where the category memory lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_FILE),
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config, with the path taken from `STATEMENT_CATEGORIES_PATH` when set.
    pub fn from_env() -> Self {
        match std::env::var_os(STORE_PATH_ENV) {
            Some(path) if !path.is_empty() => Self {
                path: PathBuf::from(path),
            },
            _ => Self::default(),
        }
    }

    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = path.as_ref().to_path_buf();
        self
    }
}
