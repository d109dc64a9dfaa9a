//! Persistent memory of user-assigned categories, keyed by description.

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use parking_lot::Mutex;

use crate::config::StoreConfig;
use crate::errors::{StatementError, StatementResult};
use crate::types::{CategorizedTransaction, TransactionRecord};

/// Description (or legacy raw line) to category label.
pub type CategorizationMemory = BTreeMap<String, String>;

/// File-backed category memory.
///
/// The whole mapping is one JSON object on disk. Every upsert rewrites it
/// through a sibling temp file and a rename; a store-wide lock keeps
/// read-modify-write cycles from interleaving inside one process.
#[derive(Debug)]
pub struct CategoryStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl CategoryStore {
    pub fn new(config: StoreConfig) -> Self {
        info!("category store at {}", config.path.display());
        Self {
            path: config.path,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full current mapping; empty if nothing was ever saved.
    pub fn read_all(&self) -> StatementResult<CategorizationMemory> {
        let _guard = self.lock.lock();
        self.load()
    }

    /// Set the category for `key`, replacing any previous label.
    pub fn upsert(&self, key: &str, category: &str) -> StatementResult<()> {
        if key.trim().is_empty() {
            return Err(StatementError::MissingField("description"));
        }
        if category.trim().is_empty() {
            return Err(StatementError::MissingField("category"));
        }

        let _guard = self.lock.lock();
        let mut memory = self.load()?;
        let previous = memory.insert(key.to_string(), category.to_string());
        self.write(&memory)?;

        debug!(
            "saved category (key={key}, category={category}, replaced={}, entries={})",
            previous.is_some(),
            memory.len()
        );
        Ok(())
    }

    fn load(&self) -> StatementResult<CategorizationMemory> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(CategorizationMemory::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(CategorizationMemory::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write(&self, memory: &CategorizationMemory) -> StatementResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.temp_path();
        let result = write_snapshot(&temp_path, memory)
            .and_then(|()| fs::rename(&temp_path, &self.path).map_err(StatementError::from));
        if let Err(e) = &result {
            warn!("failed to save {}: {e}", self.path.display());
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                if cleanup.kind() != ErrorKind::NotFound {
                    warn!("failed to remove {}: {cleanup}", temp_path.display());
                }
            }
        }
        result
    }
}

fn write_snapshot(path: &Path, memory: &CategorizationMemory) -> StatementResult<()> {
    let mut file = fs::File::create(path)?;
    serde_json::to_writer(&mut file, memory)?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}

/// Category remembered for `record`: by description first, then by raw line.
pub fn lookup<'a>(memory: &'a CategorizationMemory, record: &TransactionRecord) -> Option<&'a str> {
    record
        .lookup_keys()
        .into_iter()
        .find_map(|key| memory.get(key))
        .map(String::as_str)
}

/// Join extracted records with their remembered categories, keeping order.
pub fn categorize(
    records: Vec<TransactionRecord>,
    memory: &CategorizationMemory,
) -> Vec<CategorizedTransaction> {
    records
        .into_iter()
        .map(|record| {
            let category = lookup(memory, &record).map(str::to_string);
            CategorizedTransaction { record, category }
        })
        .collect()
}
