//! File-backed store persistence (load/flush).
//!
//! The whole key-value map is stored as one JSON object, by default at
//! `~/.config/shade/store.json`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::KeyValueStore;

/// Persistent key-value store backed by a single JSON file.
///
/// Loading is lenient: a missing or unparsable file yields an empty store
/// rather than an error, so stale on-disk state can never prevent startup.
/// Every `set` flushes; a failed write is logged and the in-memory value is
/// kept for the rest of the session.
pub struct FileStore {
    path: PathBuf,
    values: RefCell<HashMap<String, String>>,
}

impl FileStore {
    /// Default store location: `<config>/shade/store.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shade")
            .join("store.json")
    }

    /// Open the store at the default location.
    pub fn open() -> Self {
        Self::open_at(Self::default_path())
    }

    /// Open a store backed by an explicit file path.
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default();
        Self {
            path,
            values: RefCell::new(values),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let json = serde_json::to_string_pretty(&*self.values.borrow()).unwrap_or_default();
        if let Err(e) = fs::write(&self.path, json) {
            log::warn!("failed to write {}: {}", self.path.display(), e);
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.flush();
    }
}
