// Key-value storage backing the selection history and user settings

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use log::debug;
use serde_json::Value;

use crate::errors::LunchwheelError;

/// Abstract key-value storage collaborator. Writes are best effort; callers
/// log failures and move on, there is no retry policy. Concurrent writers
/// race last-writer-wins.
pub trait KeyValueStore {
    /// Load the value stored under `key`, `None` if nothing was saved yet.
    fn get(&self, key: &str) -> Result<Option<Value>, LunchwheelError>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: Value) -> Result<(), LunchwheelError>;
}

/// File-based store: one JSON document per key under the platform data
/// directory.
pub struct FileBasedStore {
    storage_path: PathBuf,
}

impl FileBasedStore {
    pub fn new(storage_path: PathBuf) -> Result<Self, LunchwheelError> {
        if !storage_path.exists() {
            fs::create_dir_all(&storage_path)
                .map_err(|e| LunchwheelError::StorageIo { source: e })?;
        }
        Ok(Self { storage_path })
    }

    /// Create a store in the default application data directory.
    pub fn new_default() -> Result<Self, LunchwheelError> {
        Self::new(Self::default_storage_path()?)
    }

    pub fn default_storage_path() -> Result<PathBuf, LunchwheelError> {
        let data_dir = dirs::data_dir().ok_or(LunchwheelError::NoDataDir)?;
        Ok(data_dir.join("lunchwheel").join("store"))
    }

    fn file_path_for_key(&self, key: &str) -> PathBuf {
        let filename = format!("{}.json", Self::normalize_key(key));
        self.storage_path.join(filename)
    }

    /// Normalize a key for consistent file naming.
    fn normalize_key(key: &str) -> String {
        key.to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect()
    }
}

impl KeyValueStore for FileBasedStore {
    fn get(&self, key: &str) -> Result<Option<Value>, LunchwheelError> {
        let file_path = self.file_path_for_key(key);
        if !file_path.exists() {
            return Ok(None);
        }
        let content =
            fs::read_to_string(&file_path).map_err(|e| LunchwheelError::StorageIo { source: e })?;
        let value = serde_json::from_str(&content)
            .map_err(|e| LunchwheelError::StorageSerialize { source: e })?;
        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), LunchwheelError> {
        let file_path = self.file_path_for_key(key);
        debug!("writing key '{key}' to {file_path:?}");
        let file =
            fs::File::create(file_path).map_err(|e| LunchwheelError::StorageIo { source: e })?;
        serde_json::to_writer(file, &value)
            .map_err(|e| LunchwheelError::StorageSerialize { source: e })
    }
}

/// In-memory store for tests and dry runs.
#[derive(Default)]
pub struct InMemoryStore {
    entries: HashMap<String, Value>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, LunchwheelError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), LunchwheelError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
