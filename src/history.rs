// Persisted log of past wheel picks

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::LunchwheelError;
use crate::storage::KeyValueStore;

pub const HISTORY_KEY: &str = "history";

/// Oldest entries are dropped once the log grows past this.
const MAX_HISTORY_ENTRIES: usize = 50;

/// One past pick: the restaurant name and the locale date it was chosen.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub name: String,
    pub timestamp: String,
}

/// Append-bounded log of past selections, newest first. The backing store is
/// the single source of truth: every operation is a full read or write of
/// the `history` key, so concurrent appenders race last-writer-wins and no
/// operation is atomic across callers.
pub struct HistoryStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Prepends an entry and drops anything beyond the 50 most recent.
    pub fn append(&mut self, entry: HistoryEntry) -> Result<(), LunchwheelError> {
        let mut entries = self.list()?;
        entries.insert(0, entry);
        entries.truncate(MAX_HISTORY_ENTRIES);
        let value = serde_json::to_value(&entries)
            .map_err(|e| LunchwheelError::StorageSerialize { source: e })?;
        self.store.set(HISTORY_KEY, value)
    }

    /// Newest-first sequence of past picks, empty when nothing was saved yet.
    pub fn list(&self) -> Result<Vec<HistoryEntry>, LunchwheelError> {
        match self.store.get(HISTORY_KEY)? {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| LunchwheelError::StorageSerialize { source: e }),
            None => Ok(Vec::new()),
        }
    }

    /// Irrevocably replaces all history with an empty sequence.
    pub fn clear(&mut self) -> Result<(), LunchwheelError> {
        self.store.set(HISTORY_KEY, Value::Array(Vec::new()))
    }
}
