//! User fact stores
//!
//! Trait-based storage for per-user fact records so collaborators can
//! supply their own backend:
//!
//! - `InMemoryFactStore` - HashMap, no persistence (tests, embedding)
//! - `JsonFactStore` - single JSON file keyed by user id

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use parking_lot::{Mutex, RwLock};

use bankbot_core::UserFactRecord;

use crate::AgentError;

/// Per-user fact record storage consumed by the engine.
///
/// The engine calls `save` after every turn that mutates the record,
/// including the no-match fallback path. Deletion and expiry are
/// collaborator concerns; no method removes records.
pub trait UserFactStore: Send + Sync {
    fn load(&self, user_id: &str) -> Result<Option<UserFactRecord>, AgentError>;
    fn save(&self, user_id: &str, record: &UserFactRecord) -> Result<(), AgentError>;
}

/// In-memory fact store.
#[derive(Default)]
pub struct InMemoryFactStore {
    records: RwLock<HashMap<String, UserFactRecord>>,
}

impl InMemoryFactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserFactStore for InMemoryFactStore {
    fn load(&self, user_id: &str) -> Result<Option<UserFactRecord>, AgentError> {
        Ok(self.records.read().get(user_id).cloned())
    }

    fn save(&self, user_id: &str, record: &UserFactRecord) -> Result<(), AgentError> {
        self.records.write().insert(user_id.to_string(), record.clone());
        Ok(())
    }
}

/// Fact store persisting all records to one JSON file.
///
/// Saves rewrite the whole file; the map is small (one entry per user) and
/// the mutex keeps concurrent saves from interleaving writes.
pub struct JsonFactStore {
    path: PathBuf,
    records: Mutex<HashMap<String, UserFactRecord>>,
}

impl JsonFactStore {
    /// Open the store, loading existing records if the file is present.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AgentError> {
        let path = path.into();
        let records = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            HashMap::new()
        };
        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }
}

impl UserFactStore for JsonFactStore {
    fn load(&self, user_id: &str) -> Result<Option<UserFactRecord>, AgentError> {
        Ok(self.records.lock().get(user_id).cloned())
    }

    fn save(&self, user_id: &str, record: &UserFactRecord) -> Result<(), AgentError> {
        let mut records = self.records.lock();
        records.insert(user_id.to_string(), record.clone());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&*records)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_round_trip() {
        let store = InMemoryFactStore::new();
        assert!(store.load("7").unwrap().is_none());

        let mut record = UserFactRecord::new("123456", 5000.0);
        record.record_turn("hi", "Hello!", "greet");
        store.save("7", &record).unwrap();

        let loaded = store.load("7").unwrap().unwrap();
        assert_eq!(loaded.account_number, "123456");
        assert_eq!(loaded.conversations.len(), 1);
    }

    #[test]
    fn test_json_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_facts.json");

        {
            let store = JsonFactStore::open(&path).unwrap();
            let mut record = UserFactRecord::new("123456", 5000.0);
            record.last_amount = Some("500".to_string());
            store.save("7", &record).unwrap();
        }

        let reopened = JsonFactStore::open(&path).unwrap();
        let loaded = reopened.load("7").unwrap().unwrap();
        assert_eq!(loaded.last_amount.as_deref(), Some("500"));
    }
}
