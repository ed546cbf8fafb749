//! Shared corpus store
//!
//! Owns the ordered in-memory sequence and the durable log handle. Built
//! once at process start and passed by reference to every request handler;
//! there is no module-level global.

use parking_lot::{Mutex, RwLock, RwLockReadGuard};
use std::path::PathBuf;

use bankbot_core::Example;

use crate::log::CorpusLog;
use crate::CorpusError;

/// Result of an append attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Row was persisted and added to the in-memory sequence
    Added,
    /// An identical `(text, intent, entities)` row already exists
    Duplicate,
}

/// In-memory corpus backed by the append-only CSV log.
///
/// Reads take a shared lock over the ordered snapshot. Appends are
/// serialized by the log mutex so the duplicate check, the log write and
/// the in-memory push happen as one exclusive section; two near-
/// simultaneous turns can neither double-write a row nor interleave
/// partial writes.
pub struct CorpusStore {
    examples: RwLock<Vec<Example>>,
    log: Mutex<CorpusLog>,
}

impl CorpusStore {
    /// Open the store, loading whatever the log already holds. Loaded data
    /// is taken as-is; only new appends are deduplicated.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CorpusError> {
        let log = CorpusLog::new(path);
        let examples = log.load()?;
        Ok(Self {
            examples: RwLock::new(examples),
            log: Mutex::new(log),
        })
    }

    /// Shared snapshot of the stored rows, in insertion order.
    pub fn examples(&self) -> RwLockReadGuard<'_, Vec<Example>> {
        self.examples.read()
    }

    pub fn len(&self) -> usize {
        self.examples.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.read().is_empty()
    }

    /// Append a row unless an identical `(text, intent, entities)` row is
    /// already stored. The log and the in-memory sequence are updated
    /// together or not at all.
    pub fn append(&self, row: Example) -> Result<AppendOutcome, CorpusError> {
        let log = self.log.lock();

        if self.examples.read().iter().any(|existing| existing.same_row(&row)) {
            return Ok(AppendOutcome::Duplicate);
        }

        log.append(&row)?;
        self.examples.write().push(row);

        Ok(AppendOutcome::Added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn temp_store(dir: &tempfile::TempDir) -> CorpusStore {
        CorpusStore::open(dir.path().join("corpus.csv")).unwrap()
    }

    #[test]
    fn test_append_dedup() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        let row = Example::new("check balance", "check_balance", "Sure", "MONEY:500");
        assert_eq!(store.append(row.clone()).unwrap(), AppendOutcome::Added);
        assert_eq!(store.append(row).unwrap(), AppendOutcome::Duplicate);
        assert_eq!(store.len(), 1);

        // A different entity annotation is a distinct row
        let other = Example::new("check balance", "check_balance", "Sure", "MONEY:600");
        assert_eq!(store.append(other).unwrap(), AppendOutcome::Added);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_loaded_duplicates_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.csv");
        std::fs::write(
            &path,
            "text,intent,response,entities\nhi,greet,Hello!,\nhi,greet,Hello!,\n",
        )
        .unwrap();

        let store = CorpusStore::open(&path).unwrap();
        assert_eq!(store.len(), 2);

        // But a fresh append of the same tuple is still rejected
        assert_eq!(
            store
                .append(Example::new("hi", "greet", "Hello!", ""))
                .unwrap(),
            AppendOutcome::Duplicate
        );
    }

    #[test]
    fn test_insertion_order_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        store.append(Example::new("a", "greet", "", "")).unwrap();
        store.append(Example::new("b", "greet", "", "")).unwrap();
        store.append(Example::new("c", "greet", "", "")).unwrap();

        let texts: Vec<String> = store.examples().iter().map(|e| e.text.clone()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_concurrent_appends_all_land() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(temp_store(&dir));
        let path = dir.path().join("corpus.csv");

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    let row = Example::new(
                        format!("balance for {i}"),
                        "check_balance",
                        "",
                        format!("ACCOUNT_NUMBER:10000{i}"),
                    );
                    store.append(row).unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), AppendOutcome::Added);
        }
        assert_eq!(store.len(), 8);

        // The durable log has exactly the same eight rows, none corrupted
        let reloaded = CorpusStore::open(&path).unwrap();
        assert_eq!(reloaded.len(), 8);
        assert!(reloaded
            .examples()
            .iter()
            .all(|row| row.intent == "check_balance" && row.entities.starts_with("ACCOUNT_NUMBER:")));
    }
}
