//! Key-Value Store Abstraction
//!
//! Defines the store interface and the board load/save adapter on top of it.

use crate::domain::List;
use crate::error::{BoardResult, StorageResult};

use super::codec;

/// String key-value store (browser local storage, in-memory, ...)
pub trait KeyValueStore {
    /// Read the value under `key`, `None` when absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write `value` under `key`, replacing whatever was there
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// Loads and saves the full board under one key
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the saved board. Missing or corrupt state means an empty board.
    pub fn load(&self) -> Vec<List> {
        let json = match self.store.get(&self.key) {
            Ok(Some(json)) => json,
            Ok(None) => {
                log::info!("No saved board under '{}', starting fresh", self.key);
                return Vec::new();
            }
            Err(e) => {
                log::warn!("Could not read saved board: {}", e);
                return Vec::new();
            }
        };

        match codec::decode(&json) {
            Ok(lists) => {
                log::info!("Loaded {} lists from '{}'", lists.len(), self.key);
                lists
            }
            Err(e) => {
                log::warn!("Saved board under '{}' is unreadable, starting fresh: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the saved board with `lists`
    pub fn save(&mut self, lists: &[List]) -> BoardResult<()> {
        let json = codec::encode(lists)?;
        self.store.set(&self.key, &json)?;
        log::debug!("Board saved ({} lists, {} bytes)", lists.len(), json.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Card, CardId, ListId};
    use crate::error::{BoardError, StorageError};
    use crate::persistence::MemoryStore;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Read {
                key: key.to_string(),
                reason: "denied".to_string(),
            })
        }

        fn set(&mut self, key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn test_load_absent_is_empty() {
        let persistence = Persistence::new(MemoryStore::new(), "board");
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn test_load_garbage_is_empty() {
        let store = MemoryStore::with_entry("board", "{oops");
        let persistence = Persistence::new(store, "board");
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn test_load_unreadable_store_is_empty() {
        let persistence = Persistence::new(BrokenStore, "board");
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let mut list = List::new(ListId(1), "Todo");
        list.push_card(Card::new(CardId(2), "write tests"));
        let lists = vec![list, List::new(ListId(3), "Done")];

        let mut persistence = Persistence::new(MemoryStore::new(), "board");
        persistence.save(&lists).unwrap();
        assert_eq!(persistence.load(), lists);
    }

    #[test]
    fn test_save_overwrites() {
        let mut persistence = Persistence::new(MemoryStore::new(), "board");
        persistence.save(&[List::new(ListId(1), "A")]).unwrap();
        persistence.save(&[]).unwrap();
        assert_eq!(persistence.store().get("board").unwrap().as_deref(), Some("[]"));
        assert_eq!(persistence.store().writes(), 2);
    }

    #[test]
    fn test_save_propagates_write_failure() {
        let mut persistence = Persistence::new(BrokenStore, "board");
        let err = persistence.save(&[]).unwrap_err();
        assert!(matches!(err, BoardError::Storage(StorageError::Write { .. })));
    }
}
