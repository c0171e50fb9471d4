use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::LocalStorage;
use crate::error::DbResult;

/// Volatile storage; cloned handles share the same map.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl LocalStorage for MemoryStorage {
    fn get(&self, key: &str) -> DbResult<Option<Vec<u8>>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> DbResult<()> {
        self.entries().insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set("k", b"v").expect("set");
        assert_eq!(other.get("k").expect("get"), Some(b"v".to_vec()));
        assert_eq!(other.get("missing").expect("get"), None);
    }
}
