use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::KeyValueStore;
use crate::error::StorageError;

/// In-memory slot store
///
/// An optional quota caps the total bytes of all keys and values, mirroring the
/// per-origin limit of browser storage. Writes that would exceed it fail with
/// [`StorageError::QuotaExceeded`] and leave the previous value in place.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects writes pushing total usage above `quota_bytes`
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self { entries: Mutex::new(HashMap::new()), quota_bytes: Some(quota_bytes) }
    }

    /// Total bytes currently used by keys and values
    pub fn used_bytes(&self) -> Result<usize, StorageError> {
        let entries = self.lock()?;
        Ok(entries.iter().map(|(k, v)| k.len() + v.len()).sum())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.lock()?;

        if let Some(limit) = self.quota_bytes {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded { key: key.to_string(), needed, limit });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_set_replaces_value() {
        let store = MemoryStore::new();
        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn test_remove_absent_key_is_ok() {
        let store = MemoryStore::new();
        assert!(store.remove("k").is_ok());
    }

    #[test]
    fn test_quota_exceeded_keeps_previous_value() {
        let store = MemoryStore::with_quota(10);
        store.set("k", "small").unwrap();

        let err = store.set("k", "much too large").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { limit: 10, .. }));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("small"));
    }

    #[test]
    fn test_quota_counts_replaced_value_once() {
        // "k" + 9 bytes == 10, replacing an existing 9-byte value must still fit
        let store = MemoryStore::with_quota(10);
        store.set("k", "123456789").unwrap();
        assert!(store.set("k", "987654321").is_ok());
        assert_eq!(store.used_bytes().unwrap(), 10);
    }

    #[test]
    fn test_quota_counts_other_keys() {
        let store = MemoryStore::with_quota(8);
        store.set("a", "1234").unwrap();
        assert!(store.set("b", "1234").is_err());
        assert!(store.set("b", "12").is_ok());
    }
}
