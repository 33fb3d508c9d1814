//! Durable key-value persistence
//!
//! The history store and the theme manager only need a string-keyed slot they
//! can read, replace and remove. [`KeyValueStore`] is that surface:
//!
//! - [`MemoryStore`]: in-process map with an optional byte quota, used by tests
//!   and embedders that bring their own persistence
//! - [`FileStore`]: one file per key under a data directory, written atomically
//!
//! Backends report failures as [`StorageError`]; they never retry.

pub mod file;
pub mod memory;

use std::rc::Rc;
use std::sync::Arc;

pub use file::FileStore;
pub use memory::MemoryStore;

pub use crate::error::StorageError;

/// A string-keyed slot store with whole-value replacement semantics
pub trait KeyValueStore {
    /// Read a slot. `Ok(None)` when the key has never been written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace a slot's entire value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a slot. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
