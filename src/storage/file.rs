//! Directory-backed slot store with atomic writes
//!
//! Layout: `<root>/<percent-encoded key>.json`. A write lands in
//! `<file>.tmp` first and is renamed over the target, so readers see either
//! the previous value or the new one, never a partial blob.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use tracing::debug;

use super::KeyValueStore;
use crate::error::StorageError;

/// Default per-value limit (5MB), in line with typical browser storage quotas
pub const DEFAULT_MAX_VALUE_BYTES: usize = 5 * 1024 * 1024;

const SLOT_EXTENSION: &str = "json";

// Keep file names readable for the usual snake/kebab-case keys
const KEY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
    max_value_bytes: usize,
}

impl FileStore {
    /// Create a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), max_value_bytes: DEFAULT_MAX_VALUE_BYTES }
    }

    /// Override the per-value size limit
    pub fn with_max_value_bytes(mut self, max_value_bytes: usize) -> Self {
        self.max_value_bytes = max_value_bytes;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{}.{}", encode_key(key), SLOT_EXTENSION)))
    }
}

/// Percent-encode a key into a file stem
pub fn encode_key(key: &str) -> String {
    utf8_percent_encode(key, KEY_ENCODE_SET).to_string()
}

/// Reverse of [`encode_key`]
pub fn decode_key(stem: &str) -> String {
    percent_decode_str(stem).decode_utf8_lossy().into_owned()
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;

        if value.len() > self.max_value_bytes {
            return Err(StorageError::QuotaExceeded {
                key: key.to_string(),
                needed: value.len(),
                limit: self.max_value_bytes,
            });
        }

        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }

        let temp = path.with_extension(format!("{}.tmp", SLOT_EXTENSION));
        fs::write(&temp, value)?;
        fs::rename(&temp, &path)?;

        debug!(key, path = %path.display(), bytes = value.len(), "wrote slot");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}
