//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use kc_analyzer::history::DEFAULT_HISTORY_KEY;
use kc_analyzer::storage::FileStore;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for a data directory with pre-seeded storage slots
pub struct DataDirBuilder {
    temp_dir: TempDir,
}

impl DataDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write raw content into the history slot
    pub fn with_history_raw(self, content: &str) -> Self {
        let path = self.temp_dir.path().join(format!("{}.json", DEFAULT_HISTORY_KEY));
        fs::write(path, content).expect("Failed to write history slot");
        self
    }

    /// Write the given records into the history slot, in order
    pub fn with_records(self, records: &[RecordBuilder]) -> Self {
        let array = Value::Array(records.iter().map(RecordBuilder::to_json).collect());
        let content = serde_json::to_string(&array).expect("Failed to encode records");
        self.with_history_raw(&content)
    }

    /// Write a raw theme slot
    pub fn with_theme_raw(self, content: &str) -> Self {
        let path = self.temp_dir.path().join("kc_analyzer_theme.json");
        fs::write(path, content).expect("Failed to write theme slot");
        self
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// File store rooted at a built data directory
pub fn file_store(dir: &TempDir) -> FileStore {
    FileStore::new(dir.path())
}

/// Builder for one persisted history record
pub struct RecordBuilder {
    id: i64,
    timestamp: String,
    code: String,
    language: String,
    result: Value,
}

impl RecordBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            timestamp: "2025-01-01T00:00:00.000Z".to_string(),
            code: format!("code {}", id),
            language: "python".to_string(),
            result: Value::Null,
        }
    }

    pub fn code(mut self, code: &str) -> Self {
        self.code = code.to_string();
        self
    }

    pub fn language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    pub fn result(mut self, result: Value) -> Self {
        self.result = result;
        self
    }

    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "timestamp": self.timestamp,
            "code": self.code,
            "language": self.language,
            "result": self.result,
            "preview": kc_analyzer::generate_preview(&self.code),
        })
    }
}
