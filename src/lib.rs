//! kc-analyzer - Local history for code analysis runs
//!
//! This library keeps a capacity-bounded, newest-first log of analysis runs in a durable
//! key-value slot, together with the small collaborators around it:
//!
//! - [`HistoryStore`]: save, list, look up, delete and clear analysis records
//! - [`storage`]: the key-value surface, in memory or one file per key
//! - [`catalog`]: built-in sample snippets with filters and fuzzy search
//! - [`theme`]: persisted light/dark preference with system fallback
//! - [`perf`]: throttle, debounce and memory readouts
//!
//! # Example
//!
//! ```
//! use kc_analyzer::storage::MemoryStore;
//! use kc_analyzer::{AnalysisRequest, HistoryStore};
//! use serde_json::json;
//!
//! let store = HistoryStore::with_defaults(MemoryStore::new());
//! assert!(store.save(AnalysisRequest::new("print('hi')", "python", json!({"ok": true}))));
//!
//! let records = store.get_all();
//! assert_eq!(records[0].preview, "print('hi')");
//! ```

pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod models;
pub mod perf;
pub mod storage;
pub mod theme;
pub mod utils;

// Re-export commonly used types
pub use error::{StorageError, StoreError, StoreResult};
pub use history::{HistoryConfig, HistoryStore, format_time, generate_preview};
pub use models::{AnalysisRequest, HistoryRecord, RecordId, Theme};
