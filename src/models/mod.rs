//! Data models for the code analyzer.
//!
//! - [`HistoryRecord`] - One persisted analysis run
//! - [`AnalysisRequest`] - The candidate passed to a save
//! - [`RecordId`] - Time-derived record identifier
//! - [`CodeExample`] - Built-in sample snippet
//! - [`Theme`] - Light/dark display preference
//!
//! Records are stored as JSON. Timestamps use custom serde helpers in the
//! `timestamps` module so that both ISO-8601 strings and epoch milliseconds
//! are accepted on read.

pub mod example;
pub mod history;
pub mod theme;
pub mod timestamps;

pub use example::CodeExample;
pub use history::{AnalysisRequest, HistoryRecord, RecordId};
pub use theme::Theme;
