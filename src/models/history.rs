use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Record identifier, derived from the creation time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(RecordId)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId(value)
    }
}

/// A saved analysis run. Created by the history store, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: RecordId,
    #[serde(
        serialize_with = "crate::models::timestamps::serialize_timestamp",
        deserialize_with = "crate::models::timestamps::deserialize_timestamp"
    )]
    pub timestamp: DateTime<Utc>,
    pub code: String,
    pub language: String,
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub preview: String,
}

/// Input to a save: the code, its language and the opaque analysis output.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub code: String,
    pub language: String,
    pub result: Value,
}

impl AnalysisRequest {
    pub fn new(code: impl Into<String>, language: impl Into<String>, result: Value) -> Self {
        Self { code: code.into(), language: language.into(), result }
    }
}
