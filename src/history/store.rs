//! The history store handle
//!
//! The whole collection lives in one slot as a JSON array, newest first. Each mutation is
//! a full read-modify-write of that slot with no locking: two interleaved mutations resolve
//! as "last write wins". That is fine for a single caller; processes sharing one slot can
//! lose each other's updates.

use chrono::{DateTime, SubsecRound, Utc};
use serde_json::Value;
use tracing::{debug, error, warn};

use super::ids::IdGenerator;
use super::preview::generate_preview;
use crate::error::{StoreError, StoreResult};
use crate::models::{AnalysisRequest, HistoryRecord, RecordId};
use crate::storage::KeyValueStore;

/// Slot key used when none is configured
pub const DEFAULT_HISTORY_KEY: &str = "kc_analyzer_history";

/// Maximum number of records kept when none is configured
pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    pub key: String,
    pub capacity: usize,
}

impl HistoryConfig {
    pub fn new(key: impl Into<String>, capacity: usize) -> Self {
        Self { key: key.into(), capacity }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_KEY, DEFAULT_CAPACITY)
    }
}

/// Handle over one history slot in a [`KeyValueStore`]
#[derive(Debug)]
pub struct HistoryStore<S> {
    storage: S,
    config: HistoryConfig,
    ids: IdGenerator,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(storage: S, config: HistoryConfig) -> Self {
        Self { storage, config, ids: IdGenerator::new() }
    }

    /// Store using [`DEFAULT_HISTORY_KEY`] and [`DEFAULT_CAPACITY`]
    pub fn with_defaults(storage: S) -> Self {
        Self::new(storage, HistoryConfig::default())
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ---- strict API ----

    /// Read the collection. Absent slot is empty; a slot that is not a JSON array is
    /// [`StoreError::Corrupt`]. Individual entries that don't decode are skipped with a warning.
    pub fn try_get_all(&self) -> StoreResult<Vec<HistoryRecord>> {
        Ok(self.decode(self.try_load_raw()?))
    }

    /// Save a new record created now and return it
    pub fn try_save(&self, request: AnalysisRequest) -> StoreResult<HistoryRecord> {
        self.try_save_at(request, Utc::now())
    }

    /// Save a new record created at `now`
    ///
    /// A corrupt slot is replaced, not reported. Storage failures while reading abort the save
    /// before anything is written. `now` is kept at millisecond precision, as persisted.
    pub fn try_save_at(
        &self,
        request: AnalysisRequest,
        now: DateTime<Utc>,
    ) -> StoreResult<HistoryRecord> {
        let now = now.trunc_subsecs(3);
        let mut entries = self.load_for_update()?;

        let max_existing = entries.iter().filter_map(entry_id).max();
        let record = HistoryRecord {
            id: self.ids.next_id(now, max_existing),
            timestamp: now,
            preview: generate_preview(&request.code),
            code: request.code,
            language: request.language,
            result: request.result,
        };

        entries.insert(0, serde_json::to_value(&record)?);
        if entries.len() > self.config.capacity {
            let evicted = entries.len() - self.config.capacity;
            entries.truncate(self.config.capacity);
            debug!(evicted, capacity = self.config.capacity, "evicted oldest history records");
        }

        self.write(&entries)?;
        debug!(id = %record.id, language = %record.language, "saved history record");
        Ok(record)
    }

    /// Look up one record
    pub fn try_get_by_id(&self, id: RecordId) -> StoreResult<HistoryRecord> {
        self.try_get_all()?.into_iter().find(|r| r.id == id).ok_or(StoreError::NotFound(id))
    }

    /// Remove every record with `id` and return how many were removed
    ///
    /// Removing nothing is not an error. The filtered collection is always written back.
    pub fn try_delete(&self, id: RecordId) -> StoreResult<usize> {
        let entries = self.load_for_update()?;
        let before = entries.len();
        let remaining: Vec<_> = entries.into_iter().filter(|e| entry_id(e) != Some(id)).collect();
        let removed = before - remaining.len();

        self.write(&remaining)?;
        debug!(%id, removed, "deleted history records");
        Ok(removed)
    }

    /// Remove the whole slot
    pub fn try_clear(&self) -> StoreResult<()> {
        self.storage.remove(&self.config.key)?;
        debug!(key = %self.config.key, "cleared history");
        Ok(())
    }

    // ---- lenient API ----

    /// Save and report success as a boolean. Failures are logged, never raised.
    pub fn save(&self, request: AnalysisRequest) -> bool {
        match self.try_save(request) {
            Ok(_) => true,
            Err(e) => {
                error!(key = %self.config.key, error = %e, "failed to save history record");
                false
            }
        }
    }

    /// All records, newest first. Missing or unreadable data yields an empty list.
    pub fn get_all(&self) -> Vec<HistoryRecord> {
        self.load_lenient()
    }

    pub fn get_by_id(&self, id: RecordId) -> Option<HistoryRecord> {
        self.get_all().into_iter().find(|r| r.id == id)
    }

    pub fn delete(&self, id: RecordId) -> bool {
        match self.try_delete(id) {
            Ok(_) => true,
            Err(e) => {
                error!(%id, error = %e, "failed to delete history record");
                false
            }
        }
    }

    pub fn clear(&self) -> bool {
        match self.try_clear() {
            Ok(()) => true,
            Err(e) => {
                error!(key = %self.config.key, error = %e, "failed to clear history");
                false
            }
        }
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.get_all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn load_lenient(&self) -> Vec<HistoryRecord> {
        match self.try_get_all() {
            Ok(history) => history,
            Err(e @ StoreError::Corrupt { .. }) => {
                warn!(error = %e, "ignoring unreadable history data");
                Vec::new()
            }
            Err(e) => {
                error!(key = %self.config.key, error = %e, "failed to read history");
                Vec::new()
            }
        }
    }

    /// The slot as raw JSON entries, so mutations carry undecodable entries through untouched
    fn try_load_raw(&self) -> StoreResult<Vec<Value>> {
        let Some(raw) = self.storage.get(&self.config.key)? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw)
            .map_err(|source| StoreError::Corrupt { key: self.config.key.clone(), source })
    }

    /// Entries to mutate. Only a corrupt slot starts over; storage failures propagate.
    fn load_for_update(&self) -> StoreResult<Vec<Value>> {
        match self.try_load_raw() {
            Err(e @ StoreError::Corrupt { .. }) => {
                warn!(error = %e, "replacing unreadable history data");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    fn decode(&self, entries: Vec<Value>) -> Vec<HistoryRecord> {
        let total = entries.len();
        let records: Vec<HistoryRecord> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    let key = &self.config.key;
                    warn!(%key, index, error = %e, "skipping malformed history record");
                    None
                }
            })
            .collect();

        if records.len() < total {
            debug!(kept = records.len(), skipped = total - records.len(), "decoded history");
        }
        records
    }

    fn write(&self, entries: &[Value]) -> StoreResult<()> {
        let encoded = serde_json::to_string(entries)?;
        self.storage.set(&self.config.key, &encoded)?;
        Ok(())
    }
}

fn entry_id(entry: &Value) -> Option<RecordId> {
    entry.get("id").and_then(Value::as_i64).map(RecordId)
}
