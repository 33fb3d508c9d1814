use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

use crate::models::RecordId;

/// Issues time-derived record ids that never repeat
///
/// An id is the creation time in milliseconds, bumped past both the last id this
/// generator issued and the largest id already in the collection. Rapid saves within
/// one millisecond, or a clock that steps backwards, therefore still produce distinct
/// ids, and two processes sharing one slot cannot reuse an id that is already stored.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id for a record created at `now`, given the largest id currently stored
    pub fn next_id(&self, now: DateTime<Utc>, max_existing: Option<RecordId>) -> RecordId {
        let floor = max_existing.map_or(i64::MIN, |id| id.0.saturating_add(1));
        let wall = now.timestamp_millis().max(floor);

        let mut issued = wall;
        let _ = self.last.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            issued = wall.max(last.saturating_add(1));
            Some(issued)
        });
        RecordId(issued)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_id_is_wall_clock_millis() {
        let ids = IdGenerator::new();
        let now = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        assert_eq!(ids.next_id(now, None), RecordId(1_700_000_000_000));
    }

    #[test]
    fn test_same_millisecond_yields_distinct_ids() {
        let ids = IdGenerator::new();
        let now = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();

        let a = ids.next_id(now, None);
        let b = ids.next_id(now, None);
        let c = ids.next_id(now, None);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_clock_going_backwards() {
        let ids = IdGenerator::new();
        let now = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();

        let first = ids.next_id(now, None);
        let second = ids.next_id(now - Duration::seconds(5), None);
        assert!(second > first);
    }

    #[test]
    fn test_existing_ids_from_other_writers() {
        // A fresh generator must not reuse an id another process already stored
        let ids = IdGenerator::new();
        let now = DateTime::from_timestamp_millis(1_000).unwrap();

        let id = ids.next_id(now, Some(RecordId(5_000)));
        assert_eq!(id, RecordId(5_001));
    }
}
