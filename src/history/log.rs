//! Calculation history log.
//!
//! Provides an immutable, newest-first log of calculation records,
//! following the same functional style as the reducer.

use super::record::{CalculationRecord, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Newest-first sequence of calculation records.
///
/// The log is immutable - `prepend`, `without` and `cleared` return a new
/// log and leave the original untouched.
///
/// # Example
///
/// ```rust
/// use calcmaster::history::{CalculationRecord, HistoryLog, RecordId};
///
/// let log = HistoryLog::new();
/// let log = log.prepend(CalculationRecord::new(RecordId(1), "1 + 1", "2", ""));
/// let log = log.prepend(CalculationRecord::new(RecordId(2), "2 × 3", "6", ""));
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.latest().unwrap().id(), RecordId(2));
///
/// let log = log.without(RecordId(1));
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    records: Vec<CalculationRecord>,
}

impl HistoryLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build a log from records already in newest-first order.
    pub fn from_records(records: Vec<CalculationRecord>) -> Self {
        Self { records }
    }

    /// Insert a record at the head, returning a new log.
    ///
    /// No de-duplication: the same expression may appear any number of times.
    pub fn prepend(&self, record: CalculationRecord) -> Self {
        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.push(record);
        records.extend(self.records.iter().cloned());
        Self { records }
    }

    /// Log without the record `id`. Unknown ids leave the log unchanged.
    pub fn without(&self, id: RecordId) -> Self {
        Self {
            records: self
                .records
                .iter()
                .filter(|record| record.id() != id)
                .cloned()
                .collect(),
        }
    }

    /// An empty log.
    pub fn cleared(&self) -> Self {
        Self::new()
    }

    pub fn find(&self, id: RecordId) -> Option<&CalculationRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// The most recent record.
    pub fn latest(&self) -> Option<&CalculationRecord> {
        self.records.first()
    }

    /// All records, newest first.
    pub fn entries(&self) -> &[CalculationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Id for a record created at `now`, greater than every id in the log.
    pub fn next_id(&self, now: DateTime<Utc>) -> RecordId {
        let highest = self.records.iter().map(CalculationRecord::id).max();
        RecordId::next(highest, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(id: i64, expression: &str, result: &str) -> CalculationRecord {
        CalculationRecord::new(RecordId(id), expression, result, "")
    }

    #[test]
    fn new_log_is_empty() {
        let log = HistoryLog::new();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
        assert_eq!(log.entries().len(), 0);
    }

    #[test]
    fn prepend_puts_newest_first() {
        let log = HistoryLog::new()
            .prepend(record(1, "1 + 1", "2"))
            .prepend(record(2, "2 + 2", "4"));

        let ids: Vec<_> = log.entries().iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![RecordId(2), RecordId(1)]);
    }

    #[test]
    fn prepend_is_immutable() {
        let log = HistoryLog::new();
        let new_log = log.prepend(record(1, "1 + 1", "2"));

        assert_eq!(log.len(), 0);
        assert_eq!(new_log.len(), 1);
    }

    #[test]
    fn prepend_keeps_duplicates() {
        let log = HistoryLog::new()
            .prepend(record(1, "1 + 1", "2"))
            .prepend(record(2, "1 + 1", "2"));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn without_removes_only_matching_id() {
        let log = HistoryLog::new()
            .prepend(record(1, "1 + 1", "2"))
            .prepend(record(2, "2 + 2", "4"))
            .prepend(record(3, "3 + 3", "6"));

        let log = log.without(RecordId(2));

        assert_eq!(log.len(), 2);
        assert!(log.find(RecordId(2)).is_none());
        assert!(log.find(RecordId(1)).is_some());
    }

    #[test]
    fn without_unknown_id_is_noop() {
        let log = HistoryLog::new().prepend(record(1, "1 + 1", "2"));
        assert_eq!(log.without(RecordId(99)), log);
    }

    #[test]
    fn cleared_is_empty() {
        let log = HistoryLog::new().prepend(record(1, "1 + 1", "2"));
        assert!(log.cleared().is_empty());
    }

    #[test]
    fn next_id_exceeds_existing_ids() {
        let log = HistoryLog::from_records(vec![record(10, "a", "1"), record(40, "b", "2")]);
        let now = Utc.timestamp_millis_opt(20).unwrap();
        assert_eq!(log.next_id(now), RecordId(41));
    }

    #[test]
    fn log_serializes_as_array() {
        let log = HistoryLog::new().prepend(record(1, "1 + 1", "2"));

        let json = serde_json::to_string(&log).unwrap();
        assert!(json.starts_with('['));

        let deserialized: HistoryLog = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, log);
    }
}
