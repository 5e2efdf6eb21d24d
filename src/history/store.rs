//! Persisted history store.

use super::log::HistoryLog;
use super::record::{CalculationRecord, RecordId};
use super::validation::sanitize;
use crate::core::Calculation;
use crate::storage::{read_json, write_json, KeyValueStore, StorageError};
use chrono::{DateTime, Local, Utc};
use tracing::{debug, info, warn};

/// The history log plus the key it is persisted under.
///
/// Every mutation writes the whole log back through the `KeyValueStore`
/// passed in by the caller. Write failures are logged and otherwise
/// ignored; the in-memory log stays authoritative for the session.
#[derive(Clone, Debug)]
pub struct HistoryStore {
    log: HistoryLog,
    key: String,
}

impl HistoryStore {
    /// Empty store persisted under `key`. Nothing is read.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            log: HistoryLog::new(),
            key: key.into(),
        }
    }

    /// Load the log stored under `key`.
    ///
    /// A missing key or an undecodable value yields an empty log. Records
    /// that fail validation are dropped.
    pub fn load<K: KeyValueStore + ?Sized>(storage: &K, key: impl Into<String>) -> Self {
        let key = key.into();
        let log = match read_json::<Vec<CalculationRecord>, _>(storage, &key) {
            Ok(Some(records)) => sanitize(records),
            Ok(None) => HistoryLog::new(),
            Err(error) => {
                warn!(%error, "ignoring unreadable calculation history");
                HistoryLog::new()
            }
        };
        info!(records = log.len(), key = %key, "loaded calculation history");
        Self { log, key }
    }

    pub fn log(&self) -> &HistoryLog {
        &self.log
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Record a calculation completed now.
    pub fn append<K: KeyValueStore + ?Sized>(
        &mut self,
        storage: &mut K,
        calculation: Calculation,
    ) -> RecordId {
        self.append_at(storage, calculation, Local::now())
    }

    /// Record a calculation completed at `at`, inserting it at the head.
    pub fn append_at<K: KeyValueStore + ?Sized>(
        &mut self,
        storage: &mut K,
        calculation: Calculation,
        at: DateTime<Local>,
    ) -> RecordId {
        let id = self.log.next_id(at.with_timezone(&Utc));
        let record = CalculationRecord::stamp(calculation, id, at);
        debug!(%id, summary = %record.summary(), "recording calculation");
        self.log = self.log.prepend(record);
        self.commit(storage);
        id
    }

    /// Delete the record `id`. Unknown ids leave the log unchanged.
    pub fn remove<K: KeyValueStore + ?Sized>(&mut self, storage: &mut K, id: RecordId) {
        self.log = self.log.without(id);
        self.commit(storage);
    }

    /// Empty the log and delete the persisted key.
    pub fn clear<K: KeyValueStore + ?Sized>(&mut self, storage: &mut K) {
        self.log = self.log.cleared();
        if let Err(error) = storage.remove(&self.key) {
            warn!(%error, "failed to remove calculation history");
        }
    }

    /// Result text to feed back into the calculator as a fresh operand.
    pub fn reuse(&self, record: &CalculationRecord) -> String {
        record.result_text().to_string()
    }

    /// Write the whole log under the store's key.
    pub fn save<K: KeyValueStore + ?Sized>(&self, storage: &mut K) -> Result<(), StorageError> {
        write_json(storage, &self.key, &self.log)
    }

    fn commit<K: KeyValueStore + ?Sized>(&self, storage: &mut K) {
        if let Err(error) = self.save(storage) {
            warn!(%error, "failed to persist calculation history");
        }
    }
}
