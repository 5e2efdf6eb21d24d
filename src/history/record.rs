//! Calculation records.

use crate::core::Calculation;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format of `CalculationRecord::timestamp_text`, e.g. `10/19/2026, 3:04:05 PM`.
pub const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Record identifier: creation time in epoch milliseconds.
///
/// Ids are strictly increasing within a log; two records created in the same
/// millisecond get consecutive values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    /// Largest id accepted from storage: the last millisecond a browser
    /// `Date` can represent.
    pub const MAX: RecordId = RecordId(8_640_000_000_000_000);

    /// Next id after `latest` for a record created at `now`.
    ///
    /// Falls back to the clock if `latest` is `i64::MAX`; loaded logs never
    /// hold ids above `RecordId::MAX`.
    pub fn next(latest: Option<RecordId>, now: DateTime<Utc>) -> Self {
        let millis = now.timestamp_millis();
        match latest {
            Some(RecordId(previous)) if previous >= millis => {
                previous.checked_add(1).map_or(RecordId(millis), RecordId)
            }
            _ => RecordId(millis),
        }
    }

    /// Whether the id lies in `1..=RecordId::MAX`.
    pub fn in_range(self) -> bool {
        self.0 > 0 && self <= Self::MAX
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One completed calculation in the history log.
///
/// Records are immutable values. The serialized field names are the ones
/// stored under the `calculatorHistory` key.
///
/// # Example
///
/// ```rust
/// use calcmaster::history::{CalculationRecord, RecordId};
///
/// let record = CalculationRecord::new(RecordId(1), "5 + 3", "8", "1/1/2026, 9:00:00 AM");
/// assert_eq!(record.summary(), "5 + 3 = 8");
///
/// let json = serde_json::to_value(&record).unwrap();
/// assert_eq!(json["calculation"], "5 + 3");
/// assert_eq!(json["result"], "8");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    id: RecordId,
    #[serde(rename = "calculation")]
    expression_text: String,
    #[serde(rename = "result")]
    result_text: String,
    #[serde(rename = "timestamp")]
    timestamp_text: String,
}

impl CalculationRecord {
    pub fn new(
        id: RecordId,
        expression_text: impl Into<String>,
        result_text: impl Into<String>,
        timestamp_text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            expression_text: expression_text.into(),
            result_text: result_text.into(),
            timestamp_text: timestamp_text.into(),
        }
    }

    /// Stamp a reducer calculation with its id and creation time.
    pub fn stamp(calculation: Calculation, id: RecordId, at: DateTime<Local>) -> Self {
        Self {
            id,
            expression_text: calculation.expression,
            result_text: calculation.result,
            timestamp_text: at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn expression_text(&self) -> &str {
        &self.expression_text
    }

    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn timestamp_text(&self) -> &str {
        &self.timestamp_text
    }

    /// `expression = result`, as listed in the history view.
    pub fn summary(&self) -> String {
        format!("{} = {}", self.expression_text, self.result_text)
    }
}
