//! Calculation history.
//!
//! - `CalculationRecord`: one immutable log entry
//! - `HistoryLog`: pure newest-first log
//! - `HistoryStore`: the log plus its persistence commit step
//! - `validation`: checks applied to records read back from storage

mod log;
mod record;
mod store;
pub mod validation;

pub use log::HistoryLog;
pub use record::{CalculationRecord, RecordId, TIMESTAMP_FORMAT};
pub use store::HistoryStore;
pub use validation::RecordViolation;
