//! Validation of records loaded from storage using Validation.
//!
//! Each record is checked against every rule and ALL violations are
//! collected, so a single log line explains everything wrong with it.

use super::log::HistoryLog;
use super::record::{CalculationRecord, RecordId};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;
use tracing::warn;

/// Reasons a stored record is rejected
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecordViolation {
    #[error("Record {id} has an empty expression")]
    EmptyExpression { id: RecordId },

    #[error("Record {id} has a non-numeric result '{result}'")]
    UnparsableResult { id: RecordId, result: String },

    #[error("Record {id} repeats an earlier id")]
    DuplicateId { id: RecordId },

    #[error("Record id {id} is outside 1..={max}", max = RecordId::MAX)]
    IdOutOfRange { id: RecordId },
}

/// Check one record, accumulating ALL violations.
///
/// `seen` holds the ids of records accepted before this one.
pub fn validate_record(
    record: &CalculationRecord,
    seen: &HashSet<RecordId>,
) -> Validation<(), NonEmptyVec<RecordViolation>> {
    let id = record.id();
    let mut checks: Vec<Validation<(), NonEmptyVec<RecordViolation>>> = Vec::new();

    checks.push(if record.expression_text().trim().is_empty() {
        Validation::fail(RecordViolation::EmptyExpression { id })
    } else {
        Validation::success(())
    });

    let numeric = record
        .result_text()
        .trim()
        .parse::<f64>()
        .map(f64::is_finite)
        .unwrap_or(false);
    checks.push(if numeric {
        Validation::success(())
    } else {
        Validation::fail(RecordViolation::UnparsableResult {
            id,
            result: record.result_text().to_string(),
        })
    });

    checks.push(if seen.contains(&id) {
        Validation::fail(RecordViolation::DuplicateId { id })
    } else {
        Validation::success(())
    });

    checks.push(if id.in_range() {
        Validation::success(())
    } else {
        Validation::fail(RecordViolation::IdOutOfRange { id })
    });

    Validation::all_vec(checks).map(|_| ())
}

/// Build a log from stored records, dropping any that fail validation.
pub fn sanitize(records: Vec<CalculationRecord>) -> HistoryLog {
    let mut seen = HashSet::new();
    let mut accepted = Vec::with_capacity(records.len());

    for record in records {
        match validate_record(&record, &seen) {
            Validation::Success(_) => {
                seen.insert(record.id());
                accepted.push(record);
            }
            Validation::Failure(violations) => {
                for violation in violations.iter() {
                    warn!(%violation, "dropping stored calculation record");
                }
            }
        }
    }

    HistoryLog::from_records(accepted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, expression: &str, result: &str) -> CalculationRecord {
        CalculationRecord::new(RecordId(id), expression, result, "")
    }

    #[test]
    fn valid_record_passes() {
        let result = validate_record(&record(1, "5 + 3", "8"), &HashSet::new());
        assert!(matches!(result, Validation::Success(_)));
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let seen: HashSet<_> = [RecordId(1)].into_iter().collect();
        let result = validate_record(&record(1, "  ", "oops"), &seen);

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);

                let has_empty = errors
                    .iter()
                    .any(|e| matches!(e, RecordViolation::EmptyExpression { .. }));
                let has_unparsable = errors
                    .iter()
                    .any(|e| matches!(e, RecordViolation::UnparsableResult { .. }));
                let has_duplicate = errors
                    .iter()
                    .any(|e| matches!(e, RecordViolation::DuplicateId { .. }));

                assert!(has_empty);
                assert!(has_unparsable);
                assert!(has_duplicate);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn non_finite_result_is_rejected() {
        let result = validate_record(&record(1, "1 / 0", "Infinity"), &HashSet::new());
        assert!(matches!(result, Validation::Failure(_)));
    }

    #[test]
    fn out_of_range_ids_are_rejected() {
        for id in [0, -3, RecordId::MAX.0 + 1, i64::MAX] {
            let result = validate_record(&record(id, "1 + 1", "2"), &HashSet::new());
            match result {
                Validation::Failure(errors) => {
                    assert_eq!(errors.len(), 1);
                    assert!(errors
                        .iter()
                        .all(|e| matches!(e, RecordViolation::IdOutOfRange { .. })));
                }
                Validation::Success(_) => panic!("Expected id {id} to be rejected"),
            }
        }
    }

    #[test]
    fn sanitize_drops_invalid_and_duplicate_records() {
        let log = sanitize(vec![
            record(3, "1 + 2", "3"),
            record(2, "", "4"),
            record(3, "9 - 1", "8"),
            record(1, "2 × 2", "4"),
        ]);

        let ids: Vec<_> = log.entries().iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![RecordId(3), RecordId(1)]);
    }
}
