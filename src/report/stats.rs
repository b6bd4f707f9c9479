//! Statistics and grouping of extracted records.

use super::types::RecordSummary;
use crate::types::{DiffRecord, RecordState};

/// Count records per state.
pub fn summarize_records(records: &[DiffRecord]) -> RecordSummary {
    let mut summary = RecordSummary::default();

    for record in records {
        match record.state {
            RecordState::Identical => summary.identical += 1,
            RecordState::Different => summary.different += 1,
            RecordState::Error => summary.error += 1,
        }
    }

    summary.total = summary.identical + summary.different + summary.error;
    summary
}

/// Group records by state, always in identical / different / error order.
///
/// Empty groups are kept so callers can index the result positionally.
pub fn group_by_state(records: &[DiffRecord]) -> Vec<(RecordState, Vec<&DiffRecord>)> {
    [RecordState::Identical, RecordState::Different, RecordState::Error]
        .into_iter()
        .map(|state| (state, records.iter().filter(|r| r.state == state).collect()))
        .collect()
}
