//! Pure derivations over one employee's records. Nothing here touches the store.

use crate::model::attendance::{AttendanceRecord, AttendanceStatus, AttendanceSummary};
use chrono::NaiveDate;

/// Each record lands in exactly one bucket; upserts guarantee one record per day.
pub fn summarize(records: &[AttendanceRecord]) -> AttendanceSummary {
    let total_present = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Present)
        .count();
    let total_absent = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Absent)
        .count();

    AttendanceSummary {
        total_present,
        total_absent,
        total_days_recorded: records.len(),
    }
}

/// Post-filter over already fetched records, keeping their order.
pub fn filter_records(records: &[AttendanceRecord], exact_date: NaiveDate) -> Vec<AttendanceRecord> {
    records
        .iter()
        .filter(|r| r.date == exact_date)
        .cloned()
        .collect()
}
