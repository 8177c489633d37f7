use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, AsRefStr, Display,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// One status per employee per calendar day. Re-marking a day overwrites it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "employee_id": "EMP-9001",
    "date": "2024-01-01",
    "status": "Present",
    "updated_at": "2024-01-01T09:00:00Z"
}))]
pub struct AttendanceRecord {
    pub employee_id: String,
    #[schema(example = "2024-01-01", value_type = String, format = Date)]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[schema(example = "2024-01-01T09:00:00Z", value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

/// Mark-attendance payload, validated into a typed date and status.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct MarkAttendance {
    #[schema(example = "EMP-9001")]
    pub employee_id: String,
    #[schema(example = "2024-01-01", format = Date)]
    pub date: String,
    #[schema(example = "Present")]
    pub status: String,
}

/// Derived on every read, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceSummary {
    #[schema(example = 2)]
    pub total_present: usize,
    #[schema(example = 1)]
    pub total_absent: usize,
    #[schema(example = 3)]
    pub total_days_recorded: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeAttendance {
    #[schema(example = "EMP-9001")]
    pub employee_id: String,
    #[schema(example = "Arjun Sharma")]
    pub full_name: String,
    /// Ascending by date.
    pub records: Vec<AttendanceRecord>,
    pub summary: AttendanceSummary,
}
