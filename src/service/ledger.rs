use super::HrService;
use super::aggregation::summarize;
use crate::error::{HrError, Result};
use crate::model::attendance::{
    AttendanceRecord, AttendanceStatus, EmployeeAttendance, MarkAttendance,
};
use crate::utils::validation::validate_mark;
use chrono::NaiveDate;
use tracing::{debug, info, instrument};

impl HrService {
    /// Upsert on `(employee_id, date)`. Input is validated before the store is
    /// touched, so malformed requests are `InvalidInput` even for unknown ids.
    pub async fn mark_attendance(&self, payload: &MarkAttendance) -> Result<AttendanceRecord> {
        let (employee_id, date, status) = validate_mark(payload)?;
        self.record_attendance(&employee_id, date, status).await
    }

    #[instrument(skip(self))]
    pub async fn record_attendance(
        &self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<AttendanceRecord> {
        let record = self
            .store
            .upsert_attendance(employee_id, date, status)
            .await?
            .ok_or_else(|| HrError::employee_not_found(employee_id))?;

        info!("Attendance marked");
        Ok(record)
    }

    /// All records of one employee, ascending by date, with a fresh summary.
    #[instrument(skip(self))]
    pub async fn get_attendance(&self, employee_id: &str) -> Result<EmployeeAttendance> {
        let (employee, records) = self
            .store
            .employee_attendance(employee_id)
            .await?
            .ok_or_else(|| HrError::employee_not_found(employee_id))?;

        let summary = summarize(&records);
        debug!(total = summary.total_days_recorded, "Attendance fetched");

        Ok(EmployeeAttendance {
            employee_id: employee.employee_id,
            full_name: employee.full_name,
            records,
            summary,
        })
    }
}
