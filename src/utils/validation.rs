use crate::error::{HrError, Result};
use crate::model::attendance::{AttendanceStatus, MarkAttendance};
use crate::model::employee::{CreateEmployee, NewEmployee};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

const DATE_FORMAT: &str = "%Y-%m-%d";

// Column widths of the `employees` table, counted in characters.
pub const MAX_EMPLOYEE_ID_LEN: usize = 64;
pub const MAX_FULL_NAME_LEN: usize = 255;
pub const MAX_EMAIL_LEN: usize = 255;
pub const MAX_DEPARTMENT_LEN: usize = 128;

/// Basic `local@domain.tld` shape.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("email pattern compiles"));

fn required(value: &str, field: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(HrError::InvalidInput(format!("{} is required", field)));
    }
    Ok(value.to_string())
}

/// Required, and no longer than its column.
fn bounded(value: &str, field: &str, max_len: usize) -> Result<String> {
    let value = required(value, field)?;
    if value.chars().count() > max_len {
        return Err(HrError::InvalidInput(format!(
            "{} must be at most {} characters",
            field, max_len
        )));
    }
    Ok(value)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn validate_new_employee(payload: &CreateEmployee) -> Result<NewEmployee> {
    let employee_id = bounded(&payload.employee_id, "employee_id", MAX_EMPLOYEE_ID_LEN)?;
    let full_name = bounded(&payload.full_name, "full_name", MAX_FULL_NAME_LEN)?;
    let email = bounded(&payload.email, "email", MAX_EMAIL_LEN)?;
    let department = bounded(&payload.department, "department", MAX_DEPARTMENT_LEN)?;

    if !is_valid_email(&email) {
        return Err(HrError::InvalidInput(format!(
            "Invalid email format: '{}'",
            email
        )));
    }

    Ok(NewEmployee {
        employee_id,
        full_name,
        email,
        department,
    })
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        HrError::InvalidInput(format!(
            "Invalid date '{}'. Please use YYYY-MM-DD",
            raw.trim()
        ))
    })
}

pub fn parse_status(raw: &str) -> Result<AttendanceStatus> {
    raw.trim().parse::<AttendanceStatus>().map_err(|_| {
        HrError::InvalidInput("Status must be either 'Present' or 'Absent'".to_string())
    })
}

pub fn validate_mark(payload: &MarkAttendance) -> Result<(String, NaiveDate, AttendanceStatus)> {
    let employee_id = bounded(&payload.employee_id, "employee_id", MAX_EMPLOYEE_ID_LEN)?;
    let date = parse_date(&required(&payload.date, "date")?)?;
    let status = parse_status(&required(&payload.status, "status")?)?;
    Ok((employee_id, date, status))
}
