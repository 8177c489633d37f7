use crate::error::{HrError, Result};
use crate::model::attendance::AttendanceStatus;
use crate::model::employee::CreateEmployee;
use crate::service::HrService;
use chrono::{Duration, NaiveDate};
use tracing::{debug, info};

const DAYS_PER_EMPLOYEE: i64 = 5;

const DEMO_EMPLOYEES: [(&str, &str, &str, &str); 8] = [
    ("EMP-9001", "Arjun Sharma", "arjun.s@company.com", "Engineering"),
    ("EMP-9002", "Priya Patel", "priya.p@company.com", "Product"),
    ("EMP-9003", "Rahul Verma", "rahul.verma@company.com", "Design"),
    ("EMP-9004", "Neha Gupta", "neha.gupta@company.com", "Engineering"),
    ("EMP-9005", "Vikram Singh", "vikram.s@company.com", "Human Resources"),
    ("EMP-9006", "Ananya Desai", "ananya.d@company.com", "Sales"),
    ("EMP-9007", "Rohan Iyer", "rohan.iyer@company.com", "Marketing"),
    ("EMP-9008", "Kavya Menon", "k.menon@company.com", "Finance"),
];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub employees_added: usize,
    pub records_marked: usize,
}

/// Mostly present, one absence in roughly every seven days.
fn demo_status(employee_index: usize, days_ago: i64) -> AttendanceStatus {
    if (employee_index as i64 * DAYS_PER_EMPLOYEE + days_ago) % 7 == 3 {
        AttendanceStatus::Absent
    } else {
        AttendanceStatus::Present
    }
}

/// Loads the demo directory and its attendance for the days ending `today`.
/// Safe to rerun: known employees are skipped and attendance is upserted.
pub async fn seed_demo_data(service: &HrService, today: NaiveDate) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    for (index, (employee_id, full_name, email, department)) in DEMO_EMPLOYEES.iter().enumerate() {
        let payload = CreateEmployee {
            employee_id: employee_id.to_string(),
            full_name: full_name.to_string(),
            email: email.to_string(),
            department: department.to_string(),
        };

        match service.add_employee(&payload).await {
            Ok(_) => report.employees_added += 1,
            Err(HrError::DuplicateKey(_)) => debug!(employee_id, "Demo employee already present"),
            Err(e) => return Err(e),
        }

        for days_ago in 0..DAYS_PER_EMPLOYEE {
            let date = today - Duration::days(days_ago);
            service
                .record_attendance(employee_id, date, demo_status(index, days_ago))
                .await?;
            report.records_marked += 1;
        }
    }

    info!(
        employees_added = report.employees_added,
        records_marked = report.records_marked,
        "Demo data seeded"
    );
    Ok(report)
}
