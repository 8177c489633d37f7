use crate::api::employee::EmployeeListResponse;
use crate::api::health::DepartmentListResponse;
use crate::model::attendance::{
    AttendanceRecord, AttendanceStatus, AttendanceSummary, EmployeeAttendance, MarkAttendance,
};
use crate::model::employee::{CreateEmployee, Department, Employee};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

A small human-resources record keeper: an **employee directory** and a **daily attendance ledger**.

### 🔹 Key Features
- **Employee Management**
  - Add, list, view and delete employees (deleting also removes their attendance)
- **Attendance Management**
  - Mark an employee Present or Absent for a day (re-marking overwrites)
  - View attendance history with present/absent totals

### 📦 Response Format
- JSON bodies; failures are `{"error": "..."}` with 400, 404 or 409

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::health::health,
        crate::api::health::list_departments,

        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::get_attendance
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            Department,
            EmployeeListResponse,
            DepartmentListResponse,
            AttendanceStatus,
            AttendanceRecord,
            MarkAttendance,
            AttendanceSummary,
            EmployeeAttendance
        )
    ),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Employee", description = "Employee directory APIs"),
        (name = "Attendance", description = "Attendance ledger APIs"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in [
            "/api/health",
            "/api/departments",
            "/api/employees",
            "/api/employees/{employee_id}",
            "/api/attendance",
            "/api/attendance/{employee_id}",
        ] {
            assert!(paths.iter().any(|p| p.as_str() == expected), "{expected}");
        }
    }
}
