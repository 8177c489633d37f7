use crate::{
    error::HrError,
    model::attendance::MarkAttendance,
    service::{HrService, aggregation::filter_records},
    utils::validation::parse_date,
};
use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AttendanceQuery {
    /// Only return records of this day (YYYY-MM-DD). The summary still covers every record.
    pub date: Option<String>,
}

/// Mark attendance, overwriting any status already recorded for that day
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 200, description = "Attendance recorded", body = crate::model::attendance::AttendanceRecord),
        (status = 400, description = "Malformed date or status", body = Object, example = json!({
            "error": "Status must be either 'Present' or 'Absent'"
        })),
        (status = 404, description = "Employee does not exist", body = Object, example = json!({
            "error": "Employee 'EMP-9001' does not exist"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    service: web::Data<HrService>,
    payload: web::Json<MarkAttendance>,
) -> Result<impl Responder, HrError> {
    let record = service.mark_attendance(&payload).await?;
    Ok(HttpResponse::Ok().json(record))
}

/// Attendance history and summary of one employee
#[utoipa::path(
    get,
    path = "/api/attendance/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID"),
        AttendanceQuery
    ),
    responses(
        (status = 200, description = "Records ascending by date, with summary", body = crate::model::attendance::EmployeeAttendance),
        (status = 400, description = "Malformed date filter"),
        (status = 404, description = "Employee does not exist", body = Object, example = json!({
            "error": "Employee 'EMP-9001' does not exist"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn get_attendance(
    service: web::Data<HrService>,
    path: web::Path<String>,
    query: web::Query<AttendanceQuery>,
) -> Result<impl Responder, HrError> {
    let exact_date = query.date.as_deref().map(parse_date).transpose()?;

    let mut attendance = service.get_attendance(&path.into_inner()).await?;
    if let Some(date) = exact_date {
        attendance.records = filter_records(&attendance.records, date);
    }

    Ok(HttpResponse::Ok().json(attendance))
}
