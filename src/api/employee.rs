use crate::{
    error::HrError,
    model::employee::{CreateEmployee, Employee},
    service::HrService,
};
use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    #[schema(
    example = json!([{
        "employee_id": "EMP-9001",
        "full_name": "Arjun Sharma",
        "email": "arjun.s@company.com",
        "department": "Engineering",
        "created_at": "2024-01-01T09:00:00Z"
    }])
)]
    pub employees: Vec<Employee>,
}

/// Add Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Missing or malformed fields", body = Object, example = json!({
            "error": "Invalid email format: 'asha'"
        })),
        (status = 409, description = "Employee ID already exists", body = Object, example = json!({
            "error": "Employee ID 'EMP-9001' already exists"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    service: web::Data<HrService>,
    payload: web::Json<CreateEmployee>,
) -> Result<impl Responder, HrError> {
    let employee = service.add_employee(&payload).await?;
    Ok(HttpResponse::Created().json(employee))
}

/// List Employees, in the order they were added
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = EmployeeListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(service: web::Data<HrService>) -> Result<impl Responder, HrError> {
    let employees = service.list_employees().await?;
    Ok(HttpResponse::Ok().json(EmployeeListResponse { employees }))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Employee 'EMP-9001' does not exist"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    service: web::Data<HrService>,
    path: web::Path<String>,
) -> Result<impl Responder, HrError> {
    let employee = service.get_employee(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Delete Employee and all of its attendance
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Employee EMP-9001 and associated attendance deleted successfully."
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Employee 'EMP-9001' does not exist"
        })),
        (status = 500, description = "Internal server error", body = Object)
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    service: web::Data<HrService>,
    path: web::Path<String>,
) -> Result<impl Responder, HrError> {
    let employee_id = path.into_inner();
    service.delete_employee(&employee_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": format!("Employee {} and associated attendance deleted successfully.", employee_id)
    })))
}
