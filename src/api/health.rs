use crate::{model::employee::Department, service::HrService};
use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct DepartmentListResponse {
    #[schema(example = json!(["Engineering", "Human Resources"]))]
    pub departments: Vec<Department>,
}

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = Object, example = json!({
            "status": "healthy",
            "message": "HRMS API is running!",
            "backend": "memory"
        }))
    ),
    tag = "Health"
)]
pub async fn health(service: web::Data<HrService>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "message": "HRMS API is running!",
        "backend": service.backend()
    }))
}

/// Departments offered by the add-employee form
#[utoipa::path(
    get,
    path = "/api/departments",
    responses(
        (status = 200, description = "Suggested departments", body = DepartmentListResponse)
    ),
    tag = "Employee"
)]
pub async fn list_departments() -> impl Responder {
    HttpResponse::Ok().json(DepartmentListResponse {
        departments: Department::all(),
    })
}
