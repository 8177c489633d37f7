use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::{Display, Error, From};
use serde_json::json;
use tracing::error;

/// Every failure the directory, the ledger and their stores can report.
#[derive(Debug, Display, Error, From)]
pub enum HrError {
    /// Malformed or missing request fields. The caller should correct and resubmit.
    #[display(fmt = "{}", _0)]
    #[from(ignore)]
    InvalidInput(#[error(not(source))] String),

    /// Identity collision on create.
    #[display(fmt = "{}", _0)]
    #[from(ignore)]
    DuplicateKey(#[error(not(source))] String),

    /// Reference to an employee that does not exist.
    #[display(fmt = "{}", _0)]
    #[from(ignore)]
    NotFound(#[error(not(source))] String),

    /// Fault in the durable backend. Never reported as `NotFound`.
    #[display(fmt = "Storage error: {}", _0)]
    Storage(sqlx::Error),

    /// A writer panicked while holding the in-memory store lock.
    #[display(fmt = "Storage error: in-memory store lock poisoned")]
    #[from(ignore)]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, HrError>;

impl HrError {
    pub fn employee_not_found(employee_id: &str) -> Self {
        HrError::NotFound(format!("Employee '{}' does not exist", employee_id))
    }

    pub fn duplicate_employee(employee_id: &str) -> Self {
        HrError::DuplicateKey(format!("Employee ID '{}' already exists", employee_id))
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, HrError::Storage(_) | HrError::Poisoned)
    }
}

impl ResponseError for HrError {
    fn status_code(&self) -> StatusCode {
        match self {
            HrError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            HrError::DuplicateKey(_) => StatusCode::CONFLICT,
            HrError::NotFound(_) => StatusCode::NOT_FOUND,
            HrError::Storage(_) | HrError::Poisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = if self.is_storage() {
            error!(error = %self, "Request failed in the storage layer");
            "Something went wrong, Contact with system admin".to_string()
        } else {
            self.to_string()
        };

        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}
