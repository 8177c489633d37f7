use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "EMP-9001",
        "full_name": "Arjun Sharma",
        "email": "arjun.s@company.com",
        "department": "Engineering",
        "created_at": "2024-01-01T09:00:00Z"
    })
)]
pub struct Employee {
    #[schema(example = "EMP-9001")]
    pub employee_id: String,

    #[schema(example = "Arjun Sharma")]
    pub full_name: String,

    #[schema(example = "arjun.s@company.com")]
    pub email: String,

    /// Free text. See [`Department`] for the values the UI offers.
    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(example = "2024-01-01T09:00:00Z", value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

/// Add-employee payload. Missing fields deserialize as empty strings and are
/// rejected by validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct CreateEmployee {
    #[schema(example = "EMP-9001")]
    pub employee_id: String,
    #[schema(example = "Arjun Sharma")]
    pub full_name: String,
    #[schema(example = "arjun.s@company.com", format = "email")]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
}

/// A trimmed and validated [`CreateEmployee`], ready for the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

/// Departments offered by the UI. Advisory only: the directory accepts any
/// non-empty department.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, AsRefStr, Display, EnumIter,
    EnumString,
)]
pub enum Department {
    Engineering,
    #[strum(serialize = "Human Resources")]
    #[serde(rename = "Human Resources")]
    HumanResources,
    Marketing,
    Sales,
    Finance,
    Operations,
    #[strum(serialize = "IT Support")]
    #[serde(rename = "IT Support")]
    ItSupport,
}

impl Department {
    pub fn all() -> Vec<Department> {
        Department::iter().collect()
    }

    pub fn is_known(name: &str) -> bool {
        name.parse::<Department>().is_ok()
    }
}
