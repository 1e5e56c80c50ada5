use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "EMP001",
        "full_name": "John Doe",
        "email": "john.doe@company.com",
        "department": "Engineering",
        "created_at": "2026-01-01T09:00:00Z"
    })
)]
pub struct Employee {
    #[schema(example = "EMP001")]
    pub employee_id: String,

    #[schema(example = "John Doe")]
    pub full_name: String,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(
        example = "2026-01-01T09:00:00Z",
        value_type = String,
        format = "date-time"
    )]
    pub created_at: DateTime<Utc>,
}

/// Fully resolved employee fields, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeProfile {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

/// Payload for creating an employee. Every field is optional on the wire so
/// that a missing name is reported as a validation failure.
#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    /// Generated as `EMP<millis>` when omitted
    #[schema(example = "EMP001")]
    pub employee_id: Option<String>,
    #[schema(example = "John Doe")]
    pub full_name: Option<String>,
    #[schema(example = "john.doe@company.com", format = "email")]
    pub email: Option<String>,
    /// Defaults to `General`
    #[schema(example = "Engineering")]
    pub department: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployee {
    #[schema(example = "John Doe")]
    pub full_name: Option<String>,
    #[schema(example = "john.doe@company.com", format = "email")]
    pub email: Option<String>,
    #[schema(example = "Engineering")]
    pub department: Option<String>,
}
