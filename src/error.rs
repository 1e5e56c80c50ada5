use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::{Display, Error, From};
use tracing::error;

use crate::models::ApiResponse;
use crate::store::StoreError;

/// Failures surfaced by the directory and ledger services.
#[derive(Debug, Display, Error, From)]
pub enum ServiceError {
    /// A required field is missing or malformed
    #[display(fmt = "{}", _0)]
    #[error(ignore)]
    #[from(ignore)]
    Validation(String),

    /// The natural key is already taken
    #[display(fmt = "{}", _0)]
    #[error(ignore)]
    #[from(ignore)]
    Conflict(String),

    /// The referenced employee does not exist
    #[display(fmt = "{}", _0)]
    #[error(ignore)]
    #[from(ignore)]
    Referential(String),

    #[display(fmt = "{}", _0)]
    #[error(ignore)]
    #[from(ignore)]
    NotFound(String),

    #[display(fmt = "store failure: {}", _0)]
    Store(StoreError),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_)
            | ServiceError::Conflict(_)
            | ServiceError::Referential(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ServiceError::Store(e) => {
                error!(error = %e, "Store operation failed");
                ApiResponse::failure("Internal server error").with_error(e.to_string())
            }
            other => ApiResponse::failure(other.to_string()),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
