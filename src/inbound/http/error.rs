//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while rendering the exact JSON
//! bodies of the externally observable contract: validation failures as
//! `{"errors": [...]}`, missing records as `{"message": ...}`, and store
//! failures as an opaque `{"error": ...}`.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::error;

use crate::domain::Error;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation { .. } | Error::FieldValidation { .. } => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Error::Validation { errors } => {
                HttpResponse::BadRequest().json(json!({ "errors": errors }))
            }
            Error::FieldValidation { violation } => {
                HttpResponse::BadRequest().json(json!({ "errors": [violation] }))
            }
            Error::NotFound { id } => HttpResponse::NotFound().json(json!({
                "message": format!("Application with ID {id} not found.")
            })),
            Error::Persistence { message } => {
                error!(error = %message, "store failure surfaced as 500");
                HttpResponse::InternalServerError().json(json!({ "error": message }))
            }
        }
    }
}
