use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// A single structural validation failure, attached to one DTO field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Unified service error type used across all modules.
///
/// Each variant maps to an HTTP status code. The boundary translator is
/// the [`IntoResponse`] impl, which renders an RFC 7807 problem document:
///
/// ```json
/// {"status": 404, "title": "Resource not found", "detail": "yard 'abc' not found"}
/// ```
///
/// Validation failures additionally carry the per-field list under
/// `errors`.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Target or referenced resource does not exist. HTTP 404.
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness rule violated. HTTP 409.
    #[error("{0}")]
    Conflict(String),

    /// Structural DTO validation failed. HTTP 400.
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Storage backend failure. HTTP 500.
    #[error("{0}")]
    Storage(String),

    /// Unexpected internal error. HTTP 500.
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    /// Problem-document title for this error kind.
    pub fn title(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => "Resource not found",
            ServiceError::Conflict(_) => "Conflict",
            ServiceError::Validation(_) => "Validation error",
            ServiceError::Storage(_) | ServiceError::Internal(_) => "Internal error",
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Storage(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Render the problem-document body.
    pub fn problem_body(&self) -> serde_json::Value {
        let mut body = serde_json::json!({
            "status": self.status_code().as_u16(),
            "title": self.title(),
            "detail": self.to_string(),
        });
        if let ServiceError::Validation(errors) = self {
            body["errors"] = serde_json::json!(errors);
        }
        body
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.problem_body().to_string();
        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            body,
        )
            .into_response()
    }
}
