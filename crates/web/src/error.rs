use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use std::fmt;
use storage::error::StorageError;
use validator::ValidationErrors;

const INTERNAL_ERROR: &str = "An internal error occurred";

/// Errors a handler can answer with. Each renders as `{"error": ...}`.
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    BadRequest(String),
    NotFound,
}

impl WebError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Storage(StorageError::SchemaViolation(_))
            | Self::Validation(_)
            | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::NotFound => write!(f, "Resource not found"),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            Self::Storage(StorageError::SchemaViolation(msg)) | Self::BadRequest(msg) => {
                json!({ "error": msg })
            }
            Self::Storage(e) => {
                // Connection details stay in the log
                tracing::error!(
                    error = ?e,
                    connection_failure = e.is_connection_failure(),
                    "Storage operation failed"
                );
                json!({ "error": INTERNAL_ERROR })
            }
            Self::Validation(errors) => json!({
                "error": "Validation failed",
                "details": describe(&errors),
            }),
            Self::NotFound => json!({ "error": "Resource not found" }),
        };

        (status, Json(body)).into_response()
    }
}

/// One `field: message` line per failed rule, falling back to the rule code.
fn describe(errors: &ValidationErrors) -> Value {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, failures)| {
            failures.iter().map(move |failure| {
                let message = failure
                    .message
                    .as_deref()
                    .map_or_else(|| failure.code.to_string(), str::to_string);
                Value::String(format!("{}: {}", field, message))
            })
        })
        .collect()
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}
