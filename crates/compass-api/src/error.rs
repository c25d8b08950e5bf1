use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use compass_core::validation::FieldErrors;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Validation(FieldErrors),
    Unauthorized(String),
    Conflict(String),
    /// The generation provider failed or returned nothing usable.
    Upstream(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<FieldErrors>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, fields) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "validation failed".to_string(),
                Some(errors),
            ),
            ApiError::Unauthorized(msg) => {
                tracing::debug!("unauthorized: {msg}");
                (StatusCode::UNAUTHORIZED, "unauthorized".to_string(), None)
            }
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg, None),
            ApiError::Upstream(msg) => {
                tracing::error!("generation provider error: {msg}");
                (StatusCode::BAD_GATEWAY, "generation failed".to_string(), None)
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    None,
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                error: message,
                fields,
            }),
        )
            .into_response()
    }
}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<compass_storage::error::StorageError> for ApiError {
    fn from(e: compass_storage::error::StorageError) -> Self {
        use compass_storage::error::StorageError;
        match e {
            StorageError::NotFound { key } => ApiError::NotFound(format!("not found: {key}")),
            StorageError::InvalidRecord(inner) => ApiError::BadRequest(inner.to_string()),
            StorageError::PreconditionFailed { key } => {
                ApiError::Conflict(format!("concurrent update to {key}, try again"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<compass_bedrock::error::BedrockError> for ApiError {
    fn from(e: compass_bedrock::error::BedrockError) -> Self {
        ApiError::Upstream(e.to_string())
    }
}

impl From<compass_auth::error::AuthError> for ApiError {
    fn from(e: compass_auth::error::AuthError) -> Self {
        ApiError::Unauthorized(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
