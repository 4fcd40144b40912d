use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::StoreError;

/// Body returned for every server-side failure. The cause is only logged.
pub const SAVE_FAILED: &str = "Error saving message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingField(&'static str),
    NotAString(&'static str),
    MalformedBody(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingField(field) => write!(f, "Missing required field: {field}"),
            ValidationError::NotAString(field) => write!(f, "Field must be a string: {field}"),
            ValidationError::MalformedBody(msg) => write!(f, "Malformed request body: {msg}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug)]
pub enum AppError {
    /// Caller error, reported as 400 with the reason.
    BadRequest(ValidationError),
    /// Caller error reported like any other failure: a bare 500.
    Rejected(ValidationError),
    Store(StoreError),
}

impl AppError {
    pub fn validation(err: ValidationError, strict_status: bool) -> Self {
        if strict_status {
            AppError::BadRequest(err)
        } else {
            AppError::Rejected(err)
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(err) => write!(f, "Bad Request: {err}"),
            AppError::Rejected(err) => write!(f, "Rejected: {err}"),
            AppError::Store(err) => write!(f, "Store Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(err) => {
                tracing::debug!("Rejected submission: {err}");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            AppError::Rejected(err) => {
                tracing::warn!("Rejected submission: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, SAVE_FAILED.to_string())
            }
            AppError::Store(err) => {
                tracing::error!("DB save error: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, SAVE_FAILED.to_string())
            }
        };

        (status, message).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}
