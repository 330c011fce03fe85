use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StorageError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    DuplicateKey(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Storage error")]
    Storage(#[from] StorageError),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

/// Error body shared by every endpoint, matching what the frontend expects.
#[derive(Serialize)]
struct ErrorDetail {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::DuplicateKey(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Storage(err) => {
                tracing::error!(error = %err, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "unhandled error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = ErrorDetail { detail };
        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
