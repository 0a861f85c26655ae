use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::store::StoreError;

#[derive(Debug)]
pub enum AppError {
    Validation(String),
    NotFound(String),
    MethodNotAllowed,
    Store(StoreError),
    Template(askama::Error),
    Json(serde_json::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody { error: message.into() })).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => error_body(StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => error_body(StatusCode::NOT_FOUND, msg),
            AppError::MethodNotAllowed => {
                error_body(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
            }
            AppError::Store(e) => {
                tracing::error!("Store error: {e}");
                error_body(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                error_body(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::Json(e) => {
                tracing::error!("JSON encoding error: {e}");
                error_body(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Store(e)
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
