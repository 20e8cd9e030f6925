use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::error::CatalogError;

/// Error returned by route handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body or path could not be understood.
    #[error("{0}")]
    BadRequest(&'static str),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The blocking task running the catalog call did not finish.
    #[error("background task failed: {0}")]
    Task(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Catalog(e) => StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Catalog(CatalogError::NotFound { .. }) => "Product not found".to_string(),
            ApiError::Catalog(CatalogError::Format(_)) => "Invalid request format".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Task(err.to_string())
    }
}
