//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::infrastructure::config::ConfigError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("{0}")]
    Validation(String),

    #[error("Malformed upload: {0}")]
    Upload(#[from] axum::extract::multipart::MultipartError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PortalError {
    pub fn validation(err: impl std::fmt::Display) -> Self {
        Self::Validation(err.to_string())
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
            Self::Upload(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::Config(err) => {
                tracing::error!(error = %err, "config store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::Io(err) => {
                tracing::error!(error = %err, "filesystem error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                status: "ERROR",
                error: message,
            }),
        )
            .into_response()
    }
}
