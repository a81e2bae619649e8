use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rl_core::server::payload::error_response::ErrorResponse;
use thiserror::Error;
use tracing::{error, warn};

pub type ResultAPI<T> = std::result::Result<Json<T>, crate::error::ErrorBackend>;
pub type Result<T> = std::result::Result<T, crate::error::ErrorBackend>;

/// Message returned to clients for any failure on the server side.
pub const GENERIC_ERROR_MESSAGE: &str = "Error processing request";

#[derive(Debug, Error)]
pub enum ErrorBackend {
    #[error(transparent)]
    Generation(#[from] rl_generation::error::Error),

    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    #[error("Missing configuration value: {0}")]
    MissingConfig(&'static str),

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}

impl IntoResponse for ErrorBackend {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ErrorBackend::JsonRejection(rejection) => (rejection.status(), rejection.body_text()),
            ErrorBackend::Generation(_)
            | ErrorBackend::MissingConfig(_)
            | ErrorBackend::InvalidConfig { .. }
            | ErrorBackend::IOError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_ERROR_MESSAGE.to_string(),
            ),
        };

        if status.is_server_error() {
            error!("Error occurred: {:?}", self);
        } else {
            warn!("Rejected request: {}", self);
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
