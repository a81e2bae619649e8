use serde_json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP request to generation service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Generation service answered with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Prompt was blocked by the generation service: {0}")]
    Blocked(String),

    #[error("Candidate was blocked due to {0}")]
    BadFinishReason(String),
}

pub type Result<T> = std::result::Result<T, crate::error::Error>;
