use thiserror::Error;
pub type Result<T> = std::result::Result<T, ErrorCli>;

#[derive(Error, Debug)]
pub enum ErrorCli {
    #[error(transparent)]
    Core(#[from] rl_core::error::ErrorCore),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not connect to server at {0}. Is it running?")]
    ConnectionRefused(String),

    #[error("Server answered {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Nothing to review: the text is empty")]
    EmptyInput,
}
