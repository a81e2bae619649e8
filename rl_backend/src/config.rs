use crate::domain::suggestion::value_object::TrailingLinePolicy;
use crate::error::{ErrorBackend, Result};
use rl_core::server::default_config::{
    DEFAULT_SERVER_BACKEND_HOST, DEFAULT_SERVER_BACKEND_PORT, DEFAULT_SERVER_BACKEND_PROTOCOL,
};
use rl_generation::gemini::{DEFAULT_GEMINI_API_BASE_URL, DEFAULT_GEMINI_MODEL};
use std::env;

pub const ENV_API_KEY: &str = "GOOGLE_API_KEY";
pub const ENV_PORT: &str = "PORT";
pub const ENV_HOST: &str = "HOST";
pub const ENV_MODEL: &str = "GEMINI_MODEL";
pub const ENV_API_BASE_URL: &str = "GEMINI_API_BASE_URL";
pub const ENV_TRAILING_LINE: &str = "REDLINE_TRAILING_LINE";

/// Process configuration, read once at startup.
#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub host: String,
    pub port: u16,
    pub protocol: String,
    pub model: String,
    pub api_base_url: String,
    pub trailing_line: TrailingLinePolicy,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("protocol", &self.protocol)
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("trailing_line", &self.trailing_line)
            .finish()
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Blank values
    /// count as absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = get(ENV_API_KEY).ok_or(ErrorBackend::MissingConfig(ENV_API_KEY))?;

        let port = get(ENV_PORT).unwrap_or_else(|| DEFAULT_SERVER_BACKEND_PORT.to_string());
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| ErrorBackend::InvalidConfig {
                key: ENV_PORT,
                value: port.clone(),
            })?;

        let trailing_line = match get(ENV_TRAILING_LINE) {
            Some(value) => value
                .parse::<TrailingLinePolicy>()
                .map_err(|value| ErrorBackend::InvalidConfig {
                    key: ENV_TRAILING_LINE,
                    value,
                })?,
            None => TrailingLinePolicy::default(),
        };

        Ok(AppConfig {
            api_key,
            host: get(ENV_HOST).unwrap_or_else(|| DEFAULT_SERVER_BACKEND_HOST.to_string()),
            port,
            protocol: DEFAULT_SERVER_BACKEND_PROTOCOL.to_string(),
            model: get(ENV_MODEL).unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            api_base_url: get(ENV_API_BASE_URL)
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE_URL.to_string()),
            trailing_line,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
