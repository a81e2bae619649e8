pub const DEFAULT_SERVER_BACKEND_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_BACKEND_PORT: &str = "3000";
pub const DEFAULT_SERVER_BACKEND_PROTOCOL: &str = "http";

/// Where the CLI looks for a running backend when `--server` is not given.
pub const DEFAULT_SERVER_BACKEND_URL: &str = "http://localhost:3000";
