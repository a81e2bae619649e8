use crate::error::{ErrorCore, Result};
use std::env;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Picks the log filter: `REDLINE_DEBUG=true` forces debug, otherwise
/// `RUST_LOG` is honoured with `info` as fallback.
fn build_filter(redline_debug: Option<&str>) -> EnvFilter {
    if redline_debug == Some("true") {
        return EnvFilter::new("debug");
    }
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}

pub fn init_logger() -> Result<()> {
    let redline_debug = env::var("REDLINE_DEBUG").ok();
    let filter = build_filter(redline_debug.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|e| ErrorCore::LoggerInit(e.to_string()))
}
