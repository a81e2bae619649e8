use crate::config::AppConfig;
use rl_core::logger::init_logger;
use tracing::error;

mod application;
mod config;
mod domain;
mod error;
mod interfaces;
pub mod server;
#[cfg(test)]
mod test_utils;

fn main() {
    dotenvy::dotenv().ok();
    if let Err(err) = init_logger() {
        eprintln!("Logger unavailable: {err}");
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = server::http_server::http_server_backend(&config) {
        error!("Server stopped: {err}");
        std::process::exit(1);
    }
}
