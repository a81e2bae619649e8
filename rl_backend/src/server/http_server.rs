use crate::application::suggestion::service::SuggestionService;
use crate::config::AppConfig;
use crate::error::{ErrorBackend, Result};
use crate::interfaces::suggestion;
use crate::server::app_state::AppState;
use axum::http::StatusCode;
use rl_core::server::routes::all_backend_api_paths;
use rl_generation::{GeminiClient, TextGenerator};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::{error, info, Level};

/// Simple fallback handler for unmatched routes.
async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Builds the application router around a shared state.
///
/// Browser clients from any origin are allowed, and every request is traced
/// at INFO level (failures at ERROR).
pub fn build_router(app_state: Arc<AppState>) -> axum::Router {
    let routes_api = axum::Router::new()
        .merge(suggestion::route::routes())
        .with_state(app_state);

    axum::Router::new()
        .merge(routes_api)
        .fallback(fallback)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

/// Starts the HTTP server with a single shared Gemini client.
///
/// # Arguments
/// * `config` - Startup configuration: credentials, model, listen address.
///
/// # Returns
/// * `Result<()>` - `Ok` once the server shuts down, or an `ErrorBackend` if
///   binding or serving fails.
#[tokio::main]
pub async fn http_server_backend(config: &AppConfig) -> Result<()> {
    let gemini = GeminiClient::new(&config.api_key, &config.model, &config.api_base_url);
    info!(
        "Using {} model {} (trailing line policy: {:?})",
        gemini.name(),
        gemini.model(),
        config.trailing_line
    );
    let generator: Arc<dyn TextGenerator> = Arc::new(gemini);

    let service_suggestion = Arc::new(SuggestionService::new(generator, config.trailing_line));
    let app_state = Arc::new(AppState::new(service_suggestion));
    let router = build_router(app_state);

    for (method, path) in all_backend_api_paths() {
        info!("Route {method} {}", path.as_str());
    }

    let address = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind to {address}. {}", err);
            return Err(ErrorBackend::from(err));
        }
    };
    let port = listener.local_addr()?.port();
    info!(
        "Server listening on port {port} ({}://{}:{port})",
        config.protocol, config.host
    );
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
