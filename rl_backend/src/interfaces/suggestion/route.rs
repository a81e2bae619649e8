use crate::{
    interfaces::suggestion::controller::create_suggestions_handler, server::app_state::AppState,
};
use axum::routing::post;
use rl_core::server::routes::BackendApiSuggestion;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(
        BackendApiSuggestion::Create.path().as_str(),
        post(create_suggestions_handler),
    )
}
