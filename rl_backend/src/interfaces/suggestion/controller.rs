use crate::domain::suggestion::value_object::Suggestions;
use crate::error::ResultAPI;
use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use rl_core::server::payload::suggestions_request::SuggestionsRequest;
use std::sync::Arc;

/// `POST /suggestions`: improvement suggestions for `content`, as a JSON array.
pub async fn create_suggestions_handler(
    State(state): State<Arc<AppState>>,
    req: std::result::Result<Json<SuggestionsRequest>, JsonRejection>,
) -> ResultAPI<Suggestions> {
    let req = req?.0;
    let suggestions = state.service_suggestion.suggest(&req.content).await?;
    Ok(Json(suggestions))
}
