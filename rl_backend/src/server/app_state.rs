use crate::application::suggestion::service::SuggestionService;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
    pub service_suggestion: Arc<SuggestionService>,
}
impl AppState {
    pub fn new(service_suggestion: Arc<SuggestionService>) -> Self {
        AppState { service_suggestion }
    }
}
