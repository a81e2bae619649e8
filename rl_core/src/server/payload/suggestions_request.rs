use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SuggestionsRequest {
    pub content: String,
}

impl SuggestionsRequest {
    pub fn new(content: impl Into<String>) -> Self {
        SuggestionsRequest {
            content: content.into(),
        }
    }
}
