use crate::domain::suggestion::prompt::build_prompt;
use crate::domain::suggestion::value_object::{Suggestions, TrailingLinePolicy};
use crate::error::Result;
use rl_generation::TextGenerator;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone, Debug)]
pub struct SuggestionService {
    generator: Arc<dyn TextGenerator>,
    trailing_line: TrailingLinePolicy,
}

impl SuggestionService {
    pub fn new(generator: Arc<dyn TextGenerator>, trailing_line: TrailingLinePolicy) -> Self {
        Self {
            generator,
            trailing_line,
        }
    }

    pub async fn suggest(&self, content: &str) -> Result<Suggestions> {
        let prompt = build_prompt(content);
        debug!(
            "Requesting suggestions from {} for {} bytes of content",
            self.generator.name(),
            content.len()
        );
        let reply = self.generator.generate(&prompt).await?;
        let suggestions = Suggestions::parse(&reply, self.trailing_line);
        debug!("Parsed {} suggestions", suggestions.len());
        Ok(suggestions)
    }
}
