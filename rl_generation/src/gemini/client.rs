use crate::error::{Error, Result};
use crate::gemini::payload::{GenerateContentRequest, GenerateContentResponse};
use crate::generator::TextGenerator;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini `generateContent` client.
///
/// Holds one pooled `reqwest::Client`; clones share the pool. No request
/// timeout is set, latency is bounded by the service itself.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    pub fn new(api_key: &str, model: &str, base_url: &str) -> Self {
        GeminiClient {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    pub async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse> {
        let url = self.endpoint();
        debug!("Sending prompt of {} bytes to {}", prompt.len(), url);

        let res = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response: GenerateContentResponse = serde_json::from_str(&body)?;
        if response.candidates.len() > 1 {
            warn!(
                "Generation returned {} candidates, only the first one is used",
                response.candidates.len()
            );
        }
        Ok(response)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_content(prompt).await?.text()
    }
}
