use crate::error::{ErrorCli, Result};
use reqwest::{Client, Response};
use rl_core::error::ErrorCore;
use rl_core::server::payload::error_response::ErrorResponse;
use rl_core::server::payload::suggestions_request::SuggestionsRequest;
use rl_core::server::routes::BackendApiSuggestion;

pub struct CliClient {
    client: Client,
    base_url: String,
}

impl CliClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::new();
        CliClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn handle_response(
        &self,
        res: std::result::Result<Response, reqwest::Error>,
    ) -> Result<String> {
        let res = match res {
            Ok(res) => res,
            Err(e) if e.is_connect() => return Err(ErrorCli::ConnectionRefused(self.base_url.clone())),
            Err(e) => return Err(ErrorCli::Http(e)),
        };

        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            return Err(ErrorCli::Server {
                status: status.as_u16(),
                message,
            });
        }
        Ok(text)
    }

    pub async fn create_suggestions(&self, request: &SuggestionsRequest) -> Result<Vec<String>> {
        let url = format!(
            "{}{}",
            self.base_url,
            BackendApiSuggestion::Create.path().as_str()
        );
        let result = self.client.post(&url).json(request).send().await;
        let response = self.handle_response(result).await?;
        let suggestions: Vec<String> =
            serde_json::from_str(&response).map_err(ErrorCore::from)?;
        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::post;
    use serde_json::{Value, json};

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn test_create_suggestions() {
        let router = Router::new().route(
            "/suggestions",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({ "content": "My draft." }));
                Json(json!(["A.", "B.", "C."]))
            }),
        );
        let client = CliClient::new(&spawn_server(router).await);

        let suggestions = client
            .create_suggestions(&SuggestionsRequest::new("My draft."))
            .await
            .unwrap();
        assert_eq!(suggestions, vec!["A.", "B.", "C."]);
    }

    #[tokio::test]
    async fn test_server_error_message_is_surfaced() {
        let router = Router::new().route(
            "/suggestions",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Error processing request" })),
                )
            }),
        );
        let client = CliClient::new(&spawn_server(router).await);

        match client.create_suggestions(&SuggestionsRequest::new("x")).await {
            Err(ErrorCli::Server { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Error processing request");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = CliClient::new(&format!("http://{addr}"));

        assert!(matches!(
            client.create_suggestions(&SuggestionsRequest::new("x")).await,
            Err(ErrorCli::ConnectionRefused(_))
        ));
    }
}
