use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

const ROLE_USER: &str = "user";

/// Finish reasons for which the hosted SDK refuses to hand out the text.
const BAD_FINISH_REASONS: [&str; 3] = ["RECITATION", "SAFETY", "LANGUAGE"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Single user turn carrying the whole prompt as one text part.
    pub fn from_prompt(prompt: &str) -> Self {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some(ROLE_USER.to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
    #[serde(default)]
    pub block_reason_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts concatenated.
    ///
    /// Fails when the prompt was blocked or the first candidate stopped for a
    /// safety/recitation reason. A reply with neither candidates nor feedback
    /// yields an empty string.
    pub fn text(&self) -> Result<String> {
        let Some(candidate) = self.candidates.first() else {
            return match &self.prompt_feedback {
                Some(feedback) => Err(Error::Blocked(feedback.describe())),
                None => Ok(String::new()),
            };
        };

        if let Some(reason) = candidate.finish_reason.as_deref() {
            if BAD_FINISH_REASONS.contains(&reason) {
                return Err(Error::BadFinishReason(reason.to_string()));
            }
        }

        let text = candidate
            .content
            .as_ref()
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default();
        Ok(text)
    }
}

impl PromptFeedback {
    fn describe(&self) -> String {
        match (&self.block_reason, &self.block_reason_message) {
            (Some(reason), Some(message)) => format!("{reason}: {message}"),
            (Some(reason), None) => reason.clone(),
            (None, Some(message)) => message.clone(),
            (None, None) => String::from("no reason given"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> GenerateContentResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_request_shape() {
        let json = serde_json::to_value(GenerateContentRequest::from_prompt("Text: hi\nmore")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "contents": [{ "role": "user", "parts": [{ "text": "Text: hi\nmore" }] }]
            })
        );
    }

    #[test]
    fn test_text_concatenates_parts_of_first_candidate() {
        let response = parse(
            r#"{
                "candidates": [
                    {"content": {"role": "model", "parts": [{"text": "A.\nB."}, {"text": "\nC.\n"}]}, "finishReason": "STOP"},
                    {"content": {"role": "model", "parts": [{"text": "ignored"}]}}
                ]
            }"#,
        );
        assert_eq!(response.text().unwrap(), "A.\nB.\nC.\n");
    }

    #[test]
    fn test_text_blocked_prompt() {
        let response = parse(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#);
        match response.text() {
            Err(Error::Blocked(reason)) => assert_eq!(reason, "SAFETY"),
            other => panic!("expected blocked prompt, got {other:?}"),
        }
    }

    #[test]
    fn test_text_bad_finish_reason() {
        let response = parse(
            r#"{"candidates": [{"content": {"parts": [{"text": "partial"}]}, "finishReason": "RECITATION"}]}"#,
        );
        assert!(matches!(response.text(), Err(Error::BadFinishReason(r)) if r == "RECITATION"));
    }

    #[test]
    fn test_text_unsupported_language_finish_reason() {
        let response = parse(
            r#"{"candidates": [{"content": {"parts": [{"text": "..."}]}, "finishReason": "LANGUAGE"}]}"#,
        );
        assert!(matches!(response.text(), Err(Error::BadFinishReason(r)) if r == "LANGUAGE"));
    }

    #[test]
    fn test_text_without_candidates_or_feedback_is_empty() {
        assert_eq!(parse("{}").text().unwrap(), "");
    }

    #[test]
    fn test_text_candidate_without_text_parts() {
        let response = parse(r#"{"candidates": [{"finishReason": "MAX_TOKENS"}]}"#);
        assert_eq!(response.text().unwrap(), "");
    }
}
