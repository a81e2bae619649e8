use crate::client::CliClient;
use crate::error::{ErrorCli, Result};
use rl_core::error::ErrorCore;
use rl_core::server::payload::suggestions_request::SuggestionsRequest;
use std::io::Read;
use std::path::PathBuf;

/// Picks the text to review: inline argument, then file, then `stdin`.
fn read_content(text: Option<String>, file: Option<PathBuf>, mut stdin: impl Read) -> Result<String> {
    let content = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path).map_err(ErrorCore::from)?,
        (None, None) => {
            let mut buffer = String::new();
            stdin.read_to_string(&mut buffer).map_err(ErrorCore::from)?;
            buffer
        }
    };
    if content.trim().is_empty() {
        return Err(ErrorCli::EmptyInput);
    }
    Ok(content)
}

fn format_suggestions(suggestions: &[String]) -> String {
    match suggestions.len() {
        0 => String::from("No suggestions returned."),
        _ => suggestions
            .iter()
            .enumerate()
            .map(|(i, suggestion)| format!("{}. {}", i + 1, suggestion))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

pub async fn handle(
    cli_client: &CliClient,
    text: Option<String>,
    file: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let content = read_content(text, file, std::io::stdin())?;
    let suggestions = cli_client
        .create_suggestions(&SuggestionsRequest::new(content))
        .await?;

    if json {
        let raw = serde_json::to_string_pretty(&suggestions).map_err(ErrorCore::from)?;
        println!("{}", raw);
    } else {
        println!("{}", format_suggestions(&suggestions));
    }
    Ok(())
}
