use serde::Serialize;
use std::str::FromStr;

/// What to do with the last element after splitting the generator reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingLinePolicy {
    /// Always remove the last element, even when it holds a suggestion.
    #[default]
    DropLast,
    /// Remove the last element only when it is blank.
    DropIfEmpty,
}

impl FromStr for TrailingLinePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drop-last" => Ok(TrailingLinePolicy::DropLast),
            "drop-if-empty" => Ok(TrailingLinePolicy::DropIfEmpty),
            other => Err(other.to_string()),
        }
    }
}

/// Ordered, trimmed lines of a generator reply. Serialized as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Suggestions(Vec<String>);

impl Suggestions {
    /// Splits `reply` on `\n`, trims every element and removes the trailing
    /// one according to `policy`. The count is not validated.
    pub fn parse(reply: &str, policy: TrailingLinePolicy) -> Self {
        let mut lines = reply
            .split('\n')
            .map(|line| line.trim().to_string())
            .collect::<Vec<_>>();

        match policy {
            TrailingLinePolicy::DropLast => {
                lines.pop();
            }
            TrailingLinePolicy::DropIfEmpty => {
                if lines.last().is_some_and(|line| line.is_empty()) {
                    lines.pop();
                }
            }
        }
        Suggestions(lines)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Suggestions> for Vec<String> {
    fn from(suggestions: Suggestions) -> Self {
        suggestions.0
    }
}
