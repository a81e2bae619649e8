use crate::error::Result;
use async_trait::async_trait;
use std::fmt::Debug;

/// Port to a text-completion service: one prompt in, one completion out.
///
/// Implementations are built once at startup and shared between requests,
/// so they must not keep per-request mutable state.
#[async_trait]
pub trait TextGenerator: Send + Sync + Debug {
    /// Provider name, used for logging.
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String>;
}
