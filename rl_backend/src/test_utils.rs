use async_trait::async_trait;
use rl_generation::TextGenerator;
use rl_generation::error::{Error, Result};
use std::sync::Mutex;

/// Answers every prompt with the same reply and records the prompts.
#[derive(Debug)]
pub struct StaticGenerator {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl StaticGenerator {
    pub fn new(reply: &str) -> Self {
        StaticGenerator {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StaticGenerator {
    fn name(&self) -> &str {
        "static"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

#[derive(Debug)]
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(&self, _prompt: &str) -> Result<String> {
        Err(Error::Status {
            status: 503,
            body: "model overloaded".to_string(),
        })
    }
}
