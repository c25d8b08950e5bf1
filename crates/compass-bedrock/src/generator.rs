use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::BedrockError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input: u64,
    pub output: u64,
}

impl TokenUsage {
    pub fn total(&self) -> u64 {
        self.input + self.output
    }
}

/// Raw text produced by a model, before any post-processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub model_id: String,
    pub text: String,
    pub usage: TokenUsage,
}

/// A text generation provider: one system prompt, one user turn, one reply.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<Generation, BedrockError>;
}

pub type SharedGenerator = Arc<dyn Generator>;
