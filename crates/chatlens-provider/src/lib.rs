pub mod openai;
pub mod types;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

pub use openai::{OpenAiProvider, ProviderErrorKind};
pub use types::{ChatRequest, ChatResponse};

#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse>;
    async fn health(&self) -> Result<()> {
        Ok(())
    }
}

/// Deterministic provider for tests: echoes the request back.
pub struct StubProvider;

#[async_trait]
impl LlmProvider for StubProvider {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let text = format!("[stub:{}] {}", request.model, request.user);
        Ok(ChatResponse {
            text,
            input_tokens: None,
            output_tokens: None,
        })
    }
}

/// Provider that fails every call, for degraded-path tests.
pub struct FailingProvider {
    pub reason: String,
}

impl FailingProvider {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl LlmProvider for FailingProvider {
    async fn chat(&self, _request: ChatRequest) -> Result<ChatResponse> {
        Err(anyhow!("{}", self.reason))
    }

    async fn health(&self) -> Result<()> {
        Err(anyhow!("{}", self.reason))
    }
}
