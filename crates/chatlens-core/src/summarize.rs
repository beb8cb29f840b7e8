use std::sync::Arc;

use chatlens_provider::{ChatRequest, LlmProvider};

/// Marker prefixing every degraded summary, so callers and tests can tell
/// a placeholder from a genuine completion.
pub const DEGRADED_PREFIX: &str = "[summary unavailable]";

const SYSTEM_INSTRUCTION: &str = "Summarize the following conversation in 3-4 sentences.";

/// Outcome of a summarization attempt. The gateway never returns Err:
/// every provider failure is absorbed into `Degraded`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    Generated(String),
    Degraded(String),
}

impl Summary {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Summary::Degraded(_))
    }

    /// Flatten to the string the API serves. Degraded reasons carry the
    /// marker prefix.
    pub fn into_text(self) -> String {
        match self {
            Summary::Generated(text) => text,
            Summary::Degraded(reason) => format!("{DEGRADED_PREFIX} {reason}"),
        }
    }
}

/// Gateway to the external chat-completion API. One best-effort call per
/// request: no caching, no retry.
pub struct Summarizer {
    provider: Option<Arc<dyn LlmProvider>>,
    model: String,
}

impl Summarizer {
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider: Some(provider),
            model: model.into(),
        }
    }

    /// Degraded mode: no credential was configured at startup. Every call
    /// returns a marked placeholder instead of failing the request.
    pub fn disabled(model: impl Into<String>) -> Self {
        Self {
            provider: None,
            model: model.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn summarize(&self, conversation: &str) -> Summary {
        let Some(provider) = &self.provider else {
            return Summary::Degraded("no API credential configured".to_string());
        };

        let request = ChatRequest::new(
            self.model.clone(),
            Some(SYSTEM_INSTRUCTION.to_string()),
            conversation,
        );

        match provider.chat(request).await {
            Ok(response) if response.text.is_empty() => {
                tracing::warn!(model = %self.model, "summarizer returned empty completion");
                Summary::Degraded("empty completion from model".to_string())
            }
            Ok(response) => Summary::Generated(response.text),
            Err(e) => {
                tracing::warn!(model = %self.model, error = %e, "summarization failed");
                Summary::Degraded(format!("{e:#}"))
            }
        }
    }
}
