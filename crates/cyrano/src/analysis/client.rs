//! Anthropic Messages API client used for conversation analysis.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LlmConfig;

const API_VERSION: &str = "2023-06-01";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// A text completion backend. Implementations must not retry on their own; the
/// caller decides whether a failed analysis is retried.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("analysis provider is not configured; set ANTHROPIC_API_KEY")]
    NotConfigured,
    #[error("failed to build analysis HTTP client: {0}")]
    Client(String),
    #[error("request to analysis provider failed: {0}")]
    Transport(String),
    #[error("analysis provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("analysis provider returned no text content")]
    EmptyResponse,
}

pub struct AnthropicProvider {
    client: Client,
    config: LlmConfig,
}

impl AnthropicProvider {
    pub fn new(config: LlmConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|error| ProviderError::Client(error.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [RequestMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

/// First text block of a Messages API reply.
fn first_text(response: MessagesResponse) -> Option<String> {
    response.content.into_iter().find_map(|block| match block {
        ContentBlock::Text { text } => Some(text),
        ContentBlock::Other => None,
    })
}

#[async_trait]
impl AnalysisProvider for AnthropicProvider {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ProviderError::NotConfigured)?;

        let body = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            system,
            messages: [RequestMessage {
                role: "user",
                content: user,
            }],
        };

        debug!(model = %self.config.model, "sending analysis request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|error| ProviderError::Transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|error| ProviderError::Transport(error.to_string()))?;

        first_text(parsed).ok_or(ProviderError::EmptyResponse)
    }
}
