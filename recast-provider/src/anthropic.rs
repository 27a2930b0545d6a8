//! Anthropic Messages API adapter.

use recast_core::error::RecastError;
use recast_core::prompt::CompletionPrompt;
use recast_core::provider::CompletionProvider;
use recast_core::types::ProviderInfo;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-20240620";
const MAX_TOKENS: u32 = 4096;

/// Adapter for Anthropic's Messages API
#[derive(Clone)]
pub struct AnthropicProvider {
    client: reqwest::Client,
    api_key: String,
    info: Arc<ProviderInfo>,
}

impl std::fmt::Debug for AnthropicProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicProvider")
            .field("info", &self.info)
            .finish()
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'static str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<UserMessage<'a>>,
}

#[derive(Serialize)]
struct UserMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

impl AnthropicProvider {
    /// Create a new Anthropic adapter
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            info: Arc::new(ProviderInfo {
                id: "anthropic".to_string(),
                name: "Anthropic".to_string(),
            }),
        }
    }

    fn build_request<'a>(&self, prompt: &'a CompletionPrompt) -> MessagesRequest<'a> {
        // The Messages API takes the system instruction as a top-level
        // field, not as a message role.
        MessagesRequest {
            model: ANTHROPIC_MODEL,
            max_tokens: MAX_TOKENS,
            system: &prompt.system,
            messages: vec![UserMessage {
                role: "user",
                content: &prompt.user,
            }],
        }
    }
}

#[async_trait]
impl CompletionProvider for AnthropicProvider {
    fn info(&self) -> Arc<ProviderInfo> {
        self.info.clone()
    }

    async fn complete(&self, prompt: CompletionPrompt) -> Result<String, RecastError> {
        let body = self.build_request(&prompt);
        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecastError::backend(crate::backend_message(
                &self.info.name,
                status,
                &body,
            )));
        }

        let parsed: MessagesResponse = response.json().await?;
        let text = parsed
            .content
            .into_iter()
            .find_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .ok_or_else(|| RecastError::backend("no text block in response"))?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_system_as_top_level_field() {
        let provider = AnthropicProvider::new("k");
        let prompt = CompletionPrompt {
            system: "sys".to_string(),
            user: "usr".to_string(),
        };
        let body = serde_json::to_value(provider.build_request(&prompt)).unwrap();

        assert_eq!(body["model"], ANTHROPIC_MODEL);
        assert_eq!(body["max_tokens"], MAX_TOKENS);
        assert_eq!(body["system"], "sys");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "usr");
    }

    #[test]
    fn first_text_block_wins() {
        let parsed: MessagesResponse = serde_json::from_str(
            r#"{"content": [{"type": "tool_use", "id": "x", "name": "n", "input": {}},
                            {"type": "text", "text": "hello"}]}"#,
        )
        .unwrap();
        let text = parsed.content.into_iter().find_map(|b| match b {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Other => None,
        });
        assert_eq!(text.as_deref(), Some("hello"));
    }
}
