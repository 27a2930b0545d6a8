//! OpenAI-compatible chat-completions adapter.
//!
//! Both the default hosted backend (Groq) and the caller-configured custom
//! endpoint speak the OpenAI chat-completions protocol, so they share this
//! adapter and differ only in base URL, model, and provider identity.

use recast_core::error::RecastError;
use recast_core::prompt::CompletionPrompt;
use recast_core::provider::CompletionProvider;
use recast_core::types::ProviderInfo;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
const GROQ_MODEL: &str = "llama-3.3-70b-versatile";

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const OPENAI_DEFAULT_MODEL: &str = "gpt-4o";

/// Adapter for any OpenAI-compatible chat-completions endpoint
#[derive(Clone)]
pub struct OpenAiCompatProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    info: Arc<ProviderInfo>,
}

impl std::fmt::Debug for OpenAiCompatProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatProvider")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("info", &self.info)
            .finish()
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

impl OpenAiCompatProvider {
    /// Adapter for the default hosted backend (Groq)
    pub fn groq(api_key: impl Into<String>) -> Self {
        Self::with_identity(api_key, GROQ_API_BASE, GROQ_MODEL, "groq", "Groq")
    }

    /// Adapter for a caller-configured OpenAI-compatible endpoint.
    ///
    /// Base URL and model fall back to the public OpenAI endpoint and
    /// `gpt-4o` when not supplied.
    pub fn custom(
        api_key: impl Into<String>,
        base_url: Option<&str>,
        model: Option<&str>,
    ) -> Self {
        Self::with_identity(
            api_key,
            base_url.unwrap_or(OPENAI_API_BASE),
            model.unwrap_or(OPENAI_DEFAULT_MODEL),
            "custom",
            "OpenAI-compatible",
        )
    }

    fn with_identity(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        provider_id: &str,
        provider_name: &str,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            info: Arc::new(ProviderInfo {
                id: provider_id.to_string(),
                name: provider_name.to_string(),
            }),
        }
    }

    fn build_request<'a>(&'a self, prompt: &'a CompletionPrompt) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            // This protocol supports JSON mode natively; the prompt contract
            // still carries the schema itself.
            response_format: ResponseFormat { kind: "json_object" },
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompatProvider {
    fn info(&self) -> Arc<ProviderInfo> {
        self.info.clone()
    }

    async fn complete(&self, prompt: CompletionPrompt) -> Result<String, RecastError> {
        let body = self.build_request(&prompt);
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
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

        let parsed: ChatResponse = response.json().await?;
        completion_text(parsed)
    }
}

/// Pull the raw output text out of a chat-completions response.
///
/// A missing choice or a null assistant content is reported as a backend
/// error naming the condition, rather than degraded to an empty string
/// that would later fail extraction with a less specific message.
fn completion_text(parsed: ChatResponse) -> Result<String, RecastError> {
    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| RecastError::backend("no choices in response"))?;
    choice
        .message
        .content
        .ok_or_else(|| RecastError::backend("empty completion content"))
}
