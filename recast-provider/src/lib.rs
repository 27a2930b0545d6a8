//! # Recast Providers
//!
//! Backend adapters for the four supported LLM services, plus the
//! exhaustive dispatch that turns a per-call [`ProviderConfig`] into a
//! ready adapter.

pub mod anthropic;
pub mod gemini;
pub mod openai;

// Re-exports
pub use anthropic::AnthropicProvider;
pub use gemini::GeminiProvider;
pub use openai::OpenAiCompatProvider;

use recast_core::error::RecastError;
use recast_core::provider::CompletionProvider;
use recast_core::types::{ProviderConfig, ProviderKind};
use std::sync::Arc;

/// Build the adapter selected by a per-call configuration.
///
/// The match over [`ProviderKind`] is exhaustive, so adding or removing a
/// backend is a compile-time-checked change. An empty API key is rejected
/// here, before any client is constructed or any call dispatched.
pub fn from_config(config: &ProviderConfig) -> Result<Arc<dyn CompletionProvider>, RecastError> {
    if config.api_key.trim().is_empty() {
        return Err(RecastError::configuration(
            "No API Key provided. Please set one in Settings.",
        ));
    }

    tracing::debug!(provider = %config.provider, "building provider adapter");
    let provider: Arc<dyn CompletionProvider> = match config.provider {
        ProviderKind::Groq => Arc::new(OpenAiCompatProvider::groq(&config.api_key)),
        ProviderKind::Gemini => Arc::new(GeminiProvider::new(&config.api_key)),
        ProviderKind::Anthropic => Arc::new(AnthropicProvider::new(&config.api_key)),
        ProviderKind::Custom => Arc::new(OpenAiCompatProvider::custom(
            &config.api_key,
            config.base_url.as_deref(),
            config.model.as_deref(),
        )),
    };
    Ok(provider)
}

/// Build a caller-facing message for a non-2xx backend response.
///
/// All four backends report errors as a JSON body with an `error.message`
/// field; when present that message is surfaced verbatim, otherwise the
/// status plus a body snippet is used.
pub(crate) fn backend_message(
    provider_name: &str,
    status: reqwest::StatusCode,
    body: &str,
) -> String {
    let backend_detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")?
                .get("message")?
                .as_str()
                .map(|s| s.to_string())
        });

    match backend_detail {
        Some(message) => format!("{provider_name} API error: {message}"),
        None => {
            let snippet: String = body.chars().take(200).collect();
            format!("{provider_name} API error: HTTP {status}: {snippet}")
        }
    }
}
