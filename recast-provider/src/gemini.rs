//! Google Gemini generateContent adapter.

use recast_core::error::RecastError;
use recast_core::prompt::CompletionPrompt;
use recast_core::provider::CompletionProvider;
use recast_core::types::ProviderInfo;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Adapter for the Gemini generateContent API
#[derive(Clone)]
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
    info: Arc<ProviderInfo>,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("info", &self.info)
            .finish()
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiProvider {
    /// Create a new Gemini adapter
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            info: Arc::new(ProviderInfo {
                id: "gemini".to_string(),
                name: "Gemini".to_string(),
            }),
        }
    }

    fn build_request<'a>(&self, prompt: &'a CompletionPrompt) -> GenerateContentRequest<'a> {
        // generateContent has no separate system role on this surface: the
        // system and user instructions travel as two parts of one content
        // entry, and the prompt contract alone carries the JSON requirement.
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        text: &prompt.system,
                    },
                    Part { text: &prompt.user },
                ],
            }],
        }
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    fn info(&self) -> Arc<ProviderInfo> {
        self.info.clone()
    }

    async fn complete(&self, prompt: CompletionPrompt) -> Result<String, RecastError> {
        let body = self.build_request(&prompt);
        let url = format!("{GEMINI_API_BASE}/models/{GEMINI_MODEL}:generateContent");
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
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

        let parsed: GenerateContentResponse = response.json().await?;
        let candidate = parsed
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| RecastError::backend("no candidates in response"))?;
        let text = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect::<Vec<_>>()
            .join("");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_concatenates_system_and_user_as_parts() {
        let provider = GeminiProvider::new("k");
        let prompt = CompletionPrompt {
            system: "sys".to_string(),
            user: "usr".to_string(),
        };
        let body = serde_json::to_value(provider.build_request(&prompt)).unwrap();

        assert_eq!(body["contents"][0]["parts"][0]["text"], "sys");
        assert_eq!(body["contents"][0]["parts"][1]["text"], "usr");
    }

    #[test]
    fn candidate_parts_are_joined_into_one_output() {
        let parsed: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "a"}, {"text": "b"}]}}]}"#,
        )
        .unwrap();
        let text: String = parsed.candidates[0]
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(text, "ab");
    }
}
