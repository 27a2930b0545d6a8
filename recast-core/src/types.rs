//! Core types for repurposing operations.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RecastError;

/// The closed set of supported LLM backends.
///
/// Dispatch over this enum is exhaustive: adding or removing a backend is a
/// compile-time-checked change, and an unrecognized tag string fails loudly
/// in [`ProviderKind::from_str`] instead of falling through silently.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Default hosted provider (Groq, OpenAI-compatible protocol)
    Groq,
    /// Google Gemini
    Gemini,
    /// Anthropic Claude
    Anthropic,
    /// Generic OpenAI-compatible endpoint with caller-supplied base URL
    Custom,
}

impl ProviderKind {
    /// Stable tag used in configuration and logging
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Groq => "groq",
            ProviderKind::Gemini => "gemini",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Custom => "custom",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = RecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "groq" => Ok(ProviderKind::Groq),
            "gemini" => Ok(ProviderKind::Gemini),
            "anthropic" => Ok(ProviderKind::Anthropic),
            "custom" => Ok(ProviderKind::Custom),
            other => Err(RecastError::unsupported_provider(other)),
        }
    }
}

/// Per-call provider configuration.
///
/// Constructed fresh for every call and never persisted by the core. There
/// is no ambient settings state: whatever credential merging the embedding
/// application does (user-supplied key vs. its own default) happens before
/// this value is built.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub provider: ProviderKind,
    pub api_key: String,
    /// Only meaningful for [`ProviderKind::Custom`]; defaults to the public
    /// OpenAI endpoint when absent
    pub base_url: Option<String>,
    /// Only meaningful for [`ProviderKind::Custom`]; each hosted backend
    /// pins its own model otherwise
    pub model: Option<String>,
}

impl ProviderConfig {
    /// Create a configuration for a hosted provider
    pub fn new(provider: ProviderKind, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            base_url: None,
            model: None,
        }
    }

    /// Create a configuration for an OpenAI-compatible custom endpoint
    pub fn custom(api_key: impl Into<String>) -> Self {
        Self::new(ProviderKind::Custom, api_key)
    }

    /// Set the base URL (custom endpoints only)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the model name (custom endpoints only)
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Default-hosted configuration using the `GROQ_API_KEY` environment
    /// variable as the fallback credential.
    ///
    /// This covers the "no caller-supplied key" path: callers that hold a
    /// user key build the config explicitly instead.
    pub fn groq_from_env() -> Result<Self, RecastError> {
        let api_key = std::env::var("GROQ_API_KEY").map_err(|_| {
            RecastError::configuration("No API Key provided. Please set one in Settings.")
        })?;
        Ok(Self::new(ProviderKind::Groq, api_key))
    }
}

/// Provider information for logging and diagnostics
#[derive(Debug, Clone)]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
}

/// A normalized generation request.
///
/// `revision_target` selects the mode: absent means ideation (four fresh
/// repurposing ideas), present means revision of `current_draft` for that
/// one idea category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub source_content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_draft: Option<String>,
}

impl GenerationRequest {
    /// Create an ideation-mode request
    pub fn ideation(source_content: impl Into<String>) -> Self {
        Self {
            source_content: source_content.into(),
            revision_target: None,
            current_draft: None,
        }
    }

    /// Create a revision-mode request for one idea category
    pub fn revision(
        source_content: impl Into<String>,
        revision_target: impl Into<String>,
        current_draft: impl Into<String>,
    ) -> Self {
        Self {
            source_content: source_content.into(),
            revision_target: Some(revision_target.into()),
            current_draft: Some(current_draft.into()),
        }
    }

    /// Whether this request is in revision mode
    pub fn is_revision(&self) -> bool {
        self.revision_target.is_some()
    }
}

/// One repurposing idea produced in ideation mode.
///
/// `content` is always textual after normalization, even when the backend
/// returned a nested object where a string was requested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepurposingIdea {
    pub id: String,
    #[serde(rename = "type")]
    pub idea_type: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

/// Full ideation response: a title for the source plus one idea per
/// fixed category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdeationResult {
    pub original_title: String,
    #[serde(rename = "repurposing_ideas")]
    pub ideas: Vec<RepurposingIdea>,
}

/// Single-item regeneration response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RevisionResult {
    pub content: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

/// Outcome of one repurposing call, keyed by request mode
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RepurposeOutcome {
    Ideation(IdeationResult),
    Revision(RevisionResult),
}

impl RepurposeOutcome {
    /// Borrow the ideation result, if this outcome is one
    pub fn as_ideation(&self) -> Option<&IdeationResult> {
        match self {
            RepurposeOutcome::Ideation(r) => Some(r),
            RepurposeOutcome::Revision(_) => None,
        }
    }

    /// Borrow the revision result, if this outcome is one
    pub fn as_revision(&self) -> Option<&RevisionResult> {
        match self {
            RepurposeOutcome::Revision(r) => Some(r),
            RepurposeOutcome::Ideation(_) => None,
        }
    }
}

/// Per-call context carried through logging
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub provider_id: String,
}

impl RequestContext {
    /// Create a new request context with a fresh request id
    pub fn new(provider_id: impl Into<String>) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            provider_id: provider_id.into(),
        }
    }
}
