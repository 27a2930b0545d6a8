//! Error types for repurposing operations.

/// The main error type for repurposing operations.
///
/// Every variant is terminal for the call that produced it: nothing is
/// retried automatically and no partial result is returned.
#[derive(Debug, thiserror::Error)]
pub enum RecastError {
    /// No usable credentials for the selected provider
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A required textual input is missing or empty
    #[error("Validation error: {0}")]
    Validation(String),

    /// The provider tag does not name a known backend
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// The outbound call to the provider failed; carries the backend's own
    /// error message where one was available
    #[error("Backend error: {0}")]
    Backend(String),

    /// Network-related errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// No JSON-shaped substring could be found in the backend's raw output
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// A JSON-shaped substring was found but is not valid JSON, or does not
    /// deserialize into the expected result shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl RecastError {
    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an unsupported-provider error
    pub fn unsupported_provider(tag: impl Into<String>) -> Self {
        Self::UnsupportedProvider(tag.into())
    }

    /// Create a backend error
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Create an extraction error
    pub fn extraction(msg: impl Into<String>) -> Self {
        Self::Extraction(msg.into())
    }

    /// True when the error was raised before any outbound call was attempted
    pub fn is_pre_network(&self) -> bool {
        matches!(
            self,
            RecastError::Configuration(_)
                | RecastError::Validation(_)
                | RecastError::UnsupportedProvider(_)
        )
    }
}
