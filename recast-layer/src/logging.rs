//! Logging layer for provider operations.

use recast_core::error::RecastError;
use recast_core::layer::{Layer, LayeredProvider};
use recast_core::prompt::CompletionPrompt;
use recast_core::provider::CompletionProvider;
use recast_core::types::ProviderInfo;
use async_trait::async_trait;
use std::sync::Arc;

/// Logging layer that logs provider operations.
#[derive(Debug, Clone)]
pub struct LoggingLayer {
    prefix: String,
}

impl LoggingLayer {
    /// Create a new logging layer
    pub fn new() -> Self {
        Self {
            prefix: "[recast]".to_string(),
        }
    }

    /// Create a logging layer with custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for LoggingLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: CompletionProvider> Layer<P> for LoggingLayer {
    type LayeredProvider = LoggingProvider<P>;

    fn layer(&self, inner: P) -> Self::LayeredProvider {
        LoggingProvider {
            inner,
            prefix: self.prefix.clone(),
        }
    }
}

/// Provider wrapped with logging
#[derive(Debug)]
pub struct LoggingProvider<P> {
    inner: P,
    prefix: String,
}

#[async_trait]
impl<P: CompletionProvider> LayeredProvider for LoggingProvider<P> {
    type Inner = P;

    fn inner(&self) -> &Self::Inner {
        &self.inner
    }

    async fn layered_complete(&self, prompt: CompletionPrompt) -> Result<String, RecastError> {
        let provider = self.inner.info();
        tracing::debug!(
            "{} complete request: provider={}, system_len={}, user_len={}",
            self.prefix,
            provider.id,
            prompt.system.len(),
            prompt.user.len()
        );

        let start = std::time::Instant::now();
        let result = self.inner.complete(prompt).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(raw) => {
                tracing::debug!(
                    "{} complete success: provider={}, output_len={}, elapsed={:?}",
                    self.prefix,
                    provider.id,
                    raw.len(),
                    elapsed
                );
            }
            Err(e) => {
                tracing::error!(
                    "{} complete error: provider={}, error={:?}, elapsed={:?}",
                    self.prefix,
                    provider.id,
                    e,
                    elapsed
                );
            }
        }

        result
    }
}

#[async_trait]
impl<P: CompletionProvider> CompletionProvider for LoggingProvider<P> {
    fn info(&self) -> Arc<ProviderInfo> {
        LayeredProvider::layered_info(self)
    }

    async fn complete(&self, prompt: CompletionPrompt) -> Result<String, RecastError> {
        LayeredProvider::layered_complete(self, prompt).await
    }
}
