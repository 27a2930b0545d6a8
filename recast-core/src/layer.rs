//! Layer trait and abstractions.
//!
//! Layers provide a composable way to wrap providers with cross-cutting
//! concerns such as logging. Each layer wraps an inner provider and returns
//! a new provider with enhanced behavior.

use crate::error::RecastError;
use crate::prompt::CompletionPrompt;
use crate::provider::CompletionProvider;
use crate::types::ProviderInfo;
use async_trait::async_trait;
use std::sync::Arc;

/// Layer trait for wrapping providers.
pub trait Layer<P: CompletionProvider> {
    /// The type of the layered provider
    type LayeredProvider: CompletionProvider;

    /// Wrap the inner provider with this layer
    fn layer(&self, inner: P) -> Self::LayeredProvider;
}

/// Helper trait for layered providers.
///
/// Provides default forwarding implementations so an implementer only needs
/// to override the methods it wants to intercept.
#[async_trait]
pub trait LayeredProvider: Sized + CompletionProvider {
    /// The inner provider type
    type Inner: CompletionProvider;

    /// Get a reference to the inner provider
    fn inner(&self) -> &Self::Inner;

    /// Default implementation for info - forwards to inner
    fn layered_info(&self) -> Arc<ProviderInfo> {
        self.inner().info()
    }

    /// Default implementation for complete - forwards to inner
    async fn layered_complete(&self, prompt: CompletionPrompt) -> Result<String, RecastError> {
        self.inner().complete(prompt).await
    }
}

