//! Provider trait and core abstractions.

use crate::error::RecastError;
use crate::prompt::CompletionPrompt;
use crate::types::ProviderInfo;
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

/// Core trait implemented by every LLM backend adapter.
///
/// An adapter translates one [`CompletionPrompt`] into exactly one awaited
/// outbound call and returns the backend's raw textual output. No retries,
/// no streaming, no timeout enforcement: a slow or failed call propagates
/// as a single failure. Adapters hold no mutable state, so a single
/// instance is safe to share across concurrent calls.
#[async_trait]
pub trait CompletionProvider: Send + Sync + Debug + 'static {
    /// Get provider information
    fn info(&self) -> Arc<ProviderInfo>;

    /// Issue one completion call and return the raw model output text
    async fn complete(&self, prompt: CompletionPrompt) -> Result<String, RecastError>;
}

#[async_trait]
impl<P: CompletionProvider + ?Sized> CompletionProvider for Arc<P> {
    fn info(&self) -> Arc<ProviderInfo> {
        (**self).info()
    }

    async fn complete(&self, prompt: CompletionPrompt) -> Result<String, RecastError> {
        (**self).complete(prompt).await
    }
}
