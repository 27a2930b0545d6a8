//! Repurposer implementation.
//!
//! The [`Repurposer`] is the orchestration layer between the high-level
//! repurpose API and the low-level provider interface. It validates the
//! request, builds the mode-appropriate prompt, makes exactly one provider
//! call, and normalizes the raw output into the promised result shape.

use crate::error::RecastError;
use crate::layer::Layer;
use crate::normalize;
use crate::prompt::build_prompt;
use crate::provider::CompletionProvider;
use crate::types::{GenerationRequest, ProviderInfo, RepurposeOutcome, RequestContext};
use std::sync::Arc;

/// Type-erased provider that can be shared across threads
type BoxedProvider = Arc<dyn CompletionProvider>;

/// Builder for composing a provider with layers.
///
/// Layers wrap the provider with static dispatch during building; the final
/// `finish()` performs a single type erasure.
///
/// # Example
///
/// ```ignore
/// let repurposer = Repurposer::builder(provider)
///     .layer(LoggingLayer::new())
///     .finish();
/// ```
pub struct RepurposerBuilder<P> {
    provider: P,
}

impl<P: CompletionProvider> RepurposerBuilder<P> {
    /// Create a new builder with a provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Add a layer to wrap the provider
    pub fn layer<L>(self, layer: L) -> RepurposerBuilder<L::LayeredProvider>
    where
        L: Layer<P>,
    {
        RepurposerBuilder {
            provider: layer.layer(self.provider),
        }
    }

    /// Finish building and create a [`Repurposer`]
    pub fn finish(self) -> Repurposer {
        Repurposer {
            provider: Arc::new(self.provider),
        }
    }
}

/// Stateless executor for repurposing calls.
///
/// Holds nothing but the provider handle: every call is independent, and
/// credentials arrive inside the per-call configuration rather than from
/// ambient process state, so one instance is safe to invoke concurrently
/// for distinct requests.
pub struct Repurposer {
    provider: BoxedProvider,
}

impl Repurposer {
    /// Create a new builder
    pub fn builder<P: CompletionProvider>(provider: P) -> RepurposerBuilder<P> {
        RepurposerBuilder::new(provider)
    }

    /// Get provider information
    pub fn info(&self) -> Arc<ProviderInfo> {
        self.provider.info()
    }

    /// Run one repurposing call to completion.
    ///
    /// Returns [`RepurposeOutcome::Ideation`] when `revision_target` is
    /// absent and [`RepurposeOutcome::Revision`] when present. Validation
    /// failures are raised before the provider is invoked; there is no
    /// retry, cancellation, or partial-result recovery after dispatch.
    pub async fn repurpose(
        &self,
        req: &GenerationRequest,
    ) -> Result<RepurposeOutcome, RecastError> {
        if req.source_content.trim().is_empty() {
            return Err(RecastError::validation("Content is required"));
        }
        if req.is_revision() && req.current_draft.as_deref().unwrap_or("").trim().is_empty() {
            return Err(RecastError::validation(
                "A current draft is required when regenerating an idea",
            ));
        }

        let ctx = RequestContext::new(self.provider.info().id.clone());
        let revision = req.is_revision();
        tracing::debug!(
            "dispatching repurpose request: request_id={}, provider={}, revision={}",
            ctx.request_id,
            ctx.provider_id,
            revision
        );

        let prompt = build_prompt(req);
        let raw = self.provider.complete(prompt).await?;

        let outcome = normalize::normalize(&raw, revision)?;
        tracing::debug!(
            "repurpose request completed: request_id={}, provider={}",
            ctx.request_id,
            ctx.provider_id
        );
        Ok(outcome)
    }
}
