//! # Recast
//!
//! Provider-abstracted content repurposing for long-form material.
//!
//! Recast takes one piece of long-form content and asks an interchangeable
//! LLM backend for short-form repurposing ideas (tweet thread, LinkedIn
//! post, video script, blog outline), or for an improved revision of one
//! existing draft. The backend's free-form output is normalized into fixed
//! result shapes regardless of provider quirks.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! recast = { version = "0.1", features = ["providers", "layers"] }
//! ```
//!
//! ```ignore
//! use recast::prelude::*;
//!
//! # async fn example() -> recast::Result<()> {
//! let config = ProviderConfig::new(ProviderKind::Groq, "your-api-key");
//! let request = GenerationRequest::ideation("long-form source content ...");
//!
//! match recast::repurpose(&request, &config).await? {
//!     RepurposeOutcome::Ideation(result) => {
//!         for idea in result.ideas {
//!             println!("{}: {}", idea.idea_type, idea.title);
//!         }
//!     }
//!     RepurposeOutcome::Revision(result) => println!("{}", result.content),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Includes `providers` and `layers`
//! - `providers`: Backend adapters (Groq, Gemini, Anthropic, custom)
//! - `layers`: Built-in layers (logging)

// Re-export core types and traits
pub use recast_core::*;

// Re-export providers under `provider` module
#[cfg(feature = "recast-provider")]
pub mod provider {
    //! LLM backend adapters.
    pub use recast_provider::*;
}

// Re-export layers under `layer` module
#[cfg(feature = "recast-layer")]
pub mod layer {
    //! Built-in middleware layers.
    pub use recast_layer::*;
}

/// Run one repurposing call end to end: resolve the configured backend,
/// dispatch exactly one completion request, and normalize the output.
///
/// Credential checks (empty key, for the dispatch to reject) happen before
/// content validation, and both happen before any network call. Every
/// failure is terminal for this call; the caller decides whether to retry.
#[cfg(feature = "recast-provider")]
pub async fn repurpose(
    request: &GenerationRequest,
    config: &ProviderConfig,
) -> Result<RepurposeOutcome> {
    let provider = provider::from_config(config)?;
    let repurposer = Repurposer::builder(provider).finish();
    repurposer.repurpose(request).await
}

/// Prelude module for convenient imports
pub mod prelude {
    //! Prelude module containing the most commonly used types and traits.
    //!
    //! ```
    //! use recast::prelude::*;
    //! ```

    pub use crate::{
        CompletionPrompt, CompletionProvider, GenerationRequest, IdeationResult, Layer,
        ProviderConfig, ProviderKind, RecastError, RepurposeOutcome, Repurposer, RepurposingIdea,
        Result, RevisionResult,
    };

    #[cfg(feature = "recast-provider")]
    pub use crate::provider::*;

    #[cfg(feature = "recast-layer")]
    pub use crate::layer::*;
}
