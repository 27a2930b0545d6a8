//! # Recast Core
//!
//! Core abstractions for the Recast content repurposing SDK.
//!
//! This crate provides the provider trait, the prompt contract, the raw
//! output normalizer, and the [`Repurposer`] executor that ties them
//! together. Backend adapters live in `recast-provider`; middleware layers
//! live in `recast-layer`.

pub mod error;
pub mod layer;
pub mod normalize;
pub mod prompt;
pub mod provider;
pub mod repurposer;
pub mod types;

// Re-exports
pub use error::RecastError;
pub use layer::{Layer, LayeredProvider};
pub use prompt::{build_prompt, CompletionPrompt, IDEA_CATEGORIES};
pub use provider::CompletionProvider;
pub use repurposer::{Repurposer, RepurposerBuilder};
pub use types::*;

/// Result type alias for repurposing operations
pub type Result<T> = std::result::Result<T, RecastError>;
