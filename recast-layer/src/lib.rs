//! # Recast Layers
//!
//! Built-in middleware layers for Recast.
//!
//! Currently implemented layers:
//! - `LoggingLayer`: Logs each completion round trip with timing information
//!
//! ## Usage
//!
//! ```ignore
//! use recast_core::Repurposer;
//! use recast_layer::LoggingLayer;
//!
//! let repurposer = Repurposer::builder(provider)
//!     .layer(LoggingLayer::new())
//!     .finish();
//! ```

pub mod logging;

// Re-exports
pub use logging::LoggingLayer;
