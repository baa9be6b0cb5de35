//! # scribe-core - Core Domain Types
//!
//! Foundation crate for Scribe. Provides the article domain model, the
//! generation option enumerations, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, uuid, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Article`] - One generated article plus its generation parameters
//! - [`GenerationParams`] - What to generate: topic, word count, language, tone
//! - [`WordCount`], [`Language`], [`Tone`] - Fixed option enumerations
//! - [`AppPhase`] - Application lifecycle phase (Running, Quitting)
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use scribe_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Scribe crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use types::{AppPhase, Article, GenerationParams, Language, Tone, WordCount};
