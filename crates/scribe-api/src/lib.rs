//! scribe-api - Generation service client for Scribe
//!
//! A thin wrapper around an OpenAI-compatible chat-completions endpoint.
//! One request per generation, no streaming: [`GenerationClient::generate`]
//! sends the prompt built from the user's topic and options, and parses the
//! completion into a title/body pair.

pub mod client;
pub mod protocol;

pub use client::{resolve_api_key, ApiConfig, GeneratedArticle, GenerationClient};
