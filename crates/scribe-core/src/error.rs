//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Generation Service Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Generation request failed: {message}")]
    Api { message: String },

    #[error("Generation request timed out after {seconds}s")]
    ApiTimeout { seconds: u64 },

    #[error("No API key found. Set the {variable} environment variable.")]
    ApiKeyMissing { variable: String },

    #[error("Invalid API endpoint: {url}")]
    InvalidEndpoint { url: String },

    #[error("The generation service returned an empty completion")]
    EmptyCompletion,

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Storage Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Storage error: {message}")]
    Storage { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    pub fn api_key_missing(variable: impl Into<String>) -> Self {
        Self::ApiKeyMissing {
            variable: variable.into(),
        }
    }

    pub fn invalid_endpoint(url: impl Into<String>) -> Self {
        Self::InvalidEndpoint { url: url.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Recoverable errors are surfaced in the status bar and leave the
    /// application running; the user can retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Api { .. }
                | Error::ApiTimeout { .. }
                | Error::ApiKeyMissing { .. }
                | Error::EmptyCompletion
                | Error::Storage { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::TerminalInit(_) | Error::InvalidEndpoint { .. }
        )
    }
}
