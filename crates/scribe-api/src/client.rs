//! HTTP client for the generation service
//!
//! One request per generation. The client is cheap to build and carries no
//! connection state beyond reqwest's internal pool, so the caller may build
//! it per request or keep it around.

use std::time::Duration;

use scribe_core::prelude::*;
use scribe_core::types::GenerationParams;
use url::Url;

use crate::protocol::{self, ApiErrorBody, CompletionRequest, CompletionResponse};

/// Connection settings for the generation service
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Full chat-completions URL
    pub endpoint: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Bearer token
    pub api_key: String,
}

/// A successfully parsed generation result
#[derive(Debug, Clone)]
pub struct GeneratedArticle {
    pub title: String,
    pub body: String,
}

/// Client for an OpenAI-compatible chat-completions endpoint
pub struct GenerationClient {
    http: reqwest::Client,
    endpoint: Url,
    model: String,
    api_key: String,
    timeout_secs: u64,
}

impl GenerationClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let endpoint =
            Url::parse(&config.endpoint).map_err(|_| Error::invalid_endpoint(&config.endpoint))?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::api(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            endpoint,
            model: config.model,
            api_key: config.api_key,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Issue one generation request and parse the structured response
    pub async fn generate(&self, params: &GenerationParams) -> Result<GeneratedArticle> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: protocol::build_messages(params),
            temperature: Some(0.7),
        };

        debug!(topic = %params.topic, model = %self.model, "sending generation request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::ApiTimeout {
                        seconds: self.timeout_secs,
                    }
                } else {
                    Error::api(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::api(describe_failure(status, &body)));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::api(format!("malformed response: {e}")))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(Error::EmptyCompletion)?;

        let payload = protocol::parse_article(&content)?;
        info!(topic = %params.topic, title = %payload.title, "generation succeeded");

        Ok(GeneratedArticle {
            title: payload.title,
            body: payload.body,
        })
    }
}

/// Turn a non-success response into a user-facing message
///
/// Prefers the service's own error message when the body parses as the
/// standard error shape.
fn describe_failure(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => format!("{} ({})", parsed.error.message, status),
        Err(_) => format!("service returned {status}"),
    }
}

/// Read the API key from the named environment variable
///
/// Checked per submission, not at startup: the app stays usable for browsing
/// history without a key.
pub fn resolve_api_key(variable: &str) -> Result<String> {
    match std::env::var(variable) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::api_key_missing(variable)),
    }
}
