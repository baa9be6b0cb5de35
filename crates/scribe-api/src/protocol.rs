//! Wire types for the chat-completions generation endpoint
//!
//! The request asks the model to answer with a JSON object
//! `{"title": ..., "body": ...}`. Models do not always comply, so
//! [`parse_article`] strips Markdown code fences and falls back to a
//! first-line-as-title split when the content is not valid JSON.

use scribe_core::prelude::*;
use scribe_core::types::GenerationParams;
use serde::{Deserialize, Serialize};

/// Chat-completions request body
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// One chat message in a completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat-completions response body (only the fields we read)
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

/// Error body returned by the service on non-success status
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}

/// The structured article payload the model is asked to produce
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticlePayload {
    pub title: String,
    pub body: String,
}

/// Build the message list for a generation request
pub fn build_messages(params: &GenerationParams) -> Vec<ChatMessage> {
    let system = "You are a writing assistant that produces complete, \
                  well-structured articles. Respond with a single JSON object \
                  of the form {\"title\": \"...\", \"body\": \"...\"} and \
                  nothing else.";
    let user = format!(
        "Write an article about \"{}\". Target length: about {} words. \
         Language: {}. Tone: {}.",
        params.topic,
        params.word_count.target(),
        params.language.label(),
        params.tone.label().to_lowercase(),
    );
    vec![ChatMessage::system(system), ChatMessage::user(user)]
}

/// Parse a completion's content into an article payload
///
/// Tries strict JSON first (after stripping any Markdown code fence). When
/// that fails, the first non-empty line becomes the title and the remainder
/// the body, so a prose completion still yields a usable article.
pub fn parse_article(content: &str) -> Result<ArticlePayload> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyCompletion);
    }

    let candidate = strip_code_fence(trimmed);
    if let Ok(payload) = serde_json::from_str::<ArticlePayload>(candidate) {
        if !payload.title.trim().is_empty() && !payload.body.trim().is_empty() {
            return Ok(payload);
        }
    }

    debug!("completion was not the requested JSON shape, using fallback split");
    Ok(split_title_body(trimmed))
}

/// Strip a surrounding Markdown code fence (```json ... ```), if present
fn strip_code_fence(content: &str) -> &str {
    let Some(rest) = content.strip_prefix("```") else {
        return content;
    };
    // Drop the info string ("json", "JSON", or empty) on the opening line
    let rest = match rest.find('\n') {
        Some(pos) => &rest[pos + 1..],
        None => return content,
    };
    match rest.rfind("```") {
        Some(pos) => rest[..pos].trim(),
        None => rest.trim(),
    }
}

/// Fallback: first non-empty line is the title, the remainder the body
fn split_title_body(content: &str) -> ArticlePayload {
    let mut lines = content.lines();
    let title = lines
        .by_ref()
        .find(|line| !line.trim().is_empty())
        .unwrap_or(content)
        .trim()
        .trim_start_matches(['#', ' '])
        .to_string();
    let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();
    if body.is_empty() {
        // Single-line completion: keep the whole text as the body
        ArticlePayload {
            title,
            body: content.to_string(),
        }
    } else {
        ArticlePayload { title, body }
    }
}
