//! Configuration types for Scribe

use scribe_core::types::{Language, Tone, WordCount};
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub defaults: GenerationDefaults,
}

/// Generation service connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Full chat-completions URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Name of the environment variable holding the API key.
    /// The key itself never lives in the config file.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            api_key_env: default_api_key_env(),
        }
    }
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_api_key_env() -> String {
    "SCRIBE_API_KEY".to_string()
}

/// Initial values for the generation form
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct GenerationDefaults {
    #[serde(default)]
    pub word_count: WordCount,

    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub tone: Tone,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_usable() {
        let settings = Settings::default();
        assert!(settings.api.endpoint.starts_with("https://"));
        assert_eq!(settings.api.api_key_env, "SCRIBE_API_KEY");
        assert_eq!(settings.defaults.word_count, WordCount::Standard);
    }

    #[test]
    fn test_empty_toml_fills_all_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.api.model, "gpt-4o-mini");
        assert_eq!(settings.api.timeout_secs, 120);
    }

    #[test]
    fn test_partial_section_keeps_other_fields() {
        let settings: Settings = toml::from_str(
            r#"
            [api]
            model = "gpt-4o"

            [defaults]
            tone = "playful"
            "#,
        )
        .unwrap();
        assert_eq!(settings.api.model, "gpt-4o");
        // unspecified fields fall back to defaults
        assert_eq!(settings.api.timeout_secs, 120);
        assert_eq!(settings.defaults.tone, Tone::Playful);
        assert_eq!(settings.defaults.language, Language::English);
    }
}
