//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use scribe_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";

/// Default config location: `<config_dir>/scribe/config.toml`
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("scribe").join(CONFIG_FILENAME)
}

/// Load settings from the given path
///
/// Config trouble never blocks startup: a missing file yields defaults and a
/// parse error is logged and falls back to defaults.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Settings::default();
    }

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(path = %path.display(), "failed to read config, using defaults: {e}");
            return Settings::default();
        }
    };

    match toml::from_str(&raw) {
        Ok(settings) => {
            info!(path = %path.display(), "loaded settings");
            settings
        }
        Err(e) => {
            warn!(path = %path.display(), "invalid config, using defaults: {e}");
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(&dir.path().join("config.toml"));
        assert_eq!(settings.api.api_key_env, "SCRIBE_API_KEY");
    }

    #[test]
    fn test_load_invalid_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api = \"not a table\"").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.api.model, "gpt-4o-mini");
    }

    #[test]
    fn test_load_reads_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [api]
            endpoint = "http://localhost:8080/v1/chat/completions"
            timeout_secs = 30
            "#,
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(
            settings.api.endpoint,
            "http://localhost:8080/v1/chat/completions"
        );
        assert_eq!(settings.api.timeout_secs, 30);
    }

    #[test]
    fn test_default_config_path_ends_with_scribe() {
        let path = default_config_path();
        assert!(path.ends_with("scribe/config.toml"));
    }
}
