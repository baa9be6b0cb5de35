//! Configuration file parsing for Scribe
//!
//! A single TOML file at `<config_dir>/scribe/config.toml`. Every section and
//! field is defaulted, so an absent or partial file always works.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings};
pub use types::{ApiSettings, GenerationDefaults, Settings};
