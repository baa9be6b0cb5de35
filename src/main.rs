//! Scribe - a terminal front end for AI article generation
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;

/// Scribe - generate articles from a topic, straight from the terminal
#[derive(Parser, Debug)]
#[command(name = "scribe")]
#[command(version)]
#[command(about = "Generate articles from a topic, straight from the terminal", long_about = None)]
struct Args {
    /// Path to an alternate config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    // File logging only: the terminal belongs to the TUI
    scribe_core::logging::init()?;

    let config_path = args
        .config
        .unwrap_or_else(scribe_app::config::default_config_path);
    let settings = scribe_app::config::load_settings(&config_path);
    tracing::info!(
        endpoint = %settings.api.endpoint,
        model = %settings.api.model,
        "configuration resolved"
    );

    scribe_tui::run(settings).await?;

    Ok(())
}
