//! Main TUI runner - entry point and event loop
//!
//! Contains the core application lifecycle:
//! - `run`: Entry point; owns the terminal and the state
//! - `run_loop`: Main event loop processing terminal events and task results
//! - `handle_action`: Executes side effects described by `update()`

use std::path::Path;

use tokio::sync::mpsc;

use scribe_api::{ApiConfig, GenerationClient};
use scribe_app::config::{ApiSettings, Settings};
use scribe_app::handler::{self, UpdateAction};
use scribe_app::{storage, AppState, Message};
use scribe_core::prelude::*;
use scribe_core::types::{Article, GenerationParams};

use super::{event, render, terminal};

/// Run the TUI application
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Load history before the terminal takes over, so parse warnings land in
    // the log ahead of the first frame
    let history_path = storage::default_history_path();
    let history = storage::load_history(&history_path);
    info!(count = history.len(), "history loaded");

    let mut term = ratatui::init();

    let mut state = AppState::with_settings(settings);
    state.history = history;
    state.clamp_history_selection();

    // Unified message channel: background generation tasks report back here
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &history_path);

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    history_path: &Path,
) -> Result<()> {
    while !state.should_quit() {
        // Process results from background tasks (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, history_path);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, history_path);
        }
    }

    Ok(())
}

/// Process a message through the TEA update function
fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    history_path: &Path,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(state, action, msg_tx, history_path);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

/// Execute a side effect requested by update()
fn handle_action(
    state: &AppState,
    action: UpdateAction,
    msg_tx: &mpsc::Sender<Message>,
    history_path: &Path,
) {
    match action {
        UpdateAction::StartGeneration { params } => {
            spawn_generation(state.settings.api.clone(), params, msg_tx.clone());
        }

        UpdateAction::PersistHistory => {
            // Best-effort: a failed save is logged, in-memory state stands
            if let Err(e) = storage::save_history(history_path, &state.history) {
                warn!("failed to save history: {e}");
            }
        }
    }
}

/// Spawn the single background generation task
///
/// The loading flag in state guarantees at most one of these is in flight.
fn spawn_generation(
    api: ApiSettings,
    params: GenerationParams,
    msg_tx: mpsc::Sender<Message>,
) {
    tokio::spawn(async move {
        let message = match generate(api, &params).await {
            Ok(article) => Message::GenerationCompleted { article },
            Err(e) => Message::GenerationFailed {
                message: e.to_string(),
            },
        };
        if msg_tx.send(message).await.is_err() {
            warn!("event loop closed before the generation result arrived");
        }
    });
}

/// One full generation: resolve the key, call the service, build the Article
async fn generate(api: ApiSettings, params: &GenerationParams) -> Result<Article> {
    let api_key = scribe_api::resolve_api_key(&api.api_key_env)?;
    let client = GenerationClient::new(ApiConfig {
        endpoint: api.endpoint,
        model: api.model,
        timeout_secs: api.timeout_secs,
        api_key,
    })?;
    let generated = client.generate(params).await?;
    Ok(Article::new(
        params.clone(),
        generated.title,
        generated.body,
    ))
}
