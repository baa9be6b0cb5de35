//! scribe-app - Application state and orchestration for Scribe
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`Message`] the events, and
//! [`update`] the pure transition function. Side effects (the generation
//! request, history persistence) are described by [`UpdateAction`] values and
//! executed by the front end's event loop.
//!
//! It also owns configuration loading and the capped article history with its
//! JSON persistence.

pub mod config;
pub mod confirm_dialog;
pub mod handler;
pub mod history;
pub mod input_key;
pub mod message;
pub mod state;
pub mod storage;

// Re-export primary types
pub use confirm_dialog::ConfirmDialogState;
pub use handler::{update, UpdateAction, UpdateResult};
pub use history::{History, HISTORY_CAP};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, FormField, FormState, View};
