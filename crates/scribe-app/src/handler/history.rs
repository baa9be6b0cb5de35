//! History handlers: selection, open, delete, and the clear-all flow

use scribe_core::prelude::*;

use crate::confirm_dialog::ConfirmDialogState;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_prev(state: &mut AppState) -> UpdateResult {
    state.history_selected = state.history_selected.saturating_sub(1);
    UpdateResult::none()
}

pub(crate) fn handle_next(state: &mut AppState) -> UpdateResult {
    if !state.history.is_empty() {
        state.history_selected = (state.history_selected + 1).min(state.history.len() - 1);
    }
    UpdateResult::none()
}

pub(crate) fn handle_first(state: &mut AppState) -> UpdateResult {
    state.history_selected = 0;
    UpdateResult::none()
}

pub(crate) fn handle_last(state: &mut AppState) -> UpdateResult {
    state.history_selected = state.history.len().saturating_sub(1);
    UpdateResult::none()
}

/// Open the selected entry: it becomes the displayed article and the view
/// switches to Main
pub(crate) fn handle_open_selected(state: &mut AppState) -> UpdateResult {
    if let Some(article) = state.history.get(state.history_selected).cloned() {
        state.show_article(article);
    }
    UpdateResult::none()
}

pub(crate) fn handle_delete_selected(state: &mut AppState) -> UpdateResult {
    let Some(id) = state.history.get(state.history_selected).map(|a| a.id) else {
        return UpdateResult::none();
    };

    state.history.remove(&id);
    state.clamp_history_selection();
    debug!(%id, remaining = state.history.len(), "deleted history entry");
    UpdateResult::action(UpdateAction::PersistHistory)
}

/// Open the confirmation dialog; clearing only happens on confirm
pub(crate) fn handle_request_clear(state: &mut AppState) -> UpdateResult {
    if state.history.is_empty() {
        return UpdateResult::none();
    }
    state.confirm_dialog = Some(ConfirmDialogState::clear_history(state.history.len()));
    UpdateResult::none()
}

pub(crate) fn handle_confirm_clear(state: &mut AppState) -> UpdateResult {
    state.confirm_dialog = None;
    state.history.clear();
    state.history_selected = 0;
    info!("history cleared");
    UpdateResult::action(UpdateAction::PersistHistory)
}

pub(crate) fn handle_cancel_clear(state: &mut AppState) -> UpdateResult {
    state.confirm_dialog = None;
    UpdateResult::none()
}
