//! Form handlers: topic editing, focus movement, option cycling

use crate::state::{AppState, FormField};

use super::UpdateResult;

#[derive(Debug, Clone, Copy)]
pub(crate) enum CycleDirection {
    Prev,
    Next,
}

pub(crate) fn handle_topic_changed(state: &mut AppState, text: String) -> UpdateResult {
    state.form.topic = text;
    UpdateResult::none()
}

pub(crate) fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    state.form.focus = state.form.focus.next();
    UpdateResult::none()
}

pub(crate) fn handle_focus_prev(state: &mut AppState) -> UpdateResult {
    state.form.focus = state.form.focus.prev();
    UpdateResult::none()
}

/// Cycle the focused option field. Topic focus is a no-op: Left/Right are
/// reserved for option fields only.
pub(crate) fn handle_cycle_option(state: &mut AppState, direction: CycleDirection) -> UpdateResult {
    match (state.form.focus, direction) {
        (FormField::Topic, _) => {}
        (FormField::WordCount, CycleDirection::Next) => {
            state.form.word_count = state.form.word_count.next();
        }
        (FormField::WordCount, CycleDirection::Prev) => {
            state.form.word_count = state.form.word_count.prev();
        }
        (FormField::Language, CycleDirection::Next) => {
            state.form.language = state.form.language.next();
        }
        (FormField::Language, CycleDirection::Prev) => {
            state.form.language = state.form.language.prev();
        }
        (FormField::Tone, CycleDirection::Next) => {
            state.form.tone = state.form.tone.next();
        }
        (FormField::Tone, CycleDirection::Prev) => {
            state.form.tone = state.form.tone.prev();
        }
    }
    UpdateResult::none()
}
