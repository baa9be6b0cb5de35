//! Main update function - handles state transitions (TEA pattern)

use scribe_core::types::AppPhase;

use crate::message::Message;
use crate::state::{AppState, View};

use super::{form, generation, history, keys, scroll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick_spinner();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::TopicChanged { text } => form::handle_topic_changed(state, text),
        Message::FocusNext => form::handle_focus_next(state),
        Message::FocusPrev => form::handle_focus_prev(state),
        Message::CycleOptionPrev => form::handle_cycle_option(state, form::CycleDirection::Prev),
        Message::CycleOptionNext => form::handle_cycle_option(state, form::CycleDirection::Next),

        // ─────────────────────────────────────────────────────────
        // Generation Messages
        // ─────────────────────────────────────────────────────────
        Message::Submit => generation::handle_submit(state),
        Message::GenerationCompleted { article } => generation::handle_completed(state, article),
        Message::GenerationFailed { message } => generation::handle_failed(state, message),

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::ShowView(view) => {
            state.view = view;
            if view == View::History {
                state.clamp_history_selection();
            }
            UpdateResult::none()
        }

        Message::NextInfoPage => {
            state.view = state.view.next_info_page();
            UpdateResult::none()
        }

        Message::PrevInfoPage => {
            state.view = state.view.prev_info_page();
            UpdateResult::none()
        }

        Message::Back => {
            state.view = View::Main;
            UpdateResult::none()
        }

        Message::DismissError => {
            state.error = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Article Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),

        // ─────────────────────────────────────────────────────────
        // History Messages
        // ─────────────────────────────────────────────────────────
        Message::HistoryPrev => history::handle_prev(state),
        Message::HistoryNext => history::handle_next(state),
        Message::HistoryFirst => history::handle_first(state),
        Message::HistoryLast => history::handle_last(state),
        Message::OpenSelected => history::handle_open_selected(state),
        Message::DeleteSelected => history::handle_delete_selected(state),
        Message::RequestClearHistory => history::handle_request_clear(state),
        Message::ConfirmClearHistory => history::handle_confirm_clear(state),
        Message::CancelClearHistory => history::handle_cancel_clear(state),
    }
}
