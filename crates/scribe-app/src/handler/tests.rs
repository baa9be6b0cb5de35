//! Tests for handler module

use super::generation::EMPTY_TOPIC_ERROR;
use super::*;
use crate::history::HISTORY_CAP;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, FormField, View};
use scribe_core::types::{AppPhase, Article, GenerationParams, Language, Tone, WordCount};

/// Helper to create a test article
fn test_article(topic: &str) -> Article {
    Article::new(
        GenerationParams {
            topic: topic.to_string(),
            word_count: WordCount::Standard,
            language: Language::English,
            tone: Tone::Informative,
        },
        format!("About {topic}"),
        "line one\nline two\nline three",
    )
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_produces_quit_message() {
    let state = AppState::new();
    let result = handle_key(&state, InputKey::CharCtrl('c'));
    assert!(matches!(result, Some(Message::Quit)));
}

// ─────────────────────────────────────────────────────────
// Submit Gating
// ─────────────────────────────────────────────────────────

#[test]
fn test_submit_with_empty_topic_sets_error_and_no_action() {
    let mut state = AppState::new();

    let result = update(&mut state, Message::Submit);

    assert!(result.action.is_none());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(EMPTY_TOPIC_ERROR));
}

#[test]
fn test_submit_with_whitespace_topic_sets_error_and_no_action() {
    let mut state = AppState::new();
    state.form.topic = "   \t ".to_string();

    let result = update(&mut state, Message::Submit);

    assert!(result.action.is_none());
    assert_eq!(state.error.as_deref(), Some(EMPTY_TOPIC_ERROR));
}

#[test]
fn test_submit_with_topic_starts_generation() {
    let mut state = AppState::new();
    state.form.topic = "  container gardening ".to_string();

    let result = update(&mut state, Message::Submit);

    assert!(state.loading);
    assert!(state.error.is_none());
    match result.action {
        Some(UpdateAction::StartGeneration { params }) => {
            assert_eq!(params.topic, "container gardening");
        }
        other => panic!("expected StartGeneration, got {other:?}"),
    }
}

#[test]
fn test_submit_while_loading_is_ignored() {
    let mut state = AppState::new();
    state.form.topic = "anything".to_string();
    state.loading = true;

    let result = update(&mut state, Message::Submit);

    assert!(result.action.is_none());
}

// ─────────────────────────────────────────────────────────
// Generation Completion
// ─────────────────────────────────────────────────────────

#[test]
fn test_completion_appends_one_article_to_front_and_clears_error() {
    let mut state = AppState::new();
    state.history.insert(test_article("older"));
    state.loading = true;
    state.error = Some("stale error".to_string());

    let article = test_article("newer");
    let result = update(
        &mut state,
        Message::GenerationCompleted {
            article: article.clone(),
        },
    );

    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.history.len(), 2);
    assert_eq!(state.history.get(0).unwrap().id, article.id);
    assert_eq!(state.article.as_ref().unwrap().id, article.id);
    assert!(matches!(result.action, Some(UpdateAction::PersistHistory)));
}

#[test]
fn test_history_never_exceeds_cap() {
    let mut state = AppState::new();
    for i in 0..HISTORY_CAP {
        state.history.insert(test_article(&format!("topic-{i}")));
    }
    let oldest = state.history.get(HISTORY_CAP - 1).unwrap().id;

    update(
        &mut state,
        Message::GenerationCompleted {
            article: test_article("the 51st"),
        },
    );

    assert_eq!(state.history.len(), HISTORY_CAP);
    assert_eq!(state.history.get(0).unwrap().topic, "the 51st");
    assert!(state.history.iter().all(|a| a.id != oldest));
}

#[test]
fn test_failure_surfaces_error_and_keeps_prior_article() {
    let mut state = AppState::new();
    let prior = test_article("prior");
    state.article = Some(prior.clone());
    state.loading = true;

    let result = update(
        &mut state,
        Message::GenerationFailed {
            message: "Generation request failed: 503".to_string(),
        },
    );

    assert!(!state.loading);
    assert_eq!(
        state.error.as_deref(),
        Some("Generation request failed: 503")
    );
    assert_eq!(state.article.as_ref().unwrap().id, prior.id);
    assert!(state.history.is_empty());
    assert!(result.action.is_none());
}

// ─────────────────────────────────────────────────────────
// History Operations
// ─────────────────────────────────────────────────────────

#[test]
fn test_delete_selected_removes_only_that_entry() {
    let mut state = AppState::new();
    state.history.insert(test_article("a"));
    state.history.insert(test_article("b"));
    state.history.insert(test_article("c"));
    state.history_selected = 1;
    let target = state.history.get(1).unwrap().id;

    let result = update(&mut state, Message::DeleteSelected);

    assert_eq!(state.history.len(), 2);
    assert!(state.history.iter().all(|a| a.id != target));
    assert!(matches!(result.action, Some(UpdateAction::PersistHistory)));
}

#[test]
fn test_delete_last_entry_clamps_selection() {
    let mut state = AppState::new();
    state.history.insert(test_article("a"));
    state.history.insert(test_article("b"));
    state.history_selected = 1;

    update(&mut state, Message::DeleteSelected);

    assert_eq!(state.history_selected, 0);
}

#[test]
fn test_delete_with_empty_history_is_noop() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::DeleteSelected);
    assert!(result.action.is_none());
}

#[test]
fn test_clear_requires_confirmation() {
    let mut state = AppState::new();
    state.history.insert(test_article("a"));

    let result = update(&mut state, Message::RequestClearHistory);

    // Nothing cleared yet, dialog open, no save
    assert_eq!(state.history.len(), 1);
    assert!(state.confirm_dialog.is_some());
    assert!(result.action.is_none());
}

#[test]
fn test_confirm_clear_empties_history() {
    let mut state = AppState::new();
    state.history.insert(test_article("a"));
    state.history.insert(test_article("b"));
    update(&mut state, Message::RequestClearHistory);

    let result = update(&mut state, Message::ConfirmClearHistory);

    assert!(state.history.is_empty());
    assert!(state.confirm_dialog.is_none());
    assert!(matches!(result.action, Some(UpdateAction::PersistHistory)));
}

#[test]
fn test_cancel_clear_leaves_history_unchanged() {
    let mut state = AppState::new();
    state.history.insert(test_article("a"));
    update(&mut state, Message::RequestClearHistory);

    let result = update(&mut state, Message::CancelClearHistory);

    assert_eq!(state.history.len(), 1);
    assert!(state.confirm_dialog.is_none());
    assert!(result.action.is_none());
}

#[test]
fn test_request_clear_with_empty_history_opens_no_dialog() {
    let mut state = AppState::new();
    update(&mut state, Message::RequestClearHistory);
    assert!(state.confirm_dialog.is_none());
}

#[test]
fn test_open_selected_shows_article_and_switches_to_main() {
    let mut state = AppState::new();
    state.history.insert(test_article("a"));
    state.history.insert(test_article("b"));
    state.view = View::History;
    state.history_selected = 1;
    let expected = state.history.get(1).unwrap().id;

    update(&mut state, Message::OpenSelected);

    assert_eq!(state.view, View::Main);
    assert_eq!(state.article.as_ref().unwrap().id, expected);
    assert_eq!(state.article_scroll, 0);
}

#[test]
fn test_history_selection_stays_in_bounds() {
    let mut state = AppState::new();
    state.history.insert(test_article("a"));
    state.history.insert(test_article("b"));
    state.view = View::History;

    update(&mut state, Message::HistoryNext);
    update(&mut state, Message::HistoryNext);
    update(&mut state, Message::HistoryNext);
    assert_eq!(state.history_selected, 1);

    update(&mut state, Message::HistoryPrev);
    update(&mut state, Message::HistoryPrev);
    assert_eq!(state.history_selected, 0);
}

// ─────────────────────────────────────────────────────────
// Key Handling
// ─────────────────────────────────────────────────────────

#[test]
fn test_enter_in_main_view_submits() {
    let state = AppState::new();
    let result = handle_key(&state, InputKey::Enter);
    assert!(matches!(result, Some(Message::Submit)));
}

#[test]
fn test_typing_appends_to_topic_when_focused() {
    let mut state = AppState::new();
    state.form.topic = "ru".to_string();

    let result = handle_key(&state, InputKey::Char('s'));

    match result {
        Some(Message::TopicChanged { text }) => assert_eq!(text, "rus"),
        other => panic!("expected TopicChanged, got {other:?}"),
    }
}

#[test]
fn test_typing_is_ignored_when_option_field_focused() {
    let mut state = AppState::new();
    state.form.focus = FormField::Tone;

    assert!(handle_key(&state, InputKey::Char('x')).is_none());
}

#[test]
fn test_backspace_removes_last_topic_char() {
    let mut state = AppState::new();
    state.form.topic = "abc".to_string();

    match handle_key(&state, InputKey::Backspace) {
        Some(Message::TopicChanged { text }) => assert_eq!(text, "ab"),
        other => panic!("expected TopicChanged, got {other:?}"),
    }
}

#[test]
fn test_tab_cycles_focus() {
    let mut state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Tab),
        Some(Message::FocusNext)
    ));
    state.form.focus = FormField::WordCount;
    assert!(matches!(
        handle_key(&state, InputKey::BackTab),
        Some(Message::FocusPrev)
    ));
}

#[test]
fn test_esc_dismisses_error_before_quitting() {
    let mut state = AppState::new();
    state.error = Some("boom".to_string());
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::DismissError)
    ));

    state.error = None;
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::Quit)
    ));
}

#[test]
fn test_confirm_dialog_swallows_view_keys() {
    let mut state = AppState::new();
    state.history.insert(test_article("a"));
    update(&mut state, Message::RequestClearHistory);

    assert!(matches!(
        handle_key(&state, InputKey::Char('y')),
        Some(Message::ConfirmClearHistory)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::CancelClearHistory)
    ));
    // A key that means something in the main view does nothing here
    assert!(handle_key(&state, InputKey::Tab).is_none());
}

#[test]
fn test_history_view_keys() {
    let mut state = AppState::new();
    state.view = View::History;

    assert!(matches!(
        handle_key(&state, InputKey::Up),
        Some(Message::HistoryPrev)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::OpenSelected)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('d')),
        Some(Message::DeleteSelected)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('c')),
        Some(Message::RequestClearHistory)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::Back)
    ));
}

#[test]
fn test_info_page_keys_cycle_pages() {
    let mut state = AppState::new();
    state.view = View::About;

    assert!(matches!(
        handle_key(&state, InputKey::Tab),
        Some(Message::NextInfoPage)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::BackTab),
        Some(Message::PrevInfoPage)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::Back)
    ));
}

#[test]
fn test_info_page_navigation_wraps() {
    let mut state = AppState::new();
    state.view = View::Terms;

    update(&mut state, Message::NextInfoPage);
    assert_eq!(state.view, View::About);

    update(&mut state, Message::PrevInfoPage);
    assert_eq!(state.view, View::Terms);
}

// ─────────────────────────────────────────────────────────
// Scrolling
// ─────────────────────────────────────────────────────────

#[test]
fn test_scroll_clamps_to_article_length() {
    let mut state = AppState::new();
    state.article = Some(test_article("scrolling"));

    for _ in 0..100 {
        update(&mut state, Message::ScrollDown);
    }
    // test article content has 3 lines
    assert_eq!(state.article_scroll, 3);

    update(&mut state, Message::ScrollToTop);
    assert_eq!(state.article_scroll, 0);

    update(&mut state, Message::ScrollUp);
    assert_eq!(state.article_scroll, 0);
}

#[test]
fn test_scroll_without_article_stays_at_zero() {
    let mut state = AppState::new();
    update(&mut state, Message::ScrollDown);
    update(&mut state, Message::PageDown);
    assert_eq!(state.article_scroll, 0);
}

// ─────────────────────────────────────────────────────────
// Option Cycling
// ─────────────────────────────────────────────────────────

#[test]
fn test_cycle_option_changes_focused_field_only() {
    let mut state = AppState::new();
    state.form.focus = FormField::Language;
    let word_count_before = state.form.word_count;

    update(&mut state, Message::CycleOptionNext);

    assert_eq!(state.form.language, Language::Spanish);
    assert_eq!(state.form.word_count, word_count_before);
}

#[test]
fn test_cycle_option_with_topic_focus_is_noop() {
    let mut state = AppState::new();
    let language_before = state.form.language;

    update(&mut state, Message::CycleOptionNext);

    assert_eq!(state.form.language, language_before);
}
