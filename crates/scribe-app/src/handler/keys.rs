//! Key event handlers for the different views

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, FormField, View};

/// Convert key events to messages based on the current view
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // A modal dialog swallows all input first
    if state.confirm_dialog.is_some() {
        return handle_key_confirm_dialog(key);
    }

    match state.view {
        View::Main => handle_key_main(state, key),
        View::History => handle_key_history(key),
        _ => handle_key_info_page(key),
    }
}

/// Handle key events while the confirm dialog is open
fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmClearHistory),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelClearHistory),
        // Force quit works even in the dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in the main view (form + article pane)
fn handle_key_main(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('h') => Some(Message::ShowView(View::History)),
        InputKey::CharCtrl('a') => Some(Message::ShowView(View::About)),

        InputKey::Enter => Some(Message::Submit),
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrev),
        InputKey::Left => Some(Message::CycleOptionPrev),
        InputKey::Right => Some(Message::CycleOptionNext),

        // Article pane scrolling
        InputKey::Up => Some(Message::ScrollUp),
        InputKey::Down => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home => Some(Message::ScrollToTop),

        // Clear the whole topic line
        InputKey::CharCtrl('u') if state.form.focus == FormField::Topic => {
            Some(Message::TopicChanged {
                text: String::new(),
            })
        }

        InputKey::Backspace if state.form.focus == FormField::Topic => {
            let mut text = state.form.topic.clone();
            text.pop();
            Some(Message::TopicChanged { text })
        }

        InputKey::Char(c) if state.form.focus == FormField::Topic => {
            let mut text = state.form.topic.clone();
            text.push(c);
            Some(Message::TopicChanged { text })
        }

        // Esc dismisses an error first; with none showing it quits
        InputKey::Esc => {
            if state.error.is_some() {
                Some(Message::DismissError)
            } else {
                Some(Message::Quit)
            }
        }

        _ => None,
    }
}

/// Handle key events in the history view
fn handle_key_history(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Up => Some(Message::HistoryPrev),
        InputKey::Down => Some(Message::HistoryNext),
        InputKey::Home => Some(Message::HistoryFirst),
        InputKey::End => Some(Message::HistoryLast),
        InputKey::Enter => Some(Message::OpenSelected),
        InputKey::Char('d') | InputKey::Delete => Some(Message::DeleteSelected),
        InputKey::Char('c') => Some(Message::RequestClearHistory),
        InputKey::Esc | InputKey::Char('q') => Some(Message::Back),
        _ => None,
    }
}

/// Handle key events on the informational pages
fn handle_key_info_page(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Tab | InputKey::Right => Some(Message::NextInfoPage),
        InputKey::BackTab | InputKey::Left => Some(Message::PrevInfoPage),
        InputKey::Esc | InputKey::Char('q') => Some(Message::Back),
        _ => None,
    }
}
