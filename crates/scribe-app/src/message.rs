//! Message types for the application (TEA pattern)

use scribe_core::types::Article;

use crate::input_key::InputKey;
use crate::state::View;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for the loading spinner
    Tick,

    /// Quit immediately (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Form Messages
    // ─────────────────────────────────────────────────────────
    /// Replace the topic text (typed/deleted characters)
    TopicChanged { text: String },
    /// Move focus to the next form field
    FocusNext,
    /// Move focus to the previous form field
    FocusPrev,
    /// Cycle the focused option field backward
    CycleOptionPrev,
    /// Cycle the focused option field forward
    CycleOptionNext,

    // ─────────────────────────────────────────────────────────
    // Generation Messages
    // ─────────────────────────────────────────────────────────
    /// Submit the form and start a generation request
    Submit,
    /// Background request finished successfully
    GenerationCompleted { article: Article },
    /// Background request failed; `message` is user-facing
    GenerationFailed { message: String },

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Switch to a view
    ShowView(View),
    /// Next informational page (Tab)
    NextInfoPage,
    /// Previous informational page (Shift+Tab)
    PrevInfoPage,
    /// Return to the main view
    Back,
    /// Dismiss the current error message
    DismissError,

    // ─────────────────────────────────────────────────────────
    // Article Scroll Messages
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,

    // ─────────────────────────────────────────────────────────
    // History Messages
    // ─────────────────────────────────────────────────────────
    /// Move the history selection up
    HistoryPrev,
    /// Move the history selection down
    HistoryNext,
    /// Jump to the newest entry
    HistoryFirst,
    /// Jump to the oldest entry
    HistoryLast,
    /// Open the selected article in the main view
    OpenSelected,
    /// Delete the selected article
    DeleteSelected,
    /// Ask for confirmation before clearing the history
    RequestClearHistory,
    /// Confirm the pending clear
    ConfirmClearHistory,
    /// Cancel the pending clear
    CancelClearHistory,
}
