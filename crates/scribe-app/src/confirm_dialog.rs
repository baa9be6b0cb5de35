//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget lives in
//! scribe-tui's widgets.

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
}

impl ConfirmDialogState {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Dialog shown before clearing the whole history
    pub fn clear_history(count: usize) -> Self {
        let message = if count == 1 {
            "This will delete 1 saved article.".to_string()
        } else {
            format!("This will delete {count} saved articles.")
        };
        Self::new("Clear history?", message)
    }
}
