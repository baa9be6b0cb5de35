//! Status bar widget
//!
//! Left side: loading spinner or error or ready indicator.
//! Right side: key hints for the current view.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use scribe_app::{AppState, View};

use crate::theme::styles;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Status bar showing request state and key hints
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn status_span(&self) -> Span<'static> {
        if let Some(error) = &self.state.error {
            return Span::styled(format!("✗ {error}"), styles::status_error());
        }
        if self.state.loading {
            let frame = SPINNER_FRAMES[self.state.spinner_frame % SPINNER_FRAMES.len()];
            return Span::styled(
                format!("{frame} {}...", self.state.loading_phrase),
                styles::status_loading(),
            );
        }
        Span::styled("● Ready", styles::status_ready())
    }

    fn hints(&self) -> &'static str {
        if self.state.confirm_dialog.is_some() {
            return "y confirm  n cancel";
        }
        match self.state.view {
            View::Main => "Tab/←→ options  Enter generate  ^H history  ^A about  ^C quit",
            View::History => "↑↓ select  Enter open  d delete  c clear all  Esc back",
            _ => "Tab next page  Shift+Tab previous  Esc back",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Errors and the loading phrase get the whole line; key hints are
        // only shown when the app is idle
        if self.state.error.is_some() || self.state.loading {
            Paragraph::new(Line::from(vec![Span::raw(" "), self.status_span()]))
                .render(inner, buf);
            return;
        }

        let hints = self.hints();
        let hint_width = hints.chars().count() as u16 + 2;
        let chunks =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(hint_width)]).split(inner);

        Paragraph::new(Line::from(vec![Span::raw(" "), self.status_span()])).render(chunks[0], buf);

        Paragraph::new(Line::from(Span::styled(hints, styles::text_muted())))
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
