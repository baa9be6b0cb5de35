//! History list widget

use chrono::Local;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use scribe_app::{History, HISTORY_CAP};
use scribe_core::types::Article;

use crate::theme::styles;

/// Saved articles, newest first, with a selection highlight
pub struct HistoryList<'a> {
    history: &'a History,
    selected: usize,
}

impl<'a> HistoryList<'a> {
    pub fn new(history: &'a History, selected: usize) -> Self {
        Self { history, selected }
    }
}

impl Widget for HistoryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" History ({}/{HISTORY_CAP}) ", self.history.len());
        let block = styles::panel_block(true).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.history.is_empty() {
            Paragraph::new(vec![
                Line::raw(""),
                Line::styled("  No saved articles yet.", styles::text_muted()),
            ])
            .render(inner, buf);
            return;
        }

        // Keep the selected row inside the visible window
        let visible = usize::from(inner.height);
        let start = if self.selected >= visible {
            self.selected + 1 - visible
        } else {
            0
        };

        let lines: Vec<Line> = self
            .history
            .iter()
            .enumerate()
            .skip(start)
            .take(visible)
            .map(|(index, article)| row_line(article, index == self.selected))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

fn row_line(article: &Article, selected: bool) -> Line<'static> {
    let date = article
        .created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M");
    let text = format!(" {date}  {}  ({})", article.title, article.topic);

    if selected {
        Line::styled(text, styles::selected_row())
    } else {
        Line::from(vec![Span::styled(text, styles::text_secondary())])
    }
}
