//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use scribe_app::View;

use crate::theme::{palette, styles};

/// Main header showing the app title and the current view
pub struct MainHeader {
    view: View,
}

impl MainHeader {
    pub fn new(view: View) -> Self {
        Self { view }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let chunks =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(20)]).split(inner);

        let title = Line::from(vec![
            Span::styled(" Scribe", styles::accent_bold()),
            Span::styled("  AI article generator", styles::text_muted()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        let view_label = Line::from(Span::styled(self.view.title(), styles::text_secondary()));
        Paragraph::new(view_label)
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
