//! Confirmation dialog overlay

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use scribe_app::ConfirmDialogState;

use crate::theme::{palette, styles};

/// Centered modal dialog rendered over the current view
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_area = centered_rect(area, 46, 7);

        // Clear whatever is underneath, then draw the popup surface
        Clear.render(dialog_area, buf);
        let block = styles::panel_block(true)
            .title(format!(" {} ", self.state.title))
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                self.state.message.clone(),
                styles::text_primary(),
            )),
            Line::raw(""),
            Line::from(vec![
                Span::styled("[Y]es", styles::status_error()),
                Span::raw("   "),
                Span::styled("[N]o", styles::text_primary()),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

/// A fixed-size rect centered in `area`, clamped to fit
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(area, 40, 8);
        assert_eq!(rect.x, 20);
        assert_eq!(rect.y, 8);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 8);
    }

    #[test]
    fn test_centered_rect_clamps_to_small_area() {
        let area = Rect::new(0, 0, 30, 5);
        let rect = centered_rect(area, 46, 7);
        assert_eq!(rect.width, 30);
        assert_eq!(rect.height, 5);
    }
}
