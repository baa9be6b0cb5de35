//! Static informational pages (About, Contact, Disclaimer, Privacy, Terms)

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use scribe_app::View;

use crate::theme::styles;

/// One of the informational pages, with a tab bar across the top
pub struct InfoPage {
    view: View,
}

impl InfoPage {
    pub fn new(view: View) -> Self {
        Self { view }
    }

    fn tab_bar(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (index, page) in View::INFO_PAGES.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" │ ", styles::text_muted()));
            }
            if *page == self.view {
                spans.push(Span::styled(page.title(), styles::accent_bold()));
            } else {
                spans.push(Span::styled(page.title(), styles::text_muted()));
            }
        }
        Line::from(spans)
    }
}

impl Widget for InfoPage {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(format!(" {} ", self.view.title()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = vec![self.tab_bar(), Line::raw("")];
        for paragraph in page_text(self.view) {
            lines.push(Line::styled(
                format!(" {paragraph}"),
                styles::text_secondary(),
            ));
            lines.push(Line::raw(""));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

/// Body paragraphs for each page
fn page_text(view: View) -> &'static [&'static str] {
    match view {
        View::About => &[
            "Scribe is a terminal front end for AI article generation. Type a \
             topic, pick a target length, language, and tone, and Scribe asks a \
             text-generation service to draft the article for you.",
            "The last 50 generated articles are kept on this machine and can be \
             reopened, deleted, or cleared from the history screen.",
        ],
        View::Contact => &[
            "Questions, bug reports, and feature requests are welcome on the \
             project's issue tracker.",
            "Please include your configuration (minus the API key) and the \
             relevant lines from the log file when reporting a problem.",
        ],
        View::Disclaimer => &[
            "Articles are produced by a machine-learning model and may contain \
             inaccuracies, outdated information, or fabricated details.",
            "Review and fact-check generated content before publishing it \
             anywhere. You are responsible for how you use the output.",
        ],
        View::Privacy => &[
            "Scribe stores your generation history and settings locally on this \
             machine. Nothing is uploaded anywhere by Scribe itself.",
            "The topic and options you submit are sent to the configured \
             generation service; that service's own privacy terms apply to the \
             request.",
        ],
        View::Terms => &[
            "Scribe is provided as-is, without warranty of any kind.",
            "Use of the configured generation service is subject to that \
             service's terms of use, including its content policies and rate \
             limits.",
        ],
        // Not an info page; nothing to show
        View::Main | View::History => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_info_page_has_text() {
        for page in View::INFO_PAGES {
            assert!(!page_text(page).is_empty(), "{page:?} has no body text");
        }
    }

    #[test]
    fn test_non_info_views_have_no_text() {
        assert!(page_text(View::Main).is_empty());
        assert!(page_text(View::History).is_empty());
    }
}
