//! Article pane widget

use chrono::Local;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use scribe_core::types::Article;

use crate::theme::styles;

/// Displays the generated article, or a short hint when there is none yet
pub struct ArticleView<'a> {
    article: Option<&'a Article>,
    scroll: u16,
}

impl<'a> ArticleView<'a> {
    pub fn new(article: Option<&'a Article>, scroll: u16) -> Self {
        Self { article, scroll }
    }
}

impl Widget for ArticleView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(" Article ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let Some(article) = self.article else {
            let hint = Paragraph::new(vec![
                Line::raw(""),
                Line::styled(
                    "  Enter a topic above and press Enter to generate an article.",
                    styles::text_muted(),
                ),
                Line::styled(
                    "  Generated articles are kept in the history (Ctrl+H).",
                    styles::text_muted(),
                ),
            ]);
            hint.render(inner, buf);
            return;
        };

        let mut lines = vec![
            Line::styled(article.title.clone(), styles::article_title()),
            Line::from(Span::styled(meta_line(article), styles::article_meta())),
            Line::raw(""),
        ];
        lines.extend(article.content.lines().map(|l| Line::raw(l.to_string())));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}

/// One muted line of metadata under the title
fn meta_line(article: &Article) -> String {
    let words = article.content.split_whitespace().count();
    format!(
        "{}  |  {} words  |  {}  |  {}  |  topic: {}",
        article
            .created_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M"),
        words,
        article.language.label(),
        article.tone.label(),
        article.topic,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_core::types::{GenerationParams, Language, Tone, WordCount};

    #[test]
    fn test_meta_line_counts_words() {
        let article = Article::new(
            GenerationParams {
                topic: "word counting".to_string(),
                word_count: WordCount::Brief,
                language: Language::English,
                tone: Tone::Informative,
            },
            "Counting",
            "one two three four five",
        );
        let meta = meta_line(&article);
        assert!(meta.contains("5 words"));
        assert!(meta.contains("topic: word counting"));
        assert!(meta.contains("English"));
    }
}
