//! Generation form widget: topic input plus the option row

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use scribe_app::{FormField, FormState};

use crate::theme::styles;

/// The topic input line and the three option fields
pub struct TopicForm<'a> {
    form: &'a FormState,
    loading: bool,
}

impl<'a> TopicForm<'a> {
    pub fn new(form: &'a FormState, loading: bool) -> Self {
        Self { form, loading }
    }

    fn topic_line(&self, width: u16) -> Line<'a> {
        let focused = self.form.focus == FormField::Topic;
        let label_style = if focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };

        // Room for "Topic: " plus the cursor cell
        let avail = usize::from(width).saturating_sub(9);
        let visible = tail_chars(&self.form.topic, avail);

        let mut spans = vec![
            Span::styled("Topic: ", label_style),
            Span::styled(visible, styles::text_primary()),
        ];
        if focused && !self.loading {
            spans.push(Span::styled("█", styles::accent()));
        }
        Line::from(spans)
    }

    fn option_line(&self) -> Line<'a> {
        let mut spans = vec![Span::raw(" ")];
        spans.extend(option_cell(
            "Length",
            self.form.word_count.to_string(),
            self.form.focus == FormField::WordCount,
        ));
        spans.push(Span::raw("  "));
        spans.extend(option_cell(
            "Language",
            self.form.language.to_string(),
            self.form.focus == FormField::Language,
        ));
        spans.push(Span::raw("  "));
        spans.extend(option_cell(
            "Tone",
            self.form.tone.to_string(),
            self.form.focus == FormField::Tone,
        ));
        Line::from(spans)
    }
}

impl Widget for TopicForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(true).title(" New article ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = vec![self.topic_line(inner.width), self.option_line()];
        Paragraph::new(lines).render(inner, buf);
    }
}

/// One option field; the focused field gets angle markers and the accent color
fn option_cell(label: &str, value: String, focused: bool) -> Vec<Span<'static>> {
    if focused {
        vec![
            Span::styled(format!("{label}: "), styles::text_secondary()),
            Span::styled(format!("‹ {value} ›"), styles::accent_bold()),
        ]
    } else {
        vec![
            Span::styled(format!("{label}: "), styles::text_muted()),
            Span::styled(format!("  {value}  "), styles::text_secondary()),
        ]
    }
}

/// Keep the tail of the topic visible when it outgrows the input line
fn tail_chars(text: &str, avail: usize) -> String {
    if text.width() <= avail {
        return text.to_string();
    }
    let mut tail: Vec<char> = Vec::new();
    let mut width = 0;
    for c in text.chars().rev() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > avail {
            break;
        }
        width += char_width;
        tail.push(c);
    }
    tail.reverse();
    tail.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_chars_short_text_unchanged() {
        assert_eq!(tail_chars("hello", 10), "hello");
    }

    #[test]
    fn test_tail_chars_keeps_the_end() {
        assert_eq!(tail_chars("abcdefgh", 3), "fgh");
    }

    #[test]
    fn test_tail_chars_handles_wide_glyphs() {
        // Each CJK glyph is two cells wide
        let text = "日本語テスト";
        let tail = tail_chars(text, 4);
        assert_eq!(tail, "テスト".chars().skip(1).collect::<String>());
    }
}
