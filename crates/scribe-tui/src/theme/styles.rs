//! Semantic style builders for the Scribe theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_ready() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_loading() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn status_error() -> Style {
    Style::default()
        .fg(palette::STATUS_RED)
        .add_modifier(Modifier::BOLD)
}

// --- Article styles ---
pub fn article_title() -> Style {
    Style::default()
        .fg(palette::ARTICLE_TITLE)
        .add_modifier(Modifier::BOLD)
}

pub fn article_meta() -> Style {
    Style::default().fg(palette::ARTICLE_META)
}

// --- Selection ---
pub fn selected_row() -> Style {
    Style::default()
        .fg(palette::DEEPEST_BG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Blocks ---

/// Bordered panel with rounded corners; the accent border marks focus
pub fn panel_block(focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(palette::BORDER_ACTIVE)
    } else {
        Style::default().fg(palette::BORDER_DIM)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
}
