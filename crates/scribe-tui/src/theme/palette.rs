//! Color palette for the Scribe theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds
pub const POPUP_BG: Color = Color::DarkGray; // Modal/popup backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Magenta; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Magenta; // Primary accent

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White; // Primary text
pub const TEXT_SECONDARY: Color = Color::Gray; // Secondary text
pub const TEXT_MUTED: Color = Color::DarkGray; // Muted text

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Ready/success
pub const STATUS_RED: Color = Color::Red; // Error
pub const STATUS_YELLOW: Color = Color::Yellow; // In-flight request

// --- Article ---
pub const ARTICLE_TITLE: Color = Color::Cyan; // Article title line
pub const ARTICLE_META: Color = Color::DarkGray; // Date/options line
