//! scribe-tui - Terminal UI for Scribe
//!
//! This crate provides the ratatui-based terminal interface: the event loop,
//! terminal event polling, rendering, and widget display. Application logic
//! lives in scribe-app; this crate only translates key events into messages
//! and state into frames.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
