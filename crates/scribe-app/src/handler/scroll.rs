//! Article pane scroll handlers
//!
//! Offsets are clamped to the unwrapped line count of the displayed article,
//! which keeps the offset in range without the handler knowing the render
//! width.

use crate::state::AppState;

use super::UpdateResult;

const PAGE_STEP: u16 = 10;

fn max_scroll(state: &AppState) -> u16 {
    state
        .article
        .as_ref()
        .map(|article| article.content.lines().count() as u16)
        .unwrap_or(0)
}

pub(crate) fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    state.article_scroll = state.article_scroll.saturating_sub(1);
    UpdateResult::none()
}

pub(crate) fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    state.article_scroll = (state.article_scroll + 1).min(max_scroll(state));
    UpdateResult::none()
}

pub(crate) fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.article_scroll = state.article_scroll.saturating_sub(PAGE_STEP);
    UpdateResult::none()
}

pub(crate) fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.article_scroll = (state.article_scroll + PAGE_STEP).min(max_scroll(state));
    UpdateResult::none()
}

pub(crate) fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.article_scroll = 0;
    UpdateResult::none()
}
