//! Generation handlers: submit gating and request completion

use scribe_core::prelude::*;
use scribe_core::types::Article;

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub(crate) const EMPTY_TOPIC_ERROR: &str = "Please enter a topic";

/// Validate the form and start a generation request
///
/// The loading flag gates the trigger: submissions while a request is in
/// flight are ignored. There is no cancellation.
pub(crate) fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.loading {
        return UpdateResult::none();
    }

    let params = state.form.params();
    if params.topic.is_empty() {
        state.error = Some(EMPTY_TOPIC_ERROR.to_string());
        return UpdateResult::none();
    }

    state.begin_loading();
    info!(topic = %params.topic, words = params.word_count.target(), "starting generation");
    UpdateResult::action(UpdateAction::StartGeneration { params })
}

/// A request finished: display the article and record it in history
pub(crate) fn handle_completed(state: &mut AppState, article: Article) -> UpdateResult {
    state.finish_loading();
    state.error = None;
    state.history.insert(article.clone());
    state.history_selected = 0;
    state.article = Some(article);
    state.article_scroll = 0;
    UpdateResult::action(UpdateAction::PersistHistory)
}

/// A request failed: surface the error, leave the prior article untouched
pub(crate) fn handle_failed(state: &mut AppState, message: String) -> UpdateResult {
    state.finish_loading();
    warn!(error = %message, "generation failed");
    state.error = Some(message);
    UpdateResult::none()
}
