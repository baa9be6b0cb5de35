//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use scribe_app::{AppState, View};

use crate::layout;
use crate::theme::palette;
use crate::widgets::{
    ArticleView, ConfirmDialog, HistoryList, InfoPage, MainHeader, StatusBar, TopicForm,
};

/// Render the complete UI (View function in TEA)
///
/// Pure: reads state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill the terminal with the background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(MainHeader::new(state.view), areas.header);

    match state.view {
        View::Main => {
            let main = layout::split_main(areas.content);
            frame.render_widget(TopicForm::new(&state.form, state.loading), main.form);
            frame.render_widget(
                ArticleView::new(state.article.as_ref(), state.article_scroll),
                main.article,
            );
        }
        View::History => {
            frame.render_widget(
                HistoryList::new(&state.history, state.history_selected),
                areas.content,
            );
        }
        _ => {
            frame.render_widget(InfoPage::new(state.view), areas.content);
        }
    }

    frame.render_widget(StatusBar::new(state), areas.status);

    // Modal overlay goes last, over everything else
    if let Some(dialog) = &state.confirm_dialog {
        frame.render_widget(ConfirmDialog::new(dialog), area);
    }
}
