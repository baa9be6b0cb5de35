//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header area (app title + current view)
    pub header: Rect,

    /// Content area (form + article, history list, or an info page)
    pub content: Rect,

    /// Status bar area (spinner/error on the left, key hints on the right)
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let constraints = [
        Constraint::Length(3), // Header (top border + title row + bottom border)
        Constraint::Min(5),    // Content
        Constraint::Length(3), // Status bar
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        status: chunks[2],
    }
}

/// Area for the generation form inside the main view content
pub struct MainAreas {
    /// Topic input + option row (bordered)
    pub form: Rect,

    /// Article pane (bordered)
    pub article: Rect,
}

pub fn split_main(content: Rect) -> MainAreas {
    let chunks = Layout::vertical([
        Constraint::Length(4), // Form: borders + topic row + option row
        Constraint::Min(3),    // Article pane
    ])
    .split(content);

    MainAreas {
        form: chunks[0],
        article: chunks[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_heights() {
        let area = Rect::new(0, 0, 80, 24);
        let areas = create(area);

        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.status.height, 3);
        assert_eq!(areas.content.height, 18); // 24 - 3 - 3
        assert_eq!(areas.content.y, 3);
        assert_eq!(areas.status.y, 21);
    }

    #[test]
    fn test_split_main_gives_form_fixed_height() {
        let content = Rect::new(0, 3, 80, 18);
        let areas = split_main(content);

        assert_eq!(areas.form.height, 4);
        assert_eq!(areas.article.height, 14);
    }

    #[test]
    fn test_create_layout_survives_tiny_terminal() {
        let area = Rect::new(0, 0, 20, 6);
        let areas = create(area);
        // layout never panics; content may collapse but stays within bounds
        assert!(areas.content.height <= area.height);
    }
}
