//! Layout helpers shared across UI components.

use ratatui::prelude::*;

/// Creates a centered rectangular area within a given rectangle.
///
/// Dimensions are percentages of the parent. Used for modal dialogs.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_contained_in_the_parent() {
        let parent = Rect::new(0, 0, 100, 50);
        let centered = centered_rect(60, 40, parent);
        assert!(centered.x >= parent.x && centered.right() <= parent.right());
        assert!(centered.y >= parent.y && centered.bottom() <= parent.bottom());
        assert_eq!(centered.width, 60);
        assert_eq!(centered.height, 20);
    }
}
