//! Screen layout definitions for the TUI
//!
//! Header, filter bar and status line on top, the optional comparison
//! panel, the card grid, and a key hint footer.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::widgets::SINGLE_LINE_WIDTH;

/// Share of the screen given to the comparison panel when shown
const COMPARISON_PERCENT: u16 = 50;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub filters: Rect,
    /// "Showing N services" and selection controls
    pub status: Rect,
    /// Present only while the comparison panel is shown
    pub comparison: Option<Rect>,
    pub grid: Rect,
    pub hints: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect, show_comparison: bool) -> ScreenAreas {
    // Narrow screens wrap the filter bar onto a second line
    let filters_height = if area.width >= SINGLE_LINE_WIDTH { 3 } else { 4 };

    let mut constraints = vec![
        Constraint::Length(3),              // Header
        Constraint::Length(filters_height), // Filter bar
        Constraint::Length(1),              // Status line
    ];
    if show_comparison {
        constraints.push(Constraint::Percentage(COMPARISON_PERCENT));
    }
    constraints.push(Constraint::Min(3)); // Card grid
    constraints.push(Constraint::Length(1)); // Key hints

    let chunks = Layout::vertical(constraints).split(area);

    if show_comparison {
        ScreenAreas {
            header: chunks[0],
            filters: chunks[1],
            status: chunks[2],
            comparison: Some(chunks[3]),
            grid: chunks[4],
            hints: chunks[5],
        }
    } else {
        ScreenAreas {
            header: chunks[0],
            filters: chunks[1],
            status: chunks[2],
            comparison: None,
            grid: chunks[3],
            hints: chunks[4],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_comparison() {
        let layout = create(Rect::new(0, 0, 160, 40), false);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.filters.height, 3);
        assert_eq!(layout.status.y, 6);
        assert!(layout.comparison.is_none());
        assert_eq!(layout.grid.y, 7);
        assert_eq!(layout.grid.height, 32); // 40 - 3 - 3 - 1 - 1
        assert_eq!(layout.hints.y, 39);
    }

    #[test]
    fn test_layout_with_comparison_splits_content() {
        let layout = create(Rect::new(0, 0, 160, 40), true);

        let comparison = layout.comparison.expect("comparison area");
        assert_eq!(comparison.y, 7);
        assert_eq!(comparison.height, 20);
        assert_eq!(layout.grid.y, 27);
        assert_eq!(layout.grid.height, 12);
    }

    #[test]
    fn test_narrow_screen_gives_filter_bar_two_lines() {
        let layout = create(Rect::new(0, 0, 80, 24), false);
        assert_eq!(layout.filters.height, 4);
        assert_eq!(layout.grid.height, 15); // 24 - 3 - 4 - 1 - 1
    }
}
