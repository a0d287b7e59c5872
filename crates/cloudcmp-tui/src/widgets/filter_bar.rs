//! Filter bar: search box, category and free-tier selectors.

use cloudcmp_core::{FilterCriteria, FreeTierChoice};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::text::truncate_with_ellipsis;
use crate::theme::{styles, Palette};

pub const SEARCH_PLACEHOLDER: &str = "Search by name or description...";
pub const ALL_CATEGORIES: &str = "All Categories";

/// Columns reserved for the search text
const SEARCH_WIDTH: usize = 32;

/// Columns needed to fit the whole bar on one line, borders included
pub const SINGLE_LINE_WIDTH: u16 = 145;

pub struct FilterBar<'a> {
    criteria: &'a FilterCriteria,
    palette: &'a Palette,
    editing: bool,
}

impl<'a> FilterBar<'a> {
    pub fn new(criteria: &'a FilterCriteria, palette: &'a Palette) -> Self {
        Self {
            criteria,
            palette,
            editing: false,
        }
    }

    /// Search box has keyboard focus
    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    fn search_span(&self) -> Span<'static> {
        let p = self.palette;
        match self.criteria.search.as_deref() {
            Some(text) if !text.is_empty() => {
                // Keep the tail visible while typing
                let shown = if self.editing && text.chars().count() > SEARCH_WIDTH - 1 {
                    let skip = text.chars().count() - (SEARCH_WIDTH - 1);
                    text.chars().skip(skip).collect()
                } else {
                    truncate_with_ellipsis(text, SEARCH_WIDTH)
                };
                let cursor = if self.editing { "▏" } else { "" };
                Span::styled(format!("{shown}{cursor}"), styles::text_primary(p))
            }
            _ if self.editing => Span::styled("▏", styles::accent(p)),
            _ => Span::styled(SEARCH_PLACEHOLDER, styles::text_muted(p)),
        }
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, self.editing);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let category = self
            .criteria
            .category
            .map(|c| c.as_str())
            .unwrap_or(ALL_CATEGORIES);
        let free_tier = FreeTierChoice::from_filter(self.criteria.free_tier).display_name();
        let sep = || Span::styled("  │  ", styles::border_inactive(p));

        let line = Line::from(vec![
            Span::styled(" / ", styles::keybinding(p)),
            Span::styled("Search: ", styles::heading(p)),
            self.search_span(),
            sep(),
            Span::styled("c ", styles::keybinding(p)),
            Span::styled("Category: ", styles::heading(p)),
            Span::styled(category, styles::text_primary(p)),
            sep(),
            Span::styled("f ", styles::keybinding(p)),
            Span::styled("Free Tier: ", styles::heading(p)),
            Span::styled(free_tier, styles::text_primary(p)),
            sep(),
            Span::styled("x ", styles::keybinding(p)),
            Span::styled("Clear Filters", styles::text_secondary(p)),
        ]);

        Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
