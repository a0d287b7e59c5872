//! Card grid over the displayed service list.

use cloudcmp_app::{GridViewState, SelectionSet};
use cloudcmp_core::Service;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};

use super::service_card::{ServiceCard, CARD_HEIGHT, CARD_MIN_WIDTH};
use crate::theme::{styles, Palette};

/// Columns and whole rows of cards that fit in `area`
pub fn grid_dimensions(area: Rect) -> (usize, usize) {
    let columns = (area.width / CARD_MIN_WIDTH).max(1);
    let rows = (area.height / CARD_HEIGHT).max(1);
    (columns as usize, rows as usize)
}

pub struct ServiceGrid<'a> {
    services: &'a [Service],
    selection: &'a SelectionSet,
    palette: &'a Palette,
}

impl<'a> ServiceGrid<'a> {
    pub fn new(services: &'a [Service], selection: &'a SelectionSet, palette: &'a Palette) -> Self {
        Self {
            services,
            selection,
            palette,
        }
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let lines = vec![
            Line::styled("No services match the current filters", styles::heading(p)),
            Line::styled("Press x to clear filters", styles::text_muted(p)),
        ];
        let top = area.y + area.height.saturating_sub(2) / 2;
        let msg_area = Rect::new(area.x, top, area.width, area.bottom().saturating_sub(top));
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(msg_area, buf);
    }
}

impl StatefulWidget for ServiceGrid<'_> {
    type State = GridViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut GridViewState) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (columns, rows) = grid_dimensions(area);
        state.set_layout(columns, rows);

        if self.services.is_empty() {
            self.render_empty(area, buf);
            return;
        }
        state.clamp(self.services.len());

        let column_constraints = vec![Constraint::Ratio(1, columns as u32); columns];

        for visible_row in 0..rows {
            let y = area.y + visible_row as u16 * CARD_HEIGHT;
            if y >= area.bottom() {
                break;
            }
            let row_area = Rect::new(
                area.x,
                y,
                area.width,
                CARD_HEIGHT.min(area.bottom() - y),
            );
            let cells = Layout::horizontal(column_constraints.clone()).split(row_area);

            let first = (state.row_offset + visible_row) * columns;
            for (column, cell) in cells.iter().enumerate() {
                let index = first + column;
                let Some(service) = self.services.get(index) else {
                    return;
                };
                ServiceCard::new(service, self.palette)
                    .selected(self.selection.contains(&service.id))
                    .focused(index == state.cursor)
                    .render(*cell, buf);
            }
        }
    }
}
