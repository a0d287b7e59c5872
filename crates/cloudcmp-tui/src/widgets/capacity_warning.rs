//! Blocking notice shown when a sixth service is selected.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay::{centered_rect, clear_area, dim_background, render_shadow};
use crate::theme::{styles, Palette};

const WIDTH: u16 = 56;
const HEIGHT: u16 = 7;

pub struct CapacityWarning<'a> {
    message: &'a str,
    palette: &'a Palette,
}

impl<'a> CapacityWarning<'a> {
    pub fn new(message: &'a str, palette: &'a Palette) -> Self {
        Self { message, palette }
    }
}

impl Widget for CapacityWarning<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        dim_background(buf, area, p);

        let rect = centered_rect(WIDTH, HEIGHT, area);
        render_shadow(buf, rect, p);
        clear_area(buf, rect);

        let block = styles::modal_block(p, " Selection Full ")
            .border_style(styles::status_yellow(p));
        let inner = block.inner(rect);
        block.render(rect, buf);

        let lines = vec![
            Line::raw(""),
            Line::styled(self.message.to_string(), styles::heading(p)),
            Line::raw(""),
            Line::styled("Press any key to continue", styles::text_muted(p)),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
