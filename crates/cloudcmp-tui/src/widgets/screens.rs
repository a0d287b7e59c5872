//! Full-screen loading and error states.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::theme::{styles, Palette};

pub const LOADING_TEXT: &str = "Loading AWS services...";

/// Vertically center `lines` within `area`
fn render_centered(lines: Vec<Line<'_>>, area: Rect, buf: &mut Buffer) {
    let height = lines.len() as u16;
    let top = area.y + area.height.saturating_sub(height) / 2;
    let rect = Rect::new(area.x, top, area.width, area.bottom().saturating_sub(top));
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(rect, buf);
}

pub struct LoadingScreen<'a> {
    palette: &'a Palette,
}

impl<'a> LoadingScreen<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl Widget for LoadingScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        Block::default()
            .style(Style::default().bg(p.deepest_bg))
            .render(area, buf);
        render_centered(
            vec![Line::styled(LOADING_TEXT, styles::accent_bold(p))],
            area,
            buf,
        );
    }
}

/// Fetch failure with a Retry action
pub struct ErrorScreen<'a> {
    message: &'a str,
    palette: &'a Palette,
}

impl<'a> ErrorScreen<'a> {
    pub fn new(message: &'a str, palette: &'a Palette) -> Self {
        Self { message, palette }
    }
}

impl Widget for ErrorScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        Block::default()
            .style(Style::default().bg(p.deepest_bg))
            .render(area, buf);

        let lines = vec![
            Line::styled("Error", styles::status_red(p).add_modifier(Modifier::BOLD)),
            Line::raw(""),
            Line::styled(self.message.to_string(), styles::text_primary(p)),
            Line::raw(""),
            Line::from(vec![
                Span::styled(" r ", styles::keybinding(p)),
                Span::styled(" Retry ", styles::focused_selected(p)),
            ]),
            Line::raw(""),
            Line::from(vec![
                Span::styled("x ", styles::keybinding(p)),
                Span::styled("clear filters  ", styles::text_muted(p)),
                Span::styled("q ", styles::keybinding(p)),
                Span::styled("quit", styles::text_muted(p)),
            ]),
        ];
        render_centered(lines, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::{DARK, LIGHT};

    #[test]
    fn test_loading_screen_text_and_background() {
        let mut term = TestTerminal::with_size(60, 10);
        term.render_widget(LoadingScreen::new(&DARK), term.area());
        assert!(term.buffer_contains(LOADING_TEXT));
        assert_eq!(term.buffer()[(0, 0)].bg, DARK.deepest_bg);
    }

    #[test]
    fn test_error_screen_shows_message_and_retry() {
        let mut term = TestTerminal::with_size(80, 16);
        let message = cloudcmp_core::UNAVAILABLE_MESSAGE;
        term.render_widget(ErrorScreen::new(message, &LIGHT), term.area());

        assert!(term.buffer_contains("Error"));
        assert!(term.buffer_contains(message));
        assert!(term.buffer_contains("Retry"));
    }
}
