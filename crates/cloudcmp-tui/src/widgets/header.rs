//! Header bar: app title and the theme indicator.

use cloudcmp_core::ThemeMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{styles, Palette};

pub const TITLE: &str = "AWS Service Comparison";
pub const SUBTITLE: &str = "Compare AWS services to find the best fit for your needs";

pub struct MainHeader<'a> {
    theme: ThemeMode,
    palette: &'a Palette,
}

impl<'a> MainHeader<'a> {
    pub fn new(theme: ThemeMode, palette: &'a Palette) -> Self {
        Self { theme, palette }
    }

    fn theme_indicator(&self) -> Line<'static> {
        let p = self.palette;
        let icon = if self.theme.is_dark() { "☾" } else { "☀" };
        Line::from(vec![
            Span::styled("t ", styles::keybinding(p)),
            Span::styled(
                format!("{icon} {}", self.theme.display_name()),
                styles::text_secondary(p),
            ),
        ])
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let indicator = self.theme_indicator();
        let indicator_width = indicator.width() as u16;

        let mut title = vec![Span::styled(format!(" {TITLE}"), styles::accent_bold(p))];
        let room = inner.width.saturating_sub(indicator_width + 2) as usize;
        if TITLE.len() + 4 + SUBTITLE.len() <= room {
            title.push(Span::styled(format!("  {SUBTITLE}"), styles::text_muted(p)));
        }
        buf.set_line(inner.x, inner.y, &Line::from(title), inner.width);

        if indicator_width + 1 < inner.width {
            let x = inner.right() - indicator_width - 1;
            buf.set_line(x, inner.y, &indicator, indicator_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::{DARK, LIGHT};

    #[test]
    fn test_header_shows_title_and_light_indicator() {
        let mut term = TestTerminal::with_size(120, 3);
        term.render_widget(MainHeader::new(ThemeMode::Light, &LIGHT), term.area());
        assert!(term.line_contains(1, TITLE));
        assert!(term.line_contains(1, SUBTITLE));
        assert!(term.line_contains(1, "☀ Light"));
    }

    #[test]
    fn test_header_dark_indicator() {
        let mut term = TestTerminal::with_size(80, 3);
        term.render_widget(MainHeader::new(ThemeMode::Dark, &DARK), term.area());
        assert!(term.line_contains(1, "☾ Dark"));
    }

    #[test]
    fn test_narrow_header_drops_subtitle() {
        let mut term = TestTerminal::with_size(50, 3);
        term.render_widget(MainHeader::new(ThemeMode::Light, &LIGHT), term.area());
        assert!(term.line_contains(1, TITLE));
        assert!(!term.buffer_contains("Compare AWS services"));
    }
}
