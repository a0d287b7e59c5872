//! Status line (result count, selection summary, notices) and the
//! key hint footer.

use cloudcmp_app::UiMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{styles, Palette};

pub struct StatusLine<'a> {
    palette: &'a Palette,
    shown: usize,
    selected: usize,
    show_comparison: bool,
    loading: bool,
    notice: Option<&'a str>,
}

impl<'a> StatusLine<'a> {
    pub fn new(shown: usize, selected: usize, palette: &'a Palette) -> Self {
        Self {
            palette,
            shown,
            selected,
            show_comparison: false,
            loading: false,
            notice: None,
        }
    }

    pub fn show_comparison(mut self, shown: bool) -> Self {
        self.show_comparison = shown;
        self
    }

    /// A refetch is in flight
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn notice(mut self, notice: Option<&'a str>) -> Self {
        self.notice = notice;
        self
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let p = self.palette;
        let sep = || Span::styled(" │ ", styles::border_inactive(p));

        let mut spans = vec![Span::styled(
            format!(" Showing {} services", self.shown),
            styles::text_primary(p),
        )];

        if self.selected > 0 {
            let toggle = if self.show_comparison { "Hide" } else { "Show" };
            spans.extend([
                sep(),
                Span::styled(
                    format!("{} services selected", self.selected),
                    styles::accent_bold(p),
                ),
                sep(),
                Span::styled("v ", styles::keybinding(p)),
                Span::styled(format!("{toggle} Comparison"), styles::text_secondary(p)),
                Span::raw("  "),
                Span::styled("C ", styles::keybinding(p)),
                Span::styled("Clear Selection", styles::text_secondary(p)),
            ]);
        }

        if self.loading {
            spans.extend([sep(), Span::styled("Loading...", styles::status_yellow(p))]);
        }

        if let Some(notice) = self.notice {
            spans.extend([sep(), Span::styled(notice.to_string(), styles::status_red(p))]);
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

/// Keys available in the current mode
pub struct KeyHints<'a> {
    mode: &'a UiMode,
    palette: &'a Palette,
}

impl<'a> KeyHints<'a> {
    pub fn new(mode: &'a UiMode, palette: &'a Palette) -> Self {
        Self { mode, palette }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            UiMode::Browse => &[
                ("←↑↓→", "move"),
                ("Space", "select"),
                ("Enter", "details"),
                ("/", "search"),
                ("c", "category"),
                ("f", "free tier"),
                ("r", "reload"),
                ("t", "theme"),
                ("q", "quit"),
            ],
            UiMode::SearchInput => &[
                ("type", "filter"),
                ("Backspace", "delete"),
                ("Ctrl-U", "clear"),
                ("Enter/Esc", "done"),
            ],
            UiMode::Details(_) => &[
                ("Esc", "close"),
                ("↑↓ PgUp PgDn", "scroll"),
                ("o", "documentation"),
                ("t", "theme"),
            ],
            UiMode::CapacityWarning => &[("any key", "dismiss")],
        }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let p = self.palette;
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled(*key, styles::keybinding(p)));
            spans.push(Span::styled(format!(" {action}  "), styles::text_muted(p)));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
