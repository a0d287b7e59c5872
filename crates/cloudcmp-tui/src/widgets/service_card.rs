//! Catalog card: summary of one service in the grid.

use std::borrow::Cow;

use cloudcmp_core::Service;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::text::{truncate_with_ellipsis, wrap_text};
use crate::theme::{styles, Palette};

/// Card height in rows, borders included
pub const CARD_HEIGHT: u16 = 16;

/// Narrowest a card may be before the grid drops a column
pub const CARD_MIN_WIDTH: u16 = 40;

/// Pricing notes longer than this are cut on the card
pub const PRICING_NOTES_LIMIT: usize = 100;

/// Key features listed on the card before "+N more..."
pub const FEATURE_PREVIEW_COUNT: usize = 3;

const DESCRIPTION_LINES: usize = 2;
const PRICING_LINES: usize = 3;

/// First [`PRICING_NOTES_LIMIT`] characters, followed by "..." when cut
pub fn truncate_pricing_notes(notes: &str) -> Cow<'_, str> {
    if notes.chars().count() > PRICING_NOTES_LIMIT {
        let cut: String = notes.chars().take(PRICING_NOTES_LIMIT).collect();
        Cow::Owned(format!("{cut}..."))
    } else {
        Cow::Borrowed(notes)
    }
}

/// Features shown on the card plus the "+N more..." line for the rest
pub fn feature_preview(features: &[String]) -> (&[String], Option<String>) {
    let shown = &features[..features.len().min(FEATURE_PREVIEW_COUNT)];
    let more = (features.len() > FEATURE_PREVIEW_COUNT)
        .then(|| format!("+{} more...", features.len() - FEATURE_PREVIEW_COUNT));
    (shown, more)
}

pub struct ServiceCard<'a> {
    service: &'a Service,
    palette: &'a Palette,
    selected: bool,
    focused: bool,
}

impl<'a> ServiceCard<'a> {
    pub fn new(service: &'a Service, palette: &'a Palette) -> Self {
        Self {
            service,
            palette,
            selected: false,
            focused: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn body_lines(&self, width: usize) -> Vec<Line<'static>> {
        let p = self.palette;
        let s = self.service;
        let mut lines = Vec::new();

        let title_style = match (self.focused, self.selected) {
            (true, true) => styles::focused_selected(p),
            (true, false) => styles::accent_bold(p),
            _ => styles::heading(p),
        };
        lines.push(Line::from(Span::styled(
            truncate_with_ellipsis(&s.name, width),
            title_style,
        )));

        let mut badges = Vec::new();
        if s.free_tier_available {
            badges.push(Span::styled(
                " Free Tier ",
                Style::default().fg(p.contrast_fg).bg(p.status_green),
            ));
            badges.push(Span::raw(" "));
        }
        badges.push(Span::styled(format!(" {} ", s.category), styles::badge(p)));
        lines.push(Line::from(badges));

        lines.extend(
            wrap_text(&s.description, width)
                .into_iter()
                .take(DESCRIPTION_LINES)
                .map(|l| Line::styled(l, styles::text_secondary(p))),
        );

        lines.push(Line::styled("Key Features:", styles::heading(p)));
        let (shown, more) = feature_preview(&s.key_features);
        for feature in shown {
            lines.push(Line::styled(
                truncate_with_ellipsis(&format!("• {feature}"), width),
                styles::text_primary(p),
            ));
        }
        if let Some(more) = more {
            lines.push(Line::styled(more, styles::text_muted(p)));
        }

        let pricing = format!("Pricing: {}", truncate_pricing_notes(&s.pricing_notes));
        for (i, line) in wrap_text(&pricing, width)
            .into_iter()
            .take(PRICING_LINES)
            .enumerate()
        {
            match line.strip_prefix("Pricing:") {
                Some(rest) if i == 0 => lines.push(Line::from(vec![
                    Span::styled("Pricing:", styles::heading(p)),
                    Span::styled(rest.to_string(), styles::text_secondary(p)),
                ])),
                _ => lines.push(Line::styled(line, styles::text_secondary(p))),
            }
        }

        lines
    }

    fn action_lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;

        let select = if self.selected {
            Span::styled(" Selected ✓ ", styles::focused_selected(p))
        } else {
            Span::styled(" Select for Comparison ", styles::accent(p))
        };

        let mut actions = vec![
            Span::styled("Enter ", styles::keybinding(p)),
            Span::styled("View Details", styles::text_primary(p)),
        ];
        if self.service.documentation_link().is_some() {
            actions.push(Span::styled("  o ", styles::keybinding(p)));
            actions.push(Span::styled("Documentation", styles::text_primary(p)));
        }

        vec![
            Line::from(vec![Span::styled("Space ", styles::keybinding(p)), select]),
            Line::from(actions),
        ]
    }
}

impl Widget for ServiceCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut block = styles::glass_block(p, self.focused);
        if self.selected {
            block = block.style(Style::default().bg(p.selected_bg));
        }

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height < 3 {
            return;
        }

        let [body, actions] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(2)]).areas(inner);

        Paragraph::new(self.body_lines(inner.width as usize)).render(body, buf);
        Paragraph::new(self.action_lines()).render(actions, buf);
    }
}
