//! Full-record overlay for a single service.
//!
//! Drawn over a dimmed grid. Nothing is truncated; the body scrolls
//! instead. [`detail_overlay_rect`] is also used to hit-test mouse
//! clicks, so rendering and click handling agree on the bounds.

use cloudcmp_core::Service;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use super::modal_overlay::{centered_rect, clear_area, dim_background, render_shadow};
use super::text::wrap_text;
use crate::theme::{styles, Palette};

const MAX_WIDTH: u16 = 100;

/// Bounds of the overlay within the full screen `area`
pub fn detail_overlay_rect(area: Rect) -> Rect {
    let width = ((u32::from(area.width) * 4 / 5) as u16)
        .max(area.width.min(40))
        .min(MAX_WIDTH);
    let height = area.height.saturating_sub(4).max(area.height.min(10));
    centered_rect(width, height, area)
}

/// Body lines for `service`, wrapped to `width`
pub fn detail_lines(service: &Service, width: usize, palette: &Palette) -> Vec<Line<'static>> {
    let heading = styles::accent_bold(palette);
    let body = styles::text_primary(palette);
    let label = styles::heading(palette);
    let mut lines = Vec::new();

    let section = |lines: &mut Vec<Line<'static>>, title: &'static str| {
        if !lines.is_empty() {
            lines.push(Line::raw(""));
        }
        lines.push(Line::styled(title, heading));
    };
    let paragraph = |lines: &mut Vec<Line<'static>>, text: &str| {
        lines.extend(wrap_text(text, width).into_iter().map(|l| Line::styled(l, body)));
    };
    let list = |lines: &mut Vec<Line<'static>>, items: &[String]| {
        for item in items {
            let wrapped = wrap_text(item, width.saturating_sub(2));
            for (i, l) in wrapped.into_iter().enumerate() {
                let marker = if i == 0 { "• " } else { "  " };
                lines.push(Line::styled(format!("{marker}{l}"), body));
            }
        }
    };
    let field = |lines: &mut Vec<Line<'static>>, name: &'static str, value: String| {
        lines.push(Line::from(vec![
            Span::styled(format!("{name}: "), label),
            Span::styled(value, body),
        ]));
    };

    section(&mut lines, "Description");
    paragraph(&mut lines, &service.description);

    section(&mut lines, "Key Features");
    list(&mut lines, &service.key_features);

    section(&mut lines, "Use Cases");
    list(&mut lines, &service.use_cases);

    section(&mut lines, "Pricing Information");
    paragraph(&mut lines, &service.pricing_notes);
    let models: Vec<&str> = service.pricing_models.iter().map(|m| m.as_str()).collect();
    lines.push(Line::from(
        models
            .iter()
            .flat_map(|m| {
                [
                    Span::styled(format!(" {m} "), styles::badge(palette)),
                    Span::raw(" "),
                ]
            })
            .collect::<Vec<_>>(),
    ));

    if !service.limitations.is_empty() {
        section(&mut lines, "Limitations");
        list(&mut lines, &service.limitations);
    }

    section(&mut lines, "Additional Information");
    field(&mut lines, "Category", service.category.to_string());
    let free_tier = if service.free_tier_available {
        "Available"
    } else {
        "Not Available"
    };
    field(&mut lines, "Free Tier", free_tier.to_string());
    field(
        &mut lines,
        "Region Availability",
        service.region_availability.clone(),
    );
    if let Some(url) = service.documentation_link() {
        lines.push(Line::from(vec![
            Span::styled("View Official Documentation", styles::accent(palette)),
            Span::styled(" (o) ", styles::keybinding(palette)),
        ]));
        lines.push(Line::styled(url.to_string(), styles::text_muted(palette)));
    }

    lines
}

/// Modal overlay; the state is the scroll offset in lines
pub struct DetailOverlay<'a> {
    service: &'a Service,
    palette: &'a Palette,
}

impl<'a> DetailOverlay<'a> {
    pub fn new(service: &'a Service, palette: &'a Palette) -> Self {
        Self { service, palette }
    }
}

impl StatefulWidget for DetailOverlay<'_> {
    type State = u16;

    fn render(self, area: Rect, buf: &mut Buffer, scroll: &mut u16) {
        let p = self.palette;
        dim_background(buf, area, p);

        let rect = detail_overlay_rect(area);
        if rect.width < 3 || rect.height < 3 {
            return;
        }
        render_shadow(buf, rect, p);
        clear_area(buf, rect);

        let title = format!(" {} ", self.service.name);
        let block = styles::modal_block(p, &title).title_bottom(Line::from(vec![
            Span::styled(" Esc ", styles::keybinding(p)),
            Span::styled("close  ", styles::text_muted(p)),
            Span::styled("↑↓ ", styles::keybinding(p)),
            Span::styled("scroll ", styles::text_muted(p)),
        ]));
        let inner = block.inner(rect);
        block.render(rect, buf);

        // One column of padding on each side
        let body = Rect::new(
            inner.x.saturating_add(1),
            inner.y,
            inner.width.saturating_sub(2),
            inner.height,
        );
        let lines = detail_lines(self.service, body.width as usize, p);
        let max_scroll = (lines.len() as u16).saturating_sub(body.height);
        *scroll = (*scroll).min(max_scroll);

        Paragraph::new(lines)
            .style(Style::default().bg(p.popup_bg))
            .scroll((*scroll, 0))
            .render(body, buf);
    }
}
