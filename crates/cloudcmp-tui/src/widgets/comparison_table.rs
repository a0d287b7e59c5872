//! Side-by-side comparison of the selected services.
//!
//! One column per selected service in selection order, one row per
//! criterion. Column `n` is removed with digit key `n`, which the header
//! shows as `name [n×]`. The body scrolls by line under a fixed header row.

use cloudcmp_core::Service;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};

use super::text::{truncate_with_ellipsis, wrap_text};
use crate::theme::{styles, Palette};

pub const EMPTY_TITLE: &str = "No services selected for comparison";
pub const EMPTY_HINT: &str = "Select services from the list above to compare them side by side.";
pub const NO_LIMITATIONS: &str = "No major limitations listed";
pub const NO_DOCUMENTATION: &str = "No documentation link";

const CRITERIA_WIDTH: u16 = 20;

/// One criterion and its value for each service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub label: &'static str,
    /// Per service, the items to list in its cell
    pub cells: Vec<Vec<String>>,
}

fn bullets(items: &[String]) -> Vec<String> {
    items.iter().map(|item| format!("• {item}")).collect()
}

/// Rows of the comparison table, in display order
pub fn comparison_rows(services: &[Service]) -> Vec<ComparisonRow> {
    fn row(
        label: &'static str,
        services: &[Service],
        cell: impl Fn(&Service) -> Vec<String>,
    ) -> ComparisonRow {
        ComparisonRow {
            label,
            cells: services.iter().map(cell).collect(),
        }
    }

    vec![
        row("Category", services, |s| vec![s.category.to_string()]),
        row("Description", services, |s| vec![s.description.clone()]),
        row("Key Features", services, |s| bullets(&s.key_features)),
        row("Pricing Models", services, |s| {
            vec![s
                .pricing_models
                .iter()
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
                .join(", ")]
        }),
        row("Pricing Notes", services, |s| vec![s.pricing_notes.clone()]),
        row("Use Cases", services, |s| bullets(&s.use_cases)),
        row("Limitations", services, |s| {
            if s.limitations.is_empty() {
                vec![NO_LIMITATIONS.to_string()]
            } else {
                bullets(&s.limitations)
            }
        }),
        row("Free Tier", services, |s| {
            vec![if s.free_tier_available {
                "✓ Available".to_string()
            } else {
                "✗ Not Available".to_string()
            }]
        }),
        row("Region Availability", services, |s| {
            vec![s.region_availability.clone()]
        }),
        row("Documentation", services, |s| {
            vec![s
                .documentation_link()
                .unwrap_or(NO_DOCUMENTATION)
                .to_string()]
        }),
    ]
}

/// Column header for the service at `index` (0-based)
pub fn column_header(service: &Service, index: usize) -> String {
    format!("{} [{}×]", service.name, index + 1)
}

/// A single terminal line of the comparison body
#[derive(Debug, Default, PartialEq, Eq)]
struct BodyLine {
    /// Set on the first line of each criterion
    label: Option<&'static str>,
    cells: Vec<String>,
}

/// Flatten rows into terminal lines, wrapping each cell to `column_width`.
/// Criteria are separated by a blank line.
fn body_lines(rows: Vec<ComparisonRow>, column_width: usize) -> Vec<BodyLine> {
    let mut lines = Vec::new();
    for (index, row) in rows.into_iter().enumerate() {
        if index > 0 {
            lines.push(BodyLine::default());
        }
        let wrapped: Vec<Vec<String>> = row
            .cells
            .iter()
            .map(|items| {
                items
                    .iter()
                    .flat_map(|item| wrap_text(item, column_width))
                    .collect()
            })
            .collect();
        let height = wrapped.iter().map(Vec::len).max().unwrap_or(0).max(1);

        for line in 0..height {
            lines.push(BodyLine {
                label: (line == 0).then_some(row.label),
                cells: wrapped
                    .iter()
                    .map(|cell| cell.get(line).cloned().unwrap_or_default())
                    .collect(),
            });
        }
    }
    lines
}

/// Comparison panel; the state is the first visible body line
pub struct ComparisonTable<'a> {
    services: &'a [Service],
    palette: &'a Palette,
}

impl<'a> ComparisonTable<'a> {
    pub fn new(services: &'a [Service], palette: &'a Palette) -> Self {
        Self { services, palette }
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::styled(EMPTY_TITLE, styles::heading(p)),
            Line::styled(EMPTY_HINT, styles::text_secondary(p)),
        ];
        let top = inner.y + inner.height.saturating_sub(2) / 2;
        let msg_area = Rect::new(inner.x, top, inner.width, inner.bottom().saturating_sub(top));
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(msg_area, buf);
    }
}

impl StatefulWidget for ComparisonTable<'_> {
    type State = usize;

    fn render(self, area: Rect, buf: &mut Buffer, offset: &mut usize) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        if self.services.is_empty() {
            *offset = 0;
            self.render_empty(area, buf);
            return;
        }

        let p = self.palette;
        let count = self.services.len();
        let title = format!(" Service Comparison ({count} services) ");
        let block = styles::glass_block(p, true)
            .title(Span::styled(title, styles::accent_bold(p)))
            .title_bottom(Line::from(vec![
                Span::styled(" 1-5 ", styles::keybinding(p)),
                Span::styled("remove  ", styles::text_muted(p)),
                Span::styled("J/K ", styles::keybinding(p)),
                Span::styled("scroll  ", styles::text_muted(p)),
                Span::styled("v ", styles::keybinding(p)),
                Span::styled("hide ", styles::text_muted(p)),
            ]));
        let inner = block.inner(area);

        let widths = std::iter::once(Constraint::Length(CRITERIA_WIDTH))
            .chain(std::iter::repeat(Constraint::Fill(1)).take(count));
        let columns = Layout::horizontal(widths).spacing(1).split(inner);
        let Some((label_col, service_cols)) = columns.split_first() else {
            return;
        };
        let column_width = service_cols.first().map_or(1, |c| c.width.max(1)) as usize;

        // Header line, a gap, then the scrollable body
        let body = Rect::new(
            inner.x,
            inner.y.saturating_add(2),
            inner.width,
            inner.height.saturating_sub(2),
        );
        let lines = body_lines(comparison_rows(self.services), column_width);
        let visible = body.height as usize;
        *offset = (*offset).min(lines.len().saturating_sub(visible));

        let block = if visible > 0 && lines.len() > visible {
            let last = (*offset + visible).min(lines.len());
            let position = format!(" {}-{}/{} ", *offset + 1, last, lines.len());
            block.title_bottom(
                Line::styled(position, styles::text_muted(p)).alignment(Alignment::Right),
            )
        } else {
            block
        };
        block.render(area, buf);

        if inner.height > 0 {
            let header = styles::accent_bold(p);
            buf.set_stringn(label_col.x, inner.y, "Criteria", label_col.width as usize, header);
            for (i, (service, col)) in self.services.iter().zip(service_cols).enumerate() {
                let width = col.width as usize;
                let text = truncate_with_ellipsis(&column_header(service, i), width);
                buf.set_stringn(col.x, inner.y, text, width, header);
            }
        }

        for (line, y) in lines.iter().skip(*offset).zip(body.top()..body.bottom()) {
            if let Some(label) = line.label {
                buf.set_stringn(
                    label_col.x,
                    y,
                    label,
                    label_col.width as usize,
                    styles::heading(p),
                );
            }
            for (text, col) in line.cells.iter().zip(service_cols) {
                buf.set_stringn(col.x, y, text, col.width as usize, styles::text_primary(p));
            }
        }
    }
}
