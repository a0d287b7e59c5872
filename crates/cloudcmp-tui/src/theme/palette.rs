//! Color palettes for the light and dark themes.

use cloudcmp_core::ThemeMode;
use ratatui::style::Color;

/// Every color a widget may draw with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub deepest_bg: Color,
    pub card_bg: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    pub contrast_fg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Status ---
    pub status_green: Color,
    pub status_red: Color,
    pub status_yellow: Color,

    // --- Badges ---
    pub badge_bg: Color,
    pub selected_bg: Color,

    // --- Effects ---
    pub shadow: Color,
}

pub const LIGHT: Palette = Palette {
    deepest_bg: Color::Rgb(241, 245, 249),
    card_bg: Color::Rgb(255, 255, 255),
    popup_bg: Color::Rgb(255, 255, 255),

    border_dim: Color::Rgb(203, 213, 225),
    border_active: Color::Rgb(255, 153, 0),

    accent: Color::Rgb(255, 153, 0),
    contrast_fg: Color::Rgb(15, 23, 42),

    text_primary: Color::Rgb(15, 23, 42),
    text_secondary: Color::Rgb(71, 85, 105),
    text_muted: Color::Rgb(148, 163, 184),

    status_green: Color::Rgb(21, 128, 61),
    status_red: Color::Rgb(185, 28, 28),
    status_yellow: Color::Rgb(161, 98, 7),

    badge_bg: Color::Rgb(226, 232, 240),
    selected_bg: Color::Rgb(255, 237, 213),

    shadow: Color::Rgb(148, 163, 184),
};

pub const DARK: Palette = Palette {
    deepest_bg: Color::Rgb(10, 12, 16),
    card_bg: Color::Rgb(22, 27, 34),
    popup_bg: Color::Rgb(28, 33, 43),

    border_dim: Color::Rgb(45, 51, 59),
    border_active: Color::Rgb(255, 170, 51),

    accent: Color::Rgb(255, 170, 51),
    contrast_fg: Color::Rgb(10, 12, 16),

    text_primary: Color::Rgb(201, 209, 217),
    text_secondary: Color::Rgb(125, 133, 144),
    text_muted: Color::Rgb(72, 79, 88),

    status_green: Color::Rgb(16, 185, 129),
    status_red: Color::Rgb(244, 63, 94),
    status_yellow: Color::Rgb(234, 179, 8),

    badge_bg: Color::Rgb(45, 51, 59),
    selected_bg: Color::Rgb(61, 45, 20),

    shadow: Color::Rgb(5, 6, 8),
};

/// Palette for the active theme mode
pub fn for_mode(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}
