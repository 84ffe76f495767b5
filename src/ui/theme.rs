//! Color themes for the calculator screen.

use crate::app::Theme;
use ratatui::style::Color;

/// Colors for each part of the calculator screen.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Panel background.
    pub bg: Color,
    /// Ingredient names and plain text.
    pub text: Color,
    /// Help panel title.
    pub heading: Color,
    /// Input labels and "to taste" quantities.
    pub label: Color,
    /// Scaled quantities and the guest count.
    pub amount: Color,
    /// Panel borders.
    pub border: Color,
    /// Text of the selected pan size.
    pub selected_fg: Color,
    /// Background of the selected pan size.
    pub selected_bg: Color,
    /// Status bar text.
    pub status_fg: Color,
    /// Status bar background.
    pub status_bg: Color,
    /// Guest field that does not hold a guest count.
    pub invalid: Color,
}

impl ThemeColors {
    /// Palette for `theme`.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                label: Color::Rgb(184, 187, 38),
                amount: Color::Rgb(142, 192, 124),
                border: Color::Rgb(102, 92, 84),
                selected_fg: Color::Rgb(40, 40, 40),
                selected_bg: Color::Rgb(251, 184, 108),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                invalid: Color::Rgb(250, 189, 47),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                label: Color::Rgb(121, 116, 14),
                amount: Color::Rgb(102, 123, 3),
                border: Color::Rgb(213, 196, 161),
                selected_fg: Color::Rgb(251, 245, 234),
                selected_bg: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                invalid: Color::Rgb(181, 118, 20),
            },
        }
    }
}
