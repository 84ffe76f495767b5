//! User interface rendering.

mod calculator;
mod theme;

use crate::app::App;
use ratatui::Frame;

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    calculator::draw_calculator(f, app);
}
