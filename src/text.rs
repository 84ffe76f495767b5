//! Column layout for recipe tables.

use unicode_width::UnicodeWidthStr;

/// Widest display width among `items`.
pub fn column_width<'a>(items: impl IntoIterator<Item = &'a str>) -> usize {
    items.into_iter().map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Pad `text` with spaces up to `width` terminal columns.
///
/// Text already wider than `width` is returned unchanged.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}
