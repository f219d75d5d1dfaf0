//! Shared rendering utilities.
//!
//! Cursor positioning, width-aware truncation and the gallery table's column
//! layout. Widths are counted in `char`s, which is exact for the ASCII data the
//! API returns and close enough for everything else.

use crate::ui::theme::Theme;

/// ID column width, including the cursor marker.
pub const ID_WIDTH: usize = 14;
/// VIEWS column width.
pub const VIEWS_WIDTH: usize = 10;
/// DOWNLOADS column width.
pub const DOWNLOADS_WIDTH: usize = 12;
/// COLLECTIONS column width.
pub const COLLECTIONS_WIDTH: usize = 13;
/// Width of every column except PREVIEW.
pub const FIXED_COLUMNS_WIDTH: usize = ID_WIDTH + VIEWS_WIDTH + DOWNLOADS_WIDTH + COLLECTIONS_WIDTH;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `width` chars, ending in `…` when cut.
///
/// # Examples
///
/// ```
/// use zgallery::ui::helpers::truncate;
///
/// assert_eq!(truncate("sunset", 10), "sunset");
/// assert_eq!(truncate("https://cdn.example.com/a.jpg", 8), "https:/…");
/// assert_eq!(truncate("abc", 0), "");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Left-aligns `text` in a cell of `width` chars, truncating if needed.
#[must_use]
pub fn cell(text: &str, width: usize) -> String {
    let fitted = truncate(text, width.saturating_sub(1));
    let pad = width.saturating_sub(fitted.chars().count());
    format!("{fitted}{}", " ".repeat(pad))
}

/// Prints `text` centred on `row`, padded to the full width, in `color`.
pub fn print_centered(row: usize, text: &str, color: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = text.chars().count();
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}
