//! Toast stack in the top-right corner.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;

const MAX_WIDTH: usize = 48;

/// Renders `toasts` one per row from `row` down, newest at the bottom.
pub fn render_toasts(row: usize, toasts: &[String], theme: &Theme, cols: usize) {
    let width = cols.saturating_sub(2).min(MAX_WIDTH);
    if width < 8 {
        return;
    }
    for (offset, message) in toasts.iter().enumerate() {
        let text = truncate(&format!(" ✖ {message}"), width);
        let pad = width.saturating_sub(text.chars().count());
        position_cursor(row + offset, cols.saturating_sub(width));
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.toast_fg));
        print!("{}", Theme::bg(&theme.colors.toast_bg));
        print!("{text}{}", " ".repeat(pad));
        print!("{}", Theme::reset());
    }
}
