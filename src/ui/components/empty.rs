//! Status messages shown in place of the table.

use crate::ui::helpers::print_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// "Loading images..." centred on `row`.
pub fn render_loading(row: usize, theme: &Theme, cols: usize) {
    print!("{}", Theme::bold());
    print_centered(row, "Loading images...", &theme.colors.empty_state_fg, cols);
}

/// "No more images" centred on `row`.
pub fn render_exhausted(row: usize, theme: &Theme, cols: usize) {
    print!("{}", Theme::bold());
    print_centered(row, "No more images", &theme.colors.empty_state_fg, cols);
    print_centered(row + 1, "Try another category or go back a page", &theme.colors.text_dim, cols);
}

/// A message and a dimmed subtitle on `row` and `row + 1`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    print_centered(row, &empty.message, &theme.colors.empty_state_fg, cols);
    print!("{}", Theme::dim());
    print_centered(row + 1, &empty.subtitle, &theme.colors.text_dim, cols);
}
