//! Image table renderer.
//!
//! Five columns: ID, VIEWS, DOWNLOADS, COLLECTIONS and PREVIEW. The fixed
//! widths live in [`crate::ui::helpers`] so the view model can size the
//! PREVIEW column to what is left.

use crate::ui::helpers::{
    cell, position_cursor, COLLECTIONS_WIDTH, DOWNLOADS_WIDTH, ID_WIDTH, VIEWS_WIDTH,
};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Renders the column headers on `row`. Returns the next row.
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{}{}{}{}{}",
        cell("  ID", ID_WIDTH),
        cell("VIEWS", VIEWS_WIDTH),
        cell("DOWNLOADS", DOWNLOADS_WIDTH),
        cell("COLLECTIONS", COLLECTIONS_WIDTH),
        "PREVIEW"
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every row starting at `row`. Returns the row after the last one.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |current, item| render_table_row(current, item, theme, cols))
}

/// One row, padded to the pane width so the selection background spans it.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let marker = if item.is_selected { "▶ " } else { "  " };
    let line = format!(
        "{}{}{}{}{}",
        cell(&format!("{marker}{}", item.id), ID_WIDTH),
        cell(&item.views, VIEWS_WIDTH),
        cell(&item.downloads, DOWNLOADS_WIDTH),
        cell(&item.collections, COLLECTIONS_WIDTH),
        item.preview
    );
    let line_len = line.chars().count();
    print!("{line}");
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
