//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`search`]: Category box
//! - [`pagination`]: Prev/Next buttons and sort label
//! - [`table`]: Image table (ID, VIEWS, DOWNLOADS, COLLECTIONS, PREVIEW)
//! - [`empty`]: Loading, exhausted and empty messages
//! - [`modal`]: Detail dialog overlay
//! - [`toast`]: Error toasts
//! - [`footer`]: Keybinding hints
//!
//! [`render_gallery`] lays them out:
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search box - 3 lines]
//! [Pagination]
//! [Border]
//! [Table headers + rows | status message]
//! [Border]
//! [Footer]
//! ```
//!
//! The dialog and the toasts are drawn afterwards, over the top.

mod empty;
mod footer;
mod header;
mod modal;
mod pagination;
mod search;
mod table;
mod toast;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyState, UIViewModel};

use empty::{render_empty_state, render_exhausted, render_loading};
use footer::render_footer;
use header::render_header;
use modal::render_modal;
use pagination::render_pagination;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};
use toast::render_toasts;

/// Renders a horizontal rule on `row`. Returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a full frame.
pub fn render_gallery(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_pagination(current_row, &vm.pagination, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let message_row = current_row + 2;
    match &vm.body {
        BodyState::Loading => render_loading(message_row, theme, cols),
        BodyState::Exhausted => render_exhausted(message_row, theme, cols),
        BodyState::Empty(empty) => render_empty_state(message_row, empty, theme, cols),
        BodyState::Table { items, .. } => {
            current_row = render_table_headers(current_row, theme);
            render_table_rows(current_row, items, theme, cols);
        }
    }

    let footer_row = rows;
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(detail) = &vm.detail {
        render_modal(detail, theme, rows, cols);
    }
    render_toasts(2, &vm.toasts, theme, cols);
}
