//! Pagination bar renderer: `[◀ Prev]  Page N  [Next ▶]` plus the sort label.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Renders the pagination bar on `row`. Returns the next row.
///
/// Disabled buttons are drawn dim in the `button_disabled` color.
pub fn render_pagination(row: usize, info: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    let prev = "[◀ Prev]";
    let next = "[Next ▶]";
    let page = format!("  Page {}  ", info.page);
    let sort = format!("Sort: {} ↓", info.sort_label);

    let used = prev.chars().count() + page.chars().count() + next.chars().count();
    let gap = cols.saturating_sub(used + sort.chars().count() + 2);

    position_cursor(row, 1);
    print!(" ");
    button(prev, info.can_prev, theme);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{page}");
    button(next, info.can_next, theme);
    print!("{}", " ".repeat(gap));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{sort} ");
    print!("{}", Theme::reset());
    row + 1
}

fn button(label: &str, enabled: bool, theme: &Theme) {
    if enabled {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.button_enabled));
    } else {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.button_disabled));
    }
    print!("{label}");
    print!("{}", Theme::reset());
}
