//! Detail dialog overlay.
//!
//! Drawn last, on top of the gallery, centred in the pane. The focused button
//! is drawn in the selection colors so the focus trap is visible.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailInfo;

const MAX_WIDTH: usize = 72;
const LABEL_WIDTH: usize = 13;

/// Renders the dialog centred in a `rows` x `cols` pane.
pub fn render_modal(detail: &DetailInfo, theme: &Theme, rows: usize, cols: usize) {
    let width = cols.saturating_sub(4).min(MAX_WIDTH);
    if width < 20 {
        return;
    }
    let inner = width - 2;
    // frame (2) + title + blank + fields + blank + buttons
    let height = detail.fields.len() + 6;
    let top = rows.saturating_sub(height) / 2 + 1;
    let left = (cols - width) / 2 + 1;

    let frame = |row: usize, text: &str| {
        position_cursor(row, left);
        print!("{}", Theme::bg(&theme.colors.modal_bg));
        print!("{}", Theme::fg(&theme.colors.modal_border));
        print!("{text}");
        print!("{}", Theme::reset());
    };

    let title = truncate(&detail.title, inner.saturating_sub(2));
    let title_fill = inner.saturating_sub(title.chars().count() + 1);
    frame(top, &format!("┌─{title}{}┐", "─".repeat(title_fill)));

    let mut row = top + 1;
    let body_line = |row: usize, content: &str, fg: &str| {
        let content = truncate(content, inner);
        let pad = inner.saturating_sub(content.chars().count());
        position_cursor(row, left);
        print!("{}", Theme::bg(&theme.colors.modal_bg));
        print!("{}", Theme::fg(&theme.colors.modal_border));
        print!("│");
        print!("{}", Theme::fg(fg));
        print!("{content}{}", " ".repeat(pad));
        print!("{}", Theme::fg(&theme.colors.modal_border));
        print!("│");
        print!("{}", Theme::reset());
    };

    body_line(row, &format!(" {}", detail.position), &theme.colors.text_dim);
    row += 1;
    body_line(row, "", &theme.colors.text_normal);
    row += 1;
    for (label, value) in &detail.fields {
        body_line(
            row,
            &format!(" {label:<width$}{value}", width = LABEL_WIDTH),
            &theme.colors.text_normal,
        );
        row += 1;
    }
    body_line(row, "", &theme.colors.text_normal);
    row += 1;

    position_cursor(row, left);
    print!("{}", Theme::bg(&theme.colors.modal_bg));
    print!("{}", Theme::fg(&theme.colors.modal_border));
    print!("│ ");
    let mut used = 1;
    for control in &detail.controls {
        let label = format!("[ {} ]", control.label);
        if control.focused {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{label}");
        print!("{}", Theme::reset());
        print!("{}", Theme::bg(&theme.colors.modal_bg));
        print!(" ");
        used += label.chars().count() + 1;
    }
    print!("{}", " ".repeat(inner.saturating_sub(used)));
    print!("{}", Theme::fg(&theme.colors.modal_border));
    print!("│");
    print!("{}", Theme::reset());
    row += 1;

    frame(row, &format!("└{}┘", "─".repeat(inner)));
}
