//! Header component renderer.
//!
//! Title centered across the pane, with the edit-mode control ("Select" or
//! "Cancel") pinned to the right edge.

use crate::ui::helpers::{display_width, padding, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header bar at `row` and returns the next free row.
///
/// ```text
/// [left padding] TITLE [right padding] Select
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let control = format!("{} ", header.edit_label);
    let control_len = display_width(&control);
    let title_len = display_width(&header.title);
    let left = cols.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(left));
    print!("{}", header.title);
    print!("{}", padding(cols, left + title_len + control_len));

    print!("{}", Theme::fg(&theme.colors.accent));
    print!("{control}");
    print!("{}", Theme::reset());
    row + 1
}
