//! Selection counter and bottom action line.

use crate::ui::helpers::{display_width, padding, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DeleteButtonInfo, LoadMoreInfo, SelectionBarInfo};

/// Renders the "N selected" line, or a blank line while browsing.
///
/// Always consumes one row so the card grid does not jump when edit mode toggles.
pub fn render_selection_bar(
    row: usize,
    bar: Option<&SelectionBarInfo>,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);
    match bar {
        Some(bar) => {
            let text = format!(" {}", bar.text);
            print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
            print!("{text}");
            print!("{}", padding(cols, display_width(&text)));
            print!("{}", Theme::reset());
        }
        None => print!("{}", " ".repeat(cols)),
    }
    row + 1
}

/// Renders the load-more indicator on the left and the delete button on the right.
///
/// ```text
///  Loading more...                          [ Delete (2) ]
/// ```
pub fn render_bottom_bar(
    row: usize,
    load_more: Option<&LoadMoreInfo>,
    delete: Option<&DeleteButtonInfo>,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);

    let left = load_more.map_or_else(String::new, |info| format!(" {}", info.text));
    let button = delete.map_or_else(String::new, |d| format!("[ {} ]", d.label));
    let left_len = display_width(&left);
    let button_len = display_width(&button);

    print!("{}{}{left}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print!("{}", Theme::reset());
    print!("{}", padding(cols, left_len + button_len + 1));

    if !button.is_empty() {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.danger_fg));
        print!("{}", Theme::bg(&theme.colors.danger_bg));
        print!("{button}");
        print!("{}", Theme::reset());
    }
    print!(" ");
    row + 1
}
