//! Search bar component renderer.
//!
//! A bordered input box holding the search term, with the sort button on its
//! right. The border switches to the focus color while the term is being typed.

use crate::ui::helpers::{display_width, padding, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box.
const SEARCH_BOX_MARGIN: usize = 1;

/// Renders the 3-line search box at `row` and returns the next free row.
///
/// ```text
///  ┌─────────────────────────────────────┐
///  │ Search: lamp        [↑ Low to High] │
///  └─────────────────────────────────────┘
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_focused {
        &theme.colors.search_bar_focus
    } else {
        &theme.colors.search_bar_border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let caret = if search.is_focused { "_" } else { "" };
    let search_text = format!(" Search: {}{caret}", search.query);
    let sort_button = format!("[{} {}] ", search.sort_icon, search.sort_label);
    let used = display_width(&search_text) + display_width(&sort_button);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", padding(inner_width, used));
    if search.sort_active {
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{sort_button}");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
