//! Composable UI component renderers.
//!
//! # Components
//!
//! - `header`: Title bar with the Select/Cancel control
//! - `search`: Search input box and sort button
//! - `action_bar`: "N selected" counter, load-more indicator, delete button
//! - `cards`: Product card grid
//! - `empty`: Message shown in place of the grid
//! - `footer`: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Selection bar]
//! [Cards / empty state]
//! [Load more + Delete]
//! [Border]
//! [Footer]
//! ```

mod action_bar;
mod cards;
mod empty;
mod footer;
mod header;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use action_bar::{render_bottom_bar, render_selection_bar};
use cards::render_cards;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;

/// Renders a horizontal border line at `row` and returns the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full catalog screen.
pub fn render_screen(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_selection_bar(current_row, vm.selection_bar.as_ref(), theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 2, empty, theme, cols);
    } else {
        render_cards(current_row, &vm.cards, vm.columns, vm.card_width, theme);
    }

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    let bottom_row = border_row.saturating_sub(1);

    render_bottom_bar(
        bottom_row,
        vm.load_more.as_ref(),
        vm.delete_button.as_ref(),
        theme,
        cols,
    );
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
