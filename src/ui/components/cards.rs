//! Product card grid renderer.
//!
//! Each card takes [`CARD_HEIGHT`] rows:
//!
//! ```text
//! [x] Essence Mascara Lash Princess
//!     Popular mascara known for its volumizing...
//!     $9.99  beauty  mascara  +1
//!
//! ```
//!
//! The checkbox column only exists in edit mode. The card under the keyboard
//! cursor is drawn with the cursor colors across its full width.

use crate::ui::helpers::{self, display_width, padding, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardItem, CARD_HEIGHT, COLUMN_GAP};

/// Renders `cards` in a grid of `columns` starting at `row`.
///
/// Returns the row after the last card row.
pub fn render_cards(
    row: usize,
    cards: &[CardItem],
    columns: usize,
    card_width: usize,
    theme: &Theme,
) -> usize {
    let columns = columns.max(1);
    let mut current_row = row;

    for card_row in cards.chunks(columns) {
        for (column, card) in card_row.iter().enumerate() {
            let col = 1 + column * (card_width + COLUMN_GAP);
            render_card(current_row, col, card, card_width, theme);
        }
        current_row += CARD_HEIGHT;
    }

    current_row
}

fn base_style(card: &CardItem, theme: &Theme) -> String {
    if card.is_cursor {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.cursor_fg),
            Theme::bg(&theme.colors.cursor_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    }
}

fn render_card(row: usize, col: usize, card: &CardItem, width: usize, theme: &Theme) {
    let base = base_style(card, theme);
    let gutter = match card.checkbox {
        Some(true) => "[x] ",
        Some(false) => "[ ] ",
        None => "  ",
    };
    let indent = " ".repeat(display_width(gutter));

    // title line
    position_cursor(row, col);
    print!("{base}");
    if card.checkbox.is_some() && !card.is_cursor {
        print!("{}{gutter}{base}", Theme::fg(&theme.colors.checkbox_fg));
    } else {
        print!("{gutter}");
    }
    print!("{}", Theme::bold());
    let restore = format!("{base}{}", Theme::bold());
    helpers::render_highlighted_text(&card.title, &card.highlight_ranges, theme, &restore);
    print!("{}", padding(width, display_width(gutter) + display_width(&card.title)));
    print!("{}", Theme::reset());

    // description line
    position_cursor(row + 1, col);
    print!("{base}");
    if !card.is_cursor {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{indent}{}", card.description);
    print!("{}", padding(width, display_width(&indent) + display_width(&card.description)));
    print!("{}", Theme::reset());

    // price and tags line
    position_cursor(row + 2, col);
    print!("{base}{indent}");
    print!("{}", Theme::bold());
    if !card.is_cursor {
        print!("{}", Theme::fg(&theme.colors.price_fg));
    }
    print!("{}", card.price);
    print!("{}{base}", Theme::reset());

    let mut used = display_width(&indent) + display_width(&card.price);
    for tag in &card.tags {
        let chip = format!(" {tag} ");
        if used + 1 + display_width(&chip) > width {
            break;
        }
        print!(" ");
        print!("{}", Theme::fg(&theme.colors.tag_fg));
        print!("{}", Theme::bg(&theme.colors.tag_bg));
        print!("{chip}");
        print!("{}{base}", Theme::reset());
        used += 1 + display_width(&chip);
    }
    if let Some(overflow) = &card.tag_overflow {
        if used + 1 + display_width(overflow) <= width {
            print!(" {overflow}");
            used += 1 + display_width(overflow);
        }
    }
    print!("{}", padding(width, used));
    print!("{}", Theme::reset());

    position_cursor(row + 3, col);
    print!("{}", " ".repeat(width));
}
