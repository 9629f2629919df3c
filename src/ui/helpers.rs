//! Shared rendering utilities.
//!
//! Low-level helpers used across the component renderers: cursor positioning,
//! padding by character count, and search-match highlighting with ANSI
//! escape management. All widths are counted in characters, not bytes.

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column (`\u{1b}[{row};{col}H`).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Visible width of `text` in character cells.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Spaces needed to fill `width` after `used` cells have been printed.
#[must_use]
pub fn padding(width: usize, used: usize) -> String {
    " ".repeat(width.saturating_sub(used))
}

/// Renders text with highlighted character ranges for search matches.
///
/// Ranges are `(start, end)` character indices with an exclusive end; ranges
/// past the end of `text` are clipped. After each highlighted section the
/// `restore` escape is printed so the surrounding style (normal or cursor
/// colors) continues.
///
/// ```rust
/// use catalist::ui::helpers::render_highlighted_text;
/// use catalist::ui::Theme;
///
/// let theme = Theme::default();
/// render_highlighted_text("Desk Lamp", &[(5, 9)], &theme, "");
/// ```
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{restore}");

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
