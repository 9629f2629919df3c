//! View model types representing renderable UI state.
//!
//! View models are created by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings and flags only; which elements
//! exist at all (selection bar, delete button, load-more line) has already been
//! decided by the time a view model is built.
//!
//! # Example
//!
//! ```rust
//! use catalist::ui::viewmodel::{CardItem, SearchBarInfo};
//!
//! let card = CardItem {
//!     id: 1,
//!     title: "Essence Mascara".to_string(),
//!     highlight_ranges: vec![(8, 15)],
//!     description: String::new(),
//!     price: "$9.99".to_string(),
//!     tags: vec!["beauty".to_string()],
//!     tag_overflow: None,
//!     is_cursor: true,
//!     checkbox: None,
//! };
//! assert!(card.checkbox.is_none());
//!
//! let search = SearchBarInfo {
//!     query: "mascara".to_string(),
//!     is_focused: false,
//!     sort_label: "Sort Price".to_string(),
//!     sort_icon: "↕".to_string(),
//!     sort_active: false,
//! };
//! assert!(!search.sort_active);
//! ```

use crate::domain::ProductId;

/// Terminal rows used by one product card, separator line included.
pub const CARD_HEIGHT: usize = 4;

/// Horizontal gap between card columns.
pub const COLUMN_GAP: usize = 2;

/// Rows taken by everything that is not a card: leading blank, header, border,
/// search box (3), selection bar, load-more/delete line, border, footer.
pub const CHROME_ROWS: usize = 10;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Always present; the catalog screen keeps its search field on top.
    pub search_bar: SearchBarInfo,

    /// "N selected" line, edit mode only.
    pub selection_bar: Option<SelectionBarInfo>,

    /// Cards inside the visible window, in display order.
    pub cards: Vec<CardItem>,

    /// Card columns (1 in portrait, 2 in landscape).
    pub columns: usize,

    /// Width of one card in character cells.
    pub card_width: usize,

    /// Shown below the cards while the ranked list extends past the window.
    pub load_more: Option<LoadMoreInfo>,

    /// Floating delete action, edit mode with at least one mark.
    pub delete_button: Option<DeleteButtonInfo>,

    /// Replaces the card grid when there is nothing to list.
    pub empty_state: Option<EmptyState>,

    pub footer: FooterInfo,
}

/// Display information for a single product card.
#[derive(Debug, Clone)]
pub struct CardItem {
    pub id: ProductId,

    /// Title, truncated to the card width.
    pub title: String,

    /// Character ranges of the search match within `title`.
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,

    pub description: String,

    /// Formatted price, e.g. `$9.99`.
    pub price: String,

    /// At most three tags.
    pub tags: Vec<String>,

    /// `+N` for tags that did not fit.
    pub tag_overflow: Option<String>,

    /// Whether the keyboard cursor is on this card.
    pub is_cursor: bool,

    /// `None` while browsing, `Some(marked)` in edit mode.
    pub checkbox: Option<bool>,
}

/// Header bar: screen title and the edit-mode control.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,

    /// "Select" while browsing, "Cancel" in edit mode.
    pub edit_label: String,
}

/// Search input and the sort button beside it.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,

    /// True while keystrokes edit the query.
    pub is_focused: bool,

    pub sort_label: String,
    pub sort_icon: String,

    /// Sort button is highlighted when an order is applied.
    pub sort_active: bool,
}

#[derive(Debug, Clone)]
pub struct SelectionBarInfo {
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct LoadMoreInfo {
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct DeleteButtonInfo {
    /// "Delete (N)".
    pub label: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No products found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
