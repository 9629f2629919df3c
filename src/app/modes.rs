//! Mode enums driving the catalog screen.
//!
//! - [`SelectionMode`]: browsing vs. multi-select editing
//! - [`InputMode`]: where keystrokes go (navigation vs. the search field)
//! - [`Orientation`]: external layout signal, decides the card column count
//!
//! # Example
//!
//! ```rust
//! use catalist::app::modes::{InputMode, Orientation, SearchFocus, SelectionMode};
//!
//! let input_mode = InputMode::Search(SearchFocus::Typing);
//! assert!(input_mode.is_typing());
//! assert_eq!(SelectionMode::default(), SelectionMode::Browsing);
//! assert_eq!(Orientation::from_dimensions(40, 200).columns(), 2);
//! ```

/// Whether selection UI (checkboxes, counter, delete) is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// Plain list; taps do nothing, marks are not reachable.
    #[default]
    Browsing,

    /// Multi-select; taps toggle marks, delete is available.
    Editing,
}

impl SelectionMode {
    #[must_use]
    pub const fn is_editing(self) -> bool {
        matches!(self, Self::Editing)
    }
}

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keystrokes edit the search term.
    Typing,

    /// Search term is kept; keystrokes navigate the filtered cards.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and the footer hint text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation and command keys.
    #[default]
    Normal,

    /// Search field has been opened, with a focus state.
    Search(SearchFocus),
}

impl InputMode {
    /// True while characters go into the search field.
    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::Search(SearchFocus::Typing))
    }
}

/// Display orientation, supplied by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Derives orientation from a pane size in character cells.
    ///
    /// A terminal cell is roughly twice as tall as it is wide, so the pane is
    /// portrait when `cols < rows * 2`.
    #[must_use]
    pub const fn from_dimensions(rows: usize, cols: usize) -> Self {
        if cols < rows.saturating_mul(2) {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }

    /// Card columns for this orientation: one in portrait, two in landscape.
    #[must_use]
    pub const fn columns(self) -> usize {
        match self {
            Self::Portrait => 1,
            Self::Landscape => 2,
        }
    }
}
