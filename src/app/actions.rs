//! Screen actions and host commands.
//!
//! Two kinds of messages cross the application layer:
//!
//! - [`Action`]: user intents consumed by the screen reducer. Each maps the old
//!   [`ScreenState`](crate::app::ScreenState) to a new one and nothing else.
//! - [`Command`]: side effects the host must perform after an event was handled
//!   (closing the pane, reading the configured catalog file).
//!
//! # Example
//!
//! ```rust
//! use catalist::app::{Action, ScreenState};
//! use catalist::Product;
//!
//! let state = ScreenState::new(vec![Product::new(7, "Desk Lamp", 24.5)])
//!     .reduce(&Action::EnterEditWithPreselect(7));
//! assert_eq!(state.view().selected_count, 1);
//! ```

use crate::domain::ProductId;
use std::path::PathBuf;

/// User intents understood by the catalog screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replaces the search term and rewinds pagination to one page.
    SetSearchTerm(String),

    /// Advances the sort order `none → ascending → descending → none`.
    ToggleSort,

    /// Flips the mark on one product. Ignored outside edit mode.
    ToggleSelect(ProductId),

    /// Long-press: enters edit mode with exactly this product marked.
    EnterEditWithPreselect(ProductId),

    /// "Select" / "Cancel": enters edit mode, or leaves it clearing all marks.
    ToggleEditMode,

    /// Removes every marked product, clears marks and leaves edit mode.
    DeleteSelected,

    /// Grows the pagination window by one page, if more items exist.
    LoadMore,
}

/// Side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Reads the configured catalog file and feeds the result back as an event.
    LoadCatalog {
        /// Sandbox path of the JSON document.
        path: PathBuf,
    },
}
