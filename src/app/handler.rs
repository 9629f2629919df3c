//! Event handling and state transition logic.
//!
//! The handler translates key-level events from the host into screen
//! [`Action`]s and host [`Command`]s:
//!
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State changes go through `AppState` (and from there the screen reducer)
//! 4. Commands are collected and returned for execution
//!
//! # Touch stand-ins
//!
//! The catalog screen was designed for touch. On a terminal the card under the
//! keyboard cursor is the touch target:
//!
//! - **Tap** (Enter/Space): toggles the mark while editing, nothing while browsing
//! - **Long press** (`v`): enters edit mode with exactly that card marked
//! - **List end reached**: moving the cursor past the last displayed card
//!
//! # Example
//!
//! ```rust
//! use catalist::app::{handle_event, AppState, Event, ScreenState};
//! use catalist::{Product, Theme};
//!
//! let screen = ScreenState::new(vec![Product::new(1, "Desk Lamp", 24.5)]);
//! let mut state = AppState::new(screen, Theme::default());
//! let (should_render, commands) = handle_event(&mut state, &Event::LongPress)?;
//! assert!(should_render);
//! assert!(commands.is_empty());
//! assert!(state.screen.is_selected(1));
//! # Ok::<(), catalist::CatalistError>(())
//! ```

use crate::app::actions::{Action, Command};
use crate::app::modes::{InputMode, Orientation, SearchFocus};
use crate::app::state::{AppState, CatalogStatus};
use crate::domain::error::Result;
use crate::domain::Product;

/// Events triggered by user input or host callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves the cursor one card row down; past the end this reaches the list end.
    KeyDown,
    /// Moves the cursor one card row up.
    KeyUp,
    KeyLeft,
    KeyRight,

    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// Opens the search field with typing focus. The current term is kept.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Leaves the input field but keeps filtering; closes search if the term is empty.
    FocusResults,
    /// Closes the search field and keeps the term.
    ExitSearch,
    /// Clears the term and closes the search field.
    ClearSearch,
    /// Appends a character to the search term.
    Char(char),
    /// Removes the last character from the search term.
    Backspace,

    /// Cycles the price sort order.
    ToggleSort,
    /// The "Select" / "Cancel" control.
    ToggleEditMode,
    /// Tap on the card under the cursor.
    Tap,
    /// Long press on the card under the cursor.
    LongPress,
    /// The floating "Delete (N)" button.
    DeleteSelected,
    /// Explicit request for the next page.
    LoadMore,

    /// Pane size in character cells, used to derive orientation.
    Resize { rows: usize, cols: usize },

    /// Result of the file-access permission request.
    PermissionsResult { granted: bool },

    /// Products read from the configured catalog file.
    CatalogLoaded { products: Vec<Product> },

    /// Reading or parsing the configured catalog file failed.
    CatalogLoadFailed { error: String },
}

/// Processes an event, mutates application state, and returns commands to execute.
///
/// Returns whether the UI should re-render together with the side effects the
/// host must perform.
///
/// # Errors
///
/// Reserved for events whose handling can fail; none of the current events do.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Command>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::KeyLeft => {
            state.move_cursor_left();
            Ok((true, vec![]))
        }
        Event::KeyRight => {
            state.move_cursor_right();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Command::CloseFocus])),
        Event::SearchMode | Event::FocusSearchBar => {
            tracing::debug!(term = %state.screen.search_term(), "focusing search field");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            state.input_mode = if state.screen.search_term().is_empty() {
                InputMode::Normal
            } else {
                InputMode::Search(SearchFocus::Navigating)
            };
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(term = %state.screen.search_term(), "exiting search mode");
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::ClearSearch => {
            state.input_mode = InputMode::Normal;
            if !state.screen.search_term().is_empty() {
                state.set_search_term(String::new());
            }
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !state.input_mode.is_typing() {
                return Ok((false, vec![]));
            }
            state.push_search_char(*c);
            tracing::trace!(term = %state.screen.search_term(), char = %c, "search term updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !state.input_mode.is_typing() {
                return Ok((false, vec![]));
            }
            Ok((state.pop_search_char(), vec![]))
        }
        Event::ToggleSort => {
            state.dispatch(&Action::ToggleSort);
            Ok((true, vec![]))
        }
        Event::ToggleEditMode => {
            state.dispatch(&Action::ToggleEditMode);
            Ok((true, vec![]))
        }
        Event::Tap => {
            if !state.screen.mode().is_editing() {
                tracing::trace!("tap ignored while browsing");
                return Ok((false, vec![]));
            }
            let Some(id) = state.cursor_product_id() else {
                return Ok((false, vec![]));
            };
            state.dispatch(&Action::ToggleSelect(id));
            Ok((true, vec![]))
        }
        Event::LongPress => {
            let Some(id) = state.cursor_product_id() else {
                tracing::debug!("long press with no card under cursor");
                return Ok((false, vec![]));
            };
            state.dispatch(&Action::EnterEditWithPreselect(id));
            Ok((true, vec![]))
        }
        Event::DeleteSelected => {
            if !state.screen.mode().is_editing() {
                return Ok((false, vec![]));
            }
            state.dispatch(&Action::DeleteSelected);
            Ok((true, vec![]))
        }
        Event::LoadMore => {
            let before = state.screen.visible_count();
            state.dispatch(&Action::LoadMore);
            Ok((state.screen.visible_count() != before, vec![]))
        }
        Event::Resize { rows, cols } => {
            let orientation = Orientation::from_dimensions(*rows, *cols);
            if orientation == state.orientation {
                return Ok((false, vec![]));
            }
            tracing::debug!(?orientation, rows, cols, "orientation changed");
            state.orientation = orientation;
            Ok((true, vec![]))
        }
        Event::PermissionsResult { granted } => {
            if state.catalog_status != CatalogStatus::Loading {
                return Ok((false, vec![]));
            }
            let Some(path) = state.catalog_file.clone() else {
                return Ok((false, vec![]));
            };

            if *granted {
                tracing::debug!(path = %path.display(), "requesting catalog load");
                Ok((false, vec![Command::LoadCatalog { path }]))
            } else {
                tracing::warn!("file access denied, catalog cannot be read");
                state.catalog_status =
                    CatalogStatus::Failed("file access permission denied".to_string());
                Ok((true, vec![]))
            }
        }
        Event::CatalogLoaded { products } => Ok((state.apply_catalog(products.clone()), vec![])),
        Event::CatalogLoadFailed { error } => {
            tracing::error!(error = %error, "catalog load failed");
            if state.catalog_status != CatalogStatus::Loading {
                return Ok((false, vec![]));
            }
            state.catalog_status = CatalogStatus::Failed(error.clone());
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::SelectionMode;
    use crate::app::screen::ScreenState;
    use crate::domain::SortOrder;
    use crate::ui::theme::Theme;
    use std::path::PathBuf;

    fn catalog(count: u64) -> Vec<Product> {
        (1..=count)
            .map(|id| Product::new(id, format!("Product {id}"), (100 - id) as f64))
            .collect()
    }

    fn state(count: u64) -> AppState {
        AppState::new(ScreenState::new(catalog(count)), Theme::default())
    }

    fn loading_state() -> AppState {
        AppState::awaiting_catalog(
            ScreenState::default(),
            Theme::default(),
            PathBuf::from("/host/catalog.json"),
        )
    }

    fn send(state: &mut AppState, events: &[Event]) {
        for event in events {
            handle_event(state, event).unwrap();
        }
    }

    #[test]
    fn close_focus_emits_command() {
        let mut state = state(1);
        let (render, commands) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(commands, vec![Command::CloseFocus]);
    }

    #[test]
    fn typing_filters_and_resets_cursor() {
        let mut state = state(30);
        send(&mut state, &[Event::KeyDown, Event::KeyDown, Event::SearchMode]);
        assert_eq!(state.cursor, 2);

        send(&mut state, &[Event::Char('2'), Event::Char('5'), Event::Char(' ')]);
        assert_eq!(state.cursor, 0);
        // below the threshold after trimming, so nothing is filtered yet
        assert_eq!(state.displayed_len(), 20);

        send(&mut state, &[Event::Backspace, Event::Backspace, Event::Backspace]);
        send(&mut state, &[Event::Char('t'), Event::Char(' '), Event::Char('2')]);
        let view = state.screen.view();
        assert_eq!(view.total_matches, 11);
        assert!(view.products.iter().all(|p| p.title.starts_with("Product 2")));
    }

    #[test]
    fn chars_ignored_outside_typing() {
        let mut state = state(3);
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert_eq!(state.screen.search_term(), "");
    }

    #[test]
    fn exit_search_keeps_term_and_clear_drops_it() {
        let mut state = state(5);
        send(&mut state, &[Event::SearchMode, Event::Char('p'), Event::Char('r'), Event::Char('o')]);
        send(&mut state, &[Event::ExitSearch]);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.screen.search_term(), "pro");

        send(&mut state, &[Event::ClearSearch]);
        assert_eq!(state.screen.search_term(), "");
    }

    #[test]
    fn focus_results_with_empty_term_leaves_search() {
        let mut state = state(5);
        send(&mut state, &[Event::SearchMode, Event::FocusResults]);
        assert_eq!(state.input_mode, InputMode::Normal);

        send(&mut state, &[Event::SearchMode, Event::Char('p'), Event::FocusResults]);
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
    }

    #[test]
    fn tap_while_browsing_does_nothing() {
        let mut state = state(3);
        let (render, _) = handle_event(&mut state, &Event::Tap).unwrap();
        assert!(!render);
        assert!(state.screen.selection().is_empty());
    }

    #[test]
    fn long_press_then_taps_mark_cards() {
        let mut state = state(5);
        send(&mut state, &[Event::KeyDown, Event::LongPress]);
        assert_eq!(state.screen.mode(), SelectionMode::Editing);
        assert!(state.screen.is_selected(2));

        send(&mut state, &[Event::KeyDown, Event::Tap, Event::KeyUp, Event::Tap]);
        assert!(state.screen.is_selected(3));
        assert!(!state.screen.is_selected(2));
        assert_eq!(state.screen.view().selected_count, 1);
    }

    #[test]
    fn delete_only_acts_in_edit_mode() {
        let mut state = state(4);
        let (render, _) = handle_event(&mut state, &Event::DeleteSelected).unwrap();
        assert!(!render);

        send(&mut state, &[Event::LongPress, Event::DeleteSelected]);
        assert_eq!(state.screen.catalog().len(), 3);
        assert_eq!(state.screen.mode(), SelectionMode::Browsing);
    }

    #[test]
    fn cursor_past_end_loads_more() {
        let mut state = state(45);
        for _ in 0..20 {
            handle_event(&mut state, &Event::KeyDown).unwrap();
        }
        assert_eq!(state.displayed_len(), 40);
        assert_eq!(state.cursor, 20);
    }

    #[test]
    fn explicit_load_more_renders_only_on_growth() {
        let mut state = state(25);
        let (render, _) = handle_event(&mut state, &Event::LoadMore).unwrap();
        assert!(render);
        let (render, _) = handle_event(&mut state, &Event::LoadMore).unwrap();
        assert!(!render);
    }

    #[test]
    fn sort_event_reorders_by_price() {
        let mut state = state(3);
        send(&mut state, &[Event::ToggleSort]);
        assert_eq!(state.screen.sort_order(), SortOrder::Ascending);
        assert_eq!(state.cursor_product_id(), Some(3));
    }

    #[test]
    fn resize_switches_orientation() {
        let mut state = state(3);
        let (render, _) = handle_event(&mut state, &Event::Resize { rows: 40, cols: 60 }).unwrap();
        assert!(!render);
        let (render, _) = handle_event(&mut state, &Event::Resize { rows: 30, cols: 120 }).unwrap();
        assert!(render);
        assert_eq!(state.orientation, Orientation::Landscape);
    }

    #[test]
    fn granted_permission_requests_catalog_load() {
        let mut state = loading_state();
        let (_, commands) =
            handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
        assert_eq!(
            commands,
            vec![Command::LoadCatalog {
                path: PathBuf::from("/host/catalog.json")
            }]
        );
    }

    #[test]
    fn denied_permission_marks_failure() {
        let mut state = loading_state();
        send(&mut state, &[Event::PermissionsResult { granted: false }]);
        assert!(matches!(state.catalog_status, CatalogStatus::Failed(_)));
    }

    #[test]
    fn catalog_loaded_once() {
        let mut state = loading_state();
        let (render, _) =
            handle_event(&mut state, &Event::CatalogLoaded { products: catalog(2) }).unwrap();
        assert!(render);
        let (render, _) =
            handle_event(&mut state, &Event::CatalogLoaded { products: catalog(9) }).unwrap();
        assert!(!render);
        assert_eq!(state.screen.catalog().len(), 2);

        let (render, _) = handle_event(
            &mut state,
            &Event::CatalogLoadFailed { error: "late".to_string() },
        )
        .unwrap();
        assert!(!render);
        assert_eq!(state.catalog_status, CatalogStatus::Ready);
    }

    #[test]
    fn load_failure_is_reported() {
        let mut state = loading_state();
        send(&mut state, &[Event::CatalogLoadFailed { error: "bad json".to_string() }]);
        assert_eq!(state.catalog_status, CatalogStatus::Failed("bad json".to_string()));
    }
}
