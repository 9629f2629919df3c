//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process: the view model is computed from
//! [`AppState`], then handed to the component renderers.
//!
//! # Example
//!
//! ```rust
//! use catalist::app::{AppState, ScreenState};
//! use catalist::ui::{render, Theme};
//!
//! let state = AppState::new(ScreenState::default(), Theme::default());
//! render(&state, 24, 80); // Renders to stdout
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with absolute cursor positioning. Does not clear
/// the screen; the host provides a blank pane on every render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();
    let viewmodel = state.compute_viewmodel(rows, cols);

    components::render_screen(&viewmodel, &state.theme, cols, rows);
}
