//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the catalog/domain layers.
//!
//! # Architecture
//!
//! ```text
//! Key Input → Event → handle_event → Action → ScreenState::reduce → new state
//!                          │                                          │
//!                          └──► Command (host side effect)            ▼
//!                                                        compute_viewmodel → UI
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Screen actions and host commands
//! - [`screen`]: Pure screen state and reducer
//! - [`handler`]: Event processing and state transition coordinator
//! - [`modes`]: Selection, input and orientation mode types
//! - [`state`]: Host-facing state and view model computation
//!
//! # Example
//!
//! ```rust
//! use catalist::app::{handle_event, AppState, Event, ScreenState};
//! use catalist::Theme;
//!
//! let mut state = AppState::new(ScreenState::default(), Theme::default());
//! let (should_render, commands) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(should_render && commands.is_empty());
//! # Ok::<(), catalist::CatalistError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod screen;
pub mod state;

pub use actions::{Action, Command};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, Orientation, SearchFocus, SelectionMode};
pub use screen::{CatalogView, ScreenState};
pub use state::{AppState, CatalogStatus};
