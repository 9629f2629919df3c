//! Zellij plugin wrapper.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request host file access when a `catalog_file` is set
//! 3. **Catalog**: Read the file once access is granted
//! 4. **Update**: Map keys to library events, execute returned commands
//! 5. **Render**: Report pane size, then call the library renderer
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//!
//! Browsing and editing:
//! - `h`/`j`/`k`/`l` or arrows: Move between cards
//! - `Enter`/`Space`: Tap card (toggles its mark in edit mode)
//! - `v`: Long press card (edit mode with only this card marked)
//! - `e`: Select / Cancel
//! - `d`/`Delete`: Delete marked products (edit mode)
//! - `s`: Cycle price sort
//! - `m`: Load more
//! - `/`: Search
//! - `Esc`: Cancel edit mode, then clear search
//! - `q`: Close plugin
//!
//! While typing a search term:
//! - `Esc`/`Enter`: Stop typing, keep the term
//! - `Ctrl+u`: Clear the term
//! - `Backspace`: Delete last character

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use catalist::catalog::{CatalogSource, JsonCatalog};
use catalist::{handle_event, AppState, Command, Config, Event, InputMode, SearchFocus};

/// Plugin state wrapper around the library's `AppState`.
pub struct State {
    app: AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: catalist::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        catalist::observability::init_tracing(&config);

        let _span = tracing::debug_span!("plugin_load").entered();

        self.app = catalist::initialize(&config);
        tracing::debug!(catalog_file = ?config.catalog_file, "app state initialized");

        let mut permissions = vec![PermissionType::ChangeApplicationState];
        if config.catalog_file.is_some() {
            permissions.push(PermissionType::FullHdAccess);
        }
        request_permission(&permissions);

        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Event::PermissionsResult {
                    granted: matches!(status, PermissionStatus::Granted),
                }
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        let _ = self.dispatch(&Event::Resize { rows, cols });
        catalist::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs one event through the library and executes the resulting commands.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, commands)) => {
                let mut render = should_render;
                for command in commands {
                    render |= self.execute_command(&command);
                }
                render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn execute_command(&mut self, command: &Command) -> bool {
        let _span = tracing::debug_span!("execute_command", command = ?command).entered();

        match command {
            Command::CloseFocus => {
                hide_self();
                false
            }
            Command::LoadCatalog { path } => {
                let source = JsonCatalog::from_file(path);
                let event = match source.load() {
                    Ok(products) => Event::CatalogLoaded { products },
                    Err(e) => Event::CatalogLoadFailed {
                        error: format!("{}: {e}", source.describe()),
                    },
                };
                self.dispatch(&event)
            }
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                BareKey::Char('u') if self.app.input_mode.is_typing() => Some(Event::ClearSearch),
                _ => None,
            };
        }

        if self.app.input_mode.is_typing() {
            return Some(match key.bare_key {
                BareKey::Esc | BareKey::Enter => Event::FocusResults,
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            });
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Left | BareKey::Char('h') => Event::KeyLeft,
            BareKey::Right | BareKey::Char('l') => Event::KeyRight,
            BareKey::Enter | BareKey::Char(' ') => Event::Tap,
            BareKey::Char('v') => Event::LongPress,
            BareKey::Char('e') => Event::ToggleEditMode,
            BareKey::Char('d') | BareKey::Delete => Event::DeleteSelected,
            BareKey::Char('s') => Event::ToggleSort,
            BareKey::Char('m') => Event::LoadMore,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Char('/') => match self.app.input_mode {
                InputMode::Search(SearchFocus::Navigating) => Event::FocusSearchBar,
                _ => Event::SearchMode,
            },
            BareKey::Esc => self.map_escape()?,
            _ => return None,
        })
    }

    fn map_escape(&self) -> Option<Event> {
        if self.app.input_mode == InputMode::Search(SearchFocus::Navigating) {
            Some(Event::ExitSearch)
        } else if self.app.screen.mode().is_editing() {
            Some(Event::ToggleEditMode)
        } else if !self.app.screen.search_term().is_empty() {
            Some(Event::ClearSearch)
        } else {
            None
        }
    }
}
