//! Catalist: a Zellij plugin for browsing a product catalog.
//!
//! Catalist renders a product catalog screen inside a terminal pane:
//! - Case-insensitive search over titles and tags (from three characters on)
//! - Tri-state price sort (none, low to high, high to low)
//! - Incremental pagination, 20 products per page
//! - Multi-select edit mode with batch delete
//! - One or two card columns depending on pane orientation

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, cursor, input modes              │
//! │  - Pure screen reducer                              │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                       │
//! ┌───────────────┐                     ┌───────────────────┐
//! │ UI Layer      │                     │ Catalog Layer     │
//! │ (ui/)         │                     │ (catalog/)        │
//! │ - Rendering   │                     │ - JSON source     │
//! │ - Theming     │                     │ - Filter / sort   │
//! │ - Components  │                     │ - Page window     │
//! └───────────────┘                     └───────────────────┘
//!         │                                       │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Product model, sort order (domain/)              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - JSON log lines, rotating file                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Catalog loading and the filter → sort → paginate stages
//! - [`domain`]: Core domain types (Product, SortOrder, errors)
//! - [`infrastructure`]: Sandbox path utilities
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Structured logging to a rotating file
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/catalist.wasm" {
//!         catalog_file "~/data/products.json"
//!         page_size "20"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! Without `catalog_file` the dataset bundled with the plugin is shown.
//!
//! # Example
//!
//! ```rust
//! use catalist::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for event in [Event::KeyDown, Event::LongPress, Event::Tap] {
//!     let (_should_render, _commands) = handle_event(&mut state, &event)?;
//! }
//! assert!(state.screen.mode().is_editing());
//! # Ok::<(), catalist::CatalistError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{
    handle_event, Action, AppState, CatalogStatus, CatalogView, Command, Event, InputMode,
    Orientation, ScreenState, SearchFocus, SelectionMode,
};
pub use domain::{CatalistError, Product, ProductId, Result, SortOrder};
pub use ui::Theme;

use catalog::{CatalogSource, JsonCatalog, PAGE_SIZE};
use infrastructure::expand_tilde;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON catalog to read instead of the bundled dataset.
    ///
    /// `~` is resolved against the sandbox `/host` mount. Reading it requires
    /// the full host filesystem permission.
    pub catalog_file: Option<String>,

    /// Products per page. Default: 20, minimum 1.
    pub page_size: usize,

    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Log level filter: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `EnvFilter` directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            page_size: PAGE_SIZE,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored; missing or invalid values fall back to defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use catalist::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("catalog_file".to_string(), "~/products.json".to_string());
    /// map.insert("page_size".to_string(), "0".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.catalog_file.as_deref(), Some("~/products.json"));
    /// assert_eq!(config.page_size, 20);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let page_size = config.get("page_size").map_or(PAGE_SIZE, |raw| {
            match raw.trim().parse::<usize>() {
                Ok(size) if size >= 1 => size,
                _ => {
                    tracing::debug!(page_size = %raw, "invalid page_size, using default");
                    PAGE_SIZE
                }
            }
        });

        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            catalog_file: non_empty("catalog_file"),
            page_size,
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
        }
    }

    /// Sandbox path of the configured catalog file, if any.
    #[must_use]
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog_file
            .as_deref()
            .map(|file| PathBuf::from(expand_tilde(file)))
    }
}

/// Initializes the plugin state from configuration.
///
/// - Resolves the theme (file, then name, then default)
/// - With a `catalog_file`, returns a state waiting for the file to be read
///   once the host grants access
/// - Otherwise loads the bundled dataset right away
///
/// Loading problems do not abort initialization; they are shown on screen.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(?config, "initializing catalist plugin");

    let theme = resolve_theme(config);
    let screen = ScreenState::with_page_size(vec![], config.page_size);

    if let Some(path) = config.catalog_path() {
        return AppState::awaiting_catalog(screen, theme, path);
    }

    let source = JsonCatalog::bundled();
    match source.load() {
        Ok(products) => AppState::new(screen.with_catalog(products), theme),
        Err(e) => {
            tracing::error!(source = %source.describe(), error = %e, "failed to load catalog");
            let mut state = AppState::new(screen, theme);
            state.catalog_status = CatalogStatus::Failed(e.to_string());
            state
        }
    }
}

fn resolve_theme(config: &Config) -> Theme {
    config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    )
}
