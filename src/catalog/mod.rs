//! Catalog data and list-transformation stages.
//!
//! This module owns everything between the raw product data and the screen
//! state machine: loading the static dataset, and the three pure stages that turn
//! the catalog into the list on screen.
//!
//! ```text
//! CatalogSource ─► Vec<Product> ─► filter ─► sort ─► PageWindow ─► displayed
//!                                                   SelectionSet ─► marks
//! ```
//!
//! # Modules
//!
//! - `source`: Catalog source trait
//! - `json`: JSON file / bundled dataset implementation
//! - `ranking`: Search filter, price sort, match highlighting
//! - `window`: Growable pagination window
//! - `selection`: Marked product ids

pub mod json;
pub mod ranking;
pub mod selection;
pub mod source;
pub mod window;

pub use json::{parse_catalog, JsonCatalog};
pub use ranking::{filter_products, match_ranges, search_needle, sort_products, MIN_SEARCH_LEN};
pub use selection::SelectionSet;
pub use source::CatalogSource;
pub use window::{PageWindow, PAGE_SIZE};
