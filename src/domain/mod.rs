//! Domain layer for the Catalist plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`product`]: Product record and its display helpers
//! - [`sort`]: Tri-state price sort order
//!
//! # Examples
//!
//! ```
//! use catalist::domain::{Product, SortOrder};
//!
//! let product = Product::new(1, "Desk Lamp", 24.5);
//! assert_eq!(product.display_price(), "$24.50");
//! assert_eq!(SortOrder::default(), SortOrder::None);
//! ```

pub mod error;
pub mod product;
pub mod sort;

pub use error::{CatalistError, Result};
pub use product::{Product, ProductId, TagPreview, MAX_VISIBLE_TAGS};
pub use sort::SortOrder;
