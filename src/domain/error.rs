//! Error types for the Catalist plugin.
//!
//! This module defines the centralized error type [`CatalistError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! The catalog core (filtering, sorting, pagination, selection) is total and never
//! fails. Errors only surface at the boundaries: loading product data, reading
//! theme files.

use crate::domain::product::ProductId;
use thiserror::Error;

/// The main error type for Catalist operations.
///
/// # Examples
///
/// ```
/// use catalist::CatalistError;
///
/// fn require_products(count: usize) -> Result<usize, CatalistError> {
///     if count == 0 {
///         return Err(CatalistError::Catalog("no products in document".to_string()));
///     }
///     Ok(count)
/// }
///
/// assert!(require_products(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum CatalistError {
    /// The catalog document could not be read or parsed.
    ///
    /// The string describes the source and the underlying parse failure.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Two records in the catalog share the same identity key.
    #[error("Duplicate product id {0} in catalog")]
    DuplicateProductId(ProductId),

    /// A record carries a price that cannot be ranked (negative, NaN or infinite).
    #[error("Product {id} has invalid price {price}")]
    InvalidPrice {
        /// Offending product.
        id: ProductId,
        /// Price as found in the document.
        price: f64,
    },

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for Catalist operations.
///
/// This is a type alias for `std::result::Result<T, CatalistError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, CatalistError>;
