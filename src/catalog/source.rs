//! Catalog source abstraction.
//!
//! The catalog is read once at startup from a [`CatalogSource`]. The rest of the
//! crate only ever sees the resulting `Vec<Product>`; sources are never re-read.

use crate::domain::error::Result;
use crate::domain::Product;

/// A read-only provider of the initial product set.
///
/// # Implementations
///
/// - [`JsonCatalog`](crate::catalog::JsonCatalog): JSON document from a file or the bundled dataset
///
/// # Examples
///
/// ```
/// use catalist::catalog::{CatalogSource, JsonCatalog};
///
/// let products = JsonCatalog::bundled().load()?;
/// assert!(!products.is_empty());
/// # Ok::<(), catalist::CatalistError>(())
/// ```
pub trait CatalogSource {
    /// Reads and validates every product.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read, is not a valid catalog
    /// document, or contains invalid records (duplicate ids, unrankable prices).
    fn load(&self) -> Result<Vec<Product>>;

    /// Short human-readable origin, used in logs and error screens.
    fn describe(&self) -> String;
}
