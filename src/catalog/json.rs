//! JSON catalog source.
//!
//! Reads the static product dataset from a JSON document. Two document shapes are
//! accepted:
//!
//! ```json
//! [ { "id": 1, "title": "Mascara", "price": 9.99, "tags": ["beauty"] } ]
//! ```
//!
//! ```json
//! { "products": [ { "id": 1, "title": "Mascara", "price": 9.99 } ] }
//! ```
//!
//! Every record is validated before the catalog is handed to the screen: ids
//! must be unique and prices must be finite and non-negative.

use crate::catalog::source::CatalogSource;
use crate::domain::error::{CatalistError, Result};
use crate::domain::Product;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Dataset compiled into the plugin, used when no catalog file is configured.
const BUNDLED_CATALOG: &str = include_str!("../../data/products.json");

/// Top-level document layouts.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<Product>),
    Wrapped { products: Vec<Product> },
}

impl CatalogDocument {
    fn into_products(self) -> Vec<Product> {
        match self {
            Self::List(products) | Self::Wrapped { products } => products,
        }
    }
}

#[derive(Debug, Clone)]
enum Origin {
    Bundled,
    File(PathBuf),
}

/// JSON-backed [`CatalogSource`].
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    origin: Origin,
}

impl JsonCatalog {
    /// Source reading the dataset bundled with the plugin.
    #[must_use]
    pub const fn bundled() -> Self {
        Self {
            origin: Origin::Bundled,
        }
    }

    /// Source reading a JSON file on disk.
    #[must_use]
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: Origin::File(path.into()),
        }
    }

    fn read_file(path: &Path) -> Result<String> {
        tracing::debug!(path = ?path, "reading catalog file");
        Ok(std::fs::read_to_string(path)?)
    }
}

impl CatalogSource for JsonCatalog {
    fn load(&self) -> Result<Vec<Product>> {
        let _span = tracing::debug_span!("json_catalog_load", origin = %self.describe()).entered();

        let products = match &self.origin {
            Origin::Bundled => parse_catalog(BUNDLED_CATALOG)?,
            Origin::File(path) => parse_catalog(&Self::read_file(path)?)?,
        };

        tracing::debug!(count = products.len(), "catalog loaded");
        Ok(products)
    }

    fn describe(&self) -> String {
        match &self.origin {
            Origin::Bundled => "bundled catalog".to_string(),
            Origin::File(path) => path.display().to_string(),
        }
    }
}

/// Parses and validates a catalog document.
///
/// # Errors
///
/// Returns [`CatalistError::Catalog`] if the text is not a catalog document,
/// [`CatalistError::DuplicateProductId`] if two records share an id, and
/// [`CatalistError::InvalidPrice`] for negative or non-finite prices.
///
/// # Examples
///
/// ```
/// use catalist::catalog::parse_catalog;
///
/// let products = parse_catalog(r#"[{"id": 1, "title": "Pen", "price": 1.5}]"#)?;
/// assert_eq!(products[0].title, "Pen");
///
/// assert!(parse_catalog(r#"[{"id": 1, "title": "Pen", "price": -1}]"#).is_err());
/// # Ok::<(), catalist::CatalistError>(())
/// ```
pub fn parse_catalog(contents: &str) -> Result<Vec<Product>> {
    let document: CatalogDocument = serde_json::from_str(contents)
        .map_err(|e| CatalistError::Catalog(format!("failed to parse JSON: {e}")))?;
    let products = document.into_products();

    validate(&products)?;
    Ok(products)
}

fn validate(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.id) {
            return Err(CatalistError::DuplicateProductId(product.id));
        }
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(CatalistError::InvalidPrice {
                id: product.id,
                price: product.price,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_catalog_is_valid() {
        let products = JsonCatalog::bundled().load().unwrap();
        assert!(products.len() > 20, "bundled data should span more than one page");
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"products": [
                {{"id": 10, "title": "Kettle", "price": 30, "tags": ["kitchen"]}},
                {{"id": 11, "title": "Toaster", "price": 25.5}}
            ]}}"#
        )
        .unwrap();

        let source = JsonCatalog::from_file(file.path());
        let products = source.load().unwrap();
        assert_eq!(products.iter().map(|p| p.id).collect::<Vec<_>>(), vec![10, 11]);
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonCatalog::from_file(dir.path().join("absent.json"))
            .load()
            .unwrap_err();
        assert!(matches!(err, CatalistError::Io(_)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = parse_catalog(
            r#"[{"id": 1, "title": "A", "price": 1}, {"id": 1, "title": "B", "price": 2}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalistError::DuplicateProductId(1)));
    }

    #[test]
    fn rejects_negative_price() {
        let err = parse_catalog(r#"[{"id": 4, "title": "A", "price": -0.5}]"#).unwrap_err();
        assert!(matches!(err, CatalistError::InvalidPrice { id: 4, .. }));
    }

    #[test]
    fn rejects_malformed_document() {
        let err = parse_catalog(r#"{"items": []}"#).unwrap_err();
        assert!(matches!(err, CatalistError::Catalog(_)));
    }

    #[test]
    fn empty_catalog_is_allowed() {
        assert!(parse_catalog("[]").unwrap().is_empty());
    }
}
