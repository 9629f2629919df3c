//! Product domain model.
//!
//! A [`Product`] is one immutable record of the catalog. Its `id` is the identity
//! key used for selection, list keying and deletion; `price` is the sort key; the
//! title and tags feed the search filter.

use serde::{Deserialize, Deserializer, Serialize};

/// Identity key of a product, unique within a catalog.
pub type ProductId = u64;

/// Number of tags a card shows before summarizing the rest as a count.
pub const MAX_VISIBLE_TAGS: usize = 3;

/// A single catalog entry.
///
/// Deserializes from the catalog JSON shape:
///
/// ```json
/// {
///   "id": 1,
///   "title": "Essence Mascara Lash Princess",
///   "description": "Volumizing and lengthening mascara.",
///   "image": "https://cdn.example.com/mascara.png",
///   "price": 9.99,
///   "tags": ["beauty", "mascara"]
/// }
/// ```
///
/// `description` and `image` default to empty strings. A missing or `null`
/// `tags` field is treated as an empty sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

/// The tags a card displays, plus how many were left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagPreview<'a> {
    /// Up to [`MAX_VISIBLE_TAGS`] leading tags.
    pub shown: &'a [String],
    /// Number of tags not shown.
    pub hidden: usize,
}

impl TagPreview<'_> {
    /// Summary chip for the hidden tags (`"+2"`), if any are hidden.
    #[must_use]
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{}", self.hidden))
    }
}

impl Product {
    /// Creates a product with empty description, image and tags.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalist::Product;
    ///
    /// let product = Product::new(7, "Desk Lamp", 24.5).with_tags(["home", "lighting"]);
    /// assert_eq!(product.id, 7);
    /// assert_eq!(product.tags.len(), 2);
    /// ```
    #[must_use]
    pub fn new(id: ProductId, title: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            image: String::new(),
            price,
            tags: Vec::new(),
        }
    }

    /// Replaces the tag sequence.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns true if the title or any tag contains `needle_lower`.
    ///
    /// `needle_lower` must already be lowercased; the product side is lowercased
    /// here so the comparison is case-insensitive.
    #[must_use]
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle_lower))
    }

    /// Splits the tags into the displayed prefix and the hidden remainder.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalist::Product;
    ///
    /// let product = Product::new(1, "Sofa", 499.0).with_tags(["a", "b", "c", "d", "e"]);
    /// let preview = product.tag_preview();
    /// assert_eq!(preview.shown.len(), 3);
    /// assert_eq!(preview.overflow_label().as_deref(), Some("+2"));
    /// ```
    #[must_use]
    pub fn tag_preview(&self) -> TagPreview<'_> {
        let shown_len = self.tags.len().min(MAX_VISIBLE_TAGS);
        TagPreview {
            shown: &self.tags[..shown_len],
            hidden: self.tags.len() - shown_len,
        }
    }

    /// Formats the price with a dollar sign and two decimals.
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
