//! Price sort order.

use serde::{Deserialize, Serialize};

/// Tri-state ranking mode over price.
///
/// Cycles `None → Ascending → Descending → None` on each sort toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Catalog order, untouched.
    #[default]
    None,
    /// Cheapest first.
    #[serde(alias = "asc")]
    Ascending,
    /// Most expensive first.
    #[serde(alias = "desc")]
    Descending,
}

impl SortOrder {
    /// Returns the next state in the toggle cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalist::SortOrder;
    ///
    /// assert_eq!(SortOrder::None.next(), SortOrder::Ascending);
    /// assert_eq!(SortOrder::Ascending.next(), SortOrder::Descending);
    /// assert_eq!(SortOrder::Descending.next(), SortOrder::None);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::None => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::None,
        }
    }

    /// Whether a price ordering is applied.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Sort button caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Sort Price",
            Self::Ascending => "Low to High",
            Self::Descending => "High to Low",
        }
    }

    /// Sort button glyph.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::None => "↕",
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_after_three_steps() {
        let start = SortOrder::default();
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn labels_follow_order() {
        assert_eq!(SortOrder::None.label(), "Sort Price");
        assert_eq!(SortOrder::Ascending.label(), "Low to High");
        assert_eq!(SortOrder::Descending.label(), "High to Low");
        assert!(!SortOrder::None.is_active());
        assert!(SortOrder::Descending.is_active());
    }

    #[test]
    fn deserializes_short_aliases() {
        let order: SortOrder = serde_json::from_str("\"asc\"").unwrap();
        assert_eq!(order, SortOrder::Ascending);
        let order: SortOrder = serde_json::from_str("\"descending\"").unwrap();
        assert_eq!(order, SortOrder::Descending);
    }
}
