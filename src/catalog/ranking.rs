//! Filter and sort stages of the catalog list pipeline.
//!
//! The working list shown on screen is always
//! `paginate(sort_products(filter_products(catalog, term), order), visible)`.
//! Both stages borrow from the catalog and return new vectors of references, so
//! the catalog itself is never reordered or copied.
//!
//! # Filtering
//!
//! A product passes when its title or any of its tags contains the search term
//! as a case-insensitive substring. Terms shorter than [`MIN_SEARCH_LEN`]
//! characters after trimming disable filtering entirely.
//!
//! # Sorting
//!
//! Sorting by price uses the standard library's stable sort, so products with
//! equal prices keep their relative catalog order in both directions.

use crate::domain::{Product, SortOrder};
use std::cmp::Ordering;

/// Minimum trimmed term length (in characters) that activates filtering.
pub const MIN_SEARCH_LEN: usize = 3;

/// Returns the lowercased needle for `term`, or `None` if the term is below
/// the filtering threshold.
///
/// # Examples
///
/// ```
/// use catalist::catalog::search_needle;
///
/// assert_eq!(search_needle("ab"), None);
/// assert_eq!(search_needle("  Lamp "), Some("lamp".to_string()));
/// ```
#[must_use]
pub fn search_needle(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.chars().count() < MIN_SEARCH_LEN {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Reduces the catalog to products matching `term`, preserving catalog order.
///
/// An empty, whitespace-only or short term returns every product.
///
/// # Examples
///
/// ```
/// use catalist::catalog::filter_products;
/// use catalist::Product;
///
/// let catalog = vec![
///     Product::new(1, "Red Lipstick", 12.0).with_tags(["beauty"]),
///     Product::new(2, "Office Chair", 150.0).with_tags(["furniture"]),
/// ];
///
/// let hits = filter_products(&catalog, "BEAUTY");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].id, 1);
///
/// assert_eq!(filter_products(&catalog, "of").len(), 2);
/// ```
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let _span = tracing::trace_span!(
        "filter_products",
        total = products.len(),
        term_len = term.len()
    )
    .entered();

    let Some(needle) = search_needle(term) else {
        return products.iter().collect();
    };

    let filtered: Vec<&Product> = products.iter().filter(|p| p.matches(&needle)).collect();

    tracing::trace!(matched = filtered.len(), "filter applied");
    filtered
}

/// Returns the products ordered by `order`. The input slice is left untouched.
///
/// `SortOrder::None` returns the input order unchanged.
#[must_use]
pub fn sort_products<'a>(products: &[&'a Product], order: SortOrder) -> Vec<&'a Product> {
    let mut sorted = products.to_vec();
    match order {
        SortOrder::None => {}
        SortOrder::Ascending => sorted.sort_by(|a, b| compare_price(a, b)),
        SortOrder::Descending => sorted.sort_by(|a, b| compare_price(b, a)),
    }
    sorted
}

fn compare_price(a: &Product, b: &Product) -> Ordering {
    a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal)
}

/// Computes character index ranges where `term` occurs in `text`.
///
/// Matching is case-insensitive and non-overlapping. Returns no ranges when the
/// term is below the filtering threshold, so highlighting only appears while a
/// filter is active. Ranges are `(start, end)` with an exclusive end, in
/// characters rather than bytes.
///
/// # Examples
///
/// ```
/// use catalist::catalog::match_ranges;
///
/// assert_eq!(match_ranges("Lamp and LAMP shade", "lamp"), vec![(0, 4), (9, 13)]);
/// assert!(match_ranges("Lamp", "la").is_empty());
/// ```
#[must_use]
pub fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    if search_needle(term).is_none() {
        return vec![];
    }

    let haystack: Vec<char> = text.chars().map(fold_case).collect();
    let needle: Vec<char> = term.trim().chars().map(fold_case).collect();

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Essence Mascara", 9.99).with_tags(["beauty", "mascara"]),
            Product::new(2, "Eyeshadow Palette", 19.99).with_tags(["beauty", "eyeshadow"]),
            Product::new(3, "Bed Frame", 499.0).with_tags(["furniture", "bedroom"]),
            Product::new(4, "Apple", 1.99).with_tags(["fruits"]),
            Product::new(5, "Office Chair", 149.0),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn short_terms_return_full_catalog() {
        let catalog = catalog();
        for term in ["", "a", "ab", "  ab  ", "   "] {
            assert_eq!(ids(&filter_products(&catalog, term)), vec![1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn filter_matches_title_or_tag_and_keeps_order() {
        let catalog = catalog();
        assert_eq!(ids(&filter_products(&catalog, "beauty")), vec![1, 2]);
        assert_eq!(ids(&filter_products(&catalog, "BED")), vec![3]);
        assert_eq!(ids(&filter_products(&catalog, "chair")), vec![5]);
        assert!(filter_products(&catalog, "zzz").is_empty());
    }

    #[test]
    fn filter_result_satisfies_predicate_exactly() {
        let catalog = catalog();
        let term = "ess";
        let hits = filter_products(&catalog, term);
        for product in &catalog {
            let expected = product.title.to_lowercase().contains(term)
                || product.tags.iter().any(|t| t.to_lowercase().contains(term));
            assert_eq!(hits.iter().any(|p| p.id == product.id), expected);
        }
    }

    #[test]
    fn filter_on_empty_catalog_is_empty() {
        assert!(filter_products(&[], "anything").is_empty());
    }

    #[test]
    fn ascending_sort_is_stable_for_ties() {
        let catalog = vec![
            Product::new(1, "A", 10.0),
            Product::new(2, "B", 5.0),
            Product::new(3, "C", 5.0),
        ];
        let refs: Vec<&Product> = catalog.iter().collect();
        assert_eq!(ids(&sort_products(&refs, SortOrder::Ascending)), vec![2, 3, 1]);
        assert_eq!(ids(&sort_products(&refs, SortOrder::Descending)), vec![1, 2, 3]);
    }

    #[test]
    fn none_sort_is_identity() {
        let catalog = catalog();
        let refs: Vec<&Product> = catalog.iter().collect();
        assert_eq!(ids(&sort_products(&refs, SortOrder::None)), ids(&refs));
    }

    #[test]
    fn sorted_output_is_monotonic_and_input_untouched() {
        let catalog = catalog();
        let refs: Vec<&Product> = catalog.iter().collect();

        let asc = sort_products(&refs, SortOrder::Ascending);
        assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));

        let desc = sort_products(&refs, SortOrder::Descending);
        assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));

        assert_eq!(ids(&refs), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn match_ranges_use_character_indices() {
        assert_eq!(match_ranges("Crème brûlée crème", "CRÈME"), vec![(0, 5), (13, 18)]);
        assert_eq!(match_ranges("aaaa", "aaa"), vec![(0, 3)]);
        assert!(match_ranges("short", "").is_empty());
    }
}
