//! Catalog screen state and its reducer.
//!
//! [`ScreenState`] is the single record holding every state slice of the screen:
//! the catalog, the search term, the sort order, the marked ids, the pagination
//! window and the selection mode. It changes only through
//! [`ScreenState::reduce`], which consumes the old state and returns the new
//! one, so every transition is a pure function `(state, action) → state`.
//!
//! Nothing derived is stored. [`ScreenState::view`] recomputes
//! `paginate(sort(filter(catalog, term), order), visible)` on every call.
//!
//! # State machine
//!
//! ```text
//!              ToggleEditMode / EnterEditWithPreselect(id)
//!   Browsing ──────────────────────────────────────────────► Editing
//!      ▲                                                        │
//!      └──────────── ToggleEditMode / DeleteSelected ───────────┘
//!                      (marks cleared on the way out)
//! ```

use super::actions::Action;
use super::modes::SelectionMode;
use crate::catalog::{filter_products, sort_products, PageWindow, SelectionSet};
use crate::domain::{Product, ProductId, SortOrder};

/// Derived view of the screen, produced for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView<'a> {
    /// Visible prefix of the filtered, sorted catalog.
    pub products: Vec<&'a Product>,
    /// True if the ranked list extends beyond `products`.
    pub has_more: bool,
    pub sort_order: SortOrder,
    pub is_edit_mode: bool,
    pub selected_count: usize,
    /// Length of the filtered list before pagination.
    pub total_matches: usize,
}

/// All state owned by the catalog screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenState {
    catalog: Vec<Product>,
    search_term: String,
    sort_order: SortOrder,
    selection: SelectionSet,
    window: PageWindow,
    mode: SelectionMode,
}

impl ScreenState {
    /// Creates a screen over `catalog` with the default page size.
    #[must_use]
    pub fn new(catalog: Vec<Product>) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Creates a screen with a custom page size (minimum 1).
    #[must_use]
    pub fn with_page_size(catalog: Vec<Product>, page_size: usize) -> Self {
        Self {
            catalog,
            window: PageWindow::new(page_size),
            ..Self::default()
        }
    }

    /// Applies one action and returns the resulting state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use catalist::app::{Action, ScreenState};
    /// use catalist::{Product, SortOrder};
    ///
    /// let state = ScreenState::new(vec![
    ///     Product::new(1, "A", 10.0),
    ///     Product::new(2, "B", 5.0),
    ///     Product::new(3, "C", 5.0),
    /// ])
    /// .reduce(&Action::ToggleSort);
    ///
    /// let view = state.view();
    /// assert_eq!(view.sort_order, SortOrder::Ascending);
    /// let ids: Vec<u64> = view.products.iter().map(|p| p.id).collect();
    /// assert_eq!(ids, vec![2, 3, 1]);
    /// ```
    #[must_use]
    pub fn reduce(mut self, action: &Action) -> Self {
        let _span = tracing::debug_span!("reduce", action = ?action).entered();

        match action {
            Action::SetSearchTerm(term) => {
                self.search_term.clone_from(term);
                self.window.reset();
                tracing::trace!(term = %self.search_term, "search term updated");
            }
            Action::ToggleSort => {
                self.sort_order = self.sort_order.next();
                tracing::debug!(sort_order = ?self.sort_order, "sort order advanced");
            }
            Action::ToggleSelect(id) => self.toggle_select(*id),
            Action::EnterEditWithPreselect(id) => {
                self.mode = SelectionMode::Editing;
                if self.contains_product(*id) {
                    self.selection.replace_with(*id);
                } else {
                    self.selection.clear();
                }
                tracing::debug!(product_id = id, "entered edit mode with preselection");
            }
            Action::ToggleEditMode => {
                if self.mode.is_editing() {
                    self.selection.clear();
                    self.mode = SelectionMode::Browsing;
                } else {
                    self.mode = SelectionMode::Editing;
                }
                tracing::debug!(mode = ?self.mode, "edit mode toggled");
            }
            Action::DeleteSelected => self.delete_selected(),
            Action::LoadMore => {
                let total = self.filtered().len();
                if self.window.has_more(total) {
                    self.window.advance();
                    tracing::debug!(
                        visible_count = self.window.visible_count(),
                        total,
                        "pagination advanced"
                    );
                } else {
                    tracing::trace!("load more ignored, list exhausted");
                }
            }
        }

        self
    }

    fn toggle_select(&mut self, id: ProductId) {
        if !self.mode.is_editing() {
            tracing::trace!(product_id = id, "toggle ignored outside edit mode");
            return;
        }
        if !self.contains_product(id) {
            tracing::debug!(product_id = id, "toggle ignored for unknown product");
            return;
        }
        let selected = self.selection.toggle(id);
        tracing::debug!(product_id = id, selected, count = self.selection.len(), "selection toggled");
    }

    fn delete_selected(&mut self) {
        let before = self.catalog.len();
        let selection = std::mem::take(&mut self.selection);
        self.catalog.retain(|product| !selection.contains(product.id));
        self.mode = SelectionMode::Browsing;

        tracing::debug!(
            removed = before - self.catalog.len(),
            remaining = self.catalog.len(),
            "selected products deleted"
        );
    }

    fn contains_product(&self, id: ProductId) -> bool {
        self.catalog.iter().any(|product| product.id == id)
    }

    fn filtered(&self) -> Vec<&Product> {
        filter_products(&self.catalog, &self.search_term)
    }

    /// The full filtered and sorted list, before pagination.
    #[must_use]
    pub fn ranked(&self) -> Vec<&Product> {
        sort_products(&self.filtered(), self.sort_order)
    }

    /// Computes the view consumed by the presentation layer.
    #[must_use]
    pub fn view(&self) -> CatalogView<'_> {
        let ranked = self.ranked();
        let total_matches = ranked.len();

        CatalogView {
            products: self.window.slice(&ranked).to_vec(),
            has_more: self.window.has_more(total_matches),
            sort_order: self.sort_order,
            is_edit_mode: self.mode.is_editing(),
            selected_count: self.selection.len(),
            total_matches,
        }
    }

    /// Replaces the catalog wholesale. Used once, when the configured source is read.
    ///
    /// Marks are dropped; search term and sort order are kept.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Vec<Product>) -> Self {
        self.catalog = catalog;
        self.selection.clear();
        self.window.reset();
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        self.mode
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.window.visible_count()
    }

    #[must_use]
    pub fn is_selected(&self, id: ProductId) -> bool {
        self.selection.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: u64) -> Vec<Product> {
        (1..=count)
            .map(|id| Product::new(id, format!("Item {id}"), 1.0))
            .collect()
    }

    fn ids(view: &CatalogView<'_>) -> Vec<u64> {
        view.products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn first_page_then_load_more() {
        let state = ScreenState::new(numbered(25));
        let view = state.view();
        assert_eq!(view.products.len(), 20);
        assert!(view.has_more);

        let state = state.reduce(&Action::LoadMore);
        let view = state.view();
        assert_eq!(view.products.len(), 25);
        assert!(!view.has_more);
    }

    #[test]
    fn load_more_when_exhausted_is_noop() {
        let state = ScreenState::new(numbered(5));
        let after = state.clone().reduce(&Action::LoadMore);
        assert_eq!(after, state);
    }

    #[test]
    fn search_resets_pagination_but_sort_does_not() {
        let state = ScreenState::new(numbered(50))
            .reduce(&Action::LoadMore)
            .reduce(&Action::ToggleSort);
        assert_eq!(state.visible_count(), 40);

        let state = state.reduce(&Action::SetSearchTerm("item".to_string()));
        assert_eq!(state.visible_count(), 20);
    }

    #[test]
    fn short_search_term_keeps_full_catalog() {
        let state = ScreenState::new(numbered(3)).reduce(&Action::SetSearchTerm("ab".into()));
        assert_eq!(ids(&state.view()), vec![1, 2, 3]);
    }

    #[test]
    fn search_filters_by_title() {
        let catalog = vec![
            Product::new(1, "Red Lipstick", 12.0),
            Product::new(2, "Blue Chair", 50.0),
            Product::new(3, "Red Chair", 55.0),
        ];
        let state = ScreenState::new(catalog).reduce(&Action::SetSearchTerm("CHAIR".into()));
        let view = state.view();
        assert_eq!(ids(&view), vec![2, 3]);
        assert_eq!(view.total_matches, 2);
    }

    #[test]
    fn sort_cycles_through_three_states() {
        let state = ScreenState::new(numbered(1));
        let state = state.reduce(&Action::ToggleSort);
        assert_eq!(state.sort_order(), SortOrder::Ascending);
        let state = state.reduce(&Action::ToggleSort);
        assert_eq!(state.sort_order(), SortOrder::Descending);
        let state = state.reduce(&Action::ToggleSort);
        assert_eq!(state.sort_order(), SortOrder::None);
    }

    #[test]
    fn long_press_preselects_and_toggle_unmarks() {
        let state = ScreenState::new(numbered(10)).reduce(&Action::EnterEditWithPreselect(7));
        assert_eq!(state.mode(), SelectionMode::Editing);
        assert!(state.is_selected(7));
        assert_eq!(state.view().selected_count, 1);

        let state = state.reduce(&Action::ToggleSelect(7));
        assert!(state.selection().is_empty());
        assert_eq!(state.mode(), SelectionMode::Editing);
    }

    #[test]
    fn long_press_replaces_previous_marks() {
        let state = ScreenState::new(numbered(10))
            .reduce(&Action::ToggleEditMode)
            .reduce(&Action::ToggleSelect(1))
            .reduce(&Action::ToggleSelect(2))
            .reduce(&Action::EnterEditWithPreselect(5));
        assert_eq!(state.selection().iter().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn toggle_select_in_browsing_has_no_effect() {
        let state = ScreenState::new(numbered(3));
        let after = state.clone().reduce(&Action::ToggleSelect(2));
        assert_eq!(after, state);
    }

    #[test]
    fn toggle_select_of_unknown_id_is_inert() {
        let state = ScreenState::new(numbered(3))
            .reduce(&Action::ToggleEditMode)
            .reduce(&Action::ToggleSelect(99));
        assert_eq!(state.view().selected_count, 0);
    }

    #[test]
    fn entering_edit_mode_selects_nothing_and_leaving_clears() {
        let state = ScreenState::new(numbered(3)).reduce(&Action::ToggleEditMode);
        assert!(state.view().is_edit_mode);
        assert_eq!(state.view().selected_count, 0);

        let state = state
            .reduce(&Action::ToggleSelect(1))
            .reduce(&Action::ToggleEditMode);
        assert!(!state.view().is_edit_mode);
        assert!(state.selection().is_empty());
    }

    #[test]
    fn delete_selected_removes_marked_and_resets_mode() {
        let state = ScreenState::new(numbered(6))
            .reduce(&Action::SetSearchTerm("item".into()))
            .reduce(&Action::ToggleSort)
            .reduce(&Action::ToggleEditMode)
            .reduce(&Action::ToggleSelect(3))
            .reduce(&Action::ToggleSelect(5))
            .reduce(&Action::DeleteSelected);

        assert!(state.catalog().iter().all(|p| p.id != 3 && p.id != 5));
        assert_eq!(state.catalog().len(), 4);
        assert!(state.selection().is_empty());
        assert_eq!(state.mode(), SelectionMode::Browsing);
        assert_eq!(state.search_term(), "item");
        assert_eq!(state.sort_order(), SortOrder::Ascending);
    }

    #[test]
    fn delete_with_nothing_selected_only_resets_mode() {
        let state = ScreenState::new(numbered(4))
            .reduce(&Action::ToggleEditMode)
            .reduce(&Action::DeleteSelected);
        assert_eq!(state.catalog().len(), 4);
        assert_eq!(state.mode(), SelectionMode::Browsing);
    }

    #[test]
    fn custom_page_size_drives_window() {
        let state = ScreenState::with_page_size(numbered(7), 3);
        assert_eq!(state.view().products.len(), 3);
        let state = state.reduce(&Action::LoadMore).reduce(&Action::LoadMore);
        let view = state.view();
        assert_eq!(view.products.len(), 7);
        assert!(!view.has_more);
    }

    #[test]
    fn with_catalog_swaps_data_and_drops_marks() {
        let state = ScreenState::new(numbered(2))
            .reduce(&Action::EnterEditWithPreselect(1))
            .with_catalog(numbered(30));
        assert!(state.selection().is_empty());
        assert_eq!(state.view().products.len(), 20);
    }
}
