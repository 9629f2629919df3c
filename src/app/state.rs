//! Host-facing application state and view model computation.
//!
//! [`AppState`] wraps the pure [`ScreenState`] with everything the terminal
//! surface needs on top of it: a keyboard cursor standing in for touch, the
//! input mode of the search field, the orientation reported by the host, the
//! theme, and whether the catalog has been read yet.
//!
//! Screen transitions always go through [`AppState::dispatch`], which runs the
//! reducer and then clamps the cursor to the new displayed list.
//!
//! # Example
//!
//! ```rust
//! use catalist::app::{Action, AppState, ScreenState};
//! use catalist::{Product, Theme};
//!
//! let screen = ScreenState::new(vec![Product::new(1, "Desk Lamp", 24.5)]);
//! let mut state = AppState::new(screen, Theme::default());
//! state.dispatch(&Action::ToggleEditMode);
//!
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.header.edit_label, "Cancel");
//! ```

use super::actions::Action;
use super::modes::{InputMode, Orientation, SearchFocus};
use super::screen::{CatalogView, ScreenState};
use crate::catalog::match_ranges;
use crate::domain::{Product, ProductId};
use crate::infrastructure::strip_host_prefix;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardItem, DeleteButtonInfo, EmptyState, FooterInfo, HeaderInfo, LoadMoreInfo,
    SearchBarInfo, SelectionBarInfo, UIViewModel, CARD_HEIGHT, CHROME_ROWS, COLUMN_GAP,
};
use std::path::PathBuf;

/// Progress of reading the product catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    /// Waiting for the host to grant file access or deliver the data.
    Loading,
    Ready,
    /// Reading failed; the screen stays empty and shows the reason.
    Failed(String),
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog, search, sort, marks, pagination and selection mode.
    pub screen: ScreenState,

    /// Index of the focused card within the displayed (paginated) list.
    pub cursor: usize,

    /// Whether keystrokes go to the search field.
    pub input_mode: InputMode,

    /// Derived from the pane size on every resize.
    pub orientation: Orientation,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    pub catalog_status: CatalogStatus,

    /// Catalog file to read once permissions are granted, if configured.
    pub catalog_file: Option<PathBuf>,
}

impl AppState {
    /// Creates a state around an already loaded screen.
    #[must_use]
    pub fn new(screen: ScreenState, theme: Theme) -> Self {
        Self {
            screen,
            cursor: 0,
            input_mode: InputMode::Normal,
            orientation: Orientation::Portrait,
            theme,
            catalog_status: CatalogStatus::Ready,
            catalog_file: None,
        }
    }

    /// Creates a state that waits for `path` to be read before showing products.
    #[must_use]
    pub fn awaiting_catalog(screen: ScreenState, theme: Theme, path: PathBuf) -> Self {
        Self {
            catalog_status: CatalogStatus::Loading,
            catalog_file: Some(path),
            ..Self::new(screen, theme)
        }
    }

    /// Runs one action through the screen reducer.
    pub fn dispatch(&mut self, action: &Action) {
        let screen = std::mem::take(&mut self.screen);
        self.screen = screen.reduce(action);
        self.clamp_cursor();
    }

    /// Installs the loaded catalog. Only the first successful load is applied.
    ///
    /// Returns false if a catalog was already in place.
    pub fn apply_catalog(&mut self, products: Vec<Product>) -> bool {
        if self.catalog_status == CatalogStatus::Ready {
            tracing::debug!("catalog already loaded, ignoring");
            return false;
        }

        tracing::debug!(count = products.len(), "catalog installed");
        let screen = std::mem::take(&mut self.screen);
        self.screen = screen.with_catalog(products);
        self.catalog_status = CatalogStatus::Ready;
        self.cursor = 0;
        true
    }

    /// Number of cards currently displayed.
    #[must_use]
    pub fn displayed_len(&self) -> usize {
        self.screen.view().products.len()
    }

    /// Id of the card under the cursor, if any card is displayed.
    #[must_use]
    pub fn cursor_product_id(&self) -> Option<ProductId> {
        self.screen.view().products.get(self.cursor).map(|p| p.id)
    }

    /// Moves the cursor one row down. Reaching past the end requests the next page.
    pub fn move_cursor_down(&mut self) {
        self.advance_cursor(self.orientation.columns());
    }

    pub fn move_cursor_right(&mut self) {
        self.advance_cursor(1);
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.orientation.columns());
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn advance_cursor(&mut self, step: usize) {
        let len = self.displayed_len();
        if len == 0 {
            return;
        }

        let target = self.cursor + step;
        if target >= len && self.screen.view().has_more {
            tracing::debug!(cursor = self.cursor, displayed = len, "list end reached");
            self.dispatch(&Action::LoadMore);
        }

        let len = self.displayed_len();
        self.cursor = target.min(len.saturating_sub(1));
    }

    fn clamp_cursor(&mut self) {
        let len = self.displayed_len();
        self.cursor = if len == 0 { 0 } else { self.cursor.min(len - 1) };
    }

    /// Appends a character to the search term.
    pub fn push_search_char(&mut self, c: char) {
        let mut term = self.screen.search_term().to_string();
        term.push(c);
        self.set_search_term(term);
    }

    /// Removes the last character of the search term. Returns false if it was empty.
    pub fn pop_search_char(&mut self) -> bool {
        let mut term = self.screen.search_term().to_string();
        if term.pop().is_none() {
            return false;
        }
        self.set_search_term(term);
        true
    }

    pub fn set_search_term(&mut self, term: String) {
        self.dispatch(&Action::SetSearchTerm(term));
        self.cursor = 0;
    }

    /// Computes a renderable UI view model for a pane of `rows` × `cols`.
    ///
    /// Cards are laid out in `orientation.columns()` columns. When the displayed
    /// list is taller than the pane, a window of card rows is centered on the
    /// cursor row, the way the cursor stays in view while scrolling a list.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols).entered();

        let view = self.screen.view();
        let columns = self.orientation.columns();
        let card_width = cols
            .saturating_sub(COLUMN_GAP * (columns - 1))
            .checked_div(columns)
            .unwrap_or(cols);

        let empty_state = self.compute_empty_state(&view);
        let cards = if empty_state.is_some() {
            vec![]
        } else {
            self.compute_cards(&view, rows, columns, card_width)
        };

        UIViewModel {
            header: self.compute_header(&view),
            search_bar: self.compute_search_bar(&view),
            selection_bar: view.is_edit_mode.then(|| SelectionBarInfo {
                text: format!("{} selected", view.selected_count),
            }),
            cards,
            columns,
            card_width,
            load_more: (view.has_more && empty_state.is_none()).then(|| LoadMoreInfo {
                text: "Loading more...".to_string(),
            }),
            delete_button: (view.is_edit_mode && view.selected_count > 0).then(|| {
                DeleteButtonInfo {
                    label: format!("Delete ({})", view.selected_count),
                }
            }),
            empty_state,
            footer: self.compute_footer(&view),
        }
    }

    fn compute_cards(
        &self,
        view: &CatalogView<'_>,
        rows: usize,
        columns: usize,
        card_width: usize,
    ) -> Vec<CardItem> {
        let len = view.products.len();
        let fitting_rows = (rows.saturating_sub(CHROME_ROWS) / CARD_HEIGHT).max(1);
        let total_rows = len.div_ceil(columns);
        let cursor_row = self.cursor / columns;

        let mut start_row = cursor_row.saturating_sub(fitting_rows / 2);
        if start_row + fitting_rows > total_rows {
            start_row = total_rows.saturating_sub(fitting_rows);
        }

        let start = start_row * columns;
        let end = ((start_row + fitting_rows) * columns).min(len);

        view.products[start..end]
            .iter()
            .enumerate()
            .map(|(offset, product)| {
                self.compute_card(product, start + offset, view.is_edit_mode, card_width)
            })
            .collect()
    }

    fn compute_card(
        &self,
        product: &Product,
        index: usize,
        is_edit_mode: bool,
        card_width: usize,
    ) -> CardItem {
        let text_width = card_width.saturating_sub(4);
        let title = truncate(&product.title, text_width);
        let title_len = title.chars().count();
        let highlight_ranges = match_ranges(&product.title, self.screen.search_term())
            .into_iter()
            .filter(|&(start, _)| start < title_len)
            .collect();

        let preview = product.tag_preview();

        CardItem {
            id: product.id,
            title,
            highlight_ranges,
            description: truncate(&product.description, text_width),
            price: product.display_price(),
            tags: preview.shown.to_vec(),
            tag_overflow: preview.overflow_label(),
            is_cursor: index == self.cursor,
            checkbox: is_edit_mode.then(|| self.screen.is_selected(product.id)),
        }
    }

    fn compute_header(&self, view: &CatalogView<'_>) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Products ({}) ", view.total_matches),
            edit_label: if view.is_edit_mode { "Cancel" } else { "Select" }.to_string(),
        }
    }

    fn compute_search_bar(&self, view: &CatalogView<'_>) -> SearchBarInfo {
        SearchBarInfo {
            query: self.screen.search_term().to_string(),
            is_focused: self.input_mode.is_typing(),
            sort_label: view.sort_order.label().to_string(),
            sort_icon: view.sort_order.icon().to_string(),
            sort_active: view.sort_order.is_active(),
        }
    }

    fn compute_empty_state(&self, view: &CatalogView<'_>) -> Option<EmptyState> {
        match &self.catalog_status {
            CatalogStatus::Loading => Some(EmptyState {
                message: "Loading catalog...".to_string(),
                subtitle: self
                    .catalog_file
                    .as_ref()
                    .map_or_else(String::new, |path| {
                        strip_host_prefix(&path.display().to_string())
                    }),
            }),
            CatalogStatus::Failed(reason) => Some(EmptyState {
                message: "Could not load catalog".to_string(),
                subtitle: reason.clone(),
            }),
            CatalogStatus::Ready if view.products.is_empty() => Some(EmptyState {
                message: "No products found".to_string(),
                subtitle: "Nothing to display right now.".to_string(),
            }),
            CatalogStatus::Ready => None,
        }
    }

    fn compute_footer(&self, view: &CatalogView<'_>) -> FooterInfo {
        let keybindings = match (self.input_mode, view.is_edit_mode) {
            (InputMode::Search(SearchFocus::Typing), _) => {
                "ESC/Enter: done  Ctrl+n/p: navigate  Ctrl+u: clear  Type to search"
            }
            (InputMode::Search(SearchFocus::Navigating), false) => {
                "/: edit search  ESC: close search  hjkl: move  s: sort  v: select item"
            }
            (InputMode::Search(SearchFocus::Navigating), true) => {
                "/: edit search  ESC: close search  Space: toggle  d: delete  e: cancel"
            }
            (InputMode::Normal, false) => {
                "hjkl: move  /: search  s: sort  e: select  v: select item  m: more  q: quit"
            }
            (InputMode::Normal, true) => {
                "hjkl: move  Space: toggle  d: delete  e: cancel  s: sort  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Shortens `text` to at most `width` characters, ending in "..." when cut.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let kept: String = text.chars().take(width - 3).collect();
    format!("{kept}...")
}
