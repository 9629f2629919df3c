//! End-to-end flows through the public event API.

use std::io::Write;

use catalist::{
    handle_event, initialize, AppState, CatalogStatus, Command, Config, Event, Product,
    ScreenState, SelectionMode, SortOrder, Theme,
};

fn numbered(count: u64) -> Vec<Product> {
    (1..=count)
        .map(|id| Product::new(id, format!("Item {id}"), id as f64))
        .collect()
}

fn app(products: Vec<Product>) -> AppState {
    AppState::new(ScreenState::new(products), Theme::default())
}

fn send(state: &mut AppState, events: &[Event]) -> Vec<Command> {
    events
        .iter()
        .flat_map(|event| handle_event(state, event).unwrap().1)
        .collect()
}

fn displayed_ids(state: &AppState) -> Vec<u64> {
    state.screen.view().products.iter().map(|p| p.id).collect()
}

#[test]
fn reaching_list_end_loads_remaining_page() {
    let mut state = app(numbered(25));
    assert_eq!(state.displayed_len(), 20);
    assert!(state.screen.view().has_more);

    send(&mut state, &vec![Event::KeyDown; 20]);

    let view = state.screen.view();
    assert_eq!(view.products.len(), 25);
    assert!(!view.has_more);
    assert_eq!(state.cursor, 20);
}

#[test]
fn explicit_load_more_past_the_end_does_not_render() {
    let mut state = app(numbered(25));
    let (first, _) = handle_event(&mut state, &Event::LoadMore).unwrap();
    let (second, _) = handle_event(&mut state, &Event::LoadMore).unwrap();
    assert!(first);
    assert!(!second);
    assert_eq!(state.displayed_len(), 25);
}

#[test]
fn two_character_term_shows_whole_catalog() {
    let mut state = app(numbered(5));
    send(&mut state, &[Event::SearchMode, Event::Char('a'), Event::Char('b')]);
    assert_eq!(state.screen.search_term(), "ab");
    assert_eq!(displayed_ids(&state), vec![1, 2, 3, 4, 5]);
}

#[test]
fn ascending_sort_keeps_ties_in_catalog_order() {
    let mut state = app(vec![
        Product::new(1, "Lamp", 10.0),
        Product::new(2, "Chair", 5.0),
        Product::new(3, "Stool", 5.0),
    ]);

    send(&mut state, &[Event::ToggleSort]);
    assert_eq!(state.screen.sort_order(), SortOrder::Ascending);
    assert_eq!(displayed_ids(&state), vec![2, 3, 1]);

    send(&mut state, &[Event::ToggleSort]);
    assert_eq!(displayed_ids(&state), vec![1, 2, 3]);

    send(&mut state, &[Event::ToggleSort]);
    assert_eq!(state.screen.sort_order(), SortOrder::None);
    assert_eq!(displayed_ids(&state), vec![1, 2, 3]);
}

#[test]
fn long_press_then_tap_unmarks_but_stays_editing() {
    let mut state = app(numbered(10));
    send(&mut state, &vec![Event::KeyDown; 6]);
    assert_eq!(state.cursor_product_id(), Some(7));

    send(&mut state, &[Event::LongPress]);
    assert_eq!(state.screen.mode(), SelectionMode::Editing);
    assert_eq!(state.screen.selection().iter().collect::<Vec<_>>(), vec![7]);

    send(&mut state, &[Event::Tap]);
    assert_eq!(state.screen.mode(), SelectionMode::Editing);
    assert!(state.screen.selection().is_empty());
}

#[test]
fn batch_delete_removes_marked_products() {
    let mut state = app(numbered(6));
    send(
        &mut state,
        &[
            Event::ToggleEditMode,
            Event::KeyDown,
            Event::KeyDown,
            Event::Tap,
            Event::KeyDown,
            Event::KeyDown,
            Event::Tap,
        ],
    );
    assert!(state.screen.is_selected(3));
    assert!(state.screen.is_selected(5));

    let vm = state.compute_viewmodel(40, 60);
    assert_eq!(vm.delete_button.map(|b| b.label).as_deref(), Some("Delete (2)"));

    send(&mut state, &[Event::DeleteSelected]);
    assert_eq!(displayed_ids(&state), vec![1, 2, 4, 6]);
    assert!(state.screen.selection().is_empty());
    assert_eq!(state.screen.mode(), SelectionMode::Browsing);
    assert!(state.cursor < state.displayed_len());
}

#[test]
fn landscape_pane_shows_two_columns() {
    let mut state = app(numbered(8));
    let (render, _) = handle_event(&mut state, &Event::Resize { rows: 30, cols: 120 }).unwrap();
    assert!(render);

    let vm = state.compute_viewmodel(30, 120);
    assert_eq!(vm.columns, 2);

    send(&mut state, &[Event::KeyDown]);
    assert_eq!(state.cursor_product_id(), Some(3));
}

#[test]
fn configured_catalog_loads_after_permission() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id": 1, "title": "Desk Lamp", "price": 24.5, "tags": ["light"]}},
            {{"id": 2, "title": "Bookshelf", "price": 89.0}}]"#
    )
    .unwrap();

    let path = file.path().to_path_buf();
    let config = Config {
        catalog_file: Some(path.display().to_string()),
        ..Config::default()
    };
    let mut state = initialize(&config);
    assert_eq!(state.catalog_status, CatalogStatus::Loading);

    let commands = send(&mut state, &[Event::PermissionsResult { granted: true }]);
    let [Command::LoadCatalog { path: requested }] = commands.as_slice() else {
        panic!("expected a catalog load, got {commands:?}");
    };
    assert_eq!(requested, &path);

    let products = catalist::catalog::JsonCatalog::from_file(requested);
    let products = catalist::catalog::CatalogSource::load(&products).unwrap();
    send(&mut state, &[Event::CatalogLoaded { products }]);

    assert_eq!(state.catalog_status, CatalogStatus::Ready);
    assert_eq!(displayed_ids(&state), vec![1, 2]);
}

#[test]
fn denied_permission_shows_failure() {
    let config = Config {
        catalog_file: Some("~/products.json".to_string()),
        ..Config::default()
    };
    let mut state = initialize(&config);
    send(&mut state, &[Event::PermissionsResult { granted: false }]);

    let vm = state.compute_viewmodel(30, 40);
    let empty = vm.empty_state.unwrap();
    assert_eq!(empty.message, "Could not load catalog");
    assert!(vm.cards.is_empty());
}
