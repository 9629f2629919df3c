//! Zellij plugin entry point.
//!
//! On `wasm32` this registers the plugin shim in [`plugin`], a thin layer
//! translating Zellij events into library events and library commands into
//! Zellij API calls. Everything else lives in the `catalist` library.
//!
//! Built natively, the binary prints one frame of the catalog screen for the
//! bundled dataset, which is handy for checking themes and layout without
//! starting Zellij.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
mod plugin;

#[cfg(target_arch = "wasm32")]
use zellij_tile::prelude::*;

#[cfg(target_arch = "wasm32")]
register_plugin!(plugin::State);

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::collections::BTreeMap;

    let mut settings = BTreeMap::new();
    for arg in std::env::args().skip(1) {
        if let Some((key, value)) = arg.split_once('=') {
            settings.insert(key.to_string(), value.to_string());
        }
    }

    let config = catalist::Config::from_zellij(&settings);
    let mut state = catalist::initialize(&config);
    let (rows, cols) = (40, 100);
    if let Err(e) = catalist::handle_event(&mut state, &catalist::Event::Resize { rows, cols }) {
        eprintln!("catalist: {e}");
        return;
    }

    print!("\u{1b}[2J");
    catalist::ui::render(&state, rows, cols);
    println!();
}
