//! Inventory screen walkthrough.
//!
//! Demonstrates: build a container → add items first-fit → move one →
//! remove one → repack → print the grid after each step.
//!
//! Run with `RUST_LOG=gridstow_container=debug` to see the library's
//! tracing output.

use gridstow_container::Container;
use gridstow_core::{Coord, GridObserver, Item};
use gridstow_test_utils::{fixtures, TestItem};
use tracing::info;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Prints every notification as it arrives.
struct Printer;

impl<T: Item> GridObserver<T> for Printer {
    fn on_added(&mut self, item: &T, origin: Coord) {
        println!("  + {} at {origin}", item.name());
    }

    fn on_removed(&mut self, item: &T, origin: Coord) {
        println!("  - {} from {origin}", item.name());
    }

    fn on_moved(&mut self, item: &T, new_origin: Coord) {
        println!("  > {} to {new_origin}", item.name());
    }

    fn on_cleared(&mut self) {
        println!("  * cleared");
    }
}

fn show(title: &str, grid: &Container<TestItem>) {
    println!("\n{title} ({} items, {} free cells)", grid.len(), grid.free_cells());
    println!("{grid}");
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();
}

fn main() {
    enable_tracing();

    println!("=== gridstow inventory demo ===");

    let mut bag: Container<TestItem> = Container::new(6, 4).unwrap();
    bag.subscribe(Box::new(Printer));

    // --- Fill in arrival order ---
    let mut left_over = Vec::new();
    for item in fixtures::adventurer_kit() {
        if let Err(item) = bag.try_add_item(item) {
            left_over.push(item);
        }
    }
    show("Arrival order", &bag);
    for item in &left_over {
        println!("no room for {} ({})", item.name(), item.size());
    }

    // --- Move the first potion to the bottom-right corner ---
    let potion = bag.iter().find(|i| i.name() == "potion").map(|i| i.id());
    if let Some(id) = potion {
        let moved = bag.move_item(id, Coord::new(5, 3));
        info!(moved, "potion to corner");
    }
    show("After move", &bag);

    // --- Repack, then retry what did not fit ---
    match bag.optimize_space() {
        Ok(()) => show("After repack", &bag),
        Err(e) => println!("repack failed: {e}"),
    }
    for item in left_over {
        let name = item.name().to_owned();
        match bag.try_add_item(item) {
            Ok(origin) => println!("{name} now fits at {origin}"),
            Err(_) => println!("{name} still does not fit"),
        }
    }
    show("Final", &bag);

    let mut cells = vec![None; (bag.width() * bag.height()) as usize];
    bag.copy_grid_to(&mut cells).unwrap();
    let distinct: std::collections::BTreeSet<_> = cells.iter().flatten().collect();
    println!("\n{} distinct items cover {} cells", distinct.len(), bag.occupied_cells());

    bag.clear();
}
