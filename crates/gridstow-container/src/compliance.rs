//! Grid/index agreement checks.
//!
//! These functions verify that a container's occupancy grid and item index
//! describe the same layout. Called from every test module that mutates a
//! container.

use gridstow_core::{Coord, Item};
use indexmap::IndexSet;

use crate::container::Container;

/// Assert every placed rectangle lies within the grid.
pub fn assert_in_bounds<T: Item>(c: &Container<T>) {
    for (item, origin) in c.iter_placed() {
        assert!(
            c.grid.rect_in_bounds(origin, item.size()),
            "{} at {origin} with size {} leaves the {}x{} grid",
            item.id(),
            item.size(),
            c.width(),
            c.height()
        );
    }
}

/// Assert each cell refers to exactly the item whose rectangle covers it.
pub fn assert_grid_matches_index<T: Item>(c: &Container<T>) {
    let mut covered = vec![None; c.grid.cells().len()];
    let mut index = c.index.iter();
    while let Some((slot, item, origin)) = index.next_with_slot() {
        let size = item.size();
        for dy in 0..size.height() as i32 {
            for dx in 0..size.width() as i32 {
                let cell = Coord::new(origin.x + dx, origin.y + dy);
                let i = (cell.y as usize) * c.width() as usize + cell.x as usize;
                assert!(
                    covered[i].is_none(),
                    "{} overlaps another item at {cell}",
                    item.id()
                );
                covered[i] = Some(slot);
            }
        }
    }
    assert_eq!(
        c.grid.cells(),
        covered.as_slice(),
        "occupancy grid disagrees with item index"
    );
}

/// Assert identities are unique and `len` matches enumeration.
pub fn assert_identity_unique<T: Item>(c: &Container<T>) {
    let ids: IndexSet<_> = c.iter().map(|item| item.id()).collect();
    assert_eq!(ids.len(), c.len(), "duplicate identity or stale length");
    for id in &ids {
        assert!(c.contains(*id), "{id} enumerated but not contained");
    }
}

/// All of the above.
pub fn assert_consistent<T: Item>(c: &Container<T>) {
    assert_in_bounds(c);
    assert_grid_matches_index(c);
    assert_identity_unique(c);
}
