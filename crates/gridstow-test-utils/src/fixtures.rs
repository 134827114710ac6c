//! Reusable item sets.

use crate::TestItem;

/// Build items from `(name, width, height)` triples.
pub fn items(specs: &[(&str, u32, u32)]) -> Vec<TestItem> {
    specs
        .iter()
        .map(|&(name, w, h)| TestItem::new(name, w, h))
        .collect()
}

/// A typical adventurer's kit: mixed footprints totalling 22 cells.
///
/// Fits a 6x4 grid with room to spare, in any insertion order once
/// defragmented.
pub fn adventurer_kit() -> Vec<TestItem> {
    items(&[
        ("sword", 1, 3),
        ("shield", 2, 2),
        ("potion", 1, 1),
        ("potion", 1, 1),
        ("bow", 1, 4),
        ("arrows", 2, 1),
        ("map", 2, 1),
        ("gem", 1, 1),
        ("armor", 2, 2),
    ])
}

/// `count` single-cell items all named `name`.
pub fn unit_items(name: &str, count: usize) -> Vec<TestItem> {
    (0..count).map(|_| TestItem::new(name, 1, 1)).collect()
}
