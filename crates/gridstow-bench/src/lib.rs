//! Benchmark profiles and workload generators for gridstow.
//!
//! Provides pre-built containers for benchmarking and examples:
//!
//! - [`reference_profile`]: 64x64 grid packed first-fit with mixed items
//! - [`fragmented_profile`]: the reference grid with every other item removed
//! - [`random_items`]: deterministic item stream via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridstow_container::Container;
use gridstow_core::Item;
use gridstow_test_utils::TestItem;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Reference grid width.
pub const REFERENCE_WIDTH: u32 = 64;
/// Reference grid height.
pub const REFERENCE_HEIGHT: u32 = 64;
/// Largest item side in generated workloads.
pub const MAX_SIDE: u32 = 4;

const NAMES: [&str; 6] = ["sword", "potion", "gem", "arrows", "map", "bow"];

/// Generate `n` items with sides in `1..=max_side`.
///
/// The same seed always yields the same names and sizes (identities are
/// freshly allocated on every call).
pub fn random_items(seed: u64, n: usize, max_side: u32) -> Vec<TestItem> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let name = NAMES[rng.random_range(0..NAMES.len())];
            let w = rng.random_range(1..=max_side);
            let h = rng.random_range(1..=max_side);
            TestItem::new(name, w, h)
        })
        .collect()
}

/// Build the reference profile: a 64x64 grid filled first-fit from a
/// random item stream until 64 consecutive items find no room.
pub fn reference_profile(seed: u64) -> Container<TestItem> {
    let mut container = Container::new(REFERENCE_WIDTH, REFERENCE_HEIGHT)
        .unwrap_or_else(|e| panic!("reference dimensions rejected: {e}"));
    let mut misses = 0;
    let mut batch = 0u64;
    while misses < 64 {
        for item in random_items(seed.wrapping_add(batch), 256, MAX_SIDE) {
            if container.add_item(item) {
                misses = 0;
            } else {
                misses += 1;
            }
        }
        batch += 1;
    }
    container
}

/// The reference profile with every other item (in enumeration order)
/// removed, leaving scattered holes.
pub fn fragmented_profile(seed: u64) -> Container<TestItem> {
    let mut container = reference_profile(seed);
    let doomed: Vec<_> = container.iter().step_by(2).map(|item| item.id()).collect();
    for id in doomed {
        container.remove_item(id);
    }
    container
}
