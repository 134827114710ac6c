//! Criterion micro-benchmarks for container placement, queries, and repacking.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use gridstow_bench::{
    fragmented_profile, random_items, reference_profile, MAX_SIDE, REFERENCE_HEIGHT,
    REFERENCE_WIDTH,
};
use gridstow_container::Container;
use gridstow_core::{Coord, Item, ItemId, Size};
use gridstow_test_utils::TestItem;

/// Benchmark: fill an empty 64x64 grid first-fit from 1000 mixed items.
fn bench_fill_first_fit(c: &mut Criterion) {
    c.bench_function("fill_first_fit_64x64", |b| {
        b.iter_batched(
            || random_items(42, 1000, MAX_SIDE),
            |items| {
                let mut grid: Container<TestItem> =
                    Container::new(REFERENCE_WIDTH, REFERENCE_HEIGHT).unwrap();
                for item in items {
                    black_box(grid.add_item(item));
                }
                grid
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: search a fragmented grid for every footprint up to 4x4.
fn bench_find_free_fragmented(c: &mut Criterion) {
    let grid = fragmented_profile(42);
    let sizes: Vec<Size> = (1..=MAX_SIDE)
        .flat_map(|w| (1..=MAX_SIDE).map(move |h| Size::new(w, h).unwrap()))
        .collect();

    c.bench_function("find_free_position_fragmented", |b| {
        b.iter(|| {
            for &size in &sizes {
                black_box(grid.find_free_position(size));
            }
        });
    });
}

/// Benchmark: `get_item` on all 4096 cells of a packed grid.
fn bench_get_item_all_cells(c: &mut Criterion) {
    let grid = reference_profile(42);

    c.bench_function("get_item_4096_cells", |b| {
        b.iter(|| {
            for y in 0..REFERENCE_HEIGHT as i32 {
                for x in 0..REFERENCE_WIDTH as i32 {
                    black_box(grid.try_get_item(Coord::new(x, y)));
                }
            }
        });
    });
}

/// Benchmark: remove and re-add one item per iteration in a packed grid.
fn bench_remove_readd_churn(c: &mut Criterion) {
    let mut grid = reference_profile(42);
    let ids: Vec<ItemId> = grid.iter().map(|i| i.id()).collect();
    let mut next = 0usize;

    c.bench_function("remove_readd_churn", |b| {
        b.iter(|| {
            let id = ids[next % ids.len()];
            next += 1;
            if let Some((item, origin)) = grid.remove_item(id) {
                black_box(grid.add_item_at(item, origin));
            }
        });
    });
}

/// Benchmark: repack a fragmented grid.
fn bench_optimize_fragmented(c: &mut Criterion) {
    let template = fragmented_profile(42);

    c.bench_function("optimize_space_fragmented", |b| {
        b.iter_batched(
            || template.clone(),
            |mut grid| {
                black_box(grid.optimize_space()).ok();
                grid
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_fill_first_fit,
    bench_find_free_fragmented,
    bench_get_item_all_cells,
    bench_remove_readd_churn,
    bench_optimize_fragmented
);
criterion_main!(benches);
