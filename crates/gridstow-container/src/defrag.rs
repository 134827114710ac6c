//! Space optimisation: repack every item greedily, largest first.

use std::mem;

use gridstow_core::{Coord, Item, ItemId, Size};
use gridstow_index::SlotId;
use tracing::{debug, error, instrument};

use crate::container::Container;
use crate::error::GridError;
use crate::placement::find_free_origin;

/// One item's part in a repack.
#[derive(Clone, Copy, Debug)]
struct Planned {
    /// Position in the pre-call enumeration.
    rank: usize,
    slot: SlotId,
    id: ItemId,
    size: Size,
    from: Coord,
    to: Coord,
}

impl Planned {
    /// Largest area first, then widest, then tallest. Ties keep
    /// enumeration order because the sort is stable.
    fn order(a: &Self, b: &Self) -> std::cmp::Ordering {
        b.size
            .area()
            .cmp(&a.size.area())
            .then(b.size.width().cmp(&a.size.width()))
            .then(b.size.height().cmp(&a.size.height()))
    }
}

/// Reusable plan buffer, one per container.
#[derive(Debug, Default)]
pub(crate) struct DefragScratch {
    plan: Vec<Planned>,
}

impl<T: Item> Container<T> {
    /// Repack every item: clear the grid, then re-place items one by one at
    /// the first free position, largest area first (then widest, then
    /// tallest, then enumeration order).
    ///
    /// On success the index is rebuilt in repack order, so enumeration
    /// afterwards yields items largest first. `on_moved` then fires for each
    /// item whose origin changed, in the enumeration order from before the
    /// call.
    ///
    /// Greedy first-fit is not optimal: a layout that fits can fail to
    /// repack. In that case the container is restored to its pre-call
    /// layout, nobody is notified, and [`GridError::DefragFailed`] names the
    /// first item that found no room.
    #[instrument(level = "debug", skip_all, fields(items = self.index.len()))]
    pub fn optimize_space(&mut self) -> Result<(), GridError> {
        if self.index.is_empty() {
            return Ok(());
        }
        let mut scratch = mem::take(&mut self.scratch);
        let result = self.repack(&mut scratch.plan);
        scratch.plan.clear();
        self.scratch = scratch;
        result
    }

    fn repack(&mut self, plan: &mut Vec<Planned>) -> Result<(), GridError> {
        plan.clear();
        let mut entries = self.index.iter();
        while let Some((slot, item, origin)) = entries.next_with_slot() {
            plan.push(Planned {
                rank: plan.len(),
                slot,
                id: item.id(),
                size: item.size(),
                from: origin,
                to: origin,
            });
        }
        plan.sort_by(Planned::order);

        self.grid.clear_all();
        for i in 0..plan.len() {
            let entry = plan[i];
            match find_free_origin(&self.grid, entry.size) {
                Some(to) => {
                    self.grid.fill(to, entry.size, entry.slot);
                    plan[i].to = to;
                }
                None => {
                    self.grid.clear_all();
                    for p in plan.iter() {
                        self.grid.fill(p.from, p.size, p.slot);
                    }
                    error!(
                        item = %entry.id,
                        size = %entry.size,
                        "repack found no room, layout restored"
                    );
                    return Err(GridError::DefragFailed { id: entry.id });
                }
            }
        }

        let mut drained = Vec::with_capacity(plan.len());
        self.index.drain_into(&mut drained);
        let mut items: Vec<Option<T>> = drained.into_iter().map(|(item, _)| Some(item)).collect();
        self.grid.clear_all();
        for p in plan.iter_mut() {
            let Some(item) = items[p.rank].take() else {
                continue;
            };
            match self.index.insert(item, p.to) {
                Ok(slot) => {
                    self.grid.fill(p.to, p.size, slot);
                    p.slot = slot;
                }
                Err(rejected) => {
                    error!(
                        item = %p.id,
                        reason = %rejected.reason,
                        "index refused a repacked item"
                    );
                    return Err(GridError::DefragFailed { id: p.id });
                }
            }
        }

        plan.sort_unstable_by_key(|p| p.rank);
        let moved = plan.iter().filter(|p| p.from != p.to).count();
        debug!(moved, "repack complete");
        for p in plan.iter().filter(|p| p.from != p.to) {
            if let Some((item, _)) = self.index.get_slot(p.slot) {
                self.observers.moved(item, p.to);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::assert_consistent;
    use gridstow_core::GridEvent;
    use gridstow_test_utils::{fixtures, RecordingObserver, TestItem};

    fn at(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn empty_container_is_a_no_op() {
        let mut c: Container<TestItem> = Container::new(2, 2).unwrap();
        assert_eq!(c.optimize_space(), Ok(()));
    }

    #[test]
    fn large_item_moves_to_origin() {
        let small = TestItem::new("s", 1, 1);
        let large = TestItem::new("L", 2, 2);
        let (ids, idl) = (small.id(), large.id());
        let mut c =
            Container::with_placed(3, 3, vec![(small, at(0, 0)), (large, at(1, 1))]).unwrap();

        c.optimize_space().unwrap();
        assert_eq!(c.origin_of(idl), Some(at(0, 0)));
        assert_eq!(c.origin_of(ids), Some(at(2, 0)));
        assert_eq!(c.occupied_cells(), 5);
        assert_consistent(&c);
    }

    #[test]
    fn enumeration_follows_repack_order() {
        let small = TestItem::new("s", 1, 1);
        let large = TestItem::new("L", 2, 2);
        let (ids, idl) = (small.id(), large.id());
        let mut c =
            Container::with_placed(3, 3, vec![(small, at(0, 0)), (large, at(1, 1))]).unwrap();
        let before: Vec<ItemId> = c.iter().map(|i| i.id()).collect();
        assert_eq!(before, vec![ids, idl]);

        c.optimize_space().unwrap();
        let after: Vec<ItemId> = c.iter().map(|i| i.id()).collect();
        assert_eq!(after, vec![idl, ids]);
        assert_eq!(c.index.slot_of(idl).map(|s| s.index()), Some(0));
        assert_eq!(c.index.slot_of(ids).map(|s| s.index()), Some(1));
        assert_consistent(&c);
    }

    #[test]
    fn repack_discards_freed_slots() {
        let items = fixtures::unit_items("u", 4);
        let ids: Vec<ItemId> = items.iter().map(|i| i.id()).collect();
        let mut c = Container::with_items(4, 1, items).unwrap();
        assert!(c.remove_item(ids[1]).is_some());
        assert_eq!(c.index.free_count(), 1);

        c.optimize_space().unwrap();
        assert_eq!(c.index.free_count(), 0);
        let after: Vec<ItemId> = c.iter().map(|i| i.id()).collect();
        assert_eq!(after, vec![ids[0], ids[2], ids[3]]);
        assert_eq!(c.to_string(), "uuu.");
        assert_consistent(&c);
    }

    #[test]
    fn ties_keep_enumeration_order() {
        let items = fixtures::unit_items("u", 3);
        let ids: Vec<ItemId> = items.iter().map(|i| i.id()).collect();
        let placed = items
            .into_iter()
            .zip([at(2, 2), at(1, 1), at(0, 2)])
            .collect::<Vec<_>>();
        let mut c = Container::with_placed(3, 3, placed).unwrap();
        c.optimize_space().unwrap();
        assert_eq!(c.origin_of(ids[0]), Some(at(0, 0)));
        assert_eq!(c.origin_of(ids[1]), Some(at(1, 0)));
        assert_eq!(c.origin_of(ids[2]), Some(at(2, 0)));
    }

    #[test]
    fn moved_fires_only_for_changed_origins_in_enumeration_order() {
        let a = TestItem::new("a", 1, 1);
        let b = TestItem::new("b", 2, 1);
        let c_item = TestItem::new("c", 1, 1);
        let (ida, idb, idc) = (a.id(), b.id(), c_item.id());
        // Before: a(2,1)  b(0,0)  c(2,0). After: b(0,0) a(2,0) c(0,1).
        let mut c = Container::with_placed(
            3,
            2,
            vec![(a, at(2, 1)), (b, at(0, 0)), (c_item, at(2, 0))],
        )
        .unwrap();
        let (rec, log) = RecordingObserver::new();
        c.subscribe(Box::new(rec));

        c.optimize_space().unwrap();
        assert_eq!(c.origin_of(idb), Some(at(0, 0)));
        assert_eq!(c.origin_of(ida), Some(at(2, 0)));
        assert_eq!(c.origin_of(idc), Some(at(0, 1)));
        assert_eq!(
            *log.borrow(),
            vec![
                GridEvent::Moved {
                    id: ida,
                    origin: at(2, 0)
                },
                GridEvent::Moved {
                    id: idc,
                    origin: at(0, 1)
                },
            ]
        );
    }

    #[test]
    fn failed_repack_restores_layout() {
        // B . A A
        // B C C .
        // Sorted first-fit puts A and C on row 0 and leaves no column for B.
        let a = TestItem::new("A", 2, 1);
        let b = TestItem::new("B", 1, 2);
        let c_item = TestItem::new("C", 2, 1);
        let idb = b.id();
        let mut c = Container::with_placed(
            4,
            2,
            vec![(a, at(2, 0)), (b, at(0, 0)), (c_item, at(1, 1))],
        )
        .unwrap();
        let (rec, log) = RecordingObserver::new();
        c.subscribe(Box::new(rec));
        let before = c.to_string();

        assert_eq!(c.optimize_space(), Err(GridError::DefragFailed { id: idb }));
        assert_eq!(c.to_string(), before);
        assert_eq!(c.len(), 3);
        assert!(log.borrow().is_empty());
        assert_consistent(&c);
    }

    #[test]
    fn adventurer_kit_repacks_largest_first() {
        // Mirror image of the packed layout.
        let origins = [
            at(0, 0),
            at(4, 0),
            at(5, 3),
            at(4, 3),
            at(1, 0),
            at(4, 2),
            at(2, 2),
            at(3, 3),
            at(2, 0),
        ];
        let placed = fixtures::adventurer_kit().into_iter().zip(origins);
        let mut c = Container::with_placed(6, 4, placed).unwrap();
        assert_eq!(c.occupied_cells(), 22);

        c.optimize_space().unwrap();
        assert_eq!(c.to_string(), "ssaabs\nssaabs\naammbs\nppg.b.");
        assert_eq!(c.occupied_cells(), 22);
        assert_consistent(&c);
    }

    #[test]
    fn scratch_is_reused_across_calls() {
        let mut c = Container::with_items(4, 4, fixtures::unit_items("u", 6)).unwrap();
        c.optimize_space().unwrap();
        let layout = c.to_string();
        c.optimize_space().unwrap();
        assert_eq!(c.to_string(), layout);
        assert!(c.scratch.plan.is_empty());
        assert!(c.scratch.plan.capacity() >= 6);
    }
}
