//! Traversal over live index entries.

use std::iter::FusedIterator;

use gridstow_core::Coord;

use crate::slot::{Slot, SlotId};

/// Iterator over live entries of an [`ItemIndex`](crate::ItemIndex), in
/// ascending slot order. Freed slots are skipped.
///
/// Created by [`ItemIndex::iter`](crate::ItemIndex::iter).
pub struct Iter<'a, T> {
    slots: std::iter::Enumerate<std::slice::Iter<'a, Slot<T>>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Slot<T>], live: usize) -> Self {
        Self {
            slots: slots.iter().enumerate(),
            remaining: live,
        }
    }

    /// Like `next`, but also reports the slot the entry lives in.
    pub fn next_with_slot(&mut self) -> Option<(SlotId, &'a T, Coord)> {
        for (i, slot) in self.slots.by_ref() {
            if let Some(item) = slot.item.as_ref() {
                self.remaining -= 1;
                return Some((SlotId(i as u32), item, slot.origin));
            }
        }
        None
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, Coord);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_with_slot().map(|(_, item, origin)| (item, origin))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ItemIndex;
    use gridstow_core::{Coord, Item, ItemId};
    use gridstow_test_utils::TestItem;

    #[test]
    fn skips_freed_slots_and_is_restartable() {
        let mut index = ItemIndex::new();
        let items: Vec<TestItem> = ["a", "b", "c"].iter().map(|n| TestItem::new(n, 1, 1)).collect();
        let keys: Vec<ItemId> = items.iter().map(|i| i.id()).collect();
        for (n, item) in items.into_iter().enumerate() {
            index.insert(item, Coord::new(n as i32, 0)).unwrap();
        }
        index.remove(keys[1]).unwrap();

        let first: Vec<&str> = index.iter().map(|(i, _)| i.name()).collect();
        let second: Vec<&str> = index.iter().map(|(i, _)| i.name()).collect();
        assert_eq!(first, vec!["a", "c"]);
        assert_eq!(first, second);
        assert_eq!(index.iter().len(), 2);
    }

    #[test]
    fn reports_slot_ids() {
        let mut index = ItemIndex::new();
        let a = TestItem::new("a", 1, 1);
        let slot = index.insert(a, Coord::new(1, 1)).unwrap();
        let mut it = index.iter();
        let (s, item, origin) = it.next_with_slot().unwrap();
        assert_eq!(s, slot);
        assert_eq!(item.name(), "a");
        assert_eq!(origin, Coord::new(1, 1));
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn empty_index_yields_nothing() {
        let index: ItemIndex<TestItem> = ItemIndex::new();
        assert_eq!(index.iter().count(), 0);
        assert_eq!((&index).into_iter().size_hint(), (0, Some(0)));
    }
}
