//! The [`ItemIndex`] hash table.

use gridstow_core::{Coord, Item, ItemId};
use tracing::trace;

use crate::error::{IndexError, Rejected};
use crate::hash::identity_hash;
use crate::iter::Iter;
use crate::primes::{grown_capacity, next_prime, MIN_CAPACITY};
use crate::slot::{Slot, SlotId};

/// Identity-keyed map from placed items to their origins.
///
/// Separate chaining through a dense slot array, with a free-list of
/// reclaimed slots that is drained before the array grows. Lookups,
/// inserts and removals are O(1) amortized; iteration visits live slots in
/// ascending [`SlotId`] order.
///
/// The index owns the items it holds. Keys are taken from
/// [`Item::id`] at insertion time.
#[derive(Clone, Debug)]
pub struct ItemIndex<T> {
    /// Chain heads. Empty until the first insert; afterwards a prime length.
    buckets: Vec<Option<SlotId>>,
    /// Dense slot array. `slots.len() <= buckets.len()` always.
    slots: Vec<Slot<T>>,
    /// Head of the free-list threaded through `Slot::next`.
    free_head: Option<SlotId>,
    /// Number of slots on the free-list.
    free_count: usize,
}

impl<T: Item> ItemIndex<T> {
    /// Create an empty index. No memory is allocated until the first insert.
    pub fn new() -> Self {
        Self {
            buckets: Vec::new(),
            slots: Vec::new(),
            free_head: None,
            free_count: 0,
        }
    }

    /// Create an empty index able to hold at least `capacity` items
    /// without growing.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut index = Self::new();
        if capacity > 0 {
            index.allocate(next_prime(capacity));
        }
        index
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free_count
    }

    /// Whether the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of slots the table can hold before it must grow.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of freed slots waiting to be reused.
    pub fn free_count(&self) -> usize {
        self.free_count
    }

    /// Whether an item with this identity is indexed.
    pub fn contains(&self, key: ItemId) -> bool {
        self.find(key).is_some()
    }

    /// The slot holding `key`, if present.
    pub fn slot_of(&self, key: ItemId) -> Option<SlotId> {
        self.find(key)
    }

    /// The origin recorded for `key`.
    pub fn origin(&self, key: ItemId) -> Option<Coord> {
        self.find(key).map(|id| self.slots[id.index()].origin)
    }

    /// The item and origin recorded for `key`.
    pub fn get(&self, key: ItemId) -> Option<(&T, Coord)> {
        self.find(key).and_then(|id| self.get_slot(id))
    }

    /// The live entry in `slot`, if any.
    pub fn get_slot(&self, slot: SlotId) -> Option<(&T, Coord)> {
        let s = self.slots.get(slot.index())?;
        s.item.as_ref().map(|item| (item, s.origin))
    }

    /// Overwrite the origin recorded for `key`. Returns `false` if absent.
    pub fn set_origin(&mut self, key: ItemId, origin: Coord) -> bool {
        match self.find(key) {
            Some(id) => {
                self.slots[id.index()].origin = origin;
                true
            }
            None => false,
        }
    }

    /// Insert `item` at `origin`.
    ///
    /// Reuses the most recently freed slot if one exists; otherwise appends,
    /// growing the table first when the dense array is full. On failure the
    /// item is handed back inside [`Rejected`].
    pub fn insert(&mut self, item: T, origin: Coord) -> Result<SlotId, Rejected<T>> {
        let key = item.id();
        if self.buckets.is_empty() {
            self.allocate(MIN_CAPACITY);
        }
        if self.contains(key) {
            return Err(Rejected {
                item,
                reason: IndexError::DuplicateKey { id: key },
            });
        }

        let slot_id = match self.free_head {
            Some(free) => {
                self.free_head = self.slots[free.index()].next;
                self.free_count -= 1;
                free
            }
            None => {
                if self.slots.len() == self.buckets.len() {
                    if let Err(reason) = self.grow() {
                        return Err(Rejected { item, reason });
                    }
                }
                SlotId(self.slots.len() as u32)
            }
        };

        let hash = identity_hash(key);
        let bucket = self.bucket_of(hash);
        let slot = Slot {
            item: Some(item),
            key,
            hash,
            origin,
            next: self.buckets[bucket],
        };
        if slot_id.index() == self.slots.len() {
            self.slots.push(slot);
        } else {
            self.slots[slot_id.index()] = slot;
        }
        self.buckets[bucket] = Some(slot_id);
        Ok(slot_id)
    }

    /// Remove `key`, returning the item and the origin it occupied.
    ///
    /// Removing the last entry resets the table (keeping its capacity) so
    /// no stale chain links survive.
    pub fn remove(&mut self, key: ItemId) -> Option<(T, Coord)> {
        if self.buckets.is_empty() {
            return None;
        }
        let hash = identity_hash(key);
        let bucket = self.bucket_of(hash);

        let mut prev: Option<SlotId> = None;
        let mut cursor = self.buckets[bucket];
        while let Some(id) = cursor {
            let slot = &self.slots[id.index()];
            let next = slot.next;
            if slot.hash == hash && slot.key == key {
                match prev {
                    None => self.buckets[bucket] = next,
                    Some(p) => self.slots[p.index()].next = next,
                }
                let slot = &mut self.slots[id.index()];
                let item = slot.item.take()?;
                let origin = slot.origin;
                slot.next = self.free_head;
                self.free_head = Some(id);
                self.free_count += 1;

                if self.is_empty() {
                    self.reset();
                }
                return Some((item, origin));
            }
            prev = cursor;
            cursor = next;
        }
        None
    }

    /// Drop every entry. Capacity is retained.
    pub fn clear(&mut self) {
        self.reset();
    }

    /// Move every live entry into `out` in slot order, leaving the index
    /// empty. Capacity is retained.
    pub fn drain_into(&mut self, out: &mut Vec<(T, Coord)>) {
        out.reserve(self.len());
        out.extend(
            self.slots
                .drain(..)
                .filter_map(|slot| {
                    let origin = slot.origin;
                    slot.item.map(|item| (item, origin))
                }),
        );
        self.reset();
    }

    /// Iterate live entries in ascending slot order.
    ///
    /// The iterator borrows the index, so the index cannot be mutated while
    /// a traversal is in progress. Call `iter()` again to restart.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots, self.len())
    }

    fn find(&self, key: ItemId) -> Option<SlotId> {
        if self.buckets.is_empty() {
            return None;
        }
        let hash = identity_hash(key);
        let mut cursor = self.buckets[self.bucket_of(hash)];
        while let Some(id) = cursor {
            let slot = &self.slots[id.index()];
            if slot.hash == hash && slot.key == key && slot.is_live() {
                return Some(id);
            }
            cursor = slot.next;
        }
        None
    }

    fn bucket_of(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }

    fn allocate(&mut self, capacity: usize) {
        self.buckets = vec![None; capacity];
        self.slots = Vec::with_capacity(capacity);
        self.free_head = None;
        self.free_count = 0;
    }

    fn reset(&mut self) {
        self.buckets.fill(None);
        self.slots.clear();
        self.free_head = None;
        self.free_count = 0;
    }

    /// Grow to the next prime at or above twice the current capacity and
    /// rehash. Only called with an empty free-list, so every slot is live.
    fn grow(&mut self) -> Result<(), IndexError> {
        let old = self.buckets.len();
        let new_capacity = grown_capacity(old)?;
        trace!(old, new_capacity, "growing item index");

        self.slots.reserve_exact(new_capacity - self.slots.len());
        self.buckets.clear();
        self.buckets.resize(new_capacity, None);
        for i in 0..self.slots.len() {
            let bucket = self.bucket_of(self.slots[i].hash);
            self.slots[i].next = self.buckets[bucket];
            self.buckets[bucket] = Some(SlotId(i as u32));
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn chain_len(&self, key: ItemId) -> usize {
        if self.buckets.is_empty() {
            return 0;
        }
        let mut len = 0;
        let mut cursor = self.buckets[self.bucket_of(identity_hash(key))];
        while let Some(id) = cursor {
            len += 1;
            cursor = self.slots[id.index()].next;
        }
        len
    }
}

impl<T: Item> Default for ItemIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Item> IntoIterator for &'a ItemIndex<T> {
    type Item = (&'a T, Coord);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
