//! Slot records and their stable identifiers.

use std::fmt;

use gridstow_core::{Coord, ItemId};

/// Position of an entry in the index's dense slot array.
///
/// Valid from the insert that returned it until that entry is removed or
/// the index is cleared. Removing other entries never invalidates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub(crate) u32);

impl SlotId {
    /// The slot's position in the dense array.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.0)
    }
}

/// A single index entry, live or free.
///
/// `next` is overloaded: while the slot is live it links to the next slot
/// in the same bucket chain; once freed it links to the next free slot.
#[derive(Clone, Debug)]
pub(crate) struct Slot<T> {
    /// The placed item; `None` once the slot has been freed.
    pub(crate) item: Option<T>,
    /// Identity of the item last stored here.
    pub(crate) key: ItemId,
    /// Cached `identity_hash(key)`, reused on rehash.
    pub(crate) hash: u64,
    /// Top-left cell of the item's rectangle.
    pub(crate) origin: Coord,
    pub(crate) next: Option<SlotId>,
}

impl<T> Slot<T> {
    pub(crate) fn is_live(&self) -> bool {
        self.item.is_some()
    }
}
