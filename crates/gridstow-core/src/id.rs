//! Strongly-typed identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`ItemId`] allocation.
static ITEM_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a placeable item.
///
/// Allocated from a monotonic atomic counter via [`ItemId::next`]. Two
/// items built separately always carry different IDs, even when every
/// other attribute matches; containers key their index on this value and
/// never on item contents.
///
/// Cloning an item is expected to preserve its ID: the clone *is* the same
/// item as far as a container is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    /// Allocate a fresh, unique item ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(ITEM_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap a raw value, e.g. an ID restored from an external catalogue.
    ///
    /// The caller is responsible for not mixing raw IDs with ones handed
    /// out by [`ItemId::next`].
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw integer value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle returned when an observer subscribes to a container.
///
/// Pass it back to unsubscribe. IDs are per-container and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ListenerId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_ids_are_distinct_and_increasing() {
        let a = ItemId::next();
        let b = ItemId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn raw_round_trip() {
        assert_eq!(ItemId::from_raw(77).get(), 77);
        assert_eq!(ItemId::from_raw(77).to_string(), "#77");
    }
}
