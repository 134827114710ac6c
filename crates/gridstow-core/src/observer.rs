//! Mutation notifications.
//!
//! Containers deliver four notifications to every subscribed
//! [`GridObserver`], synchronously and only after the corresponding state
//! change has fully committed. Failed operations notify nobody.

use crate::geom::Coord;
use crate::id::ItemId;
use crate::item::Item;

/// Receives container mutation notifications.
///
/// Every method has an empty default body; implement only the events
/// you care about. Observers are invoked in subscription order and cannot
/// veto or roll back the mutation they are told about.
///
/// # Object safety
///
/// This trait is object-safe; containers store observers as
/// `Box<dyn GridObserver<T>>`.
pub trait GridObserver<T: Item> {
    /// `item` was placed with its top-left cell at `origin`.
    fn on_added(&mut self, item: &T, origin: Coord) {
        let _ = (item, origin);
    }

    /// `item` was removed; `origin` is the position it vacated.
    fn on_removed(&mut self, item: &T, origin: Coord) {
        let _ = (item, origin);
    }

    /// `item` now has its top-left cell at `new_origin`.
    fn on_moved(&mut self, item: &T, new_origin: Coord) {
        let _ = (item, new_origin);
    }

    /// Every item was removed at once.
    fn on_cleared(&mut self) {}
}

/// Owned record of a single notification.
///
/// Handy for observers that log or replay what happened to a container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridEvent {
    /// See [`GridObserver::on_added`].
    Added {
        /// The placed item.
        id: ItemId,
        /// Its origin.
        origin: Coord,
    },
    /// See [`GridObserver::on_removed`].
    Removed {
        /// The removed item.
        id: ItemId,
        /// The origin it vacated.
        origin: Coord,
    },
    /// See [`GridObserver::on_moved`].
    Moved {
        /// The moved item.
        id: ItemId,
        /// Its new origin.
        origin: Coord,
    },
    /// See [`GridObserver::on_cleared`].
    Cleared,
}
