//! Observer registry.

use gridstow_core::{Coord, GridObserver, Item, ListenerId};
use indexmap::IndexMap;

/// Subscribed observers in registration order.
///
/// Delivery is synchronous. There is no error channel back to the
/// container: once a mutation has committed, observers are only told.
pub(crate) struct Observers<T: Item> {
    next_id: u64,
    listeners: IndexMap<ListenerId, Box<dyn GridObserver<T>>>,
}

impl<T: Item> Observers<T> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            listeners: IndexMap::new(),
        }
    }

    pub(crate) fn subscribe(&mut self, observer: Box<dyn GridObserver<T>>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, observer);
        id
    }

    /// `shift_remove` keeps the remaining observers in registration order.
    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> Option<Box<dyn GridObserver<T>>> {
        self.listeners.shift_remove(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn added(&mut self, item: &T, origin: Coord) {
        for observer in self.listeners.values_mut() {
            observer.on_added(item, origin);
        }
    }

    pub(crate) fn removed(&mut self, item: &T, origin: Coord) {
        for observer in self.listeners.values_mut() {
            observer.on_removed(item, origin);
        }
    }

    pub(crate) fn moved(&mut self, item: &T, new_origin: Coord) {
        for observer in self.listeners.values_mut() {
            observer.on_moved(item, new_origin);
        }
    }

    pub(crate) fn cleared(&mut self) {
        for observer in self.listeners.values_mut() {
            observer.on_cleared();
        }
    }
}

impl<T: Item> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstow_core::GridEvent;
    use gridstow_test_utils::{LabelObserver, RecordingObserver, TestItem};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn delivers_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers: Observers<TestItem> = Observers::new();
        for label in ["first", "second", "third"] {
            observers.subscribe(Box::new(LabelObserver {
                label,
                seen: Rc::clone(&seen),
            }));
        }
        observers.added(&TestItem::new("x", 1, 1), Coord::ORIGIN);
        assert_eq!(*seen.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn unsubscribe_preserves_order_of_the_rest() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers: Observers<TestItem> = Observers::new();
        let ids: Vec<ListenerId> = ["a", "b", "c"]
            .into_iter()
            .map(|label| {
                observers.subscribe(Box::new(LabelObserver {
                    label,
                    seen: Rc::clone(&seen),
                }))
            })
            .collect();
        assert!(observers.unsubscribe(ids[0]).is_some());
        assert!(observers.unsubscribe(ids[0]).is_none());
        assert_eq!(observers.len(), 2);

        observers.added(&TestItem::new("x", 1, 1), Coord::ORIGIN);
        assert_eq!(*seen.borrow(), vec!["b", "c"]);
    }

    #[test]
    fn listener_ids_are_not_reused() {
        let mut observers: Observers<TestItem> = Observers::new();
        let (rec, _log) = RecordingObserver::new();
        let a = observers.subscribe(Box::new(rec));
        observers.unsubscribe(a);
        let (rec, _log) = RecordingObserver::new();
        let b = observers.subscribe(Box::new(rec));
        assert_ne!(a, b);
    }

    #[test]
    fn each_port_reaches_recorder() {
        let mut observers: Observers<TestItem> = Observers::new();
        let (rec, log) = RecordingObserver::new();
        observers.subscribe(Box::new(rec));
        let item = TestItem::new("x", 1, 1);
        let id = item.id();

        observers.added(&item, Coord::new(1, 1));
        observers.moved(&item, Coord::new(2, 1));
        observers.removed(&item, Coord::new(2, 1));
        observers.cleared();

        assert_eq!(
            *log.borrow(),
            vec![
                GridEvent::Added {
                    id,
                    origin: Coord::new(1, 1)
                },
                GridEvent::Moved {
                    id,
                    origin: Coord::new(2, 1)
                },
                GridEvent::Removed {
                    id,
                    origin: Coord::new(2, 1)
                },
                GridEvent::Cleared,
            ]
        );
    }
}
