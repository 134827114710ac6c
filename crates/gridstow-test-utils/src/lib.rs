//! Test utilities and mock items for gridstow development.
//!
//! Provides [`TestItem`], a minimal [`Item`] implementation, and
//! [`RecordingObserver`], which captures every notification into a shared
//! [`EventLog`] that the test keeps a handle to after handing the observer
//! to a container.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::RefCell;
use std::rc::Rc;

use gridstow_core::{Coord, GridEvent, GridObserver, Item, ItemId, Size};

/// A plain rectangular item with a name.
///
/// Each [`TestItem::new`] call allocates a fresh [`ItemId`]; clones share it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestItem {
    id: ItemId,
    name: String,
    size: Size,
}

impl TestItem {
    /// Panics on a zero extent; test inputs are expected to be valid.
    pub fn new(name: &str, width: u32, height: u32) -> Self {
        Self::with_id(ItemId::next(), name, width, height)
    }

    /// Build an item with a caller-chosen raw ID, e.g. to force bucket
    /// collisions or to model an item catalogue.
    pub fn with_raw_id(raw: u64, name: &str, width: u32, height: u32) -> Self {
        Self::with_id(ItemId::from_raw(raw), name, width, height)
    }

    fn with_id(id: ItemId, name: &str, width: u32, height: u32) -> Self {
        let size = Size::new(width, height)
            .unwrap_or_else(|e| panic!("invalid TestItem size for {name:?}: {e}"));
        Self {
            id,
            name: name.to_string(),
            size,
        }
    }
}

impl Item for TestItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn size(&self) -> Size {
        self.size
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Shared, inspectable list of recorded notifications.
pub type EventLog = Rc<RefCell<Vec<GridEvent>>>;

/// Observer that appends every notification to an [`EventLog`].
pub struct RecordingObserver {
    log: EventLog,
}

impl RecordingObserver {
    /// Returns the observer and a handle to its log.
    pub fn new() -> (Self, EventLog) {
        let log = EventLog::default();
        (Self { log: Rc::clone(&log) }, log)
    }

    /// Record into an existing log, e.g. to interleave several observers.
    pub fn sharing(log: &EventLog) -> Self {
        Self {
            log: Rc::clone(log),
        }
    }
}

impl<T: Item> GridObserver<T> for RecordingObserver {
    fn on_added(&mut self, item: &T, origin: Coord) {
        self.log.borrow_mut().push(GridEvent::Added {
            id: item.id(),
            origin,
        });
    }

    fn on_removed(&mut self, item: &T, origin: Coord) {
        self.log.borrow_mut().push(GridEvent::Removed {
            id: item.id(),
            origin,
        });
    }

    fn on_moved(&mut self, item: &T, new_origin: Coord) {
        self.log.borrow_mut().push(GridEvent::Moved {
            id: item.id(),
            origin: new_origin,
        });
    }

    fn on_cleared(&mut self) {
        self.log.borrow_mut().push(GridEvent::Cleared);
    }
}

/// Observer that only tags the log with its own label, to check
/// delivery order across several observers.
pub struct LabelObserver {
    pub label: &'static str,
    pub seen: Rc<RefCell<Vec<&'static str>>>,
}

impl<T: Item> GridObserver<T> for LabelObserver {
    fn on_added(&mut self, _item: &T, _origin: Coord) {
        self.seen.borrow_mut().push(self.label);
    }
}
