//! The [`Container`] type: construction, queries, removal, and moves.
//!
//! Placement lives in `placement.rs`, defragmentation in `defrag.rs` and
//! text rendering in `render.rs`; each adds its own `impl` block.

use std::fmt;
use std::iter::FusedIterator;

use gridstow_core::{Coord, GridObserver, Item, ItemId, ListenerId};
use gridstow_index::{ItemIndex, Iter};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::config::GridConfig;
use crate::defrag::DefragScratch;
use crate::error::GridError;
use crate::notify::Observers;
use crate::occupancy::OccupancyGrid;

/// Cells covered by one item, in row-major order.
///
/// Inline for footprints up to eight cells.
pub type Positions = SmallVec<[Coord; 8]>;

/// A fixed-size grid that packs rectangular items without overlap.
///
/// Items are keyed by [`Item::id`]. The container owns what it holds;
/// store `Rc<T>` (or another shared handle implementing [`Item`]) to keep
/// items reachable from elsewhere.
///
/// # Examples
///
/// ```
/// use gridstow_container::Container;
/// use gridstow_core::{Coord, Item, ItemId, Size};
///
/// struct Crate { id: ItemId }
/// impl Item for Crate {
///     fn id(&self) -> ItemId { self.id }
///     fn size(&self) -> Size { Size::new(2, 2).unwrap() }
///     fn name(&self) -> &str { "crate" }
/// }
///
/// let mut grid = Container::new(4, 4).unwrap();
/// let id = ItemId::next();
/// assert!(grid.add_item(Crate { id }));
/// assert_eq!(grid.origin_of(id), Some(Coord::new(0, 0)));
/// assert!(grid.move_item(id, Coord::new(2, 2)));
/// assert_eq!(grid.to_string(), "....\n....\n..cc\n..cc");
/// ```
pub struct Container<T: Item> {
    pub(crate) grid: OccupancyGrid,
    pub(crate) index: ItemIndex<T>,
    pub(crate) observers: Observers<T>,
    pub(crate) scratch: DefragScratch,
}

impl<T: Item> Container<T> {
    /// Create an empty `width × height` container.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        Self::with_config(GridConfig::new(width, height))
    }

    /// Create an empty container from a validated config.
    pub fn with_config(config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self {
            grid: OccupancyGrid::new(config.width, config.height),
            index: ItemIndex::with_capacity(config.initial_capacity),
            observers: Observers::new(),
            scratch: DefragScratch::default(),
        })
    }

    /// Create a container holding `items`, each at its given origin.
    ///
    /// Fails with [`GridError::InvalidPlacement`] on the first item that is
    /// out of bounds, overlaps an earlier one, or repeats an identity.
    pub fn with_placed<I>(width: u32, height: u32, items: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (T, Coord)>,
    {
        let mut container = Self::new(width, height)?;
        for (item, origin) in items {
            let id = item.id();
            if container.try_add_item_at(item, origin).is_err() {
                return Err(GridError::InvalidPlacement { id, origin });
            }
        }
        Ok(container)
    }

    /// Create a container holding `items`, each at the first free position
    /// at the time it is added.
    ///
    /// Fails with [`GridError::NoRoom`] on the first item that does not fit.
    pub fn with_items<I>(width: u32, height: u32, items: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut container = Self::new(width, height)?;
        for item in items {
            let id = item.id();
            if container.try_add_item(item).is_err() {
                return Err(GridError::NoRoom { id });
            }
        }
        Ok(container)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Number of placed items.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether no item is placed.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of cells covered by some item.
    pub fn occupied_cells(&self) -> usize {
        self.grid.occupied_cells()
    }

    /// Number of empty cells.
    pub fn free_cells(&self) -> usize {
        self.grid.cells().len() - self.occupied_cells()
    }

    /// Whether the item is placed in this container. O(1).
    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains(id)
    }

    /// The placed item with this identity.
    pub fn get(&self, id: ItemId) -> Option<&T> {
        self.index.get(id).map(|(item, _)| item)
    }

    /// Top-left cell of the item's rectangle.
    pub fn origin_of(&self, id: ItemId) -> Option<Coord> {
        self.index.origin(id)
    }

    /// Whether `coord` is covered by an item.
    ///
    /// Fails with [`GridError::CoordOutOfBounds`] outside the grid.
    pub fn is_occupied(&self, coord: Coord) -> Result<bool, GridError> {
        self.grid.is_occupied(coord)
    }

    /// Whether `coord` is empty.
    ///
    /// Fails with [`GridError::CoordOutOfBounds`] outside the grid.
    pub fn is_free(&self, coord: Coord) -> Result<bool, GridError> {
        self.grid.is_occupied(coord).map(|occupied| !occupied)
    }

    /// The item covering `coord`, if any.
    ///
    /// Fails with [`GridError::CoordOutOfBounds`] outside the grid.
    pub fn get_item(&self, coord: Coord) -> Result<Option<&T>, GridError> {
        let i = self.grid.check(coord)?;
        Ok(self.grid.cells()[i]
            .and_then(|slot| self.index.get_slot(slot))
            .map(|(item, _)| item))
    }

    /// The item covering `coord`; `None` when empty or out of bounds.
    pub fn try_get_item(&self, coord: Coord) -> Option<&T> {
        self.grid
            .cell(coord)
            .and_then(|slot| self.index.get_slot(slot))
            .map(|(item, _)| item)
    }

    /// Every cell the item covers, row by row.
    ///
    /// Fails with [`GridError::ItemNotFound`] if the item is not placed.
    pub fn positions(&self, id: ItemId) -> Result<Positions, GridError> {
        self.try_positions(id).ok_or(GridError::ItemNotFound { id })
    }

    /// Every cell the item covers, row by row; `None` if not placed.
    pub fn try_positions(&self, id: ItemId) -> Option<Positions> {
        let (item, origin) = self.index.get(id)?;
        let size = item.size();
        let mut out = Positions::with_capacity(size.area() as usize);
        for dy in 0..size.height() as i32 {
            for dx in 0..size.width() as i32 {
                out.push(Coord::new(origin.x + dx, origin.y + dy));
            }
        }
        Some(out)
    }

    /// Remove an item, returning it with the origin it vacated.
    ///
    /// Returns `None` (and notifies nobody) if the item is not placed.
    pub fn remove_item(&mut self, id: ItemId) -> Option<(T, Coord)> {
        let (item, origin) = self.index.remove(id)?;
        self.grid.erase(origin, item.size());
        debug!(item = %id, %origin, "item removed");
        self.observers.removed(&item, origin);
        Some((item, origin))
    }

    /// Move a placed item so its top-left cell is at `new_origin`.
    ///
    /// The new rectangle may overlap the item's current one. Returns
    /// `false`, leaving grid and index untouched, when the item is not
    /// placed, the target is out of bounds, or another item is in the way.
    pub fn move_item(&mut self, id: ItemId, new_origin: Coord) -> bool {
        let Some(slot) = self.index.slot_of(id) else {
            return false;
        };
        let Some((item, old_origin)) = self.index.get_slot(slot) else {
            return false;
        };
        let size = item.size();
        if !self.grid.rect_in_bounds(new_origin, size) {
            trace!(item = %id, %new_origin, "move rejected: out of bounds");
            return false;
        }

        // Vacate first so the item does not block its own destination.
        self.grid.erase(old_origin, size);
        if !self.grid.is_region_free(new_origin, size) {
            self.grid.fill(old_origin, size, slot);
            trace!(item = %id, %new_origin, "move rejected: destination occupied");
            return false;
        }
        self.grid.fill(new_origin, size, slot);
        self.index.set_origin(id, new_origin);
        debug!(item = %id, from = %old_origin, to = %new_origin, "item moved");

        if let Some((item, _)) = self.index.get_slot(slot) {
            self.observers.moved(item, new_origin);
        }
        true
    }

    /// Remove every item. Notifies `on_cleared` once, and only if the
    /// container was not already empty.
    pub fn clear(&mut self) {
        if self.index.is_empty() {
            return;
        }
        let removed = self.index.len();
        self.index.clear();
        self.grid.clear_all();
        debug!(removed, "container cleared");
        self.observers.cleared();
    }

    /// Number of placed items whose name equals `name`.
    pub fn item_count(&self, name: &str) -> usize {
        self.index
            .iter()
            .filter(|(item, _)| item.name() == name)
            .count()
    }

    /// Placed items in slot order.
    ///
    /// Restartable: each call begins a fresh traversal. The iterator
    /// borrows the container, so it cannot be mutated mid-traversal.
    pub fn iter(&self) -> Items<'_, T> {
        Items {
            inner: self.index.iter(),
        }
    }

    /// Placed items with their origins, in slot order.
    pub fn iter_placed(&self) -> Iter<'_, T> {
        self.index.iter()
    }

    /// Copy the occupancy grid into `out`, row-major, as item identities.
    ///
    /// `out` must hold exactly `width * height` cells.
    pub fn copy_grid_to(&self, out: &mut [Option<ItemId>]) -> Result<(), GridError> {
        let cells = self.grid.cells();
        if out.len() != cells.len() {
            return Err(GridError::BufferSizeMismatch {
                expected: cells.len(),
                actual: out.len(),
            });
        }
        for (dst, cell) in out.iter_mut().zip(cells) {
            *dst = cell
                .and_then(|slot| self.index.get_slot(slot))
                .map(|(item, _)| item.id());
        }
        Ok(())
    }

    /// Register an observer. Notifications are delivered in subscription
    /// order.
    pub fn subscribe(&mut self, observer: Box<dyn GridObserver<T>>) -> ListenerId {
        self.observers.subscribe(observer)
    }

    /// Remove an observer, handing it back.
    pub fn unsubscribe(&mut self, id: ListenerId) -> Option<Box<dyn GridObserver<T>>> {
        self.observers.unsubscribe(id)
    }

    /// Number of subscribed observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

/// Copies produce an independent container holding clones of every item.
///
/// Item identities are preserved (a clone of an item keeps its
/// [`ItemId`]), so the copy answers `contains` the same way the original
/// does. With `T = Rc<_>` the copy aliases the original's items; with an
/// owned `T` it holds value copies. Observers are not copied.
impl<T: Item + Clone> Clone for Container<T> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid.clone(),
            index: self.index.clone(),
            observers: Observers::new(),
            scratch: DefragScratch::default(),
        }
    }
}

impl<T: Item> fmt::Debug for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("items", &self.len())
            .field("occupied_cells", &self.occupied_cells())
            .field("observers", &self.observer_count())
            .finish()
    }
}

/// Iterator over placed items. Created by [`Container::iter`].
pub struct Items<'a, T> {
    inner: Iter<'a, T>,
}

impl<'a, T> Iterator for Items<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(item, _)| item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Items<'_, T> {}

impl<T> FusedIterator for Items<'_, T> {}

impl<'a, T: Item> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = Items<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
