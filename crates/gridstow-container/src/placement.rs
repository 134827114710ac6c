//! First-fit placement search and the add operations.

use gridstow_core::{Coord, Item, Size};
use tracing::{debug, error, trace};

use crate::container::Container;
use crate::occupancy::OccupancyGrid;

/// First free origin for `size`, scanning rows top to bottom and columns
/// left to right.
///
/// When a candidate is blocked, every origin up to and including the
/// right-most blocked column in its first blocked row is blocked too, so
/// the scan resumes one past it.
pub(crate) fn find_free_origin(grid: &OccupancyGrid, size: Size) -> Option<Coord> {
    let (w, h) = (size.width(), size.height());
    if w > grid.width() || h > grid.height() {
        return None;
    }
    let max_x = grid.width() - w;
    let max_y = grid.height() - h;
    for y in 0..=max_y {
        let mut x = 0;
        while x <= max_x {
            let origin = Coord::new(x as i32, y as i32);
            match grid.first_blocked(origin, size) {
                None => return Some(origin),
                Some(col) => x = col + 1,
            }
        }
    }
    None
}

impl<T: Item> Container<T> {
    /// First free origin for an item of `size`, or `None` if it fits
    /// nowhere. Favors low `y`, then low `x`.
    pub fn find_free_position(&self, size: Size) -> Option<Coord> {
        find_free_origin(&self.grid, size)
    }

    /// [`find_free_position`](Self::find_free_position) for the item's size.
    pub fn find_free_position_for(&self, item: &T) -> Option<Coord> {
        self.find_free_position(item.size())
    }

    /// Whether `item` could be placed at `origin`: it is not already in
    /// the container, and its rectangle is in bounds and unoccupied.
    pub fn can_add_item(&self, item: &T, origin: Coord) -> bool {
        !self.index.contains(item.id()) && self.grid.is_region_free(origin, item.size())
    }

    /// Place `item` with its top-left cell at `origin`.
    ///
    /// Returns `false` (dropping `item`) if [`can_add_item`](Self::can_add_item)
    /// does not hold. Use [`try_add_item_at`](Self::try_add_item_at) to get
    /// a rejected item back.
    pub fn add_item_at(&mut self, item: T, origin: Coord) -> bool {
        self.try_add_item_at(item, origin).is_ok()
    }

    /// Place `item` at the first free position.
    pub fn add_item(&mut self, item: T) -> bool {
        self.try_add_item(item).is_ok()
    }

    /// Like [`add_item_at`](Self::add_item_at), but hands a rejected item
    /// back.
    pub fn try_add_item_at(&mut self, item: T, origin: Coord) -> Result<Coord, T> {
        if !self.can_add_item(&item, origin) {
            trace!(item = %item.id(), %origin, "placement rejected");
            return Err(item);
        }
        self.place(item, origin)
    }

    /// Like [`add_item`](Self::add_item), but hands a rejected item back.
    pub fn try_add_item(&mut self, item: T) -> Result<Coord, T> {
        if self.index.contains(item.id()) {
            trace!(item = %item.id(), "placement rejected: already contained");
            return Err(item);
        }
        match self.find_free_position_for(&item) {
            Some(origin) => self.place(item, origin),
            None => {
                trace!(item = %item.id(), size = %item.size(), "placement rejected: no room");
                Err(item)
            }
        }
    }

    /// Commit a placement the caller has already validated.
    fn place(&mut self, item: T, origin: Coord) -> Result<Coord, T> {
        let size = item.size();
        let id = item.id();
        let slot = match self.index.insert(item, origin) {
            Ok(slot) => slot,
            Err(rejected) => {
                error!(
                    item = %id,
                    reason = %rejected.reason,
                    "index refused a validated placement"
                );
                return Err(rejected.into_item());
            }
        };
        self.grid.fill(origin, size, slot);
        debug!(item = %id, %origin, %size, "item added");
        if let Some((item, _)) = self.index.get_slot(slot) {
            self.observers.added(item, origin);
        }
        Ok(origin)
    }
}
