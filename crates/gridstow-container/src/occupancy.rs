//! The occupancy grid: which slot, if any, covers each cell.

use std::ops::Range;

use gridstow_core::{Coord, Size};
use gridstow_index::SlotId;

use crate::error::GridError;

/// Row-major `width × height` matrix of optional slot references.
///
/// `fill` and `erase` are unchecked primitives: callers verify bounds and
/// freedom first. Only the `is_*` queries and [`check`](Self::check) look
/// at bounds.
#[derive(Clone, Debug)]
pub(crate) struct OccupancyGrid {
    width: u32,
    height: u32,
    cells: Vec<Option<SlotId>>,
}

impl OccupancyGrid {
    /// Caller guarantees `width * height` fits in memory (see `GridConfig`).
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn cells(&self) -> &[Option<SlotId>] {
        &self.cells
    }

    pub(crate) fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as i64) < self.width as i64
            && (coord.y as i64) < self.height as i64
    }

    /// Flat index of `coord`, or `CoordOutOfBounds`.
    pub(crate) fn check(&self, coord: Coord) -> Result<usize, GridError> {
        if !self.contains(coord) {
            return Err(GridError::CoordOutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.flat(coord))
    }

    pub(crate) fn is_occupied(&self, coord: Coord) -> Result<bool, GridError> {
        let i = self.check(coord)?;
        Ok(self.cells[i].is_some())
    }

    /// Slot covering `coord`; `None` when empty or out of bounds.
    pub(crate) fn cell(&self, coord: Coord) -> Option<SlotId> {
        if !self.contains(coord) {
            return None;
        }
        self.cells[self.flat(coord)]
    }

    /// Whether the rectangle at `origin` lies entirely within the grid.
    pub(crate) fn rect_in_bounds(&self, origin: Coord, size: Size) -> bool {
        origin.x >= 0
            && origin.y >= 0
            && origin.x as i64 + size.width() as i64 <= self.width as i64
            && origin.y as i64 + size.height() as i64 <= self.height as i64
    }

    /// In bounds and every covered cell empty.
    pub(crate) fn is_region_free(&self, origin: Coord, size: Size) -> bool {
        self.rect_in_bounds(origin, size) && self.first_blocked(origin, size).is_none()
    }

    /// Column of the right-most occupied cell in the first blocked row of
    /// the rectangle, scanning top to bottom. Rectangle must be in bounds.
    pub(crate) fn first_blocked(&self, origin: Coord, size: Size) -> Option<u32> {
        self.row_spans(origin, size).find_map(|span| {
            let start = span.start;
            self.cells[span]
                .iter()
                .rposition(Option::is_some)
                .map(|offset| (start % self.width as usize + offset) as u32)
        })
    }

    pub(crate) fn fill(&mut self, origin: Coord, size: Size, slot: SlotId) {
        for span in self.row_spans(origin, size) {
            self.cells[span].fill(Some(slot));
        }
    }

    pub(crate) fn erase(&mut self, origin: Coord, size: Size) {
        for span in self.row_spans(origin, size) {
            self.cells[span].fill(None);
        }
    }

    pub(crate) fn clear_all(&mut self) {
        self.cells.fill(None);
    }

    pub(crate) fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn flat(&self, coord: Coord) -> usize {
        coord.y as usize * self.width as usize + coord.x as usize
    }

    /// Flat index range of each row the rectangle covers, top to bottom.
    fn row_spans(&self, origin: Coord, size: Size) -> impl Iterator<Item = Range<usize>> {
        let width = self.width as usize;
        let x = origin.x as usize;
        let w = size.width() as usize;
        let y0 = origin.y as usize;
        (y0..y0 + size.height() as usize).map(move |y| {
            let start = y * width + x;
            start..start + w
        })
    }
}
