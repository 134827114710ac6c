//! Grid coordinates and item extents.

use std::fmt;

use crate::error::GeometryError;

/// A cell coordinate on a grid.
///
/// `x` grows to the right, `y` grows downwards; `(0, 0)` is the top-left
/// cell. Signed so that callers can express (and have rejected) positions
/// left of or above the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Coord {
    /// The top-left cell.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    /// Create a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height of a rectangular item, in cells.
///
/// Both extents are strictly positive; [`Size::new`] is the only way to
/// build one, so every `Size` in circulation is valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    width: u32,
    height: u32,
}

impl Size {
    /// A single cell.
    pub const UNIT: Size = Size {
        width: 1,
        height: 1,
    };

    /// Create a size, rejecting zero extents and areas that overflow `u32`.
    pub fn new(width: u32, height: u32) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::ZeroExtent { width, height });
        }
        if width.checked_mul(height).is_none() {
            return Err(GeometryError::AreaOverflow { width, height });
        }
        Ok(Self { width, height })
    }

    /// Extent along `x`.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Extent along `y`.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells covered (`width * height`).
    pub fn area(&self) -> u32 {
        // Cannot overflow: checked in `new`.
        self.width * self.height
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
