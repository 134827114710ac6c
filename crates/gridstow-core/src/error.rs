//! Error types for geometry construction.

use std::error::Error;
use std::fmt;

/// Errors arising from constructing grid geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// A size with a zero width or height was requested.
    ZeroExtent {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// The requested extents overflow the cell count representable by `u32`.
    AreaOverflow {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroExtent { width, height } => {
                write!(f, "size {width}x{height} has a zero extent")
            }
            Self::AreaOverflow { width, height } => {
                write!(f, "size {width}x{height} overflows the cell count")
            }
        }
    }
}

impl Error for GeometryError {}
