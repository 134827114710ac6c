//! Container error types.

use std::error::Error;
use std::fmt;

use gridstow_core::{Coord, ItemId};

use crate::config::ConfigError;

/// Errors from container construction and hard accessors.
///
/// Placement failures are deliberately absent: they are reported as
/// `false` by the add/move operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid configuration was rejected.
    Config(ConfigError),
    /// A coordinate lies outside the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// The item is not placed in this container.
    ItemNotFound {
        /// The missing item.
        id: ItemId,
    },
    /// A pre-populated container could not place an item at its requested
    /// origin.
    InvalidPlacement {
        /// The item that could not be placed.
        id: ItemId,
        /// The requested origin.
        origin: Coord,
    },
    /// A pre-populated container found no free position for an item.
    NoRoom {
        /// The item that did not fit.
        id: ItemId,
    },
    /// Defragmentation could not re-place an item that fitted before.
    ///
    /// Indicates a broken invariant, not a caller mistake. The container's
    /// previous layout is restored before this is returned.
    DefragFailed {
        /// The first item that could not be re-placed.
        id: ItemId,
    },
    /// A caller-supplied output buffer does not match the grid's cell count.
    BufferSizeMismatch {
        /// Required length (`width * height`).
        expected: usize,
        /// Supplied length.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid grid config: {e}"),
            Self::CoordOutOfBounds {
                coord,
                width,
                height,
            } => {
                write!(
                    f,
                    "coordinate {coord} out of bounds: [0, {width}) x [0, {height})"
                )
            }
            Self::ItemNotFound { id } => write!(f, "item {id} is not in the container"),
            Self::InvalidPlacement { id, origin } => {
                write!(f, "item {id} cannot be placed at {origin}")
            }
            Self::NoRoom { id } => write!(f, "no free position for item {id}"),
            Self::DefragFailed { id } => {
                write!(f, "defragmentation could not re-place item {id}")
            }
            Self::BufferSizeMismatch { expected, actual } => {
                write!(f, "buffer holds {actual} cells, grid has {expected}")
            }
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for GridError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
