//! Container configuration and validation.

use std::error::Error;
use std::fmt;

use gridstow_index::MAX_CAPACITY;

/// Largest supported cell count (`width * height`).
///
/// Every item covers at least one cell, so this also bounds the number of
/// items the index will ever hold; capping it at the index's maximum
/// capacity makes index growth failures unreachable through a container.
pub const MAX_CELLS: u64 = MAX_CAPACITY as u64;

/// Configuration for a [`Container`](crate::Container).
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Number of columns. Must be positive.
    pub width: u32,
    /// Number of rows. Must be positive.
    pub height: u32,
    /// Index slots to reserve up front. `0` defers allocation to the first
    /// insert. Must not exceed `width * height`.
    pub initial_capacity: usize,
}

impl GridConfig {
    /// Default index reservation: allocate lazily.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

    /// Create a config for a `width × height` grid with default settings.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
        }
    }

    /// Reserve index slots for `capacity` items up front.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        let cells = self.cell_count();
        if cells > MAX_CELLS {
            return Err(ConfigError::TooManyCells {
                cells,
                max: MAX_CELLS,
            });
        }
        if self.initial_capacity as u64 > cells {
            return Err(ConfigError::CapacityTooLarge {
                capacity: self.initial_capacity,
                cells,
            });
        }
        Ok(())
    }
}

/// Errors detected by [`GridConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height is zero.
    ZeroDimension {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
    /// The grid has more cells than the item index can address.
    TooManyCells {
        /// Configured cell count.
        cells: u64,
        /// Supported maximum.
        max: u64,
    },
    /// More index slots were requested than the grid could ever fill.
    CapacityTooLarge {
        /// Requested reservation.
        capacity: usize,
        /// Grid cell count.
        cells: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            Self::TooManyCells { cells, max } => {
                write!(f, "grid has {cells} cells, maximum is {max}")
            }
            Self::CapacityTooLarge { capacity, cells } => {
                write!(
                    f,
                    "initial capacity {capacity} exceeds the grid's {cells} cells"
                )
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GridConfig::new(10, 6);
        assert_eq!(config.cell_count(), 60);
        assert_eq!(config.initial_capacity, GridConfig::DEFAULT_INITIAL_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(
            GridConfig::new(0, 4).validate(),
            Err(ConfigError::ZeroDimension {
                width: 0,
                height: 4
            })
        );
        assert!(GridConfig::new(4, 0).validate().is_err());
    }

    #[test]
    fn oversized_grid_rejected() {
        let err = GridConfig::new(u32::MAX, u32::MAX).validate().unwrap_err();
        assert!(matches!(err, ConfigError::TooManyCells { .. }));
    }

    #[test]
    fn capacity_bounded_by_cells() {
        assert!(GridConfig::new(2, 2)
            .with_initial_capacity(4)
            .validate()
            .is_ok());
        assert_eq!(
            GridConfig::new(2, 2).with_initial_capacity(5).validate(),
            Err(ConfigError::CapacityTooLarge {
                capacity: 5,
                cells: 4
            })
        );
    }
}
