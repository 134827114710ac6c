//! Index-specific error types.

use std::error::Error;
use std::fmt;

use gridstow_core::ItemId;

/// Errors that can occur while inserting into an [`ItemIndex`](crate::ItemIndex).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndexError {
    /// The table cannot grow any further.
    CapacityExceeded {
        /// Number of slots that were needed.
        requested: usize,
        /// Largest supported capacity.
        max: usize,
    },
    /// The item is already present in the index.
    DuplicateKey {
        /// The item that was inserted twice.
        id: ItemId,
    },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { requested, max } => {
                write!(
                    f,
                    "index capacity exceeded: requested {requested} slots, max {max}"
                )
            }
            Self::DuplicateKey { id } => write!(f, "item {id} is already indexed"),
        }
    }
}

impl Error for IndexError {}

/// An insert the index refused. Hands the item back to the caller.
#[derive(Debug)]
pub struct Rejected<T> {
    /// The item that was not inserted.
    pub item: T,
    /// Why it was refused.
    pub reason: IndexError,
}

impl<T> Rejected<T> {
    /// Recover the item.
    pub fn into_item(self) -> T {
        self.item
    }
}

impl<T> fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "insert rejected: {}", self.reason)
    }
}

impl<T: fmt::Debug> Error for Rejected<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.reason)
    }
}
