//! Fixed-size 2D grid container that packs rectangular items.
//!
//! A [`Container`] keeps three views of its contents in lockstep:
//!
//! ```text
//! Container<T>
//! ├── OccupancyGrid   width × height cells, each Option<SlotId>   "what is here"
//! ├── ItemIndex<T>    ItemId → (item, origin), slot arena          "what exists"
//! ├── Observers<T>    added / removed / moved / cleared listeners
//! └── DefragScratch   per-instance sort buffer for optimize_space
//! ```
//!
//! Every mutation validates against the grid first, then updates grid and
//! index together, then notifies observers. The index is the source of
//! truth; the grid is a denormalised acceleration structure.
//!
//! # Failure model
//!
//! Failed placements (overlap, out of bounds, duplicate item) are expected
//! in interactive use and are reported as `false` (or the item handed back
//! by the `try_` variants), never as errors. [`GridError`] is reserved for
//! invalid arguments, out-of-range coordinate queries, missing items on
//! hard accessors, and internal inconsistencies.
//!
//! # Threading
//!
//! Single-threaded and synchronous. Callers that share a container must
//! serialise access themselves.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod container;
mod defrag;
pub mod error;
mod notify;
mod occupancy;
mod placement;
mod render;

#[cfg(test)]
pub(crate) mod compliance;

pub use config::{ConfigError, GridConfig};
pub use container::{Container, Items, Positions};
pub use error::GridError;
