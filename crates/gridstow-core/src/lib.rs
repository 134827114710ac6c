//! Core types and traits for gridstow grid containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: item identities,
//! grid geometry, the [`Item`] trait implemented by anything that can be
//! placed, and the [`GridObserver`] notification contract.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geom;
pub mod id;
pub mod item;
pub mod observer;

pub use error::GeometryError;
pub use geom::{Coord, Size};
pub use id::{ItemId, ListenerId};
pub use item::Item;
pub use observer::{GridEvent, GridObserver};
