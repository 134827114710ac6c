//! Identity-keyed slot index for gridstow containers.
//!
//! [`ItemIndex`] maps each placed item to its origin coordinate. It is a
//! hash table with separate chaining threaded through a dense slot array:
//!
//! ```text
//! ItemIndex
//! ├── buckets: Vec<Option<SlotId>>   (prime length, chain heads)
//! ├── slots:   Vec<Slot<T>>          (dense prefix, never compacted)
//! │   └── Slot { item, key, hash, origin, next }
//! │            next = chain link while live, free-list link while free
//! └── free_head ──► slot ──► slot ──► None
//! ```
//!
//! # Slot stability
//!
//! A [`SlotId`] stays valid from insertion until the entry is removed.
//! Removal never moves another entry; the vacated slot is pushed onto the
//! free-list and handed out again by the next insert. This lets the
//! occupancy grid store slot IDs per cell instead of item copies.
//!
//! # Growth
//!
//! When every slot is live and the dense array is full, capacity doubles
//! and is rounded up to the next prime, then every live entry is rehashed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hash;
pub mod index;
pub mod iter;
pub mod primes;
pub mod slot;

pub use error::{IndexError, Rejected};
pub use index::ItemIndex;
pub use iter::Iter;
pub use primes::MAX_CAPACITY;
pub use slot::SlotId;
