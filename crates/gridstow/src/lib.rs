//! gridstow: a fixed-size 2D grid that packs rectangular items.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all gridstow sub-crates. For most users, adding `gridstow` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridstow::prelude::*;
//!
//! #[derive(Clone)]
//! struct Loot { id: ItemId, name: &'static str, size: Size }
//!
//! impl Item for Loot {
//!     fn id(&self) -> ItemId { self.id }
//!     fn size(&self) -> Size { self.size }
//!     fn name(&self) -> &str { self.name }
//! }
//!
//! let loot = |name, w, h| Loot { id: ItemId::next(), name, size: Size::new(w, h).unwrap() };
//!
//! let mut bag = Container::new(4, 3)?;
//! let sword = loot("sword", 1, 3);
//! let sword_id = sword.id();
//! assert!(bag.add_item(loot("gem", 1, 1)));
//! assert!(bag.add_item(sword));
//! assert!(bag.add_item(loot("shield", 2, 2)));
//! assert_eq!(bag.to_string(), "gsss\n.sss\n.s..");
//!
//! bag.optimize_space()?;
//! assert_eq!(bag.origin_of(sword_id), Some(Coord::new(2, 0)));
//! assert_eq!(bag.to_string(), "sssg\nsss.\n..s.");
//! # Ok::<(), GridError>(())
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridstow-core` | IDs, coordinates, sizes, the `Item` and `GridObserver` traits |
//! | [`index`] | `gridstow-index` | The identity-keyed item index and its iterator |
//! | [`container`] | `gridstow-container` | `Container`, `GridConfig`, `GridError` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`gridstow-core`).
///
/// Contains [`types::ItemId`], [`types::Coord`], [`types::Size`], and the
/// [`types::Item`] and [`types::GridObserver`] traits.
pub use gridstow_core as types;

/// Identity-keyed item index (`gridstow-index`).
///
/// [`index::ItemIndex`] is what a container uses to answer membership and
/// origin queries in O(1). Usable on its own as a slot-stable map.
pub use gridstow_index as index;

/// The grid container (`gridstow-container`).
pub use gridstow_container as container;

/// Common imports for typical gridstow usage.
///
/// ```rust
/// use gridstow::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use gridstow_core::{Coord, GridEvent, GridObserver, Item, ItemId, ListenerId, Size};

    // Container
    pub use gridstow_container::{Container, GridConfig, Positions};

    // Errors
    pub use gridstow_container::{ConfigError, GridError};
    pub use gridstow_core::GeometryError;
}
