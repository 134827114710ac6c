//! The [`Item`] trait: anything that can be placed on a grid.

use std::rc::Rc;
use std::sync::Arc;

use crate::geom::Size;
use crate::id::ItemId;

/// A rectangular, identity-bearing value that a container can hold.
///
/// # Contract
///
/// - `id()` is stable for the item's lifetime and distinct from every other
///   item's ID. Containers use it as the sole key.
/// - `size()` never changes while the item is placed.
/// - `name()` is for display and name-based counting only.
///
/// Blanket impls cover `&T`, `Box<T>`, `Rc<T>` and `Arc<T>` so a container
/// can hold shared handles to items owned elsewhere.
pub trait Item {
    /// Stable identity used for indexing.
    fn id(&self) -> ItemId;

    /// Footprint in cells.
    fn size(&self) -> Size;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Number of cells covered (`size().area()`).
    fn cell_count(&self) -> u32 {
        self.size().area()
    }
}

impl<T: Item + ?Sized> Item for &T {
    fn id(&self) -> ItemId {
        (**self).id()
    }

    fn size(&self) -> Size {
        (**self).size()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Item + ?Sized> Item for Box<T> {
    fn id(&self) -> ItemId {
        (**self).id()
    }

    fn size(&self) -> Size {
        (**self).size()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Item + ?Sized> Item for Rc<T> {
    fn id(&self) -> ItemId {
        (**self).id()
    }

    fn size(&self) -> Size {
        (**self).size()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Item + ?Sized> Item for Arc<T> {
    fn id(&self) -> ItemId {
        (**self).id()
    }

    fn size(&self) -> Size {
        (**self).size()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
