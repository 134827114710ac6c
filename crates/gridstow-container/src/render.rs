//! Text rendering of the occupancy grid.

use std::fmt::{self, Write};

use gridstow_core::Item;

use crate::container::Container;

/// Glyph for a cell no item covers.
const EMPTY: char = '.';
/// Glyph for an item with an empty name.
const UNNAMED: char = '?';

/// One line per row, each cell drawn as the first character of the
/// covering item's name. Rows are separated by `\n` with no trailing
/// newline.
impl<T: Item> fmt::Display for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width() as usize;
        for (i, cell) in self.grid.cells().iter().enumerate() {
            if i > 0 && i % width == 0 {
                f.write_char('\n')?;
            }
            let glyph = match cell.and_then(|slot| self.index.get_slot(slot)) {
                None => EMPTY,
                Some((item, _)) => item.name().chars().next().unwrap_or(UNNAMED),
            };
            f.write_char(glyph)?;
        }
        Ok(())
    }
}
