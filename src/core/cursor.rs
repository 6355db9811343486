//! Cursor state
//!
//! Tracks the cell the next glyph is drawn into and whether the flashing
//! cursor indicator is shown there.

use serde::{Deserialize, Serialize};

use super::layout::{HEIGHT, WIDTH};

/// Result of normalising the cursor after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Cursor is inside the display
    None,
    /// Cursor ran off the bottom row; the display must scroll up one row
    Scroll,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Column position (0-indexed)
    pub col: usize,
    /// Row position (0-indexed)
    pub row: usize,
    /// Whether the flashing indicator is painted at the cursor
    pub visible: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            col: 0,
            row: 0,
            visible: true,
        }
    }
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn carriage_return(&mut self) {
        self.col = 0;
    }

    /// Advance one row, then return to column 0
    pub fn newline(&mut self) {
        self.row += 1;
        self.carriage_return();
    }

    /// Step right after a glyph was drawn
    pub fn advance(&mut self) {
        self.col += 1;
    }

    /// Wrap at the right edge and clamp at the bottom edge.
    ///
    /// The cursor may sit one past the last column or row between a move and
    /// this call; afterwards it is always inside the display.
    pub fn normalize(&mut self) -> Overflow {
        if self.col >= WIDTH {
            self.col = 0;
            self.row += 1;
        }
        if self.row >= HEIGHT {
            self.row = HEIGHT - 1;
            return Overflow::Scroll;
        }
        Overflow::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_default() {
        let cursor = Cursor::new();
        assert_eq!((cursor.col, cursor.row), (0, 0));
        assert!(cursor.visible);
    }

    #[test]
    fn test_wrap_at_right_edge() {
        let mut cursor = Cursor::new();
        cursor.col = WIDTH - 1;
        cursor.advance();
        assert_eq!(cursor.normalize(), Overflow::None);
        assert_eq!((cursor.col, cursor.row), (0, 1));
    }

    #[test]
    fn test_newline_resets_column() {
        let mut cursor = Cursor::new();
        cursor.col = 10;
        cursor.row = 3;
        cursor.newline();
        assert_eq!((cursor.col, cursor.row), (0, 4));
    }

    #[test]
    fn test_bottom_overflow_requests_scroll() {
        let mut cursor = Cursor::new();
        cursor.row = HEIGHT - 1;
        cursor.newline();
        assert_eq!(cursor.normalize(), Overflow::Scroll);
        assert_eq!((cursor.col, cursor.row), (0, HEIGHT - 1));
    }

    #[test]
    fn test_wrap_on_last_cell_scrolls() {
        let mut cursor = Cursor::new();
        cursor.col = WIDTH - 1;
        cursor.row = HEIGHT - 1;
        cursor.advance();
        assert_eq!(cursor.normalize(), Overflow::Scroll);
        assert_eq!((cursor.col, cursor.row), (0, HEIGHT - 1));
    }
}
