//! Console snapshot for testing and debugging
//!
//! Snapshots capture the complete console state in a serializable format
//! for deterministic testing and debugging.

use serde::{Deserialize, Serialize};

use super::attr::Attribute;
use super::cursor::Cursor;
use super::font::{Font, Glyph};
use super::layout::{HEIGHT, WIDTH};
use super::screen::Screen;
use super::surface::DisplaySurface;

/// A snapshot of the console state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Grid dimensions
    pub cols: usize,
    pub rows: usize,
    /// Cursor state
    pub cursor: Cursor,
    /// Attribute applied to the next glyph
    pub attribute: Attribute,
    /// Number of scrolls since the last clear
    pub scroll_count: u64,
    /// Grid content (row-major order)
    pub cells: Vec<Vec<CellSnapshot>>,
}

/// Snapshot of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub glyph: Glyph,
    pub attr: Attribute,
}

impl Snapshot {
    /// Capture the planes behind `screen` together with the console state
    pub fn capture<S: DisplaySurface>(
        screen: &Screen<S>,
        cursor: &Cursor,
        attribute: Attribute,
        scroll_count: u64,
    ) -> Self {
        let cells = (0..HEIGHT)
            .map(|y| {
                (0..WIDTH)
                    .map(|x| CellSnapshot {
                        glyph: screen.glyph_at(x, y),
                        attr: screen.attribute_at(x, y),
                    })
                    .collect()
            })
            .collect();

        Self {
            cols: WIDTH,
            rows: HEIGHT,
            cursor: cursor.clone(),
            attribute,
            scroll_count,
            cells,
        }
    }

    /// Recover the text on screen by matching each cell against `font`.
    ///
    /// Cells whose pixels match no printable glyph become `?`.
    pub fn to_text(&self, font: &Font) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in &self.cells {
            let line: String = row.iter().map(|cell| recognize(font, &cell.glyph)).collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }

    /// Render the bitmap as ASCII art, `#` for ink and `.` for paper
    pub fn to_pixel_art(&self) -> String {
        let mut out = String::with_capacity(self.rows * 8 * (self.cols * 8 + 1));
        for row in &self.cells {
            for line in 0..8 {
                for cell in row {
                    let bits = cell.glyph[line];
                    for bit in (0..8).rev() {
                        out.push(if bits & (1 << bit) != 0 { '#' } else { '.' });
                    }
                }
                out.push('\n');
            }
        }
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn recognize(font: &Font, glyph: &Glyph) -> char {
    (0x20u8..0x7F)
        .find(|&code| font.glyph(code) == glyph)
        .map(char::from)
        .unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::MemorySurface;

    fn sample() -> Snapshot {
        let font = Font::builtin();
        let mut screen = Screen::new(MemorySurface::new());
        for (x, &c) in b"Hi there".iter().enumerate() {
            screen.render_glyph(font, c, x, 0);
        }
        screen.render_glyph(font, b'!', 0, 2);
        screen.render_glyph(font, 0x8F, 1, 2);
        Snapshot::capture(&screen, &Cursor::new(), Attribute::DEFAULT, 0)
    }

    #[test]
    fn test_capture_dimensions() {
        let snapshot = sample();
        assert_eq!(snapshot.cells.len(), HEIGHT);
        assert!(snapshot.cells.iter().all(|row| row.len() == WIDTH));
        assert_eq!(snapshot.cells[0][0].glyph, *Font::builtin().glyph(b'H'));
    }

    #[test]
    fn test_to_text() {
        let text = sample().to_text(Font::builtin());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), HEIGHT);
        assert_eq!(lines[0], "Hi there");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "!?");
    }

    #[test]
    fn test_pixel_art() {
        let art = sample().to_pixel_art();
        let lines: Vec<&str> = art.lines().collect();
        assert_eq!(lines.len(), HEIGHT * 8);
        assert!(lines.iter().all(|l| l.len() == WIDTH * 8));
        // Second pixel row of 'H' is 0x42
        assert!(lines[1].starts_with(".#....#."));
    }

    #[test]
    fn test_json_roundtrip() {
        let snapshot = sample();
        let json = snapshot.to_json().unwrap();
        let restored = Snapshot::from_json(&json).unwrap();
        assert_eq!(snapshot, restored);
    }
}
