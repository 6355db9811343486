//! Screen buffer management
//!
//! `Screen` owns a display surface and knows how to draw on it: blitting
//! glyphs into the interleaved bitmap plane, scrolling both planes, and
//! painting the flashing cursor indicator into the attribute plane.
//! It has no notion of a cursor position; the console drives it.

use serde::{Deserialize, Serialize};

use super::attr::Attribute;
use super::font::{Font, Glyph};
use super::layout::{attr_offset, pixel_row_offset, GLYPH_ROWS, HEIGHT, WIDTH};
use super::surface::DisplaySurface;

/// What happens to the bottom row after a scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollFill {
    /// Leave the old bytes in place. The new bottom row keeps showing the
    /// line that was just moved up.
    #[default]
    Retain,
    /// Blank the bitmap row and reset its attributes
    Clear,
}

#[derive(Debug, Clone)]
pub struct Screen<S> {
    surface: S,
}

impl<S: DisplaySurface> Screen<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[cfg(test)]
    pub(crate) fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Zero the bitmap and fill every attribute cell with `attr`
    pub fn clear(&mut self, attr: Attribute) {
        self.surface.bitmap_mut().fill(0);
        self.surface.attributes_mut().fill(attr.bits());
    }

    /// Copy the glyph for `code` into cell `(x, y)`.
    ///
    /// `x` and `y` must be inside the display.
    pub fn render_glyph(&mut self, font: &Font, code: u8, x: usize, y: usize) {
        debug_assert!(x < WIDTH && y < HEIGHT, "cell ({}, {}) off screen", x, y);

        let bitmap = self.surface.bitmap_mut();
        for (row, &bits) in font.glyph(code).iter().enumerate() {
            bitmap[pixel_row_offset(x, y, row)] = bits;
        }
    }

    /// Read back the eight pixel rows of cell `(x, y)`
    pub fn glyph_at(&self, x: usize, y: usize) -> Glyph {
        let bitmap = self.surface.bitmap();
        let mut glyph = [0u8; GLYPH_ROWS];
        for (row, bits) in glyph.iter_mut().enumerate() {
            *bits = bitmap[pixel_row_offset(x, y, row)];
        }
        glyph
    }

    pub fn attribute_at(&self, x: usize, y: usize) -> Attribute {
        Attribute::from_bits(self.surface.attributes()[attr_offset(x, y)])
    }

    pub fn set_attribute(&mut self, x: usize, y: usize, attr: Attribute) {
        self.surface.attributes_mut()[attr_offset(x, y)] = attr.bits();
    }

    /// Show the cursor indicator: `attr` with the flash bit set
    pub fn paint_cursor(&mut self, x: usize, y: usize, attr: Attribute) {
        self.set_attribute(x, y, attr.with_flash(true));
    }

    /// Remove the cursor indicator by writing back the plain attribute
    pub fn erase_cursor(&mut self, x: usize, y: usize, attr: Attribute) {
        self.set_attribute(x, y, attr);
    }

    /// Move every character row up by one, discarding row 0.
    ///
    /// `attr` is only used when `fill` is [`ScrollFill::Clear`].
    pub fn scroll_up(&mut self, fill: ScrollFill, attr: Attribute) {
        let bitmap = self.surface.bitmap_mut();
        for y in 0..HEIGHT - 1 {
            for row in 0..GLYPH_ROWS {
                let src = pixel_row_offset(0, y + 1, row);
                let dst = pixel_row_offset(0, y, row);
                bitmap.copy_within(src..src + WIDTH, dst);
            }
        }

        let attributes = self.surface.attributes_mut();
        attributes.copy_within(WIDTH.., 0);

        if fill == ScrollFill::Clear {
            self.clear_row(HEIGHT - 1, attr);
        }
    }

    /// Blank one character row
    pub fn clear_row(&mut self, y: usize, attr: Attribute) {
        let bitmap = self.surface.bitmap_mut();
        for row in 0..GLYPH_ROWS {
            let start = pixel_row_offset(0, y, row);
            bitmap[start..start + WIDTH].fill(0);
        }
        let start = attr_offset(0, y);
        self.surface.attributes_mut()[start..start + WIDTH].fill(attr.bits());
    }
}
