//! Frame rasterisation
//!
//! Turns the two display planes into a 256×192 RGB image the way the video
//! hardware would scan them out: set bitmap pixels take the ink colour,
//! clear pixels the paper colour, BRIGHT selects the brighter palette and
//! FLASH swaps ink and paper while the flash phase is on.

use super::attr::{Attribute, Color};
use super::layout::{attr_offset, pixel_row_offset, PIXEL_HEIGHT, PIXEL_WIDTH};
use super::surface::DisplaySurface;

/// Channel level for normal-brightness colours
const NORMAL_LEVEL: u8 = 0xD7;
/// Channel level for bright colours
const BRIGHT_LEVEL: u8 = 0xFF;

/// RGB value of a colour
pub fn color_to_rgb(color: Color, bright: bool) -> (u8, u8, u8) {
    let level = if bright { BRIGHT_LEVEL } else { NORMAL_LEVEL };
    let index = color.index();
    let channel = |bit: u8| if index & bit != 0 { level } else { 0 };
    // Hardware colour bits are G R B from high to low
    (channel(0x02), channel(0x04), channel(0x01))
}

/// A rasterised display, row-major RGB
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: Vec<u8>,
}

impl Frame {
    /// Rasterise a surface. `flash_phase` selects the inverted half of the
    /// flash cycle.
    pub fn render<S: DisplaySurface + ?Sized>(surface: &S, flash_phase: bool) -> Self {
        let bitmap = surface.bitmap();
        let attributes = surface.attributes();
        let mut pixels = Vec::with_capacity(PIXEL_WIDTH * PIXEL_HEIGHT * 3);

        for py in 0..PIXEL_HEIGHT {
            let (cy, row) = (py / 8, py % 8);
            for cx in 0..PIXEL_WIDTH / 8 {
                let bits = bitmap[pixel_row_offset(cx, cy, row)];
                let attr = Attribute::from_bits(attributes[attr_offset(cx, cy)]);

                let (mut ink, mut paper) = (attr.ink(), attr.paper());
                if attr.is_flash() && flash_phase {
                    std::mem::swap(&mut ink, &mut paper);
                }
                let ink = color_to_rgb(ink, attr.is_bright());
                let paper = color_to_rgb(paper, attr.is_bright());

                for bit in (0..8).rev() {
                    let (r, g, b) = if bits & (1 << bit) != 0 { ink } else { paper };
                    pixels.extend_from_slice(&[r, g, b]);
                }
            }
        }

        Self { pixels }
    }

    pub fn width(&self) -> usize {
        PIXEL_WIDTH
    }

    pub fn height(&self) -> usize {
        PIXEL_HEIGHT
    }

    /// RGB of pixel `(x, y)`
    pub fn pixel(&self, x: usize, y: usize) -> (u8, u8, u8) {
        let i = (y * PIXEL_WIDTH + x) * 3;
        (self.pixels[i], self.pixels[i + 1], self.pixels[i + 2])
    }

    /// Raw RGB bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Encode as a binary PPM (P6) image
    pub fn to_ppm(&self) -> Vec<u8> {
        let header = format!("P6\n{} {}\n255\n", PIXEL_WIDTH, PIXEL_HEIGHT);
        let mut out = Vec::with_capacity(header.len() + self.pixels.len());
        out.extend_from_slice(header.as_bytes());
        out.extend_from_slice(&self.pixels);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::MemorySurface;

    #[test]
    fn test_palette() {
        assert_eq!(color_to_rgb(Color::Black, true), (0, 0, 0));
        assert_eq!(color_to_rgb(Color::Red, false), (0xD7, 0, 0));
        assert_eq!(color_to_rgb(Color::Blue, true), (0, 0, 0xFF));
        assert_eq!(color_to_rgb(Color::Yellow, false), (0xD7, 0xD7, 0));
        assert_eq!(color_to_rgb(Color::White, true), (0xFF, 0xFF, 0xFF));
    }

    #[test]
    fn test_blank_surface_is_white_paper() {
        let frame = Frame::render(&MemorySurface::new(), false);
        assert_eq!(frame.as_bytes().len(), 256 * 192 * 3);
        assert_eq!(frame.pixel(0, 0), (0xD7, 0xD7, 0xD7));
        assert_eq!(frame.pixel(255, 191), (0xD7, 0xD7, 0xD7));
    }

    #[test]
    fn test_ink_pixels_and_flash_swap() {
        let mut surface = MemorySurface::new();
        // Leftmost pixel of the second pixel row of cell (1, 0)
        surface.bitmap_mut()[256 + 1] = 0x80;
        surface.attributes_mut()[1] = Attribute::new(Color::Red, Color::Black)
            .with_flash(true)
            .bits();

        let steady = Frame::render(&surface, false);
        assert_eq!(steady.pixel(8, 1), (0xD7, 0, 0));
        assert_eq!(steady.pixel(9, 1), (0, 0, 0));

        let flashed = Frame::render(&surface, true);
        assert_eq!(flashed.pixel(8, 1), (0, 0, 0));
        assert_eq!(flashed.pixel(9, 1), (0xD7, 0, 0));
    }

    #[test]
    fn test_ppm_header() {
        let ppm = Frame::render(&MemorySurface::new(), false).to_ppm();
        assert!(ppm.starts_with(b"P6\n256 192\n255\n"));
        assert_eq!(ppm.len(), 15 + 256 * 192 * 3);
    }
}
