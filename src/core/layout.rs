//! Display Memory Layout
//!
//! The Spectrum screen is 256×192 pixels arranged as 32×24 character cells.
//! The bitmap plane is not stored in raster order: the screen is split into
//! three 2048-byte thirds of eight character rows each, and inside a third
//! the eight pixel rows of a character row are 256 bytes apart. The
//! attribute plane is a plain row-major array with one byte per cell.
//!
//! These offsets are bit-exact with the hardware and must not change.

/// Console width in character cells
pub const WIDTH: usize = 32;
/// Console height in character cells
pub const HEIGHT: usize = 24;

/// Pixel rows per glyph
pub const GLYPH_ROWS: usize = 8;

/// Distance in bytes between two pixel rows of the same character cell
pub const PIXEL_ROW_STRIDE: usize = 256;

/// Size of one screen third (eight character rows)
pub const THIRD_SIZE: usize = 2048;

/// Size of the bitmap plane in bytes
pub const BITMAP_SIZE: usize = 6144;
/// Size of the attribute plane in bytes
pub const ATTR_SIZE: usize = WIDTH * HEIGHT;

/// Size of a `.scr` screen dump (bitmap followed by attributes)
pub const SCR_SIZE: usize = BITMAP_SIZE + ATTR_SIZE;

/// Pixel dimensions of the display
pub const PIXEL_WIDTH: usize = WIDTH * 8;
pub const PIXEL_HEIGHT: usize = HEIGHT * GLYPH_ROWS;

/// Offset of the first (top) pixel row of cell `(x, y)` in the bitmap plane
#[inline]
pub const fn bitmap_offset(x: usize, y: usize) -> usize {
    THIRD_SIZE * (y >> 3) + WIDTH * (y & 7) + x
}

/// Offset of pixel row `row` (0-7) of cell `(x, y)` in the bitmap plane
#[inline]
pub const fn pixel_row_offset(x: usize, y: usize, row: usize) -> usize {
    bitmap_offset(x, y) + PIXEL_ROW_STRIDE * row
}

/// Offset of cell `(x, y)` in the attribute plane
#[inline]
pub const fn attr_offset(x: usize, y: usize) -> usize {
    WIDTH * y + x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_sizes() {
        assert_eq!(BITMAP_SIZE, PIXEL_WIDTH * PIXEL_HEIGHT / 8);
        assert_eq!(ATTR_SIZE, 768);
        assert_eq!(SCR_SIZE, 6912);
    }

    #[test]
    fn test_bitmap_offset_thirds() {
        assert_eq!(bitmap_offset(0, 0), 0);
        assert_eq!(bitmap_offset(0, 1), 32);
        assert_eq!(bitmap_offset(0, 7), 224);
        assert_eq!(bitmap_offset(0, 8), 2048);
        assert_eq!(bitmap_offset(5, 16), 4096 + 5);
        assert_eq!(bitmap_offset(31, 23), 4096 + 224 + 31);
    }

    #[test]
    fn test_pixel_rows_are_interleaved() {
        assert_eq!(pixel_row_offset(3, 2, 0), 64 + 3);
        assert_eq!(pixel_row_offset(3, 2, 1), 256 + 64 + 3);
        assert_eq!(pixel_row_offset(3, 2, 7), 7 * 256 + 64 + 3);
        // The last byte of the plane is the bottom row of the last cell
        assert_eq!(pixel_row_offset(31, 23, 7), BITMAP_SIZE - 1);
    }

    #[test]
    fn test_every_bitmap_byte_is_covered_once() {
        let mut seen = vec![false; BITMAP_SIZE];
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                for row in 0..GLYPH_ROWS {
                    let off = pixel_row_offset(x, y, row);
                    assert!(!seen[off], "offset {} used twice", off);
                    seen[off] = true;
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_attr_offset() {
        assert_eq!(attr_offset(0, 0), 0);
        assert_eq!(attr_offset(31, 0), 31);
        assert_eq!(attr_offset(0, 1), 32);
        assert_eq!(attr_offset(31, 23), ATTR_SIZE - 1);
    }
}
