//! Font Table
//!
//! 256 fixed 8×8 glyphs indexed by byte value. Each glyph is eight bytes,
//! one per pixel row from top to bottom, with the most significant bit as
//! the leftmost pixel (the same bit order the bitmap plane uses).
//!
//! The built-in table covers printable ASCII (0x20-0x7F) and the 2×2
//! quarter-block graphics at 0x80-0x8F. Every other code maps to a blank
//! glyph and is still rendered like any other byte.

use std::path::Path;

use crate::error::{ConsoleError, Result};

/// One glyph: eight pixel rows
pub type Glyph = [u8; 8];

/// Number of glyphs in a font
pub const GLYPH_COUNT: usize = 256;

/// Size of a raw font file in bytes
pub const FONT_BYTES: usize = GLYPH_COUNT * 8;

/// An immutable glyph table
#[derive(Clone, PartialEq, Eq)]
pub struct Font {
    glyphs: [Glyph; GLYPH_COUNT],
}

static BUILTIN: Font = Font {
    glyphs: build_table(),
};

impl Font {
    /// The built-in font, shared for the whole program
    pub fn builtin() -> &'static Font {
        &BUILTIN
    }

    /// Build a font from 2048 raw bytes (glyph 0 first)
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() != FONT_BYTES {
            return Err(ConsoleError::FontSize {
                expected: FONT_BYTES,
                actual: data.len(),
            });
        }

        let mut glyphs = [[0u8; 8]; GLYPH_COUNT];
        for (glyph, chunk) in glyphs.iter_mut().zip(data.chunks_exact(8)) {
            glyph.copy_from_slice(chunk);
        }
        Ok(Self { glyphs })
    }

    /// Load a raw font file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        let font = Self::from_bytes(&data)?;
        log::info!("Loaded font: {}", path.display());
        Ok(font)
    }

    /// Glyph for a character code
    #[inline]
    pub fn glyph(&self, code: u8) -> &Glyph {
        &self.glyphs[code as usize]
    }

    /// Serialize back to the raw 2048-byte form
    pub fn to_bytes(&self) -> Vec<u8> {
        self.glyphs.iter().flatten().copied().collect()
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let defined = self.glyphs.iter().filter(|g| **g != [0; 8]).count();
        f.debug_struct("Font").field("defined_glyphs", &defined).finish()
    }
}

/// Printable ASCII, 0x20 (space) to 0x7F
#[rustfmt::skip]
const PRINTABLE: [Glyph; 96] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x10, 0x10, 0x10, 0x10, 0x00, 0x10, 0x00], // '!'
    [0x00, 0x24, 0x24, 0x00, 0x00, 0x00, 0x00, 0x00], // '"'
    [0x00, 0x24, 0x7E, 0x24, 0x24, 0x7E, 0x24, 0x00], // '#'
    [0x00, 0x08, 0x3E, 0x28, 0x3E, 0x0A, 0x3E, 0x08], // '$'
    [0x00, 0x62, 0x64, 0x08, 0x10, 0x26, 0x46, 0x00], // '%'
    [0x00, 0x10, 0x28, 0x10, 0x2A, 0x44, 0x3A, 0x00], // '&'
    [0x00, 0x08, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00], // '\''
    [0x00, 0x04, 0x08, 0x08, 0x08, 0x08, 0x04, 0x00], // '('
    [0x00, 0x20, 0x10, 0x10, 0x10, 0x10, 0x20, 0x00], // ')'
    [0x00, 0x00, 0x14, 0x08, 0x3E, 0x08, 0x14, 0x00], // '*'
    [0x00, 0x00, 0x08, 0x08, 0x3E, 0x08, 0x08, 0x00], // '+'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x08, 0x10], // ','
    [0x00, 0x00, 0x00, 0x00, 0x3E, 0x00, 0x00, 0x00], // '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00], // '.'
    [0x00, 0x00, 0x02, 0x04, 0x08, 0x10, 0x20, 0x00], // '/'
    [0x00, 0x3C, 0x46, 0x4A, 0x52, 0x62, 0x3C, 0x00], // '0'
    [0x00, 0x18, 0x28, 0x08, 0x08, 0x08, 0x3E, 0x00], // '1'
    [0x00, 0x3C, 0x42, 0x02, 0x3C, 0x40, 0x7E, 0x00], // '2'
    [0x00, 0x3C, 0x42, 0x0C, 0x02, 0x42, 0x3C, 0x00], // '3'
    [0x00, 0x08, 0x18, 0x28, 0x48, 0x7E, 0x08, 0x00], // '4'
    [0x00, 0x7E, 0x40, 0x7C, 0x02, 0x42, 0x3C, 0x00], // '5'
    [0x00, 0x3C, 0x40, 0x7C, 0x42, 0x42, 0x3C, 0x00], // '6'
    [0x00, 0x7E, 0x02, 0x04, 0x08, 0x10, 0x10, 0x00], // '7'
    [0x00, 0x3C, 0x42, 0x3C, 0x42, 0x42, 0x3C, 0x00], // '8'
    [0x00, 0x3C, 0x42, 0x42, 0x3E, 0x02, 0x3C, 0x00], // '9'
    [0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00], // ':'
    [0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x10, 0x20], // ';'
    [0x00, 0x00, 0x04, 0x08, 0x10, 0x08, 0x04, 0x00], // '<'
    [0x00, 0x00, 0x00, 0x3E, 0x00, 0x3E, 0x00, 0x00], // '='
    [0x00, 0x00, 0x10, 0x08, 0x04, 0x08, 0x10, 0x00], // '>'
    [0x00, 0x3C, 0x42, 0x04, 0x08, 0x00, 0x08, 0x00], // '?'
    [0x00, 0x3C, 0x4A, 0x56, 0x5E, 0x40, 0x3C, 0x00], // '@'
    [0x00, 0x3C, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x00], // 'A'
    [0x00, 0x7C, 0x42, 0x7C, 0x42, 0x42, 0x7C, 0x00], // 'B'
    [0x00, 0x3C, 0x42, 0x40, 0x40, 0x42, 0x3C, 0x00], // 'C'
    [0x00, 0x78, 0x44, 0x42, 0x42, 0x44, 0x78, 0x00], // 'D'
    [0x00, 0x7E, 0x40, 0x7C, 0x40, 0x40, 0x7E, 0x00], // 'E'
    [0x00, 0x7E, 0x40, 0x7C, 0x40, 0x40, 0x40, 0x00], // 'F'
    [0x00, 0x3C, 0x42, 0x40, 0x4E, 0x42, 0x3C, 0x00], // 'G'
    [0x00, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x42, 0x00], // 'H'
    [0x00, 0x3E, 0x08, 0x08, 0x08, 0x08, 0x3E, 0x00], // 'I'
    [0x00, 0x02, 0x02, 0x02, 0x42, 0x42, 0x3C, 0x00], // 'J'
    [0x00, 0x44, 0x48, 0x70, 0x48, 0x44, 0x42, 0x00], // 'K'
    [0x00, 0x40, 0x40, 0x40, 0x40, 0x40, 0x7E, 0x00], // 'L'
    [0x00, 0x42, 0x66, 0x5A, 0x42, 0x42, 0x42, 0x00], // 'M'
    [0x00, 0x42, 0x62, 0x52, 0x4A, 0x46, 0x42, 0x00], // 'N'
    [0x00, 0x3C, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00], // 'O'
    [0x00, 0x7C, 0x42, 0x42, 0x7C, 0x40, 0x40, 0x00], // 'P'
    [0x00, 0x3C, 0x42, 0x42, 0x52, 0x4A, 0x3C, 0x00], // 'Q'
    [0x00, 0x7C, 0x42, 0x42, 0x7C, 0x44, 0x42, 0x00], // 'R'
    [0x00, 0x3C, 0x40, 0x3C, 0x02, 0x42, 0x3C, 0x00], // 'S'
    [0x00, 0xFE, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00], // 'T'
    [0x00, 0x42, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00], // 'U'
    [0x00, 0x42, 0x42, 0x42, 0x42, 0x24, 0x18, 0x00], // 'V'
    [0x00, 0x42, 0x42, 0x42, 0x42, 0x5A, 0x24, 0x00], // 'W'
    [0x00, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x00], // 'X'
    [0x00, 0x82, 0x44, 0x28, 0x10, 0x10, 0x10, 0x00], // 'Y'
    [0x00, 0x7E, 0x04, 0x08, 0x10, 0x20, 0x7E, 0x00], // 'Z'
    [0x00, 0x0E, 0x08, 0x08, 0x08, 0x08, 0x0E, 0x00], // '['
    [0x00, 0x00, 0x40, 0x20, 0x10, 0x08, 0x04, 0x00], // '\\'
    [0x00, 0x70, 0x10, 0x10, 0x10, 0x10, 0x70, 0x00], // ']'
    [0x00, 0x10, 0x38, 0x54, 0x10, 0x10, 0x10, 0x00], // '^'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], // '_'
    [0x00, 0x10, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00], // '`'
    [0x00, 0x00, 0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00], // 'a'
    [0x00, 0x20, 0x20, 0x3C, 0x22, 0x22, 0x3C, 0x00], // 'b'
    [0x00, 0x00, 0x1C, 0x20, 0x20, 0x20, 0x1C, 0x00], // 'c'
    [0x00, 0x04, 0x04, 0x3C, 0x44, 0x44, 0x3C, 0x00], // 'd'
    [0x00, 0x00, 0x38, 0x44, 0x78, 0x40, 0x3C, 0x00], // 'e'
    [0x00, 0x0C, 0x10, 0x18, 0x10, 0x10, 0x10, 0x00], // 'f'
    [0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x38], // 'g'
    [0x00, 0x40, 0x40, 0x78, 0x44, 0x44, 0x44, 0x00], // 'h'
    [0x00, 0x10, 0x00, 0x30, 0x10, 0x10, 0x38, 0x00], // 'i'
    [0x00, 0x04, 0x00, 0x04, 0x04, 0x04, 0x24, 0x18], // 'j'
    [0x00, 0x20, 0x28, 0x30, 0x30, 0x28, 0x24, 0x00], // 'k'
    [0x00, 0x10, 0x10, 0x10, 0x10, 0x10, 0x0C, 0x00], // 'l'
    [0x00, 0x00, 0x68, 0x54, 0x54, 0x54, 0x54, 0x00], // 'm'
    [0x00, 0x00, 0x78, 0x44, 0x44, 0x44, 0x44, 0x00], // 'n'
    [0x00, 0x00, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00], // 'o'
    [0x00, 0x00, 0x78, 0x44, 0x44, 0x78, 0x40, 0x40], // 'p'
    [0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x06], // 'q'
    [0x00, 0x00, 0x1C, 0x20, 0x20, 0x20, 0x20, 0x00], // 'r'
    [0x00, 0x00, 0x38, 0x40, 0x38, 0x04, 0x78, 0x00], // 's'
    [0x00, 0x10, 0x38, 0x10, 0x10, 0x10, 0x0C, 0x00], // 't'
    [0x00, 0x00, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00], // 'u'
    [0x00, 0x00, 0x44, 0x44, 0x28, 0x28, 0x10, 0x00], // 'v'
    [0x00, 0x00, 0x44, 0x54, 0x54, 0x54, 0x28, 0x00], // 'w'
    [0x00, 0x00, 0x44, 0x28, 0x10, 0x28, 0x44, 0x00], // 'x'
    [0x00, 0x00, 0x44, 0x44, 0x44, 0x3C, 0x04, 0x38], // 'y'
    [0x00, 0x00, 0x7C, 0x08, 0x10, 0x20, 0x7C, 0x00], // 'z'
    [0x00, 0x0E, 0x08, 0x30, 0x08, 0x08, 0x0E, 0x00], // '{'
    [0x00, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00], // '|'
    [0x00, 0x70, 0x10, 0x0C, 0x10, 0x10, 0x70, 0x00], // '}'
    [0x00, 0x14, 0x28, 0x00, 0x00, 0x00, 0x00, 0x00], // '~'
    [0x3C, 0x42, 0x99, 0xA1, 0xA1, 0x99, 0x42, 0x3C], // 0x7F (copyright)
];

/// Quarter-block graphic for 0x80-0x8F.
/// Bit 0 top-right, bit 1 top-left, bit 2 bottom-right, bit 3 bottom-left.
const fn block_glyph(bits: u8) -> Glyph {
    let top = (if bits & 0x02 != 0 { 0xF0 } else { 0 }) | (if bits & 0x01 != 0 { 0x0F } else { 0 });
    let bottom =
        (if bits & 0x08 != 0 { 0xF0 } else { 0 }) | (if bits & 0x04 != 0 { 0x0F } else { 0 });
    [top, top, top, top, bottom, bottom, bottom, bottom]
}

const fn build_table() -> [Glyph; GLYPH_COUNT] {
    let mut table = [[0u8; 8]; GLYPH_COUNT];
    let mut i = 0;
    while i < PRINTABLE.len() {
        table[0x20 + i] = PRINTABLE[i];
        i += 1;
    }
    let mut b = 0;
    while b < 16 {
        table[0x80 + b] = block_glyph(b as u8);
        b += 1;
    }
    table
}
