//! Cell Attributes
//!
//! One attribute byte describes the colours of a whole 8×8 character cell:
//!
//! ```text
//!   7     6      5 4 3    2 1 0
//! FLASH BRIGHT   PAPER     INK
//! ```
//!
//! Ink is the foreground (set pixels), paper the background.

use serde::{Deserialize, Serialize};

/// Spectrum colour index (3 bits, GRB order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Red = 2,
    Magenta = 3,
    Green = 4,
    Cyan = 5,
    Yellow = 6,
    White = 7,
}

impl Color {
    /// All colours in hardware index order
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Blue,
        Color::Red,
        Color::Magenta,
        Color::Green,
        Color::Cyan,
        Color::Yellow,
        Color::White,
    ];

    /// Colour for a 3-bit hardware index (upper bits are ignored)
    pub const fn from_index(index: u8) -> Color {
        Self::ALL[(index & 0x07) as usize]
    }

    /// Colour for an ANSI colour number (0 black .. 7 white)
    ///
    /// ANSI orders colours by RGB bits while the hardware orders them by GRB,
    /// so e.g. ANSI red (1) is hardware index 2.
    pub const fn from_ansi(n: u8) -> Color {
        match n & 0x07 {
            0 => Color::Black,
            1 => Color::Red,
            2 => Color::Green,
            3 => Color::Yellow,
            4 => Color::Blue,
            5 => Color::Magenta,
            6 => Color::Cyan,
            _ => Color::White,
        }
    }

    /// Hardware index of this colour
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// A packed attribute byte
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attribute(u8);

impl Attribute {
    pub const INK_MASK: u8 = 0x07;
    pub const PAPER_MASK: u8 = 0x38;
    pub const BRIGHT: u8 = 1 << 6;
    pub const FLASH: u8 = 1 << 7;

    /// Black ink on white paper, steady, normal brightness
    pub const DEFAULT: Attribute = Attribute::new(Color::Black, Color::White);

    /// Build an attribute from ink and paper with bright and flash cleared
    pub const fn new(ink: Color, paper: Color) -> Self {
        Self(ink.index() | (paper.index() << 3))
    }

    /// Wrap a raw byte (every bit pattern is a valid attribute)
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn ink(self) -> Color {
        Color::from_index(self.0 & Self::INK_MASK)
    }

    pub const fn paper(self) -> Color {
        Color::from_index((self.0 & Self::PAPER_MASK) >> 3)
    }

    pub const fn is_bright(self) -> bool {
        self.0 & Self::BRIGHT != 0
    }

    pub const fn is_flash(self) -> bool {
        self.0 & Self::FLASH != 0
    }

    /// Replace the ink field only
    pub const fn with_ink(self, ink: Color) -> Self {
        Self((self.0 & !Self::INK_MASK) | ink.index())
    }

    /// Replace the paper field only
    pub const fn with_paper(self, paper: Color) -> Self {
        Self((self.0 & !Self::PAPER_MASK) | (paper.index() << 3))
    }

    pub const fn with_bright(self, on: bool) -> Self {
        if on {
            Self(self.0 | Self::BRIGHT)
        } else {
            Self(self.0 & !Self::BRIGHT)
        }
    }

    pub const fn with_flash(self, on: bool) -> Self {
        if on {
            Self(self.0 | Self::FLASH)
        } else {
            Self(self.0 & !Self::FLASH)
        }
    }

    /// Apply one SGR attribute
    pub fn apply(self, sgr: SgrAttribute) -> Self {
        match sgr {
            SgrAttribute::Reset => Self::DEFAULT,
            SgrAttribute::Bright => self.with_bright(true),
            SgrAttribute::Dim => self.with_bright(false),
            SgrAttribute::Flash => self.with_flash(true),
            SgrAttribute::Steady => self.with_flash(false),
            SgrAttribute::Ink(c) => self.with_ink(c),
            SgrAttribute::Paper(c) => self.with_paper(c),
        }
    }
}

impl Default for Attribute {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Debug for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attribute")
            .field("bits", &format_args!("{:#04x}", self.0))
            .field("ink", &self.ink())
            .field("paper", &self.paper())
            .field("bright", &self.is_bright())
            .field("flash", &self.is_flash())
            .finish()
    }
}

/// The SGR codes this console understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SgrAttribute {
    /// 0
    Reset,
    /// 1
    Bright,
    /// 2
    Dim,
    /// 5
    Flash,
    /// 25
    Steady,
    /// 30-37, 39 (default is black)
    Ink(Color),
    /// 40-47, 49 (default is black)
    Paper(Color),
}

impl SgrAttribute {
    /// Decode a single SGR parameter, `None` for codes with no effect
    pub fn from_code(code: u32) -> Option<Self> {
        let attr = match code {
            0 => SgrAttribute::Reset,
            1 => SgrAttribute::Bright,
            2 => SgrAttribute::Dim,
            5 => SgrAttribute::Flash,
            25 => SgrAttribute::Steady,
            30..=37 => SgrAttribute::Ink(Color::from_ansi((code - 30) as u8)),
            39 => SgrAttribute::Ink(Color::Black),
            40..=47 => SgrAttribute::Paper(Color::from_ansi((code - 40) as u8)),
            49 => SgrAttribute::Paper(Color::Black),
            _ => return None,
        };
        Some(attr)
    }
}

/// Apply an SGR code to an attribute. Unknown codes leave it unchanged.
pub fn apply_sgr(code: u32, attr: Attribute) -> Attribute {
    match SgrAttribute::from_code(code) {
        Some(sgr) => attr.apply(sgr),
        None => {
            log::debug!("Ignoring unsupported SGR code {}", code);
            attr
        }
    }
}
