//! Console Core Module
//!
//! Hardware-independent pieces of the console. This module contains:
//! - Display memory layout (interleaved bitmap, linear attributes)
//! - Attribute byte encoding and the SGR attribute encoder
//! - The built-in 8×8 font
//! - Display surfaces and the screen buffer manager
//! - Cursor state, snapshots and frame rasterisation
//!
//! Everything here is deterministic: the same byte stream always produces
//! the same planes.

mod attr;
mod cursor;
mod font;
mod frame;
pub mod layout;
mod screen;
mod snapshot;
mod surface;

pub use attr::{apply_sgr, Attribute, Color, SgrAttribute};
pub use cursor::{Cursor, Overflow};
pub use font::{Font, Glyph, FONT_BYTES, GLYPH_COUNT};
pub use frame::{color_to_rgb, Frame};
pub use screen::{Screen, ScrollFill};
pub use snapshot::{CellSnapshot, Snapshot};
pub use surface::{DisplaySurface, MemorySurface};
