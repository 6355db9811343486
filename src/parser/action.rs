//! Parser actions
//!
//! What a finished escape sequence means for the console.

use serde::{Deserialize, Serialize};

/// An action produced when an escape sequence ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// `ESC [ <code> m` - Select Graphic Rendition with a single parameter
    Sgr(u32),

    /// The sequence was abandoned at this byte. Nothing is drawn for it.
    Invalid(u8),
}
