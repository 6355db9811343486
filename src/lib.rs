//! ZX Console
//!
//! A character console for the ZX Spectrum screen layout: 32×24 cells of
//! 8×8 glyphs drawn into an interleaved bitmap plane, with a parallel
//! attribute plane for ink, paper, bright and flash.
//!
//! - `core`: memory layout, attributes, font, surfaces, screen manager
//! - `parser`: the `ESC [ <n> m` escape sequence parser
//! - `console`: the byte-at-a-time console driver
//! - `config`: JSON configuration
//!
//! ```
//! use zx_console::{Console, MemorySurface};
//!
//! let mut console = Console::new(MemorySurface::new());
//! console.clear();
//! console.feed(b"\x1b[31mHELLO\n");
//! assert_eq!(console.cursor().row, 1);
//! ```

pub mod ansi;
pub mod config;
pub mod console;
pub mod core;
pub mod error;
pub mod parser;

pub use config::ConsoleConfig;
pub use console::Console;
pub use crate::core::{Attribute, Color, DisplaySurface, Font, MemorySurface, ScrollFill, Snapshot};
pub use error::{ConsoleError, Result};
