//! SGR escape strings understood by the console.
//!
//! Embed these in text written to a [`Console`](crate::Console):
//!
//! ```
//! use zx_console::ansi::{ATTR_RESET, BG_BLUE, FG_YELLOW};
//! let banner = format!("{}{}{} READY {}", ATTR_RESET, BG_BLUE, FG_YELLOW, ATTR_RESET);
//! assert!(banner.starts_with("\x1b[0m"));
//! ```

pub const ATTR_RESET: &str = "\x1b[0m";
pub const BRIGHT: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const FLASH: &str = "\x1b[5m";
pub const STEADY: &str = "\x1b[25m";

pub const FG_BLACK: &str = "\x1b[30m";
pub const FG_RED: &str = "\x1b[31m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_YELLOW: &str = "\x1b[33m";
pub const FG_BLUE: &str = "\x1b[34m";
pub const FG_MAGENTA: &str = "\x1b[35m";
pub const FG_CYAN: &str = "\x1b[36m";
pub const FG_WHITE: &str = "\x1b[37m";
pub const FG_DEFAULT: &str = "\x1b[39m";

pub const BG_BLACK: &str = "\x1b[40m";
pub const BG_RED: &str = "\x1b[41m";
pub const BG_GREEN: &str = "\x1b[42m";
pub const BG_YELLOW: &str = "\x1b[43m";
pub const BG_BLUE: &str = "\x1b[44m";
pub const BG_MAGENTA: &str = "\x1b[45m";
pub const BG_CYAN: &str = "\x1b[46m";
pub const BG_WHITE: &str = "\x1b[47m";
pub const BG_DEFAULT: &str = "\x1b[49m";
