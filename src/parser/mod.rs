//! Escape sequence parser
//!
//! A small stateful parser for the single-parameter SGR sequences embedded
//! in the console's byte stream.

mod action;
mod state;

pub use action::Action;
pub use state::{Parser, ESC};
