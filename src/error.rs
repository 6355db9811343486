//! Error types for the edges of the console: loading fonts, screen dumps and
//! configuration. Rendering itself never fails.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("{plane} plane must be {expected} bytes, got {actual}")]
    PlaneSize {
        plane: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Font data must be {expected} bytes, got {actual}")]
    FontSize { expected: usize, actual: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
