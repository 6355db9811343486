//! Configuration for the console

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{Font, ScrollFill};
use crate::error::Result;

/// Console configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Whether `clear` turns the cursor indicator on
    pub cursor_visible: bool,
    /// Treatment of the bottom row after a scroll
    pub scroll_fill: ScrollFill,
    /// Raw 2048-byte font file replacing the built-in font
    pub font_path: Option<PathBuf>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            cursor_visible: true,
            scroll_fill: ScrollFill::Retain,
            font_path: None,
        }
    }
}

impl ConsoleConfig {
    /// Parse a JSON configuration. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load the configured font, if any
    pub fn load_font(&self) -> Result<Option<Font>> {
        self.font_path.as_deref().map(Font::load).transpose()
    }
}
