//! Display Surface
//!
//! The console draws into two byte planes. A `DisplaySurface` hands those
//! planes out as slices so the same engine can write to a plain buffer in
//! tests or to memory that backs real video hardware.

use std::path::Path;

use super::attr::Attribute;
use super::layout::{ATTR_SIZE, BITMAP_SIZE, SCR_SIZE};
use crate::error::{ConsoleError, Result};

/// Byte-addressable access to the bitmap and attribute planes.
///
/// Implementations must return exactly `BITMAP_SIZE` and `ATTR_SIZE` bytes.
pub trait DisplaySurface {
    fn bitmap(&self) -> &[u8];
    fn bitmap_mut(&mut self) -> &mut [u8];
    fn attributes(&self) -> &[u8];
    fn attributes_mut(&mut self) -> &mut [u8];
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for &mut S {
    fn bitmap(&self) -> &[u8] {
        (**self).bitmap()
    }

    fn bitmap_mut(&mut self) -> &mut [u8] {
        (**self).bitmap_mut()
    }

    fn attributes(&self) -> &[u8] {
        (**self).attributes()
    }

    fn attributes_mut(&mut self) -> &mut [u8] {
        (**self).attributes_mut()
    }
}

/// An in-memory surface
#[derive(Clone, PartialEq, Eq)]
pub struct MemorySurface {
    bitmap: Box<[u8; BITMAP_SIZE]>,
    attributes: Box<[u8; ATTR_SIZE]>,
}

impl MemorySurface {
    /// A surface with a blank bitmap and default attributes
    pub fn new() -> Self {
        Self {
            bitmap: Box::new([0; BITMAP_SIZE]),
            attributes: Box::new([Attribute::DEFAULT.bits(); ATTR_SIZE]),
        }
    }

    /// Build a surface from existing plane contents
    pub fn from_planes(bitmap: &[u8], attributes: &[u8]) -> Result<Self> {
        check_size("bitmap", BITMAP_SIZE, bitmap.len())?;
        check_size("attribute", ATTR_SIZE, attributes.len())?;

        let mut surface = Self::new();
        surface.bitmap.copy_from_slice(bitmap);
        surface.attributes.copy_from_slice(attributes);
        Ok(surface)
    }

    /// Parse a 6912-byte `.scr` dump (bitmap followed by attributes)
    pub fn from_scr(data: &[u8]) -> Result<Self> {
        check_size("screen", SCR_SIZE, data.len())?;
        let (bitmap, attributes) = data.split_at(BITMAP_SIZE);
        Self::from_planes(bitmap, attributes)
    }

    /// Serialize to the `.scr` layout
    pub fn to_scr(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(SCR_SIZE);
        data.extend_from_slice(&self.bitmap[..]);
        data.extend_from_slice(&self.attributes[..]);
        data
    }

    /// Read a `.scr` file
    pub fn load_scr(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_scr(&data)
    }

    /// Write a `.scr` file
    pub fn save_scr(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_scr())?;
        Ok(())
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemorySurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lit = self.bitmap.iter().filter(|&&b| b != 0).count();
        f.debug_struct("MemorySurface")
            .field("nonzero_bitmap_bytes", &lit)
            .finish_non_exhaustive()
    }
}

impl DisplaySurface for MemorySurface {
    fn bitmap(&self) -> &[u8] {
        &self.bitmap[..]
    }

    fn bitmap_mut(&mut self) -> &mut [u8] {
        &mut self.bitmap[..]
    }

    fn attributes(&self) -> &[u8] {
        &self.attributes[..]
    }

    fn attributes_mut(&mut self) -> &mut [u8] {
        &mut self.attributes[..]
    }
}

fn check_size(plane: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(ConsoleError::PlaneSize {
            plane,
            expected,
            actual,
        });
    }
    Ok(())
}
