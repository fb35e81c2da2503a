//! RAM-resident palette cache for the 1- and 4-bit formats.
//!
//! Palette8 images are excluded on purpose: mirroring 256 entries would
//! cost more RAM than the smallest targets have, so the decoder reads
//! their palette straight from the descriptor instead.

use crate::color::{OFF, Rgb};
use crate::image::{ImageDescriptor, PixelFormat};

/// Sized for the largest cached format (16 entries).
pub const CACHE_ENTRIES: usize = 16;

/// Mutable copy of the active image's color table.
#[derive(Debug, Clone)]
pub struct PaletteCache {
    entries: [Rgb; CACHE_ENTRIES],
}

impl PaletteCache {
    pub const fn new() -> Self {
        Self {
            entries: [OFF; CACHE_ENTRIES],
        }
    }

    /// Repopulate from the image's stored palette.
    ///
    /// Copies 2 entries for `Palette1`, up to 16 for `Palette4` (the
    /// converter emits only the entries actually in use). No-op for
    /// `Palette8` and `Truecolor`.
    pub fn load(&mut self, image: &ImageDescriptor<'_>) {
        let entries = match image.format {
            PixelFormat::Palette1 => 2,
            PixelFormat::Palette4 => CACHE_ENTRIES,
            PixelFormat::Palette8 | PixelFormat::Truecolor => return,
        };
        let stored = image.palette.len() / 3;
        for (index, slot) in self.entries.iter_mut().take(entries).enumerate() {
            *slot = if index < stored {
                let offset = index * 3;
                Rgb::new(
                    image.palette[offset],
                    image.palette[offset + 1],
                    image.palette[offset + 2],
                )
            } else {
                OFF
            };
        }
    }

    /// Read one cached entry. Valid only for indices within the active
    /// format's table size.
    pub fn get(&self, index: u8) -> Rgb {
        self.entries[usize::from(index)]
    }

    /// Overwrite one entry for dynamic recoloring between loads.
    ///
    /// Not validated against the active format; callers keep indices in
    /// range.
    pub fn set(&mut self, index: u8, color: Rgb) {
        self.entries[usize::from(index)] = color;
    }
}

impl Default for PaletteCache {
    fn default() -> Self {
        Self::new()
    }
}
