//! Scanline renderer - decodes the active image into a frame buffer.

use crate::catalog::ImageCatalog;
use crate::color::{OFF, Rgb};
use crate::cursor::ScanlineCursor;
use crate::decoder::decode_scanline;
use crate::image::{ImageDescriptor, ImageError};
use crate::palette::PaletteCache;

/// Owns the catalog, palette cache, scanline cursor and frame buffer.
///
/// `LED_COUNT` is the strip length, fixed at compile time and shared by
/// every image in the catalog.
#[derive(Debug)]
pub struct PovRenderer<'a, const LED_COUNT: usize> {
    catalog: ImageCatalog<'a>,
    palette: PaletteCache,
    cursor: ScanlineCursor,
    frame_buffer: [Rgb; LED_COUNT],
}

impl<'a, const LED_COUNT: usize> PovRenderer<'a, LED_COUNT> {
    /// Take over a validated catalog and activate image 0.
    pub fn new(catalog: ImageCatalog<'a>) -> Self {
        let mut palette = PaletteCache::new();
        palette.load(catalog.active());
        let cursor = ScanlineCursor::new(catalog.active().scanline_count);
        Self {
            catalog,
            palette,
            cursor,
            frame_buffer: [OFF; LED_COUNT],
        }
    }

    /// Build the catalog and renderer in one step, failing fast on any
    /// malformed descriptor.
    pub fn from_images(images: &'a [ImageDescriptor<'a>]) -> Result<Self, ImageError> {
        let catalog = ImageCatalog::new(images, LED_COUNT)?;
        Ok(Self::new(catalog))
    }

    /// Decode the current scanline into the frame buffer and return it.
    ///
    /// Does not advance the cursor; the engine advances after the sink
    /// commit so a failed commit still moves on to the next line in order.
    pub fn render_line(&mut self) -> &[Rgb] {
        decode_scanline(
            self.catalog.active(),
            &self.palette,
            self.cursor.line(),
            &mut self.frame_buffer,
        );
        &self.frame_buffer
    }

    /// Step the cursor, wrapping at the active image's scanline count.
    pub fn advance(&mut self) {
        self.cursor.advance();
    }

    /// Switch to the next catalog image.
    ///
    /// Palette reload and cursor reset happen together, so no render cycle
    /// can observe a cursor position beyond the new image's scanline count.
    pub fn select_next(&mut self) {
        let image = self.catalog.select_next();
        let scanlines = image.scanline_count;
        self.palette.load(image);
        self.cursor.reset(scanlines);
    }

    /// Re-arm cursor and palette for the unchanged active image.
    ///
    /// A wake from sleep resumes at a fresh frame, never mid-image.
    pub fn reload_active(&mut self) {
        let image = self.catalog.active();
        let scanlines = image.scanline_count;
        self.palette.load(image);
        self.cursor.reset(scanlines);
    }

    pub const fn current_line(&self) -> u16 {
        self.cursor.line()
    }

    pub const fn catalog(&self) -> &ImageCatalog<'a> {
        &self.catalog
    }

    /// Mutable cache access for dynamic recoloring effects between loads.
    pub fn palette_mut(&mut self) -> &mut PaletteCache {
        &mut self.palette
    }
}
