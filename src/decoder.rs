//! Scanline decoder for the four packed pixel formats.
//!
//! Pure: reads the descriptor (and the palette cache for 1/4-bit formats)
//! and fills the caller's buffer. Never touches the LED sink, which keeps
//! it independently testable.

use crate::color::Rgb;
use crate::image::{ImageDescriptor, PixelFormat};
use crate::palette::PaletteCache;

/// Decode one scanline into `out`, one entry per LED.
///
/// `out.len()` is the strip's LED count and must match the `led_count`
/// the descriptor was validated against. `line` must be below the image's
/// `scanline_count`; the renderer's cursor guarantees both.
pub fn decode_scanline(
    image: &ImageDescriptor<'_>,
    palette: &PaletteCache,
    line: u16,
    out: &mut [Rgb],
) {
    let bytes = image.scanline_bytes(line, out.len());

    match image.format {
        PixelFormat::Palette1 => {
            // 8 packed indices per byte, bit 0 = first pixel of the group.
            for (led, slot) in out.iter_mut().enumerate() {
                let byte = bytes[led / 8];
                let index = (byte >> (led % 8)) & 0x01;
                *slot = palette.get(index);
            }
        }
        PixelFormat::Palette4 => {
            // Two indices per byte, high nibble is the lower-numbered pixel.
            for (led, slot) in out.iter_mut().enumerate() {
                let byte = bytes[led / 2];
                let index = if led % 2 == 0 { byte >> 4 } else { byte & 0x0F };
                *slot = palette.get(index);
            }
        }
        PixelFormat::Palette8 => {
            // Direct index into the descriptor's own palette store. The
            // table is read in place every pixel rather than cached; 256
            // entries would not fit the RAM budget of the smallest targets.
            for (led, slot) in out.iter_mut().enumerate() {
                let offset = usize::from(bytes[led]) * 3;
                *slot = Rgb::new(
                    image.palette[offset],
                    image.palette[offset + 1],
                    image.palette[offset + 2],
                );
            }
        }
        PixelFormat::Truecolor => {
            for (led, slot) in out.iter_mut().enumerate() {
                let offset = led * 3;
                *slot = Rgb::new(bytes[offset], bytes[offset + 1], bytes[offset + 2]);
            }
        }
    }
}
