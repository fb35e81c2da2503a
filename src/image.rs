//! Packed image descriptors
//!
//! Images arrive from the offline conversion tool already packed; the
//! descriptor only names the format, the scanline count and the two byte
//! slices (palette and pixel data). Everything is validated once at load
//! time so the decoder never has to range-check per scanline.

const FORMAT_NAME_PALETTE1: &str = "palette1";
const FORMAT_NAME_PALETTE4: &str = "palette4";
const FORMAT_NAME_PALETTE8: &str = "palette8";
const FORMAT_NAME_TRUECOLOR: &str = "truecolor";

const FORMAT_TAG_PALETTE1: u8 = 0;
const FORMAT_TAG_PALETTE4: u8 = 1;
const FORMAT_TAG_PALETTE8: u8 = 2;
const FORMAT_TAG_TRUECOLOR: u8 = 3;

/// Pixel storage formats, trading memory footprint for color fidelity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PixelFormat {
    /// 1 bit per pixel, 2-entry palette
    Palette1 = FORMAT_TAG_PALETTE1,
    /// 4 bits per pixel, 16-entry palette
    Palette4 = FORMAT_TAG_PALETTE4,
    /// 8 bits per pixel, up to 256-entry palette read in place
    Palette8 = FORMAT_TAG_PALETTE8,
    /// 24 bits per pixel, no palette
    Truecolor = FORMAT_TAG_TRUECOLOR,
}

impl PixelFormat {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            FORMAT_TAG_PALETTE1 => Self::Palette1,
            FORMAT_TAG_PALETTE4 => Self::Palette4,
            FORMAT_TAG_PALETTE8 => Self::Palette8,
            FORMAT_TAG_TRUECOLOR => Self::Truecolor,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Palette1 => FORMAT_NAME_PALETTE1,
            Self::Palette4 => FORMAT_NAME_PALETTE4,
            Self::Palette8 => FORMAT_NAME_PALETTE8,
            Self::Truecolor => FORMAT_NAME_TRUECOLOR,
        }
    }

    /// Bytes per scanline for a strip of `led_count` LEDs.
    ///
    /// Sub-byte formats are padded to whole bytes, matching the converter's
    /// padding of image height to the next 8- or 2-pixel boundary.
    pub const fn stride(self, led_count: usize) -> usize {
        match self {
            Self::Palette1 => led_count.div_ceil(8),
            Self::Palette4 => led_count.div_ceil(2),
            Self::Palette8 => led_count,
            Self::Truecolor => led_count * 3,
        }
    }

    /// Maximum palette entries for indexed formats, `None` for truecolor.
    pub const fn palette_capacity(self) -> Option<usize> {
        match self {
            Self::Palette1 => Some(2),
            Self::Palette4 => Some(16),
            Self::Palette8 => Some(256),
            Self::Truecolor => None,
        }
    }
}

/// Configuration errors detected when a descriptor is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageError {
    /// Raw format tag outside the four known values
    UnknownFormat(u8),
    /// Image declares zero scanlines
    NoScanlines,
    /// Pixel data length does not match `scanline_count * stride`
    PixelLengthMismatch { expected: usize, actual: usize },
    /// Palette byte length is not a whole number of in-range RGB triples
    PaletteSize { format: PixelFormat, bytes: usize },
    /// A stored 8-bit pixel indexes past the image's palette entries
    PaletteIndexOutOfRange { index: u8, entries: usize },
    /// Catalog contains no images
    EmptyCatalog,
}

/// One catalog entry, immutable once defined.
///
/// `palette` holds packed RGB triples and stays empty for truecolor.
/// `pixels` holds `scanline_count` scanlines of `format.stride(led_count)`
/// bytes each.
#[derive(Debug, Clone, Copy)]
pub struct ImageDescriptor<'a> {
    pub format: PixelFormat,
    pub scanline_count: u16,
    pub palette: &'a [u8],
    pub pixels: &'a [u8],
}

impl<'a> ImageDescriptor<'a> {
    /// Build a descriptor from an externally produced raw format tag,
    /// failing fast on unrecognized tags.
    pub fn from_raw_parts(
        format_tag: u8,
        scanline_count: u16,
        palette: &'a [u8],
        pixels: &'a [u8],
    ) -> Result<Self, ImageError> {
        let format = PixelFormat::from_raw(format_tag)
            .ok_or(ImageError::UnknownFormat(format_tag))?;
        Ok(Self {
            format,
            scanline_count,
            palette,
            pixels,
        })
    }

    /// Check the declared lengths against a concrete strip size.
    ///
    /// Runs once at catalog load, never per scanline.
    pub fn validate(&self, led_count: usize) -> Result<(), ImageError> {
        if self.scanline_count == 0 {
            return Err(ImageError::NoScanlines);
        }

        let expected = usize::from(self.scanline_count) * self.format.stride(led_count);
        if self.pixels.len() != expected {
            return Err(ImageError::PixelLengthMismatch {
                expected,
                actual: self.pixels.len(),
            });
        }

        match self.format.palette_capacity() {
            Some(capacity) => {
                let bytes = self.palette.len();
                let whole_triples = bytes % 3 == 0;
                let entries = bytes / 3;
                if !whole_triples || entries == 0 || entries > capacity {
                    return Err(ImageError::PaletteSize {
                        format: self.format,
                        bytes,
                    });
                }
                // 8-bit pixels index the palette store directly, so every
                // stored byte must stay within the emitted entries. The 1-
                // and 4-bit formats go through the zero-padded cache and
                // cannot read out of bounds.
                if self.format == PixelFormat::Palette8 {
                    if let Some(&index) =
                        self.pixels.iter().find(|&&b| usize::from(b) >= entries)
                    {
                        return Err(ImageError::PaletteIndexOutOfRange { index, entries });
                    }
                }
            }
            None => {
                if !self.palette.is_empty() {
                    return Err(ImageError::PaletteSize {
                        format: self.format,
                        bytes: self.palette.len(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Byte range of one scanline within `pixels`.
    pub(crate) fn scanline_bytes(&self, line: u16, led_count: usize) -> &'a [u8] {
        let stride = self.format.stride(led_count);
        let start = usize::from(line) * stride;
        &self.pixels[start..start + stride]
    }
}
