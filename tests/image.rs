mod tests {
    use pov_light_engine::{ImageDescriptor, ImageError, PixelFormat};

    #[test]
    fn test_format_from_raw() {
        assert_eq!(PixelFormat::from_raw(0), Some(PixelFormat::Palette1));
        assert_eq!(PixelFormat::from_raw(1), Some(PixelFormat::Palette4));
        assert_eq!(PixelFormat::from_raw(2), Some(PixelFormat::Palette8));
        assert_eq!(PixelFormat::from_raw(3), Some(PixelFormat::Truecolor));
        assert_eq!(PixelFormat::from_raw(4), None);
    }

    #[test]
    fn test_unknown_format_tag_is_fatal_at_load() {
        let err = ImageDescriptor::from_raw_parts(7, 1, &[], &[]).unwrap_err();
        assert_eq!(err, ImageError::UnknownFormat(7));
    }

    #[test]
    fn test_stride_per_format() {
        assert_eq!(PixelFormat::Palette1.stride(16), 2);
        assert_eq!(PixelFormat::Palette4.stride(16), 8);
        assert_eq!(PixelFormat::Palette8.stride(16), 16);
        assert_eq!(PixelFormat::Truecolor.stride(16), 48);
    }

    #[test]
    fn test_stride_pads_to_whole_bytes() {
        // 10 LEDs: 1-bit lines round up to 2 bytes, 4-bit to 5.
        assert_eq!(PixelFormat::Palette1.stride(10), 2);
        assert_eq!(PixelFormat::Palette4.stride(9), 5);
    }

    #[test]
    fn test_validate_accepts_well_formed_descriptor() {
        let palette = [0, 0, 0, 255, 0, 0];
        let pixels = [0u8; 6]; // 3 scanlines x 2 bytes for 16 LEDs
        let image = ImageDescriptor {
            format: PixelFormat::Palette1,
            scanline_count: 3,
            palette: &palette,
            pixels: &pixels,
        };
        assert_eq!(image.validate(16), Ok(()));
    }

    #[test]
    fn test_validate_rejects_pixel_length_mismatch() {
        let palette = [0, 0, 0, 255, 0, 0];
        let pixels = [0u8; 5];
        let image = ImageDescriptor {
            format: PixelFormat::Palette1,
            scanline_count: 3,
            palette: &palette,
            pixels: &pixels,
        };
        assert_eq!(
            image.validate(16),
            Err(ImageError::PixelLengthMismatch {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn test_validate_rejects_zero_scanlines() {
        let image = ImageDescriptor {
            format: PixelFormat::Truecolor,
            scanline_count: 0,
            palette: &[],
            pixels: &[],
        };
        assert_eq!(image.validate(16), Err(ImageError::NoScanlines));
    }

    #[test]
    fn test_validate_rejects_oversized_palette() {
        // 3 entries in a 1-bit image.
        let palette = [0u8; 9];
        let pixels = [0u8; 2];
        let image = ImageDescriptor {
            format: PixelFormat::Palette1,
            scanline_count: 1,
            palette: &palette,
            pixels: &pixels,
        };
        assert_eq!(
            image.validate(16),
            Err(ImageError::PaletteSize {
                format: PixelFormat::Palette1,
                bytes: 9
            })
        );
    }

    #[test]
    fn test_validate_rejects_ragged_palette_bytes() {
        let palette = [0u8; 4]; // not a whole number of triples
        let pixels = [0u8; 2];
        let image = ImageDescriptor {
            format: PixelFormat::Palette1,
            scanline_count: 1,
            palette: &palette,
            pixels: &pixels,
        };
        assert!(matches!(
            image.validate(16),
            Err(ImageError::PaletteSize { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_palette_on_truecolor() {
        let palette = [0u8; 3];
        let pixels = [0u8; 48];
        let image = ImageDescriptor {
            format: PixelFormat::Truecolor,
            scanline_count: 1,
            palette: &palette,
            pixels: &pixels,
        };
        assert!(matches!(
            image.validate(16),
            Err(ImageError::PaletteSize { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_palette8_index_past_stored_entries() {
        // 2 stored entries, but one pixel asks for entry 5: the decoder
        // would read past the palette store, so the load must fail.
        let palette = [0u8; 6];
        let pixels = [0u8, 5];
        let image = ImageDescriptor {
            format: PixelFormat::Palette8,
            scanline_count: 1,
            palette: &palette,
            pixels: &pixels,
        };
        assert_eq!(
            image.validate(2),
            Err(ImageError::PaletteIndexOutOfRange {
                index: 5,
                entries: 2
            })
        );
    }

    #[test]
    fn test_validate_accepts_palette8_indices_within_stored_entries() {
        let palette = [0u8; 6];
        let pixels = [0u8, 1];
        let image = ImageDescriptor {
            format: PixelFormat::Palette8,
            scanline_count: 1,
            palette: &palette,
            pixels: &pixels,
        };
        assert_eq!(image.validate(2), Ok(()));
    }

    #[test]
    fn test_partial_palette_is_allowed_for_indexed_formats() {
        // The converter emits only the entries actually in use; a 4-bit
        // image with 3 colors carries a 3-entry palette.
        let palette = [0u8; 9];
        let pixels = [0u8; 8];
        let image = ImageDescriptor {
            format: PixelFormat::Palette4,
            scanline_count: 1,
            palette: &palette,
            pixels: &pixels,
        };
        assert_eq!(image.validate(16), Ok(()));
    }
}
