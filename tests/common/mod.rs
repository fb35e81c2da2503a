//! Host-side packer mirroring the offline image conversion tool.
//!
//! Packs a scanline-major RGB grid into the on-device byte layout: the
//! format is chosen from the unique color count (<=2 -> 1-bit, <=16 ->
//! 4-bit, <=256 -> 8-bit, else truecolor), bits fill LSB first, nibbles
//! high first, and short scanlines are zero-padded up to the LED count.

#[derive(Debug)]
pub struct PackedImage {
    pub format_tag: u8,
    pub scanline_count: u16,
    pub palette: Vec<u8>,
    pub pixels: Vec<u8>,
}

/// `grid[line][led]` is one source pixel; every line must be at most
/// `led_count` tall.
pub fn pack(grid: &[Vec<(u8, u8, u8)>], led_count: usize) -> PackedImage {
    let mut colors: Vec<(u8, u8, u8)> = Vec::new();
    let mut truecolor = false;
    'scan: for line in grid {
        for &pixel in line {
            if !colors.contains(&pixel) {
                colors.push(pixel);
                if colors.len() > 256 {
                    truecolor = true;
                    break 'scan;
                }
            }
        }
    }

    let scanline_count = u16::try_from(grid.len()).unwrap();

    if truecolor {
        let mut pixels = Vec::new();
        for line in grid {
            for led in 0..led_count {
                let (r, g, b) = line.get(led).copied().unwrap_or((0, 0, 0));
                pixels.extend_from_slice(&[r, g, b]);
            }
        }
        return PackedImage {
            format_tag: 3,
            scanline_count,
            palette: Vec::new(),
            pixels,
        };
    }

    let index_of = |pixel: (u8, u8, u8)| -> u8 {
        u8::try_from(colors.iter().position(|&c| c == pixel).unwrap()).unwrap()
    };
    let mut palette = Vec::new();
    for &(r, g, b) in &colors {
        palette.extend_from_slice(&[r, g, b]);
    }

    let mut pixels = Vec::new();
    if colors.len() <= 2 {
        for line in grid {
            for group in 0..led_count.div_ceil(8) {
                let mut byte = 0u8;
                for bit in 0..8 {
                    let led = group * 8 + bit;
                    if let Some(&pixel) = line.get(led) {
                        byte |= index_of(pixel) << bit;
                    }
                }
                pixels.push(byte);
            }
        }
        PackedImage {
            format_tag: 0,
            scanline_count,
            palette,
            pixels,
        }
    } else if colors.len() <= 16 {
        for line in grid {
            for pair in 0..led_count.div_ceil(2) {
                let first = line.get(pair * 2).map(|&p| index_of(p)).unwrap_or(0);
                let second = line.get(pair * 2 + 1).map(|&p| index_of(p)).unwrap_or(0);
                pixels.push((first << 4) | second);
            }
        }
        PackedImage {
            format_tag: 1,
            scanline_count,
            palette,
            pixels,
        }
    } else {
        for line in grid {
            for led in 0..led_count {
                pixels.push(line.get(led).map(|&p| index_of(p)).unwrap_or(0));
            }
        }
        PackedImage {
            format_tag: 2,
            scanline_count,
            palette,
            pixels,
        }
    }
}
