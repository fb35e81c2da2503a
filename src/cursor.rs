/// Current scanline position within the active image.
///
/// Advances and wraps once per render cycle; reset whenever the active
/// image changes so cursor and palette never refer to different images.
#[derive(Debug, Clone, Copy)]
pub struct ScanlineCursor {
    line: u16,
    count: u16,
}

impl ScanlineCursor {
    pub const fn new(count: u16) -> Self {
        Self { line: 0, count }
    }

    pub const fn line(self) -> u16 {
        self.line
    }

    /// Step to the next scanline, wrapping at the image's scanline count.
    pub fn advance(&mut self) {
        self.line += 1;
        if self.line >= self.count {
            self.line = 0;
        }
    }

    /// Restart at line 0 with a (possibly different) scanline count.
    pub fn reset(&mut self, count: u16) {
        self.line = 0;
        self.count = count;
    }
}
