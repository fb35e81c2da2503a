//! Ordered collection of packed images.

use crate::image::{ImageDescriptor, ImageError};

/// Fixed, immutable sequence of descriptors plus the active index.
///
/// Every descriptor is validated against the strip size at construction,
/// so the decoder and renderer can assume well-formed data afterwards.
#[derive(Debug, Clone)]
pub struct ImageCatalog<'a> {
    images: &'a [ImageDescriptor<'a>],
    active_index: usize,
}

impl<'a> ImageCatalog<'a> {
    pub fn new(
        images: &'a [ImageDescriptor<'a>],
        led_count: usize,
    ) -> Result<Self, ImageError> {
        if images.is_empty() {
            return Err(ImageError::EmptyCatalog);
        }
        for image in images {
            image.validate(led_count)?;
        }
        Ok(Self {
            images,
            active_index: 0,
        })
    }

    pub const fn len(&self) -> usize {
        self.images.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub const fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active(&self) -> &ImageDescriptor<'a> {
        &self.images[self.active_index]
    }

    /// Advance the active index circularly and return the new active image.
    pub fn select_next(&mut self) -> &ImageDescriptor<'a> {
        self.active_index = (self.active_index + 1) % self.images.len();
        self.active()
    }
}
