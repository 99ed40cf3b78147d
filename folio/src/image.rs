// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::sync::Arc;

use folio_zoom::ZoomContent;
use kurbo::Size;

use crate::AssetError;

/// A decoded RGBA8 image.
///
/// Pixels are shared, so cloning an `Image` is cheap.
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Image {
    /// Wraps tightly packed RGBA8 pixels, row by row.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::InvalidDimensions`] if either side is zero or
    /// `pixels` does not hold exactly `width * height * 4` bytes.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, AssetError> {
        let expected = u64::from(width) * u64::from(height) * 4;
        if width == 0 || height == 0 || pixels.len() as u64 != expected {
            return Err(AssetError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: pixels.into(),
        })
    }

    /// A single-color image, handy for placeholders and tests.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::InvalidDimensions`] if either side is zero.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, AssetError> {
        let count = usize::try_from(u64::from(width) * u64::from(height))
            .map_err(|_| AssetError::InvalidDimensions { width, height })?;
        Self::from_rgba8(width, height, rgba.repeat(count))
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// The RGBA8 pixel data.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl ZoomContent for Image {
    fn intrinsic_size(&self) -> Size {
        self.size()
    }
}

impl TryFrom<image::RgbaImage> for Image {
    type Error = AssetError;

    fn try_from(rgba: image::RgbaImage) -> Result<Self, Self::Error> {
        let (width, height) = rgba.dimensions();
        Self::from_rgba8(width, height, rgba.into_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_buffers() {
        assert!(matches!(
            Image::from_rgba8(2, 2, vec![0; 15]),
            Err(AssetError::InvalidDimensions {
                width: 2,
                height: 2
            })
        ));
        assert!(Image::from_rgba8(0, 4, Vec::new()).is_err());
    }

    #[test]
    fn solid_fills_every_pixel() {
        let image = Image::solid(3, 2, [1, 2, 3, 4]).unwrap();
        assert_eq!(image.size(), Size::new(3.0, 2.0));
        assert_eq!(image.pixels().len(), 24);
        assert!(image.pixels().chunks(4).all(|px| px == [1, 2, 3, 4]));
    }

    #[test]
    fn converts_from_decoded_buffers() {
        let rgba = image::RgbaImage::from_pixel(4, 1, image::Rgba([9, 9, 9, 255]));
        let image = Image::try_from(rgba).unwrap();
        assert_eq!(image.intrinsic_size(), Size::new(4.0, 1.0));
    }
}
