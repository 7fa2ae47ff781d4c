//! Read-only decoded source image.

use image::{RgbImage, RgbaImage};

use super::RasterError;

/// A decoded 8-bit source image with 3 (RGB) or 4 (RGBA) channels.
///
/// Pixels are row-major with the origin at the top-left. The buffer is
/// validated on construction, so every `SourceImage` can be sampled anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    width: u32,
    height: u32,
    channels: usize,
    data: Vec<u8>,
}

impl SourceImage {
    /// Wraps raw pixel bytes.
    ///
    /// # Errors
    /// Fails if either dimension is zero, `channels` is not 3 or 4, or `data`
    /// is not exactly `width * height * channels` bytes.
    pub fn new(width: u32, height: u32, channels: usize, data: Vec<u8>) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptySource(width, height));
        }
        if channels != 3 && channels != 4 {
            return Err(RasterError::UnsupportedChannels(channels));
        }
        let expected = width as usize * height as usize * channels;
        if data.len() != expected {
            return Err(RasterError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Takes ownership of an RGB8 image buffer.
    pub fn from_rgb_image(image: RgbImage) -> Result<Self, RasterError> {
        let (width, height) = image.dimensions();
        Self::new(width, height, 3, image.into_raw())
    }

    /// Takes ownership of an RGBA8 image buffer. Alpha is carried but never sampled.
    pub fn from_rgba_image(image: RgbaImage) -> Result<Self, RasterError> {
        let (width, height) = image.dimensions();
        Self::new(width, height, 4, image.into_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per pixel (3 or 4).
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the RGB channels of the pixel at `(x, y)`.
    ///
    /// # Panics
    /// If `(x, y)` lies outside the image.
    #[inline]
    pub fn rgb(&self, x: u32, y: u32) -> &[u8] {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of bounds", x, y);
        let idx = (y as usize * self.width as usize + x as usize) * self.channels;
        &self.data[idx..idx + 3]
    }

    /// Nearest-neighbor lookup at normalized `(u, v)`.
    ///
    /// Indices are `floor(u * width)` and `floor(v * height)`, clamped to the
    /// last row/column so that `u == 1.0` or `v == 1.0` stay inside the buffer.
    #[inline]
    pub fn sample_nearest(&self, u: f64, v: f64) -> &[u8] {
        let x = sample_index(u, self.width);
        let y = sample_index(v, self.height);
        self.rgb(x, y)
    }
}

#[inline]
fn sample_index(coord: f64, extent: u32) -> u32 {
    let last = (extent - 1) as f64;
    // NaN survives the clamp and casts to 0.
    (coord * extent as f64).floor().clamp(0.0, last) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba};

    fn gradient(width: u32, height: u32) -> SourceImage {
        let img = RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 7]));
        SourceImage::from_rgb_image(img).unwrap()
    }

    #[test]
    fn test_rejects_bad_buffers() {
        assert!(matches!(
            SourceImage::new(0, 4, 3, vec![]),
            Err(RasterError::EmptySource(0, 4))
        ));
        assert!(matches!(
            SourceImage::new(2, 2, 1, vec![0; 4]),
            Err(RasterError::UnsupportedChannels(1))
        ));
        assert!(matches!(
            SourceImage::new(2, 2, 3, vec![0; 11]),
            Err(RasterError::BufferSizeMismatch { expected: 12, actual: 11 })
        ));
        assert!(SourceImage::new(2, 2, 4, vec![0; 16]).is_ok());
    }

    #[test]
    fn test_sample_nearest_floors() {
        let src = gradient(8, 4);
        assert_eq!(src.sample_nearest(0.0, 0.0), &[0, 0, 7]);
        assert_eq!(src.sample_nearest(0.5, 0.5), &[4, 2, 7]);
        assert_eq!(src.sample_nearest(0.124, 0.249), &[0, 0, 7]);
        assert_eq!(src.sample_nearest(0.125, 0.25), &[1, 1, 7]);
    }

    #[test]
    fn test_sample_clamps_at_boundary() {
        let src = gradient(8, 4);
        assert_eq!(src.sample_nearest(1.0, 1.0), &[7, 3, 7]);
        assert_eq!(src.sample_nearest(1.0 + 1e-9, -1e-9), &[7, 0, 7]);
        assert_eq!(src.sample_nearest(f64::NAN, 0.0), &[0, 0, 7]);
    }

    #[test]
    fn test_rgba_ignores_alpha() {
        let img = RgbaImage::from_fn(3, 2, |x, y| Rgba([x as u8 * 10, y as u8 * 20, 30, 255]));
        let src = SourceImage::from_rgba_image(img).unwrap();
        assert_eq!(src.channels(), 4);
        assert_eq!(src.rgb(2, 1), &[20, 20, 30]);
        assert_eq!(src.sample_nearest(0.99, 0.99), &[20, 20, 30]);
    }
}
