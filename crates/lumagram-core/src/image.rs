//! In-memory pixel buffers accepted by the histogram collector.
//!
//! Decoding is the caller's job. This module only adapts buffers that are
//! already decoded: packed RGB8/RGBA8 bytes or `image` crate buffers.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::HistogramError;

/// Red, green and blue components of one pixel.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct PixelSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PixelSample {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for PixelSample {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// A decoded 8-bit image, stored row-major without alpha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    width: u32,
    height: u32,
    pixels: Vec<PixelSample>,
}

impl SourceImage {
    /// Wrap a row-major pixel buffer of exactly `width * height` samples.
    pub fn new(width: u32, height: u32, pixels: Vec<PixelSample>) -> Result<Self, HistogramError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(HistogramError::PixelCountMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { width, height, pixels })
    }

    /// Build from packed RGB8 bytes (3 bytes per pixel).
    pub fn from_rgb8(width: u32, height: u32, bytes: &[u8]) -> Result<Self, HistogramError> {
        let samples: &[PixelSample] = bytemuck::try_cast_slice(bytes)
            .map_err(|_| HistogramError::MisalignedBuffer { len: bytes.len(), stride: 3 })?;
        Self::new(width, height, samples.to_vec())
    }

    /// Build from packed RGBA8 bytes (4 bytes per pixel). Alpha is ignored.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self, HistogramError> {
        let texels: &[[u8; 4]] = bytemuck::try_cast_slice(bytes)
            .map_err(|_| HistogramError::MisalignedBuffer { len: bytes.len(), stride: 4 })?;
        let pixels = texels
            .iter()
            .map(|&[r, g, b, _]| PixelSample::new(r, g, b))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[PixelSample] {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

impl From<&image::RgbImage> for SourceImage {
    fn from(img: &image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.pixels().map(|p| PixelSample::from(p.0)).collect();
        Self { width, height, pixels }
    }
}

impl From<&image::RgbaImage> for SourceImage {
    fn from(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|p| PixelSample::new(p.0[0], p.0[1], p.0[2]))
            .collect();
        Self { width, height, pixels }
    }
}

impl From<&image::DynamicImage> for SourceImage {
    fn from(img: &image::DynamicImage) -> Self {
        match img {
            image::DynamicImage::ImageRgb8(rgb) => Self::from(rgb),
            image::DynamicImage::ImageRgba8(rgba) => Self::from(rgba),
            other => Self::from(&other.to_rgb8()),
        }
    }
}
