//! Owned, decoded pixel data in row-major interleaved layout.
//!
//! A [`PixelMatrix`] is either 3-channel RGB (decoded color input) or
//! 1-channel grayscale (decoded gray input, or any operator output). It is
//! never mutated after construction; loading a new image replaces the
//! matrix wholesale.

use image::DynamicImage;

/// Decoded 8-bit pixel data, `width * height * channels` samples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelMatrix {
    width: usize,
    height: usize,
    channels: usize, // 1 (gray) or 3 (RGB)
    data: Vec<u8>,
}

impl PixelMatrix {
    /// Decode raw image bytes (PNG/JPEG/BMP/GIF/…). Color input is stored
    /// as 3-channel RGB, grayscale input as a single channel. On failure no
    /// partial matrix is produced.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let decoded = image::load_from_memory(bytes)?;
        Ok(Self::from_decoded(decoded))
    }

    fn from_decoded(decoded: DynamicImage) -> Self {
        match decoded {
            DynamicImage::ImageLuma8(gray) => {
                let (w, h) = (gray.width() as usize, gray.height() as usize);
                Self {
                    width: w,
                    height: h,
                    channels: 1,
                    data: gray.into_raw(),
                }
            }
            other => {
                let rgb = other.into_rgb8();
                let (w, h) = (rgb.width() as usize, rgb.height() as usize);
                Self {
                    width: w,
                    height: h,
                    channels: 3,
                    data: rgb.into_raw(),
                }
            }
        }
    }

    /// Build a matrix from raw samples. Returns `None` when `channels` is
    /// not 1 or 3 or when `data.len() != width * height * channels`.
    pub fn from_raw(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Option<Self> {
        if !matches!(channels, 1 | 3) || data.len() != width * height * channels {
            return None;
        }
        Some(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples per pixel: 1 or 3.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Backing storage, row-major, channels interleaved.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Sample value at (x, y) for channel `c`.
    #[inline]
    pub fn sample(&self, x: usize, y: usize, c: usize) -> u8 {
        self.data[(y * self.width + x) * self.channels + c]
    }

    /// Derive a single-channel matrix using BT.601 luma weights
    /// (`0.299 R + 0.587 G + 0.114 B`, rounded). Already-gray input is
    /// returned as a clone.
    pub fn to_grayscale(&self) -> PixelMatrix {
        if self.channels == 1 {
            return self.clone();
        }
        let mut gray = Vec::with_capacity(self.width * self.height);
        for px in self.data.chunks_exact(3) {
            let luma =
                0.299 * f32::from(px[0]) + 0.587 * f32::from(px[1]) + 0.114 * f32::from(px[2]);
            gray.push(luma.round() as u8);
        }
        PixelMatrix {
            width: self.width,
            height: self.height,
            channels: 1,
            data: gray,
        }
    }
}
