//! Owned single-channel f32 plane in row-major layout.
//!
//! Working format for all numeric stages. Values stay on the 0..255 sample
//! scale of the source image so that clip-based operators and the Canny
//! thresholds keep their conventional meaning.

use super::PixelMatrix;

#[derive(Clone, Debug, PartialEq)]
pub struct FloatImage {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order, `w * h` elements
    pub data: Vec<f32>,
}

impl FloatImage {
    /// Construct a zero-initialized plane of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    /// Lift a single-channel 8-bit matrix onto the float plane. Multichannel
    /// input is reduced through [`PixelMatrix::to_grayscale`] first.
    pub fn from_matrix(m: &PixelMatrix) -> Self {
        let gray = m.to_grayscale();
        Self {
            w: gray.width(),
            h: gray.height(),
            data: gray.data().iter().map(|&v| f32::from(v)).collect(),
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    /// Get the value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    /// Borrow row `y` as a slice.
    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }

    /// True when the plane holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}
