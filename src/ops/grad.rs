//! Image gradients (Sobel/Prewitt) with per-pixel magnitude.
//!
//! - Correlates a 3×3 kernel pair (`X` and `Y`) with border clamping.
//! - Outputs per-pixel `gx`, `gy`, `mag = sqrt(gx^2 + gy^2)`.
//!
//! Complexity: O(W·H) per pass; memory: three float buffers.

use super::convolve::{correlate, Kernel};
use crate::image::FloatImage;

const SOBEL_KERNEL_X: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: [[f32; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

const PREWITT_KERNEL_X: [[f32; 3]; 3] = [[1.0, 0.0, -1.0], [1.0, 0.0, -1.0], [1.0, 0.0, -1.0]];
const PREWITT_KERNEL_Y: [[f32; 3]; 3] = [[1.0, 1.0, 1.0], [0.0, 0.0, 0.0], [-1.0, -1.0, -1.0]];

/// Which 3×3 derivative kernel pair to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientKernel {
    Sobel,
    Prewitt,
}

impl GradientKernel {
    fn kernels(self) -> (Kernel, Kernel) {
        match self {
            GradientKernel::Sobel => (
                Kernel::from_3x3(SOBEL_KERNEL_X),
                Kernel::from_3x3(SOBEL_KERNEL_Y),
            ),
            GradientKernel::Prewitt => (
                Kernel::from_3x3(PREWITT_KERNEL_X),
                Kernel::from_3x3(PREWITT_KERNEL_Y),
            ),
        }
    }
}

/// Per-pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct GradientField {
    /// Horizontal derivative (correlation with kernel X)
    pub gx: FloatImage,
    /// Vertical derivative (correlation with kernel Y)
    pub gy: FloatImage,
    /// Euclidean magnitude per pixel: `sqrt(gx^2 + gy^2)`
    pub mag: FloatImage,
}

/// Compute gradients on a single-channel float plane.
pub fn image_gradients(l: &FloatImage, kernel: GradientKernel) -> GradientField {
    let (kx, ky) = kernel.kernels();
    let gx = correlate(l, &kx);
    let gy = correlate(l, &ky);

    let mut mag = FloatImage::new(l.w, l.h);
    for ((m, &x), &y) in mag.data.iter_mut().zip(&gx.data).zip(&gy.data) {
        *m = x.hypot(y);
    }

    GradientField { gx, gy, mag }
}
