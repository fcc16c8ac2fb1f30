//! Laplacian edge operator: blur, second derivative, absolute value, clip.
//!
//! Unlike the gradient operators this path never min-max stretches its
//! output; the dynamic range is preserved and only clipped to `[0, 255]`.

use super::blur::gaussian_blur5;
use super::convolve::{correlate, Kernel};
use super::normalize::clip_to_u8;
use crate::image::{FloatImage, PixelMatrix};

const LAPLACIAN_KERNEL: [[f32; 3]; 3] = [[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]];

/// Apply the Laplacian operator to a grayscale plane.
pub fn laplacian_edges(gray: &FloatImage) -> PixelMatrix {
    let blurred = gaussian_blur5(gray);
    let mut response = correlate(&blurred, &Kernel::from_3x3(LAPLACIAN_KERNEL));
    for v in &mut response.data {
        *v = v.abs();
    }
    clip_to_u8(&response)
}
