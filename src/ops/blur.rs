//! 5×5 Gaussian smoothing used by the Laplacian and Canny pipelines.

use super::convolve::{correlate, Kernel};
use crate::image::FloatImage;

/// 1-D binomial 5-tap profile, `[1,4,6,4,1]/16` (approx. sigma ≈ 1).
const TAPS: [f32; 5] = [
    1.0 / 16.0,
    4.0 / 16.0,
    6.0 / 16.0,
    4.0 / 16.0,
    1.0 / 16.0,
];

/// The 5×5 Gaussian kernel as the outer product of the binomial taps.
/// Weights sum to 1, so flat regions pass through unchanged.
pub fn gaussian5_kernel() -> Kernel {
    let mut weights = Vec::with_capacity(25);
    for ty in TAPS {
        for tx in TAPS {
            weights.push(ty * tx);
        }
    }
    // 5 is odd and the weight count matches by construction.
    Kernel::new(5, weights).unwrap_or_else(|| unreachable!())
}

/// Smooth a plane with the 5×5 Gaussian, replicate borders.
pub fn gaussian_blur5(input: &FloatImage) -> FloatImage {
    correlate(input, &gaussian5_kernel())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_sums_to_one() {
        let k = gaussian5_kernel();
        assert_eq!(k.side(), 5);
        let sum: f32 = TAPS
            .iter()
            .flat_map(|ty| TAPS.iter().map(move |tx| ty * tx))
            .sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn flat_image_is_unchanged() {
        let input = FloatImage {
            w: 7,
            h: 5,
            data: vec![42.0; 35],
        };
        let out = gaussian_blur5(&input);
        for &v in &out.data {
            assert!((v - 42.0).abs() < 1e-4);
        }
    }

    #[test]
    fn blur_reduces_a_single_spike() {
        let mut input = FloatImage::new(9, 9);
        input.set(4, 4, 160.0);
        let out = gaussian_blur5(&input);
        // Center weight is (6/16)^2 = 0.140625.
        assert!((out.get(4, 4) - 160.0 * 0.140625).abs() < 1e-3);
        assert!(out.get(4, 4) < 160.0);
        // Mass is preserved by the unit-sum kernel (spike far from borders).
        let total: f32 = out.data.iter().sum();
        assert!((total - 160.0).abs() < 1e-3);
    }
}
