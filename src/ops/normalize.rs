//! Quantization of float planes to displayable 8-bit matrices.
//!
//! Two distinct paths, deliberately not interchangeable:
//! - [`normalize_to_u8`] stretches the full dynamic range to 0..255
//!   (gradient magnitude operators);
//! - [`clip_to_u8`] rounds and clips without stretching (Laplacian).

use crate::image::{FloatImage, PixelMatrix};

/// Min-max rescale to `[0, 255]`. A constant plane (`max == min`) maps to
/// all zeros; that is a defined degenerate case, not an error.
pub fn normalize_to_u8(input: &FloatImage) -> PixelMatrix {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in &input.data {
        min = min.min(v);
        max = max.max(v);
    }

    let data = if input.data.is_empty() || max <= min {
        vec![0u8; input.data.len()]
    } else {
        let scale = 255.0 / (max - min);
        input
            .data
            .iter()
            .map(|&v| ((v - min) * scale).round().clamp(0.0, 255.0) as u8)
            .collect()
    };

    // Invariant: plane and matrix sizes agree by construction.
    PixelMatrix::from_raw(input.w, input.h, 1, data)
        .unwrap_or_else(|| unreachable!("float plane size mismatch"))
}

/// Round and clip to `[0, 255]` without stretching the dynamic range.
pub fn clip_to_u8(input: &FloatImage) -> PixelMatrix {
    let data = input
        .data
        .iter()
        .map(|&v| v.round().clamp(0.0, 255.0) as u8)
        .collect();
    PixelMatrix::from_raw(input.w, input.h, 1, data)
        .unwrap_or_else(|| unreachable!("float plane size mismatch"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane(w: usize, h: usize, data: &[f32]) -> FloatImage {
        FloatImage {
            w,
            h,
            data: data.to_vec(),
        }
    }

    #[test]
    fn stretches_range_to_full_scale() {
        let input = plane(3, 1, &[10.0, 20.0, 30.0]);
        let out = normalize_to_u8(&input);
        assert_eq!(out.data(), &[0, 128, 255]);
    }

    #[test]
    fn constant_plane_maps_to_zero() {
        let input = plane(2, 2, &[7.5; 4]);
        let out = normalize_to_u8(&input);
        assert_eq!(out.data(), &[0, 0, 0, 0]);
    }

    #[test]
    fn normalized_output_is_single_channel_same_shape() {
        let input = plane(5, 3, &[0.0; 15]);
        let out = normalize_to_u8(&input);
        assert_eq!((out.width(), out.height(), out.channels()), (5, 3, 1));
    }

    #[test]
    fn clip_does_not_stretch() {
        let input = plane(4, 1, &[-3.0, 0.4, 100.0, 999.0]);
        let out = clip_to_u8(&input);
        assert_eq!(out.data(), &[0, 0, 100, 255]);
    }
}
