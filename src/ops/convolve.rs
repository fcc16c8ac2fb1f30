//! Generic 2-D spatial correlation with replicate borders.
//!
//! The engine applies the kernel as a direct correlation (no flip), the
//! convention gradient kernels are written in. Out-of-bounds taps reuse the
//! nearest in-bounds sample, so every operator sees the same border
//! artifacts. Output rows are independent, which makes the row loop safe to
//! run in parallel.

use rayon::prelude::*;

use crate::image::FloatImage;

/// Square correlation kernel with odd side length.
#[derive(Clone, Debug)]
pub struct Kernel {
    side: usize,
    weights: Vec<f32>,
}

impl Kernel {
    /// Build a kernel from row-major weights. Returns `None` when `side` is
    /// zero or even, or when `weights.len() != side * side`.
    pub fn new(side: usize, weights: Vec<f32>) -> Option<Self> {
        if side == 0 || side % 2 == 0 || weights.len() != side * side {
            return None;
        }
        Some(Self { side, weights })
    }

    /// Build a 3×3 kernel from a fixed weight table.
    pub fn from_3x3(rows: [[f32; 3]; 3]) -> Self {
        Self {
            side: 3,
            weights: rows.into_iter().flatten().collect(),
        }
    }

    /// Kernel side length.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Distance from center to edge: `(side - 1) / 2`.
    #[inline]
    pub fn radius(&self) -> usize {
        (self.side - 1) / 2
    }
}

/// Correlate `input` with `kernel`, replicating edge samples for taps that
/// fall outside the image. The output has the same width and height.
pub fn correlate(input: &FloatImage, kernel: &Kernel) -> FloatImage {
    let (w, h) = (input.w, input.h);
    let mut out = FloatImage::new(w, h);
    if input.is_empty() {
        return out;
    }

    let r = kernel.radius() as isize;
    let side = kernel.side;
    out.data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, out_row)| {
            for (x, out_px) in out_row.iter_mut().enumerate() {
                let mut acc = 0.0f32;
                for ky in 0..side {
                    let sy = (y as isize + ky as isize - r).clamp(0, h as isize - 1) as usize;
                    let in_row = input.row(sy);
                    let k_row = &kernel.weights[ky * side..(ky + 1) * side];
                    for (kx, &weight) in k_row.iter().enumerate() {
                        let sx = (x as isize + kx as isize - r).clamp(0, w as isize - 1) as usize;
                        acc += in_row[sx] * weight;
                    }
                }
                *out_px = acc;
            }
        });
    out
}
