//! Canny pipeline: blur → Sobel gradient → non-maximum suppression →
//! double threshold → hysteresis.
//!
//! Non-maximum suppression quantizes the gradient direction to four bins
//! (0°, 45°, 90°, 135°) and keeps a sample only when it is at least as
//! large as both neighbors along that direction, thinning wide ridges to
//! single-pixel edges. The outermost 1-pixel frame is suppressed to avoid
//! out-of-bounds neighbor lookups.
//!
//! Hysteresis is a stack-based flood fill: strong samples (≥ high) seed the
//! fill, weak samples (≥ low) join when 8-connected to an accepted sample,
//! transitively. Output is strictly binary {0, 255}.

use serde::{Deserialize, Serialize};

use super::blur::gaussian_blur5;
use super::grad::{image_gradients, GradientField, GradientKernel};
use crate::image::{FloatImage, PixelMatrix};

const EDGE: u8 = 255;

/// Hysteresis thresholds. The defaults match the reference behavior; the
/// caller may override both even though the stock UI never exposes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CannyParams {
    /// Weak-edge threshold on the raw Sobel magnitude.
    pub low: i32,
    /// Strong-edge threshold on the raw Sobel magnitude.
    pub high: i32,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            low: 100,
            high: 200,
        }
    }
}

/// Run the full Canny pipeline over a grayscale plane. The result is a
/// binary edge map: every sample is 0 or 255.
pub fn canny_edges(gray: &FloatImage, params: CannyParams) -> PixelMatrix {
    let blurred = gaussian_blur5(gray);
    let grad = image_gradients(&blurred, GradientKernel::Sobel);
    let thinned = non_maximum_suppression(&grad);
    hysteresis(&thinned, params.low as f32, params.high as f32)
}

/// Keep only samples that are local maxima along their gradient direction.
fn non_maximum_suppression(grad: &GradientField) -> FloatImage {
    let (w, h) = (grad.mag.w, grad.mag.h);
    let mut out = FloatImage::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    const RADIANS_TO_DEGREES: f32 = 180.0 / std::f32::consts::PI;

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag == 0.0 {
                continue;
            }

            let mut angle = gy_row[x].atan2(gx_row[x]) * RADIANS_TO_DEGREES;
            if angle < 0.0 {
                angle += 180.0;
            }

            // Two comparison neighbors along the quantized direction.
            let (n1, n2) = if !(22.5..157.5).contains(&angle) {
                (mag_row[x - 1], mag_row[x + 1])
            } else if angle < 67.5 {
                (mag_next[x + 1], mag_prev[x - 1])
            } else if angle < 112.5 {
                (mag_prev[x], mag_next[x])
            } else {
                (mag_next[x - 1], mag_prev[x + 1])
            };

            if mag >= n1 && mag >= n2 {
                out.set(x, y, mag);
            }
        }
    }
    out
}

/// Double threshold plus connectivity: strong samples are edges; weak
/// samples become edges only when 8-connected, transitively, to a strong
/// one. Everything else is suppressed.
fn hysteresis(thinned: &FloatImage, low: f32, high: f32) -> PixelMatrix {
    let (w, h) = (thinned.w, thinned.h);
    let mut out = vec![0u8; w * h];
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for y in 0..h {
        for x in 0..w {
            if thinned.get(x, y) < high || out[y * w + x] != 0 {
                continue;
            }
            out[y * w + x] = EDGE;
            stack.push((x, y));

            while let Some((cx, cy)) = stack.pop() {
                for (nx, ny) in neighbors8(cx, cy, w, h) {
                    let idx = ny * w + nx;
                    if out[idx] == 0 && thinned.get(nx, ny) >= low {
                        out[idx] = EDGE;
                        stack.push((nx, ny));
                    }
                }
            }
        }
    }

    PixelMatrix::from_raw(w, h, 1, out).unwrap_or_else(|| unreachable!("plane size mismatch"))
}

fn neighbors8(
    x: usize,
    y: usize,
    w: usize,
    h: usize,
) -> impl Iterator<Item = (usize, usize)> {
    const OFFSETS: [(isize, isize); 8] = [
        (-1, -1),
        (0, -1),
        (1, -1),
        (-1, 0),
        (1, 0),
        (-1, 1),
        (0, 1),
        (1, 1),
    ];
    OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < w && ny < h).then_some((nx, ny))
    })
}
