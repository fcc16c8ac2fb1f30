//! Operator building blocks: correlation, blur, gradients, normalization
//! and the composed edge operators.
//!
//! Design goals
//! - Favor clarity and cache-friendly row access over micro-optimizations.
//! - Handle borders by clamping indices (replicate).
//! - Every stage is a pure function over immutable inputs; the only
//!   parallelism is rayon's row loop inside [`convolve::correlate`].

pub mod blur;
pub mod canny;
pub mod convolve;
pub mod grad;
pub mod laplacian;
pub mod normalize;

pub use blur::gaussian_blur5;
pub use canny::{canny_edges, CannyParams};
pub use convolve::{correlate, Kernel};
pub use grad::{image_gradients, GradientField, GradientKernel};
pub use laplacian::laplacian_edges;
pub use normalize::{clip_to_u8, normalize_to_u8};
