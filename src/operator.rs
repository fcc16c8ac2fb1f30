//! The fixed operator set as one dispatchable value.
//!
//! Callers address operators through stable string keys (`"Sobel"`,
//! `"Prewitt"`, `"Canny"`, `"Laplacian"`) that double as cache labels and
//! export file-name prefixes. The enum value, parameters included, is the
//! cache key: two Canny runs with different thresholds are distinct
//! entries.

use crate::error::EngineError;
use crate::image::{FloatImage, PixelMatrix};
use crate::ops::canny::{canny_edges, CannyParams};
use crate::ops::grad::{image_gradients, GradientKernel};
use crate::ops::laplacian::laplacian_edges;
use crate::ops::normalize::normalize_to_u8;

/// One edge-detection operator together with its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeOperator {
    Sobel,
    Prewitt,
    Laplacian,
    Canny(CannyParams),
}

impl EdgeOperator {
    /// Stable label used for cache display and export file names.
    pub fn label(&self) -> &'static str {
        match self {
            EdgeOperator::Sobel => "Sobel",
            EdgeOperator::Prewitt => "Prewitt",
            EdgeOperator::Laplacian => "Laplacian",
            EdgeOperator::Canny(_) => "Canny",
        }
    }

    /// Resolve a string key to an operator. `params` applies to `"Canny"`
    /// only (the other operators take none and ignore it); omitted params
    /// select the Canny defaults. Unknown names are operator-scoped errors
    /// so that a batch run can record them and continue.
    pub fn from_name(name: &str, params: Option<CannyParams>) -> Result<Self, EngineError> {
        match name {
            "Sobel" => Ok(EdgeOperator::Sobel),
            "Prewitt" => Ok(EdgeOperator::Prewitt),
            "Laplacian" => Ok(EdgeOperator::Laplacian),
            "Canny" => Ok(EdgeOperator::Canny(params.unwrap_or_default())),
            other => Err(EngineError::operator(other, "unknown operator name")),
        }
    }

    /// Run the operator over a grayscale plane, producing an 8-bit edge map
    /// of the same width and height.
    pub fn apply(&self, gray: &FloatImage) -> Result<PixelMatrix, EngineError> {
        if gray.is_empty() {
            return Err(EngineError::operator(self.label(), "empty source image"));
        }
        match *self {
            EdgeOperator::Sobel => {
                let grad = image_gradients(gray, GradientKernel::Sobel);
                Ok(normalize_to_u8(&grad.mag))
            }
            EdgeOperator::Prewitt => {
                let grad = image_gradients(gray, GradientKernel::Prewitt);
                Ok(normalize_to_u8(&grad.mag))
            }
            EdgeOperator::Laplacian => Ok(laplacian_edges(gray)),
            EdgeOperator::Canny(params) => {
                if params.low > params.high {
                    return Err(EngineError::operator(
                        self.label(),
                        format!(
                            "low threshold {} exceeds high threshold {}",
                            params.low, params.high
                        ),
                    ));
                }
                Ok(canny_edges(gray, params))
            }
        }
    }
}
