//! Edge detection engine with per-image result caching.
//!
//! The crate implements the processing core of an edge-detection tool:
//!
//! - [`image`] – pixel containers: decoded 8-bit matrices and the
//!   single-channel float plane the operators work on.
//! - [`ops`] – the numeric building blocks: 2-D correlation with replicate
//!   borders, Gaussian blur, Sobel/Prewitt gradients, min-max normalization,
//!   the Laplacian operator and the full Canny pipeline.
//! - [`operator`] – the fixed operator set (`Sobel`, `Prewitt`, `Canny`,
//!   `Laplacian`) as one dispatchable enum.
//! - [`metrics`] – edge pixel count and density for a computed edge map.
//! - [`session`] – [`ProcessingSession`]: owns the loaded image and caches
//!   one result per operator/parameter combination.
//!
//! All operators are deterministic pure functions of the loaded image and
//! their parameters; the session exploits that for caching.

pub mod error;
pub mod image;
pub mod metrics;
pub mod operator;
pub mod ops;
pub mod session;

// CLI support for the bundled binary.
pub mod config;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::EngineError;
pub use crate::metrics::{compute_metrics, EdgeMetrics};
pub use crate::operator::EdgeOperator;
pub use crate::ops::canny::CannyParams;
pub use crate::session::{OperatorOutcome, ProcessingSession};

/// Small prelude for quick experiments.
///
/// ```no_run
/// use edge_detector::prelude::*;
///
/// # fn main() -> Result<(), EngineError> {
/// let bytes = std::fs::read("photo.jpg").expect("readable file");
/// let mut session = ProcessingSession::new();
/// session.load_image(&bytes)?;
///
/// let outcome = session.run(EdgeOperator::Sobel)?;
/// println!("edge density: {:.2}%", outcome.metrics.density);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::error::EngineError;
    pub use crate::image::PixelMatrix;
    pub use crate::{CannyParams, EdgeOperator, OperatorOutcome, ProcessingSession};
}
