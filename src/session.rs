//! Processing session: the one loaded image and its per-operator results.
//!
//! The session is the only stateful piece of the engine. It owns the
//! current source image, its grayscale derivation, and an
//! insertion-ordered cache of operator results. Operators are pure
//! functions of (source, parameters), so a cached entry is returned
//! bit-identical on repeat requests; loading a new image clears the whole
//! cache before the load returns, so callers can never observe a result
//! computed against a previous image.
//!
//! No internal locking: the session assumes single-writer access and is
//! serialized by its owning thread.

use log::debug;

use crate::error::EngineError;
use crate::image::{FloatImage, PixelMatrix};
use crate::metrics::{compute_metrics, EdgeMetrics};
use crate::operator::EdgeOperator;
use crate::ops::canny::CannyParams;

/// Edge map plus its statistics, as cached and returned by the session.
#[derive(Clone, Debug)]
pub struct OperatorOutcome {
    pub edge_map: PixelMatrix,
    pub metrics: EdgeMetrics,
}

struct SourceImage {
    original: PixelMatrix,
    gray: FloatImage,
}

/// Owns the currently loaded image and the cache of per-operator results.
#[derive(Default)]
pub struct ProcessingSession {
    source: Option<SourceImage>,
    // Small fixed operator set: ordered Vec doubles as lookup table and
    // preserves first-run order for export.
    cache: Vec<(EdgeOperator, OperatorOutcome)>,
}

impl ProcessingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once an image has been loaded successfully.
    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    /// Decode `bytes` and make the result the current source image. The
    /// previous source and cache are replaced only after a successful
    /// decode; on failure the prior session state remains valid.
    pub fn load_image(&mut self, bytes: &[u8]) -> Result<(), EngineError> {
        let matrix = PixelMatrix::from_bytes(bytes).map_err(|source| EngineError::Decode {
            path: None,
            source,
        })?;
        self.load_matrix(matrix);
        Ok(())
    }

    /// Make an already-decoded matrix the current source image, clearing
    /// the entire result cache.
    pub fn load_matrix(&mut self, matrix: PixelMatrix) {
        let gray = FloatImage::from_matrix(&matrix);
        debug!(
            "loaded image {}x{}x{}, cache cleared ({} entries dropped)",
            matrix.width(),
            matrix.height(),
            matrix.channels(),
            self.cache.len()
        );
        self.source = Some(SourceImage {
            original: matrix,
            gray,
        });
        self.cache.clear();
    }

    /// The current source image, if any.
    pub fn source(&self) -> Option<&PixelMatrix> {
        self.source.as_ref().map(|s| &s.original)
    }

    /// Run one operator, reusing a cached result when the operator and its
    /// parameters match a previous run on the current image. A failed run
    /// leaves the session loaded and the cache untouched.
    pub fn run(&mut self, op: EdgeOperator) -> Result<OperatorOutcome, EngineError> {
        let source = self.source.as_ref().ok_or(EngineError::NoImageLoaded)?;

        if let Some((_, outcome)) = self.cache.iter().find(|(key, _)| *key == op) {
            debug!("cache hit for {op:?}");
            return Ok(outcome.clone());
        }

        let edge_map = op.apply(&source.gray)?;
        let metrics = compute_metrics(&edge_map);
        debug!(
            "computed {op:?}: {} edge pixels, density {:.2}%",
            metrics.edge_pixel_count, metrics.density
        );
        let outcome = OperatorOutcome { edge_map, metrics };
        self.cache.push((op, outcome.clone()));
        Ok(outcome)
    }

    /// String-keyed variant of [`run`](Self::run). `params` applies to
    /// `"Canny"`; other operators take no parameters.
    pub fn run_operator(
        &mut self,
        name: &str,
        params: Option<CannyParams>,
    ) -> Result<OperatorOutcome, EngineError> {
        let op = EdgeOperator::from_name(name, params)?;
        self.run(op)
    }

    /// Run several operators in order. A failure for one name is recorded
    /// in its slot and never aborts the remaining names.
    pub fn run_all(
        &mut self,
        names: &[&str],
    ) -> Vec<(String, Result<OperatorOutcome, EngineError>)> {
        names
            .iter()
            .map(|&name| (name.to_string(), self.run_operator(name, None)))
            .collect()
    }

    /// Collect everything worth exporting: the source under the fixed
    /// `"Original"` label, then one entry per cached operator label in
    /// first-run order. When several parameterizations of one operator are
    /// cached, the most recent result wins for that label.
    pub fn export_results(&self) -> Result<Vec<(String, PixelMatrix)>, EngineError> {
        let source = self.source.as_ref().ok_or(EngineError::NoImageLoaded)?;

        let mut results = vec![("Original".to_string(), source.original.clone())];
        for (op, outcome) in &self.cache {
            let label = op.label();
            match results.iter_mut().find(|(l, _)| l.as_str() == label) {
                Some(slot) => slot.1 = outcome.edge_map.clone(),
                None => results.push((label.to_string(), outcome.edge_map.clone())),
            }
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_matrix(w: usize, h: usize) -> PixelMatrix {
        let data = (0..w * h).map(|i| ((i * 7) % 256) as u8).collect();
        PixelMatrix::from_raw(w, h, 1, data).unwrap()
    }

    #[test]
    fn empty_session_rejects_operators_and_export() {
        let mut session = ProcessingSession::new();
        assert!(matches!(
            session.run(EdgeOperator::Sobel),
            Err(EngineError::NoImageLoaded)
        ));
        assert!(matches!(
            session.export_results(),
            Err(EngineError::NoImageLoaded)
        ));
    }

    #[test]
    fn failed_decode_preserves_previous_state() {
        let mut session = ProcessingSession::new();
        session.load_matrix(gradient_matrix(8, 8));
        session.run(EdgeOperator::Sobel).unwrap();

        assert!(session.load_image(&[0xde, 0xad]).is_err());
        assert!(session.is_loaded());
        // Cache survives the failed load: the hit must not recompute.
        assert_eq!(session.cache.len(), 1);
    }

    #[test]
    fn distinct_canny_params_are_distinct_cache_entries() {
        let mut session = ProcessingSession::new();
        session.load_matrix(gradient_matrix(16, 16));

        session
            .run(EdgeOperator::Canny(CannyParams { low: 50, high: 100 }))
            .unwrap();
        session
            .run(EdgeOperator::Canny(CannyParams { low: 100, high: 200 }))
            .unwrap();
        assert_eq!(session.cache.len(), 2);
    }

    #[test]
    fn export_dedupes_labels_keeping_latest() {
        let mut session = ProcessingSession::new();
        session.load_matrix(gradient_matrix(16, 16));

        let first = session
            .run(EdgeOperator::Canny(CannyParams { low: 10, high: 20 }))
            .unwrap();
        let second = session
            .run(EdgeOperator::Canny(CannyParams { low: 200, high: 400 }))
            .unwrap();

        let results = session.export_results().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, "Original");
        assert_eq!(results[1].0, "Canny");
        assert_eq!(results[1].1, second.edge_map);
        assert_ne!(first.edge_map, second.edge_map);
    }
}
