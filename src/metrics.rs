//! Edge-pixel statistics for a computed edge map.

use serde::Serialize;

use crate::image::PixelMatrix;

/// Summary statistics derived from one edge map.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeMetrics {
    /// Number of samples with a non-zero value.
    pub edge_pixel_count: usize,
    /// Total pixel count, `width * height`.
    pub total_pixels: usize,
    /// Edge pixels as a percentage of all pixels, in `[0, 100]`.
    pub density: f64,
}

/// Count edge pixels and compute their density. Pure function.
pub fn compute_metrics(edge_map: &PixelMatrix) -> EdgeMetrics {
    let edge_pixel_count = edge_map.data().iter().filter(|&&v| v != 0).count();
    let total_pixels = edge_map.width() * edge_map.height();
    let density = if total_pixels == 0 {
        0.0
    } else {
        edge_pixel_count as f64 / total_pixels as f64 * 100.0
    };
    EdgeMetrics {
        edge_pixel_count,
        total_pixels,
        density,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_nonzero_samples() {
        let m = PixelMatrix::from_raw(2, 2, 1, vec![0, 255, 1, 0]).unwrap();
        let stats = compute_metrics(&m);
        assert_eq!(stats.edge_pixel_count, 2);
        assert_eq!(stats.total_pixels, 4);
        assert_eq!(stats.density, 50.0);
    }

    #[test]
    fn density_is_bounded() {
        let all = PixelMatrix::from_raw(3, 3, 1, vec![9; 9]).unwrap();
        let none = PixelMatrix::from_raw(3, 3, 1, vec![0; 9]).unwrap();
        assert_eq!(compute_metrics(&all).density, 100.0);
        assert_eq!(compute_metrics(&none).density, 0.0);
    }

    #[test]
    fn empty_map_has_zero_density() {
        let empty = PixelMatrix::from_raw(0, 0, 1, vec![]).unwrap();
        let stats = compute_metrics(&empty);
        assert_eq!(stats.edge_pixel_count, 0);
        assert_eq!(stats.density, 0.0);
    }
}
