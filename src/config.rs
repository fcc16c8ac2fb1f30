//! JSON configuration for the CLI binary.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::ops::canny::CannyParams;

/// Stable operator keys, in the order the tool runs them by default.
pub const DEFAULT_OPERATORS: [&str; 4] = ["Sobel", "Prewitt", "Canny", "Laplacian"];

#[derive(Debug, Deserialize)]
pub struct EdgeToolConfig {
    /// Photograph to analyze.
    pub input: PathBuf,
    /// Operator names to run, in order. Defaults to all four.
    #[serde(default = "default_operators")]
    pub operators: Vec<String>,
    /// Canny thresholds; ignored unless `"Canny"` is requested.
    #[serde(default)]
    pub canny: CannyParams,
    /// Directory receiving `{Label}_{stem}.png` files and `metrics.json`.
    pub output_dir: PathBuf,
}

fn default_operators() -> Vec<String> {
    DEFAULT_OPERATORS.iter().map(|s| s.to_string()).collect()
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
