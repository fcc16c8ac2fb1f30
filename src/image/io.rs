//! I/O helpers for loading photographs and exporting edge maps.
//!
//! - [`load_pixel_matrix`]: read an image file into a [`PixelMatrix`].
//! - [`save_png`]: write a matrix to a PNG file.
//! - [`export_to_dir`]: write a batch of labelled results as
//!   `{Label}_{base_name}.png`, attempting every file even when some fail.

use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, RgbImage};
use log::debug;

use super::PixelMatrix;
use crate::error::EngineError;

/// Load an image from disk and decode it into a [`PixelMatrix`].
pub fn load_pixel_matrix(path: &Path) -> Result<PixelMatrix, EngineError> {
    let bytes = fs::read(path).map_err(|e| EngineError::Decode {
        path: Some(path.to_path_buf()),
        source: image::ImageError::IoError(e),
    })?;
    PixelMatrix::from_bytes(&bytes).map_err(|source| EngineError::Decode {
        path: Some(path.to_path_buf()),
        source,
    })
}

/// Save a matrix as a PNG file, creating parent directories as needed.
/// Single-channel matrices are written as grayscale, 3-channel as RGB.
pub fn save_png(matrix: &PixelMatrix, path: &Path) -> Result<(), EngineError> {
    ensure_parent_dir(path)?;
    let w = matrix.width() as u32;
    let h = matrix.height() as u32;
    let result = match matrix.channels() {
        1 => GrayImage::from_raw(w, h, matrix.data().to_vec())
            .ok_or_else(buffer_mismatch)
            .and_then(|img| img.save(path)),
        _ => RgbImage::from_raw(w, h, matrix.data().to_vec())
            .ok_or_else(buffer_mismatch)
            .and_then(|img| img.save(path)),
    };
    result.map_err(|source| EngineError::Export {
        path: path.to_path_buf(),
        source,
    })
}

/// Write each labelled result to `dir` as `{label}_{base_name}.png`.
///
/// Export is all-or-nothing per file: a failed write is recorded for that
/// file and the remaining files are still attempted.
pub fn export_to_dir(
    results: &[(String, PixelMatrix)],
    dir: &Path,
    base_name: &str,
) -> Vec<(PathBuf, Result<(), EngineError>)> {
    results
        .iter()
        .map(|(label, matrix)| {
            let path = dir.join(format!("{label}_{base_name}.png"));
            let outcome = save_png(matrix, &path);
            if outcome.is_ok() {
                debug!("exported {}", path.display());
            }
            (path, outcome)
        })
        .collect()
}

fn buffer_mismatch() -> image::ImageError {
    image::ImageError::IoError(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        "pixel buffer does not match declared dimensions",
    ))
}

fn ensure_parent_dir(path: &Path) -> Result<(), EngineError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| EngineError::Export {
                path: parent.to_path_buf(),
                source: image::ImageError::IoError(e),
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_reports_path() {
        let err = load_pixel_matrix(Path::new("definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, EngineError::Decode { path: Some(_), .. }));
        assert!(err.to_string().contains("not/here.png"));
    }

    #[test]
    fn export_names_files_by_label() {
        let dir = tempfile::tempdir().unwrap();
        let gray = PixelMatrix::from_raw(2, 2, 1, vec![0, 255, 255, 0]).unwrap();
        let results = vec![
            ("Original".to_string(), gray.clone()),
            ("Sobel".to_string(), gray),
        ];

        let written = export_to_dir(&results, dir.path(), "photo");
        assert_eq!(written.len(), 2);
        for (path, outcome) in &written {
            assert!(outcome.is_ok(), "write failed: {outcome:?}");
            assert!(path.exists());
        }
        assert!(dir.path().join("Original_photo.png").exists());
        assert!(dir.path().join("Sobel_photo.png").exists());
    }

    #[test]
    fn one_failed_write_does_not_stop_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        // Zero-sized matrix cannot be encoded as PNG and must fail alone.
        let bad = PixelMatrix::from_raw(0, 0, 1, vec![]).unwrap();
        let good = PixelMatrix::from_raw(1, 1, 1, vec![7]).unwrap();
        let results = vec![("Canny".to_string(), bad), ("Laplacian".to_string(), good)];

        let written = export_to_dir(&results, dir.path(), "x");
        assert!(written[0].1.is_err());
        assert!(written[1].1.is_ok());
        assert!(dir.path().join("Laplacian_x.png").exists());
    }
}
