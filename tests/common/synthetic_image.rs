use edge_detector::image::PixelMatrix;

/// Generates a high-contrast checkerboard matrix with `cell`-pixel squares.
pub fn checkerboard_matrix(width: usize, height: usize, cell: usize) -> PixelMatrix {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut data = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            if ((x / cell) + (y / cell)) % 2 == 1 {
                data[y * width + x] = 255;
            }
        }
    }
    PixelMatrix::from_raw(width, height, 1, data).expect("checkerboard buffer")
}

/// Uniform single-channel matrix.
pub fn flat_matrix(width: usize, height: usize, value: u8) -> PixelMatrix {
    PixelMatrix::from_raw(width, height, 1, vec![value; width * height]).expect("flat buffer")
}

/// Encode a matrix as PNG bytes, for exercising the decode path.
pub fn png_bytes(matrix: &PixelMatrix) -> Vec<u8> {
    let img = image::GrayImage::from_raw(
        matrix.width() as u32,
        matrix.height() as u32,
        matrix.data().to_vec(),
    )
    .expect("gray buffer");
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )
    .expect("png encode");
    bytes
}
