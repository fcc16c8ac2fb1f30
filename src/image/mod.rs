pub mod io;
pub mod matrix;
pub mod plane;

pub use self::io::{export_to_dir, load_pixel_matrix, save_png};
pub use self::matrix::PixelMatrix;
pub use self::plane::FloatImage;
