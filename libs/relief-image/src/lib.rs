//! # Relief Image
//!
//! Image decoding and intensity grid construction.
//!
//! ## Architecture
//!
//! ```text
//! image file → relief-image (IntensityGrid) → relief-mesh
//! ```
//!
//! ## Example
//!
//! ```rust
//! use relief_image::IntensityGrid;
//!
//! let grid = IntensityGrid::from_raw(2, 3, vec![0, 64, 128, 192, 255, 32]).unwrap();
//! assert_eq!(grid.rows(), 2);
//! assert_eq!(grid.value(1, 2), 32);
//! ```

pub mod error;
pub mod grid;

pub use error::ImageError;
pub use grid::IntensityGrid;

use std::path::Path;

/// Loads an image file and converts it to an 8-bit grayscale grid.
///
/// Any format supported by the `image` crate is accepted; color images
/// are converted to luma before gridding.
///
/// # Arguments
///
/// * `path` - Path to the input image file
///
/// # Example
///
/// ```rust,ignore
/// use relief_image::load_grayscale;
///
/// let grid = load_grayscale("logo.png")?;
/// println!("{}x{}", grid.rows(), grid.cols());
/// ```
pub fn load_grayscale(path: impl AsRef<Path>) -> Result<IntensityGrid, ImageError> {
    let path = path.as_ref();
    let luma = image::open(path)?.to_luma8();
    let (width, height) = luma.dimensions();
    tracing::debug!(path = %path.display(), width, height, "decoded image");
    IntensityGrid::from_raw(height as usize, width as usize, luma.into_raw())
}
