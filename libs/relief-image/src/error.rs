//! # Image Errors
//!
//! Error types for image decoding and grid construction.

use thiserror::Error;

/// Errors that can occur while producing an intensity grid.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The input file could not be read or decoded.
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The decoded image has no pixels.
    #[error("Image is empty: {rows}x{cols}")]
    EmptyImage { rows: usize, cols: usize },

    /// Raw buffer length does not match the stated dimensions.
    #[error("Grid data length {len} does not match {rows}x{cols}")]
    DimensionMismatch { rows: usize, cols: usize, len: usize },
}

// =============================================================================
// TESTS
// =============================================================================
