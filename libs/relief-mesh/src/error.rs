//! # Mesh Errors
//!
//! Error types for mesh generation and serialization.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Grid too small for the selected mode.
    #[error("Invalid grid dimensions: {rows}x{cols} (minimum {min_rows}x{min_cols})")]
    InvalidGridDimensions {
        rows: usize,
        cols: usize,
        min_rows: usize,
        min_cols: usize,
    },

    /// Configuration parameter out of range.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Generated mesh would exceed the facet capacity bound.
    #[error("Too many facets: {count} (max: {max})")]
    TooManyFacets { count: usize, max: usize },

    /// The output destination could not be written.
    #[error("Output write failed: {0}")]
    WriteFailed(#[from] std::io::Error),
}

impl MeshError {
    /// Creates an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
