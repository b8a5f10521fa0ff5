//! # Generation Parameters
//!
//! The flat, immutable configuration shared by both builders.

use crate::error::MeshError;
use config::constants::{
    DEFAULT_EXTRUDE_HEIGHT, DEFAULT_THRESHOLD, DEFAULT_X_SIZE, DEFAULT_Y_SIZE, MAX_THRESHOLD,
};
use serde::{Deserialize, Serialize};

/// Selects which builder runs for a generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeshMode {
    /// Per-cell box extrusion thresholded on intensity.
    Binary,
    /// Height-field draping where every pixel contributes height.
    Continuous,
}

/// Parameters for one generation run.
///
/// Read-only for the duration of the run; both builders take it by
/// reference. Validated once before any facet is emitted.
///
/// # Example
///
/// ```rust
/// use relief_mesh::{MeshConfig, MeshMode};
///
/// let config = MeshConfig {
///     mode: MeshMode::Binary,
///     threshold: 64,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshConfig {
    /// Extrusion height along Z in output units
    pub extrude_height: f64,
    /// Output width (X dimension) in output units
    pub x_size: f64,
    /// Output depth (Y dimension) in output units
    pub y_size: f64,
    /// Builder selection
    pub mode: MeshMode,
    /// Solidity threshold for binary mode, 0-255; pixels strictly below
    /// are solid
    pub threshold: u32,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            extrude_height: DEFAULT_EXTRUDE_HEIGHT,
            x_size: DEFAULT_X_SIZE,
            y_size: DEFAULT_Y_SIZE,
            mode: MeshMode::Continuous,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl MeshConfig {
    /// Validates all scalar parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidConfiguration`] for non-positive
    /// sizes or heights, or a threshold outside `[0, 255]`.
    pub fn validate(&self) -> Result<(), MeshError> {
        if !(self.extrude_height > 0.0) {
            return Err(MeshError::invalid_configuration(format!(
                "extrude_height must be positive, got {}",
                self.extrude_height
            )));
        }
        if !(self.x_size > 0.0) {
            return Err(MeshError::invalid_configuration(format!(
                "x_size must be positive, got {}",
                self.x_size
            )));
        }
        if !(self.y_size > 0.0) {
            return Err(MeshError::invalid_configuration(format!(
                "y_size must be positive, got {}",
                self.y_size
            )));
        }
        if self.threshold > MAX_THRESHOLD {
            return Err(MeshError::invalid_configuration(format!(
                "threshold must be in [0, {}], got {}",
                MAX_THRESHOLD, self.threshold
            )));
        }
        Ok(())
    }
}
