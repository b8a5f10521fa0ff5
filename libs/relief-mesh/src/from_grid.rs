//! # Grid to Mesh Conversion
//!
//! The single entry point that selects a builder from the run
//! configuration.

use crate::error::MeshError;
use crate::extrude::{binary_extrude, continuous_extrude};
use crate::mesh::Mesh;
use crate::params::{MeshConfig, MeshMode};
use relief_image::IntensityGrid;

/// Converts an intensity grid to a closed mesh.
///
/// Exactly one builder runs per invocation, selected by `config.mode`.
/// The returned facet sequence is complete and deterministic; the
/// builders validate the configuration and grid dimensions before
/// emitting anything.
///
/// # Example
///
/// ```rust
/// use relief_image::IntensityGrid;
/// use relief_mesh::{grid_to_mesh, MeshConfig};
///
/// let grid = IntensityGrid::from_raw(2, 2, vec![0, 255, 255, 0]).unwrap();
/// let mesh = grid_to_mesh(&grid, &MeshConfig::default()).unwrap();
/// assert_eq!(mesh.facet_count(), 12);
/// ```
pub fn grid_to_mesh(grid: &IntensityGrid, config: &MeshConfig) -> Result<Mesh, MeshError> {
    match config.mode {
        MeshMode::Binary => binary_extrude(grid, config),
        MeshMode::Continuous => continuous_extrude(grid, config),
    }
}
