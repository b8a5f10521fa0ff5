//! # Relief Mesh
//!
//! Watertight mesh generation from grayscale intensity grids.
//! Converts an [`IntensityGrid`](relief_image::IntensityGrid) from
//! `relief-image` into a closed triangle mesh and serializes it as
//! ASCII STL.
//!
//! ## Architecture
//!
//! ```text
//! relief-image (IntensityGrid) → relief-mesh (Mesh) → ASCII STL
//! ```
//!
//! ## Algorithms
//!
//! - **Binary extrusion**: every cell below the threshold becomes a box;
//!   walls between adjacent solid cells are suppressed
//! - **Continuous extrusion**: the grid is draped as a height field and
//!   closed with a flat bottom and boundary walls
//!
//! Both emit outward-wound facets in a deterministic row-major order.
//!
//! ## Usage
//!
//! ```rust
//! use relief_image::IntensityGrid;
//! use relief_mesh::{ascii_stl_string, grid_to_mesh, MeshConfig, MeshMode};
//!
//! let grid = IntensityGrid::from_raw(2, 2, vec![0, 255, 255, 0]).unwrap();
//! let config = MeshConfig::default();
//! let mesh = grid_to_mesh(&grid, &config).unwrap();
//! let stl = ascii_stl_string(&mesh);
//! assert!(stl.starts_with("solid model"));
//! ```

pub mod error;
pub mod extrude;
pub mod from_grid;
pub mod mesh;
pub mod params;
pub mod stl;

pub use error::MeshError;
pub use extrude::{binary_extrude, continuous_extrude};
pub use from_grid::grid_to_mesh;
pub use mesh::{triangle_normal, Facet, Mesh};
pub use params::{MeshConfig, MeshMode};
pub use stl::{ascii_stl_string, write_ascii_stl, write_stl_file};
