//! # Continuous Extrusion
//!
//! Drapes a single top surface over the whole grid, mapping intensity
//! linearly to height, then closes it with a flat bottom and one wall
//! segment per boundary vertex pair.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::params::MeshConfig;
use config::constants::{GRAYSCALE_MAX, MAX_FACETS};
use glam::DVec3;
use relief_image::IntensityGrid;

/// Drapes the grid as a height field and closes it into a solid.
///
/// Vertex `(row, col)` sits at `(col*xs, row*ys, intensity/255 * h)`
/// with `xs = x_size/(cols-1)` and `ys = y_size/(rows-1)` - edge-to-edge
/// scaling, deliberately different from the binary builder's per-cell
/// scaling, so the extreme rows and columns land exactly on the
/// footprint boundary. Every pixel contributes height; there is no
/// threshold in this mode.
///
/// Emission order: all top-surface quads row-major (each split on the
/// `(row,col+1)-(row+1,col)` diagonal), the two bottom triangles, then
/// the boundary walls along row 0, row rows-1, col 0, col cols-1. Wall
/// segments over zero-height boundary pixels degenerate to zero-normal
/// facets and are emitted anyway.
///
/// # Errors
///
/// Fails before emitting anything on invalid configuration, a grid
/// smaller than 2x2 (edge-to-edge scaling would divide by zero), or a
/// facet count above the capacity bound.
pub fn continuous_extrude(grid: &IntensityGrid, config: &MeshConfig) -> Result<Mesh, MeshError> {
    config.validate()?;

    let rows = grid.rows();
    let cols = grid.cols();
    if rows < 2 || cols < 2 {
        return Err(MeshError::InvalidGridDimensions {
            rows,
            cols,
            min_rows: 2,
            min_cols: 2,
        });
    }

    // Exact facet count: two per interior quad, two for the bottom, and
    // four per boundary step (two edges in each grid direction)
    let quads = (rows - 1).saturating_mul(cols - 1);
    let facet_count = 2 * quads + 2 + 4 * ((rows - 1) + (cols - 1));
    if facet_count > MAX_FACETS {
        return Err(MeshError::TooManyFacets {
            count: facet_count,
            max: MAX_FACETS,
        });
    }

    let x_scale = config.x_size / (cols - 1) as f64;
    let y_scale = config.y_size / (rows - 1) as f64;

    // Materialize the full top-vertex grid once
    let mut top_vertices = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let z = (grid.value(row, col) as f64 / GRAYSCALE_MAX) * config.extrude_height;
            top_vertices.push(DVec3::new(col as f64 * x_scale, row as f64 * y_scale, z));
        }
    }
    let top = |row: usize, col: usize| top_vertices[row * cols + col];
    let ground = |v: DVec3| DVec3::new(v.x, v.y, 0.0);

    let mut mesh = Mesh::with_capacity(facet_count);

    // Top surface, split on the (row,col+1)-(row+1,col) diagonal
    for row in 0..rows - 1 {
        for col in 0..cols - 1 {
            let v1 = top(row, col);
            let v2 = top(row, col + 1);
            let v3 = top(row + 1, col);
            let v4 = top(row + 1, col + 1);
            mesh.add_triangle(v1, v2, v3);
            mesh.add_triangle(v2, v4, v3);
        }
    }

    // Bottom face covering the entire base (-Z)
    let b0 = DVec3::new(0.0, 0.0, 0.0);
    let b1 = DVec3::new(config.x_size, 0.0, 0.0);
    let b2 = DVec3::new(config.x_size, config.y_size, 0.0);
    let b3 = DVec3::new(0.0, config.y_size, 0.0);
    mesh.add_triangle(b2, b1, b0);
    mesh.add_triangle(b3, b2, b0);

    // Boundary walls. Row 0 faces -Y
    for col in 0..cols - 1 {
        let vt1 = top(0, col);
        let vt2 = top(0, col + 1);
        let (vb1, vb2) = (ground(vt1), ground(vt2));
        mesh.add_triangle(vt2, vt1, vb1);
        mesh.add_triangle(vt2, vb1, vb2);
    }
    // Row rows-1 faces +Y
    for col in 0..cols - 1 {
        let vt1 = top(rows - 1, col);
        let vt2 = top(rows - 1, col + 1);
        let (vb1, vb2) = (ground(vt1), ground(vt2));
        mesh.add_triangle(vt1, vt2, vb1);
        mesh.add_triangle(vt2, vb2, vb1);
    }
    // Col 0 faces -X
    for row in 0..rows - 1 {
        let vt1 = top(row, 0);
        let vt2 = top(row + 1, 0);
        let (vb1, vb2) = (ground(vt1), ground(vt2));
        mesh.add_triangle(vt1, vt2, vb1);
        mesh.add_triangle(vt2, vb2, vb1);
    }
    // Col cols-1 faces +X
    for row in 0..rows - 1 {
        let vt1 = top(row, cols - 1);
        let vt2 = top(row + 1, cols - 1);
        let (vb1, vb2) = (ground(vt1), ground(vt2));
        mesh.add_triangle(vt2, vt1, vb1);
        mesh.add_triangle(vt2, vb1, vb2);
    }

    tracing::debug!(rows, cols, facets = mesh.facet_count(), "continuous extrusion done");

    Ok(mesh)
}
