//! # Binary Extrusion
//!
//! Treats each grid cell as solid or background and extrudes every solid
//! cell into a box. Walls between two adjacent solid cells are skipped so
//! the aggregate stays free of internal faces.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::params::MeshConfig;
use config::constants::MAX_FACETS;
use glam::DVec3;
use relief_image::IntensityGrid;

/// The four cell sides, named by their outward normal in model space.
///
/// Image-space left/right map to -X/+X; the top and bottom image rows
/// map to -Y and +Y.
#[derive(Debug, Clone, Copy)]
enum Side {
    NegX,
    PosX,
    NegY,
    PosY,
}

const SIDES: [Side; 4] = [Side::NegX, Side::PosX, Side::NegY, Side::PosY];

#[inline]
fn is_solid(grid: &IntensityGrid, row: usize, col: usize, threshold: u32) -> bool {
    // Strict comparison: a pixel exactly at the threshold is background
    (grid.value(row, col) as u32) < threshold
}

/// Returns true when the neighbor toward `side` is out of the grid or
/// not solid, i.e. the wall on that side must be emitted.
fn is_exposed(grid: &IntensityGrid, row: usize, col: usize, side: Side, threshold: u32) -> bool {
    let neighbor = match side {
        Side::NegX => col.checked_sub(1).map(|c| (row, c)),
        Side::PosX => (col + 1 < grid.cols()).then(|| (row, col + 1)),
        Side::NegY => row.checked_sub(1).map(|r| (r, col)),
        Side::PosY => (row + 1 < grid.rows()).then(|| (row + 1, col)),
    };
    match neighbor {
        Some((r, c)) => !is_solid(grid, r, c, threshold),
        None => true,
    }
}

/// Extrudes every solid cell of the grid into a box.
///
/// A cell is solid iff its intensity is strictly below
/// `config.threshold`. Each cell spans
/// `[col*xs, (col+1)*xs] x [row*ys, (row+1)*ys]` with
/// `xs = x_size/cols` and `ys = y_size/rows` (per-cell scaling, not
/// edge-to-edge). Per solid cell, in row-major scan order: top face
/// (+Z), bottom face (-Z), then one wall per exposed side in the order
/// -X, +X, -Y, +Y, all wound outward.
///
/// # Errors
///
/// Fails before emitting anything on invalid configuration or when the
/// worst-case facet count exceeds the capacity bound.
pub fn binary_extrude(grid: &IntensityGrid, config: &MeshConfig) -> Result<Mesh, MeshError> {
    config.validate()?;

    let rows = grid.rows();
    let cols = grid.cols();

    // Worst case is an isolated solid cell everywhere: 12 facets per cell
    let worst_case = rows.saturating_mul(cols).saturating_mul(12);
    if worst_case > MAX_FACETS {
        return Err(MeshError::TooManyFacets {
            count: worst_case,
            max: MAX_FACETS,
        });
    }

    let x_scale = config.x_size / cols as f64;
    let y_scale = config.y_size / rows as f64;
    let threshold = config.threshold;
    let z_top = config.extrude_height;

    let mut mesh = Mesh::new();

    for row in 0..rows {
        for col in 0..cols {
            if !is_solid(grid, row, col, threshold) {
                continue;
            }

            let x0 = col as f64 * x_scale;
            let x1 = (col + 1) as f64 * x_scale;
            let y0 = row as f64 * y_scale;
            let y1 = (row + 1) as f64 * y_scale;

            let t0 = DVec3::new(x0, y0, z_top);
            let t1 = DVec3::new(x1, y0, z_top);
            let t2 = DVec3::new(x1, y1, z_top);
            let t3 = DVec3::new(x0, y1, z_top);

            let b0 = DVec3::new(x0, y0, 0.0);
            let b1 = DVec3::new(x1, y0, 0.0);
            let b2 = DVec3::new(x1, y1, 0.0);
            let b3 = DVec3::new(x0, y1, 0.0);

            // Top face (+Z)
            mesh.add_triangle(t0, t1, t2);
            mesh.add_triangle(t0, t2, t3);

            // Bottom face (-Z)
            mesh.add_triangle(b2, b1, b0);
            mesh.add_triangle(b3, b2, b0);

            for side in SIDES {
                if !is_exposed(grid, row, col, side, threshold) {
                    continue;
                }
                match side {
                    Side::NegX => {
                        mesh.add_triangle(t0, t3, b0);
                        mesh.add_triangle(t3, b3, b0);
                    }
                    Side::PosX => {
                        mesh.add_triangle(t2, t1, b1);
                        mesh.add_triangle(t2, b1, b2);
                    }
                    Side::NegY => {
                        mesh.add_triangle(t1, t0, b0);
                        mesh.add_triangle(t1, b0, b1);
                    }
                    Side::PosY => {
                        mesh.add_triangle(t3, t2, b3);
                        mesh.add_triangle(t2, b2, b3);
                    }
                }
            }
        }
    }

    tracing::debug!(rows, cols, facets = mesh.facet_count(), "binary extrusion done");

    Ok(mesh)
}
