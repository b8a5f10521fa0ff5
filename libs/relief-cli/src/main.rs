//! relief - convert a grayscale image to a closed STL mesh
//!
//! Decodes the input image to an intensity grid, runs one of the two
//! extrusion builders, and writes the result as ASCII STL.

use anyhow::{Context, Result};
use clap::Parser;
use config::constants::{
    DEFAULT_EXTRUDE_HEIGHT, DEFAULT_THRESHOLD, DEFAULT_X_SIZE, DEFAULT_Y_SIZE,
};
use relief_mesh::{grid_to_mesh, write_stl_file, MeshConfig, MeshMode};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "relief")]
#[command(about = "Convert a grayscale image to a closed STL mesh", long_about = None)]
struct Cli {
    /// Path to the input image
    input_image: PathBuf,

    /// Path for the output STL file
    output_stl: PathBuf,

    /// Extrusion height (Z axis) for solid areas
    #[arg(long, default_value_t = DEFAULT_EXTRUDE_HEIGHT)]
    extrude_height: f64,

    /// Width (X dimension) of the output STL
    #[arg(long, default_value_t = DEFAULT_X_SIZE)]
    x_size: f64,

    /// Depth (Y dimension) of the output STL
    #[arg(long, default_value_t = DEFAULT_Y_SIZE)]
    y_size: f64,

    /// Treat the image as black and white instead of a height field
    #[arg(long)]
    binary: bool,

    /// Threshold for binary mode; pixels with values below are solid
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = MeshConfig {
        extrude_height: cli.extrude_height,
        x_size: cli.x_size,
        y_size: cli.y_size,
        mode: if cli.binary {
            MeshMode::Binary
        } else {
            MeshMode::Continuous
        },
        threshold: cli.threshold,
    };

    let grid = relief_image::load_grayscale(&cli.input_image)
        .with_context(|| format!("Failed to load image {}", cli.input_image.display()))?;
    info!(rows = grid.rows(), cols = grid.cols(), "loaded image");

    let start = Instant::now();
    let mesh = grid_to_mesh(&grid, &config).context("Mesh generation failed")?;
    info!(
        facets = mesh.facet_count(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "generated mesh"
    );

    write_stl_file(&cli.output_stl, &mesh)
        .with_context(|| format!("Failed to write {}", cli.output_stl.display()))?;
    info!(path = %cli.output_stl.display(), "wrote STL");

    Ok(())
}
