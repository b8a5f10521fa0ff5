//! # ASCII STL Serialization
//!
//! Writes the accumulated facets in the fixed ASCII STL layout. The
//! text layout is a compatibility contract with downstream mesh
//! consumers: field names, indentation, and the 6-digit decimal
//! formatting are all fixed.

use crate::error::MeshError;
use crate::mesh::{Facet, Mesh};
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

fn format_facet(facet: &Facet) -> String {
    let n = facet.normal;
    let mut out = String::with_capacity(192);
    out.push_str(&format!(
        "  facet normal {:.6} {:.6} {:.6}\n",
        n.x, n.y, n.z
    ));
    out.push_str("    outer loop\n");
    for v in &facet.vertices {
        out.push_str(&format!(
            "      vertex {:.6} {:.6} {:.6}\n",
            v.x, v.y, v.z
        ));
    }
    out.push_str("    endloop\n");
    out.push_str("  endfacet\n");
    out
}

/// Writes the mesh as ASCII STL to the given writer.
///
/// Facets are written in insertion order.
pub fn write_ascii_stl<W: Write>(writer: &mut W, mesh: &Mesh) -> Result<(), MeshError> {
    writer.write_all(b"solid model\n")?;
    for facet in mesh.facets() {
        writer.write_all(format_facet(facet).as_bytes())?;
    }
    writer.write_all(b"endsolid model\n")?;
    Ok(())
}

/// Renders the mesh as an ASCII STL string.
pub fn ascii_stl_string(mesh: &Mesh) -> String {
    let mut out = String::with_capacity(32 + mesh.facet_count() * 192);
    out.push_str("solid model\n");
    for facet in mesh.facets() {
        out.push_str(&format_facet(facet));
    }
    out.push_str("endsolid model\n");
    out
}

/// Writes the mesh as ASCII STL to a file, atomically.
///
/// The content goes to a temporary file in the destination directory
/// which is renamed into place only after a successful write, so a
/// failure never leaves a partial file at `path`.
pub fn write_stl_file(path: impl AsRef<Path>, mesh: &Mesh) -> Result<(), MeshError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write_ascii_stl(&mut writer, mesh)?;
        writer.flush()?;
    }
    tmp.persist(path).map_err(|e| MeshError::WriteFailed(e.error))?;

    tracing::debug!(path = %path.display(), facets = mesh.facet_count(), "wrote STL");

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
