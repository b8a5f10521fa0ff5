//! # Mesh Data Structure
//!
//! Facet-list mesh representation with the triangle normal kernel.
//!
//! Facets store their three vertices directly; duplicate vertices across
//! facets are expected and never deduplicated, which keeps the builders
//! free of any index bookkeeping.

use glam::DVec3;

/// Computes the unit normal of the triangle `(v1, v2, v3)`.
///
/// The normal is `cross(v2 - v1, v3 - v1)` normalized to unit length,
/// following the right-hand rule on the given winding. Collinear or
/// coincident vertices produce a zero-magnitude cross product; the zero
/// vector is returned in that case instead of dividing by zero.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use relief_mesh::mesh::triangle_normal;
///
/// let n = triangle_normal(DVec3::ZERO, DVec3::X, DVec3::Y);
/// assert_eq!(n, DVec3::Z);
/// ```
pub fn triangle_normal(v1: DVec3, v2: DVec3, v3: DVec3) -> DVec3 {
    let normal = (v2 - v1).cross(v3 - v1);
    let len = normal.length();
    if len > 0.0 {
        normal / len
    } else {
        DVec3::ZERO
    }
}

/// A directed triangle with its outward unit normal.
///
/// The winding `vertices[0] → vertices[1] → vertices[2]` must agree with
/// the stored normal under the right-hand rule; emission sites are
/// responsible for that invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facet {
    /// Unit normal, or zero for degenerate triangles
    pub normal: DVec3,
    /// Triangle vertices in winding order
    pub vertices: [DVec3; 3],
}

/// An append-only triangle mesh.
///
/// Facet order is insertion order and is preserved through
/// serialization; it matters only for output determinism.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use relief_mesh::Mesh;
///
/// let mut mesh = Mesh::new();
/// mesh.add_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
/// assert_eq!(mesh.facet_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    facets: Vec<Facet>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self { facets: Vec::new() }
    }

    /// Creates a mesh with pre-allocated facet capacity.
    pub fn with_capacity(facet_count: usize) -> Self {
        Self {
            facets: Vec::with_capacity(facet_count),
        }
    }

    /// Returns the number of facets.
    #[inline]
    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    /// Returns true if the mesh has no facets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Appends a triangle, computing its normal from the winding.
    ///
    /// Degenerate triangles are appended with a zero normal rather than
    /// rejected; callers that must avoid them filter before emission.
    pub fn add_triangle(&mut self, v1: DVec3, v2: DVec3, v3: DVec3) {
        let normal = triangle_normal(v1, v2, v3);
        self.facets.push(Facet {
            normal,
            vertices: [v1, v2, v3],
        });
    }

    /// Returns a reference to the facets in insertion order.
    #[inline]
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or zero corners for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.facets.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.facets[0].vertices[0];
        let mut max = min;

        for facet in &self.facets {
            for v in &facet.vertices {
                min = min.min(*v);
                max = max.max(*v);
            }
        }

        (min, max)
    }
}
