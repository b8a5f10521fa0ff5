//! # Extrusion Builders
//!
//! The two grid-to-mesh algorithms:
//! - **binary_extrude**: per-cell box extrusion thresholded on intensity
//! - **continuous_extrude**: draped height field with boundary walls
//!
//! Both produce a closed, outward-wound facet sequence in deterministic
//! row-major emission order.

mod binary;
mod continuous;

#[cfg(test)]
mod tests;

pub use binary::binary_extrude;
pub use continuous::continuous_extrude;
