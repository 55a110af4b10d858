//! # Vertex Transforms
//!
//! Position-only deformations applied after extrusion. None of them change
//! the vertex count or the index buffer.

use glam::{DVec2, DVec3};

use crate::mesh::Mesh;

/// A per-vertex deformation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VertexTransform {
    /// Rotates about Z by `angle * z / height` radians.
    Twist { height: f64, angle: f64 },
    /// Scales X and Y by `1 - factor * z / height`.
    Taper { height: f64, factor: f64 },
    /// Adds a fixed offset.
    Translate(DVec3),
    /// Multiplies each axis independently.
    Scale(DVec3),
}

impl VertexTransform {
    /// Applies the transform to a single position.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gear_mesh::ops::VertexTransform;
    /// use glam::DVec3;
    ///
    /// let taper = VertexTransform::Taper { height: 8.0, factor: 0.5 };
    /// let top = taper.apply(DVec3::new(10.0, 0.0, 8.0));
    /// assert_eq!(top, DVec3::new(5.0, 0.0, 8.0));
    /// ```
    pub fn apply(&self, v: DVec3) -> DVec3 {
        match *self {
            VertexTransform::Twist { height, angle } => {
                let xy = DVec2::from_angle(angle * fraction(v.z, height)).rotate(v.truncate());
                xy.extend(v.z)
            }
            VertexTransform::Taper { height, factor } => {
                let s = 1.0 - factor * fraction(v.z, height);
                DVec3::new(v.x * s, v.y * s, v.z)
            }
            VertexTransform::Translate(offset) => v + offset,
            VertexTransform::Scale(factors) => v * factors,
        }
    }
}

/// Fraction of the way up an extrusion; zero for a zero-height solid.
fn fraction(z: f64, height: f64) -> f64 {
    if height == 0.0 {
        0.0
    } else {
        z / height
    }
}

/// Applies a vertex transform to every vertex of the mesh.
pub fn transform(mut mesh: Mesh, op: VertexTransform) -> Mesh {
    mesh.map_vertices(|v| op.apply(v));
    mesh
}

/// Translates the mesh so its bounding-box center sits at the origin.
///
/// An empty mesh is returned unchanged.
pub fn center(mesh: Mesh) -> Mesh {
    if mesh.is_empty() {
        return mesh;
    }
    let (min, max) = mesh.bounding_box();
    transform(mesh, VertexTransform::Translate(-(min + max) / 2.0))
}
