//! # Normals
//!
//! Smooth per-vertex normals for display and per-face normals for export.

use config::constants::{DEGENERATE_AREA_EPSILON, FALLBACK_NORMAL};
use glam::DVec3;

use crate::mesh::Mesh;

/// Computes the unit normal of triangle `(a, b, c)`.
///
/// Returns `(0, 0, 1)` when the cross product is shorter than the
/// degenerate threshold or the result is not finite; export never aborts on
/// a bad normal.
///
/// # Example
///
/// ```rust
/// use gear_mesh::ops::normals::face_normal;
/// use glam::DVec3;
///
/// let n = face_normal(DVec3::ZERO, DVec3::X, DVec3::Y);
/// assert_eq!(n, DVec3::Z);
/// assert_eq!(face_normal(DVec3::ZERO, DVec3::ZERO, DVec3::ZERO), DVec3::Z);
/// ```
pub fn face_normal(a: DVec3, b: DVec3, c: DVec3) -> DVec3 {
    let cross = (b - a).cross(c - a);
    let length = cross.length();
    if !length.is_finite() || length < DEGENERATE_AREA_EPSILON {
        return DVec3::from_array(FALLBACK_NORMAL);
    }
    let normal = cross / length;
    if normal.is_finite() {
        normal
    } else {
        DVec3::from_array(FALLBACK_NORMAL)
    }
}

/// Computes smooth per-vertex normals.
///
/// Each triangle adds its unnormalized face normal to its three vertices, so
/// larger faces weigh more; the sums are then normalized. Vertices touched by
/// no triangle, or only by degenerate ones, get a zero normal. Triangles with
/// out-of-range indices are ignored.
pub fn vertex_normals(mesh: &Mesh) -> Vec<DVec3> {
    let vertices = mesh.vertices();
    let mut normals = vec![DVec3::ZERO; vertices.len()];

    for [i0, i1, i2] in mesh.triangles() {
        if i0 >= vertices.len() || i1 >= vertices.len() || i2 >= vertices.len() {
            continue;
        }
        let v0 = vertices[i0];
        let normal = (vertices[i1] - v0).cross(vertices[i2] - v0);

        normals[i0] += normal;
        normals[i1] += normal;
        normals[i2] += normal;
    }

    for normal in &mut normals {
        *normal = normal.normalize_or_zero();
    }

    normals
}
