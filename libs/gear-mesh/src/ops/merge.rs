//! # Mesh Merging
//!
//! Concatenation without deduplication or boolean union: overlapping input
//! volumes stay overlapping in the result.

use tracing::debug;

use crate::mesh::Mesh;

/// Concatenates two meshes into one.
///
/// The vertex buffer is always `a`'s vertices followed by `b`'s, untouched.
/// When both are indexed, `a`'s indices are kept and `b`'s are shifted by
/// `a`'s vertex count. When either lacks an index buffer, the result has
/// none and its vertices are read as an implicit triangle list. Normals are
/// not carried over.
///
/// # Example
///
/// ```rust
/// use gear_mesh::{ops::merge, Mesh};
/// use glam::DVec3;
///
/// let tri = Mesh::from_indexed(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]);
/// let merged = merge(tri.clone(), tri);
/// assert_eq!(merged.indices(), Some(&[[0, 1, 2], [3, 4, 5]][..]));
/// ```
pub fn merge(a: Mesh, b: Mesh) -> Mesh {
    let offset = a.vertex_count() as u32;
    let (mut vertices, a_indices) = a.into_parts();
    let (b_vertices, b_indices) = b.into_parts();
    vertices.extend(b_vertices);

    let merged = match (a_indices, b_indices) {
        (Some(mut indices), Some(b_indices)) => {
            indices.extend(b_indices.into_iter().map(|tri| tri.map(|i| i + offset)));
            Mesh::from_indexed(vertices, indices)
        }
        _ => Mesh::from_triangle_soup(vertices),
    };
    debug!(
        vertices = merged.vertex_count(),
        triangles = merged.triangle_count(),
        indexed = merged.is_indexed(),
        "Merged meshes"
    );
    merged
}
