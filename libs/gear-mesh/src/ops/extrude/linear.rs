//! # Linear Extrusion
//!
//! Extrudes a 2D polygon with holes along the Z axis into a closed solid.
//!
//! ## Vertex Layout
//!
//! For a polygon with `n` points (outer boundary plus holes):
//! - `0..n`: bottom ring at `z = 0`
//! - `n..2n`: top ring at `z = height`, in the same order
//!
//! ## Winding
//!
//! The polygon is normalized first (outer boundary counter-clockwise, holes
//! clockwise), so every face winds counter-clockwise seen from outside the
//! solid: the top cap faces +Z, the bottom cap faces -Z, and side walls face
//! away from the material, into the bore for holes.

use glam::DVec3;
use tracing::{debug, warn};

use super::Polygon2D;
use crate::mesh::Mesh;
use crate::ops::triangulate::triangulate;

/// Extrudes a 2D polygon along the Z axis from `z = 0` to `z = height`.
///
/// Never fails: an outline with fewer than three outer points, or a
/// non-positive height, yields an empty mesh.
///
/// # Example
///
/// ```rust
/// use gear_mesh::ops::{linear_extrude, Polygon2D};
///
/// let square = Polygon2D::circle(1.0, 4);
/// let mesh = linear_extrude(&square, 2.0);
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn linear_extrude(polygon: &Polygon2D, height: f64) -> Mesh {
    if polygon.vertex_count() < 3 {
        warn!(points = polygon.vertex_count(), "Outline too small to extrude");
        return Mesh::new();
    }
    if !height.is_finite() || height <= 0.0 {
        warn!(height, "Extrusion height must be positive");
        return Mesh::new();
    }

    let polygon = polygon.oriented();
    let n = polygon.point_count();
    let caps = triangulate(&polygon);
    let mut mesh = Mesh::with_capacity(2 * n, 2 * caps.len() + 2 * n);

    for z in [0.0, height] {
        for p in polygon.points() {
            mesh.add_vertex(DVec3::new(p.x, p.y, z));
        }
    }

    let top = n as u32;
    for &[a, b, c] in &caps {
        mesh.add_triangle(top + a, top + b, top + c);
        mesh.add_triangle(a, c, b);
    }

    let rings = std::iter::once(polygon.outer.len()).chain(polygon.holes.iter().map(Vec::len));
    let mut start = 0usize;
    for len in rings {
        for i in 0..len {
            let j = (i + 1) % len;
            let (bi, bj) = ((start + i) as u32, (start + j) as u32);
            let (ti, tj) = (bi + top, bj + top);
            mesh.add_triangle(bi, bj, tj);
            mesh.add_triangle(bi, tj, ti);
        }
        start += len;
    }

    debug!(
        points = n,
        holes = polygon.holes.len(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "Extruded outline"
    );
    mesh
}
