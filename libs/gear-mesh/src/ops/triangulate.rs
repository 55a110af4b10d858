//! # Cap Triangulation
//!
//! Ear clipping of an outline with holes, via `earcutr`.

use glam::DVec2;
use tracing::warn;

use super::extrude::Polygon2D;

/// Triangulates a polygon with holes.
///
/// Indices refer to the concatenation of the outer boundary followed by each
/// hole in order, as yielded by [`Polygon2D::points`]. Every returned
/// triangle is counter-clockwise in the XY plane.
///
/// If ear clipping fails the outer boundary is fan-triangulated instead and
/// the holes are left uncapped.
///
/// # Example
///
/// ```rust
/// use gear_mesh::ops::{triangulate::triangulate, Polygon2D};
///
/// let square = Polygon2D::circle(1.0, 4);
/// assert_eq!(triangulate(&square).len(), 2);
/// ```
pub fn triangulate(polygon: &Polygon2D) -> Vec<[u32; 3]> {
    if polygon.vertex_count() < 3 {
        return Vec::new();
    }
    debug_assert!(polygon.holes.iter().all(|hole| hole.len() >= 3));

    let points: Vec<DVec2> = polygon.points().collect();
    let data: Vec<f64> = points.iter().flat_map(|p| [p.x, p.y]).collect();

    let mut hole_indices = Vec::with_capacity(polygon.holes.len());
    let mut start = polygon.vertex_count();
    for hole in &polygon.holes {
        hole_indices.push(start);
        start += hole.len();
    }

    let triangles: Vec<[usize; 3]> = match earcutr::earcut(&data, &hole_indices, 2) {
        Ok(flat) => flat.chunks_exact(3).map(|t| [t[0], t[1], t[2]]).collect(),
        Err(err) => {
            warn!(
                error = ?err,
                points = points.len(),
                holes = polygon.holes.len(),
                "Ear clipping failed, falling back to fan over the outer boundary"
            );
            (1..polygon.vertex_count() - 1).map(|i| [0, i, i + 1]).collect()
        }
    };

    triangles
        .into_iter()
        .map(|[a, b, c]| {
            let ab = points[b] - points[a];
            let ac = points[c] - points[a];
            if ab.perp_dot(ac) < 0.0 {
                [a as u32, c as u32, b as u32]
            } else {
                [a as u32, b as u32, c as u32]
            }
        })
        .collect()
}
