//! # Extrusion Operations
//!
//! Sweeps a flat gear outline, possibly with holes, straight up the Z axis.
//! Twist and taper are applied afterwards as per-vertex transforms, so the
//! extruded mesh only ever has a bottom ring and a top ring.

mod linear;


pub use linear::linear_extrude;

use glam::DVec2;

/// A 2D polygon for extrusion operations.
///
/// The point sequence seen by triangulation and extrusion is the outer
/// boundary followed by each hole in order; see [`Polygon2D::points`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon2D {
    /// Outer boundary vertices
    pub outer: Vec<DVec2>,
    /// Holes, each a closed ring strictly inside the outer boundary
    pub holes: Vec<Vec<DVec2>>,
}

impl Polygon2D {
    /// Creates a new polygon from outer boundary vertices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gear_mesh::ops::Polygon2D;
    /// use glam::DVec2;
    ///
    /// let triangle = Polygon2D::new(vec![DVec2::ZERO, DVec2::X, DVec2::Y]);
    /// assert_eq!(triangle.vertex_count(), 3);
    /// ```
    pub fn new(outer: Vec<DVec2>) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Creates a polygon with holes.
    pub fn with_holes(outer: Vec<DVec2>, holes: Vec<Vec<DVec2>>) -> Self {
        Self { outer, holes }
    }

    /// Creates a regular polygon approximating a circle, starting at
    /// `(radius, 0)` and running counter-clockwise.
    pub fn circle(radius: f64, segments: u32) -> Self {
        Self::new(circle_points(radius, segments))
    }

    /// Returns the number of vertices in the outer boundary.
    pub fn vertex_count(&self) -> usize {
        self.outer.len()
    }

    /// Returns the number of vertices over the outer boundary and all holes.
    pub fn point_count(&self) -> usize {
        self.outer.len() + self.holes.iter().map(Vec::len).sum::<usize>()
    }

    /// Returns true if the polygon has holes.
    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }

    /// Iterates all vertices: the outer boundary, then each hole.
    pub fn points(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.outer
            .iter()
            .chain(self.holes.iter().flatten())
            .copied()
    }

    /// Returns a copy with the outer boundary counter-clockwise and every
    /// hole clockwise.
    pub fn oriented(&self) -> Self {
        let mut outer = self.outer.clone();
        if signed_area(&outer) < 0.0 {
            outer.reverse();
        }
        let holes = self
            .holes
            .iter()
            .map(|hole| {
                let mut hole = hole.clone();
                if signed_area(&hole) > 0.0 {
                    hole.reverse();
                }
                hole
            })
            .collect();
        Self { outer, holes }
    }
}

/// Points of a regular `segments`-gon of the given radius.
pub fn circle_points(radius: f64, segments: u32) -> Vec<DVec2> {
    (0..segments)
        .map(|i| {
            let angle = std::f64::consts::TAU * f64::from(i) / f64::from(segments);
            DVec2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Shoelace area of a closed ring; positive when counter-clockwise.
pub fn signed_area(ring: &[DVec2]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for (i, a) in ring.iter().enumerate() {
        let b = ring[(i + 1) % ring.len()];
        twice += a.perp_dot(b);
    }
    twice / 2.0
}
