//! # Spur Gear
//!
//! Stylized straight-cut teeth. Each tooth contributes four outline points,
//! two roots on the pitch circle and two tips on the outer circle:
//!
//! ```text
//!        tip1 ____ tip2        outer_radius
//!            /    \
//!     root1 /      \ root2     pitch_radius
//! ```
//!
//! The root half-width is `w / 2` and the tip half-width `w / 3`, where
//! `w = 0.4 * angle_step`.

use config::constants::{BORE_SEGMENTS, TOOTH_WIDTH_FRACTION};
use gear_params::DerivedQuantities;
use glam::DVec2;

use crate::mesh::Mesh;
use crate::ops::extrude::circle_points;
use crate::ops::{linear_extrude, Polygon2D};

/// Builds the spur outline: `4 * tooth_count` boundary points, plus a
/// 32-point bore hole when `inner_radius > 0`.
///
/// # Example
///
/// ```rust
/// use gear_mesh::profiles::spur::spur_outline;
/// use gear_params::{derive, ParameterSet};
///
/// let outline = spur_outline(&derive(&ParameterSet::default()));
/// assert_eq!(outline.vertex_count(), 96);
/// assert_eq!(outline.holes[0].len(), 32);
/// ```
pub fn spur_outline(derived: &DerivedQuantities) -> Polygon2D {
    let step = derived.angle_step();
    let tooth_width = TOOTH_WIDTH_FRACTION * step;
    let polar = |radius: f64, angle: f64| DVec2::from_angle(angle) * radius;

    let mut outer = Vec::with_capacity(4 * derived.tooth_count as usize);
    for tooth in 0..derived.tooth_count {
        let base = f64::from(tooth) * step;
        outer.push(polar(derived.pitch_radius, base - tooth_width / 2.0));
        outer.push(polar(derived.outer_radius, base - tooth_width / 3.0));
        outer.push(polar(derived.outer_radius, base + tooth_width / 3.0));
        outer.push(polar(derived.pitch_radius, base + tooth_width / 2.0));
    }

    let holes = if derived.has_bore() {
        vec![circle_points(derived.inner_radius, BORE_SEGMENTS)]
    } else {
        Vec::new()
    };
    Polygon2D::with_holes(outer, holes)
}

/// Extrudes the spur outline by the face width.
pub fn spur_gear(derived: &DerivedQuantities) -> Mesh {
    linear_extrude(&spur_outline(derived), derived.width)
}
