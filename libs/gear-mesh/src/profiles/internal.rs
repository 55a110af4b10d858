//! # Internal Gear
//!
//! A solid rim whose teeth are cut as interior pockets. Each pocket is an
//! 8-point lens spanning the tooth width: it starts and ends on the pitch
//! circle and bulges out to the outer circle along a half sine.

use std::f64::consts::PI;

use config::constants::{POCKET_SEGMENTS, RIM_SEGMENTS, TOOTH_WIDTH_FRACTION};
use gear_params::DerivedQuantities;
use glam::DVec2;

use crate::mesh::Mesh;
use crate::ops::extrude::circle_points;
use crate::ops::{linear_extrude, Polygon2D};

/// Builds the rim outline at `inner_radius` with one pocket hole per tooth.
pub fn internal_outline(derived: &DerivedQuantities) -> Polygon2D {
    let step = derived.angle_step();
    let tooth_width = TOOTH_WIDTH_FRACTION * step;
    let bulge = derived.outer_radius - derived.pitch_radius;
    let last = f64::from(POCKET_SEGMENTS - 1);

    let pockets = (0..derived.tooth_count)
        .map(|tooth| {
            let base = f64::from(tooth) * step;
            (0..POCKET_SEGMENTS)
                .map(|j| {
                    let t = f64::from(j) / last;
                    let angle = base - tooth_width / 2.0 + t * tooth_width;
                    let radius = derived.pitch_radius + (t * PI).sin() * bulge;
                    DVec2::from_angle(angle) * radius
                })
                .collect()
        })
        .collect();

    Polygon2D::with_holes(circle_points(derived.inner_radius, RIM_SEGMENTS), pockets)
}

pub fn internal_gear(derived: &DerivedQuantities) -> Mesh {
    linear_extrude(&internal_outline(derived), derived.width)
}
