//! # Helical Gear
//!
//! A spur gear twisted about Z: a vertex at height `z` turns by
//! `(z / width) * HELIX_ANGLE` radians.

use config::constants::HELIX_ANGLE;
use gear_params::DerivedQuantities;

use super::spur::spur_gear;
use crate::mesh::Mesh;
use crate::ops::{transform, VertexTransform};

pub fn helical_gear(derived: &DerivedQuantities) -> Mesh {
    transform(
        spur_gear(derived),
        VertexTransform::Twist {
            height: derived.width,
            angle: HELIX_ANGLE,
        },
    )
}
