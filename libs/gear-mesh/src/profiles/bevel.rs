//! # Bevel Gear
//!
//! A spur gear tapered toward the top: a vertex at height `z` has its X and
//! Y scaled by `1 - (z / width) * CONE_ANGLE`, so the top face is half the
//! size of the bottom one.

use config::constants::CONE_ANGLE;
use gear_params::DerivedQuantities;

use super::spur::spur_gear;
use crate::mesh::Mesh;
use crate::ops::{transform, VertexTransform};

pub fn bevel_gear(derived: &DerivedQuantities) -> Mesh {
    transform(
        spur_gear(derived),
        VertexTransform::Taper {
            height: derived.width,
            factor: CONE_ANGLE,
        },
    )
}
