//! # Crown Gear
//!
//! Two spur gears stacked on one axis: the base gear from the primary
//! parameters and a smaller top gear from [`ParameterSet::crown_top`],
//! lifted by [`ParameterSet::crown_offset`].
//!
//! The two solids are concatenated, not unioned. An offset below the base
//! width leaves them interpenetrating, and the output is then not a
//! manifold.

use gear_params::{derive, DerivedQuantities, ParameterSet};
use glam::DVec3;
use tracing::debug;

use super::spur::spur_gear;
use crate::mesh::Mesh;
use crate::ops::{merge, transform, VertexTransform};

/// Builds the base gear and the lifted top gear, merged into one mesh.
pub fn crown_gear(params: &ParameterSet, derived: &DerivedQuantities) -> Mesh {
    merge(spur_gear(derived), crown_top_gear(params))
}

/// Builds the top gear alone, already moved to its axial offset.
pub fn crown_top_gear(params: &ParameterSet) -> Mesh {
    let top = derive(&params.crown_top());
    let offset = params.crown_offset();
    debug!(
        teeth = top.tooth_count,
        outer_radius = top.outer_radius,
        width = top.width,
        offset,
        "Building crown top gear"
    );
    transform(
        spur_gear(&top),
        VertexTransform::Translate(DVec3::new(0.0, 0.0, offset)),
    )
}
