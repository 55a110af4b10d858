//! # Profile Generators
//!
//! One generator per [`GearType`], selected by [`build_gear`]:
//!
//! | Type     | Construction                                        |
//! |----------|-----------------------------------------------------|
//! | Spur     | Tooth outline with optional bore, extruded          |
//! | Helical  | Spur, twisted about Z in proportion to height       |
//! | Bevel    | Spur, tapered toward the top                        |
//! | Crown    | Spur base plus a smaller spur stacked on top        |
//! | Internal | Rim with lens-shaped tooth pockets cut as holes     |
//!
//! Every generator is total: clamped quantities always produce a valid,
//! non-empty outline.

pub mod bevel;
pub mod crown;
pub mod helical;
pub mod internal;
pub mod spur;

#[cfg(test)]
mod tests;

use gear_params::{DerivedQuantities, GearType, ParameterSet};
use tracing::debug;

use crate::mesh::Mesh;
use crate::ops::Polygon2D;

/// Builds the uncentered, unscaled mesh for the parameter set's gear type.
///
/// `derived` must come from [`gear_params::derive`] applied to `params`.
pub fn build_gear(params: &ParameterSet, derived: &DerivedQuantities) -> Mesh {
    debug!(gear_type = %params.gear_type, teeth = derived.tooth_count, "Building gear profile");
    let mesh = match params.gear_type {
        GearType::Spur => spur::spur_gear(derived),
        GearType::Helical => helical::helical_gear(derived),
        GearType::Bevel => bevel::bevel_gear(derived),
        GearType::Crown => crown::crown_gear(params, derived),
        GearType::Internal => internal::internal_gear(derived),
    };
    debug_assert!(mesh.validate_indices().is_ok());
    debug_assert!(mesh.is_indexed());
    mesh
}

/// Returns the 2D outline extruded for the gear type.
///
/// For Crown this is the base gear's outline only.
pub fn outline(gear_type: GearType, derived: &DerivedQuantities) -> Polygon2D {
    match gear_type {
        GearType::Internal => internal::internal_outline(derived),
        _ => spur::spur_outline(derived),
    }
}
