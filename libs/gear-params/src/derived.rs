//! # Derived Quantities
//!
//! Clamps a [`ParameterSet`] and computes the gear quantities shared by all
//! profile generators.
//!
//! ```text
//! module         = outer_diameter / (tooth_count + 2)
//! pitch_diameter = module * tooth_count
//! tooth_depth    = 2.25 * module
//! ```

use std::fmt;

use config::constants::{
    clamp_tooth_count, ADDENDUM_TEETH, BORE_CLEARANCE, MIN_OUTER_RADIUS, MIN_PITCH_RADIUS,
    RIM_CLEARANCE, TOOTH_DEPTH_FACTOR, TOOTH_WIDTH_FRACTION,
};
use serde::Serialize;

use crate::params::{finite_or, GearType, ParameterSet};

/// Quantities derived from a clamped parameter set.
///
/// For external gears `inner_radius` is the bore radius and lies in
/// `[0, pitch_radius - 2]`. For [`GearType::Internal`] it is the rim radius,
/// at least `pitch_radius + 2` and `outer_radius + 5`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedQuantities {
    /// Tooth count after clamping to `[8, 100]`
    pub tooth_count: u32,
    /// Tooth size: pitch diameter per tooth
    pub module: f64,
    /// Diameter of the pitch circle
    pub pitch_diameter: f64,
    /// Whole depth of one tooth
    pub tooth_depth: f64,
    /// Clamped pitch circle radius (root of the stylized teeth)
    pub pitch_radius: f64,
    /// Clamped tip circle radius
    pub outer_radius: f64,
    /// Bore radius, or rim radius for internal gears
    pub inner_radius: f64,
    /// Clamped face width
    pub width: f64,
}

/// Derives gear quantities from raw parameters.
///
/// Total and pure: every input, including NaN and infinities, maps to a
/// profile that is neither self-intersecting nor empty.
///
/// # Example
///
/// ```rust
/// use gear_params::{derive, ParameterSet};
///
/// let mut params = ParameterSet::default();
/// params.tooth_count = 500;
/// let derived = derive(&params);
/// assert_eq!(derived.tooth_count, 100);
/// ```
pub fn derive(params: &ParameterSet) -> DerivedQuantities {
    let tooth_count = clamp_tooth_count(params.tooth_count);
    let teeth = f64::from(tooth_count);
    let outer_diameter = finite_or(params.outer_diameter, 0.0);

    let module = outer_diameter / (teeth + ADDENDUM_TEETH);
    let pitch_diameter = module * teeth;
    let tooth_depth = TOOTH_DEPTH_FACTOR * module;

    let outer_radius = (outer_diameter / 2.0).max(MIN_OUTER_RADIUS);
    let pitch_radius = (pitch_diameter / 2.0).max(MIN_PITCH_RADIUS);

    let inner_radius = match params.gear_type {
        GearType::Internal => (pitch_radius + BORE_CLEARANCE).max(outer_radius + RIM_CLEARANCE),
        _ => {
            let bore = finite_or(params.inner_hole_diameter, 0.0) / 2.0;
            bore.min(max_bore_radius(pitch_radius, tooth_count)).max(0.0)
        }
    };

    let derived = DerivedQuantities {
        tooth_count,
        module,
        pitch_diameter,
        tooth_depth,
        pitch_radius,
        outer_radius,
        inner_radius,
        width: params.clamped_width(),
    };
    debug_assert!(derived.pitch_radius < derived.outer_radius);
    debug_assert!(derived.inner_radius >= 0.0);
    derived
}

/// Largest bore that stays clear of the tooth outline.
///
/// The gap between neighbouring teeth is a chord across `1 - TOOTH_WIDTH_FRACTION`
/// of the angular pitch, which comes closest to the centre at its midpoint.
/// Few large teeth bring that chord well inside `pitch_radius - BORE_CLEARANCE`.
fn max_bore_radius(pitch_radius: f64, tooth_count: u32) -> f64 {
    let angle_step = std::f64::consts::TAU / f64::from(tooth_count);
    let half_gap = (1.0 - TOOTH_WIDTH_FRACTION) / 2.0 * angle_step;
    let chord_distance = pitch_radius * half_gap.cos();
    debug_assert!(chord_distance <= pitch_radius);
    chord_distance - BORE_CLEARANCE
}

impl DerivedQuantities {
    /// Returns true when a central bore is cut through an external gear.
    pub fn has_bore(&self) -> bool {
        self.inner_radius > 0.0
    }

    /// Angle between neighbouring teeth, in radians.
    pub fn angle_step(&self) -> f64 {
        std::f64::consts::TAU / f64::from(self.tooth_count)
    }
}

impl fmt::Display for DerivedQuantities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "module: {:.2} mm, tooth depth: {:.2} mm, pitch diameter: {:.2} mm",
            self.module, self.tooth_depth, self.pitch_diameter
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reset_state_quantities() {
        let derived = derive(&ParameterSet::default());
        assert_eq!(derived.tooth_count, 24);
        assert_relative_eq!(derived.module, 25.58 / 26.0, epsilon = 1e-12);
        assert_relative_eq!(derived.pitch_diameter, 23.6123, epsilon = 1e-4);
        assert_relative_eq!(derived.tooth_depth, 2.2137, epsilon = 1e-4);
        assert_relative_eq!(derived.pitch_radius, derived.pitch_diameter / 2.0);
        assert_relative_eq!(derived.outer_radius, 12.79);
        assert_relative_eq!(derived.inner_radius, 2.5);
        assert_eq!(derived.width, 8.0);
    }

    #[test]
    fn test_tooth_count_is_clamped_before_module() {
        let mut params = ParameterSet::default();
        params.tooth_count = 2;
        let derived = derive(&params);
        assert_eq!(derived.tooth_count, 8);
        assert_relative_eq!(derived.module, 25.58 / 10.0);

        params.tooth_count = -40;
        assert_eq!(derive(&params).tooth_count, 8);

        params.tooth_count = 1000;
        assert_eq!(derive(&params).tooth_count, 100);
    }

    #[test]
    fn test_pitch_inside_tip_for_external_gears() {
        for diameter in [0.0, 1.0, 9.0, 10.0, 25.58, 300.0, -5.0, f64::NAN] {
            for teeth in [0, 8, 24, 100, 250] {
                for kind in [GearType::Spur, GearType::Helical, GearType::Bevel, GearType::Crown] {
                    let mut params = ParameterSet::new(kind);
                    params.outer_diameter = diameter;
                    params.tooth_count = teeth;
                    let derived = derive(&params);
                    assert!(
                        derived.pitch_radius < derived.outer_radius,
                        "{kind} d={diameter} z={teeth}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_internal_rim_outside_tips() {
        for diameter in [0.0, 10.0, 25.58, 300.0] {
            let mut params = ParameterSet::new(GearType::Internal);
            params.outer_diameter = diameter;
            let derived = derive(&params);
            assert!(derived.inner_radius >= derived.outer_radius + 5.0);
            assert!(derived.inner_radius >= derived.pitch_radius + 2.0);
        }
    }

    #[test]
    fn test_minimum_radii() {
        let mut params = ParameterSet::default();
        params.outer_diameter = 2.0;
        let derived = derive(&params);
        assert_eq!(derived.outer_radius, 5.0);
        assert_eq!(derived.pitch_radius, 3.0);
    }

    #[test]
    fn test_bore_is_clamped_inside_pitch_circle() {
        let mut params = ParameterSet::default();
        params.inner_hole_diameter = 100.0;
        let derived = derive(&params);
        let half_gap = 0.3 * derived.angle_step();
        assert_relative_eq!(derived.inner_radius, derived.pitch_radius * half_gap.cos() - 2.0);
        assert!(derived.inner_radius < derived.pitch_radius - 2.0);

        params.inner_hole_diameter = -3.0;
        assert_eq!(derive(&params).inner_radius, 0.0);
        assert!(!derive(&params).has_bore());

        params.inner_hole_diameter = f64::NAN;
        assert_eq!(derive(&params).inner_radius, 0.0);
    }

    #[test]
    fn test_bore_clears_gap_chord_on_few_large_teeth() {
        let mut params = ParameterSet::default();
        params.tooth_count = 8;
        params.outer_diameter = 400.0;
        params.inner_hole_diameter = 1000.0;
        let derived = derive(&params);
        assert_relative_eq!(derived.pitch_radius, 160.0);

        let chord_distance = derived.pitch_radius * (0.3 * derived.angle_step()).cos();
        assert_relative_eq!(derived.inner_radius, chord_distance - 2.0, epsilon = 1e-9);
        assert!(derived.inner_radius < chord_distance);
    }

    #[test]
    fn test_smallest_gear_keeps_a_bore() {
        let mut params = ParameterSet::default();
        params.tooth_count = 8;
        params.outer_diameter = 0.0;
        params.inner_hole_diameter = 100.0;
        let derived = derive(&params);
        assert_eq!(derived.pitch_radius, 3.0);
        assert!(derived.has_bore());
    }

    #[test]
    fn test_width_is_clamped() {
        let mut params = ParameterSet::default();
        params.width = 0.0;
        assert_eq!(derive(&params).width, 1.0);
    }

    #[test]
    fn test_angle_step() {
        let derived = derive(&ParameterSet::default());
        assert_relative_eq!(derived.angle_step() * 24.0, std::f64::consts::TAU);
    }

    #[test]
    fn test_display_uses_two_decimals() {
        let text = derive(&ParameterSet::default()).to_string();
        assert_eq!(
            text,
            "module: 0.98 mm, tooth depth: 2.21 mm, pitch diameter: 23.61 mm"
        );
    }
}
