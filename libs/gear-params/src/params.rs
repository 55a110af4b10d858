//! # Parameter Set
//!
//! Raw, unclamped gear parameters as the editor supplies them.

use std::fmt;

use config::constants::{
    clamp_tooth_count, CROWN_DIAMETER_RATIO, CROWN_WIDTH_RATIO, DEFAULT_INNER_HOLE_DIAMETER,
    DEFAULT_OUTER_DIAMETER, DEFAULT_TOOTH_COUNT, DEFAULT_TOP_DIAMETER, DEFAULT_TOP_OFFSET_PERCENT,
    DEFAULT_TOP_TOOTH_COUNT, DEFAULT_TOP_WIDTH, DEFAULT_WIDTH, MIN_CROWN_DIAMETER, MIN_WIDTH,
};
use glam::DVec3;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ParamsError;

/// Profile family of a gear.
///
/// Unknown names decode to [`GearType::Spur`], matching the editor's
/// fallback branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GearType {
    /// Straight teeth extruded along the axis.
    #[default]
    Spur,
    /// Spur profile twisted about the axis.
    Helical,
    /// Spur profile tapered toward the far face.
    Bevel,
    /// Spur base with a smaller spur stacked on top.
    Crown,
    /// Ring with lens-shaped tooth pockets.
    Internal,
}

impl GearType {
    /// Every gear type, in editor order.
    pub const ALL: [GearType; 5] = [
        GearType::Spur,
        GearType::Helical,
        GearType::Bevel,
        GearType::Crown,
        GearType::Internal,
    ];

    /// Lower-case name used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            GearType::Spur => "spur",
            GearType::Helical => "helical",
            GearType::Bevel => "bevel",
            GearType::Crown => "crown",
            GearType::Internal => "internal",
        }
    }

    /// Parses a gear type name, ignoring case and surrounding whitespace.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gear_params::GearType;
    ///
    /// assert_eq!(GearType::from_name(" Helical "), GearType::Helical);
    /// assert_eq!(GearType::from_name("worm"), GearType::Spur);
    /// ```
    pub fn from_name(name: &str) -> Self {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .unwrap_or_default()
    }
}

impl fmt::Display for GearType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<'de> Deserialize<'de> for GearType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// Parameters of the smaller gear stacked on a crown gear.
///
/// Ignored by every other gear type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrownParams {
    /// Raw tooth count of the top gear
    pub top_tooth_count: i64,
    /// Requested outer diameter of the top gear
    pub top_diameter: f64,
    /// Requested face width of the top gear
    pub top_width: f64,
    /// Axial offset of the top gear in percent of the base width
    pub top_offset_percent: f64,
}

impl Default for CrownParams {
    fn default() -> Self {
        Self {
            top_tooth_count: DEFAULT_TOP_TOOTH_COUNT,
            top_diameter: DEFAULT_TOP_DIAMETER,
            top_width: DEFAULT_TOP_WIDTH,
            top_offset_percent: DEFAULT_TOP_OFFSET_PERCENT,
        }
    }
}

/// Raw gear parameters for one generation request.
///
/// Values are stored exactly as supplied; clamping happens in
/// [`derive`](crate::derive). The JSON form uses camelCase keys with the
/// crown fields flattened alongside the others, and any missing key takes
/// its default.
///
/// # Example
///
/// ```rust
/// use gear_params::{GearType, ParameterSet};
///
/// let params = ParameterSet::from_json(r#"{"gearType":"bevel","toothCount":30}"#).unwrap();
/// assert_eq!(params.gear_type, GearType::Bevel);
/// assert_eq!(params.tooth_count, 30);
/// assert_eq!(params.width, 8.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParameterSet {
    /// Profile family
    pub gear_type: GearType,
    /// Raw tooth count, clamped to `[8, 100]` when derived
    pub tooth_count: i64,
    /// Tip circle diameter
    pub outer_diameter: f64,
    /// Central bore diameter (0 for no bore)
    pub inner_hole_diameter: f64,
    /// Face width along the gear axis
    pub width: f64,
    /// Non-uniform scale applied about the model center after generation
    pub scale: DVec3,
    /// Crown top gear parameters
    #[serde(flatten)]
    pub crown: CrownParams,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            gear_type: GearType::Spur,
            tooth_count: DEFAULT_TOOTH_COUNT,
            outer_diameter: DEFAULT_OUTER_DIAMETER,
            inner_hole_diameter: DEFAULT_INNER_HOLE_DIAMETER,
            width: DEFAULT_WIDTH,
            scale: DVec3::ONE,
            crown: CrownParams::default(),
        }
    }
}

impl ParameterSet {
    /// Creates the default parameter set for the given gear type.
    pub fn new(gear_type: GearType) -> Self {
        Self {
            gear_type,
            ..Self::default()
        }
    }

    /// Decodes a parameter set from JSON.
    pub fn from_json(json: &str) -> Result<Self, ParamsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encodes the parameter set as JSON.
    pub fn to_json(&self) -> Result<String, ParamsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Face width clamped to at least [`MIN_WIDTH`].
    pub fn clamped_width(&self) -> f64 {
        finite_or(self.width, MIN_WIDTH).max(MIN_WIDTH)
    }

    /// Builds the parameter set of a crown gear's top gear.
    ///
    /// The top gear is a spur gear sharing the base bore, no larger than
    /// 95 % of the base diameter and no wider than 80 % of the base width.
    pub fn crown_top(&self) -> ParameterSet {
        let base_width = self.clamped_width();
        let outer_diameter = (finite_or(self.outer_diameter, 0.0) * CROWN_DIAMETER_RATIO)
            .min(self.crown.top_diameter)
            .max(MIN_CROWN_DIAMETER);
        let width = (base_width * CROWN_WIDTH_RATIO)
            .min(self.crown.top_width)
            .max(MIN_WIDTH);

        ParameterSet {
            gear_type: GearType::Spur,
            tooth_count: i64::from(clamp_tooth_count(self.crown.top_tooth_count)),
            outer_diameter,
            inner_hole_diameter: self.inner_hole_diameter,
            width,
            scale: DVec3::ONE,
            crown: CrownParams::default(),
        }
    }

    /// Axial distance the crown top gear is moved from the base.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gear_params::{GearType, ParameterSet};
    ///
    /// let params = ParameterSet::new(GearType::Crown);
    /// assert_eq!(params.crown_offset(), 8.0);
    /// ```
    pub fn crown_offset(&self) -> f64 {
        self.clamped_width() * finite_or(self.crown.top_offset_percent, 0.0) / 100.0
    }
}

/// Replaces NaN and infinities with `fallback`.
pub(crate) fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

// =============================================================================
// TESTS
// =============================================================================
