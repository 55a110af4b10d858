//! # Configuration Constants
//!
//! Centralized values shared by the parameter layer, the profile generators
//! and the STL writer.
//!
//! ## Categories
//!
//! - **Clamps**: Bounds applied to raw user input before any geometry is built
//! - **Profile**: Fixed shape factors of the stylized tooth outlines
//! - **Tessellation**: Segment counts for circular features
//! - **Export**: STL precision, naming and degeneracy tolerance
//! - **Defaults**: The parameter set a freshly reset editor starts from

use std::fmt;

// =============================================================================
// CLAMP CONSTANTS
// =============================================================================

/// Fewest teeth a generated gear may have.
///
/// # Examples
/// ```
/// use config::constants::MIN_TOOTH_COUNT;
/// assert_eq!(MIN_TOOTH_COUNT, 8);
/// ```
pub const MIN_TOOTH_COUNT: u32 = 8;

/// Most teeth a generated gear may have.
///
/// # Examples
/// ```
/// use config::constants::MAX_TOOTH_COUNT;
/// assert_eq!(MAX_TOOTH_COUNT, 100);
/// ```
pub const MAX_TOOTH_COUNT: u32 = 100;

/// Lower bound for the tip (outer) radius.
pub const MIN_OUTER_RADIUS: f64 = 5.0;

/// Lower bound for the pitch radius.
pub const MIN_PITCH_RADIUS: f64 = 3.0;

/// Material kept between the bore and the pitch circle of an external gear.
///
/// The bore radius is clamped to `BORE_CLEARANCE` inside the closest point
/// of the chord spanning the gap between two teeth, which never exceeds
/// `pitch_radius - BORE_CLEARANCE`.
pub const BORE_CLEARANCE: f64 = 2.0;

/// Minimum rim thickness outside the tooth pockets of an internal gear.
///
/// The rim radius is at least `outer_radius + RIM_CLEARANCE`.
pub const RIM_CLEARANCE: f64 = 5.0;

/// Lower bound for the face width (extrusion depth).
pub const MIN_WIDTH: f64 = 1.0;

// =============================================================================
// PROFILE CONSTANTS
// =============================================================================

/// Extra teeth worth of diameter between pitch and tip circles.
///
/// `module = outer_diameter / (tooth_count + ADDENDUM_TEETH)`
pub const ADDENDUM_TEETH: f64 = 2.0;

/// Whole tooth depth in modules.
pub const TOOTH_DEPTH_FACTOR: f64 = 2.25;

/// Fraction of the angular pitch occupied by one tooth.
pub const TOOTH_WIDTH_FRACTION: f64 = 0.4;

/// Twist in radians applied across the full face width of a helical gear.
///
/// # Examples
/// ```
/// use config::constants::HELIX_ANGLE;
/// assert!(HELIX_ANGLE > 0.0 && HELIX_ANGLE < std::f64::consts::FRAC_PI_2);
/// ```
pub const HELIX_ANGLE: f64 = 0.3;

/// Radial shrink applied across the full face width of a bevel gear.
///
/// The far face is scaled by `1 - CONE_ANGLE`.
pub const CONE_ANGLE: f64 = 0.5;

/// Ratio of the crown top diameter to the base outer diameter.
pub const CROWN_DIAMETER_RATIO: f64 = 0.95;

/// Ratio of the crown top width to the base width.
pub const CROWN_WIDTH_RATIO: f64 = 0.8;

/// Smallest outer diameter the crown top gear may have.
pub const MIN_CROWN_DIAMETER: f64 = 10.0;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Segments of the polygon approximating a central bore.
pub const BORE_SEGMENTS: u32 = 32;

/// Segments of the polygon approximating the rim of an internal gear.
pub const RIM_SEGMENTS: u32 = 64;

/// Samples along one lens-shaped internal tooth pocket.
pub const POCKET_SEGMENTS: u32 = 8;

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// Triangles whose doubled area (`|cross(b - a, c - a)|`) falls below this
/// are dropped from the export.
///
/// # Examples
/// ```
/// use config::constants::DEGENERATE_AREA_EPSILON;
/// assert!(DEGENERATE_AREA_EPSILON < 1.0e-3);
/// ```
pub const DEGENERATE_AREA_EPSILON: f64 = 1.0e-4;

/// Fractional digits written for every STL number.
pub const STL_DECIMALS: usize = 6;

/// Name written after `solid` / `endsolid`.
pub const STL_SOLID_NAME: &str = "gear";

/// Normal written when a facet normal cannot be computed.
pub const FALLBACK_NORMAL: [f64; 3] = [0.0, 0.0, 1.0];

// =============================================================================
// DEFAULT PARAMETERS
// =============================================================================

/// Tooth count of a freshly reset editor.
pub const DEFAULT_TOOTH_COUNT: i64 = 24;

/// Outer diameter of a freshly reset editor.
pub const DEFAULT_OUTER_DIAMETER: f64 = 25.58;

/// Bore diameter of a freshly reset editor.
pub const DEFAULT_INNER_HOLE_DIAMETER: f64 = 5.0;

/// Face width of a freshly reset editor.
pub const DEFAULT_WIDTH: f64 = 8.0;

/// Crown top tooth count of a freshly reset editor.
pub const DEFAULT_TOP_TOOTH_COUNT: i64 = 12;

/// Crown top diameter of a freshly reset editor.
pub const DEFAULT_TOP_DIAMETER: f64 = 13.33;

/// Crown top width of a freshly reset editor.
pub const DEFAULT_TOP_WIDTH: f64 = 3.0;

/// Crown top offset, in percent of the base width.
pub const DEFAULT_TOP_OFFSET_PERCENT: f64 = 100.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clamps a raw tooth count into `[MIN_TOOTH_COUNT, MAX_TOOTH_COUNT]`.
///
/// Accepts a signed value because the editor allows arbitrary integer entry.
///
/// # Examples
/// ```
/// use config::constants::clamp_tooth_count;
/// assert_eq!(clamp_tooth_count(-4), 8);
/// assert_eq!(clamp_tooth_count(42), 42);
/// assert_eq!(clamp_tooth_count(1_000), 100);
/// ```
pub fn clamp_tooth_count(raw: i64) -> u32 {
    raw.clamp(i64::from(MIN_TOOTH_COUNT), i64::from(MAX_TOOTH_COUNT)) as u32
}

// =============================================================================
// KERNEL CONFIG
// =============================================================================

/// Immutable snapshot of the tunable export settings.
///
/// # Examples
/// ```
/// use config::constants::KernelConfig;
/// let config = KernelConfig::default();
/// assert_eq!(config.solid_name, "gear");
/// assert!(config.degenerate_epsilon > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KernelConfig {
    /// Doubled-area threshold below which a triangle is skipped on export.
    pub degenerate_epsilon: f64,
    /// Name written in the `solid` / `endsolid` lines.
    pub solid_name: String,
}

impl KernelConfig {
    /// Builds a configuration, rejecting values that would produce an
    /// unreadable STL.
    ///
    /// # Examples
    /// ```
    /// use config::constants::KernelConfig;
    /// let cfg = KernelConfig::new(1.0e-6, "bracket").expect("valid config");
    /// assert_eq!(cfg.solid_name, "bracket");
    /// assert!(KernelConfig::new(0.0, "gear").is_err());
    /// assert!(KernelConfig::new(1.0e-6, "two words").is_err());
    /// ```
    pub fn new(degenerate_epsilon: f64, solid_name: impl Into<String>) -> Result<Self, ConfigError> {
        if degenerate_epsilon <= 0.0 || !degenerate_epsilon.is_finite() {
            return Err(ConfigError::InvalidEpsilon(degenerate_epsilon));
        }
        let solid_name = solid_name.into();
        if solid_name.is_empty() || solid_name.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidSolidName(solid_name));
        }
        Ok(Self {
            degenerate_epsilon,
            solid_name,
        })
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            degenerate_epsilon: DEGENERATE_AREA_EPSILON,
            solid_name: STL_SOLID_NAME.to_string(),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the degenerate threshold is zero, negative or not finite.
    InvalidEpsilon(f64),
    /// Raised when the solid name is empty or contains whitespace.
    InvalidSolidName(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidEpsilon(value) => {
                write!(f, "degenerate_epsilon must be positive and finite: {value}")
            }
            ConfigError::InvalidSolidName(name) => {
                write!(f, "solid name must be a single non-empty word: {name:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
