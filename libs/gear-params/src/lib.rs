//! # Gear Params
//!
//! Input layer of the gear kernel. A [`ParameterSet`] is built fresh for
//! every generation request and handed to [`derive`], which clamps it and
//! computes the quantities every profile generator reads.
//!
//! ## Architecture
//!
//! ```text
//! editor / JSON → ParameterSet → derive() → DerivedQuantities → gear-mesh
//! ```
//!
//! Deriving never fails: out-of-range input is clamped rather than rejected,
//! so a self-intersecting or empty profile is unreachable downstream.
//!
//! ## Usage
//!
//! ```rust
//! use gear_params::{derive, ParameterSet};
//!
//! let params = ParameterSet::default();
//! let derived = derive(&params);
//! assert_eq!(derived.tooth_count, 24);
//! assert!(derived.pitch_radius < derived.outer_radius);
//! ```

pub mod derived;
pub mod error;
pub mod params;

pub use derived::{derive, DerivedQuantities};
pub use error::ParamsError;
pub use params::{CrownParams, GearType, ParameterSet};
