//! # Config Crate
//!
//! Centralized configuration constants for the gear geometry kernel.
//! Every clamp bound, fixed profile angle, segment count and export
//! tolerance is defined here so the generators and the STL writer agree
//! on a single set of numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{clamp_tooth_count, MAX_TOOTH_COUNT, MIN_TOOTH_COUNT};
//!
//! assert_eq!(clamp_tooth_count(3), MIN_TOOTH_COUNT);
//! assert_eq!(clamp_tooth_count(500), MAX_TOOTH_COUNT);
//! assert_eq!(clamp_tooth_count(24), 24);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Dependency-Free**: Pure constants and small helpers

pub mod constants;

#[cfg(test)]
mod tests;
