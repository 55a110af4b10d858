//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// CLAMP TESTS
// =============================================================================

#[test]
fn test_tooth_count_bounds_ordered() {
    assert!(MIN_TOOTH_COUNT < MAX_TOOTH_COUNT);
}

#[test]
fn test_clamp_tooth_count_passes_in_range() {
    for raw in [8, 9, 24, 99, 100] {
        assert_eq!(clamp_tooth_count(raw), raw as u32);
    }
}

#[test]
fn test_clamp_tooth_count_clamps_out_of_range() {
    assert_eq!(clamp_tooth_count(i64::MIN), MIN_TOOTH_COUNT);
    assert_eq!(clamp_tooth_count(0), MIN_TOOTH_COUNT);
    assert_eq!(clamp_tooth_count(7), MIN_TOOTH_COUNT);
    assert_eq!(clamp_tooth_count(101), MAX_TOOTH_COUNT);
    assert_eq!(clamp_tooth_count(i64::MAX), MAX_TOOTH_COUNT);
}

#[test]
fn test_minimum_radii_keep_pitch_inside_tip() {
    // Both clamps firing at once must still leave the pitch circle inside the tip.
    assert!(MIN_PITCH_RADIUS < MIN_OUTER_RADIUS);
}

#[test]
fn test_bore_clearance_leaves_room_at_minimum_pitch() {
    assert!(MIN_PITCH_RADIUS - BORE_CLEARANCE > 0.0);
}

// =============================================================================
// PROFILE TESTS
// =============================================================================

#[test]
fn test_tooth_width_fraction_leaves_gap() {
    assert!(TOOTH_WIDTH_FRACTION > 0.0 && TOOTH_WIDTH_FRACTION < 1.0);
}

#[test]
fn test_cone_angle_keeps_positive_scale() {
    assert!(1.0 - CONE_ANGLE > 0.0);
}

#[test]
fn test_crown_ratios_shrink() {
    assert!(CROWN_DIAMETER_RATIO < 1.0);
    assert!(CROWN_WIDTH_RATIO < 1.0);
}

// =============================================================================
// TESSELLATION TESTS
// =============================================================================

#[test]
fn test_segment_counts_form_polygons() {
    assert!(BORE_SEGMENTS >= 3);
    assert!(RIM_SEGMENTS >= 3);
    assert!(POCKET_SEGMENTS >= 3);
}

// =============================================================================
// EXPORT TESTS
// =============================================================================

#[test]
fn test_fallback_normal_is_unit() {
    let [x, y, z] = FALLBACK_NORMAL;
    assert_eq!(x * x + y * y + z * z, 1.0);
}

#[test]
fn test_stl_decimals_fixed_at_six() {
    assert_eq!(STL_DECIMALS, 6);
}

// =============================================================================
// DEFAULT TESTS
// =============================================================================

#[test]
fn test_defaults_within_clamps() {
    assert_eq!(clamp_tooth_count(DEFAULT_TOOTH_COUNT) as i64, DEFAULT_TOOTH_COUNT);
    assert_eq!(
        clamp_tooth_count(DEFAULT_TOP_TOOTH_COUNT) as i64,
        DEFAULT_TOP_TOOTH_COUNT
    );
    assert!(DEFAULT_INNER_HOLE_DIAMETER < DEFAULT_OUTER_DIAMETER);
    assert!(DEFAULT_WIDTH >= MIN_WIDTH);
}
