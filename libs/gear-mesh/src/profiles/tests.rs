//! # Profile Generator Tests

use std::collections::HashMap;

use super::*;
use approx::assert_relative_eq;
use gear_params::derive;

fn derived_for(gear_type: GearType) -> (ParameterSet, DerivedQuantities) {
    let params = ParameterSet::new(gear_type);
    let derived = derive(&params);
    (params, derived)
}

fn radius_xy(v: glam::DVec3) -> f64 {
    v.truncate().length()
}

/// Counts how often each directed edge appears.
fn directed_edges(mesh: &crate::Mesh) -> HashMap<(usize, usize), usize> {
    let mut edges = HashMap::new();
    for [a, b, c] in mesh.triangles() {
        for edge in [(a, b), (b, c), (c, a)] {
            *edges.entry(edge).or_insert(0) += 1;
        }
    }
    edges
}

#[test]
fn test_spur_point_counts() {
    let (_, derived) = derived_for(GearType::Spur);
    let outline = spur::spur_outline(&derived);
    assert_eq!(outline.vertex_count(), 4 * 24);
    assert_eq!(outline.point_count(), 4 * 24 + 32);

    let mesh = spur::spur_gear(&derived);
    assert_eq!(mesh.vertex_count(), 2 * (4 * 24 + 32));
}

#[test]
fn test_spur_without_bore() {
    let mut params = ParameterSet::default();
    params.inner_hole_diameter = 0.0;
    let outline = spur::spur_outline(&derive(&params));
    assert!(!outline.has_holes());
    assert_eq!(outline.point_count(), 96);
}

#[test]
fn test_spur_clamped_tooth_counts() {
    for (raw, clamped) in [(2, 8), (8, 8), (57, 57), (100, 100), (400, 100)] {
        let mut params = ParameterSet::default();
        params.tooth_count = raw;
        let outline = spur::spur_outline(&derive(&params));
        assert_eq!(outline.vertex_count(), 4 * clamped);
    }
}

#[test]
fn test_spur_points_on_pitch_and_tip_circles() {
    let (_, derived) = derived_for(GearType::Spur);
    let outline = spur::spur_outline(&derived);
    for (i, p) in outline.outer.iter().enumerate() {
        let expected = match i % 4 {
            0 | 3 => derived.pitch_radius,
            _ => derived.outer_radius,
        };
        assert_relative_eq!(p.length(), expected, epsilon = 1e-9);
    }
    for p in &outline.holes[0] {
        assert_relative_eq!(p.length(), derived.inner_radius, epsilon = 1e-9);
    }
}

#[test]
fn test_helical_twists_top_only() {
    let (_, derived) = derived_for(GearType::Helical);
    let spur = spur::spur_gear(&derived);
    let helical = helical::helical_gear(&derived);
    assert_eq!(spur.vertex_count(), helical.vertex_count());
    assert_eq!(spur.indices(), helical.indices());

    for (before, after) in spur.vertices().iter().zip(helical.vertices()) {
        assert_relative_eq!(radius_xy(*before), radius_xy(*after), epsilon = 1e-9);
        assert_eq!(before.z, after.z);
        if before.z == 0.0 {
            assert_eq!(before, after);
        } else {
            let (a, b) = (before.truncate(), after.truncate());
            let turned = a.perp_dot(b).atan2(a.dot(b));
            assert_relative_eq!(turned, 0.3, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_bevel_halves_top_face() {
    let (_, derived) = derived_for(GearType::Bevel);
    let spur = spur::spur_gear(&derived);
    let bevel = bevel::bevel_gear(&derived);
    for (before, after) in spur.vertices().iter().zip(bevel.vertices()) {
        let factor = if before.z == 0.0 { 1.0 } else { 0.5 };
        assert_relative_eq!(after.x, before.x * factor, epsilon = 1e-12);
        assert_relative_eq!(after.y, before.y * factor, epsilon = 1e-12);
    }
}

#[test]
fn test_narrow_face_uses_clamped_width() {
    let mut params = ParameterSet::new(GearType::Bevel);
    params.width = 0.5;
    let derived = derive(&params);
    assert_eq!(derived.width, 1.0);

    let spur = spur::spur_gear(&derived);
    let bevel = bevel::bevel_gear(&derived);
    let (_, max) = bevel.bounding_box();
    assert_eq!(max.z, 1.0);
    for (before, after) in spur.vertices().iter().zip(bevel.vertices()) {
        let factor = if before.z == 0.0 { 1.0 } else { 0.5 };
        assert_relative_eq!(after.x, before.x * factor, epsilon = 1e-12);
        assert_relative_eq!(after.y, before.y * factor, epsilon = 1e-12);
    }

    let helical = helical::helical_gear(&derived);
    for (before, after) in spur.vertices().iter().zip(helical.vertices()) {
        if before.z == 1.0 {
            let (a, b) = (before.truncate(), after.truncate());
            assert_relative_eq!(a.perp_dot(b).atan2(a.dot(b)), 0.3, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_large_bore_on_few_teeth_stays_closed() {
    for gear_type in [GearType::Spur, GearType::Helical, GearType::Bevel] {
        let mut params = ParameterSet::new(gear_type);
        params.tooth_count = 8;
        params.outer_diameter = 400.0;
        params.inner_hole_diameter = 1000.0;
        let derived = derive(&params);
        let mesh = build_gear(&params, &derived);
        assert_eq!(mesh.vertex_count(), 2 * (4 * 8 + 32), "{gear_type}");

        let edges = directed_edges(&mesh);
        for (&(a, b), &count) in &edges {
            assert_eq!(count, 1, "{gear_type}: edge {a}->{b} used {count} times");
            assert_eq!(edges.get(&(b, a)), Some(&1), "{gear_type}: edge {a}->{b} has no twin");
        }
    }
}

#[test]
fn test_crown_top_gear_sits_at_offset() {
    let (params, _) = derived_for(GearType::Crown);
    let top = crown::crown_top_gear(&params);
    let (min, max) = top.bounding_box();
    assert_eq!(min.z, 8.0);
    assert_eq!(max.z, 11.0);
}

#[test]
fn test_crown_merges_both_gears() {
    let (params, derived) = derived_for(GearType::Crown);
    let base = spur::spur_gear(&derived);
    let top = crown::crown_top_gear(&params);
    let crown = crown::crown_gear(&params, &derived);
    assert_eq!(crown.vertex_count(), base.vertex_count() + top.vertex_count());
    assert_eq!(crown.triangle_count(), base.triangle_count() + top.triangle_count());
    assert!(crown.validate_indices().is_ok());
}

#[test]
fn test_crown_overlap_is_kept() {
    let mut params = ParameterSet::new(GearType::Crown);
    params.crown.top_offset_percent = 0.0;
    let derived = derive(&params);
    let crown = crown::crown_gear(&params, &derived);
    let (min, _) = crown::crown_top_gear(&params).bounding_box();
    assert_eq!(min.z, 0.0);
    assert!(crown.vertex_count() > spur::spur_gear(&derived).vertex_count());
}

#[test]
fn test_internal_outline() {
    let (_, derived) = derived_for(GearType::Internal);
    let outline = internal::internal_outline(&derived);
    assert_eq!(outline.vertex_count(), 64);
    assert_eq!(outline.holes.len(), 24);
    assert_eq!(outline.point_count(), 64 + 24 * 8);

    for p in &outline.outer {
        assert_relative_eq!(p.length(), derived.inner_radius, epsilon = 1e-9);
    }
    for pocket in &outline.holes {
        assert_relative_eq!(pocket[0].length(), derived.pitch_radius, epsilon = 1e-9);
        assert_relative_eq!(pocket[7].length(), derived.pitch_radius, epsilon = 1e-9);
        for p in pocket {
            assert!(p.length() <= derived.outer_radius + 1e-9);
            assert!(p.length() < derived.inner_radius);
        }
    }
}

#[test]
fn test_outline_dispatch() {
    let (_, derived) = derived_for(GearType::Internal);
    assert_eq!(outline(GearType::Internal, &derived).vertex_count(), 64);
    assert_eq!(outline(GearType::Helical, &derived).vertex_count(), 96);
}

#[test]
fn test_every_gear_type_builds() {
    for gear_type in GearType::ALL {
        let (params, derived) = derived_for(gear_type);
        let mesh = build_gear(&params, &derived);
        assert!(!mesh.is_empty(), "{gear_type}");
        assert!(mesh.triangle_count() > 0, "{gear_type}");
        assert!(mesh.validate_indices().is_ok(), "{gear_type}");
    }
}

#[test]
fn test_extreme_parameters_stay_finite() {
    for gear_type in GearType::ALL {
        for diameter in [0.0, 1.0, 1.0e4, f64::NAN, f64::INFINITY] {
            let mut params = ParameterSet::new(gear_type);
            params.outer_diameter = diameter;
            params.width = -2.0;
            let derived = derive(&params);
            let mesh = build_gear(&params, &derived);
            assert!(mesh.first_non_finite().is_none(), "{gear_type} d={diameter}");
            assert!(mesh.triangle_count() > 0, "{gear_type} d={diameter}");
        }
    }
}
