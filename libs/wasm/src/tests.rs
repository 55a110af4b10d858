//! Tests for the WASM-facing pipeline helpers.

use super::*;

/// The reset state decodes back to the default parameter set.
#[test]
fn default_parameters_round_trip() {
    let params = ParameterSet::from_json(&default_parameters()).expect("valid JSON");
    assert_eq!(params, ParameterSet::default());
}

/// Generates the reset-state spur gear.
#[test]
fn generate_gear_produces_buffers() {
    let mesh = generate_gear_internal(&default_parameters()).expect("generation succeeds");

    assert_eq!(mesh.vertex_count(), 2 * (96 + 32));
    assert!(mesh.is_indexed());
    assert_eq!(mesh.vertices().len(), mesh.vertex_count() as usize * 3);
    assert_eq!(mesh.normals().len(), mesh.vertex_count() as usize * 3);
    assert_eq!(mesh.indices().len(), mesh.triangle_count() as usize * 3);
    assert_eq!(mesh.tooth_count(), 24);
    assert!(mesh.summary().starts_with("module: 0.98 mm"));
}

/// Mesh buffers contain finite values and in-range indices.
#[test]
fn generate_gear_buffers_valid() {
    let mesh = generate_gear_internal(r#"{"gearType":"internal"}"#).expect("generation succeeds");

    for &v in &mesh.vertices() {
        assert!(v.is_finite(), "Vertex value should be finite");
    }
    let vertex_count = mesh.vertex_count();
    for &idx in &mesh.indices() {
        assert!(idx < vertex_count, "Index {} out of range", idx);
    }
}

/// Unknown gear types build a spur gear rather than failing.
#[test]
fn unknown_gear_type_falls_back_to_spur() {
    let unknown = generate_gear_internal(r#"{"gearType":"worm"}"#).expect("lenient parse");
    let spur = generate_gear_internal(r#"{"gearType":"spur"}"#).expect("spur");
    assert_eq!(unknown.vertices(), spur.vertices());
}

/// Undecodable JSON surfaces an explicit error.
#[test]
fn malformed_json_is_rejected() {
    let err = generate_gear_internal("{toothCount: 24").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameters);
    assert!(!err.message().is_empty());
}

/// Exports the reset-state gear as STL.
#[test]
fn export_stl_produces_solid() {
    let stl = export_stl_internal(&default_parameters()).expect("export succeeds");
    let text = String::from_utf8(stl.bytes()).expect("ASCII output");
    assert!(stl.triangle_count() > 0);
    assert!(text.starts_with("solid gear"));
    assert!(text.trim_end().ends_with("endsolid gear"));
}

/// Export failures keep distinct kinds and messages.
#[test]
fn export_errors_are_distinct() {
    let empty = export_stl_internal(r#"{"scale":[0,0,0]}"#).unwrap_err();
    assert_eq!(empty.kind(), ErrorKind::EmptyGeometry);

    let malformed = export_stl_internal(r#"{"scale":"big"}"#).unwrap_err();
    assert_eq!(malformed.kind(), ErrorKind::InvalidParameters);
    assert_ne!(malformed.message(), empty.message());
}

#[test]
fn suggested_file_name_uses_timestamp() {
    assert_eq!(suggested_file_name(42.0), "gear_42.stl");
    assert_eq!(suggested_file_name(f64::NAN), "gear_0.stl");
}
