//! WASM-facing entry points for the gear kernel.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Parameters cross the boundary as a JSON ParameterSet;
//! native tests use the `*_internal` helpers to avoid depending on a JS host.
//!
//! ```
//! let mesh = gear_wasm::generate_gear_internal(r#"{"toothCount": 12}"#).unwrap();
//! assert_eq!(mesh.tooth_count(), 12);
//! ```

use gear_params::ParameterSet;
use wasm_bindgen::prelude::*;

mod error;
mod mesh_handle;

pub use error::{ErrorKind, GearError};
pub use mesh_handle::{MeshHandle, StlHandle};

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "gear-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the editor's reset state as a JSON ParameterSet.
///
/// # Examples
/// ```
/// let json = gear_wasm::default_parameters();
/// assert!(json.contains("\"toothCount\":24"));
/// ```
#[wasm_bindgen]
pub fn default_parameters() -> String {
    ParameterSet::default()
        .to_json()
        .unwrap_or_else(|_| String::from("{}"))
}

/// Generates a gear mesh from a JSON ParameterSet.
///
/// Missing fields take their default values and unknown gear type names
/// build a spur gear.
///
/// # Errors
/// Throws a string message when the JSON cannot be decoded.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = generate_gear(JSON.stringify({ gearType: "helical" }));
/// // console.log(mesh.vertex_count, mesh.summary());
/// ```
#[wasm_bindgen]
pub fn generate_gear(params_json: &str) -> Result<MeshHandle, JsValue> {
    generate_gear_internal(params_json).map_err(JsValue::from)
}

/// Host-only helper behind [`generate_gear`].
pub fn generate_gear_internal(params_json: &str) -> Result<MeshHandle, GearError> {
    let params = ParameterSet::from_json(params_json)?;
    Ok(MeshHandle::from_model(gear_mesh::generate(&params)))
}

/// Generates a gear and serializes it to ASCII STL.
///
/// # Errors
/// Throws a string message for undecodable JSON, non-finite geometry or a
/// mesh with no non-degenerate triangle.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const stl = export_stl(json);
/// // console.log(`STL exported with ${stl.triangle_count} triangles`);
/// ```
#[wasm_bindgen]
pub fn export_stl(params_json: &str) -> Result<StlHandle, JsValue> {
    export_stl_internal(params_json).map_err(JsValue::from)
}

/// Host-only helper behind [`export_stl`].
pub fn export_stl_internal(params_json: &str) -> Result<StlHandle, GearError> {
    let params = ParameterSet::from_json(params_json)?;
    Ok(gear_mesh::export_stl(&params)?.into())
}

/// Suggests a download name for an export made at `timestamp_ms`
/// (milliseconds, as returned by `Date.now()`).
///
/// # Examples
/// ```
/// assert_eq!(gear_wasm::suggested_file_name(1700000000000.0), "gear_1700000000000.stl");
/// ```
#[wasm_bindgen]
pub fn suggested_file_name(timestamp_ms: f64) -> String {
    let timestamp = if timestamp_ms.is_finite() && timestamp_ms > 0.0 {
        timestamp_ms as u64
    } else {
        0
    };
    gear_mesh::export::suggested_file_name(timestamp)
}

/// Cross-product length below which export drops a triangle.
#[wasm_bindgen]
pub fn degenerate_epsilon() -> f64 {
    config::constants::DEGENERATE_AREA_EPSILON
}

#[cfg(test)]
mod tests;
