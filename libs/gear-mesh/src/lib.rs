//! # Gear Mesh
//!
//! Procedural triangle meshes for parametric gears, and ASCII STL export.
//!
//! ## Architecture
//!
//! ```text
//! ParameterSet → derive() → profile generator → center → scale → normals → Mesh
//!                                                                         ↓
//!                                                              export::stl → bytes
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are browser-safe (pure Rust, no native dependencies):
//! - **Profiles**: Stylized tooth outlines, one generator per gear type
//! - **Extrusion**: Outline with holes swept along Z, caps by ear clipping
//! - **Transforms**: Twist, taper, translation and non-uniform scale
//! - **Export**: ASCII STL with degenerate-facet filtering
//!
//! ## Usage
//!
//! ```rust
//! use gear_mesh::{export_stl, generate};
//! use gear_params::ParameterSet;
//!
//! let params = ParameterSet::default();
//! let model = generate(&params);
//! assert!(model.mesh.triangle_count() > 0);
//!
//! let stl = export_stl(&params).unwrap();
//! assert!(stl.text().starts_with("solid gear"));
//! ```

pub mod error;
pub mod export;
pub mod mesh;
pub mod ops;
pub mod profiles;

pub use error::{ExportError, MeshError};
pub use export::StlExport;
pub use mesh::Mesh;

use gear_params::{derive, DerivedQuantities, ParameterSet};
use tracing::debug;

use crate::ops::{center, transform, VertexTransform};

/// A generated gear: its display mesh and the quantities it was built from.
#[derive(Debug, Clone)]
pub struct GearModel {
    /// Centered, scaled mesh with smooth vertex normals
    pub mesh: Mesh,
    /// Clamped quantities used by the generator
    pub derived: DerivedQuantities,
}

/// Runs the full generation pipeline for one parameter set.
///
/// The profile is centered on its bounding box before `params.scale` is
/// applied, so scaling is always about the model's own center. Never fails;
/// extreme scales may still yield non-finite or collapsed geometry, which
/// [`export::serialize`] reports.
pub fn generate(params: &ParameterSet) -> GearModel {
    let derived = derive(params);
    let mesh = profiles::build_gear(params, &derived);
    let mut mesh = transform(center(mesh), VertexTransform::Scale(params.scale));
    mesh.compute_normals();

    debug!(
        gear_type = %params.gear_type,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "Generated gear"
    );
    GearModel { mesh, derived }
}

/// Generates a gear and serializes it to ASCII STL.
///
/// # Errors
///
/// See [`export::serialize`].
pub fn export_stl(params: &ParameterSet) -> Result<StlExport, ExportError> {
    export::serialize(&generate(params).mesh)
}
