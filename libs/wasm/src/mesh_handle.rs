//! # Mesh Handle
//!
//! WASM-friendly wrappers for generated meshes and STL exports that can be
//! transferred to JavaScript.

use gear_mesh::{GearModel, StlExport};
use gear_params::DerivedQuantities;
use wasm_bindgen::prelude::*;

/// A handle to a generated gear mesh.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = generate_gear(JSON.stringify({ gearType: "spur", toothCount: 24 }));
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
///
/// label.textContent = mesh.summary();
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, ...], empty for an implicit triangle list
    indices: Vec<u32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    derived: DerivedQuantities,
    vertex_count: u32,
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Returns the triangle indices as a Uint32Array.
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns the smooth vertex normals as a Float32Array.
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Returns true if the mesh carries an index buffer.
    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Tooth count after clamping.
    #[wasm_bindgen(getter)]
    pub fn tooth_count(&self) -> u32 {
        self.derived.tooth_count
    }

    #[wasm_bindgen(getter)]
    pub fn module(&self) -> f64 {
        self.derived.module
    }

    #[wasm_bindgen(getter)]
    pub fn pitch_diameter(&self) -> f64 {
        self.derived.pitch_diameter
    }

    #[wasm_bindgen(getter)]
    pub fn tooth_depth(&self) -> f64 {
        self.derived.tooth_depth
    }

    /// Returns the calculated values as one line of text, e.g.
    /// `module: 0.98 mm, tooth depth: 2.21 mm, pitch diameter: 23.61 mm`.
    pub fn summary(&self) -> String {
        self.derived.to_string()
    }
}

impl MeshHandle {
    /// Creates a MeshHandle from a generated model.
    pub fn from_model(model: GearModel) -> Self {
        let mesh = model.mesh;
        Self {
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            normals: mesh.normals_f32().unwrap_or_default(),
            derived: model.derived,
            vertex_count: mesh.vertex_count() as u32,
            triangle_count: mesh.triangle_count() as u32,
        }
    }
}

/// A handle to a serialized STL solid.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const stl = export_stl(json);
/// const blob = new Blob([stl.bytes()], { type: 'application/sla' });
/// link.download = suggested_file_name(Date.now());
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct StlHandle {
    bytes: Vec<u8>,
    triangle_count: u32,
    skipped: u32,
}

#[wasm_bindgen]
impl StlHandle {
    /// Returns the ASCII STL as a Uint8Array.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Returns the number of facets written.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the number of degenerate triangles left out.
    #[wasm_bindgen(getter)]
    pub fn skipped(&self) -> u32 {
        self.skipped
    }
}

impl From<StlExport> for StlHandle {
    fn from(export: StlExport) -> Self {
        Self {
            triangle_count: export.triangle_count as u32,
            skipped: export.skipped as u32,
            bytes: export.bytes,
        }
    }
}
