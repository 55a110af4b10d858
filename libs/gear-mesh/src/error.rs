//! # Mesh Errors
//!
//! Error types for mesh validation and STL export.
//!
//! Generation never fails; these are only produced when a mesh is checked
//! or exported.

use thiserror::Error;

/// Structural problems found by [`Mesh::validate_indices`](crate::Mesh::validate_indices).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A triangle refers to a vertex that does not exist
    #[error("Triangle {triangle} refers to vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },

    /// A vertex coordinate is NaN or infinite
    #[error("Vertex {vertex} has a non-finite coordinate: {value}")]
    NonFiniteVertex { vertex: usize, value: f64 },
}

/// Errors that can occur while exporting a mesh to STL.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A vertex coordinate is NaN or infinite; nothing was written
    #[error("Invalid geometry: vertex {vertex} has non-finite coordinate {value}; check the gear parameters")]
    InvalidGeometry { vertex: usize, value: f64 },

    /// Every triangle was degenerate, so the solid would be empty
    #[error("Empty geometry: no non-degenerate triangles to export")]
    EmptyGeometry,

    /// Writing the serialized bytes failed
    #[error("I/O error while writing STL: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// TESTS
// =============================================================================
