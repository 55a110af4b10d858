//! # ASCII STL
//!
//! ```text
//! solid gear
//!   facet normal nx ny nz
//!     outer loop
//!       vertex x1 y1 z1
//!       vertex x2 y2 z2
//!       vertex x3 y3 z3
//!     endloop
//!   endfacet
//! endsolid gear
//! ```
//!
//! Every number is fixed-point with six fractional digits. Degenerate
//! triangles are skipped; a mesh with no surviving triangle is an error
//! rather than an empty solid.

use std::fmt;
use std::io::Write;

use config::constants::{KernelConfig, STL_DECIMALS};
use glam::DVec3;
use tracing::{info, warn};

use crate::error::ExportError;
use crate::mesh::Mesh;
use crate::ops::normals::face_normal;

/// A serialized STL solid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StlExport {
    /// ASCII STL text
    pub bytes: Vec<u8>,
    /// Number of facets written
    pub triangle_count: usize,
    /// Candidate triangles dropped as degenerate or out of range
    pub skipped: usize,
}

impl StlExport {
    /// Returns the STL text.
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// Serializes a mesh with the default kernel configuration.
///
/// # Errors
///
/// - [`ExportError::InvalidGeometry`] if any coordinate is NaN or infinite;
///   nothing is written.
/// - [`ExportError::EmptyGeometry`] if every triangle is degenerate.
///
/// # Example
///
/// ```rust
/// use gear_mesh::{export::serialize, Mesh};
/// use glam::DVec3;
///
/// let mesh = Mesh::from_indexed(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]);
/// let stl = serialize(&mesh).unwrap();
/// assert_eq!(stl.triangle_count, 1);
/// assert!(stl.text().starts_with("solid gear\n"));
/// ```
pub fn serialize(mesh: &Mesh) -> Result<StlExport, ExportError> {
    serialize_with(mesh, &KernelConfig::default())
}

/// Serializes a mesh using the given degenerate threshold and solid name.
pub fn serialize_with(mesh: &Mesh, config: &KernelConfig) -> Result<StlExport, ExportError> {
    let (facets, skipped) = collect_facets(mesh, config)?;
    let mut bytes = Vec::with_capacity(facets.len() * 256);
    write_facets(&facets, &config.solid_name, &mut bytes)?;

    info!(
        triangles = facets.len(),
        skipped,
        bytes = bytes.len(),
        "STL exported"
    );
    Ok(StlExport {
        bytes,
        triangle_count: facets.len(),
        skipped,
    })
}

/// Writes a mesh as ASCII STL to `writer` and returns the facet count.
///
/// Validation happens before the first byte is written, so a failed
/// export leaves the writer untouched unless the writer itself fails.
pub fn write_stl<W: Write>(
    mesh: &Mesh,
    config: &KernelConfig,
    writer: W,
) -> Result<usize, ExportError> {
    let (facets, _) = collect_facets(mesh, config)?;
    write_facets(&facets, &config.solid_name, writer)?;
    Ok(facets.len())
}

/// File name to suggest when the collaborator saves an export.
///
/// ```rust
/// assert_eq!(gear_mesh::export::suggested_file_name(1700000000000), "gear_1700000000000.stl");
/// ```
pub fn suggested_file_name(timestamp_ms: u64) -> String {
    format!("gear_{timestamp_ms}.stl")
}

struct Facet {
    normal: DVec3,
    vertices: [DVec3; 3],
}

/// Validates the mesh and keeps every non-degenerate triangle.
///
/// Returns the facets together with the number of skipped triangles.
fn collect_facets(mesh: &Mesh, config: &KernelConfig) -> Result<(Vec<Facet>, usize), ExportError> {
    if let Some((vertex, value)) = mesh.first_non_finite() {
        return Err(ExportError::InvalidGeometry { vertex, value });
    }

    let vertices = mesh.vertices();
    let mut facets = Vec::with_capacity(mesh.triangle_count());
    let mut skipped = 0;

    for (triangle, [i0, i1, i2]) in mesh.triangles().enumerate() {
        let (Some(&a), Some(&b), Some(&c)) = (vertices.get(i0), vertices.get(i1), vertices.get(i2))
        else {
            warn!(triangle, i0, i1, i2, "Skipping triangle with out-of-range index");
            skipped += 1;
            continue;
        };
        if (b - a).cross(c - a).length() < config.degenerate_epsilon {
            skipped += 1;
            continue;
        }
        facets.push(Facet {
            normal: face_normal(a, b, c),
            vertices: [a, b, c],
        });
    }

    if facets.is_empty() {
        return Err(ExportError::EmptyGeometry);
    }
    Ok((facets, skipped))
}

fn write_facets<W: Write>(facets: &[Facet], name: &str, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "solid {name}")?;
    for facet in facets {
        writeln!(writer, "  facet normal {}", Triple(facet.normal))?;
        writeln!(writer, "    outer loop")?;
        for v in facet.vertices {
            writeln!(writer, "      vertex {}", Triple(v))?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid {name}")?;
    writer.flush()
}

/// Fixed-point number that never prints as negative zero.
struct Fixed(f64);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:.*}", STL_DECIMALS, self.0);
        match text.strip_prefix('-') {
            Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => {
                f.write_str(magnitude)
            }
            _ => f.write_str(&text),
        }
    }
}

struct Triple(DVec3);

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", Fixed(self.0.x), Fixed(self.0.y), Fixed(self.0.z))
    }
}
