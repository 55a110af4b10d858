//! # Mesh Data Structure
//!
//! Triangle mesh with an optional index buffer and optional per-vertex
//! normals.

use glam::DVec3;

use crate::error::MeshError;
use crate::ops::normals;

/// A triangle mesh.
///
/// With an index buffer every `[u32; 3]` names one triangle. Without one the
/// vertices themselves form an implicit triangle list, consumed three at a
/// time, and a trailing incomplete triple is ignored.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the WASM boundary for GPU rendering.
///
/// # Example
///
/// ```rust
/// use gear_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices, absent for an implicit triangle list
    indices: Option<Vec<[u32; 3]>>,
    /// Optional vertex normals, parallel to `vertices`
    normals: Option<Vec<DVec3>>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty indexed mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Some(Vec::new()),
            normals: None,
        }
    }

    /// Creates an indexed mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            indices: Some(Vec::with_capacity(triangle_count)),
            normals: None,
        }
    }

    /// Creates an unindexed mesh whose vertices form an implicit triangle list.
    pub fn from_triangle_soup(vertices: Vec<DVec3>) -> Self {
        Self {
            vertices,
            indices: None,
            normals: None,
        }
    }

    /// Creates an indexed mesh from raw buffers.
    pub fn from_indexed(vertices: Vec<DVec3>, indices: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            indices: Some(indices),
            normals: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of candidate triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len(),
            None => self.vertices.len() / 3,
        }
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if the mesh carries an index buffer.
    #[inline]
    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    ///
    /// Only meaningful on indexed meshes; an unindexed mesh gains an index
    /// buffer holding just this triangle.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.indices.get_or_insert_with(Vec::new).push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the index buffer, if any.
    #[inline]
    pub fn indices(&self) -> Option<&[[u32; 3]]> {
        self.indices.as_deref()
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Iterates the candidate triangles as vertex index triples.
    ///
    /// Indices are not bounds-checked; see [`Mesh::validate_indices`].
    pub fn triangles(&self) -> Triangles<'_> {
        match &self.indices {
            Some(indices) => Triangles::Indexed(indices.iter()),
            None => Triangles::Implicit {
                next: 0,
                count: self.vertices.len() / 3,
            },
        }
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes and sets smooth per-vertex normals for display shading.
    pub fn compute_normals(&mut self) {
        self.normals = Some(normals::vertex_normals(self));
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Replaces every vertex with `f(vertex)`.
    ///
    /// The index buffer and vertex count are untouched. Normals are dropped
    /// because an arbitrary map invalidates them.
    pub fn map_vertices(&mut self, mut f: impl FnMut(DVec3) -> DVec3) {
        for v in &mut self.vertices {
            *v = f(*v);
        }
        self.normals = None;
    }

    /// Expands the mesh into an implicit triangle list.
    ///
    /// Unindexed meshes keep their vertices. Triangles referring to
    /// missing vertices are dropped, and normals are not carried over.
    pub fn unindexed(self) -> Mesh {
        let (positions, indices) = self.into_parts();
        let Some(indices) = indices else {
            return Mesh::from_triangle_soup(positions);
        };
        let mut vertices = Vec::with_capacity(indices.len() * 3);
        for tri in &indices {
            if let [Some(a), Some(b), Some(c)] = tri.map(|i| positions.get(i as usize)) {
                vertices.extend_from_slice(&[*a, *b, *c]);
            }
        }
        Mesh::from_triangle_soup(vertices)
    }

    /// Checks that every index names an existing vertex and every
    /// coordinate is finite.
    pub fn validate_indices(&self) -> Result<(), MeshError> {
        if let Some((vertex, value)) = self.first_non_finite() {
            return Err(MeshError::NonFiniteVertex { vertex, value });
        }
        let vertex_count = self.vertices.len();
        if let Some(indices) = &self.indices {
            for (triangle, tri) in indices.iter().enumerate() {
                if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                    return Err(MeshError::IndexOutOfRange {
                        triangle,
                        index,
                        vertex_count,
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the first vertex with a NaN or infinite coordinate, together
    /// with the offending value.
    pub fn first_non_finite(&self) -> Option<(usize, f64)> {
        self.vertices.iter().enumerate().find_map(|(i, v)| {
            v.to_array()
                .into_iter()
                .find(|c| !c.is_finite())
                .map(|c| (i, c))
        })
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array, empty for an
    /// unindexed mesh.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.indices
            .as_deref()
            .map(|indices| indices.iter().flatten().copied().collect())
            .unwrap_or_default()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            let mut result = Vec::with_capacity(normals.len() * 3);
            for n in normals {
                result.push(n.x as f32);
                result.push(n.y as f32);
                result.push(n.z as f32);
            }
            result
        })
    }

    pub(crate) fn into_parts(self) -> (Vec<DVec3>, Option<Vec<[u32; 3]>>) {
        (self.vertices, self.indices)
    }
}

/// Iterator over the candidate triangles of a [`Mesh`].
#[derive(Debug, Clone)]
pub enum Triangles<'a> {
    /// Triangles read from an index buffer
    Indexed(std::slice::Iter<'a, [u32; 3]>),
    /// Consecutive vertex triples of an implicit triangle list
    Implicit { next: usize, count: usize },
}

impl Iterator for Triangles<'_> {
    type Item = [usize; 3];

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Triangles::Indexed(iter) => iter.next().map(|tri| tri.map(|i| i as usize)),
            Triangles::Implicit { next, count } => {
                if *next >= *count {
                    return None;
                }
                let base = *next * 3;
                *next += 1;
                Some([base, base + 1, base + 2])
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self {
            Triangles::Indexed(iter) => iter.len(),
            Triangles::Implicit { next, count } => count - next,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Triangles<'_> {}
