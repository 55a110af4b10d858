//! # Mesh Operations
//!
//! Building blocks shared by the profile generators:
//! - **extrude**: Sweep a 2D outline with holes along Z
//! - **triangulate**: Ear-clip outlines with holes into cap triangles
//! - **transform**: Per-vertex twist, taper, translation, scale and centering
//! - **merge**: Concatenate two meshes with index offsetting
//! - **normals**: Face and vertex normals

pub mod extrude;
pub mod merge;
pub mod normals;
pub mod transform;
pub mod triangulate;

pub use extrude::{linear_extrude, Polygon2D};
pub use merge::merge;
pub use transform::{center, transform, VertexTransform};
