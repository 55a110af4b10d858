//! # Export
//!
//! Serializers that turn a finished [`Mesh`](crate::Mesh) into bytes for a
//! collaborator to save. Nothing here touches the filesystem.

pub mod stl;

pub use stl::{serialize, serialize_with, suggested_file_name, write_stl, StlExport};
