//! # Boundary Errors
//!
//! Errors of the host-side helpers. Each kernel failure keeps its own kind,
//! and the exported functions throw its message as a JavaScript string so
//! the page can show a distinct message per case.

use gear_mesh::ExportError;
use gear_params::ParamsError;
use wasm_bindgen::prelude::*;

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The parameter JSON could not be decoded
    InvalidParameters,
    /// The mesh held a NaN or infinite coordinate
    InvalidGeometry,
    /// No triangle survived degenerate filtering
    EmptyGeometry,
    /// Writing the export buffer failed
    Io,
}

/// An error returned from a kernel entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct GearError {
    kind: ErrorKind,
    message: String,
}

impl GearError {
    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl std::fmt::Display for GearError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<ParamsError> for GearError {
    fn from(err: ParamsError) -> Self {
        Self {
            kind: ErrorKind::InvalidParameters,
            message: err.to_string(),
        }
    }
}

impl From<ExportError> for GearError {
    fn from(err: ExportError) -> Self {
        let kind = match err {
            ExportError::InvalidGeometry { .. } => ErrorKind::InvalidGeometry,
            ExportError::EmptyGeometry => ErrorKind::EmptyGeometry,
            ExportError::Io(_) => ErrorKind::Io,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

impl From<GearError> for JsValue {
    fn from(err: GearError) -> Self {
        JsValue::from_str(&err.message)
    }
}
