//! # Parameter Errors
//!
//! Error types for reading parameter sets at the collaborator boundary.

use thiserror::Error;

/// Errors that can occur while decoding a parameter set.
///
/// Deriving quantities from a decoded set cannot fail.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// The JSON document could not be decoded.
    #[error("Invalid parameter JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// TESTS
// =============================================================================
