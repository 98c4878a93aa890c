//! Error types for the JSON text boundary.
//!
//! Only conversion to and from text can fail. The query surface (accessors,
//! paths, search) reports absence and shape mismatches as `None` instead of
//! producing errors.

use thiserror::Error;

/// Errors that can occur while converting between JSON text and values.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value could not be rendered as JSON text.
    #[error("JSON serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Convenience alias used throughout json-probe.
pub type Result<T> = std::result::Result<T, ProbeError>;
