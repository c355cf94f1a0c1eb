//! # Mesh Errors
//!
//! Error types for primitive construction and mesh buffer import.

use thiserror::Error;

/// Errors that can occur while building or importing geometry.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    /// Primitive dimensions cannot form a closed volume.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Flat vertex/index buffers are malformed.
    #[error("Invalid mesh buffer: {message}")]
    InvalidBuffer { message: String },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid buffer error.
    pub fn invalid_buffer(message: impl Into<String>) -> Self {
        Self::InvalidBuffer {
            message: message.into(),
        }
    }
}
