//! # Mesh Errors
//!
//! Error types for mesh generation.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Dimensions too small to enclose a volume.
    #[error("degenerate geometry: {message}")]
    Degenerate { message: String },

    /// Tessellation resolution below the minimum.
    #[error("invalid resolution: {name} must be at least {min}, got {value}")]
    InvalidResolution {
        name: &'static str,
        min: u32,
        value: u32,
    },

    /// Not enough polygon vertices.
    #[error("not enough vertices: need at least {min}, got {count}")]
    TooFewVertices { min: usize, count: usize },

    /// A triangle references a vertex that does not exist.
    #[error("triangle {triangle} references vertex {index}, mesh has {vertex_count}")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::Degenerate {
            message: message.into(),
        }
    }

    /// Checks a tessellation resolution against its minimum.
    pub fn check_resolution(name: &'static str, value: u32, min: u32) -> Result<(), Self> {
        if value < min {
            return Err(Self::InvalidResolution { name, min, value });
        }
        Ok(())
    }
}
