//! Error types for geometric operations.

use thiserror::Error;

/// Errors that can occur during polygon orientation or extrusion.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// The polygon encloses no area (collinear or zero-extent input).
    #[error("Degenerate polygon: signed area {area} is within epsilon of zero")]
    DegeneratePolygon {
        /// The computed signed area.
        area: f64,
    },

    /// Extrusion thickness must be strictly positive.
    #[error("Invalid extrusion thickness: {0} (must be > 0)")]
    InvalidThickness(f64),
}

/// Result type for geometric operations.
pub type GeometryResult<T> = std::result::Result<T, GeometryError>;
