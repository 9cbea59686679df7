//! Error types for the surface world registry.

use nalgebra::Point3;
use surface_geometry::GeometryError;
use surface_place::PlaceError;
use thiserror::Error;

/// Errors that can occur in registry operations.
///
/// Empty query results (no tables in an ROI, no accepted placement points)
/// are valid outcomes, not errors.
#[derive(Debug, Error)]
pub enum WorldError {
    /// The ROI box is inverted (min > max on some axis).
    #[error("Invalid ROI box: min {min:?} exceeds max {max:?}")]
    InvalidRoi {
        /// Minimum corner as supplied.
        min: Point3<f64>,
        /// Maximum corner as supplied.
        max: Point3<f64>,
    },

    /// No table with the given identifier is known.
    #[error("Unknown table: {id}")]
    TableNotFound {
        /// The identifier that failed to resolve.
        id: String,
    },

    /// A replacement set contained the same identifier twice.
    #[error("Duplicate table id in replacement set: {id}")]
    DuplicateTable {
        /// The repeated identifier.
        id: String,
    },

    /// A geometric operation on a table footprint failed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// A placement sampling request was malformed.
    #[error(transparent)]
    Place(#[from] PlaceError),
}

/// Result type for registry operations.
pub type WorldResult<T> = std::result::Result<T, WorldError>;
