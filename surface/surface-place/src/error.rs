//! Error types for placement sampling.

use thiserror::Error;

/// Errors that can occur while sampling placement poses.
///
/// An empty pose sequence is **not** an error; these variants only cover
/// requests that are malformed before sampling starts.
#[derive(Debug, Error)]
pub enum PlaceError {
    /// Grid resolution must be strictly positive.
    #[error("Invalid sampling resolution: {0} (must be > 0)")]
    InvalidResolution(f64),

    /// At least one height layer must be requested.
    #[error("Invalid number of height layers: 0 (must be >= 1)")]
    NoHeights,
}

/// Result type for placement sampling.
pub type PlaceResult<T> = std::result::Result<T, PlaceError>;
