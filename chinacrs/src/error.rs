//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
///
/// Coordinate conversions themselves never fail, so this is only returned when parsing coordinate system names
/// and when reading points from foreign formats.
#[derive(Debug, Error)]
pub enum ChinaCrsError {
    /// The given name does not correspond to any of the supported coordinate systems.
    #[error("unknown coordinate system: {0}")]
    UnknownCrs(String),
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
}
