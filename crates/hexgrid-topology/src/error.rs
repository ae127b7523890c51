//! Error types for hexgrid-topology.

use thiserror::Error;

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur while building or configuring a grid.
///
/// Looking up a coordinate that is not part of the grid is not an error;
/// queries return `None` or an empty list instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// A cube coordinate was built from components that do not sum to zero.
    #[error("invalid cube coordinate ({x}, {y}, {z}): components must sum to zero")]
    InvalidCoordinate { x: i32, y: i32, z: i32 },

    /// The geometric hex radius is not a finite, positive number.
    #[error("invalid hex radius {0}: must be finite and greater than zero")]
    InvalidRadius(f32),

    /// A grid dimension exceeds what coordinate arithmetic can represent.
    #[error("{name} of {value} exceeds the maximum of {max}")]
    DimensionTooLarge {
        name: &'static str,
        value: u32,
        max: u32,
    },

    /// Text could not be parsed as a `x:y:z` cube coordinate.
    #[error("cannot parse cube coordinate from {0:?}")]
    ParseCoordinate(String),
}
