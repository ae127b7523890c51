//! Hexgrid Topology
//!
//! Coordinates, shape generation and neighborhood queries for hexagonal grids.
//!
//! # Coordinate Systems
//!
//! Cells are addressed canonically by [`CubeCoordinate`]: three integer axes
//! with `x + y + z = 0`. Array-style callers can use [`OffsetCoordinate`]
//! (row, column) instead; the mapping between the two depends on the
//! [`CellOrientation`] (pointy or flat top, odd or even offset parity) and
//! round-trips exactly in both directions.
//!
//! # Grids
//!
//! A [`Grid`] is configured with a [`GridConfig`] (shape, orientations,
//! dimensions) and then [`generate`](Grid::generate)d. Generation always
//! rebuilds the cell set from scratch. After that the grid answers:
//!
//! - lookups: [`Grid::cell_at`]
//! - adjacency: [`Grid::neighbors`], in [`Direction::ALL`] order
//! - neighborhoods: [`Grid::cells_in_range`]
//! - distance: [`Grid::distance`]
//!
//! Lookups of coordinates outside the grid return `None` or an empty list,
//! never an error.
//!
//! # Geometry
//!
//! The [`geometry`] module turns cells into corner and centre points for a
//! renderer. It is the only floating point code in the crate.

mod cell;
mod config;
mod cube;
mod direction;
mod error;
pub mod geometry;
mod grid;
mod offset;
mod orientation;
mod shape;

pub use cell::Cell;
pub use config::GridConfig;
pub use cube::CubeCoordinate;
pub use direction::Direction;
pub use error::{GridError, Result};
pub use grid::Grid;
pub use offset::{cube_to_offset, offset_to_cube, OffsetCoordinate};
pub use orientation::{CellOrientation, GridOrientation, GridShape};

/// Largest accepted grid width or height.
///
/// Keeps every generated coordinate, and every range query around one,
/// comfortably inside `i32`.
pub const MAX_DIMENSION: u32 = 1 << 24;

// Generated cells have components up to twice the largest
// dimension, and a clamped range query reaches twice as far again.
const _: () = assert!(4 * (MAX_DIMENSION as i64) < i32::MAX as i64);

/// Number of neighbors of an interior cell.
pub const NEIGHBOR_COUNT: usize = 6;

const _: () = assert!(Direction::ALL.len() == NEIGHBOR_COUNT);
