//! Offset (row, column) coordinates and their conversion to cube space.
//!
//! Offset coordinates address cells the way a 2D array would. They are not
//! unique on their own: the same `(row, col)` names a different cell under
//! each [`CellOrientation`], so every conversion takes the orientation.
//!
//! Parity uses `& 1` on the two's complement value, which is 1 for every odd
//! number including negatives. `n - (n & 1)` and `n + (n & 1)` are therefore
//! always even and the halving is exact, so both directions round-trip for
//! every input.

use std::fmt;

use crate::{CellOrientation, CubeCoordinate};

/// A row/column cell address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetCoordinate {
    pub row: i32,
    pub col: i32,
}

impl OffsetCoordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cube coordinate this offset names under `orientation`.
    pub fn to_cube(self, orientation: CellOrientation) -> CubeCoordinate {
        offset_to_cube(self, orientation)
    }
}

impl fmt::Display for OffsetCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.col, self.row)
    }
}

impl CubeCoordinate {
    /// The offset address of this coordinate under `orientation`.
    pub fn to_offset(self, orientation: CellOrientation) -> OffsetCoordinate {
        cube_to_offset(self, orientation)
    }
}

/// Convert an offset coordinate to cube space.
pub fn offset_to_cube(o: OffsetCoordinate, orientation: CellOrientation) -> CubeCoordinate {
    let OffsetCoordinate { row, col } = o;
    match orientation {
        CellOrientation::PointyOdd => CubeCoordinate::new_xz(col - (row - (row & 1)) / 2, row),
        CellOrientation::PointyEven => CubeCoordinate::new_xz(col - (row + (row & 1)) / 2, row),
        CellOrientation::FlatOdd => CubeCoordinate::new_xz(col, row - (col - (col & 1)) / 2),
        CellOrientation::FlatEven => CubeCoordinate::new_xz(col, row - (col + (col & 1)) / 2),
    }
}

/// Convert a cube coordinate to its offset address.
pub fn cube_to_offset(c: CubeCoordinate, orientation: CellOrientation) -> OffsetCoordinate {
    let (x, z) = (c.x(), c.z());
    match orientation {
        CellOrientation::PointyOdd => OffsetCoordinate::new(z, x + (z - (z & 1)) / 2),
        CellOrientation::PointyEven => OffsetCoordinate::new(z, x + (z + (z & 1)) / 2),
        CellOrientation::FlatOdd => OffsetCoordinate::new(z + (x - (x & 1)) / 2, x),
        CellOrientation::FlatEven => OffsetCoordinate::new(z + (x + (x & 1)) / 2, x),
    }
}
