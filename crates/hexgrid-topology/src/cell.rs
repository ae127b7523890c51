//! Grid cell records.

use glam::Vec3;

use crate::{geometry, CellOrientation, CubeCoordinate, GridOrientation};

/// A cell of a [`Grid`](crate::Grid), keyed by its cube coordinate.
///
/// `data` is the caller's payload; the grid itself only needs the coordinate.
/// Cells are immutable. To change a payload, build a new cell and hand it to
/// [`Grid::replace`](crate::Grid::replace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell<T = ()> {
    coordinates: CubeCoordinate,
    data: T,
}

impl<T> Cell<T> {
    pub const fn new(coordinates: CubeCoordinate, data: T) -> Self {
        Self { coordinates, data }
    }

    pub const fn coordinates(&self) -> CubeCoordinate {
        self.coordinates
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn into_data(self) -> T {
        self.data
    }

    /// A copy of this cell carrying a different payload.
    pub fn with_data<U>(&self, data: U) -> Cell<U> {
        Cell::new(self.coordinates, data)
    }

    /// All six corners of this cell, for a grid whose origin cell is centred
    /// on `origin`.
    pub fn corners(
        &self,
        origin: Vec3,
        radius: f32,
        cell: CellOrientation,
        grid: GridOrientation,
    ) -> [Vec3; 6] {
        let centre = geometry::center(origin, self.coordinates, radius, cell, grid);
        geometry::corners(centre, radius, cell, grid)
    }
}

impl Cell {
    /// The `index`-th corner of a hex centred on `origin`.
    /// See [`geometry::corner`].
    pub fn corner(
        origin: Vec3,
        radius: f32,
        index: usize,
        cell: CellOrientation,
        grid: GridOrientation,
    ) -> Vec3 {
        geometry::corner(origin, radius, index, cell, grid)
    }
}

impl From<CubeCoordinate> for Cell {
    fn from(coordinates: CubeCoordinate) -> Self {
        Self::new(coordinates, ())
    }
}
