//! The grid container: generation, lookup and neighborhood queries.

use glam::Vec3;
use indexmap::IndexMap;

use crate::{
    geometry, shape, Cell, CubeCoordinate, Direction, GridConfig, OffsetCoordinate, Result,
};

/// A set of hex cells generated from a [`GridConfig`].
///
/// Cells are keyed by their cube coordinate and kept in generation order.
/// The cell set only changes through [`generate`](Self::generate), which
/// rebuilds it from scratch, or [`replace`](Self::replace), which swaps a
/// cell's payload under an existing key. Every stored cell's coordinates
/// equal its key.
///
/// ```
/// use hexgrid_topology::{CubeCoordinate, Grid, GridConfig, GridShape};
///
/// let mut grid: Grid = Grid::new(GridConfig::new(GridShape::Hexagon, 2, 2)).unwrap();
/// grid.generate();
/// assert_eq!(grid.len(), 19);
/// assert_eq!(grid.neighbors(CubeCoordinate::ORIGIN).len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Grid<T = ()> {
    config: GridConfig,
    cells: IndexMap<CubeCoordinate, Cell<T>>,
    /// Largest distance from the origin to any generated cell.
    extent: u32,
}

impl<T> Grid<T> {
    /// Create an empty grid. Call [`generate`](Self::generate) to fill it.
    pub fn new(config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cells: IndexMap::new(),
            extent: 0,
        })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Swap in a new configuration. Existing cells are kept until the next
    /// call to `generate`.
    pub fn set_config(&mut self, config: GridConfig) -> Result<()> {
        config.validate()?;
        tracing::trace!("Grid reconfigured: {:?}", config);
        self.config = config;
        Ok(())
    }

    /// Rebuild the cell set, initialising each payload from its coordinate.
    pub fn generate_with<F>(&mut self, mut init: F)
    where
        F: FnMut(CubeCoordinate) -> T,
    {
        self.cells.clear();
        self.extent = 0;

        let coords = shape::shape_coordinates(&self.config);
        self.cells.reserve(coords.len());
        for coord in coords {
            self.extent = self.extent.max(coord.length());
            let previous = self.cells.insert(coord, Cell::new(coord, init(coord)));
            debug_assert!(previous.is_none(), "shape emitted {} twice", coord);
        }

        tracing::debug!(
            "Generated {} {} grid of {} cells ({}x{}, {})",
            self.config.shape,
            self.config.cell_orientation,
            self.cells.len(),
            self.config.width,
            self.config.height,
            self.config.grid_orientation,
        );
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells, in generation order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell<T>> {
        self.cells.values()
    }

    /// All cell coordinates, in generation order.
    pub fn coordinates(&self) -> impl Iterator<Item = CubeCoordinate> + '_ {
        self.cells.keys().copied()
    }

    pub fn contains(&self, coord: CubeCoordinate) -> bool {
        self.cells.contains_key(&coord)
    }

    /// The cell at `coord`, if it is part of the grid.
    pub fn cell_at(&self, coord: CubeCoordinate) -> Option<&Cell<T>> {
        self.cells.get(&coord)
    }

    /// Lookup by `x` and `z`, deriving `y`.
    pub fn cell_at_xz(&self, x: i32, z: i32) -> Option<&Cell<T>> {
        // Out-of-range components cannot name a generated cell
        let y = i32::try_from(-(x as i64) - z as i64).ok()?;
        self.cell_at_xyz(x, y, z)
    }

    /// Lookup by all three components. A triple that does not sum to zero
    /// names no cell.
    pub fn cell_at_xyz(&self, x: i32, y: i32, z: i32) -> Option<&Cell<T>> {
        CubeCoordinate::try_new(x, y, z)
            .ok()
            .and_then(|coord| self.cell_at(coord))
    }

    /// Lookup by offset coordinate, using this grid's cell orientation.
    pub fn cell_at_offset(&self, offset: OffsetCoordinate) -> Option<&Cell<T>> {
        self.cell_at(offset.to_cube(self.config.cell_orientation))
    }

    /// The neighbor of `coord` in one direction, if present.
    pub fn neighbor(&self, coord: CubeCoordinate, direction: Direction) -> Option<&Cell<T>> {
        self.cell_at(coord.neighbor(direction))
    }

    /// The cells adjacent to `coord`, in [`Direction::ALL`] order.
    ///
    /// Directions pointing outside the grid are skipped. If `coord` itself
    /// is not in the grid the result is empty.
    pub fn neighbors(&self, coord: CubeCoordinate) -> Vec<&Cell<T>> {
        if !self.contains(coord) {
            return Vec::new();
        }
        self.neighbors_around(coord)
    }

    /// The cells adjacent to `cell`, in [`Direction::ALL`] order.
    ///
    /// The cell is taken as given: it does not have to be stored in this grid.
    pub fn neighbors_of(&self, cell: &Cell<T>) -> Vec<&Cell<T>> {
        if !self.may_reach(cell.coordinates(), 1) {
            return Vec::new();
        }
        self.neighbors_around(cell.coordinates())
    }

    /// Whether any generated cell could lie within `range` of `center`.
    ///
    /// Every cell is at most `extent` from the origin, so a centre further
    /// out than `extent + range` misses them all.
    fn may_reach(&self, center: CubeCoordinate, range: u32) -> bool {
        !self.cells.is_empty() && center.length() <= self.extent.saturating_add(range)
    }

    fn neighbors_around(&self, coord: CubeCoordinate) -> Vec<&Cell<T>> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.neighbor(coord, dir))
            .collect()
    }

    /// Every cell within `range` steps of `center`, including the centre.
    ///
    /// Cells are ordered by `dx`, then `dy`, relative to the centre. If
    /// `center` is not in the grid the result is empty.
    pub fn cells_in_range(&self, center: CubeCoordinate, range: u32) -> Vec<&Cell<T>> {
        if !self.contains(center) {
            return Vec::new();
        }
        self.cells_around(center, range)
    }

    /// Every cell within `range` steps of `cell`. Like
    /// [`neighbors_of`](Self::neighbors_of), the cell does not have to be
    /// stored in this grid. However far away the cell is, the work done is
    /// bounded by the size of the grid.
    pub fn cells_in_range_of(&self, cell: &Cell<T>, range: u32) -> Vec<&Cell<T>> {
        self.cells_around(cell.coordinates(), range)
    }

    fn cells_around(&self, center: CubeCoordinate, range: u32) -> Vec<&Cell<T>> {
        if !self.may_reach(center, range) {
            return Vec::new();
        }

        // Nothing lies further than this, so larger ranges only add misses
        let useful = center.length().saturating_add(self.extent);
        if range > useful {
            tracing::trace!("Clamping range {} around {} to {}", range, center, useful);
        }
        let range = range.min(useful);

        let r = range as u64;
        let area = (3 * r).saturating_mul(r + 1).saturating_add(1);
        if area <= self.cells.len() as u64 {
            return center
                .range(range)
                .filter_map(|coord| self.cell_at(coord))
                .collect();
        }

        // The disk is larger than the grid: scan the cells instead and sort
        // them into the order `range` would have visited them.
        tracing::trace!("Scanning {} cells for range {} around {}", self.len(), range, center);
        let mut found: Vec<_> = self
            .cells
            .values()
            .filter(|cell| cell.coordinates().distance(&center) <= range)
            .collect();
        found.sort_unstable_by_key(|cell| {
            let c = cell.coordinates();
            (c.x() as i64 - center.x() as i64, c.y() as i64 - center.y() as i64)
        });
        found
    }

    /// Hex distance between two coordinates, in steps.
    ///
    /// The coordinates need not be part of the grid.
    pub fn distance(&self, a: CubeCoordinate, b: CubeCoordinate) -> u32 {
        a.distance(&b)
    }

    pub fn distance_between(&self, a: &Cell<T>, b: &Cell<T>) -> u32 {
        self.distance(a.coordinates(), b.coordinates())
    }

    /// Store `cell` in place of the cell with the same coordinates, returning
    /// the old one.
    ///
    /// Cells can only be replaced, never added: if the coordinates are not
    /// part of the grid, `cell` is dropped and `None` is returned.
    pub fn replace(&mut self, cell: Cell<T>) -> Option<Cell<T>> {
        match self.cells.get_mut(&cell.coordinates()) {
            Some(slot) => Some(std::mem::replace(slot, cell)),
            None => {
                tracing::trace!("Not replacing {}: outside the grid", cell.coordinates());
                None
            }
        }
    }

    /// Centre of the cell at `coord` when the origin cell sits on `origin`,
    /// using this grid's orientations and hex radius.
    pub fn cell_center(&self, origin: Vec3, coord: CubeCoordinate) -> Vec3 {
        geometry::center(
            origin,
            coord,
            self.config.hex_radius,
            self.config.cell_orientation,
            self.config.grid_orientation,
        )
    }

    /// The six corners of the cell at `coord`; see [`cell_center`](Self::cell_center).
    pub fn cell_corners(&self, origin: Vec3, coord: CubeCoordinate) -> [Vec3; 6] {
        geometry::corners(
            self.cell_center(origin, coord),
            self.config.hex_radius,
            self.config.cell_orientation,
            self.config.grid_orientation,
        )
    }
}

impl<T: Default> Grid<T> {
    /// Rebuild the cell set with default payloads.
    ///
    /// Clears any existing cells first, so calling it twice with the same
    /// configuration yields the same cell set.
    pub fn generate(&mut self) {
        self.generate_with(|_| T::default());
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a Cell<T>;
    type IntoIter = indexmap::map::Values<'a, CubeCoordinate, Cell<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.values()
    }
}
