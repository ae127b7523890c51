//! Corner and centre points for placing hex cells in 3D space.
//!
//! These are the only float operations in the crate. They produce points
//! for a rendering collaborator and never touch grid state.

use glam::Vec3;

use crate::{CellOrientation, CubeCoordinate, GridOrientation};

const SQRT_3: f32 = 1.732_050_8;

/// Map a 2D point on the grid plane into 3D around `origin`.
fn on_plane(origin: Vec3, u: f32, v: f32, grid: GridOrientation) -> Vec3 {
    match grid {
        GridOrientation::Horizontal => origin + Vec3::new(u, 0.0, v),
        GridOrientation::Vertical => origin + Vec3::new(u, v, 0.0),
    }
}

/// The `index`-th corner of a hex centred on `origin`.
///
/// Corners sit every 60 degrees starting from the +x axis. `PointyOdd` cells
/// are rotated a further 30 degrees; every other orientation, `PointyEven`
/// included, starts on the axis. Indices wrap, so `6` is corner `0` again.
pub fn corner(
    origin: Vec3,
    radius: f32,
    index: usize,
    cell: CellOrientation,
    grid: GridOrientation,
) -> Vec3 {
    let mut degrees = 60.0 * (index % 6) as f32;
    if cell == CellOrientation::PointyOdd {
        degrees += 30.0;
    }
    let (sin, cos) = degrees.to_radians().sin_cos();
    on_plane(origin, radius * cos, radius * sin, grid)
}

/// All six corners of a hex centred on `origin`, in index order.
pub fn corners(
    origin: Vec3,
    radius: f32,
    cell: CellOrientation,
    grid: GridOrientation,
) -> [Vec3; 6] {
    std::array::from_fn(|i| corner(origin, radius, i, cell, grid))
}

/// Centre of the cell at `coordinate` for hexes of outer radius `radius`,
/// relative to the cell at the cube origin being centred on `origin`.
pub fn center(
    origin: Vec3,
    coordinate: CubeCoordinate,
    radius: f32,
    cell: CellOrientation,
    grid: GridOrientation,
) -> Vec3 {
    let q = coordinate.x() as f32;
    let r = coordinate.z() as f32;
    let (u, v) = if cell.is_pointy() {
        (SQRT_3 * q + SQRT_3 / 2.0 * r, 1.5 * r)
    } else {
        (1.5 * q, SQRT_3 / 2.0 * q + SQRT_3 * r)
    };
    on_plane(origin, radius * u, radius * v, grid)
}
