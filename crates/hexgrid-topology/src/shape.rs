//! Cell-set generation for each [`GridShape`].
//!
//! Each generator emits axial `(q, r)` pairs which become
//! `CubeCoordinate::new_xz(q, r)`. All shapes are duplicate-free by
//! construction. See <https://www.redblobgames.com/grids/hexagons/#map-storage>.

use crate::{CellOrientation, CubeCoordinate, GridConfig, GridShape, OffsetCoordinate};

/// Upper bound on the up-front allocation; larger grids grow as they go.
const PREALLOCATE_LIMIT: u64 = 1 << 20;

/// The coordinates of every cell in a grid of the given configuration, in
/// generation order.
///
/// Dimensions are trusted to fit [`MAX_DIMENSION`](crate::MAX_DIMENSION):
/// the only caller is [`Grid`](crate::Grid), which validates its config.
pub(crate) fn shape_coordinates(config: &GridConfig) -> Vec<CubeCoordinate> {
    debug_assert!(config.validate().is_ok(), "unvalidated config {config:?}");
    let (w, h) = (config.width as i32, config.height as i32);
    let size = config.size() as i32;

    let capacity = config.expected_cell_count().min(PREALLOCATE_LIMIT);
    let mut coords = Vec::with_capacity(capacity as usize);
    match config.shape {
        GridShape::Hexagon => hexagon(size, &mut coords),
        GridShape::Rectangle => rectangle(w, h, config.cell_orientation, &mut coords),
        GridShape::Parallelogram => parallelogram(w, h, &mut coords),
        GridShape::Triangle => triangle(size, &mut coords),
    }
    coords
}

/// A hexagon of `radius` rings around the origin.
fn hexagon(radius: i32, out: &mut Vec<CubeCoordinate>) {
    for q in -radius..=radius {
        let r1 = (-radius).max(-q - radius);
        let r2 = radius.min(-q + radius);
        out.extend((r1..=r2).map(|r| CubeCoordinate::new_xz(q, r)));
    }
}

/// `width` columns by `height` rows in offset space.
///
/// Flat cells sweep columns on the outside, pointy cells sweep rows, so the
/// axial loop is the skewed one: for odd orientations the inner axis starts
/// at `-(outer >> 1)`, for even ones at `-((outer + 1) >> 1)`.
fn rectangle(
    width: i32,
    height: i32,
    orientation: CellOrientation,
    out: &mut Vec<CubeCoordinate>,
) {
    let cube = |row, col| OffsetCoordinate::new(row, col).to_cube(orientation);
    if orientation.is_pointy() {
        for row in 0..height {
            out.extend((0..width).map(|col| cube(row, col)));
        }
    } else {
        for col in 0..width {
            out.extend((0..height).map(|row| cube(row, col)));
        }
    }
}

/// An inclusive axial sweep over `[0, width] × [0, height]`.
fn parallelogram(width: i32, height: i32, out: &mut Vec<CubeCoordinate>) {
    for q in 0..=width {
        out.extend((0..=height).map(|r| CubeCoordinate::new_xz(q, r)));
    }
}

/// A triangle with `size + 1` cells along each edge.
fn triangle(size: i32, out: &mut Vec<CubeCoordinate>) {
    for q in 0..=size {
        out.extend((0..=size - q).map(|r| CubeCoordinate::new_xz(q, r)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn unique(coords: &[CubeCoordinate]) -> bool {
        coords.iter().collect::<HashSet<_>>().len() == coords.len()
    }

    /// The skewed axial loop, written out the long way.
    fn skewed_rectangle(
        width: i32,
        height: i32,
        orientation: CellOrientation,
    ) -> Vec<CubeCoordinate> {
        let shift = |n: i32| if orientation.is_odd() { n >> 1 } else { (n + 1) >> 1 };
        let mut coords = Vec::new();
        if orientation.is_pointy() {
            for r in 0..height {
                let r_off = shift(r);
                for q in -r_off..width - r_off {
                    coords.push(CubeCoordinate::new_xz(q, r));
                }
            }
        } else {
            for q in 0..width {
                let q_off = shift(q);
                for r in -q_off..height - q_off {
                    coords.push(CubeCoordinate::new_xz(q, r));
                }
            }
        }
        coords
    }

    #[test]
    fn hexagon_counts() {
        for size in 0..6u32 {
            let config = GridConfig::new(GridShape::Hexagon, size, 0);
            let coords = shape_coordinates(&config);
            assert_eq!(coords.len() as u64, config.expected_cell_count());
            assert!(unique(&coords));
            assert!(coords.iter().all(|c| c.length() <= size));
        }
    }

    #[test]
    fn hexagon_uses_larger_dimension() {
        let coords = shape_coordinates(&GridConfig::new(GridShape::Hexagon, 1, 2));
        assert_eq!(coords.len(), 19);
        assert!(coords.contains(&CubeCoordinate::ORIGIN));
    }

    #[test]
    fn rectangle_matches_skewed_axial_loop() {
        for orientation in CellOrientation::ALL {
            for (w, h) in [(1, 1), (4, 3), (5, 6), (7, 2)] {
                let config = GridConfig::new(GridShape::Rectangle, w, h)
                    .with_cell_orientation(orientation);
                let expected = skewed_rectangle(w as i32, h as i32, orientation);
                assert_eq!(shape_coordinates(&config), expected, "{orientation} {w}x{h}");
            }
        }
    }

    #[test]
    fn rectangle_covers_offset_block() {
        for orientation in CellOrientation::ALL {
            let config =
                GridConfig::new(GridShape::Rectangle, 6, 4).with_cell_orientation(orientation);
            let coords = shape_coordinates(&config);
            assert_eq!(coords.len(), 24);
            assert!(unique(&coords));
            for c in coords {
                let o = c.to_offset(orientation);
                assert!((0..4).contains(&o.row) && (0..6).contains(&o.col), "{orientation} {o:?}");
            }
        }
    }

    #[test]
    fn rectangle_beyond_preallocation_limit_is_complete() {
        let orientation = CellOrientation::PointyEven;
        let config = GridConfig::new(GridShape::Rectangle, 1100, 1000)
            .with_cell_orientation(orientation);
        assert!(config.expected_cell_count() > PREALLOCATE_LIMIT);

        let coords = shape_coordinates(&config);
        assert_eq!(coords.len() as u64, config.expected_cell_count());
        let last = OffsetCoordinate::new(999, 1099).to_cube(orientation);
        assert_eq!(coords.last(), Some(&last));
    }

    #[test]
    fn empty_rectangle() {
        assert!(shape_coordinates(&GridConfig::new(GridShape::Rectangle, 0, 5)).is_empty());
        assert!(shape_coordinates(&GridConfig::new(GridShape::Rectangle, 5, 0)).is_empty());
    }

    #[test]
    fn parallelogram_is_inclusive() {
        let coords = shape_coordinates(&GridConfig::new(GridShape::Parallelogram, 2, 2));
        assert_eq!(coords.len(), 9);
        assert!(unique(&coords));
        assert!(coords.iter().all(|c| (0..=2).contains(&c.x()) && (0..=2).contains(&c.z())));

        let single = shape_coordinates(&GridConfig::new(GridShape::Parallelogram, 0, 0));
        assert_eq!(single, vec![CubeCoordinate::ORIGIN]);
    }

    #[test]
    fn triangle_counts() {
        for size in 0..6u32 {
            let config = GridConfig::new(GridShape::Triangle, 0, size);
            let coords = shape_coordinates(&config);
            assert_eq!(coords.len() as u64, config.expected_cell_count());
            assert!(unique(&coords));
            assert!(coords.iter().all(|c| c.x() >= 0 && c.z() >= 0 && c.y() >= -(size as i32)));
        }
    }
}
