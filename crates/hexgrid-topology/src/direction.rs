//! The six neighbor directions of a hex cell.

use crate::CubeCoordinate;

/// A step from a cell to one of its six neighbors.
///
/// Variants are named for pointy-top cells. On flat-top cells the same
/// vectors read as bottom-right, top-right, top, top-left, bottom-left and
/// bottom. Consecutive variants are 60 degrees apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// `(1, -1, 0)`
    East,
    /// `(1, 0, -1)`
    NorthEast,
    /// `(0, 1, -1)`
    NorthWest,
    /// `(-1, 1, 0)`
    West,
    /// `(-1, 0, 1)`
    SouthWest,
    /// `(0, -1, 1)`
    SouthEast,
}

impl Direction {
    /// All six directions, in the order neighbor queries report them.
    pub const ALL: [Self; 6] = [
        Self::East,
        Self::NorthEast,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::SouthEast,
    ];

    const VECTORS: [CubeCoordinate; 6] = [
        CubeCoordinate::new_xy(1, -1),
        CubeCoordinate::new_xy(1, 0),
        CubeCoordinate::new_xy(0, 1),
        CubeCoordinate::new_xy(-1, 1),
        CubeCoordinate::new_xy(-1, 0),
        CubeCoordinate::new_xy(0, -1),
    ];

    /// Position of this direction in [`Direction::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The unit cube vector for this direction.
    pub const fn vector(self) -> CubeCoordinate {
        Self::VECTORS[self.index()]
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % 6]
    }

    /// The direction reached by turning 60 degrees counter-clockwise.
    pub const fn rotate_left(self) -> Self {
        Self::ALL[(self.index() + 1) % 6]
    }

    /// The direction reached by turning 60 degrees clockwise.
    pub const fn rotate_right(self) -> Self {
        Self::ALL[(self.index() + 5) % 6]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectors_match_neighbor_order() {
        let expected = [
            (1, -1, 0),
            (1, 0, -1),
            (0, 1, -1),
            (-1, 1, 0),
            (-1, 0, 1),
            (0, -1, 1),
        ];
        for (dir, (x, y, z)) in Direction::ALL.into_iter().zip(expected) {
            let v = dir.vector();
            assert_eq!((v.x(), v.y(), v.z()), (x, y, z), "{:?}", dir);
        }
    }

    #[test]
    fn directions_are_unit_and_unique() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            assert_eq!(a.index(), i);
            assert_eq!(a.vector().length(), 1);
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a.vector(), b.vector());
            }
        }
    }

    #[test]
    fn opposite_cancels() {
        for dir in Direction::ALL {
            assert_eq!(dir.vector() + dir.opposite().vector(), CubeCoordinate::ORIGIN);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn rotation_wraps() {
        assert_eq!(Direction::SouthEast.rotate_left(), Direction::East);
        assert_eq!(Direction::East.rotate_right(), Direction::SouthEast);
        for dir in Direction::ALL {
            assert_eq!(dir.rotate_left().rotate_right(), dir);
            // Adjacent directions are themselves one step apart
            assert_eq!(dir.vector().distance(&dir.rotate_left().vector()), 1);
        }
    }
}
