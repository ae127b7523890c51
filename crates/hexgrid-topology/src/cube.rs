//! Cube coordinates for hexagonal tilings.
//!
//! A cube coordinate addresses a hex cell with three integer axes `x`, `y` and
//! `z` constrained by `x + y + z = 0`. The constraint makes one axis redundant,
//! but keeping all three makes distance, rotation and neighbor arithmetic
//! symmetric. See <https://www.redblobgames.com/grids/hexagons/#coordinates-cube>.
//!
//! The fields are private: every constructor and operator preserves the
//! zero-sum invariant, so a `CubeCoordinate` can be used directly as a map key.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::{Direction, GridError, Result};

/// A hex cell address in cube space.
///
/// Any zero-sum triple of `i32` is a valid coordinate, and lookups and
/// distances accept all of them. Arithmetic (the operators, `neighbor`,
/// `range` and `ring`) is plain integer arithmetic: keep components within
/// about `i32::MAX / 2` of each other or it overflows, panicking in debug
/// builds. [`Grid`](crate::Grid) queries never do arithmetic on a
/// coordinate that cannot reach the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[i32; 3]", into = "[i32; 3]"))]
pub struct CubeCoordinate {
    x: i32,
    y: i32,
    z: i32,
}

impl CubeCoordinate {
    /// Origin of the coordinate system.
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    /// Create a coordinate from `x` and `z`, deriving `y = -x - z`.
    pub const fn new_xz(x: i32, z: i32) -> Self {
        Self { x, y: -x - z, z }
    }

    /// Create a coordinate from `x` and `y`, deriving `z = -x - y`.
    pub const fn new_xy(x: i32, y: i32) -> Self {
        Self { x, y, z: -x - y }
    }

    /// Create a coordinate from all three components.
    ///
    /// Fails with [`GridError::InvalidCoordinate`] unless `x + y + z == 0`.
    pub fn try_new(x: i32, y: i32, z: i32) -> Result<Self> {
        // i64 so that extreme components cannot wrap into a false zero
        if x as i64 + y as i64 + z as i64 != 0 {
            return Err(GridError::InvalidCoordinate { x, y, z });
        }
        Ok(Self { x, y, z })
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }

    pub const fn z(&self) -> i32 {
        self.z
    }

    /// Hex distance: the minimum number of steps between adjacent cells.
    ///
    /// Computed as `(|dx| + |dy| + |dz|) / 2`. Every step changes exactly two
    /// axes by one, so the axis sum counts each step twice. Saturates at
    /// `u32::MAX` for coordinates at opposite ends of the `i32` range.
    pub fn distance(&self, other: &Self) -> u32 {
        u32::try_from(self.axis_sum(other) / 2).unwrap_or(u32::MAX)
    }

    /// Sum of the absolute per-axis differences, `|dx| + |dy| + |dz|`.
    ///
    /// This is exactly twice [`distance`](Self::distance) until it saturates.
    /// Kept for callers that were tuned against the undivided metric.
    pub fn axis_sum_distance(&self, other: &Self) -> u32 {
        u32::try_from(self.axis_sum(other)).unwrap_or(u32::MAX)
    }

    fn axis_sum(&self, other: &Self) -> u64 {
        let diff = |a: i32, b: i32| (a as i64 - b as i64).unsigned_abs();
        diff(self.x, other.x) + diff(self.y, other.y) + diff(self.z, other.z)
    }

    /// Distance from the origin.
    pub fn length(&self) -> u32 {
        self.distance(&Self::ORIGIN)
    }

    /// The adjacent coordinate in the given direction.
    pub fn neighbor(&self, direction: Direction) -> Self {
        *self + direction.vector()
    }

    /// All six adjacent coordinates, in [`Direction::ALL`] order.
    pub fn neighbors(&self) -> [Self; 6] {
        Direction::ALL.map(|d| self.neighbor(d))
    }

    /// Every coordinate within `radius` steps of this one, including itself.
    ///
    /// Iterates `dx` in `[-radius, radius]` on the outside and `dy` on the
    /// inside, yielding `3r² + 3r + 1` coordinates.
    pub fn range(self, radius: u32) -> impl Iterator<Item = Self> {
        let r = radius.min(crate::MAX_DIMENSION) as i32;
        (-r..=r).flat_map(move |dx| {
            let lo = (-r).max(-dx - r);
            let hi = r.min(-dx + r);
            (lo..=hi).map(move |dy| self + Self::new_xy(dx, dy))
        })
    }

    /// The coordinates exactly `radius` steps away, walking the ring once.
    ///
    /// A radius of zero yields just this coordinate.
    pub fn ring(self, radius: u32) -> Vec<Self> {
        if radius == 0 {
            return vec![self];
        }

        let r = radius.min(crate::MAX_DIMENSION) as i32;
        let mut result = Vec::with_capacity(6 * r as usize);
        // Start on the SouthWest corner, then each edge runs two directions
        // further around the ring.
        let mut current = self + Direction::SouthWest.vector() * r;
        for direction in Direction::ALL {
            for _ in 0..r {
                result.push(current);
                current = current.neighbor(direction);
            }
        }
        result
    }
}

impl Add for CubeCoordinate {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for CubeCoordinate {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for CubeCoordinate {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl SubAssign for CubeCoordinate {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for CubeCoordinate {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul<i32> for CubeCoordinate {
    type Output = Self;

    #[inline]
    fn mul(self, factor: i32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }
}

impl fmt::Display for CubeCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.x, self.y, self.z)
    }
}

impl FromStr for CubeCoordinate {
    type Err = GridError;

    /// Parse the `x:y:z` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self> {
        let parse_err = || GridError::ParseCoordinate(s.to_string());
        let mut parts = s.split(':').map(|p| p.trim().parse::<i32>());

        let (Some(Ok(x)), Some(Ok(y)), Some(Ok(z)), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(parse_err());
        };

        Self::try_new(x, y, z)
    }
}

impl TryFrom<[i32; 3]> for CubeCoordinate {
    type Error = GridError;

    fn try_from([x, y, z]: [i32; 3]) -> Result<Self> {
        Self::try_new(x, y, z)
    }
}

impl From<CubeCoordinate> for [i32; 3] {
    fn from(c: CubeCoordinate) -> Self {
        [c.x, c.y, c.z]
    }
}
