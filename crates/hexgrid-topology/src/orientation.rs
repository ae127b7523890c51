//! Grid configuration enums: cell orientation, grid orientation and shape.

use std::fmt;

/// Which way the hexes point, and which rows or columns are shoved over in
/// offset coordinates.
///
/// Pointy variants offset alternate rows; flat variants offset alternate
/// columns. "Odd" shoves the odd rows/columns, "even" the even ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellOrientation {
    PointyOdd,
    PointyEven,
    #[default]
    FlatOdd,
    FlatEven,
}

impl CellOrientation {
    pub const ALL: [Self; 4] = [
        Self::PointyOdd,
        Self::PointyEven,
        Self::FlatOdd,
        Self::FlatEven,
    ];

    pub const fn is_pointy(self) -> bool {
        matches!(self, Self::PointyOdd | Self::PointyEven)
    }

    pub const fn is_odd(self) -> bool {
        matches!(self, Self::PointyOdd | Self::FlatOdd)
    }
}

impl fmt::Display for CellOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PointyOdd => "pointy-odd",
            Self::PointyEven => "pointy-even",
            Self::FlatOdd => "flat-odd",
            Self::FlatEven => "flat-even",
        };
        f.write_str(name)
    }
}

/// The plane a grid lies in when placed in 3D space.
///
/// Only affects geometry (corner and centre points), never coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridOrientation {
    /// The XZ plane; y stays at the origin's height.
    #[default]
    Horizontal,
    /// The XY plane; z stays at the origin's depth.
    Vertical,
}

impl fmt::Display for GridOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        })
    }
}

/// The outline of the cell set produced by grid generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridShape {
    /// `width` × `height` cells laid out in offset rows and columns.
    #[default]
    Rectangle,
    /// A large hexagon of radius `max(width, height)` around the origin.
    Hexagon,
    /// An axial sweep over `[0, width] × [0, height]`.
    Parallelogram,
    /// A triangle with `max(width, height) + 1` cells along each edge.
    Triangle,
}

impl GridShape {
    pub const ALL: [Self; 4] = [
        Self::Rectangle,
        Self::Hexagon,
        Self::Parallelogram,
        Self::Triangle,
    ];
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rectangle => "rectangle",
            Self::Hexagon => "hexagon",
            Self::Parallelogram => "parallelogram",
            Self::Triangle => "triangle",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(CellOrientation::default(), CellOrientation::FlatOdd);
        assert_eq!(GridOrientation::default(), GridOrientation::Horizontal);
        assert_eq!(GridShape::default(), GridShape::Rectangle);
    }

    #[test]
    fn orientation_flags() {
        let pointy: Vec<_> = CellOrientation::ALL.into_iter().filter(|o| o.is_pointy()).collect();
        assert_eq!(pointy, vec![CellOrientation::PointyOdd, CellOrientation::PointyEven]);

        let odd: Vec<_> = CellOrientation::ALL.into_iter().filter(|o| o.is_odd()).collect();
        assert_eq!(odd, vec![CellOrientation::PointyOdd, CellOrientation::FlatOdd]);
    }

    #[test]
    fn display_names() {
        assert_eq!(CellOrientation::PointyEven.to_string(), "pointy-even");
        assert_eq!(GridOrientation::Vertical.to_string(), "vertical");
        assert_eq!(GridShape::Parallelogram.to_string(), "parallelogram");
    }
}
