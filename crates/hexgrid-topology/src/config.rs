//! Grid configuration.

use crate::{CellOrientation, GridError, GridOrientation, GridShape, Result, MAX_DIMENSION};

/// Parameters a [`Grid`](crate::Grid) is generated from.
///
/// `width` and `height` are interpreted per shape: rectangle cell counts,
/// parallelogram axial extents, or (via their maximum) the radius of a
/// hexagon and the edge of a triangle. `hex_radius` is purely geometric.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub shape: GridShape,
    pub cell_orientation: CellOrientation,
    pub grid_orientation: GridOrientation,
    pub width: u32,
    pub height: u32,
    /// Outer radius of a single hex, used only for corner and centre points.
    pub hex_radius: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            shape: GridShape::Rectangle,
            cell_orientation: CellOrientation::FlatOdd,
            grid_orientation: GridOrientation::Horizontal,
            width: 0,
            height: 0,
            hex_radius: 1.0,
        }
    }
}

impl GridConfig {
    /// A default configuration with the given shape and dimensions.
    pub fn new(shape: GridShape, width: u32, height: u32) -> Self {
        Self {
            shape,
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_shape(mut self, shape: GridShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_cell_orientation(mut self, orientation: CellOrientation) -> Self {
        self.cell_orientation = orientation;
        self
    }

    pub fn with_grid_orientation(mut self, orientation: GridOrientation) -> Self {
        self.grid_orientation = orientation;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_hex_radius(mut self, radius: f32) -> Self {
        self.hex_radius = radius;
        self
    }

    /// Check the configuration can be generated and placed.
    pub fn validate(&self) -> Result<()> {
        if !self.hex_radius.is_finite() || self.hex_radius <= 0.0 {
            return Err(GridError::InvalidRadius(self.hex_radius));
        }
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value > MAX_DIMENSION {
                return Err(GridError::DimensionTooLarge {
                    name,
                    value,
                    max: MAX_DIMENSION,
                });
            }
        }
        Ok(())
    }

    /// The larger of `width` and `height`; the radius of a hexagon grid and
    /// the edge length (minus one) of a triangle grid.
    pub fn size(&self) -> u32 {
        self.width.max(self.height)
    }

    /// Number of cells `generate` will produce for this configuration.
    pub fn expected_cell_count(&self) -> u64 {
        let (w, h) = (self.width as u64, self.height as u64);
        let s = self.size() as u64;
        match self.shape {
            GridShape::Rectangle => w * h,
            GridShape::Hexagon => 3 * s * s + 3 * s + 1,
            GridShape::Parallelogram => (w + 1) * (h + 1),
            GridShape::Triangle => (s + 1) * (s + 2) / 2,
        }
    }
}
