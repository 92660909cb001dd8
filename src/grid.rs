//! Hex grid engine: coordinates, satellite data, layouts, and the
//! [`MapGrid`] capability the map format is written against.

mod entities;
mod hex_grid;
pub mod shapes;

pub use entities::{AxialCoordinate, Cell, GridLayout, Orientation, SatelliteData};
pub use hex_grid::HexGrid;

use crate::error::GridError;

/// Construction parameters of a grid. Doubles as the grid builder.
///
/// ```
/// # use hex_map::grid::{GridLayout, GridSettings, Orientation};
/// let grid = GridSettings::new(4, 3)
///     .with_layout(GridLayout::Rectangular)
///     .with_orientation(Orientation::PointyTop)
///     .with_radius(40.0)
///     .build()
///     .unwrap();
/// assert_eq!(grid.len(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSettings {
    /// Extent in columns (offset layouts) or `q` span (axial layouts).
    pub width: u32,
    /// Extent in rows.
    pub height: u32,
    /// Visual hex radius in pixels. Only geometry helpers read it.
    pub radius: f64,
    pub orientation: Orientation,
    pub layout: GridLayout,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            radius: 1.0,
            orientation: Orientation::default(),
            layout: GridLayout::default(),
        }
    }
}

impl GridSettings {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_layout(mut self, layout: GridLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn build(self) -> Result<HexGrid, GridError> {
        HexGrid::from_settings(self)
    }
}

/// What the map exporter and importer need from a grid engine.
///
/// `coordinates` must yield every populated cell exactly once, in an order
/// that depends only on the construction parameters.
pub trait MapGrid: Sized {
    /// Builds an empty grid (no satellite data) for the given parameters.
    fn build(settings: GridSettings) -> Result<Self, GridError>;

    /// The parameters the grid was built from.
    fn settings(&self) -> &GridSettings;

    fn coordinates(&self) -> impl Iterator<Item = AxialCoordinate> + '_;

    fn cell(&self, coord: AxialCoordinate) -> Option<&Cell>;

    fn cell_mut(&mut self, coord: AxialCoordinate) -> Option<&mut Cell>;
}
