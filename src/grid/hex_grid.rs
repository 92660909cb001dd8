use std::collections::HashMap;

use hexx::{Hex, HexLayout, Vec2, shapes};

use super::entities::{AxialCoordinate, Cell, SatelliteData};
use super::{GridSettings, MapGrid, shapes as layout_shapes};
use crate::error::GridError;

/// Hex grid built from [`GridSettings`]: the populated cells, their
/// satellite data, and the pixel layout derived from radius and orientation.
///
/// Cells are stored in the layout walk order, which is the canonical
/// enumeration order used by the map exporter.
#[derive(Debug, Clone)]
pub struct HexGrid {
    settings: GridSettings,
    layout: HexLayout,
    cells: Vec<Cell>,
    index: HashMap<Hex, usize>,
}

impl HexGrid {
    /// Validates `settings` and populates every coordinate of the layout with
    /// an empty cell.
    pub fn from_settings(settings: GridSettings) -> Result<Self, GridError> {
        let layout = HexLayout {
            orientation: settings.orientation.into(),
            scale: Vec2::splat(settings.radius as f32),
            ..Default::default()
        };

        let hexes = layout_shapes::coordinates(&settings)?;
        let mut cells = Vec::with_capacity(hexes.len());
        let mut index = HashMap::with_capacity(hexes.len());
        for hex in hexes {
            index.insert(hex, cells.len());
            cells.push(Cell::empty(hex.into()));
        }

        Ok(Self {
            settings,
            layout,
            cells,
            index,
        })
    }

    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in canonical enumeration order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn cells_mut(&mut self) -> impl ExactSizeIterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    // ── Per-cell data access ───────────────────────────────────────

    /// Whether the coordinate is part of this grid.
    pub fn contains(&self, coord: AxialCoordinate) -> bool {
        self.index.contains_key(&Hex::from(coord))
    }

    pub fn cell(&self, coord: AxialCoordinate) -> Option<&Cell> {
        let &i = self.index.get(&Hex::from(coord))?;
        self.cells.get(i)
    }

    pub fn cell_mut(&mut self, coord: AxialCoordinate) -> Option<&mut Cell> {
        let &i = self.index.get(&Hex::from(coord))?;
        self.cells.get_mut(i)
    }

    /// Satellite data of the cell at `coord`, if the cell exists and has any.
    pub fn satellite_data(&self, coord: AxialCoordinate) -> Option<&SatelliteData> {
        self.cell(coord)?.satellite_data()
    }

    /// Attaches `data` to the cell at `coord`, returning the replaced value.
    ///
    /// Hands `data` back as `Err` when the grid has no cell at `coord`.
    pub fn set_satellite_data(
        &mut self,
        coord: AxialCoordinate,
        data: SatelliteData,
    ) -> Result<Option<SatelliteData>, SatelliteData> {
        match self.cell_mut(coord) {
            Some(cell) => Ok(cell.set_satellite_data(data)),
            None => Err(data),
        }
    }

    pub fn clear_satellite_data(&mut self, coord: AxialCoordinate) -> Option<SatelliteData> {
        self.cell_mut(coord)?.clear_satellite_data()
    }

    // ── Geometry ───────────────────────────────────────────────────

    /// Pixel-space center of a cell, using the grid radius and orientation.
    pub fn world_pos(&self, coord: AxialCoordinate) -> Vec2 {
        self.layout.hex_to_world_pos(coord.into())
    }

    /// The grid coordinate under a pixel-space position, if it is populated.
    pub fn coordinate_at(&self, pos: Vec2) -> Option<AxialCoordinate> {
        let coord = AxialCoordinate::from(self.layout.world_pos_to_hex(pos));
        self.contains(coord).then_some(coord)
    }

    /// Populated neighbors of `coord`.
    pub fn neighbors(&self, coord: AxialCoordinate) -> Vec<AxialCoordinate> {
        Hex::from(coord)
            .all_neighbors()
            .into_iter()
            .map(AxialCoordinate::from)
            .filter(|&n| self.contains(n))
            .collect()
    }

    /// Hex distance between two coordinates; neither has to be populated.
    pub fn distance(&self, a: AxialCoordinate, b: AxialCoordinate) -> u32 {
        Hex::from(a).distance_to(b.into()).unsigned_abs()
    }

    /// Populated coordinates within `range` steps of `center`, in canonical
    /// enumeration order.
    pub fn cells_in_range(&self, center: AxialCoordinate, range: u32) -> Vec<AxialCoordinate> {
        let mut in_range: Vec<usize> = shapes::hexagon(center.into(), range)
            .filter_map(|hex| self.index.get(&hex).copied())
            .collect();
        in_range.sort_unstable();
        in_range
            .into_iter()
            .map(|i| self.cells[i].coordinate())
            .collect()
    }
}

impl MapGrid for HexGrid {
    fn build(settings: GridSettings) -> Result<Self, GridError> {
        Self::from_settings(settings)
    }

    fn settings(&self) -> &GridSettings {
        &self.settings
    }

    fn coordinates(&self) -> impl Iterator<Item = AxialCoordinate> + '_ {
        self.cells.iter().map(Cell::coordinate)
    }

    fn cell(&self, coord: AxialCoordinate) -> Option<&Cell> {
        HexGrid::cell(self, coord)
    }

    fn cell_mut(&mut self, coord: AxialCoordinate) -> Option<&mut Cell> {
        HexGrid::cell_mut(self, coord)
    }
}
