use std::collections::BTreeMap;

use crate::grid::MapGrid;

/// Summary of a grid's satellite data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapStats {
    /// Populated cells, painted or not.
    pub cells: usize,
    /// Cells carrying satellite data.
    pub painted: usize,
    pub passable: usize,
    pub total_cost: f64,
    /// Painted cells per tileset id, sorted by id.
    pub tilesets: BTreeMap<String, usize>,
}

impl MapStats {
    pub fn from_grid<G: MapGrid>(grid: &G) -> Self {
        let mut stats = Self::default();
        for coord in grid.coordinates() {
            stats.cells += 1;
            let Some(data) = grid.cell(coord).and_then(|cell| cell.satellite_data()) else {
                continue;
            };
            stats.painted += 1;
            stats.total_cost += data.movement_cost;
            if data.passable {
                stats.passable += 1;
            }
            *stats.tilesets.entry(data.tileset_id.clone()).or_default() += 1;
        }
        stats
    }

    /// Share of painted cells that are passable, `None` when nothing is painted.
    pub fn passable_ratio(&self) -> Option<f64> {
        (self.painted > 0).then(|| self.passable as f64 / self.painted as f64)
    }

    pub fn mean_cost(&self) -> Option<f64> {
        (self.painted > 0).then(|| self.total_cost / self.painted as f64)
    }
}
