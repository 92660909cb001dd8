//! Noise-driven satellite data for sample maps.
//!
//! Samples an `Fbm<Perlin>` field at each cell's pixel center, turns it into
//! an elevation in `[0, 1]`, and derives passability, movement cost and a
//! tileset id from elevation bands.

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::grid::{HexGrid, SatelliteData};
use crate::math;

/// Elevation bands and noise parameters for [`paint_terrain`].
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainSettings {
    /// Seed for the elevation noise generator.
    pub seed: u32,
    /// Number of octaves for elevation noise.
    pub octaves: usize,
    /// Spatial scale divisor, in units of hex radius.
    pub noise_scale: f64,
    /// Cells below this elevation are water.
    pub water_level: f64,
    /// Cells at or above this elevation are mountains.
    pub mountain_level: f64,
    /// Cost of the highest passable land; the lowest land costs 1.0.
    pub max_movement_cost: f64,
    pub water_tileset: String,
    pub land_tileset: String,
    pub mountain_tileset: String,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            seed: 42,
            octaves: 4,
            noise_scale: 12.0,
            water_level: 0.35,
            mountain_level: 0.75,
            max_movement_cost: 3.0,
            water_tileset: "water".to_string(),
            land_tileset: "land".to_string(),
            mountain_tileset: "mountain".to_string(),
        }
    }
}

impl TerrainSettings {
    /// Satellite data for a cell at `elevation` in `[0, 1]`.
    pub fn classify(&self, elevation: f64) -> SatelliteData {
        if elevation < self.water_level {
            SatelliteData::new(false, 1.0, &self.water_tileset)
        } else if elevation >= self.mountain_level {
            SatelliteData::new(false, self.max_movement_cost, &self.mountain_tileset)
        } else {
            let t = math::inverse_lerp(self.water_level, self.mountain_level, elevation);
            let cost = math::round_to(math::lerp(1.0, self.max_movement_cost, t), 1);
            SatelliteData::new(true, cost, &self.land_tileset)
        }
    }
}

/// Attaches generated satellite data to every cell of `grid`, replacing
/// whatever was there. Deterministic for a given seed and geometry.
pub fn paint_terrain(grid: &mut HexGrid, settings: &TerrainSettings) {
    let fbm: Fbm<Perlin> = Fbm::new(settings.seed).set_octaves(settings.octaves);
    let scale = settings.noise_scale * grid.settings().radius;

    let elevations: Vec<f64> = grid
        .cells()
        .map(|cell| {
            let pos = grid.world_pos(cell.coordinate());
            let noise_val = fbm.get([pos.x as f64 / scale, pos.y as f64 / scale]);
            math::map_noise_to_range(noise_val, 0.0, 1.0)
        })
        .collect();

    for (cell, elevation) in grid.cells_mut().zip(elevations) {
        cell.set_satellite_data(settings.classify(elevation));
    }
    tracing::debug!(cells = grid.len(), seed = settings.seed, "painted terrain");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{GridLayout, GridSettings};

    fn grid() -> HexGrid {
        GridSettings::new(9, 9)
            .with_layout(GridLayout::Hexagonal)
            .with_radius(20.0)
            .build()
            .unwrap()
    }

    #[test]
    fn every_cell_gets_satellite_data() {
        let mut grid = grid();
        paint_terrain(&mut grid, &TerrainSettings::default());
        assert!(grid.cells().all(|cell| cell.satellite_data().is_some()));
    }

    #[test]
    fn same_seed_paints_same_map() {
        let settings = TerrainSettings::default();
        let mut a = grid();
        let mut b = grid();
        paint_terrain(&mut a, &settings);
        paint_terrain(&mut b, &settings);
        let a_data: Vec<_> = a.cells().map(|c| c.satellite_data().cloned()).collect();
        let b_data: Vec<_> = b.cells().map(|c| c.satellite_data().cloned()).collect();
        assert_eq!(a_data, b_data);
    }

    #[test]
    fn costs_are_finite_and_at_least_one() {
        let mut grid = grid();
        paint_terrain(&mut grid, &TerrainSettings::default());
        for cell in grid.cells() {
            let cost = cell.satellite_data().unwrap().movement_cost;
            assert!(cost.is_finite() && cost >= 1.0, "cost {cost}");
        }
    }

    // ── classify ────────────────────────────────────────────────────

    #[test]
    fn classify_bands() {
        let s = TerrainSettings::default();
        assert_eq!(s.classify(0.1), SatelliteData::new(false, 1.0, "water"));
        assert_eq!(s.classify(0.9), SatelliteData::new(false, 3.0, "mountain"));
        assert_eq!(s.classify(0.35), SatelliteData::new(true, 1.0, "land"));
        let mid = s.classify(0.55);
        assert!(mid.passable);
        assert_eq!(mid.movement_cost, 2.0);
    }
}
