use crate::error::MapError;
use crate::grid::MapGrid;

use super::document::{CellRow, MapDocument};

impl MapDocument {
    /// Snapshots `grid` into a document: header from the grid's construction
    /// parameters, one row per cell in canonical enumeration order.
    ///
    /// Every cell must carry satellite data with a finite, non-negative movement cost.
    pub fn from_grid<G: MapGrid>(
        grid: &G,
        name: impl Into<String>,
        tileset_url: impl Into<String>,
    ) -> Result<Self, MapError> {
        let mut doc = MapDocument::new(grid.settings(), name, tileset_url);
        for coord in grid.coordinates() {
            let (q, r) = (coord.q, coord.r);
            let satellite = grid
                .cell(coord)
                .and_then(|cell| cell.satellite_data())
                .ok_or(MapError::MissingSatelliteData { q, r })?;
            if !satellite.has_valid_cost() {
                return Err(MapError::InvalidMovementCost { q, r });
            }
            doc.cells.push(CellRow::new(coord, satellite.clone()));
        }
        Ok(doc)
    }
}

/// Serializes `grid` and its satellite data to compact map JSON.
pub fn export_map<G: MapGrid>(
    grid: &G,
    name: &str,
    tileset_url: &str,
) -> Result<String, MapError> {
    let doc = MapDocument::from_grid(grid, name, tileset_url)?;
    let json = doc.to_json()?;
    tracing::debug!(name, cells = doc.cells.len(), bytes = json.len(), "exported hex map");
    Ok(json)
}

/// Like [`export_map`], indented for humans.
pub fn export_map_pretty<G: MapGrid>(
    grid: &G,
    name: &str,
    tileset_url: &str,
) -> Result<String, MapError> {
    let doc = MapDocument::from_grid(grid, name, tileset_url)?;
    doc.to_json_pretty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{
        AxialCoordinate, GridLayout, GridSettings, HexGrid, Orientation, SatelliteData,
    };

    fn painted_grid() -> HexGrid {
        let mut grid = GridSettings::new(3, 2)
            .with_layout(GridLayout::Trapezoid)
            .with_orientation(Orientation::FlatTop)
            .with_radius(8.0)
            .build()
            .unwrap();
        for (i, cell) in grid.cells_mut().enumerate() {
            cell.set_satellite_data(SatelliteData::new(i % 2 == 0, i as f64, format!("t{i}")));
        }
        grid
    }

    #[test]
    fn header_is_read_from_grid_settings() {
        let doc = MapDocument::from_grid(&painted_grid(), "m", "u").unwrap();
        assert_eq!(doc.settings(), *painted_grid().settings());
        assert_eq!(doc.name, "m");
        assert_eq!(doc.tileset_url, "u");
        assert_eq!(doc.version, "1.0.0");
    }

    #[test]
    fn rows_follow_enumeration_order() {
        let grid = painted_grid();
        let doc = MapDocument::from_grid(&grid, "", "").unwrap();
        let exported: Vec<AxialCoordinate> = doc.cells.iter().map(|row| row.coordinate).collect();
        let enumerated: Vec<AxialCoordinate> = grid.coordinates().collect();
        assert_eq!(exported, enumerated);
        assert_eq!(doc.cells[3].satellite, SatelliteData::new(false, 3.0, "t3"));
    }

    #[test]
    fn repeated_exports_are_identical() {
        let grid = painted_grid();
        let first = export_map(&grid, "a", "b").unwrap();
        let second = export_map(&grid, "a", "b").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn cell_without_satellite_data_fails() {
        let mut grid = painted_grid();
        grid.clear_satellite_data(AxialCoordinate::new(1, 1));
        let err = export_map(&grid, "a", "b").unwrap_err();
        assert!(
            matches!(err, MapError::MissingSatelliteData { q: 1, r: 1 }),
            "unexpected error {err}"
        );
    }

    #[test]
    fn non_finite_cost_fails() {
        let mut grid = painted_grid();
        grid.set_satellite_data(
            AxialCoordinate::new(0, 0),
            SatelliteData::new(true, f64::NAN, "nan"),
        )
        .unwrap();
        let err = export_map(&grid, "a", "b").unwrap_err();
        assert!(matches!(err, MapError::InvalidMovementCost { q: 0, r: 0 }));
    }

    #[test]
    fn negative_cost_fails() {
        let mut grid = painted_grid();
        grid.set_satellite_data(
            AxialCoordinate::new(2, 1),
            SatelliteData::new(true, -1.0, "pit"),
        )
        .unwrap();
        let err = export_map(&grid, "a", "b").unwrap_err();
        assert!(
            matches!(err, MapError::InvalidMovementCost { q: 2, r: 1 }),
            "unexpected error {err}"
        );

        grid.set_satellite_data(
            AxialCoordinate::new(2, 1),
            SatelliteData::new(true, 0.0, "road"),
        )
        .unwrap();
        assert!(export_map(&grid, "a", "b").is_ok());
    }

    #[test]
    fn pretty_export_parses_to_same_document() {
        let grid = painted_grid();
        let compact = MapDocument::from_json(&export_map(&grid, "a", "b").unwrap()).unwrap();
        let pretty = MapDocument::from_json(&export_map_pretty(&grid, "a", "b").unwrap()).unwrap();
        assert_eq!(compact, pretty);
    }
}
