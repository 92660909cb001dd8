use crate::error::MapError;
use crate::grid::{HexGrid, MapGrid};

use super::document::{FORMAT_VERSION, MapDocument};

/// Knobs for [`import_map_into`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Reject documents whose `version` is not [`FORMAT_VERSION`] instead of
    /// accepting them as-is.
    pub strict_version: bool,
}

/// Rebuilds a [`HexGrid`] from map JSON.
pub fn import_map(json: &str) -> Result<HexGrid, MapError> {
    import_map_into(json, ImportOptions::default())
}

/// Rebuilds any [`MapGrid`] from map JSON.
pub fn import_map_into<G: MapGrid>(json: &str, options: ImportOptions) -> Result<G, MapError> {
    let doc = MapDocument::from_json(json)?;
    doc.into_grid(options)
}

impl MapDocument {
    /// Builds an empty grid from the header and attaches every row's
    /// satellite data to its cell.
    ///
    /// Nothing is returned unless every row landed on a cell of the declared
    /// geometry with a finite, non-negative movement cost.
    pub fn into_grid<G: MapGrid>(self, options: ImportOptions) -> Result<G, MapError> {
        if options.strict_version && self.version != FORMAT_VERSION {
            return Err(MapError::UnsupportedVersion {
                found: self.version,
                expected: FORMAT_VERSION,
            });
        }

        let mut grid = G::build(self.settings())?;
        let rows = self.cells.len();
        for row in self.cells {
            let (q, r) = (row.coordinate.q, row.coordinate.r);
            if !row.satellite.has_valid_cost() {
                return Err(MapError::InvalidMovementCost { q, r });
            }
            let cell = grid
                .cell_mut(row.coordinate)
                .ok_or(MapError::CoordinateOutOfBounds { q, r })?;
            if cell.set_satellite_data(row.satellite).is_some() {
                tracing::warn!(q, r, "map document lists cell more than once, keeping last row");
            }
        }

        tracing::debug!(name = %self.name, version = %self.version, rows, "imported hex map");
        Ok(grid)
    }
}
