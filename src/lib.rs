//! Hex grid maps as versioned JSON.
//!
//! [`grid`] holds an axial hex grid whose cells carry satellite data
//! (passability, movement cost, tileset id); [`map`] converts such a grid to
//! and from a compact JSON document such that export, import and export
//! again produce the same document.
//!
//! ```
//! use hex_map::grid::{AxialCoordinate, GridSettings, SatelliteData};
//! use hex_map::map::{export_map, import_map};
//!
//! let mut grid = GridSettings::new(2, 1).with_radius(40.0).build()?;
//! for (coord, data) in [
//!     (AxialCoordinate::new(0, 0), SatelliteData::new(true, 1.0, "1")),
//!     (AxialCoordinate::new(1, 0), SatelliteData::new(false, 1.0, "2")),
//! ] {
//!     grid.set_satellite_data(coord, data).expect("cell exists");
//! }
//!
//! let json = export_map(&grid, "demo", "http://example.com")?;
//! let restored = import_map(&json)?;
//! assert_eq!(export_map(&restored, "demo", "http://example.com")?, json);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod generate;
pub mod grid;
pub mod map;
pub mod math;

pub use error::{GridError, MapError};
pub use grid::{
    AxialCoordinate, GridLayout, GridSettings, HexGrid, MapGrid, Orientation, SatelliteData,
};
pub use map::{MapDocument, export_map, import_map};
