use std::fmt;
use std::str::FromStr;

use hexx::{Hex, HexOrientation};
use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Axial `(q, r)` address of a hex cell.
///
/// Ordered lexicographically by `q`, then `r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AxialCoordinate {
    pub q: i32,
    pub r: i32,
}

impl AxialCoordinate {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }
}

impl From<Hex> for AxialCoordinate {
    fn from(hex: Hex) -> Self {
        Self::new(hex.x, hex.y)
    }
}

impl From<AxialCoordinate> for Hex {
    fn from(coord: AxialCoordinate) -> Self {
        Hex::new(coord.q, coord.r)
    }
}

impl fmt::Display for AxialCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

/// Gameplay metadata attached to a cell.
#[derive(Debug, Clone, PartialEq)]
pub struct SatelliteData {
    /// Whether units may enter the cell.
    pub passable: bool,
    /// Non-negative cost multiplier for entering the cell.
    pub movement_cost: f64,
    /// Opaque reference into an external tileset.
    pub tileset_id: String,
}

impl SatelliteData {
    pub fn new(passable: bool, movement_cost: f64, tileset_id: impl Into<String>) -> Self {
        Self {
            passable,
            movement_cost,
            tileset_id: tileset_id.into(),
        }
    }

    /// Whether the movement cost is finite and not negative.
    pub fn has_valid_cost(&self) -> bool {
        self.movement_cost.is_finite() && self.movement_cost >= 0.0
    }
}

/// A populated position in a grid, optionally carrying satellite data.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    coordinate: AxialCoordinate,
    satellite: Option<SatelliteData>,
}

impl Cell {
    pub(crate) fn empty(coordinate: AxialCoordinate) -> Self {
        Self {
            coordinate,
            satellite: None,
        }
    }

    pub fn coordinate(&self) -> AxialCoordinate {
        self.coordinate
    }

    pub fn satellite_data(&self) -> Option<&SatelliteData> {
        self.satellite.as_ref()
    }

    /// Replaces the cell's metadata wholesale, returning what was there.
    pub fn set_satellite_data(&mut self, data: SatelliteData) -> Option<SatelliteData> {
        self.satellite.replace(data)
    }

    pub fn clear_satellite_data(&mut self) -> Option<SatelliteData> {
        self.satellite.take()
    }
}

/// Which way the hexes point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Orientation {
    FlatTop,
    #[default]
    PointyTop,
}

impl Orientation {
    /// Wire name used in map documents.
    pub fn name(self) -> &'static str {
        match self {
            Self::FlatTop => "FLAT_TOP",
            Self::PointyTop => "POINTY_TOP",
        }
    }
}

impl From<Orientation> for HexOrientation {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::FlatTop => HexOrientation::Flat,
            Orientation::PointyTop => HexOrientation::Pointy,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "FLAT_TOP" | "FLAT" => Ok(Self::FlatTop),
            "POINTY_TOP" | "POINTY" => Ok(Self::PointyTop),
            _ => Err(GridError::UnknownOrientation(s.to_string())),
        }
    }
}

/// Shape of the populated coordinate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GridLayout {
    #[default]
    Rectangular,
    Hexagonal,
    Triangular,
    Trapezoid,
}

impl GridLayout {
    pub const ALL: [GridLayout; 4] = [
        Self::Rectangular,
        Self::Hexagonal,
        Self::Triangular,
        Self::Trapezoid,
    ];

    /// Wire name used in map documents.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rectangular => "RECTANGULAR",
            Self::Hexagonal => "HEXAGONAL",
            Self::Triangular => "TRIANGULAR",
            Self::Trapezoid => "TRAPEZOID",
        }
    }
}

impl fmt::Display for GridLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GridLayout {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|layout| layout.name() == name)
            .ok_or_else(|| GridError::UnknownLayout(s.to_string()))
    }
}

/// `pointy-top` / `Pointy_Top` / `POINTY_TOP` all map to `POINTY_TOP`.
fn normalize_name(s: &str) -> String {
    s.trim().replace('-', "_").to_ascii_uppercase()
}
