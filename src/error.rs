//! Error types for grid construction and map documents.

use crate::grid::GridLayout;

/// Reasons the grid builder rejects a set of construction parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Hexagonal and triangular layouts need a square extent.
    #[error("{layout} layout needs width == height, got {width}x{height}")]
    UnequalSides {
        layout: GridLayout,
        width: u32,
        height: u32,
    },
    /// A hexagonal layout needs an odd size so it has a center cell.
    #[error("hexagonal layout needs an odd size, got {size}")]
    EvenHexagonSize { size: u32 },
    /// Visual hex radius must be finite and strictly positive.
    #[error("hex radius must be finite and > 0, got {radius}")]
    InvalidRadius { radius: f64 },
    /// The extent does not fit axial coordinates or exceeds
    /// [`MAX_CELLS`](crate::grid::shapes::MAX_CELLS).
    #[error("grid extent {width}x{height} is too large")]
    ExtentTooLarge { width: u32, height: u32 },
    #[error("unknown hex orientation {0:?}")]
    UnknownOrientation(String),
    #[error("unknown grid layout {0:?}")]
    UnknownLayout(String),
}

/// Failures of [`export_map`](crate::map::export_map) and
/// [`import_map`](crate::map::import_map).
///
/// Both operations are atomic: when one of these is returned no partially
/// written document or partially populated grid escapes.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// The text is not JSON, or a header field or cell row is missing or has
    /// the wrong type.
    #[error("malformed map document: {0}")]
    MalformedDocument(#[source] serde_json::Error),
    /// A cell row names a coordinate the declared geometry does not contain.
    #[error("cell ({q}, {r}) lies outside the declared grid geometry")]
    CoordinateOutOfBounds { q: i32, r: i32 },
    /// Only raised when importing with [`ImportOptions::strict_version`](crate::map::ImportOptions).
    #[error("unsupported map format version {found:?}, expected {expected:?}")]
    UnsupportedVersion {
        found: String,
        expected: &'static str,
    },
    /// Every exported cell must carry satellite data.
    #[error("cell ({q}, {r}) has no satellite data attached")]
    MissingSatelliteData { q: i32, r: i32 },
    /// Movement costs must be finite and non-negative.
    #[error("cell ({q}, {r}) has a negative or non-finite movement cost")]
    InvalidMovementCost { q: i32, r: i32 },
    /// The header declares a geometry the grid builder rejects.
    #[error("invalid grid geometry: {0}")]
    InvalidGeometry(#[from] GridError),
    #[error("failed to encode map document: {0}")]
    Encode(#[source] serde_json::Error),
}
