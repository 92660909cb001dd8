use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::grid::{AxialCoordinate, GridLayout, GridSettings, Orientation, SatelliteData};

/// Format version written into every exported document.
pub const FORMAT_VERSION: &str = "1.0.0";

/// The serialized form of a grid and its satellite data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDocument {
    pub name: String,
    pub version: String,
    pub width: u32,
    pub height: u32,
    pub radius: f64,
    pub orientation: Orientation,
    pub layout: GridLayout,
    pub tileset_url: String,
    pub cells: Vec<CellRow>,
}

impl MapDocument {
    /// Empty document for a grid geometry, stamped with [`FORMAT_VERSION`].
    pub fn new(
        settings: &GridSettings,
        name: impl Into<String>,
        tileset_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: FORMAT_VERSION.to_string(),
            width: settings.width,
            height: settings.height,
            radius: settings.radius,
            orientation: settings.orientation,
            layout: settings.layout,
            tileset_url: tileset_url.into(),
            cells: Vec::new(),
        }
    }

    /// Grid construction parameters exactly as declared in the header.
    pub fn settings(&self) -> GridSettings {
        GridSettings {
            width: self.width,
            height: self.height,
            radius: self.radius,
            orientation: self.orientation,
            layout: self.layout,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, MapError> {
        serde_json::from_str(json).map_err(MapError::MalformedDocument)
    }

    /// Compact JSON encoding.
    pub fn to_json(&self) -> Result<String, MapError> {
        serde_json::to_string(self).map_err(MapError::Encode)
    }

    pub fn to_json_pretty(&self) -> Result<String, MapError> {
        serde_json::to_string_pretty(self).map_err(MapError::Encode)
    }
}

/// One cell of a [`MapDocument`].
///
/// On the wire a row is the positional array
/// `[q, r, passable (0|1), movementCost, tilesetId]`; this is the only place
/// that knows about that encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireRow", into = "WireRow")]
pub struct CellRow {
    pub coordinate: AxialCoordinate,
    pub satellite: SatelliteData,
}

impl CellRow {
    pub fn new(coordinate: AxialCoordinate, satellite: SatelliteData) -> Self {
        Self {
            coordinate,
            satellite,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct WireRow(i32, i32, i64, f64, String);

impl From<WireRow> for CellRow {
    fn from(WireRow(q, r, passable, movement_cost, tileset_id): WireRow) -> Self {
        Self::new(
            AxialCoordinate::new(q, r),
            SatelliteData::new(passable != 0, movement_cost, tileset_id),
        )
    }
}

impl From<CellRow> for WireRow {
    fn from(row: CellRow) -> Self {
        let CellRow {
            coordinate,
            satellite,
        } = row;
        WireRow(
            coordinate.q,
            coordinate.r,
            i64::from(satellite.passable),
            satellite.movement_cost,
            satellite.tileset_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_document() -> MapDocument {
        let settings = GridSettings::new(4, 3).with_radius(40.0);
        let mut doc = MapDocument::new(&settings, "testmap", "http://example.com");
        doc.cells = vec![
            CellRow::new(
                AxialCoordinate::new(0, 0),
                SatelliteData::new(true, 1.0, "1"),
            ),
            CellRow::new(
                AxialCoordinate::new(2, 0),
                SatelliteData::new(false, 1.0, "2"),
            ),
        ];
        doc
    }

    // ── encoding ────────────────────────────────────────────────────

    #[test]
    fn rows_encode_as_positional_arrays() {
        let value = serde_json::to_value(sample_document()).unwrap();
        assert_eq!(value["cells"], json!([[0, 0, 1, 1.0, "1"], [2, 0, 0, 1.0, "2"]]));
    }

    #[test]
    fn passable_flag_is_never_a_boolean_literal() {
        let value = serde_json::to_value(sample_document()).unwrap();
        for row in value["cells"].as_array().unwrap() {
            let flag = &row[2];
            assert!(flag.is_u64(), "flag {flag} should be an integer");
            assert!(flag == &json!(0) || flag == &json!(1));
        }
    }

    #[test]
    fn header_uses_wire_field_names() {
        let value = serde_json::to_value(sample_document()).unwrap();
        assert_eq!(value["name"], "testmap");
        assert_eq!(value["version"], FORMAT_VERSION);
        assert_eq!(value["width"], 4);
        assert_eq!(value["height"], 3);
        assert_eq!(value["radius"], 40.0);
        assert_eq!(value["orientation"], "POINTY_TOP");
        assert_eq!(value["layout"], "RECTANGULAR");
        assert_eq!(value["tilesetUrl"], "http://example.com");
    }

    // ── decoding ────────────────────────────────────────────────────

    #[test]
    fn any_nonzero_flag_decodes_as_passable() {
        let row: CellRow = serde_json::from_value(json!([3, -1, 7, 2.5, "x"])).unwrap();
        assert_eq!(row.coordinate, AxialCoordinate::new(3, -1));
        assert!(row.satellite.passable);
        assert_eq!(row.satellite.movement_cost, 2.5);
        assert_eq!(row.satellite.tileset_id, "x");
    }

    #[test]
    fn integer_cost_is_accepted() {
        let row: CellRow = serde_json::from_value(json!([0, 0, 0, 2, "x"])).unwrap();
        assert!(!row.satellite.passable);
        assert_eq!(row.satellite.movement_cost, 2.0);
    }

    #[test]
    fn short_or_mistyped_rows_are_rejected() {
        for row in [
            json!([0, 0, 1, 1.0]),
            json!([0, 0, 1, 1.0, "x", "extra"]),
            json!([0, 0, true, 1.0, "x"]),
            json!(["0", 0, 1, 1.0, "x"]),
            json!({"q": 0, "r": 0}),
        ] {
            assert!(
                serde_json::from_value::<CellRow>(row.clone()).is_err(),
                "{row} should not decode"
            );
        }
    }

    #[test]
    fn missing_header_field_is_malformed() {
        let mut value = serde_json::to_value(sample_document()).unwrap();
        value.as_object_mut().unwrap().remove("width");
        let err = MapDocument::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, MapError::MalformedDocument(_)), "{err}");
    }

    #[test]
    fn non_numeric_radius_is_malformed() {
        let mut value = serde_json::to_value(sample_document()).unwrap();
        value["radius"] = json!("forty");
        let err = MapDocument::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, MapError::MalformedDocument(_)), "{err}");
    }

    #[test]
    fn unknown_enum_name_is_malformed() {
        let mut value = serde_json::to_value(sample_document()).unwrap();
        value["layout"] = json!("SPIRAL");
        assert!(MapDocument::from_json(&value.to_string()).is_err());
    }

    #[test]
    fn not_json_is_malformed() {
        let err = MapDocument::from_json("{ this is not json").unwrap_err();
        assert!(matches!(err, MapError::MalformedDocument(_)));
    }

    #[test]
    fn extra_header_fields_are_ignored() {
        let mut value = serde_json::to_value(sample_document()).unwrap();
        value["author"] = json!("someone");
        let doc = MapDocument::from_json(&value.to_string()).unwrap();
        assert_eq!(doc, sample_document());
    }

    #[test]
    fn pretty_and_compact_decode_identically() {
        let doc = sample_document();
        let compact = MapDocument::from_json(&doc.to_json().unwrap()).unwrap();
        let pretty = MapDocument::from_json(&doc.to_json_pretty().unwrap()).unwrap();
        assert_eq!(compact, pretty);
        assert!(!doc.to_json().unwrap().contains('\n'));
    }
}
