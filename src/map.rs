//! Versioned JSON map format.
//!
//! A map document carries the grid's construction parameters plus one
//! positional row per cell:
//!
//! ```json
//! {
//!   "name": "testmap", "version": "1.0.0",
//!   "width": 4, "height": 3, "radius": 40.0,
//!   "orientation": "POINTY_TOP", "layout": "RECTANGULAR",
//!   "tilesetUrl": "http://example.com",
//!   "cells": [[0, 0, 1, 1.0, "1"], [1, 0, 1, 1.0, "1"]]
//! }
//! ```
//!
//! [`export_map`] followed by [`import_map`] and another export yields the
//! same document, rows included and in the same order.

mod document;
mod exporter;
mod importer;
mod stats;

pub use document::{CellRow, FORMAT_VERSION, MapDocument};
pub use exporter::{export_map, export_map_pretty};
pub use importer::{ImportOptions, import_map, import_map_into};
pub use stats::MapStats;
