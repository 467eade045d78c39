use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the exported table: a country and its publication count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryRecord {
    #[serde(rename = "countries")]
    pub name: String,
    pub count: u64,
}

impl CountryRecord {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Geographic position in degrees.
///
/// Serialized as a `[lat, lon]` pair, the same shape the coordinate tables
/// are usually written in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.lat, c.lon]
    }
}

/// Read-only lookup from country name to its map position.
///
/// Keyed by exact name. The table is a reference: it does not need to cover
/// every country that appears in a dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoordinateTable(HashMap<String, Coordinate>);

impl CoordinateTable {
    pub fn get(&self, name: &str) -> Option<Coordinate> {
        self.0.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Coordinate)> for CoordinateTable {
    fn from_iter<I: IntoIterator<Item = (S, Coordinate)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Rendering instruction for one circle marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerSpec {
    pub location: Coordinate,
    pub radius: f64,
    /// Popup HTML: emphasized country name, then `Publications: {count}`.
    pub label: String,
}

/// Everything the pipeline consumes: names and counts paired by index, plus
/// the coordinate reference table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub countries: Vec<String>,
    pub counts: Vec<u64>,
    pub coordinates: CoordinateTable,
}
