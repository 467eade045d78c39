//! Join country records with the coordinate table and derive map markers.
//!
//! The pipeline is a pure function of its inputs: it performs no I/O and keeps
//! no state, so identical inputs always give identical outputs.

use crate::models::{CoordinateTable, CountryRecord, Dataset, MarkerSpec};
use thiserror::Error;

/// Counts are divided by this to get a marker radius in pixels.
pub const RADIUS_DIVISOR: f64 = 50.0;
/// Upper bound on marker radius so a few very large counts don't cover the map.
pub const RADIUS_CAP: f64 = 30.0;

/// Errors raised by [`build`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// Names and counts are paired by index, so both lists must be equally long.
    #[error("country list has {names} entries but count list has {counts}")]
    LengthMismatch { names: usize, counts: usize },
}

/// Result of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineOutput {
    /// All records, in input order.
    pub table: Vec<CountryRecord>,
    /// One marker per record with a known coordinate, in the same order.
    pub markers: Vec<MarkerSpec>,
}

/// Build the exported table and the marker list.
///
/// Records whose name is not in `coordinates` stay in the table but get no
/// marker. This is expected: the coordinate table is allowed to be incomplete.
/// Duplicate names are kept as separate rows and each gets its own marker.
pub fn build(
    names: &[String],
    counts: &[u64],
    coordinates: &CoordinateTable,
) -> Result<PipelineOutput, PipelineError> {
    if names.len() != counts.len() {
        return Err(PipelineError::LengthMismatch {
            names: names.len(),
            counts: counts.len(),
        });
    }

    let table: Vec<CountryRecord> = names
        .iter()
        .zip(counts)
        .map(|(name, &count)| CountryRecord::new(name.as_str(), count))
        .collect();

    let markers = table
        .iter()
        .filter_map(|rec| {
            coordinates.get(&rec.name).map(|location| MarkerSpec {
                location,
                radius: marker_radius(rec.count),
                label: popup_label(&rec.name, rec.count),
            })
        })
        .collect();

    Ok(PipelineOutput { table, markers })
}

impl Dataset {
    /// Run [`build`] over this dataset's own lists and coordinate table.
    pub fn build(&self) -> Result<PipelineOutput, PipelineError> {
        build(&self.countries, &self.counts, &self.coordinates)
    }
}

/// `min(count / 50, 30)`
pub fn marker_radius(count: u64) -> f64 {
    (count as f64 / RADIUS_DIVISOR).min(RADIUS_CAP)
}

/// Two-line popup text: bold country name, then the publication count.
pub fn popup_label(name: &str, count: u64) -> String {
    format!("<b>{name}</b><br>Publications: {count}")
}
