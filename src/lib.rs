//! pubmap
//!
//! A small Rust library for turning per-country publication counts into a
//! CSV table and an interactive world map. Pairs with the `pubmap` CLI.
//!
//! ### Features
//! - Built-in calibration dataset, or load your own from JSON
//! - Join counts with a coordinate table; countries without a coordinate are
//!   kept in the table and left off the map
//! - Circle markers sized `min(count / 50, 30)`
//! - Save the table as CSV and the map as a Leaflet HTML page
//!
//! ### Example
//! ```no_run
//! use pubmap::{Dataset, MapConfig};
//!
//! let data = Dataset::builtin();
//! let out = data.build()?;
//! pubmap::storage::ensure_dir("files")?;
//! pubmap::storage::save_csv(&out.table, "files/countries.csv")?;
//! pubmap::map::save_html(&out.markers, &MapConfig::default(), "files/map.html")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod data;
pub mod map;
pub mod models;
pub mod pipeline;
pub mod stats;
pub mod storage;

pub use map::MapConfig;
pub use models::{Coordinate, CoordinateTable, CountryRecord, Dataset, MarkerSpec};
pub use pipeline::{PipelineError, PipelineOutput, build};
