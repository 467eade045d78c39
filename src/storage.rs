use crate::models::{CountryRecord, Dataset};
use anyhow::{Context, Result};
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Create the output directory (and parents). Succeeds if it already exists.
pub fn ensure_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).with_context(|| format!("creating directory {}", dir.display()))
}

/// Save the table as CSV: header `countries,count`, one row per record, no index column.
pub fn save_csv<P: AsRef<Path>>(table: &[CountryRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record(["countries", "count"])?;
    for rec in table {
        wtr.serialize((&rec.name, rec.count))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read a table previously written by [`save_csv`].
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<CountryRecord>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    for row in rdr.deserialize::<CountryRecord>() {
        out.push(row.with_context(|| format!("parsing {}", path.display()))?);
    }
    Ok(out)
}

/// Load a dataset from JSON:
/// `{"countries": [...], "counts": [...], "coordinates": {"Name": [lat, lon], ...}}`.
pub fn load_dataset_json<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let ds = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parsing dataset {}", path.display()))?;
    Ok(ds)
}
