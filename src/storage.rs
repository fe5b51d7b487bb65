use crate::models::{RawRecord, Record};
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Load records from a CSV with header `id,country,region,year,value,group`.
///
/// Rows with a missing or non-numeric `value` abort the load with the row id
/// attached; coercing them to zero would render invisible bubbles.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let mut out = Vec::new();
    for row in rdr.deserialize::<RawRecord>() {
        let raw = row?;
        out.push(Record::try_from(raw)?);
    }
    Ok(out)
}

/// Load records from a JSON array of raw rows (same validation as CSV).
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let raw: Vec<RawRecord> = serde_json::from_reader(file)?;
    raw.into_iter()
        .map(|r| Record::try_from(r).map_err(Into::into))
        .collect()
}

/// Save records as CSV with header.
pub fn save_csv<P: AsRef<Path>>(records: &[Record], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    for r in records {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save records as a pretty JSON array.
pub fn save_json<P: AsRef<Path>>(records: &[Record], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(records)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
