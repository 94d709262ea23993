// File: crates/waterfall-core/src/load.rs
// Summary: CSV loading of raw waterfall entries (name, value, optional total flag).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, WaterfallError};
use crate::series::RawEntry;

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    value: f64,
    #[serde(default, alias = "istotal", alias = "total")]
    is_total: Option<String>,
}

/// Open `path` and read entries from it.
pub fn load_entries_csv(path: impl AsRef<Path>) -> Result<Vec<RawEntry>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|source| WaterfallError::Io { path: path.to_path_buf(), source })?;
    let entries = read_entries_csv(file)?;
    tracing::debug!(path = %path.display(), rows = entries.len(), "loaded waterfall entries");
    Ok(entries)
}

/// Read entries from CSV with a header row. Header names are case-insensitive.
pub fn read_entries_csv<R: Read>(reader: R) -> Result<Vec<RawEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(|source| csv_error(1, source))?;
    let headers = csv::StringRecord::from(headers.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>());

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            csv_error(line, e)
        })?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);
        let row: CsvRow = rec.deserialize(Some(&headers)).map_err(|e| csv_error(line, e))?;
        let is_total = match row.is_total.as_deref() {
            None => false,
            Some(flag) => parse_flag(flag)
                .ok_or_else(|| WaterfallError::InvalidTotalFlag { line, value: flag.to_string() })?,
        };
        out.push(RawEntry { name: row.name, value: row.value, is_total });
    }
    tracing::trace!(rows = out.len(), "parsed CSV rows");
    Ok(out)
}

fn csv_error(line: u64, source: csv::Error) -> WaterfallError {
    WaterfallError::Csv { line, source }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "" | "false" | "0" | "no" | "n" => Some(false),
        "true" | "1" | "yes" | "y" => Some(true),
        _ => None,
    }
}
