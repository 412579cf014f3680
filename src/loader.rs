//! CSV loader for the specimen dataset.

use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::record::Record;

/// Errors raised while reading the input dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Loads every row of a header-delimited CSV file into [`Record`]s.
///
/// # Errors
///
/// Returns [`LoadError::MissingFile`] if `path` does not exist, and propagates
/// read and decoding failures.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_records(path: &Path) -> Result<Vec<Record>, LoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::MissingFile {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io(e),
    })?;

    let records = read_records(file)?;
    info!(count = records.len(), "Records loaded");
    Ok(records)
}

/// Parses CSV data from any reader. The first row is the header.
///
/// Columns with an empty header name are dropped.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let dropped = headers.iter().filter(|h| h.is_empty()).count();
    if dropped > 0 {
        debug!(dropped, "Ignoring unnamed columns");
    }

    let mut records = Vec::new();
    for row in reader.records() {
        records.push(to_record(&headers, &row?));
    }

    Ok(records)
}

fn to_record(headers: &StringRecord, row: &StringRecord) -> Record {
    headers
        .iter()
        .zip(row.iter())
        .filter(|(name, _)| !name.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex,year";

    #[test]
    fn test_read_records_maps_header_to_values() {
        let data = format!("{HEADER}\nAdelie,Torgersen,39.1,18.7,181,3750,MALE,2007\n");
        let records = read_records(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("species"), Some("Adelie"));
        assert_eq!(records[0].get("body_mass_g"), Some("3750"));
        assert_eq!(records[0].get("year"), Some("2007"));
    }

    #[test]
    fn test_trailing_unnamed_column_is_dropped() {
        let data = "species,island,\nAdelie,Torgersen,\nGentoo,Biscoe,x\n";
        let records = read_records(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        for r in &records {
            assert_eq!(r.len(), 2);
            assert!(r.field_names().all(|n| !n.is_empty()));
        }
        assert_eq!(records[1].get("island"), Some("Biscoe"));
    }

    #[test]
    fn test_short_row_leaves_fields_missing() {
        let data = "species,island,sex\nAdelie,Torgersen\n";
        let records = read_records(data.as_bytes()).unwrap();

        assert_eq!(records[0].get("island"), Some("Torgersen"));
        assert_eq!(records[0].get("sex"), None);
    }

    #[test]
    fn test_empty_values_are_kept_as_empty_strings() {
        let data = format!("{HEADER}\nAdelie,Torgersen,NA,,,,,2007\n");
        let records = read_records(data.as_bytes()).unwrap();

        assert_eq!(records[0].get("bill_length_mm"), Some("NA"));
        assert_eq!(records[0].get("sex"), Some(""));
    }

    #[test]
    fn test_header_only_yields_no_records() {
        let records = read_records(HEADER.as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_file_error() {
        let path = std::env::temp_dir().join("penguin_stats_does_not_exist.csv");
        let _ = std::fs::remove_file(&path);

        let err = load_records(&path).unwrap_err();
        assert!(matches!(err, LoadError::MissingFile { .. }));
        assert!(err.to_string().contains("penguin_stats_does_not_exist.csv"));
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let data: &[u8] = b"species,island\n\xff\xfe,Dream\n";
        let result = read_records(data);
        assert!(matches!(result, Err(LoadError::Csv(_))));
    }
}
