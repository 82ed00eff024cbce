//! CSV file reading into text-typed Polars DataFrames.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

/// Normalize a header cell: strip a UTF-8 BOM, trim, collapse inner whitespace.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim_matches('\u{feff}').trim();
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn check_readable(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    if metadata.len() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Reads a CSV file with a single header row into a DataFrame.
///
/// Every column is read as text (no schema inference), so identifiers such
/// as `00123` keep their leading zeros and dates stay unparsed until the
/// enrichment step. Empty cells are null. Header names are normalized with
/// [`normalize_header`].
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    check_readable(path)?;

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    for name in names {
        let normalized = normalize_header(&name);
        if normalized != name {
            df.rename(&name, normalized.into())?;
        }
    }

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read csv"
    );
    Ok(df)
}
