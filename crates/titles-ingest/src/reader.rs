//! Delimited file reading.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::*;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::options::IngestOptions;

/// Read a catalog file into a [`DataFrame`] of string columns.
///
/// Every non-missing cell is read as text; typing is the cleaning
/// pipeline's job. Cells matching one of [`IngestOptions::na_values`] become
/// null. Short rows are padded with nulls.
///
/// # Errors
///
/// Fails when the file is absent or unreadable, has no header row, or holds
/// malformed rows.
pub fn read_dataset(path: &Path, options: &IngestOptions) -> Result<DataFrame> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => IngestError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;
    read_dataset_from_reader(file, path, options)
}

/// Read a catalog from any reader. `path` only labels errors and logs.
pub fn read_dataset_from_reader<R: Read>(
    reader: R,
    path: &Path,
    options: &IngestOptions,
) -> Result<DataFrame> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);
    let raw_headers: Vec<String> = reader
        .headers()
        .map_err(|source| csv_error(path, source))?
        .iter()
        .map(|header| header.trim_start_matches('\u{feff}').to_string())
        .collect();
    if raw_headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let headers = dedupe_headers(raw_headers);
    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|source| csv_error(path, source))?;
        if record.len() > headers.len() {
            return Err(IngestError::RaggedRow {
                path: path.to_path_buf(),
                row: index + 1,
                found: record.len(),
                expected: headers.len(),
            });
        }
        for (position, column) in cells.iter_mut().enumerate() {
            let value = record
                .get(position)
                .filter(|cell| !options.is_na(cell))
                .map(str::to_string);
            column.push(value);
        }
    }
    let columns: Vec<Column> = headers
        .iter()
        .zip(cells)
        .map(|(name, values)| Column::new(name.as_str().into(), values))
        .collect();
    let df = DataFrame::new(columns)?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read catalog"
    );
    Ok(df)
}

fn csv_error(path: &Path, source: csv::Error) -> IngestError {
    if let csv::ErrorKind::Io(_) = source.kind() {
        let message = source.to_string();
        return IngestError::FileRead {
            path: path.to_path_buf(),
            source: io::Error::other(message),
        };
    }
    IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    }
}

/// Make repeated header names unique by suffixing `.1`, `.2`, ...
fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(headers.len());
    for header in headers {
        if !unique.contains(&header) {
            unique.push(header);
            continue;
        }
        let mut suffix = 1usize;
        let mut candidate = format!("{header}.{suffix}");
        while unique.contains(&candidate) {
            suffix += 1;
            candidate = format!("{header}.{suffix}");
        }
        warn!(header = %header, renamed = %candidate, "duplicate header renamed");
        unique.push(candidate);
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedupe_headers_suffixes_repeats() {
        let headers = vec![
            "a".to_string(),
            "b".to_string(),
            "a".to_string(),
            "a".to_string(),
        ];
        assert_eq!(dedupe_headers(headers), vec!["a", "b", "a.1", "a.2"]);
    }

    #[test]
    fn reads_from_memory() {
        let data = "title,cast\nUp, Ed Asner \nCoco,\n";
        let df =
            read_dataset_from_reader(data.as_bytes(), Path::new("mem.csv"), &IngestOptions::default())
                .unwrap();
        assert_eq!(df.get_column_names_str(), vec!["title", "cast"]);
        let cast = df.column("cast").unwrap().str().unwrap();
        assert_eq!(cast.get(0), Some(" Ed Asner "));
        assert_eq!(cast.get(1), None);
    }

    #[test]
    fn strips_byte_order_mark() {
        let data = "\u{feff}show_id,title\ns1,Up\n";
        let df =
            read_dataset_from_reader(data.as_bytes(), Path::new("bom.csv"), &IngestOptions::default())
                .unwrap();
        assert_eq!(df.get_column_names_str()[0], "show_id");
    }

    #[test]
    fn empty_input_is_an_error() {
        let error =
            read_dataset_from_reader("".as_bytes(), Path::new("empty.csv"), &IngestOptions::default())
                .unwrap_err();
        assert!(matches!(error, IngestError::EmptyCsv { .. }));
    }
}
