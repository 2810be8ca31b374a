//! Delimited file writing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;
use polars::prelude::*;
use titles_model::any_to_string;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Write a frame as a comma-separated file with a header row.
///
/// Columns keep the frame's order; no index column is written. Nulls are
/// written empty and dates as `YYYY-MM-DD`.
pub fn write_dataset(path: &Path, df: &DataFrame) -> Result<()> {
    let file = File::create(path).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    write_dataset_to(BufWriter::new(file), path, df)
}

/// Write a frame to any writer. `path` only labels errors and logs.
pub fn write_dataset_to<W: Write>(writer: W, path: &Path, df: &DataFrame) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    let csv_error = |source| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };
    writer
        .write_record(df.get_column_names_str())
        .map_err(csv_error)?;
    let columns = df.get_columns();
    for idx in 0..df.height() {
        let row = columns
            .iter()
            .map(|column| column.get(idx).map(any_to_string))
            .collect::<PolarsResult<Vec<String>>>()?;
        writer.write_record(&row).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = df.height(), "wrote catalog");
    Ok(())
}
