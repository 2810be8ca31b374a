//! Title catalog ingestion.
//!
//! Reads a delimited catalog file into a polars `DataFrame` of string columns
//! and writes cleaned frames back out. Both directions go through the `csv`
//! crate so missing-value tokens and header quirks stay under our control.

pub mod error;
pub mod options;
pub mod reader;
pub mod writer;

pub use error::{IngestError, Result};
pub use options::{DEFAULT_NA_VALUES, IngestOptions};
pub use reader::{read_dataset, read_dataset_from_reader};
pub use writer::{write_dataset, write_dataset_to};
