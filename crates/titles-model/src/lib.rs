//! Title catalog data model.
//!
//! Catalogs are held as [`polars::prelude::DataFrame`]s; this crate names
//! their columns and describes them.
//!
//! - **cells**: `AnyValue` conversions shared by the reader, writer and rules
//! - **profile**: row, duplicate and missing-value counts and the cleaning summary
//! - **columns**: column names of the catalog schema

pub mod cells;
pub mod columns;
pub mod profile;

pub use cells::{
    DATE_OUTPUT_FORMAT, any_to_date, any_to_optional_string, any_to_string, date_from_epoch_days,
    format_numeric,
};
pub use profile::{CleaningSummary, ColumnMissing, ColumnRename, DatasetProfile};
