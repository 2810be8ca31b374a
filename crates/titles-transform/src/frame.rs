//! DataFrame helpers shared by the column rules.

use anyhow::Result;
use polars::prelude::*;
use titles_model::any_to_optional_string;

/// Whether the frame carries a column of this name.
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_index(name).is_some()
}

/// Cells of a column rendered as text. Every cell of an absent column is null.
pub fn column_strings(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let Ok(column) = df.column(name) else {
        return Ok(vec![None; df.height()]);
    };
    (0..df.height())
        .map(|idx| Ok(any_to_optional_string(column.get(idx)?)))
        .collect()
}

/// Replace a column in place, or append it when absent.
///
/// Returns the number of rows whose cell differs from what was there
/// before. A new column counts its non-null cells.
pub fn set_column(df: &mut DataFrame, column: Column) -> Result<usize> {
    let changed = match df.column(column.name().as_str()) {
        Ok(previous) => changed_rows(previous, &column)?,
        Err(_) => column.len() - column.null_count(),
    };
    df.with_column(column)?;
    Ok(changed)
}

/// Rows where two columns of equal length differ.
///
/// Null equals null. When the dtypes differ every non-null row counts as
/// changed, even if the rendered text matches.
pub fn changed_rows(before: &Column, after: &Column) -> Result<usize> {
    let retyped = before.dtype() != after.dtype();
    let mut changed = 0usize;
    for idx in 0..after.len() {
        let old = any_to_optional_string(before.get(idx)?);
        let new = any_to_optional_string(after.get(idx)?);
        let differs = match (&old, &new) {
            (None, None) => false,
            _ if retyped => true,
            _ => old != new,
        };
        if differs {
            changed += 1;
        }
    }
    Ok(changed)
}

/// Frame of string columns for rule tests.
#[cfg(test)]
pub(crate) fn string_frame(columns: &[(&str, &[Option<&str>])]) -> DataFrame {
    let columns: Vec<Column> = columns
        .iter()
        .map(|(name, values)| Column::new((*name).into(), values.to_vec()))
        .collect();
    DataFrame::new(columns).unwrap()
}
