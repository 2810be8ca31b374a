//! Missing-value imputation.

use anyhow::Result;
use polars::prelude::*;
use titles_model::any_to_optional_string;
use tracing::info;

use crate::frame::has_column;
use crate::rules::ColumnRule;

const MODE_COUNT: &str = "mode_count";

/// Most frequent non-null value of a column.
///
/// Ties resolve to the lexicographically smallest candidate, so the choice
/// is stable across runs regardless of row order. `None` when the column has
/// no values at all.
pub fn column_mode(df: &DataFrame, column: &str) -> Result<Option<String>> {
    let counts = df
        .clone()
        .lazy()
        .select([col(column).cast(DataType::String)])
        .filter(col(column).is_not_null())
        .group_by([col(column)])
        .agg([len().alias(MODE_COUNT)])
        .sort_by_exprs(
            [col(MODE_COUNT), col(column)],
            SortMultipleOptions::default().with_order_descending_multi([true, false]),
        )
        .limit(1)
        .collect()?;
    if counts.height() == 0 {
        return Ok(None);
    }
    Ok(any_to_optional_string(counts.column(column)?.get(0)?))
}

/// Replace the nulls of a column with `fill`, returning how many were filled.
fn fill_nulls(df: &mut DataFrame, column: &str, fill: &str) -> Result<usize> {
    let missing = df.column(column)?.null_count();
    if missing == 0 {
        return Ok(0);
    }
    let filled = df
        .clone()
        .lazy()
        .with_columns([col(column).cast(DataType::String).fill_null(lit(fill))])
        .collect()?;
    *df = filled;
    Ok(missing)
}

/// Fills null cells with the column's mode, or `fallback` when the column
/// has no values at all.
pub struct ModeFillRule {
    column: &'static str,
    fallback: &'static str,
}

impl ModeFillRule {
    pub fn new(column: &'static str, fallback: &'static str) -> Self {
        Self { column, fallback }
    }
}

impl ColumnRule for ModeFillRule {
    fn name(&self) -> &'static str {
        "mode_fill"
    }

    fn column(&self) -> &'static str {
        self.column
    }

    fn applies_to(&self, df: &DataFrame) -> bool {
        has_column(df, self.column)
    }

    fn apply(&mut self, df: &mut DataFrame) -> Result<usize> {
        let fill = column_mode(df, self.column)?.unwrap_or_else(|| self.fallback.to_string());
        let filled = fill_nulls(df, self.column, &fill)?;
        info!(column = self.column, fill = %fill, filled, "missing values filled with mode");
        Ok(filled)
    }
}

/// Fills null cells with a constant.
pub struct ConstantFillRule {
    column: &'static str,
    fill: &'static str,
}

impl ConstantFillRule {
    pub fn new(column: &'static str, fill: &'static str) -> Self {
        Self { column, fill }
    }
}

impl ColumnRule for ConstantFillRule {
    fn name(&self) -> &'static str {
        "constant_fill"
    }

    fn column(&self) -> &'static str {
        self.column
    }

    fn applies_to(&self, df: &DataFrame) -> bool {
        has_column(df, self.column)
    }

    fn apply(&mut self, df: &mut DataFrame) -> Result<usize> {
        fill_nulls(df, self.column, self.fill)
    }
}
