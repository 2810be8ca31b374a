//! Derived features computed from cleaned columns.

use anyhow::Result;
use polars::prelude::*;
use titles_model::columns::UNKNOWN;

use crate::frame::{column_strings, has_column, set_column};
use crate::normalization::count_list_entries;
use crate::rules::ColumnRule;

/// Writes a lowercase copy of `source` into `target`. Nulls propagate.
pub struct LowercaseCopyRule {
    source: &'static str,
    target: &'static str,
}

impl LowercaseCopyRule {
    pub fn new(source: &'static str, target: &'static str) -> Self {
        Self { source, target }
    }
}

impl ColumnRule for LowercaseCopyRule {
    fn name(&self) -> &'static str {
        "lowercase_copy"
    }

    fn column(&self) -> &'static str {
        self.source
    }

    fn applies_to(&self, _df: &DataFrame) -> bool {
        true
    }

    fn apply(&mut self, df: &mut DataFrame) -> Result<usize> {
        if !has_column(df, self.source) {
            let nulls = Column::full_null(self.target.into(), df.height(), &DataType::String);
            return set_column(df, nulls);
        }
        let lowered = df
            .clone()
            .lazy()
            .select([col(self.source)
                .cast(DataType::String)
                .str()
                .to_lowercase()
                .alias(self.target)])
            .collect()?;
        let column = lowered.column(self.target)?.clone();
        set_column(df, column)
    }
}

/// Counts the comma-separated entries of `source` into `target`.
///
/// A null source and the imputed `"Unknown"` marker both count as zero.
pub struct CastCountRule {
    source: &'static str,
    target: &'static str,
}

impl CastCountRule {
    pub fn new(source: &'static str, target: &'static str) -> Self {
        Self { source, target }
    }

    /// Number of entries in one cast cell.
    pub fn count(value: Option<&str>) -> i64 {
        match value {
            Some(UNKNOWN) | None => 0,
            Some(text) => i64::try_from(count_list_entries(text)).unwrap_or(i64::MAX),
        }
    }
}

impl ColumnRule for CastCountRule {
    fn name(&self) -> &'static str {
        "cast_count"
    }

    fn column(&self) -> &'static str {
        self.source
    }

    fn applies_to(&self, _df: &DataFrame) -> bool {
        true
    }

    fn apply(&mut self, df: &mut DataFrame) -> Result<usize> {
        let counts: Vec<i64> = column_strings(df, self.source)?
            .iter()
            .map(|value| Self::count(value.as_deref()))
            .collect();
        set_column(df, Series::new(self.target.into(), counts).into_column())
    }
}
