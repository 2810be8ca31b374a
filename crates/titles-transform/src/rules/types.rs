//! Column type fixup.

use anyhow::Result;
use polars::prelude::*;
use tracing::warn;

use crate::frame::{has_column, set_column};
use crate::normalization::to_nullable_int;
use crate::rules::ColumnRule;

/// Coerces a column to nullable `Int64`.
///
/// Integral text and floats become integers; nulls stay null. Values that
/// are not integers become null and are counted in a warning.
pub struct NullableIntRule {
    column: &'static str,
}

impl NullableIntRule {
    pub fn new(column: &'static str) -> Self {
        Self { column }
    }
}

impl ColumnRule for NullableIntRule {
    fn name(&self) -> &'static str {
        "nullable_int"
    }

    fn column(&self) -> &'static str {
        self.column
    }

    fn applies_to(&self, df: &DataFrame) -> bool {
        has_column(df, self.column)
    }

    fn apply(&mut self, df: &mut DataFrame) -> Result<usize> {
        let column = df.column(self.column)?;
        if column.dtype() == &DataType::Int64 {
            return Ok(0);
        }
        let mut dropped = 0usize;
        let mut values: Vec<Option<i64>> = Vec::with_capacity(column.len());
        for idx in 0..column.len() {
            let value = to_nullable_int(&column.get(idx)?).unwrap_or_else(|| {
                dropped += 1;
                None
            });
            values.push(value);
        }
        if dropped > 0 {
            warn!(column = self.column, dropped, "non-integer values set to missing");
        }
        set_column(df, Series::new(self.column.into(), values).into_column())
    }
}
