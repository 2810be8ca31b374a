//! In-place text rewrites: trimming and categorical standardization.

use std::borrow::Cow;

use anyhow::Result;
use polars::prelude::*;

use crate::frame::{has_column, set_column};
use crate::normalization::{primary_entry, title_case};
use crate::rules::ColumnRule;

/// Rewrites every non-null text cell of one column with a pure function.
///
/// Skipped when the column is absent. Null cells are never touched, so they
/// cannot turn into empty or placeholder text. Non-text columns are left
/// alone.
pub struct TextRewriteRule {
    name: &'static str,
    column: &'static str,
    rewrite: fn(&str) -> Cow<'_, str>,
}

impl TextRewriteRule {
    pub fn new(name: &'static str, column: &'static str, rewrite: fn(&str) -> Cow<'_, str>) -> Self {
        Self {
            name,
            column,
            rewrite,
        }
    }

    /// Strip leading and trailing whitespace.
    pub fn trim(column: &'static str) -> Self {
        Self::new("trim", column, |value| Cow::Borrowed(value.trim()))
    }

    /// Title-case the value (`"tv show"` becomes `"Tv Show"`).
    pub fn title_case(column: &'static str) -> Self {
        Self::new("title_case", column, |value| Cow::Owned(title_case(value)))
    }

    /// Keep only the first comma-separated entry.
    pub fn primary_entry(column: &'static str) -> Self {
        Self::new("primary_entry", column, |value| Cow::Borrowed(primary_entry(value)))
    }
}

impl ColumnRule for TextRewriteRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn column(&self) -> &'static str {
        self.column
    }

    fn applies_to(&self, df: &DataFrame) -> bool {
        has_column(df, self.column)
    }

    fn apply(&mut self, df: &mut DataFrame) -> Result<usize> {
        let rewrite = self.rewrite;
        let rewritten: StringChunked = {
            let Ok(values) = df.column(self.column)?.str() else {
                return Ok(0);
            };
            values.apply_values(rewrite)
        };
        set_column(df, rewritten.into_column())
    }
}
