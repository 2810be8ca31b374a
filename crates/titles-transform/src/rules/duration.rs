//! `duration` decomposition into `duration_int` and `duration_type`.

use anyhow::Result;
use polars::prelude::*;
use titles_model::columns::{DURATION, DURATION_INT, DURATION_TYPE};

use crate::frame::{column_strings, set_column};
use crate::normalization::parse_duration;
use crate::rules::ColumnRule;

/// Splits `duration` into an integer amount and a unit label.
///
/// Both outputs are null together when the source is null or not
/// recognized.
#[derive(Debug, Default)]
pub struct DurationRule;

impl ColumnRule for DurationRule {
    fn name(&self) -> &'static str {
        "duration"
    }

    fn column(&self) -> &'static str {
        DURATION
    }

    fn applies_to(&self, _df: &DataFrame) -> bool {
        true
    }

    fn apply(&mut self, df: &mut DataFrame) -> Result<usize> {
        let parsed: Vec<_> = column_strings(df, DURATION)?
            .iter()
            .map(|value| value.as_deref().and_then(parse_duration))
            .collect();
        let amounts: Vec<Option<i64>> = parsed.iter().map(|p| p.map(|p| p.amount)).collect();
        let units: Vec<Option<&str>> = parsed.iter().map(|p| p.map(|p| p.unit.as_str())).collect();
        let changed = set_column(df, Series::new(DURATION_INT.into(), amounts).into_column())?;
        let changed =
            changed.max(set_column(df, Series::new(DURATION_TYPE.into(), units).into_column())?);
        Ok(changed)
    }
}
