//! `date_added` parsing and its derived parts.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use polars::prelude::*;
use titles_model::any_to_date;
use titles_model::columns::{ADDED_MONTH, ADDED_YEAR, DATE_ADDED, DATE_ADDED_DDMMYYYY};
use tracing::debug;

use crate::frame::set_column;
use crate::normalization::{format_ddmmyyyy, parse_added_date};
use crate::rules::ColumnRule;

/// Parses `date_added` into a date and derives `added_year`, `added_month`
/// and `date_added_ddmmyyyy`.
///
/// Unparseable dates become null, as do all three derived cells. The
/// derived columns are written even when `date_added` is absent.
#[derive(Debug, Default)]
pub struct DateAddedRule;

impl DateAddedRule {
    fn read(value: &AnyValue<'_>) -> Option<NaiveDate> {
        match value {
            AnyValue::String(text) => parse_added_date(text),
            AnyValue::StringOwned(text) => parse_added_date(text),
            other => any_to_date(other),
        }
    }
}

impl ColumnRule for DateAddedRule {
    fn name(&self) -> &'static str {
        "date_added"
    }

    fn column(&self) -> &'static str {
        DATE_ADDED
    }

    fn applies_to(&self, _df: &DataFrame) -> bool {
        true
    }

    fn apply(&mut self, df: &mut DataFrame) -> Result<usize> {
        let dates: Vec<Option<NaiveDate>> = match df.column(DATE_ADDED) {
            Ok(column) => {
                let mut dates = Vec::with_capacity(column.len());
                let mut unparsed = 0usize;
                for idx in 0..column.len() {
                    let value = column.get(idx)?;
                    let date = Self::read(&value);
                    if date.is_none() && !value.is_null() {
                        unparsed += 1;
                    }
                    dates.push(date);
                }
                if unparsed > 0 {
                    debug!(unparsed, "date_added values not in `Month DD, YYYY` form set to missing");
                }
                dates
            }
            Err(_) => vec![None; df.height()],
        };

        let years: Vec<Option<i64>> = dates
            .iter()
            .map(|date| date.map(|date| i64::from(date.year())))
            .collect();
        let months: Vec<Option<i64>> = dates
            .iter()
            .map(|date| date.map(|date| i64::from(date.month())))
            .collect();
        let formatted: Vec<Option<String>> =
            dates.iter().map(|date| date.map(format_ddmmyyyy)).collect();

        let mut changed = 0usize;
        if df.get_column_index(DATE_ADDED).is_some() {
            let parsed = Series::new(DATE_ADDED.into(), dates).into_column();
            changed = changed.max(set_column(df, parsed)?);
        }
        for column in [
            Series::new(ADDED_YEAR.into(), years).into_column(),
            Series::new(ADDED_MONTH.into(), months).into_column(),
            Series::new(DATE_ADDED_DDMMYYYY.into(), formatted).into_column(),
        ] {
            changed = changed.max(set_column(df, column)?);
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{column_strings, has_column, string_frame};

    fn cell(df: &DataFrame, column: &str) -> Option<String> {
        column_strings(df, column).unwrap().remove(0)
    }

    #[test]
    fn derives_parts() {
        let mut df = string_frame(&[(DATE_ADDED, &[Some("September 24, 2021")])]);
        assert_eq!(DateAddedRule.apply(&mut df).unwrap(), 1);
        assert_eq!(df.column(DATE_ADDED).unwrap().dtype(), &DataType::Date);
        assert_eq!(cell(&df, DATE_ADDED).as_deref(), Some("2021-09-24"));
        assert_eq!(cell(&df, ADDED_YEAR).as_deref(), Some("2021"));
        assert_eq!(cell(&df, ADDED_MONTH).as_deref(), Some("9"));
        assert_eq!(cell(&df, DATE_ADDED_DDMMYYYY).as_deref(), Some("24-09-2021"));
        assert_eq!(
            df.get_column_names_str(),
            vec![DATE_ADDED, ADDED_YEAR, ADDED_MONTH, DATE_ADDED_DDMMYYYY]
        );
    }

    #[test]
    fn unparseable_date_becomes_missing() {
        let mut df = string_frame(&[(DATE_ADDED, &[Some(" August 4, 2017")])]);
        DateAddedRule.apply(&mut df).unwrap();
        for column in [DATE_ADDED, ADDED_YEAR, ADDED_MONTH, DATE_ADDED_DDMMYYYY] {
            assert_eq!(cell(&df, column), None, "{column}");
        }
    }

    #[test]
    fn parsed_date_is_kept_on_rerun() {
        let mut df = string_frame(&[(DATE_ADDED, &[Some("January 2, 2020")])]);
        DateAddedRule.apply(&mut df).unwrap();
        assert_eq!(DateAddedRule.apply(&mut df).unwrap(), 0);
        assert_eq!(cell(&df, DATE_ADDED_DDMMYYYY).as_deref(), Some("02-01-2020"));
    }

    #[test]
    fn absent_source_does_not_create_it() {
        let mut df = string_frame(&[("title", &[Some("Up")])]);
        DateAddedRule.apply(&mut df).unwrap();
        assert!(!has_column(&df, DATE_ADDED));
        assert!(has_column(&df, ADDED_YEAR));
        assert_eq!(cell(&df, ADDED_YEAR), None);
    }
}
