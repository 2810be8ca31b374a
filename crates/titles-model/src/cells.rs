//! Polars `AnyValue` conversions.

use chrono::NaiveDate;
use polars::prelude::*;

/// Output format for date cells.
pub const DATE_OUTPUT_FORMAT: &str = "%Y-%m-%d";

/// Days from 0001-01-01 to the Unix epoch.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Render a cell the way it is written to a delimited file.
///
/// Null renders as an empty string, so use [`any_to_optional_string`] when
/// the distinction between null and empty text matters.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    any_to_optional_string(value).unwrap_or_default()
}

/// Render a cell, `None` for null.
pub fn any_to_optional_string(value: AnyValue<'_>) -> Option<String> {
    let text = match value {
        AnyValue::Null => return None,
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::Date(days) => match date_from_epoch_days(days) {
            Some(date) => date.format(DATE_OUTPUT_FORMAT).to_string(),
            None => days.to_string(),
        },
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    };
    Some(text)
}

/// The calendar date of a date cell.
pub fn any_to_date(value: &AnyValue<'_>) -> Option<NaiveDate> {
    match value {
        AnyValue::Date(days) => date_from_epoch_days(*days),
        _ => None,
    }
}

/// Convert a polars date (days since 1970-01-01) to a [`NaiveDate`].
pub fn date_from_epoch_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(EPOCH_DAYS_FROM_CE)?)
}

/// Format a float without trailing zeros; whole numbers keep their digits.
///
/// # Examples
///
/// ```
/// use titles_model::format_numeric;
///
/// assert_eq!(format_numeric(2019.0), "2019");
/// assert_eq!(format_numeric(1.50), "1.5");
/// ```
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
