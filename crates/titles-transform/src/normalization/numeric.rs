//! Nullable integer coercion.

use polars::prelude::*;

/// Parses integer text, accepting integral decimals such as `"2019.0"`.
pub fn parse_integral(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().and_then(integral_f64))
}

/// Converts a float to an integer when it has no fractional part and fits.
#[allow(clippy::cast_possible_truncation)]
pub fn integral_f64(value: f64) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63
    if value.is_finite() && value.fract() == 0.0 && (-LIMIT..LIMIT).contains(&value) {
        Some(value as i64)
    } else {
        None
    }
}

/// Coerce a cell to a nullable integer.
///
/// Null stays null (`Some(None)`). Returns `None` when a present value cannot
/// be read as an integer; the caller decides what to store instead.
pub fn to_nullable_int(value: &AnyValue<'_>) -> Option<Option<i64>> {
    let number = match value {
        AnyValue::Null => return Some(None),
        AnyValue::Int8(v) => i64::from(*v),
        AnyValue::Int16(v) => i64::from(*v),
        AnyValue::Int32(v) => i64::from(*v),
        AnyValue::Int64(v) => *v,
        AnyValue::UInt8(v) => i64::from(*v),
        AnyValue::UInt16(v) => i64::from(*v),
        AnyValue::UInt32(v) => i64::from(*v),
        AnyValue::UInt64(v) => i64::try_from(*v).ok()?,
        AnyValue::Float32(v) => integral_f64(f64::from(*v))?,
        AnyValue::Float64(v) => integral_f64(*v)?,
        AnyValue::String(text) => parse_integral(text)?,
        AnyValue::StringOwned(text) => parse_integral(text)?,
        _ => return None,
    };
    Some(Some(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_text() {
        assert_eq!(parse_integral("2019"), Some(2019));
        assert_eq!(parse_integral(" 2019 "), Some(2019));
        assert_eq!(parse_integral("2019.0"), Some(2019));
        assert_eq!(parse_integral("2019.5"), None);
        assert_eq!(parse_integral("twenty"), None);
        assert_eq!(parse_integral(""), None);
    }

    #[test]
    fn floats_must_be_integral_and_finite() {
        assert_eq!(integral_f64(90.0), Some(90));
        assert_eq!(integral_f64(-3.0), Some(-3));
        assert_eq!(integral_f64(0.5), None);
        assert_eq!(integral_f64(f64::NAN), None);
        assert_eq!(integral_f64(f64::INFINITY), None);
        assert_eq!(integral_f64(1e30), None);
    }

    #[test]
    fn coerces_cells() {
        assert_eq!(to_nullable_int(&AnyValue::Null), Some(None));
        assert_eq!(to_nullable_int(&AnyValue::Int64(7)), Some(Some(7)));
        assert_eq!(to_nullable_int(&AnyValue::Int32(7)), Some(Some(7)));
        assert_eq!(to_nullable_int(&AnyValue::Float64(90.0)), Some(Some(90)));
        assert_eq!(to_nullable_int(&AnyValue::Float64(90.5)), None);
        assert_eq!(to_nullable_int(&AnyValue::String("2020")), Some(Some(2020)));
        assert_eq!(to_nullable_int(&AnyValue::String("n/a")), None);
        assert_eq!(to_nullable_int(&AnyValue::Boolean(true)), None);
    }
}
