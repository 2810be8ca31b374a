//! Duration text decomposition.
//!
//! Movies carry a running time (`90 min`), shows a season count
//! (`1 Season`, `3 Seasons`).

/// Unit of a parsed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Minutes,
    Seasons,
}

impl DurationUnit {
    /// Label written to `duration_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minutes => "minutes",
            Self::Seasons => "seasons",
        }
    }
}

/// Amount and unit of a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDuration {
    pub amount: i64,
    pub unit: DurationUnit,
}

/// Parse a duration cell.
///
/// The unit comes from the trimmed text: `min` anywhere means minutes,
/// otherwise `Season` anywhere means seasons. The amount is the digit
/// characters of the first whitespace-delimited token. Returns `None` when
/// the unit is unrecognized or the first token yields no usable number, so
/// amount and unit are always present together.
///
/// # Examples
///
/// ```
/// use titles_transform::normalization::{DurationUnit, parse_duration};
///
/// let parsed = parse_duration("2 Seasons").unwrap();
/// assert_eq!(parsed.amount, 2);
/// assert_eq!(parsed.unit, DurationUnit::Seasons);
/// assert!(parse_duration("2 episodes").is_none());
/// ```
pub fn parse_duration(value: &str) -> Option<ParsedDuration> {
    let trimmed = value.trim();
    let unit = if trimmed.contains("min") {
        DurationUnit::Minutes
    } else if trimmed.contains("Season") {
        DurationUnit::Seasons
    } else {
        return None;
    };
    let first = trimmed.split_whitespace().next()?;
    let digits: String = first.chars().filter(char::is_ascii_digit).collect();
    let amount = digits.parse::<i64>().ok()?;
    Some(ParsedDuration { amount, unit })
}
