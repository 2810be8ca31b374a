//! Catalog date parsing.
//!
//! Catalog exports write the date a title was added as `Month DD, YYYY`
//! (`September 24, 2021`). Anything else, including surrounding whitespace,
//! does not parse.

use chrono::NaiveDate;

/// Output format of `date_added_ddmmyyyy`.
pub const DDMMYYYY_FORMAT: &str = "%d-%m-%Y";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parse a `Month DD, YYYY` date.
///
/// The month is a full English month name (case-insensitive), the day has
/// one or two digits and the year exactly four. Returns `None` for any other
/// shape and for impossible dates such as `February 30, 2021`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use titles_transform::normalization::parse_added_date;
///
/// assert_eq!(
///     parse_added_date("September 24, 2021"),
///     NaiveDate::from_ymd_opt(2021, 9, 24)
/// );
/// assert_eq!(parse_added_date("2021-09-24"), None);
/// ```
pub fn parse_added_date(value: &str) -> Option<NaiveDate> {
    let (month_name, rest) = value.split_once(' ')?;
    let month = month_number(month_name)?;
    let (day, year) = rest.split_once(", ")?;
    if !is_digits(day, 1, 2) || !is_digits(year, 4, 4) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, day.parse().ok()?)
}

/// Format a date as `DD-MM-YYYY`.
pub fn format_ddmmyyyy(date: NaiveDate) -> String {
    date.format(DDMMYYYY_FORMAT).to_string()
}

fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .zip(1u32..)
        .find(|(month, _)| month.eq_ignore_ascii_case(name))
        .map(|(_, number)| number)
}

fn is_digits(value: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&value.len()) && value.bytes().all(|byte| byte.is_ascii_digit())
}
