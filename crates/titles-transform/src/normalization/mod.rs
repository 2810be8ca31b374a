//! Value-level normalization functions.
//!
//! - **datetime**: `Month DD, YYYY` parsing and `DD-MM-YYYY` formatting
//! - **duration**: `<N> min` / `<N> Season(s)` decomposition
//! - **text**: trimming, title casing, first-country and cast counting
//! - **numeric**: nullable integer coercion

pub mod datetime;
pub mod duration;
pub mod numeric;
pub mod text;

pub use datetime::{format_ddmmyyyy, parse_added_date};
pub use duration::{DurationUnit, ParsedDuration, parse_duration};
pub use numeric::{integral_f64, parse_integral, to_nullable_int};
pub use text::{count_list_entries, primary_entry, title_case};
