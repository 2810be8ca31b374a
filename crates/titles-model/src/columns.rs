//! Column names of the title catalog schema.
//!
//! Source columns are named after renaming (see the transform crate's
//! renamer), derived columns are appended by the cleaning pipeline in the
//! order of [`DERIVED_COLUMNS`].

pub const TYPE: &str = "type";
pub const TITLE: &str = "title";
pub const DIRECTOR: &str = "director";
pub const CAST: &str = "cast";
pub const COUNTRY: &str = "country";
pub const DATE_ADDED: &str = "date_added";
pub const RELEASE_YEAR: &str = "release_year";
pub const RATING: &str = "rating";
pub const DURATION: &str = "duration";
pub const LISTED_IN: &str = "listed_in";
pub const DESCRIPTION: &str = "description";

pub const ADDED_YEAR: &str = "added_year";
pub const ADDED_MONTH: &str = "added_month";
pub const DATE_ADDED_DDMMYYYY: &str = "date_added_ddmmyyyy";
pub const DURATION_INT: &str = "duration_int";
pub const DURATION_TYPE: &str = "duration_type";
pub const TITLE_LOWER: &str = "title_lower";
pub const NUM_CAST: &str = "num_cast";

/// Free-text columns stripped of surrounding whitespace.
pub const TEXT_COLUMNS: &[&str] = &[
    TYPE,
    TITLE,
    DIRECTOR,
    CAST,
    COUNTRY,
    RATING,
    LISTED_IN,
    DESCRIPTION,
];

/// Columns computed by the pipeline, in output order.
pub const DERIVED_COLUMNS: &[&str] = &[
    ADDED_YEAR,
    ADDED_MONTH,
    DATE_ADDED_DDMMYYYY,
    DURATION_INT,
    DURATION_TYPE,
    TITLE_LOWER,
    NUM_CAST,
];

/// Imputed marker for missing people columns.
pub const UNKNOWN: &str = "Unknown";

/// Rating fill when no rating is present anywhere in the dataset.
pub const NOT_RATED: &str = "Not Rated";
