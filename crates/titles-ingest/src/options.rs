//! Reader configuration.

use std::collections::BTreeSet;

/// Cell contents read as missing values by default.
///
/// Matches the NA tokens of the common dataframe readers so a catalog that
/// was exported by one of them round-trips without turning its missing
/// markers into text.
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options for reading a delimited catalog file.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Field delimiter.
    pub delimiter: u8,
    /// Exact cell contents treated as missing.
    pub na_values: BTreeSet<String>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            na_values: DEFAULT_NA_VALUES.iter().map(|value| (*value).to_string()).collect(),
        }
    }
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Whether a raw cell is a missing-value token.
    pub fn is_na(&self, cell: &str) -> bool {
        self.na_values.contains(cell)
    }
}
