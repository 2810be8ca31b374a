use std::path::PathBuf;

use titles_model::CleaningSummary;
use titles_transform::RuleOutcome;

pub const DEFAULT_INPUT: &str = "netflix_titles.csv";
pub const DEFAULT_OUTPUT: &str = "cleaned_netflix_titles.csv";
pub const DEFAULT_SUMMARY: &str = "cleaning_summary.md";

/// Files read and written by one cleaning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanPaths {
    pub input: PathBuf,
    pub output: PathBuf,
    pub summary: PathBuf,
}

impl Default for CleanPaths {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            summary: PathBuf::from(DEFAULT_SUMMARY),
        }
    }
}

#[derive(Debug)]
pub struct CleanRun {
    pub paths: CleanPaths,
    pub columns: Vec<String>,
    pub summary: CleaningSummary,
    pub rules: Vec<RuleOutcome>,
}
