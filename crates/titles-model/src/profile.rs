//! Dataset profiles and the before/after cleaning summary.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Missing-value count for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMissing {
    pub column: String,
    pub missing: usize,
}

/// Row, duplicate and missing-value counts of one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DatasetProfile {
    /// Number of rows.
    pub rows: usize,
    /// Rows equal in every column to an earlier row.
    pub duplicates: usize,
    /// Missing counts in column order.
    pub missing: Vec<ColumnMissing>,
}

impl DatasetProfile {
    /// Profile a frame.
    ///
    /// A row counts as a duplicate when an earlier row holds equal values in
    /// every column; null equals null. The first occurrence is not counted.
    pub fn of(df: &DataFrame) -> PolarsResult<Self> {
        let missing = df
            .get_columns()
            .iter()
            .map(|column| ColumnMissing {
                column: column.name().to_string(),
                missing: column.null_count(),
            })
            .collect();
        Ok(Self {
            rows: df.height(),
            duplicates: duplicate_rows(df)?,
            missing,
        })
    }

    /// Missing count of a column, `None` when the column was not profiled.
    pub fn missing_in(&self, column: &str) -> Option<usize> {
        self.missing
            .iter()
            .find(|entry| entry.column == column)
            .map(|entry| entry.missing)
    }

    /// Total missing cells across all columns.
    pub fn total_missing(&self) -> usize {
        self.missing.iter().map(|entry| entry.missing).sum()
    }
}

fn duplicate_rows(df: &DataFrame) -> PolarsResult<usize> {
    if df.width() == 0 || df.height() < 2 {
        return Ok(0);
    }
    let unique = df
        .clone()
        .lazy()
        .unique_stable(None, UniqueKeepStrategy::First)
        .collect()?;
    Ok(df.height() - unique.height())
}

/// A source column and the name it was given by the renamer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRename {
    pub source: String,
    pub target: String,
}

/// Profiles of the raw and the cleaned dataset.
///
/// The raw profile uses the column names as read from the source. `renames`
/// maps each of them to its cleaned name; several sources may share a target
/// when their names collide after renaming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningSummary {
    pub before: DatasetProfile,
    pub after: DatasetProfile,
    #[serde(default)]
    pub renames: Vec<ColumnRename>,
}

impl CleaningSummary {
    pub fn new(before: DatasetProfile, after: DatasetProfile, renames: Vec<ColumnRename>) -> Self {
        Self {
            before,
            after,
            renames,
        }
    }

    pub fn rows_before(&self) -> usize {
        self.before.rows
    }

    pub fn rows_after(&self) -> usize {
        self.after.rows
    }

    pub fn duplicates_before(&self) -> usize {
        self.before.duplicates
    }

    pub fn duplicates_after(&self) -> usize {
        self.after.duplicates
    }

    /// Raw column names that were renamed to `target`, in source order.
    pub fn sources_of<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.renames
            .iter()
            .filter(move |rename| rename.target == target)
            .map(|rename| rename.source.as_str())
    }

    /// Missing count of a cleaned column before cleaning.
    ///
    /// Looks the column up under its raw name. When several raw columns
    /// collided into it, the last one is the one whose values were kept.
    /// `None` for derived columns, which have no raw counterpart.
    pub fn missing_before(&self, target: &str) -> Option<usize> {
        self.sources_of(target)
            .last()
            .and_then(|source| self.before.missing_in(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(title: Vec<Option<&str>>, cast: Vec<Option<&str>>) -> DataFrame {
        DataFrame::new(vec![
            Column::new("title".into(), title),
            Column::new("cast".into(), cast),
        ])
        .unwrap()
    }

    #[test]
    fn counts_missing_per_column() {
        let df = frame(vec![Some("A"), None, Some("C")], vec![None, None, Some("x")]);
        let profile = DatasetProfile::of(&df).unwrap();
        assert_eq!(profile.rows, 3);
        assert_eq!(profile.missing_in("title"), Some(1));
        assert_eq!(profile.missing_in("cast"), Some(2));
        assert_eq!(profile.missing_in("other"), None);
        assert_eq!(profile.total_missing(), 3);
    }

    #[test]
    fn duplicates_treat_missing_as_equal() {
        let df = frame(
            vec![Some("A"), Some("A"), Some("A"), Some("A")],
            vec![None, None, Some(""), None],
        );
        let profile = DatasetProfile::of(&df).unwrap();
        assert_eq!(profile.duplicates, 2);
    }

    #[test]
    fn empty_frame_profile() {
        let profile = DatasetProfile::of(&frame(Vec::new(), Vec::new())).unwrap();
        assert_eq!(profile.rows, 0);
        assert_eq!(profile.duplicates, 0);
        assert_eq!(profile.total_missing(), 0);
        assert_eq!(profile.missing.len(), 2);
    }

    #[test]
    fn missing_before_follows_renames() {
        let before = DatasetProfile {
            rows: 2,
            duplicates: 0,
            missing: vec![
                ColumnMissing { column: "Title".to_string(), missing: 0 },
                ColumnMissing { column: "title ".to_string(), missing: 2 },
                ColumnMissing { column: "Cast".to_string(), missing: 1 },
            ],
        };
        let renames = vec![
            ColumnRename { source: "Title".to_string(), target: "title".to_string() },
            ColumnRename { source: "title ".to_string(), target: "title".to_string() },
            ColumnRename { source: "Cast".to_string(), target: "cast".to_string() },
        ];
        let summary = CleaningSummary::new(before, DatasetProfile::default(), renames);
        assert_eq!(summary.sources_of("title").collect::<Vec<_>>(), vec!["Title", "title "]);
        assert_eq!(summary.missing_before("title"), Some(2));
        assert_eq!(summary.missing_before("cast"), Some(1));
        assert_eq!(summary.missing_before("num_cast"), None);
    }

    #[test]
    fn summary_serializes() {
        let df = frame(vec![Some("A")], vec![None]);
        let summary = CleaningSummary::new(
            DatasetProfile::of(&df).unwrap(),
            DatasetProfile::default(),
            Vec::new(),
        );
        let json = serde_json::to_string(&summary).expect("serialize summary");
        let round: CleaningSummary = serde_json::from_str(&json).expect("deserialize summary");
        assert_eq!(round.rows_before(), 1);
        assert_eq!(round.before.missing_in("cast"), Some(1));
    }
}
