//! Column renaming.

use anyhow::Result;
use polars::prelude::*;
use titles_model::ColumnRename;
use tracing::warn;

/// Normalize a raw header to snake_case.
///
/// Trims, lowercases, replaces spaces with underscores and drops
/// parentheses. Total; never fails.
///
/// # Examples
///
/// ```
/// use titles_transform::rename::snake_case_column;
///
/// assert_eq!(snake_case_column(" Release Year "), "release_year");
/// assert_eq!(snake_case_column("Duration (min)"), "duration_min");
/// ```
pub fn snake_case_column(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(' ', "_")
        .replace(['(', ')'], "")
}

/// Rename every column of `df` to snake_case.
///
/// Returns one entry per source column, in source order. When several
/// source columns map onto the same name, the last one's values are kept at
/// the first one's position and a warning is logged.
pub fn rename_to_snake_case(df: &mut DataFrame) -> Result<Vec<ColumnRename>> {
    let renames: Vec<ColumnRename> = df
        .get_column_names_str()
        .into_iter()
        .map(|source| ColumnRename {
            source: source.to_string(),
            target: snake_case_column(source),
        })
        .collect();

    let mut targets: Vec<&str> = Vec::with_capacity(renames.len());
    for rename in &renames {
        if !targets.contains(&rename.target.as_str()) {
            targets.push(&rename.target);
        }
    }

    let mut columns: Vec<Column> = Vec::with_capacity(targets.len());
    for target in targets {
        let mut sources = renames.iter().filter(|rename| rename.target == target);
        let Some(kept) = sources.next_back() else {
            continue;
        };
        if sources.next().is_some() {
            warn!(column = %target, "several source columns renamed to the same name, keeping the last");
        }
        let column = df.column(&kept.source)?.clone().with_name(target.into());
        columns.push(column);
    }
    *df = DataFrame::new(columns)?;
    Ok(renames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{column_strings, string_frame};

    #[test]
    fn snake_case_examples() {
        assert_eq!(snake_case_column("Title"), "title");
        assert_eq!(snake_case_column("Date Added"), "date_added");
        assert_eq!(snake_case_column("listed_in"), "listed_in");
        assert_eq!(snake_case_column("Show (Id)"), "show_id");
        assert_eq!(snake_case_column("  "), "");
    }

    #[test]
    fn renames_frame_in_place() {
        let mut df = string_frame(&[("Type", &[Some("Movie")]), ("Release Year", &[Some("2020")])]);
        let renames = rename_to_snake_case(&mut df).unwrap();
        assert_eq!(df.get_column_names_str(), vec!["type", "release_year"]);
        assert_eq!(
            column_strings(&df, "release_year").unwrap(),
            vec![Some("2020".to_string())]
        );
        assert_eq!(renames[1].source, "Release Year");
        assert_eq!(renames[1].target, "release_year");
    }

    #[test]
    fn collisions_keep_last_values_at_first_position() {
        let mut df = string_frame(&[
            ("Title", &[Some("first")]),
            ("cast", &[Some("A")]),
            ("title ", &[Some("second")]),
        ]);
        let renames = rename_to_snake_case(&mut df).unwrap();
        assert_eq!(df.get_column_names_str(), vec!["title", "cast"]);
        assert_eq!(column_strings(&df, "title").unwrap(), vec![Some("second".to_string())]);
        assert_eq!(renames.len(), 3);
        assert!(renames.iter().filter(|rename| rename.target == "title").count() == 2);
    }
}
