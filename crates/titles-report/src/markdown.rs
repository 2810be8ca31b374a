use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use titles_model::{CleaningSummary, DatasetProfile};

/// Static list of transformation categories, one bullet each.
pub const TRANSFORMATIONS_APPLIED: &[&str] = &[
    "Renamed columns to snake_case.",
    "Trimmed whitespace from free-text columns.",
    "Converted date_added to a date and created added_year/added_month/date_added_ddmmyyyy.",
    "Parsed duration into duration_int (integer) and duration_type (minutes/seasons).",
    "Title-cased type and kept only the first country.",
    "Filled rating with its mode; filled director/cast with 'Unknown'.",
    "Stored release_year and duration_int as nullable integers.",
    "Added title_lower and num_cast features.",
];

/// Render the markdown cleaning summary.
///
/// `source_name` is the input file name shown in the heading.
pub fn render_summary(summary: &CleaningSummary, source_name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Cleaning summary for {source_name}\n"));
    out.push('\n');
    out.push_str(&format!("- Rows before: {}\n", summary.rows_before()));
    out.push_str(&format!("- Rows after: {}\n", summary.rows_after()));
    out.push_str(&format!("- Duplicates before: {}\n", summary.duplicates_before()));
    out.push_str(&format!("- Duplicates after: {}\n", summary.duplicates_after()));
    out.push('\n');
    out.push_str("## Missing values (before)\n\n");
    push_missing_table(&mut out, &summary.before);
    out.push('\n');
    out.push_str("## Missing values (after)\n\n");
    push_missing_table(&mut out, &summary.after);
    out.push('\n');
    out.push_str("## Transformations applied\n\n");
    for line in TRANSFORMATIONS_APPLIED {
        out.push_str(&format!("- {line}\n"));
    }
    out
}

fn push_missing_table(out: &mut String, profile: &DatasetProfile) {
    if profile.missing.is_empty() {
        out.push_str("_No columns._\n");
        return;
    }
    out.push_str("| Column | Missing |\n");
    out.push_str("|---|---:|\n");
    for entry in &profile.missing {
        out.push_str(&format!("| {} | {} |\n", escape_cell(&entry.column), entry.missing));
    }
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

/// Render and write the summary to `path`.
pub fn write_summary(path: &Path, summary: &CleaningSummary, source_name: &str) -> Result<()> {
    let text = render_summary(summary, source_name);
    fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
