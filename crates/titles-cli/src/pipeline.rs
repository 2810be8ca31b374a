//! Read, clean and write one catalog file.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use titles_ingest::{IngestOptions, read_dataset, write_dataset};
use titles_report::write_summary;
use titles_transform::clean;

use crate::types::{CleanPaths, CleanRun};

/// Run the cleaner over `paths.input`, writing the cleaned CSV and the
/// markdown summary.
///
/// # Errors
///
/// Fails when the input cannot be read or either output cannot be written.
pub fn run_clean(paths: &CleanPaths, options: &IngestOptions) -> Result<CleanRun> {
    let run_span = info_span!("clean_file", input = %paths.input.display());
    let _run_guard = run_span.enter();
    let start = Instant::now();

    let raw = info_span!("ingest").in_scope(|| -> Result<_> {
        let df = read_dataset(&paths.input, options)
            .with_context(|| format!("read {}", paths.input.display()))?;
        debug!(rows = df.height(), columns = df.width(), "ingest complete");
        Ok(df)
    })?;

    let outcome = clean(raw).with_context(|| format!("clean {}", paths.input.display()))?;

    info_span!("output").in_scope(|| -> Result<()> {
        write_dataset(&paths.output, &outcome.frame)
            .with_context(|| format!("write {}", paths.output.display()))?;
        write_summary(&paths.summary, &outcome.summary, &source_name(paths))?;
        debug!(
            output = %paths.output.display(),
            summary = %paths.summary.display(),
            "outputs written"
        );
        Ok(())
    })?;

    info!(
        rows = outcome.frame.height(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );

    Ok(CleanRun {
        paths: paths.clone(),
        columns: outcome
            .frame
            .get_column_names_str()
            .into_iter()
            .map(str::to_string)
            .collect(),
        summary: outcome.summary,
        rules: outcome.rules,
    })
}

/// File name shown in the summary heading.
fn source_name(paths: &CleanPaths) -> String {
    paths.input.file_name().map_or_else(
        || paths.input.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
