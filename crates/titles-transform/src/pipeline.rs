//! The cleaning pipeline.
//!
//! [`clean`] is the whole transformation: profile the raw frame, rename
//! its columns, run the standard rules in order and profile the result.
//! It does no I/O.

use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::*;
use titles_model::columns::{
    CAST, COUNTRY, DIRECTOR, DURATION_INT, NOT_RATED, NUM_CAST, RATING, RELEASE_YEAR, TEXT_COLUMNS,
    TITLE, TITLE_LOWER, TYPE, UNKNOWN,
};
use titles_model::{CleaningSummary, DatasetProfile};
use tracing::{debug, info, info_span};

use crate::rename::rename_to_snake_case;
use crate::rules::{
    CastCountRule, ColumnRule, ConstantFillRule, DateAddedRule, DurationRule, LowercaseCopyRule,
    ModeFillRule, NullableIntRule, RuleOutcome, TextRewriteRule,
};

/// Ordered list of column rules.
pub struct CleaningPipeline {
    rules: Vec<Box<dyn ColumnRule>>,
}

impl CleaningPipeline {
    pub fn new(rules: Vec<Box<dyn ColumnRule>>) -> Self {
        Self { rules }
    }

    /// The fixed rule sequence for title catalogs.
    ///
    /// Order matters: trimming runs before standardization and imputation,
    /// and the derived features read the imputed `cast` and trimmed `title`.
    pub fn standard() -> Self {
        let mut rules: Vec<Box<dyn ColumnRule>> = vec![
            Box::new(DateAddedRule),
            Box::new(DurationRule),
        ];
        rules.extend(
            TEXT_COLUMNS
                .iter()
                .copied()
                .map(|column| Box::new(TextRewriteRule::trim(column)) as Box<dyn ColumnRule>),
        );
        rules.push(Box::new(TextRewriteRule::title_case(TYPE)));
        rules.push(Box::new(TextRewriteRule::primary_entry(COUNTRY)));
        rules.push(Box::new(ModeFillRule::new(RATING, NOT_RATED)));
        rules.push(Box::new(ConstantFillRule::new(DIRECTOR, UNKNOWN)));
        rules.push(Box::new(ConstantFillRule::new(CAST, UNKNOWN)));
        rules.push(Box::new(NullableIntRule::new(RELEASE_YEAR)));
        rules.push(Box::new(NullableIntRule::new(DURATION_INT)));
        rules.push(Box::new(LowercaseCopyRule::new(TITLE, TITLE_LOWER)));
        rules.push(Box::new(CastCountRule::new(CAST, NUM_CAST)));
        Self::new(rules)
    }

    /// Run every rule over `df` in order.
    pub fn run(&mut self, df: &mut DataFrame) -> Result<Vec<RuleOutcome>> {
        let mut outcomes = Vec::with_capacity(self.rules.len());
        for rule in &mut self.rules {
            let span = info_span!("rule", rule = rule.name());
            let _guard = span.enter();
            if !rule.applies_to(df) {
                debug!("input column absent, rule skipped");
                outcomes.push(RuleOutcome::skipped(rule.name(), rule.column()));
                continue;
            }
            let start = Instant::now();
            let rows_changed = rule
                .apply(df)
                .with_context(|| format!("rule {} on column {}", rule.name(), rule.column()))?;
            debug!(
                rows_changed,
                duration_ms = start.elapsed().as_millis(),
                "rule complete"
            );
            outcomes.push(RuleOutcome::applied(rule.name(), rule.column(), rows_changed));
        }
        Ok(outcomes)
    }
}

impl Default for CleaningPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

/// Result of [`clean`].
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub frame: DataFrame,
    pub summary: CleaningSummary,
    pub rules: Vec<RuleOutcome>,
}

/// Clean a raw frame with the standard pipeline.
pub fn clean(df: DataFrame) -> Result<CleanOutcome> {
    clean_with(&mut CleaningPipeline::standard(), df)
}

/// Clean a raw frame with a custom pipeline.
pub fn clean_with(pipeline: &mut CleaningPipeline, mut df: DataFrame) -> Result<CleanOutcome> {
    let span = info_span!("clean", rows = df.height(), columns = df.width());
    let _guard = span.enter();

    let before = DatasetProfile::of(&df).context("profile raw catalog")?;
    let renames = rename_to_snake_case(&mut df)?;
    let rules = pipeline.run(&mut df)?;
    let after = DatasetProfile::of(&df).context("profile cleaned catalog")?;

    info!(
        rows_before = before.rows,
        rows_after = after.rows,
        duplicates_before = before.duplicates,
        duplicates_after = after.duplicates,
        missing_before = before.total_missing(),
        missing_after = after.total_missing(),
        "cleaning complete"
    );

    Ok(CleanOutcome {
        frame: df,
        summary: CleaningSummary::new(before, after, renames),
        rules,
    })
}
