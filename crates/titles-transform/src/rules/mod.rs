//! Column rules.
//!
//! A [`ColumnRule`] owns the logic for one column (or one group of columns
//! derived from the same source). The pipeline runs rules in a fixed order;
//! a rule may read columns written by earlier rules, never by later ones.

use anyhow::Result;
use polars::prelude::*;

pub mod dates;
pub mod duration;
pub mod features;
pub mod impute;
pub mod text;
pub mod types;

pub use dates::DateAddedRule;
pub use duration::DurationRule;
pub use features::{CastCountRule, LowercaseCopyRule};
pub use impute::{ConstantFillRule, ModeFillRule, column_mode};
pub use text::TextRewriteRule;
pub use types::NullableIntRule;

/// Per-column transformation step.
pub trait ColumnRule {
    /// Short identifier used in logs and run summaries.
    fn name(&self) -> &'static str;

    /// The column the rule reads or rewrites.
    fn column(&self) -> &'static str;

    /// Whether the rule runs on this frame. In-place rules return `false`
    /// when their column is absent.
    fn applies_to(&self, df: &DataFrame) -> bool;

    /// Rewrite the frame, returning the number of rows changed. Derived
    /// columns that do not exist yet are appended in the order written.
    fn apply(&mut self, df: &mut DataFrame) -> Result<usize>;
}

/// What happened to one rule during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleStatus {
    /// The rule ran and changed this many rows.
    Applied { rows_changed: usize },
    /// The rule's input column was absent.
    Skipped,
}

/// Outcome of one rule in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: &'static str,
    pub column: &'static str,
    pub status: RuleStatus,
}

impl RuleOutcome {
    pub fn applied(rule: &'static str, column: &'static str, rows_changed: usize) -> Self {
        Self {
            rule,
            column,
            status: RuleStatus::Applied { rows_changed },
        }
    }

    pub fn skipped(rule: &'static str, column: &'static str) -> Self {
        Self {
            rule,
            column,
            status: RuleStatus::Skipped,
        }
    }

    /// Rows changed, `None` when skipped.
    pub fn rows_changed(&self) -> Option<usize> {
        match self.status {
            RuleStatus::Applied { rows_changed } => Some(rows_changed),
            RuleStatus::Skipped => None,
        }
    }
}
