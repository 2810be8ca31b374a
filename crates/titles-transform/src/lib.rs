//! Column rules and the cleaning pipeline for title catalogs.
//!
//! - [`frame`]: DataFrame read/write helpers shared by the rules
//! - [`normalization`]: pure value parsers and formatters
//! - [`rules`]: one [`ColumnRule`] per column concern
//! - [`rename`]: snake_case header normalization
//! - [`pipeline`]: the fixed rule sequence and [`clean`]

pub mod frame;
pub mod normalization;
pub mod pipeline;
pub mod rename;
pub mod rules;

pub use pipeline::{CleanOutcome, CleaningPipeline, clean, clean_with};
pub use rename::{rename_to_snake_case, snake_case_column};
pub use rules::{ColumnRule, RuleOutcome, RuleStatus};
