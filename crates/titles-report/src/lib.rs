//! Cleaning report generation.
//!
//! Renders a [`titles_model::CleaningSummary`] as a markdown document and
//! writes it to disk.

mod markdown;

pub use markdown::{TRANSFORMATIONS_APPLIED, render_summary, write_summary};
