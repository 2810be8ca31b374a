//! CLI library components for the title catalog cleaner.

pub mod logging;
pub mod pipeline;
pub mod types;
