//! Output formatters for docfacts run results.
//!
//! Provides two output modes:
//! - **Human** (default): the banner-and-checkmark console report
//! - **JSON** (`--json`): Machine-readable structured output

pub mod human;
pub mod json;

use docfacts_core::types::{CheckId, RunReport};

pub trait OutputFormatter {
    fn format_run(&self, report: &RunReport) -> String;
    fn format_catalog(&self, checks: &[CheckId]) -> String;
}
