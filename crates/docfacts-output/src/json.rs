use crate::OutputFormatter;
use docfacts_core::types::{CheckId, RunReport};
use serde::Serialize;

pub struct JsonFormatter;

#[derive(Serialize)]
struct CatalogEntry {
    name: CheckId,
    title: &'static str,
}

impl OutputFormatter for JsonFormatter {
    fn format_run(&self, report: &RunReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }

    fn format_catalog(&self, checks: &[CheckId]) -> String {
        let entries: Vec<CatalogEntry> = checks
            .iter()
            .map(|&id| CatalogEntry {
                name: id,
                title: id.title(),
            })
            .collect();
        serde_json::to_string_pretty(&entries).unwrap_or_default()
    }
}
