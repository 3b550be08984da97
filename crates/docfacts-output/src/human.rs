use crate::OutputFormatter;
use docfacts_core::config::{ReportConfig, MAX_BANNER_WIDTH};
use docfacts_core::types::{CheckId, RunReport};

const TITLE: &str = "CUDA Compatibility Documentation Tests";
const PASSED: &str = "All tests passed! ✓";

/// Console report: a `=` banner, a "Testing ..." / "✓ ..." pair per passed
/// check, and on success a closing banner with the summary. A failed run ends
/// with the title of the failing check; the failure itself goes to stderr.
pub struct HumanFormatter {
    banner_width: usize,
    show_summary: bool,
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::from_config(&ReportConfig::default())
    }
}

impl HumanFormatter {
    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            banner_width: config.banner_width.min(MAX_BANNER_WIDTH),
            show_summary: config.summary,
        }
    }

    fn rule(&self) -> String {
        "=".repeat(self.banner_width)
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_run(&self, report: &RunReport) -> String {
        let rule = self.rule();
        let mut out = format!("{rule}\n{TITLE}\n{rule}\n");

        for (i, pass) in report.passed.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&format!("{}\n{}\n", pass.title, pass.confirmation));
        }

        if let Some(failure) = &report.failure {
            if !report.passed.is_empty() {
                out.push('\n');
            }
            out.push_str(failure.check.title());
            out.push('\n');
            return out;
        }

        out.push_str(&format!("\n{rule}\n{PASSED}\n{rule}\n"));
        if self.show_summary && !report.summary.is_empty() {
            out.push_str("\nSummary:\n");
            for line in &report.summary {
                out.push_str(&format!("- {}\n", line));
            }
        }
        out
    }

    fn format_catalog(&self, checks: &[CheckId]) -> String {
        let width = checks.iter().map(|c| c.name().len()).max().unwrap_or(0);
        let mut out = String::new();
        for (i, id) in checks.iter().enumerate() {
            out.push_str(&format!(
                "{}. {:<width$}  {}\n",
                i + 1,
                id.name(),
                id.title(),
                width = width
            ));
        }
        out
    }
}
