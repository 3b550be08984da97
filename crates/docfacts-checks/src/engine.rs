use std::path::{Path, PathBuf};

use docfacts_core::facts::SUMMARY_LINES;
use docfacts_core::types::{CheckError, CheckFailure, CheckId, CheckPass, RunReport};

use crate::routines;

/// Runs checks against one working root, stopping at the first failure.
#[derive(Debug, Clone)]
pub struct CheckEngine {
    root: PathBuf,
    verbose: bool,
}

impl CheckEngine {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            verbose: false,
        }
    }

    /// Emit per-check diagnostics on stderr.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run a single check.
    pub fn run_check(&self, id: CheckId) -> Result<CheckPass, CheckError> {
        if self.verbose {
            eprintln!("[docfacts] running {} in {}", id, self.root.display());
        }
        routines::run(id, &self.root)?;
        Ok(CheckPass::new(id))
    }

    /// Run every check in order.
    pub fn run(&self) -> RunReport {
        self.run_selected(&CheckId::ALL)
    }

    /// Run the given checks in order. The first failure ends the run; later
    /// checks are not attempted and no summary is attached.
    pub fn run_selected(&self, ids: &[CheckId]) -> RunReport {
        let mut passed = Vec::with_capacity(ids.len());
        let mut failure = None;

        for &id in ids {
            match self.run_check(id) {
                Ok(pass) => passed.push(pass),
                Err(e) => {
                    if self.verbose {
                        eprintln!("[docfacts] {} failed: {}", id, e);
                    }
                    failure = Some(CheckFailure::from(&e));
                    break;
                }
            }
        }

        let ok = failure.is_none();
        let full_run = ids == CheckId::ALL.as_slice();
        RunReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "check".to_string(),
            status: if ok { "ok" } else { "error" }.to_string(),
            passed,
            failure,
            summary: if ok && full_run {
                SUMMARY_LINES.iter().map(|s| s.to_string()).collect()
            } else {
                vec![]
            },
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
