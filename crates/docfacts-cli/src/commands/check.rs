use std::path::Path;

use docfacts_checks::engine::CheckEngine;
use docfacts_core::types::{CheckId, FailureKind, RunReport};
use docfacts_output::OutputFormatter;

/// Run `docfacts check [name]` -- all checks in order, or just the named one.
///
/// Exit codes: 0 all passed, 1 assertion failure, 2 I/O failure or bad name.
pub fn run(
    formatter: &dyn OutputFormatter,
    verbose: bool,
    root: &Path,
    name: Option<String>,
) -> i32 {
    let selected: Vec<CheckId> = match name {
        None => CheckId::ALL.to_vec(),
        Some(n) => match CheckId::from_name(&n) {
            Some(id) => vec![id],
            None => {
                eprintln!("docfacts check: unknown check '{}'", n);
                eprintln!("Run `docfacts list` to see available checks.");
                return 2;
            }
        },
    };

    let engine = CheckEngine::new(root).with_verbose(verbose);
    let report = engine.run_selected(&selected);

    if verbose {
        eprintln!(
            "docfacts check: root={} status={} passed={}/{}",
            engine.root().display(),
            report.status,
            report.passed.len(),
            selected.len()
        );
    }

    let output = formatter.format_run(&report);
    if !output.is_empty() {
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
    }

    exit_code(&report)
}

fn exit_code(report: &RunReport) -> i32 {
    match &report.failure {
        None => 0,
        Some(f) => {
            match f.path.as_deref() {
                Some(path) => eprintln!("docfacts: {}: {}: {}", f.check, path, f.message),
                None => eprintln!("docfacts: {}: {}", f.check, f.message),
            }
            match f.kind {
                FailureKind::Assertion => 1,
                FailureKind::Io => 2,
            }
        }
    }
}
