use docfacts_core::types::CheckId;
use docfacts_output::OutputFormatter;

/// Run `docfacts list` -- print the check catalog in run order.
pub fn run(formatter: &dyn OutputFormatter) -> i32 {
    let output = formatter.format_catalog(&CheckId::ALL);
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    0
}
