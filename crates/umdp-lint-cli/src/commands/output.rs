//! Shared output formatting for check results.

use anyhow::Result;

use crate::driver::RunSummary;
use crate::OutputFormat;

/// Print a run summary in the specified format.
pub fn print(summary: &RunSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(summary),
        OutputFormat::Json => return print_json(summary),
    }
    Ok(())
}

fn print_text(summary: &RunSummary) {
    for file in &summary.files {
        println!(
            "\x1b[31mfailures\x1b[0m in {} ({}):",
            file.path.display(),
            file.kind
        );
        for check in &file.report.failed {
            println!("  {} [x{}]", check.headline(), check.count);
        }
        println!();
    }

    let summary_color = if summary.has_failures() {
        "\x1b[31m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} failure(s) in {} of {} file(s)\x1b[0m",
        summary_color,
        summary.failures,
        summary.files.len(),
        summary.files_checked
    );
}

fn print_json(summary: &RunSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    println!("{json}");
    Ok(())
}
