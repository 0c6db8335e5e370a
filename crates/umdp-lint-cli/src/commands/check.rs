//! Check command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use umdp_lint_core::Constants;

use crate::{driver, OutputFormat};

/// Runs the check command.
pub fn run(path: &Path, format: OutputFormat, retired_ifdefs: Vec<String>) -> Result<()> {
    let constants = Constants::new().with_retired_ifdefs(retired_ifdefs);

    let summary = driver::run(path, constants)
        .with_context(|| format!("Failed to check {}", path.display()))?;

    super::output::print(&summary, format)?;

    // Exit with error code if there are failures
    if summary.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}
