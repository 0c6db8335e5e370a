//! File discovery and per-file rule dispatch.
//!
//! Walks a tree, classifies each file by extension, and runs the line,
//! unit and universal tables for its language through one shared
//! [`Checker`].

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use umdp_lint_core::{Checker, Constants, SourceUnit, UnitKind, UnitReport};
use umdp_lint_rules::{tables_for, UNIVERSAL_RULES};

/// Errors raised while walking and reading source files.
#[derive(Debug, Error)]
pub enum DriverError {
    /// A file could not be read.
    #[error("failed to read {path}")]
    Read {
        /// The offending path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed.
    #[error("failed to walk source tree")]
    Walk(#[from] ignore::Error),
}

/// Outcome for one checked file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// Path as discovered during the walk.
    pub path: PathBuf,
    /// Detected language.
    pub kind: UnitKind,
    /// Per-rule failures.
    #[serde(flatten)]
    pub report: UnitReport,
}

/// Aggregated outcome of one `check` invocation.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    /// Number of files classified and checked.
    pub files_checked: usize,
    /// Total failures across all files.
    pub failures: usize,
    /// Files with at least one failure.
    pub files: Vec<FileReport>,
}

impl RunSummary {
    /// Returns true when any file failed any check.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failures > 0
    }
}

/// Maps a path to the language its rule tables cover, if any.
fn classify(path: &Path) -> Option<UnitKind> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("f90" | "F90") => Some(UnitKind::Fortran),
        Some("c" | "h") => Some(UnitKind::C),
        _ => None,
    }
}

/// Walks `root` and returns the checkable files in sorted order.
///
/// Hidden files are included; `.gitignore` rules are honored.
fn discover_files(root: &Path) -> Result<Vec<PathBuf>, DriverError> {
    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(false).git_ignore(true);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && classify(path).is_some() {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Checks every recognized file under `path`.
pub fn run(path: &Path, constants: Constants) -> Result<RunSummary, DriverError> {
    let checker = Checker::with_constants(constants);
    let files = discover_files(path)?;

    tracing::info!("Checking {} files under {}", files.len(), path.display());

    let mut summary = RunSummary::default();

    for file_path in files {
        // classify() held during discovery, so every path here maps.
        let Some(kind) = classify(&file_path) else {
            continue;
        };

        let text = std::fs::read_to_string(&file_path).map_err(|source| DriverError::Read {
            path: file_path.clone(),
            source,
        })?;

        let report = check_file(&checker, kind, &text);
        summary.files_checked += 1;
        summary.failures += report.failures;
        if !report.is_clean() {
            summary.files.push(FileReport {
                path: file_path,
                kind,
                report,
            });
        }
    }

    Ok(summary)
}

fn check_file(checker: &Checker, kind: UnitKind, text: &str) -> UnitReport {
    let unit = SourceUnit::from_text(kind, text);

    let (line_rules, unit_rules) = tables_for(kind);

    let mut report = checker.check_unit(line_rules, &unit);
    report.extend(checker.check_unit(unit_rules, &unit));
    report.extend(checker.check_unit(UNIVERSAL_RULES, &unit));
    report
}
