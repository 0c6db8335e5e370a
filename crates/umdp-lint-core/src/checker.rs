//! Checker facade: owns the constant sets and the diagnostic collector.

use tracing::debug;

use crate::{Collector, Constants, FailedCheck, RuleSpec, SourceUnit, UnitReport};

/// Coordinates rule execution against the shared [`Constants`] and
/// [`Collector`].
///
/// Construction is cheap and side-effect-free beyond building the
/// constant sets, so one instance per process, reused across files, is
/// the intended pattern. The collector is shared for the lifetime of the
/// instance: callers needing per-file isolation must either
/// [`reset`](Self::reset) between files, serialize
/// reset → check → snapshot as one unit at the call site, or construct
/// one checker per concurrent unit of work.
#[derive(Debug, Default)]
pub struct Checker {
    constants: Constants,
    diagnostics: Collector,
}

impl Checker {
    /// Creates a checker with the standard constant sets and an empty
    /// collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a checker around caller-supplied constants (e.g. with a
    /// retired if-def list).
    #[must_use]
    pub fn with_constants(constants: Constants) -> Self {
        Self {
            constants,
            diagnostics: Collector::new(),
        }
    }

    /// The constant sets rules read from.
    #[must_use]
    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    /// The shared diagnostic collector.
    #[must_use]
    pub fn diagnostics(&self) -> &Collector {
        &self.diagnostics
    }

    /// Clears the diagnostic collector. Call between files.
    pub fn reset(&self) {
        self.diagnostics.reset();
    }

    /// Runs one rule against a unit, returning its failure count.
    ///
    /// Does not touch previously recorded diagnostics; pair with
    /// [`reset`](Self::reset) and [`Collector::snapshot`] as needed.
    #[must_use]
    pub fn check(&self, rule: &RuleSpec, unit: &SourceUnit) -> usize {
        let failures = rule.check(&self.constants, &self.diagnostics, unit);
        debug!(rule = rule.name, failures, "rule checked");
        failures
    }

    /// Runs a rule table over one unit in sequence, resetting the
    /// collector before each rule and folding its diagnostic keys into
    /// the failed-check description.
    ///
    /// This is the serialized reset → check → snapshot unit described in
    /// the isolation contract; do not interleave it with other checks on
    /// the same instance from another thread.
    #[must_use]
    pub fn check_unit(&self, rules: &[RuleSpec], unit: &SourceUnit) -> UnitReport {
        let mut report = UnitReport::new();

        for rule in rules {
            self.diagnostics.reset();
            let count = self.check(rule, unit);
            if count == 0 {
                continue;
            }

            let snapshot = self.diagnostics.snapshot();
            let detail = if snapshot.is_empty() {
                None
            } else {
                Some(
                    snapshot
                        .keys()
                        .map(String::as_str)
                        .collect::<Vec<_>>()
                        .join(", "),
                )
            };

            report.failures += count;
            report.failed.push(FailedCheck {
                name: rule.description.to_owned(),
                detail,
                count,
            });
        }

        report
    }
}
