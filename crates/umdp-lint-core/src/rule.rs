//! Rule descriptors.
//!
//! A rule is a pure function over one source unit's lines: it returns a
//! failure count and may record diagnostics through the [`Collector`].
//! Rules keep no state between invocations; the one cross-line scan in
//! the catalog tracks its condition in a local while it runs and discards
//! it on return.

use crate::{Collector, Constants, SourceUnit};

/// Signature shared by every rule in the catalog.
///
/// The constants and the diagnostic sink are passed explicitly so a rule
/// can be invoked in isolation, without constructing a
/// [`Checker`](crate::Checker).
pub type RuleFn = fn(&Constants, &Collector, &SourceUnit) -> usize;

/// Whether a rule counts per line or judges the whole unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Counts one failure per offending line (or per catalog entry per
    /// line). Empty input always yields zero failures.
    Line,
    /// Judges the unit as a whole; presence rules return exactly 0 or 1,
    /// and required-marker rules fail on empty input.
    Unit,
}

/// A named compliance check over a source unit's lines.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    /// Kebab-case identifier, e.g. `"go-to-other-than-9999"`.
    pub name: &'static str,
    /// Human-readable description printed in reports.
    pub description: &'static str,
    /// Line-counted or whole-unit.
    pub scope: RuleScope,
    /// The check itself.
    pub run: RuleFn,
}

impl RuleSpec {
    /// Runs this rule against a unit.
    #[must_use]
    pub fn check(&self, constants: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
        (self.run)(constants, diagnostics, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnitKind;

    fn count_lines(_: &Constants, _: &Collector, unit: &SourceUnit) -> usize {
        unit.len()
    }

    #[test]
    fn spec_dispatches_to_function() {
        let spec = RuleSpec {
            name: "count-lines",
            description: "Counts every line",
            scope: RuleScope::Line,
            run: count_lines,
        };
        let constants = Constants::new();
        let diagnostics = Collector::new();
        let unit = SourceUnit::new(UnitKind::Fortran, vec!["a".into(), "b".into()]);
        assert_eq!(spec.check(&constants, &diagnostics, &unit), 2);
    }
}
