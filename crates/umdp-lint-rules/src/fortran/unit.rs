//! Whole-unit Fortran rules: presence checks and file-level scans.

use regex::Regex;
use std::sync::LazyLock;

use umdp_lint_core::normalize::{cleaned, strip_quoted};
use umdp_lint_core::{Collector, Constants, SourceUnit};

use crate::pattern::{build_re, build_re_exact};

static IMPLICIT_NONE: LazyLock<Regex> = LazyLock::new(|| build_re(r"\bIMPLICIT\s+NONE\b"));

/// Requires at least one `IMPLICIT NONE` in the unit.
///
/// Presence anywhere passes; absence yields exactly one failure, so an
/// empty unit fails.
pub fn implicit_none(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    if unit.iter().any(|line| IMPLICIT_NONE.is_match(line)) {
        return 0;
    }
    diagnostics.record("missing IMPLICIT NONE");
    1
}

static STOP_OR_ABORT: LazyLock<Regex> = LazyLock::new(|| build_re(r"\b(STOP|CALL\s+abort)\b"));

/// Flags `STOP` and `CALL abort`; error handling must go through the
/// model's error-reporting routine.
pub fn forbidden_stop(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if STOP_OR_ABORT.is_match(&cleaned(line)) {
            diagnostics.record("STOP or CALL abort used");
            failures += 1;
        }
    }
    failures
}

static INTRINSIC_DECLARED: LazyLock<Regex> = LazyLock::new(|| {
    build_re(r"^\s*(?:INTEGER|REAL|LOGICAL|CHARACTER)\b.*::\s*(?:SIN|COS|LOG|EXP)\b")
});

/// Flags declarations that reuse an intrinsic function name as a
/// variable.
pub fn intrinsic_as_variable(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if INTRINSIC_DECLARED.is_match(&strip_quoted(line)) {
            diagnostics.record("intrinsic function used as variable");
            failures += 1;
        }
    }
    failures
}

/// Requires a crown copyright statement or agreement reference somewhere
/// in the unit. Absence yields exactly one failure regardless of unit
/// length; an empty unit fails.
pub fn check_crown_copyright(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let present = unit
        .iter()
        .any(|line| line.contains("Crown copyright") || line.contains("COPYRIGHT"));
    if present {
        return 0;
    }
    diagnostics.record("missing crown copyright");
    1
}

/// Checks for the code-owner comment.
///
/// Advisory only: a missing comment is recorded as a diagnostic but never
/// contributes to the failure count.
pub fn check_code_owner(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let present = unit
        .iter()
        .any(|line| line.to_lowercase().contains("code owner"));
    if !present {
        diagnostics.record("missing code owner comment");
    }
    0
}

static OLD_ARRAY_FORM: LazyLock<Regex> = LazyLock::new(|| build_re_exact(r"\(/.*?/\)"));

/// Flags the `(/ 1,2,3 /)` form of array initialisation rather than the
/// `[1,2,3]` form.
pub fn array_init_form(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if OLD_ARRAY_FORM.is_match(&strip_quoted(line)) {
            diagnostics.record("old array initialization form (/ /)");
            failures += 1;
        }
    }
    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use umdp_lint_core::UnitKind;

    fn run(rule: umdp_lint_core::RuleFn, lines: &[&str]) -> (usize, Vec<String>) {
        let constants = Constants::new();
        let diagnostics = Collector::new();
        let unit = SourceUnit::new(
            UnitKind::Fortran,
            lines.iter().map(|s| (*s).to_owned()).collect(),
        );
        let count = rule(&constants, &diagnostics, &unit);
        (count, diagnostics.snapshot().into_keys().collect())
    }

    #[test]
    fn implicit_none_presence_passes() {
        let (count, _) = run(
            implicit_none,
            &["PROGRAM test", "IMPLICIT NONE", "END PROGRAM"],
        );
        assert_eq!(count, 0);
    }

    #[test]
    fn implicit_none_absence_fails_once() {
        let (count, keys) = run(implicit_none, &["PROGRAM test", "INTEGER :: i", "END"]);
        assert_eq!(count, 1);
        assert_eq!(keys, ["missing IMPLICIT NONE"]);
    }

    #[test]
    fn implicit_none_fails_on_empty_unit() {
        let (count, _) = run(implicit_none, &[]);
        assert_eq!(count, 1);
    }

    #[test]
    fn stop_and_call_abort_are_flagged() {
        let (count, _) = run(forbidden_stop, &["STOP", "CALL abort"]);
        assert_eq!(count, 2);
    }

    #[test]
    fn stop_inside_string_passes() {
        let (count, _) = run(forbidden_stop, &[r#"msg = "full STOP""#]);
        assert_eq!(count, 0);
    }

    #[test]
    fn intrinsic_name_declared_as_variable_is_flagged() {
        let (count, _) = run(intrinsic_as_variable, &["REAL :: SIN"]);
        assert_eq!(count, 1);
        let (count, _) = run(intrinsic_as_variable, &["REAL :: sine_value"]);
        assert_eq!(count, 0);
    }

    #[test]
    fn crown_copyright_presence_passes() {
        let (count, _) = run(
            check_crown_copyright,
            &["! (C) Crown copyright Met Office."],
        );
        assert_eq!(count, 0);
    }

    #[test]
    fn crown_copyright_absence_fails_once_even_on_empty() {
        let (count, _) = run(check_crown_copyright, &[]);
        assert_eq!(count, 1);
        let (count, _) = run(check_crown_copyright, &["PROGRAM x", "END"]);
        assert_eq!(count, 1);
    }

    #[test]
    fn code_owner_is_advisory_only() {
        let (count, keys) = run(check_code_owner, &["PROGRAM x"]);
        assert_eq!(count, 0);
        assert_eq!(keys, ["missing code owner comment"]);

        let (count, keys) = run(check_code_owner, &["! Code Owner: someone"]);
        assert_eq!(count, 0);
        assert!(keys.is_empty());
    }

    #[test]
    fn old_array_init_form_is_flagged() {
        let (count, _) = run(array_init_form, &["x = (/ 1, 2, 3 /)"]);
        assert_eq!(count, 1);
        let (count, _) = run(array_init_form, &["x = [1, 2, 3]"]);
        assert_eq!(count, 0);
    }
}
