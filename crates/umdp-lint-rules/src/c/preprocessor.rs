//! OpenMP and if-def discipline for C preprocessor directives.
//!
//! OpenMP-specific C code must compile out cleanly when OpenMP is
//! disabled, and the `_OPENMP` test must always be paired with
//! `SHUM_USE_C_OPENMP_VIA_THREAD_UTILS` so thread-utils builds stay
//! consistent.

use regex::Regex;
use std::sync::LazyLock;

use umdp_lint_core::{Collector, Constants, SourceUnit};

use crate::pattern::build_re_exact;

const THREAD_UTILS_MACRO: &str = "SHUM_USE_C_OPENMP_VIA_THREAD_UTILS";

static OPENMP_IF: LazyLock<Regex> = LazyLock::new(|| build_re_exact(r"#\s*if.*_OPENMP"));

/// Flags an `_OPENMP` if-def that does not also test
/// `SHUM_USE_C_OPENMP_VIA_THREAD_UTILS`.
pub fn c_openmp_define_pair_thread_utils(
    _: &Constants,
    diagnostics: &Collector,
    unit: &SourceUnit,
) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if OPENMP_IF.is_match(line) && !line.contains(THREAD_UTILS_MACRO) {
            diagnostics.record(format!("_OPENMP without {THREAD_UTILS_MACRO}"));
            failures += 1;
        }
    }
    failures
}

static COMBINED_TRAILING: LazyLock<Regex> = LazyLock::new(|| {
    build_re_exact(r"_OPENMP.*&&.*SHUM_USE_C_OPENMP_VIA_THREAD_UTILS.*&&")
});

static COMBINED_LEADING: LazyLock<Regex> = LazyLock::new(|| {
    build_re_exact(r"&&.*_OPENMP.*&&.*SHUM_USE_C_OPENMP_VIA_THREAD_UTILS")
});

/// Flags the `_OPENMP && SHUM_USE_C_OPENMP_VIA_THREAD_UTILS` pair tested
/// in logical combination with a third macro.
pub fn c_openmp_define_no_combine(
    _: &Constants,
    diagnostics: &Collector,
    unit: &SourceUnit,
) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if COMBINED_TRAILING.is_match(line) || COMBINED_LEADING.is_match(line) {
            diagnostics.record("OpenMP defines combined with third macro");
            failures += 1;
        }
    }
    failures
}

static NOT_DEFINED_OPENMP: LazyLock<Regex> =
    LazyLock::new(|| build_re_exact(r"!\s*defined\s*\(\s*_OPENMP\s*\)"));

/// Flags `!defined(_OPENMP)`; use `defined(_OPENMP)` with an `#else`
/// branch instead.
pub fn c_openmp_define_not(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if NOT_DEFINED_OPENMP.is_match(line) {
            diagnostics.record("!defined(_OPENMP) used");
            failures += 1;
        }
    }
    failures
}

static ENDIF: LazyLock<Regex> = LazyLock::new(|| build_re_exact(r"#\s*endif"));
static OMP_PRAGMA: LazyLock<Regex> = LazyLock::new(|| build_re_exact(r"#\s*pragma\s+omp"));
static OMP_INCLUDE: LazyLock<Regex> =
    LazyLock::new(|| build_re_exact(r"#\s*include\s*<omp\.h>"));

/// Flags `#pragma omp` and `#include <omp.h>` lines that are not inside
/// an `_OPENMP` if-def guard.
///
/// The only cross-line scan in the catalog: a single boolean tracks
/// whether the scan is currently inside a guard block, entering on an
/// `#if ... _OPENMP` line and leaving on the matching `#endif`. The flag
/// is local to one call and discarded on return.
pub fn c_protect_omp_pragma(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    let mut guarded = false;

    for line in unit.iter() {
        if OPENMP_IF.is_match(line) {
            guarded = true;
        } else if ENDIF.is_match(line) {
            guarded = false;
        } else if (OMP_PRAGMA.is_match(line) || OMP_INCLUDE.is_match(line)) && !guarded {
            diagnostics.record("unprotected OMP pragma/include");
            failures += 1;
        }
    }
    failures
}

static IFDEF_ONLY: LazyLock<Regex> = LazyLock::new(|| build_re_exact(r"^\s*#\s*ifdef\b"));

/// Flags the `#ifdef` style of if-def rather than the `#if defined()`
/// style.
pub fn c_ifdef_defines(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if IFDEF_ONLY.is_match(line) {
            diagnostics.record("#ifdef used instead of #if defined()");
            failures += 1;
        }
    }
    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use umdp_lint_core::UnitKind;

    fn run(rule: umdp_lint_core::RuleFn, lines: &[&str]) -> usize {
        let constants = Constants::new();
        let diagnostics = Collector::new();
        let unit = SourceUnit::new(UnitKind::C, lines.iter().map(|s| (*s).to_owned()).collect());
        rule(&constants, &diagnostics, &unit)
    }

    #[test]
    fn unpaired_openmp_ifdef_is_flagged() {
        assert_eq!(
            run(c_openmp_define_pair_thread_utils, &["#if defined(_OPENMP)"]),
            1
        );
        assert_eq!(
            run(
                c_openmp_define_pair_thread_utils,
                &["#if defined(_OPENMP) && defined(SHUM_USE_C_OPENMP_VIA_THREAD_UTILS)"],
            ),
            0
        );
    }

    #[test]
    fn third_macro_combination_is_flagged() {
        assert_eq!(
            run(
                c_openmp_define_no_combine,
                &["#if defined(_OPENMP) && defined(SHUM_USE_C_OPENMP_VIA_THREAD_UTILS) && defined(EXTRA)"],
            ),
            1
        );
        assert_eq!(
            run(
                c_openmp_define_no_combine,
                &["#if defined(_OPENMP) && defined(SHUM_USE_C_OPENMP_VIA_THREAD_UTILS)"],
            ),
            0
        );
    }

    #[test]
    fn negated_openmp_test_is_flagged() {
        assert_eq!(run(c_openmp_define_not, &["#if !defined(_OPENMP)"]), 1);
        assert_eq!(run(c_openmp_define_not, &["#if defined(_OPENMP)"]), 0);
    }

    // First pragma is unguarded, second sits inside the guard block.
    #[test]
    fn pragma_outside_guard_is_flagged_once() {
        let lines = [
            "#pragma omp parallel",
            "#if defined(_OPENMP)",
            "#pragma omp parallel",
            "#endif",
        ];
        assert_eq!(run(c_protect_omp_pragma, &lines), 1);
    }

    #[test]
    fn omp_include_requires_guard_too() {
        assert_eq!(run(c_protect_omp_pragma, &["#include <omp.h>"]), 1);
        assert_eq!(
            run(
                c_protect_omp_pragma,
                &["#if defined(_OPENMP)", "#include <omp.h>", "#endif"],
            ),
            0
        );
    }

    #[test]
    fn guard_state_does_not_leak_past_endif() {
        let lines = [
            "#if defined(_OPENMP)",
            "#endif",
            "#pragma omp parallel",
        ];
        assert_eq!(run(c_protect_omp_pragma, &lines), 1);
    }

    #[test]
    fn ifdef_style_is_flagged() {
        assert_eq!(run(c_ifdef_defines, &["#ifdef FOO"]), 1);
        assert_eq!(run(c_ifdef_defines, &["#if defined(FOO)"]), 0);
    }
}
