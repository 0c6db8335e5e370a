//! Preprocessor and sentinel rules for Fortran source.
//!
//! These scans run on the raw line: directives and OpenMP sentinels live
//! in comment or column-sensitive positions that normalization would
//! destroy.

use regex::Regex;
use std::sync::LazyLock;

use umdp_lint_core::{Collector, Constants, SourceUnit};

use crate::pattern::build_re_exact;

static INDENTED_SENTINEL: LazyLock<Regex> = LazyLock::new(|| build_re_exact(r"^\s+!\$OMP"));

/// Flags OpenMP sentinels that are not in column one.
pub fn openmp_sentinels_in_column_one(
    _: &Constants,
    diagnostics: &Collector,
    unit: &SourceUnit,
) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if INDENTED_SENTINEL.is_match(line) {
            diagnostics.record("OpenMP sentinel not in column 1");
            failures += 1;
        }
    }
    failures
}

static BARE_OMP: LazyLock<Regex> = LazyLock::new(|| build_re_exact(r"!\s*OMP\b"));

/// Flags `!OMP` where the sentinel `!$OMP` was intended.
pub fn omp_missing_dollar(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if BARE_OMP.is_match(line) && !line.contains("!$OMP") {
            diagnostics.record("!OMP without $");
            failures += 1;
        }
    }
    failures
}

static IFDEF_STYLE: LazyLock<Regex> = LazyLock::new(|| build_re_exact(r"^\s*#\s*ifn?def\b"));

/// Flags `#ifdef`/`#ifndef` rather than `#if defined()` /
/// `#if !defined()`.
pub fn cpp_ifdef(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if IFDEF_STYLE.is_match(line) {
            diagnostics.record("#ifdef/#ifndef used");
            failures += 1;
        }
    }
    failures
}

static DIRECTIVE_WITH_BANG: LazyLock<Regex> = LazyLock::new(|| build_re_exact(r"^\s*#.*!"));

/// Flags Fortran comments inside CPP directives.
pub fn cpp_comment(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if DIRECTIVE_WITH_BANG.is_match(line) {
            diagnostics.record("Fortran comment in CPP directive");
            failures += 1;
        }
    }
    failures
}

static SVN_KEYWORD: LazyLock<Regex> = LazyLock::new(|| build_re_exact(r"\$\w+\$"));

/// Flags Subversion keyword substitution markers (`$Id$` etc.), which
/// are prohibited.
pub fn svn_keyword_subst(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if SVN_KEYWORD.is_match(line) {
            diagnostics.record("SVN keyword substitution");
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
        let unit = SourceUnit::new(
            UnitKind::Fortran,
            lines.iter().map(|s| (*s).to_owned()).collect(),
        );
        rule(&constants, &diagnostics, &unit)
    }

    #[test]
    fn indented_sentinel_is_flagged() {
        assert_eq!(run(openmp_sentinels_in_column_one, &["  !$OMP PARALLEL"]), 1);
        assert_eq!(run(openmp_sentinels_in_column_one, &["!$OMP PARALLEL"]), 0);
    }

    #[test]
    fn omp_without_dollar_is_flagged() {
        assert_eq!(run(omp_missing_dollar, &["!OMP PARALLEL"]), 1);
        assert_eq!(run(omp_missing_dollar, &["!$OMP PARALLEL"]), 0);
    }

    #[test]
    fn ifdef_and_ifndef_styles_are_flagged() {
        assert_eq!(run(cpp_ifdef, &["#ifdef FOO", "# ifndef BAR"]), 2);
        assert_eq!(run(cpp_ifdef, &["#if defined(FOO)"]), 0);
    }

    #[test]
    fn fortran_comment_in_directive_is_flagged() {
        assert_eq!(run(cpp_comment, &["#if defined(FOO) ! guard"]), 1);
        assert_eq!(run(cpp_comment, &["#if defined(FOO)"]), 0);
    }

    #[test]
    fn svn_keyword_markers_are_flagged() {
        assert_eq!(run(svn_keyword_subst, &["! $Id$"]), 1);
        assert_eq!(run(svn_keyword_subst, &["! price is $5 or $10"]), 0);
    }
}
