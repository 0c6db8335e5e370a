//! Statement-level Fortran rules: I/O forms, branching, declarations.

use regex::Regex;
use std::sync::LazyLock;

use umdp_lint_core::normalize::{cleaned, strip_quoted};
use umdp_lint_core::{Collector, Constants, SourceUnit};

use crate::pattern::{build_re, build_re_exact};

static GO_TO: LazyLock<Regex> = LazyLock::new(|| build_re(r"\bGO\s*TO\s+(\d+)"));

/// Flags `GO TO` statements targeting any label other than 9999.
///
/// 9999 is the conventional error-exit label and the only permitted
/// target; the diagnostic key names the offending target, e.g.
/// `GO TO 200`.
pub fn go_to_other_than_9999(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if let Some(caps) = GO_TO.captures(&cleaned(line)) {
            let label = &caps[1];
            if label != "9999" {
                diagnostics.record(format!("GO TO {label}"));
                failures += 1;
            }
        }
    }
    failures
}

static WRITE_DEFAULT: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"\bWRITE\s*\(\s*\*\s*,\s*\*\s*\)"));

/// Flags `WRITE(*,*)` — output without an explicit format.
pub fn write_using_default_format(
    _: &Constants,
    diagnostics: &Collector,
    unit: &SourceUnit,
) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if WRITE_DEFAULT.is_match(&cleaned(line)) {
            diagnostics.record("WRITE(*,*) found");
            failures += 1;
        }
    }
    failures
}

static PRINT_STAR: LazyLock<Regex> = LazyLock::new(|| build_re(r"\bPRINT\s*\*"));

/// Flags `PRINT *` rather than `umMessage` and `umPrint`.
pub fn printstar(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if PRINT_STAR.is_match(&cleaned(line)) {
            diagnostics.record("PRINT * used");
            failures += 1;
        }
    }
    failures
}

static WRITE_6: LazyLock<Regex> = LazyLock::new(|| build_re(r"\bWRITE\s*\(\s*6\s*,"));

/// Flags `WRITE(6,...)` rather than `umMessage` and `umPrint`.
pub fn write6(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if WRITE_6.is_match(&cleaned(line)) {
            diagnostics.record("WRITE(6) used");
            failures += 1;
        }
    }
    failures
}

static PRINTSTATUS_MOD: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"\bUSE\s+printstatus_mod\b"));

/// Flags `USE printstatus_mod` instead of `umPrintMgr`.
pub fn printstatus_mod(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if PRINTSTATUS_MOD.is_match(line) {
            diagnostics.record("printstatus_mod used");
            failures += 1;
        }
    }
    failures
}

static UM_FORT_FLUSH: LazyLock<Regex> =
    LazyLock::new(|| build_re_exact(r"\bum_fort_flush\b"));

/// Flags `um_fort_flush` rather than `umPrintFlush`.
pub fn um_fort_flush(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if UM_FORT_FLUSH.is_match(line) {
            diagnostics.record("um_fort_flush used");
            failures += 1;
        }
    }
    failures
}

static READ_FIRST_ARG: LazyLock<Regex> = LazyLock::new(|| build_re(r"\bREAD\s*\(\s*([^,)]+)"));

/// Flags `READ` statements whose first argument is not an explicit
/// `UNIT=`.
///
/// A `READ` with no parenthesized argument list at all is treated as a
/// non-match, not an error.
pub fn read_unit_args(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if let Some(caps) = READ_FIRST_ARG.captures(&cleaned(line)) {
            let first_arg = caps[1].trim().to_uppercase();
            if !first_arg.starts_with("UNIT=") {
                diagnostics.record("READ without explicit UNIT=");
                failures += 1;
            }
        }
    }
    failures
}

static BARE_EXIT: LazyLock<Regex> = LazyLock::new(|| build_re(r"\bEXIT\s*$"));

/// Flags `EXIT` statements with no construct label.
pub fn exit_stmt_label(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if BARE_EXIT.is_match(cleaned(line).trim_end()) {
            diagnostics.record("unlabelled EXIT statement");
            failures += 1;
        }
    }
    failures
}

/// Modules the standard requires to be imported with `, INTRINSIC ::`.
const INTRINSIC_MODULES: &[&str] = &["ISO_C_BINDING", "ISO_FORTRAN_ENV"];

static USE_INTRINSIC_MODULE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    INTRINSIC_MODULES
        .iter()
        .map(|module| build_re(&format!(r"\bUSE\s+{module}\b")))
        .collect()
});

static INTRINSIC_KEYWORD: LazyLock<Regex> = LazyLock::new(|| build_re(r"\bINTRINSIC\b"));

/// Flags intrinsic modules `USE`d without the `INTRINSIC` specifier.
pub fn intrinsic_modules(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        let clean = cleaned(line);
        for (module, re) in INTRINSIC_MODULES.iter().zip(USE_INTRINSIC_MODULE.iter()) {
            if re.is_match(&clean) && !INTRINSIC_KEYWORD.is_match(&clean) {
                diagnostics.record(format!("intrinsic module {module} without INTRINSIC"));
                failures += 1;
            }
        }
    }
    failures
}

static DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"^\s*(?:INTEGER|REAL|LOGICAL|CHARACTER|TYPE)\b.*::\s*(.*)$"));

static UPPERCASE_NAME: LazyLock<Regex> =
    LazyLock::new(|| build_re_exact(r"\b[A-Z][A-Z0-9_]+\b"));

/// Flags fully-uppercase variable names in declarations; only lowercase
/// or CamelCase names are permitted.
///
/// Counts one failure per offending name. Single-letter names are left
/// alone.
pub fn lowercase_variable_names(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        let clean = cleaned(line);
        if let Some(caps) = DECLARATION.captures(&clean) {
            for name in UPPERCASE_NAME.find_iter(&caps[1]) {
                diagnostics.record(format!("UPPERCASE variable name: {}", name.as_str()));
                failures += 1;
            }
        }
    }
    failures
}

static CONTINUATION_START: LazyLock<Regex> = LazyLock::new(|| build_re_exact(r"^\s*&"));

/// Flags continuation lines that start with `&`; the ampersand belongs at
/// the end of the continued line.
pub fn ampersand_continuation(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if CONTINUATION_START.is_match(line) {
            diagnostics.record("continuation line starts with &");
            failures += 1;
        }
    }
    failures
}
