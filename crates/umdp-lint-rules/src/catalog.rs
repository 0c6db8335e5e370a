//! Dispatch tables: which rules apply to which units.
//!
//! Line tables hold the checks that are meaningful over any subset of a
//! file's lines (a diff hunk as much as a whole file); unit tables hold
//! the checks that only make sense over a complete file, such as the
//! presence rules. The universal table applies to every text file
//! regardless of language.

use umdp_lint_core::{RuleScope, RuleSpec, UnitKind};

use crate::{c, fortran, universal};

/// Fortran rules applicable to any line subset.
pub const FORTRAN_LINE_RULES: &[RuleSpec] = &[
    RuleSpec {
        name: "capitalised-keywords",
        description: "Lowercase Fortran keywords not permitted",
        scope: RuleScope::Line,
        run: fortran::capitalised_keywords,
    },
    RuleSpec {
        name: "openmp-sentinels-in-column-one",
        description: "OpenMP sentinels not in column one",
        scope: RuleScope::Line,
        run: fortran::openmp_sentinels_in_column_one,
    },
    RuleSpec {
        name: "unseparated-keywords",
        description: "Omitted optional space in keywords",
        scope: RuleScope::Line,
        run: fortran::unseparated_keywords,
    },
    RuleSpec {
        name: "go-to-other-than-9999",
        description: "GO TO other than 9999",
        scope: RuleScope::Line,
        run: fortran::go_to_other_than_9999,
    },
    RuleSpec {
        name: "write-using-default-format",
        description: "WRITE without format",
        scope: RuleScope::Line,
        run: fortran::write_using_default_format,
    },
    RuleSpec {
        name: "lowercase-variable-names",
        description: "Lowercase or CamelCase variable names only",
        scope: RuleScope::Line,
        run: fortran::lowercase_variable_names,
    },
    RuleSpec {
        name: "dimension-forbidden",
        description: "Use of dimension attribute",
        scope: RuleScope::Line,
        run: fortran::dimension_forbidden,
    },
    RuleSpec {
        name: "ampersand-continuation",
        description: "Continuation lines shouldn't start with &",
        scope: RuleScope::Line,
        run: fortran::ampersand_continuation,
    },
    RuleSpec {
        name: "forbidden-keywords",
        description: "Use of EQUIVALENCE or PAUSE",
        scope: RuleScope::Line,
        run: fortran::forbidden_keywords,
    },
    RuleSpec {
        name: "forbidden-operators",
        description: "Use of older form of relational operator (.GT. etc.)",
        scope: RuleScope::Line,
        run: fortran::forbidden_operators,
    },
    RuleSpec {
        name: "line-over-80chars",
        description: "Line longer than 80 characters",
        scope: RuleScope::Line,
        run: universal::line_over_80chars,
    },
    RuleSpec {
        name: "tab-detection",
        description: "Line includes tab character",
        scope: RuleScope::Line,
        run: universal::tab_detection,
    },
    RuleSpec {
        name: "printstatus-mod",
        description: "USEd printstatus_mod instead of umPrintMgr",
        scope: RuleScope::Line,
        run: fortran::printstatus_mod,
    },
    RuleSpec {
        name: "printstar",
        description: "Used PRINT rather than umMessage and umPrint",
        scope: RuleScope::Line,
        run: fortran::printstar,
    },
    RuleSpec {
        name: "write6",
        description: "Used WRITE(6) rather than umMessage and umPrint",
        scope: RuleScope::Line,
        run: fortran::write6,
    },
    RuleSpec {
        name: "um-fort-flush",
        description: "Used um_fort_flush rather than umPrintFlush",
        scope: RuleScope::Line,
        run: fortran::um_fort_flush,
    },
    RuleSpec {
        name: "svn-keyword-subst",
        description: "Used Subversion keyword substitution which is prohibited",
        scope: RuleScope::Line,
        run: fortran::svn_keyword_subst,
    },
    RuleSpec {
        name: "omp-missing-dollar",
        description: "Used !OMP instead of !$OMP",
        scope: RuleScope::Line,
        run: fortran::omp_missing_dollar,
    },
    RuleSpec {
        name: "cpp-ifdef",
        description: "Used #ifdef or #ifndef rather than #if defined() or #if !defined()",
        scope: RuleScope::Line,
        run: fortran::cpp_ifdef,
    },
    RuleSpec {
        name: "cpp-comment",
        description: "Presence of fortran comment in CPP directive",
        scope: RuleScope::Line,
        run: fortran::cpp_comment,
    },
    RuleSpec {
        name: "obsolescent-fortran-intrinsic",
        description: "Used an archaic fortran intrinsic function",
        scope: RuleScope::Line,
        run: fortran::obsolescent_fortran_intrinsic,
    },
    RuleSpec {
        name: "exit-stmt-label",
        description: "EXIT statements should be labelled",
        scope: RuleScope::Line,
        run: fortran::exit_stmt_label,
    },
    RuleSpec {
        name: "intrinsic-modules",
        description: "Intrinsic modules must be USEd with an INTRINSIC keyword specifier",
        scope: RuleScope::Line,
        run: fortran::intrinsic_modules,
    },
    RuleSpec {
        name: "read-unit-args",
        description: "READ statements should have an explicit UNIT= as their first argument",
        scope: RuleScope::Line,
        run: fortran::read_unit_args,
    },
];

/// Fortran rules that judge the complete file.
pub const FORTRAN_UNIT_RULES: &[RuleSpec] = &[
    RuleSpec {
        name: "retire-if-def",
        description: "Warning - used an if-def due for retirement",
        scope: RuleScope::Unit,
        run: universal::retire_if_def,
    },
    RuleSpec {
        name: "implicit-none",
        description: "File is missing at least one IMPLICIT NONE",
        scope: RuleScope::Unit,
        run: fortran::implicit_none,
    },
    RuleSpec {
        name: "forbidden-stop",
        description: "Never use STOP or CALL abort",
        scope: RuleScope::Unit,
        run: fortran::forbidden_stop,
    },
    RuleSpec {
        name: "intrinsic-as-variable",
        description: "Use of Fortran function as a variable name",
        scope: RuleScope::Unit,
        run: fortran::intrinsic_as_variable,
    },
    RuleSpec {
        name: "crown-copyright",
        description: "File missing crown copyright statement or agreement reference",
        scope: RuleScope::Unit,
        run: fortran::check_crown_copyright,
    },
    RuleSpec {
        name: "code-owner",
        description: "File missing correct code owner comment",
        scope: RuleScope::Unit,
        run: fortran::check_code_owner,
    },
    RuleSpec {
        name: "array-init-form",
        description: "Used (/ 1,2,3 /) form of array initialisation, rather than [1,2,3] form",
        scope: RuleScope::Unit,
        run: fortran::array_init_form,
    },
];

/// C rules applicable to any line subset.
pub const C_LINE_RULES: &[RuleSpec] = &[
    RuleSpec {
        name: "line-over-80chars",
        description: "Line longer than 80 characters",
        scope: RuleScope::Line,
        run: universal::line_over_80chars,
    },
    RuleSpec {
        name: "tab-detection",
        description: "Line includes tab character",
        scope: RuleScope::Line,
        run: universal::tab_detection,
    },
    RuleSpec {
        name: "c-integral-format-specifiers",
        description: "Fixed-width Integer format specifiers must have a space between \
                      themselves and the string delimiter (the \" character)",
        scope: RuleScope::Line,
        run: c::c_integral_format_specifiers,
    },
];

/// C rules that judge the complete file.
pub const C_UNIT_RULES: &[RuleSpec] = &[
    RuleSpec {
        name: "retire-if-def",
        description: "Warning - used an if-def due for retirement",
        scope: RuleScope::Unit,
        run: universal::retire_if_def,
    },
    RuleSpec {
        name: "c-deprecated",
        description: "Used a deprecated C identifier",
        scope: RuleScope::Unit,
        run: c::c_deprecated,
    },
    RuleSpec {
        name: "crown-copyright",
        description: "File missing crown copyright statement or agreement reference",
        scope: RuleScope::Unit,
        run: fortran::check_crown_copyright,
    },
    RuleSpec {
        name: "code-owner",
        description: "File missing correct code owner comment",
        scope: RuleScope::Unit,
        run: fortran::check_code_owner,
    },
    RuleSpec {
        name: "c-openmp-define-pair-thread-utils",
        description: "Used an _OPENMP if-def without also testing against \
                      SHUM_USE_C_OPENMP_VIA_THREAD_UTILS. (Or _OPENMP does not come first \
                      in the test.)",
        scope: RuleScope::Unit,
        run: c::c_openmp_define_pair_thread_utils,
    },
    RuleSpec {
        name: "c-openmp-define-no-combine",
        description: "Used an _OPENMP && SHUM_USE_C_OPENMP_VIA_THREAD_UTILS if-def test in \
                      a logical combination with a third macro",
        scope: RuleScope::Unit,
        run: c::c_openmp_define_no_combine,
    },
    RuleSpec {
        name: "c-openmp-define-not",
        description: "Used !defined(_OPENMP) rather than defined(_OPENMP) with #else branch",
        scope: RuleScope::Unit,
        run: c::c_openmp_define_not,
    },
    RuleSpec {
        name: "c-protect-omp-pragma",
        description: "Used an omp #pragma (or #include <omp.h>) without protecting it with \
                      an _OPENMP if-def",
        scope: RuleScope::Unit,
        run: c::c_protect_omp_pragma,
    },
    RuleSpec {
        name: "c-ifdef-defines",
        description: "Used the #ifdef style of if-def, rather than the #if defined() style",
        scope: RuleScope::Unit,
        run: c::c_ifdef_defines,
    },
    RuleSpec {
        name: "c-final-newline",
        description: "C Unit does not end with a final newline character",
        scope: RuleScope::Unit,
        run: c::c_final_newline,
    },
];

/// Rules applied to every text file regardless of language.
pub const UNIVERSAL_RULES: &[RuleSpec] = &[RuleSpec {
    name: "line-trail-whitespace",
    description: "Line includes trailing whitespace character(s)",
    scope: RuleScope::Unit,
    run: universal::line_trail_whitespace,
}];

/// Returns the line and unit tables for a unit kind.
#[must_use]
pub fn tables_for(kind: UnitKind) -> (&'static [RuleSpec], &'static [RuleSpec]) {
    match kind {
        UnitKind::Fortran => (FORTRAN_LINE_RULES, FORTRAN_UNIT_RULES),
        UnitKind::C => (C_LINE_RULES, C_UNIT_RULES),
    }
}

/// Iterates every distinct rule in the catalog, for listings.
pub fn all_rules() -> impl Iterator<Item = &'static RuleSpec> {
    let mut seen = std::collections::HashSet::new();
    FORTRAN_LINE_RULES
        .iter()
        .chain(FORTRAN_UNIT_RULES)
        .chain(C_LINE_RULES)
        .chain(C_UNIT_RULES)
        .chain(UNIVERSAL_RULES)
        .filter(move |rule| seen.insert(rule.name))
}
