//! Keyword and intrinsic rules.
//!
//! Casing checks deliberately run on the original (unnormalized) case of
//! each word — after quote and comment stripping — since lowercase usage
//! is exactly what they detect.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use umdp_lint_core::normalize::{cleaned, strip_quoted};
use umdp_lint_core::{Collector, Constants, SourceUnit};

use crate::pattern::{build_re, WORD};

/// Flags Fortran keywords written in lower or mixed case.
///
/// One failure per offending word occurrence; the diagnostic key names
/// the keyword as written lower-cased, e.g. `lowercase keyword: do`.
pub fn capitalised_keywords(
    constants: &Constants,
    diagnostics: &Collector,
    unit: &SourceUnit,
) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        let clean = cleaned(line);
        for word in WORD.find_iter(&clean) {
            let word = word.as_str();
            if constants.is_fortran_keyword(&word.to_uppercase())
                && word.chars().any(|c| c.is_ascii_lowercase())
            {
                diagnostics.record(format!("lowercase keyword: {}", word.to_lowercase()));
                failures += 1;
            }
        }
    }
    failures
}

/// Two-word keywords whose optional space must not be omitted.
const UNSEPARATED_FORMS: &[&str] = &[
    "ELSEIF",
    "ENDDO",
    "ENDIF",
    "ENDTYPE",
    "ENDMODULE",
    "ENDFUNCTION",
    "ENDSUBROUTINE",
];

static UNSEPARATED_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    UNSEPARATED_FORMS
        .iter()
        .map(|form| build_re(&format!(r"\b{form}\b")))
        .collect()
});

/// Flags omitted optional spaces in keywords (`ENDIF`, `ELSEIF`, ...).
///
/// Counts once per catalog form per line.
pub fn unseparated_keywords(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        let clean = strip_quoted(line);
        for re in UNSEPARATED_RES.iter() {
            if re.is_match(&clean) {
                diagnostics.record(format!("unseparated keyword in line: {}", line.trim()));
                failures += 1;
            }
        }
    }
    failures
}

static FORBIDDEN_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"\b(EQUIVALENCE|PAUSE)\b"));

/// Flags use of `EQUIVALENCE` or `PAUSE`.
pub fn forbidden_keywords(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if FORBIDDEN_KEYWORD.is_match(&cleaned(line)) {
            diagnostics.record("forbidden keyword");
            failures += 1;
        }
    }
    failures
}

/// Older relational operator spellings superseded by `>`, `>=`, etc.
const OLD_OPERATORS: &[&str] = &[".GT.", ".GE.", ".LT.", ".LE.", ".EQ.", ".NE."];

/// Flags the older form of relational operators (`.GT.` etc.).
///
/// Counts once per operator per line.
pub fn forbidden_operators(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        let clean = cleaned(line).to_uppercase();
        for op in OLD_OPERATORS {
            if clean.contains(op) {
                diagnostics.record(format!("old operator {op}"));
                failures += 1;
            }
        }
    }
    failures
}

/// Flags archaic intrinsic functions (`ALOG`, `SNGL`, ...).
///
/// Counts once per catalog entry per line, so a line calling two distinct
/// obsolescent intrinsics scores two failures.
pub fn obsolescent_fortran_intrinsic(
    constants: &Constants,
    diagnostics: &Collector,
    unit: &SourceUnit,
) -> usize {
    let obsolescent: HashSet<&str> = constants.obsolescent_intrinsics().collect();
    let mut failures = 0;
    for line in unit.iter() {
        let clean = cleaned(line);
        let mut seen: HashSet<String> = HashSet::new();
        for word in WORD.find_iter(&clean) {
            let upper = word.as_str().to_uppercase();
            if obsolescent.contains(upper.as_str()) && seen.insert(upper.clone()) {
                diagnostics.record(format!("obsolescent intrinsic: {upper}"));
                failures += 1;
            }
        }
    }
    failures
}

static DIMENSION: LazyLock<Regex> = LazyLock::new(|| build_re(r"\bDIMENSION\b"));

/// Flags use of the `DIMENSION` attribute.
pub fn dimension_forbidden(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if DIMENSION.is_match(&cleaned(line)) {
            diagnostics.record("DIMENSION attribute used");
            failures += 1;
        }
    }
    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use umdp_lint_core::UnitKind;

    fn unit(lines: &[&str]) -> SourceUnit {
        SourceUnit::new(
            UnitKind::Fortran,
            lines.iter().map(|s| (*s).to_owned()).collect(),
        )
    }

    fn run(rule: umdp_lint_core::RuleFn, lines: &[&str]) -> (usize, Vec<String>) {
        let constants = Constants::new();
        let diagnostics = Collector::new();
        let count = rule(&constants, &diagnostics, &unit(lines));
        let keys = diagnostics.snapshot().into_keys().collect();
        (count, keys)
    }

    #[test]
    fn lowercase_do_is_flagged() {
        let (count, keys) = run(capitalised_keywords, &["do i = 1, 10"]);
        assert!(count >= 1);
        assert!(keys.iter().any(|k| k.contains("do")));
    }

    #[test]
    fn uppercase_do_passes() {
        let (count, _) = run(capitalised_keywords, &["DO I = 1, 10"]);
        assert_eq!(count, 0);
    }

    #[test]
    fn keywords_inside_strings_are_ignored() {
        let (count, _) = run(capitalised_keywords, &[r#"WRITE(*,*) "do not stop""#]);
        assert_eq!(count, 0);
    }

    #[test]
    fn keywords_inside_comments_are_ignored() {
        let (count, _) = run(capitalised_keywords, &["X = 1  ! do this later"]);
        assert_eq!(count, 0);
    }

    #[test]
    fn unseparated_endif_is_flagged() {
        let (count, _) = run(unseparated_keywords, &["ENDIF"]);
        assert_eq!(count, 1);
        let (count, _) = run(unseparated_keywords, &["END IF"]);
        assert_eq!(count, 0);
    }

    #[test]
    fn equivalence_and_pause_are_forbidden() {
        let (count, _) = run(forbidden_keywords, &["EQUIVALENCE (A, B)", "PAUSE"]);
        assert_eq!(count, 2);
    }

    #[test]
    fn old_operators_count_per_entry_per_line() {
        let (count, keys) = run(forbidden_operators, &["IF (x .GT. y .AND. y .LT. z) THEN"]);
        assert_eq!(count, 2);
        assert!(keys.contains(&"old operator .GT.".to_owned()));
        assert!(keys.contains(&"old operator .LT.".to_owned()));
    }

    #[test]
    fn lowercase_old_operator_still_matches() {
        let (count, _) = run(forbidden_operators, &["IF (x .gt. y) THEN"]);
        assert_eq!(count, 1);
    }

    #[test]
    fn two_distinct_intrinsics_score_two() {
        let (count, keys) = run(obsolescent_fortran_intrinsic, &["x = ALOG(y) + SNGL(z)"]);
        assert_eq!(count, 2);
        assert!(keys.contains(&"obsolescent intrinsic: ALOG".to_owned()));
        assert!(keys.contains(&"obsolescent intrinsic: SNGL".to_owned()));
    }

    #[test]
    fn repeated_intrinsic_scores_once_per_line() {
        let (count, _) = run(obsolescent_fortran_intrinsic, &["x = ALOG(y) * ALOG(z)"]);
        assert_eq!(count, 1);
    }

    #[test]
    fn dimension_attribute_is_flagged() {
        let (count, _) = run(dimension_forbidden, &["INTEGER, DIMENSION(10) :: arr"]);
        assert_eq!(count, 1);
    }

    #[test]
    fn empty_unit_passes_every_line_rule() {
        for rule in [
            capitalised_keywords as umdp_lint_core::RuleFn,
            unseparated_keywords,
            forbidden_keywords,
            forbidden_operators,
            obsolescent_fortran_intrinsic,
            dimension_forbidden,
        ] {
            let (count, _) = run(rule, &[]);
            assert_eq!(count, 0);
        }
    }
}
