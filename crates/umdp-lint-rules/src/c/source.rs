//! C source-text rules: format specifiers, deprecated identifiers, file
//! termination.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use umdp_lint_core::{Collector, Constants, SourceUnit};

use crate::pattern::{build_re_exact, WORD};

static TIGHT_FORMAT_SPECIFIER: LazyLock<Regex> =
    LazyLock::new(|| build_re_exact(r#"%\d+[dioxX]""#));

/// Flags fixed-width integral format specifiers butted against the
/// closing string delimiter, e.g. `printf("%10d", x)`.
pub fn c_integral_format_specifiers(
    _: &Constants,
    diagnostics: &Collector,
    unit: &SourceUnit,
) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if TIGHT_FORMAT_SPECIFIER.is_match(line) {
            diagnostics.record("missing space in format specifier");
            failures += 1;
        }
    }
    failures
}

/// Flags deprecated C identifiers (`gets`, `tmpnam`, ...).
///
/// Counts once per catalog entry per line; matching is case-sensitive
/// since C identifiers are.
pub fn c_deprecated(constants: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let deprecated: HashSet<&str> = constants.deprecated_c_identifiers().collect();
    let mut failures = 0;
    for line in unit.iter() {
        let mut seen: HashSet<&str> = HashSet::new();
        for word in WORD.find_iter(line) {
            let word = word.as_str();
            if let Some(&id) = deprecated.get(word) {
                if seen.insert(id) {
                    diagnostics.record(format!("deprecated C identifier: {id}"));
                    failures += 1;
                }
            }
        }
    }
    failures
}

/// Requires the unit to end with a final newline character.
///
/// An empty unit passes; there is nothing to terminate.
pub fn c_final_newline(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    if !unit.is_empty() && !unit.has_final_newline() {
        diagnostics.record("missing final newline");
        return 1;
    }
    0
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
    fn tight_format_specifier_is_flagged() {
        assert_eq!(
            run(c_integral_format_specifiers, &[r#"printf("%10d", x);"#]),
            1
        );
        assert_eq!(
            run(c_integral_format_specifiers, &[r#"printf("%10d ", x);"#]),
            0
        );
    }

    #[test]
    fn deprecated_identifier_is_flagged() {
        assert_eq!(run(c_deprecated, &["gets(buffer);"]), 1);
        assert_eq!(run(c_deprecated, &["fgets(buffer, n, stdin);"]), 0);
    }

    #[test]
    fn deprecated_match_is_case_sensitive() {
        assert_eq!(run(c_deprecated, &["GETS(buffer);"]), 0);
    }

    #[test]
    fn two_deprecated_identifiers_on_one_line_score_two() {
        assert_eq!(run(c_deprecated, &["tmpnam(a); mktemp(b);"]), 2);
    }

    #[test]
    fn missing_final_newline_is_flagged() {
        let constants = Constants::new();
        let diagnostics = Collector::new();

        let unterminated = SourceUnit::from_text(UnitKind::C, "int x;");
        assert_eq!(c_final_newline(&constants, &diagnostics, &unterminated), 1);

        let terminated = SourceUnit::from_text(UnitKind::C, "int x;\n");
        assert_eq!(c_final_newline(&constants, &diagnostics, &terminated), 0);

        let empty = SourceUnit::from_text(UnitKind::C, "");
        assert_eq!(c_final_newline(&constants, &diagnostics, &empty), 0);
    }
}
