//! Rules that apply to every source unit regardless of language.

use regex::Regex;
use std::sync::LazyLock;

use umdp_lint_core::{Collector, Constants, SourceUnit};

use crate::pattern::build_re_exact;

/// Flags lines longer than 80 characters, ignoring trailing whitespace.
pub fn line_over_80chars(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if line.trim_end().chars().count() > 80 {
            diagnostics.record("line too long");
            failures += 1;
        }
    }
    failures
}

/// Flags lines containing a tab character.
pub fn tab_detection(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if line.contains('\t') {
            diagnostics.record("tab character found");
            failures += 1;
        }
    }
    failures
}

/// Flags lines ending in whitespace.
pub fn line_trail_whitespace(_: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let mut failures = 0;
    for line in unit.iter() {
        if !line.is_empty() && line.len() != line.trim_end().len() {
            diagnostics.record("trailing whitespace");
            failures += 1;
        }
    }
    failures
}

static CONDITIONAL_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| build_re_exact(r"^\s*#\s*(?:if|ifdef|ifndef|elif)\b"));

/// Flags conditional-compilation directives that test a macro due for
/// retirement.
///
/// The retired set comes from [`Constants::retired_ifdefs`] and is empty
/// by default, so this rule passes everywhere until a project supplies
/// its own list. Counts once per retired name per line.
pub fn retire_if_def(constants: &Constants, diagnostics: &Collector, unit: &SourceUnit) -> usize {
    let retired = constants.retired_ifdefs();
    if retired.is_empty() {
        return 0;
    }

    let mut failures = 0;
    for line in unit.iter() {
        if !CONDITIONAL_DIRECTIVE.is_match(line) {
            continue;
        }
        for name in retired {
            let bounded = crate::pattern::WORD
                .find_iter(line)
                .any(|m| m.as_str() == name);
            if bounded {
                diagnostics.record(format!("retired if-def: {name}"));
                failures += 1;
            }
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

    #[test]
    fn long_line_is_flagged() {
        let long = "x".repeat(81);
        let constants = Constants::new();
        let diagnostics = Collector::new();
        assert_eq!(
            line_over_80chars(&constants, &diagnostics, &unit(&[&long])),
            1
        );
    }

    #[test]
    fn trailing_whitespace_does_not_count_toward_length() {
        let padded = format!("{}{}", "x".repeat(78), " ".repeat(20));
        let constants = Constants::new();
        let diagnostics = Collector::new();
        assert_eq!(
            line_over_80chars(&constants, &diagnostics, &unit(&[&padded])),
            0
        );
    }

    #[test]
    fn tab_is_flagged() {
        let constants = Constants::new();
        let diagnostics = Collector::new();
        assert_eq!(
            tab_detection(&constants, &diagnostics, &unit(&["a\tb", "ab"])),
            1
        );
    }

    #[test]
    fn trailing_whitespace_is_flagged() {
        let constants = Constants::new();
        let diagnostics = Collector::new();
        assert_eq!(
            line_trail_whitespace(&constants, &diagnostics, &unit(&["clean", "padded  ", ""])),
            1
        );
    }

    #[test]
    fn retired_ifdef_matches_only_supplied_names() {
        let constants = Constants::new().with_retired_ifdefs(["OLD_MACRO"]);
        let diagnostics = Collector::new();
        let lines = unit(&[
            "#if defined(OLD_MACRO)",
            "#if defined(CURRENT_MACRO)",
            "OLD_MACRO in plain text",
        ]);
        assert_eq!(retire_if_def(&constants, &diagnostics, &lines), 1);
        assert!(diagnostics
            .snapshot()
            .contains_key("retired if-def: OLD_MACRO"));
    }

    #[test]
    fn retired_ifdef_passes_with_default_empty_set() {
        let constants = Constants::new();
        let diagnostics = Collector::new();
        assert_eq!(
            retire_if_def(&constants, &diagnostics, &unit(&["#ifdef ANYTHING"])),
            0
        );
    }
}
