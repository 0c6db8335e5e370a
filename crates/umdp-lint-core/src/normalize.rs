//! Line normalization applied before pattern matching.
//!
//! Most rules must not fire on text inside string literals or trailing
//! comments. Rules therefore run their patterns against
//! `strip_comment(&strip_quoted(line))` rather than the raw line, except
//! where the raw text is the point (tab detection, OpenMP sentinels,
//! preprocessor directives).

use regex::Regex;
use std::sync::LazyLock;

static DOUBLE_QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""[^"]*""#).unwrap_or_else(|_| unreachable!("pattern is a verified constant"))
});

static SINGLE_QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"'[^']*'").unwrap_or_else(|_| unreachable!("pattern is a verified constant"))
});

/// Removes single- and double-quoted string literals from a line.
///
/// Matching is non-greedy to the next like quote on the same line;
/// literals spanning multiple lines are not handled. Pure; always
/// allocates a new string.
#[must_use]
pub fn strip_quoted(line: &str) -> String {
    let line = DOUBLE_QUOTED.replace_all(line, "");
    SINGLE_QUOTED.replace_all(&line, "").into_owned()
}

/// Truncates a line at its first `!` (Fortran trailing comment).
///
/// Callers strip quoted strings first so a `!` inside a literal is not
/// mistaken for a comment start.
#[must_use]
pub fn strip_comment(line: &str) -> String {
    match line.find('!') {
        Some(pos) => line[..pos].to_owned(),
        None => line.to_owned(),
    }
}

/// Convenience composition: quotes stripped, then comment stripped.
#[must_use]
pub fn cleaned(line: &str) -> String {
    strip_comment(&strip_quoted(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_double_quoted_content() {
        assert_eq!(strip_quoted(r#"WRITE(*,*) "hello""#), "WRITE(*,*) ");
    }

    #[test]
    fn strips_single_quoted_content() {
        assert_eq!(strip_quoted("PRINT *, 'a string'"), "PRINT *, ");
    }

    #[test]
    fn leaves_unquoted_text_alone() {
        assert_eq!(strip_quoted("DO i = 1, 10"), "DO i = 1, 10");
    }

    #[test]
    fn strips_comment_at_first_bang() {
        assert_eq!(strip_comment("x = 1  ! set x"), "x = 1  ");
    }

    #[test]
    fn comment_free_line_is_unchanged() {
        assert_eq!(strip_comment("x = 1"), "x = 1");
    }

    // A `!` inside a closed string must not survive to confuse the
    // comment strip: quote-stripping runs first.
    #[test]
    fn round_trip_removes_comment_after_bang_in_string() {
        let line = r#"WRITE(*,*) "warn!"  ! comment"#;
        assert_eq!(cleaned(line), "WRITE(*,*)   ");
    }

    #[test]
    fn round_trip_on_empty_line() {
        assert_eq!(cleaned(""), "");
    }
}
