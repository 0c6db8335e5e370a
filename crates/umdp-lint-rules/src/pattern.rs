//! Regex construction helpers.
//!
//! All rule patterns are compiled once at first use via `LazyLock`
//! statics in the rule modules.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Builds a case-insensitive regex from a compile-time constant pattern.
///
/// # Panics
///
/// Panics if the pattern is invalid. Acceptable because every pattern in
/// this crate is a compile-time constant exercised by tests; the panic
/// would occur at first access of the owning `LazyLock` static.
pub(crate) fn build_re(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|_| panic!("invalid regex pattern: {pattern}"))
}

/// Builds a case-sensitive regex from a compile-time constant pattern.
///
/// # Panics
///
/// Panics if the pattern is invalid, as for [`build_re`].
pub(crate) fn build_re_exact(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|_| panic!("invalid regex pattern: {pattern}"))
}

/// Word tokenizer shared by the scans that test words against a constant
/// set (keywords, intrinsics, deprecated identifiers).
pub(crate) static WORD: LazyLock<Regex> = LazyLock::new(|| build_re_exact(r"\b\w+\b"));
