//! # umdp-lint-core
//!
//! Core framework for checking Fortran and C source against the UMDP3
//! coding standard.
//!
//! This crate provides the building blocks the rule catalog is written
//! against:
//!
//! - [`SourceUnit`] — the immutable, in-memory line sequence for one file
//! - [`normalize`] — quote and comment stripping applied before matching
//! - [`Collector`] — the lock-serialized store of diagnostic messages
//! - [`Constants`] — the immutable keyword and identifier sets
//! - [`RuleSpec`] — a named rule descriptor wrapping a pure rule function
//! - [`Checker`] — the facade that owns the constants and the collector
//!
//! The core performs no I/O: callers load files into a [`SourceUnit`] and
//! decide which rule tables to apply. Rules are pure functions over the
//! unit's lines returning a failure count; diagnostics go through the
//! shared [`Collector`], which the caller must [`Collector::reset`]
//! between files.
//!
//! ## Example
//!
//! ```ignore
//! use umdp_lint_core::{Checker, SourceUnit, UnitKind};
//!
//! let checker = Checker::new();
//! let unit = SourceUnit::from_text(UnitKind::Fortran, "IMPLICIT NONE\n");
//! let report = checker.check_unit(&rules, &unit);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checker;
mod collector;
mod constants;
mod report;
mod rule;
mod source;

/// Quote and comment stripping applied before pattern matching.
pub mod normalize;

pub use checker::Checker;
pub use collector::Collector;
pub use constants::Constants;
pub use report::{FailedCheck, UnitReport};
pub use rule::{RuleFn, RuleScope, RuleSpec};
pub use source::{SourceUnit, UnitKind};
