//! Rule catalog for UMDP3 source compliance.
//!
//! Each rule is a free function with the [`RuleFn`] signature: it takes
//! the shared constants, a diagnostic collector and a source unit, and
//! returns the number of failures found. Rules never mutate the unit and
//! hold no state between calls, so a catalog table can be run against
//! any number of units in any order, including concurrently.
//!
//! The [`catalog`] module groups the rules into the dispatch tables the
//! checking driver iterates: per-language line tables, per-language unit
//! tables and a universal table.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod c;
pub mod catalog;
pub mod fortran;
mod pattern;
pub mod universal;

pub use catalog::{
    all_rules, tables_for, C_LINE_RULES, C_UNIT_RULES, FORTRAN_LINE_RULES, FORTRAN_UNIT_RULES,
    UNIVERSAL_RULES,
};
pub use umdp_lint_core::{Checker, Collector, Constants, RuleFn, RuleScope, RuleSpec, SourceUnit};
