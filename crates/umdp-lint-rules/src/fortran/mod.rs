//! Fortran compliance rules.

mod keywords;
mod preprocessor;
mod statements;
mod unit;

pub use keywords::{
    capitalised_keywords, dimension_forbidden, forbidden_keywords, forbidden_operators,
    obsolescent_fortran_intrinsic, unseparated_keywords,
};
pub use preprocessor::{
    cpp_comment, cpp_ifdef, omp_missing_dollar, openmp_sentinels_in_column_one, svn_keyword_subst,
};
pub use statements::{
    ampersand_continuation, exit_stmt_label, go_to_other_than_9999, intrinsic_modules,
    lowercase_variable_names, printstar, printstatus_mod, read_unit_args, um_fort_flush, write6,
    write_using_default_format,
};
pub use unit::{
    array_init_form, check_code_owner, check_crown_copyright, forbidden_stop, implicit_none,
    intrinsic_as_variable,
};
