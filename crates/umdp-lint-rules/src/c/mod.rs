//! C compliance rules.

mod preprocessor;
mod source;

pub use preprocessor::{
    c_ifdef_defines, c_openmp_define_no_combine, c_openmp_define_not,
    c_openmp_define_pair_thread_utils, c_protect_omp_pragma,
};
pub use source::{c_deprecated, c_final_newline, c_integral_format_specifiers};
