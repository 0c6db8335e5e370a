//! Immutable constant sets shared by the rule catalog.

use std::collections::HashSet;

/// Fortran keywords and intrinsic procedure names whose occurrences must
/// be written in upper case.
const FORTRAN_KEYWORDS: &[&str] = &[
    "ABORT", "ABS", "ABSTRACT", "ACCESS", "ACHAR", "ACOS", "ACOSD", "ACOSH",
    "ACTION", "ADJUSTL", "ADJUSTR", "ADVANCE", "AIMAG", "AINT", "ALARM", "ALGAMA",
    "ALL", "ALLOCATABLE", "ALLOCATE", "ALLOCATED", "ALOG", "ALOG10", "AMAX0", "AMAX1",
    "AMIN0", "AMIN1", "AMOD", "AND", "ANINT", "ANY", "ASIN", "ASIND", "ASINH",
    "ASSIGN", "ASSIGNMENT", "ASSOCIATE", "ASSOCIATED", "ASYNCHRONOUS", "ATAN", "ATAN2",
    "ATAN2D", "ATAND", "ATANH", "ATOMIC_ADD", "ATOMIC_AND", "ATOMIC_CAS", "ATOMIC_DEFINE",
    "ATOMIC_FETCH_ADD", "ATOMIC_FETCH_AND", "ATOMIC_FETCH_OR", "ATOMIC_FETCH_XOR",
    "ATOMIC_INT_KIND", "ATOMIC_LOGICAL_KIND", "ATOMIC_OR", "ATOMIC_REF", "ATOMIC_XOR",
    "BACKSPACE", "BACKTRACE", "BESJ0", "BESJ1", "BESJN", "BESSEL_J0", "BESSEL_J1",
    "BESSEL_JN", "BESSEL_Y0", "BESSEL_Y1", "BESSEL_YN", "BESY0", "BESY1", "BESYN",
    "BGE", "BGT", "BIND", "BIT_SIZE", "BLANK", "BLE", "BLOCK", "BLT", "BTEST",
    "CABS", "CALL", "CASE", "CEILING", "CHAR", "CHARACTER", "CLASS", "CLOSE",
    "CMPLX", "CODIMENSION", "COMMAND_ARGUMENT_COUNT", "COMMON", "COMPILER_OPTIONS",
    "COMPILER_VERSION", "COMPLEX", "CONJG", "CONTAINS", "CONTINUE", "COS", "COSD",
    "COSH", "COUNT", "CPU_TIME", "CSHIFT", "CYCLE", "DATA", "DATE_AND_TIME",
    "DBLE", "DEALLOCATE", "DEFAULT", "DELIM", "DIMENSION", "DIMAG", "DIRECT",
    "DO", "DOT_PRODUCT", "DOUBLE", "DPROD", "DREAL", "DTIME", "ELEMENTAL",
    "ELSE", "ELSEIF", "ELSEWHERE", "END", "ENDDO", "ENDFILE", "ENDIF", "ENTRY",
    "ENUM", "ENUMERATOR", "EOSHIFT", "EPSILON", "ERROR", "ETIME", "EXECUTE_COMMAND_LINE",
    "EXIT", "EXP", "EXPONENT", "EXTENDS", "EXTERNAL", "EXTRACT", "FALSE", "FILE",
    "FINAL", "FLOAT", "FLOOR", "FLUSH", "FMT", "FORALL", "FORMAT", "FORMATTED",
    "FRACTION", "FUNCTION", "GAMMA", "GENERIC", "GET_COMMAND", "GET_COMMAND_ARGUMENT",
    "GET_ENVIRONMENT_VARIABLE", "GOTO", "HUGE", "IACHAR", "IAND", "IARG", "IBCLR",
    "IBITS", "IBSET", "ICHAR", "IDATE", "IEOR", "IF", "IFIX", "IMAG", "IMPLICIT",
    "IMPORT", "IN", "INCLUDE", "INDEX", "INOUT", "INQUIRE", "INT", "INTEGER",
    "INTENT", "INTERFACE", "INTRINSIC", "IOR", "IOSTAT", "ISHFT", "ISHFTC",
    "IS_IOSTAT_END", "IS_IOSTAT_EOR", "ITIME", "KIND", "LBOUND", "LEADZ",
    "LEN", "LEN_TRIM", "LGE", "LGT", "LLE", "LLT", "LOG", "LOG10", "LOGICAL",
    "MATMUL", "MAX", "MAXEXPONENT", "MAXLOC", "MAXVAL", "MERGE", "MIN",
    "MINEXPONENT", "MINLOC", "MINVAL", "MOD", "MODULE", "MODULO", "MOVE_ALLOC",
    "MVBITS", "NAMELIST", "NEAREST", "NEW_LINE", "NINT", "NON_INTRINSIC",
    "NON_OVERRIDABLE", "NOPASS", "NOT", "NULL", "NULLIFY", "NUMERIC_STORAGE_SIZE",
    "ONLY", "OPEN", "OPERATOR", "OPTIONAL", "OR", "OUT", "PACK", "PARAMETER",
    "PASS", "PAUSE", "POINTER", "POPPAR", "POPCNT", "PRECISION", "PRESENT",
    "PRINT", "PRIVATE", "PROCEDURE", "PRODUCT", "PROGRAM", "PROTECTED", "PUBLIC",
    "PURE", "PUSHPAR", "RADIX", "RANDOM_NUMBER", "RANDOM_SEED", "RANGE", "READ",
    "REAL", "RECURSIVE", "REPEAT", "RESHAPE", "RESULT", "RETURN", "REWIND",
    "RRSPACING", "SAME_TYPE_AS", "SAVE", "SCALE", "SCAN", "SELECT", "SELECTED_CHAR_KIND",
    "SELECTED_INT_KIND", "SELECTED_REAL_KIND", "SEQUENCE", "SET_EXPONENT", "SHAPE",
    "SIGN", "SIN", "SIND", "SINH", "SIZE", "SNGL", "SPACING", "SPREAD", "SQRT",
    "STOP", "STORAGE_SIZE", "SUM", "SUBROUTINE", "SYSTEM_CLOCK", "TAN", "TAND",
    "TANH", "TARGET", "THEN", "TIME", "TINY", "TRANSFER", "TRANSPOSE", "TRIM",
    "TRUE", "TYPE", "UBOUND", "UNFORMATTED", "UNPACK", "USE", "VALUE", "VERIFY",
    "VOLATILE", "WHERE", "WHILE", "WRITE",
];

/// Archaic intrinsics superseded by generic equivalents.
const OBSOLESCENT_INTRINSICS: &[&str] = &[
    "ALOG", "ALOG10", "AMAX0", "AMAX1", "AMIN0", "AMIN1", "AMOD", "CABS",
    "DABS", "DACOS", "DASIN", "DATAN", "DATAN2", "DCOS", "DCOSH", "DDIM",
    "DEXP", "DINT", "DLOG", "DLOG10", "DMAX1", "DMIN1", "DMOD", "DNINT",
    "DPROD", "DREAL", "DSIGN", "DSIN", "DSINH", "DSQRT", "DTAN", "DTANH",
    "FLOAT", "IABS", "IDIM", "IDINT", "IDNINT", "IFIX", "ISIGN", "MAX0",
    "MAX1", "MIN0", "MIN1", "SNGL",
];

/// C library identifiers whose use is prohibited.
const DEPRECATED_C_IDENTIFIERS: &[&str] = &["gets", "tmpnam", "tempnam", "mktemp"];

/// Immutable constant sets loaded once at [`Checker`](crate::Checker)
/// construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Constants {
    fortran_keywords: HashSet<&'static str>,
    obsolescent_intrinsics: HashSet<&'static str>,
    deprecated_c_identifiers: HashSet<&'static str>,
    retired_ifdefs: Vec<String>,
}

impl Default for Constants {
    fn default() -> Self {
        Self::new()
    }
}

impl Constants {
    /// Builds the standard constant sets.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fortran_keywords: FORTRAN_KEYWORDS.iter().copied().collect(),
            obsolescent_intrinsics: OBSOLESCENT_INTRINSICS.iter().copied().collect(),
            deprecated_c_identifiers: DEPRECATED_C_IDENTIFIERS.iter().copied().collect(),
            retired_ifdefs: Vec::new(),
        }
    }

    /// Adds preprocessor macro names that are due for retirement.
    ///
    /// The standard set is empty; projects supply their own list.
    #[must_use]
    pub fn with_retired_ifdefs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.retired_ifdefs.extend(names.into_iter().map(Into::into));
        self
    }

    /// Returns true when `word` (already upper-cased) is a Fortran keyword.
    #[must_use]
    pub fn is_fortran_keyword(&self, word: &str) -> bool {
        self.fortran_keywords.contains(word)
    }

    /// The obsolescent intrinsic names, for per-entry scans.
    #[must_use]
    pub fn obsolescent_intrinsics(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.obsolescent_intrinsics.iter().copied()
    }

    /// The deprecated C identifier names, for per-entry scans.
    #[must_use]
    pub fn deprecated_c_identifiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.deprecated_c_identifiers.iter().copied()
    }

    /// Macro names due for retirement.
    #[must_use]
    pub fn retired_ifdefs(&self) -> &[String] {
        &self.retired_ifdefs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_is_exact_uppercase() {
        let constants = Constants::new();
        assert!(constants.is_fortran_keyword("DO"));
        assert!(constants.is_fortran_keyword("IMPLICIT"));
        assert!(!constants.is_fortran_keyword("do"));
        assert!(!constants.is_fortran_keyword("NOT_A_KEYWORD"));
    }

    #[test]
    fn obsolescent_set_contains_known_entries() {
        let constants = Constants::new();
        let intrinsics: Vec<_> = constants.obsolescent_intrinsics().collect();
        assert!(intrinsics.contains(&"ALOG"));
        assert!(intrinsics.contains(&"SNGL"));
    }

    #[test]
    fn retired_ifdefs_default_empty_and_extendable() {
        let constants = Constants::new();
        assert!(constants.retired_ifdefs().is_empty());

        let constants = constants.with_retired_ifdefs(["OLD_MACRO"]);
        assert_eq!(constants.retired_ifdefs(), ["OLD_MACRO"]);
    }
}
